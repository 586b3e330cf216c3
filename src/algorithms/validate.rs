use crate::error::QuadTreeError;
use crate::node::Node;
use crate::quadtree::QuadTree;

/// 不变量检查
impl QuadTree {
    /// 检查每个非空点桶的第一个点都落在所属节点的边界内
    ///
    /// 调试用，树内部不会调用。失败意味着分裂逻辑本身有缺陷。
    pub fn assert_correct(&self) -> Result<(), QuadTreeError> {
        for node in self {
            if let Some(point) = node.bucket().first() {
                if !node.bounds().contains(point) {
                    return Err(QuadTreeError::InvariantViolation {
                        point: *point,
                        bounds: *node.bounds(),
                    });
                }
            }
        }
        Ok(())
    }

    /// 比 [`QuadTree::assert_correct`] 更严格的完整检查
    ///
    /// - 每个点桶中的每个点都落在叶子边界内
    /// - 深度未达到 max_depth 的叶子至多持有一个点
    pub fn validate(&self) -> Result<(), QuadTreeError> {
        let mut stack: Vec<(&Node, usize)> = vec![(self.root(), 0)];

        while let Some((node, depth)) = stack.pop() {
            match node {
                Node::Leaf { bounds, bucket } => {
                    if let Some(point) = bucket.iter().find(|point| !bounds.contains(point)) {
                        return Err(QuadTreeError::InvariantViolation {
                            point: *point,
                            bounds: *bounds,
                        });
                    }
                    if bucket.len() > 1 && depth < self.max_depth() {
                        return Err(QuadTreeError::OverfullLeaf {
                            len: bucket.len(),
                            depth,
                            bounds: *bounds,
                        });
                    }
                }
                Node::Internal { children, .. } => {
                    stack.extend(children.iter().map(|child| (child, depth + 1)));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;
    use crate::rectangle::Rectangle;

    #[test]
    fn test_assert_correct_on_valid_tree() {
        let mut tree = QuadTree::new(Vec::new(), 128.0, 128.0);
        assert!(tree.assert_correct().is_ok());

        for (x, y) in [(10.0, 10.0), (100.0, 100.0), (64.0, 64.0), (0.0, 128.0), (127.0, 3.0)] {
            tree.add_node(Point::new(x, y)).unwrap();
            assert!(tree.assert_correct().is_ok());
            assert!(tree.validate().is_ok());
        }
    }

    #[test]
    fn test_validate_allows_crowded_leaf_at_max_depth() {
        let mut tree = QuadTree::with_max_depth(Vec::new(), 16.0, 16.0, 3);
        tree.add_node(Point::new(5.0, 5.0)).unwrap();
        tree.add_node(Point::new(5.0, 5.0)).unwrap();
        assert_eq!(tree.depth(), 3);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_violations_are_reported() {
        let bounds = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let stray = Point::new(50.0, 50.0);

        let mut tree = QuadTree::new(Vec::new(), 10.0, 10.0);
        *tree.root_mut() = Node::new_leaf(bounds, vec![stray]);
        assert_eq!(
            tree.assert_correct(),
            Err(QuadTreeError::InvariantViolation { point: stray, bounds })
        );
        assert!(tree.validate().is_err());

        // assert_correct 只检查第一个点，validate 检查全部
        *tree.root_mut() = Node::new_leaf(bounds, vec![Point::new(1.0, 1.0), stray]);
        assert!(tree.assert_correct().is_ok());
        assert!(matches!(
            tree.validate(),
            Err(QuadTreeError::InvariantViolation { .. })
        ));

        *tree.root_mut() = Node::new_leaf(bounds, vec![Point::new(1.0, 1.0), Point::new(9.0, 9.0)]);
        assert!(matches!(
            tree.validate(),
            Err(QuadTreeError::OverfullLeaf { len: 2, depth: 0, .. })
        ));
    }
}
