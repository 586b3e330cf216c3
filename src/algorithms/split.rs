use crate::node::{Node, Quadrant};
use crate::quadtree::QuadTree;
use std::collections::VecDeque;
use tracing::{trace, warn};

/// 节点分裂
impl Node {
    /// 把叶子变为内部节点
    ///
    /// 按 NW, NE, SW, SE 顺序创建四个空叶子，再用先匹配者胜出的规则把
    /// 原点桶中的点逐个分配下去。已经是内部节点时返回 false。
    pub(crate) fn split_leaf(&mut self) -> bool {
        let Node::Leaf { bounds, bucket } = self else {
            return false;
        };
        let bounds = *bounds;
        let points = std::mem::take(bucket);

        let mut children = bounds.subdivide().map(Node::empty);
        for point in points {
            let quadrant = Quadrant::route(&bounds, &children, &point);
            if let Node::Leaf { bucket, .. } = &mut children[quadrant.index()] {
                bucket.push(point);
            }
        }

        *self = Node::Internal {
            bounds,
            children: Box::new(children),
        };
        true
    }
}

/// 分裂扫描
impl QuadTree {
    /// 从 start 开始广度优先地分裂过满的节点，返回分裂次数
    ///
    /// 持有不超过一个点的节点是稳定的；持有多个点的叶子被分裂，
    /// 四个子节点随后入队，从而可以连续向下分裂任意多层。
    /// 深度达到 max_depth 的叶子不再分裂，保留全部点。
    pub(crate) fn split_sweep(start: &mut Node, start_depth: usize, max_depth: usize) -> usize {
        let mut splits = 0;
        let mut queue = VecDeque::from([(start, start_depth)]);

        while let Some((node, depth)) = queue.pop_front() {
            if node.len() <= 1 {
                continue;
            }
            if depth >= max_depth {
                warn!(
                    "Leaf {} reached max depth {} holding {} points",
                    node.bounds(),
                    max_depth,
                    node.len()
                );
                continue;
            }

            if node.split_leaf() {
                splits += 1;
                trace!("Split node {} at depth {}", node.bounds(), depth);
            }

            if let Node::Internal { children, .. } = node {
                queue.extend(children.iter_mut().map(|child| (child, depth + 1)));
            }
        }

        splits
    }
}
