use crate::error::QuadTreeError;
use crate::node::{Node, Quadrant};
use crate::point::Point;
use crate::quadtree::QuadTree;

/// 搜索操作相关算法
impl QuadTree {
    /// 查找当前拥有该点的叶子
    ///
    /// 纯几何下降：从根开始，在每个内部节点按 NW, NE, SW, SE 的顺序
    /// 选择第一个包含该点的子节点。不要求点已经被插入过，
    /// 对从未插入的点也会返回将来会拥有它的叶子。
    pub fn search(&self, point: &Point) -> Result<&Node, QuadTreeError> {
        if !self.bounds().contains(point) {
            return Err(QuadTreeError::out_of_bounds(point));
        }

        let mut current = self.root();
        while let Node::Internal { bounds, children } = current {
            let quadrant = Quadrant::route(bounds, children, point);
            current = &children[quadrant.index()];
        }

        Ok(current)
    }

    /// 该点是否已存储在树中
    pub fn contains_point(&self, point: &Point) -> bool {
        self.search(point)
            .map(|leaf| leaf.bucket().contains(point))
            .unwrap_or(false)
    }

    /// 记录从根到目标叶子经过的象限
    pub(crate) fn choose_leaf_path(&self, point: &Point) -> Result<Vec<Quadrant>, QuadTreeError> {
        if !self.bounds().contains(point) {
            return Err(QuadTreeError::out_of_bounds(point));
        }

        let mut path = Vec::new();
        let mut current = self.root();
        while let Node::Internal { bounds, children } = current {
            let quadrant = Quadrant::route(bounds, children, point);
            path.push(quadrant);
            current = &children[quadrant.index()];
        }

        Ok(path)
    }

    /// 查找目标叶子的可变引用及其深度
    pub(crate) fn search_mut(&mut self, point: &Point) -> Result<(&mut Node, usize), QuadTreeError> {
        let path = self.choose_leaf_path(point)?;
        let depth = path.len();
        Ok((self.node_at_path_mut(&path), depth))
    }

    /// 沿 choose_leaf_path 给出的路径下降；路径上除终点外都是内部节点
    fn node_at_path_mut(&mut self, path: &[Quadrant]) -> &mut Node {
        let mut node = self.root_mut();
        for &quadrant in path {
            node = match node.child_mut(quadrant) {
                Some(child) => child,
                None => unreachable!("leaf path passes through a leaf at {}", quadrant.index()),
            };
        }
        node
    }
}
