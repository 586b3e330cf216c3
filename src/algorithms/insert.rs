use crate::error::QuadTreeError;
use crate::point::Point;
use crate::quadtree::QuadTree;
use tracing::debug;

/// 插入操作相关算法
impl QuadTree {
    /// 插入一个点
    ///
    /// 找到拥有该点的叶子，把点追加到叶子的点桶，再从该叶子开始执行分裂；
    /// 分裂可能连续向下穿过多层。点必须落在树的范围内，否则返回
    /// [`QuadTreeError::OutOfBounds`]。不做去重，重复的点会一直下沉到最大深度。
    pub fn add_node(&mut self, point: Point) -> Result<(), QuadTreeError> {
        let max_depth = self.max_depth();
        let (leaf, depth) = self.search_mut(&point)?;

        match leaf.bucket_mut() {
            Some(bucket) => bucket.push(point),
            None => unreachable!("search_mut always ends at a leaf"),
        }
        let splits = QuadTree::split_sweep(leaf, depth, max_depth);

        self.increment_size();
        debug!(
            "Added point {} at depth {} ({} splits), size = {}",
            point,
            depth,
            splits,
            self.size()
        );
        Ok(())
    }
}
