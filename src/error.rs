use crate::point::Point;
use crate::rectangle::Rectangle;

/// 四叉树操作错误类型
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuadTreeError {
    /// 查询或插入的点落在根矩形之外
    #[error("Point ({x}, {y}) is outside the tree bounds")]
    OutOfBounds { x: f64, y: f64 },

    /// 叶子中存储的点不在叶子自身的边界内，说明分裂逻辑有缺陷
    #[error("Invariant violated: point {point} lies outside its leaf bounds {bounds}")]
    InvariantViolation { point: Point, bounds: Rectangle },

    /// 未达到最大深度的叶子持有多于一个点
    #[error("Leaf {bounds} at depth {depth} holds {len} points but was never split")]
    OverfullLeaf { len: usize, depth: usize, bounds: Rectangle },
}

impl QuadTreeError {
    pub(crate) fn out_of_bounds(point: &Point) -> Self {
        QuadTreeError::OutOfBounds { x: point.x, y: point.y }
    }
}
