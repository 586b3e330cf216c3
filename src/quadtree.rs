use crate::config::TreeConfig;
use crate::node::{Iter, Node};
use crate::point::Point;
use crate::rectangle::Rectangle;
use tracing::{debug, warn};

/// 默认最大分裂深度（根节点深度为 0）
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// 自适应点四叉树主结构
///
/// 每当某个区域积累了多于一个点，就把它等分为四个象限，
/// 直到每个叶子至多持有一个点，或叶子到达最大深度。
#[derive(Debug, Clone)]
pub struct QuadTree {
    /// 根节点，边界为 [0, width] × [0, height]
    root: Node,
    /// 通过 add_node 成功插入的点数（不含构造时的种子点）
    size: usize,
    /// 最大分裂深度
    ///
    /// 重合或过于接近的点无法通过反复对半分开，到达该深度的叶子
    /// 不再分裂，允许持有多个点。
    max_depth: usize,
}

impl QuadTree {
    /// 用种子点和区域宽高创建四叉树
    ///
    /// 种子点不计入 [`QuadTree::size`]；构造完成前会先执行一次分裂，
    /// 所以种子点较密集时树会立即被划分成稳定形状。
    pub fn new(seed: impl IntoIterator<Item = Point>, width: f64, height: f64) -> Self {
        Self::with_max_depth(seed, width, height, DEFAULT_MAX_DEPTH)
    }

    /// 使用配置中的区域大小和最大深度创建四叉树
    pub fn with_config(seed: impl IntoIterator<Item = Point>, config: &TreeConfig) -> Self {
        Self::with_max_depth(seed, config.width, config.height, config.max_depth)
    }

    /// 指定最大分裂深度创建四叉树
    pub fn with_max_depth(
        seed: impl IntoIterator<Item = Point>,
        width: f64,
        height: f64,
        max_depth: usize,
    ) -> Self {
        let bounds = Rectangle::new(0.0, 0.0, width, height);
        let (bucket, outside): (Vec<Point>, Vec<Point>) =
            seed.into_iter().partition(|point| bounds.contains(point));

        // 超出范围的种子点永远无法被 search 找到，直接丢弃
        for point in &outside {
            warn!("Discarding seed point {} outside tree bounds {}", point, bounds);
        }

        let mut root = Node::new_leaf(bounds, bucket);
        let splits = QuadTree::split_sweep(&mut root, 0, max_depth);
        debug!(
            "Created quadtree over {} with {} seed points ({} splits, max depth {})",
            bounds,
            root.point_count(),
            splits,
            max_depth
        );

        QuadTree {
            root,
            size: 0,
            max_depth,
        }
    }

    /// 通过 add_node 成功插入的点数
    pub fn size(&self) -> usize {
        self.size
    }

    /// 根节点
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// 整棵树覆盖的区域
    pub fn bounds(&self) -> &Rectangle {
        self.root.bounds()
    }

    /// 最大分裂深度
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// 树的深度，只有根叶子时为 0
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// 树中所有点的数量，包含种子点
    pub fn point_count(&self) -> usize {
        self.root.point_count()
    }

    /// 叶子数量
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// 前序遍历整棵树
    pub fn iter(&self) -> Iter<'_> {
        self.root.iter()
    }

    pub(crate) fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    pub(crate) fn increment_size(&mut self) {
        self.size += 1;
    }
}

impl<'a> IntoIterator for &'a QuadTree {
    type Item = &'a Node;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
