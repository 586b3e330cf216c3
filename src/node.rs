use crate::point::Point;
use crate::rectangle::Rectangle;
use std::fmt;

/// 子节点所在的象限
///
/// 顺序固定为 NW, NE, SW, SE，与 [`Rectangle::subdivide`] 的输出一致，
/// 也是"先匹配者胜出"规则使用的顺序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Quadrant {
    /// 按固定顺序排列的全部象限
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthWest,
        Quadrant::NorthEast,
        Quadrant::SouthWest,
        Quadrant::SouthEast,
    ];

    /// 象限在子节点数组中的下标
    pub fn index(self) -> usize {
        match self {
            Quadrant::NorthWest => 0,
            Quadrant::NorthEast => 1,
            Quadrant::SouthWest => 2,
            Quadrant::SouthEast => 3,
        }
    }

    /// 为点选择子节点：第一个边界包含该点的子节点胜出
    ///
    /// [`Rectangle::subdivide`] 保证父节点内的点总会被某个子节点包含，
    /// 只有父节点之外的点才会得到 `None`。
    pub fn select(children: &[Node; 4], point: &Point) -> Option<Quadrant> {
        Quadrant::ALL
            .into_iter()
            .find(|quadrant| children[quadrant.index()].bounds().contains(point))
    }

    /// 在内部节点 bounds 中为点选出子节点，调用方保证点位于 bounds 之内
    pub(crate) fn route(bounds: &Rectangle, children: &[Node; 4], point: &Point) -> Quadrant {
        match Quadrant::select(children, point) {
            Some(quadrant) => quadrant,
            None => unreachable!("point {} inside {} is not covered by any child", point, bounds),
        }
    }
}

/// 四叉树节点
///
/// 叶子节点持有有序的点桶；内部节点恰好拥有四个子节点，且没有点桶。
/// 用枚举表达这两种状态，"四个子节点要么全有要么全无"由类型本身保证。
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// 叶子节点：唯一允许存放数据点的节点
    Leaf { bounds: Rectangle, bucket: Vec<Point> },
    /// 内部节点：子节点顺序为 NW, NE, SW, SE
    Internal { bounds: Rectangle, children: Box<[Node; 4]> },
}

impl Node {
    /// 创建叶子节点，点桶可以预先填充
    pub fn new_leaf(bounds: Rectangle, bucket: Vec<Point>) -> Self {
        Node::Leaf { bounds, bucket }
    }

    /// 创建空的叶子节点
    pub fn empty(bounds: Rectangle) -> Self {
        Node::new_leaf(bounds, Vec::new())
    }

    /// 节点的固定边界
    pub fn bounds(&self) -> &Rectangle {
        match self {
            Node::Leaf { bounds, .. } => bounds,
            Node::Internal { bounds, .. } => bounds,
        }
    }

    /// 节点持有的点；内部节点总是返回空切片
    pub fn bucket(&self) -> &[Point] {
        match self {
            Node::Leaf { bucket, .. } => bucket,
            Node::Internal { .. } => &[],
        }
    }

    pub(crate) fn bucket_mut(&mut self) -> Option<&mut Vec<Point>> {
        match self {
            Node::Leaf { bucket, .. } => Some(bucket),
            Node::Internal { .. } => None,
        }
    }

    /// 点桶中的点数
    pub fn len(&self) -> usize {
        self.bucket().len()
    }

    /// 点桶是否为空
    pub fn is_empty(&self) -> bool {
        self.bucket().is_empty()
    }

    /// 是否为叶子节点（没有子节点）
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// 内部节点的四个子节点
    pub fn children(&self) -> Option<&[Node; 4]> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { children, .. } => Some(&**children),
        }
    }

    /// 指定象限的子节点
    pub fn child(&self, quadrant: Quadrant) -> Option<&Node> {
        self.children().map(|children| &children[quadrant.index()])
    }

    pub(crate) fn child_mut(&mut self, quadrant: Quadrant) -> Option<&mut Node> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { children, .. } => Some(&mut children[quadrant.index()]),
        }
    }

    /// 前序遍历以该节点为根的子树：先自身，再依次遍历 NW, NE, SW, SE 子树
    ///
    /// 每次调用都返回一个新的迭代器。
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    /// 子树深度，单个叶子为 0
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { children, .. } => {
                1 + children.iter().map(Node::depth).max().unwrap_or(0)
            }
        }
    }

    /// 子树中叶子的数量
    pub fn leaf_count(&self) -> usize {
        self.iter().filter(|node| node.is_leaf()).count()
    }

    /// 子树中所有点的数量
    pub fn point_count(&self) -> usize {
        self.iter().map(Node::len).sum()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let points: Vec<String> = self.bucket().iter().map(ToString::to_string).collect();
        write!(f, "<[{}], {}>", points.join(", "), self.bounds())
    }
}

/// 节点的前序遍历迭代器，使用显式栈代替递归
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Node::Internal { children, .. } = node {
            // 逆序压栈，使 NW 最先弹出
            self.stack.extend(children.iter().rev());
        }
        Some(node)
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = &'a Node;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
