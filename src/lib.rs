//! # 自适应点四叉树
//!
//! 把一个矩形区域递归地等分为四个象限来存储二维点：
//! 每当某个区域积累了多于一个点，就立即分裂。
//!
//! ## 主要特性
//!
//! - 闭区间包含判断，公共边上的点按 NW, NE, SW, SE 顺序先匹配者胜出
//! - 插入后广度优先地连续分裂，直到每个叶子至多一个点
//! - 可配置的最大分裂深度，重合点不会导致无限分裂
//! - 显式栈实现的前序遍历迭代器
//!
//! ## 使用示例
//!
//! ```rust
//! use quadtree::{Point, QuadTree};
//!
//! let mut tree = QuadTree::new(Vec::new(), 128.0, 128.0);
//! tree.add_node(Point::new(10.0, 10.0)).unwrap();
//! tree.add_node(Point::new(100.0, 100.0)).unwrap();
//!
//! assert_eq!(tree.size(), 2);
//! let leaf = tree.search(&Point::new(10.0, 10.0)).unwrap();
//! assert!(leaf.bucket().contains(&Point::new(10.0, 10.0)));
//! assert!(tree.assert_correct().is_ok());
//! ```

pub mod point;
pub mod rectangle;
pub mod node;
pub mod quadtree;
pub mod algorithms;
pub mod error;
pub mod config;

use std::error::Error;

// 重新导出主要的公共接口
pub use point::Point;
pub use rectangle::Rectangle;
pub use node::{Iter, Node, Quadrant};
pub use quadtree::{QuadTree, DEFAULT_MAX_DEPTH};
pub use error::QuadTreeError;
pub use config::{QuadTreeConfig, TreeConfig};

pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;
