// 四叉树算法模块，每个子模块为 QuadTree 补充一组操作

pub mod search;
pub mod insert;
pub mod split;
pub mod validate;
pub mod debug;
