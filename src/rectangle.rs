use crate::point::Point;
use derive_more::Display;

/// 轴对齐矩形区域 - 四叉树每个节点的固定边界
///
/// 以原点 (x, y) 和宽高 (w, h) 描述。构造时不做校验，
/// 但只有 w >= 0 且 h >= 0 时包含判断才有意义（见 [`Rectangle::is_valid`]）。
#[derive(Debug, Display, Clone, Copy, PartialEq)]
#[display(fmt = "[{}, {}, {}, {}]", x, y, w, h)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rectangle {
    /// 创建新的矩形
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Rectangle { x, y, w, h }
    }

    /// 右边界
    pub fn max_x(&self) -> f64 {
        self.x + self.w
    }

    /// 下边界
    pub fn max_y(&self) -> f64 {
        self.y + self.h
    }

    /// 计算矩形中心点
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// 宽高非负且各分量有限
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.w.is_finite()
            && self.h.is_finite()
            && self.w >= 0.0
            && self.h >= 0.0
    }

    /// 判断点是否落在矩形内
    ///
    /// 两个轴的上下边界都是闭区间，所以恰好落在两个相邻子矩形
    /// 公共边上的点会同时被两者包含。
    pub fn contains(&self, point: &Point) -> bool {
        self.x <= point.x && point.x <= self.max_x() &&
        self.y <= point.y && point.y <= self.max_y()
    }

    /// 将矩形等分为四个子矩形，固定顺序为 NW, NE, SW, SE
    ///
    /// 西侧/北侧子矩形的宽高为 w/2、h/2；东侧/南侧子矩形从中线一直延伸到
    /// 父矩形的远边，宽高取 `max - mid`。原点非负时该减法是精确的，
    /// 因此东侧/南侧子矩形的远边与父矩形完全重合，父矩形内的每个点
    /// 至少属于一个子矩形。奇数宽高会得到 .5 结尾的子矩形。
    pub fn subdivide(&self) -> [Rectangle; 4] {
        let w2 = self.w / 2.0;
        let h2 = self.h / 2.0;
        let mid_x = self.x + w2;
        let mid_y = self.y + h2;
        let east_w = self.max_x() - mid_x;
        let south_h = self.max_y() - mid_y;
        [
            Rectangle::new(self.x, self.y, w2, h2),
            Rectangle::new(mid_x, self.y, east_w, h2),
            Rectangle::new(self.x, mid_y, w2, south_h),
            Rectangle::new(mid_x, mid_y, east_w, south_h),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_contains_is_inclusive() {
        let rect = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(&Point::new(5.0, 5.0)));
        assert!(rect.contains(&Point::new(0.0, 0.0)));
        assert!(rect.contains(&Point::new(10.0, 10.0)));
        assert!(rect.contains(&Point::new(10.0, 0.0)));
        assert!(!rect.contains(&Point::new(10.1, 5.0)));
        assert!(!rect.contains(&Point::new(5.0, -0.1)));
    }

    #[test]
    fn test_rectangle_subdivide_order() {
        let rect = Rectangle::new(0.0, 0.0, 128.0, 64.0);
        let [nw, ne, sw, se] = rect.subdivide();
        assert_eq!(nw, Rectangle::new(0.0, 0.0, 64.0, 32.0));
        assert_eq!(ne, Rectangle::new(64.0, 0.0, 64.0, 32.0));
        assert_eq!(sw, Rectangle::new(0.0, 32.0, 64.0, 32.0));
        assert_eq!(se, Rectangle::new(64.0, 32.0, 64.0, 32.0));
    }

    #[test]
    fn test_rectangle_subdivide_odd_extents() {
        let rect = Rectangle::new(1.0, 3.0, 127.0, 33.0);
        let children = rect.subdivide();

        assert_eq!(children[0], Rectangle::new(1.0, 3.0, 63.5, 16.5));
        assert_eq!(children[3], Rectangle::new(64.5, 19.5, 63.5, 16.5));
        // 子矩形的外边界与父矩形完全重合
        assert_eq!(children[3].max_x(), rect.max_x());
        assert_eq!(children[3].max_y(), rect.max_y());

        // 网格上每个父矩形内的点至少属于一个子矩形，反之亦然
        for i in 0..=254 {
            for j in 0..=66 {
                let p = Point::new(1.0 + i as f64 * 0.5, 3.0 + j as f64 * 0.5);
                let in_child = children.iter().any(|c| c.contains(&p));
                assert_eq!(rect.contains(&p), in_child, "mismatch at {}", p);
            }
        }
    }

    #[test]
    fn test_rectangle_subdivide_keeps_far_edges_for_inexact_extents() {
        for (w, h) in [(96.11398669911708, 0.1 * 3.0), (1000.0 / 3.0, 77.7), (0.7, 13.13)] {
            let mut level = vec![Rectangle::new(0.0, 0.0, w, h)];
            for _ in 0..6 {
                let mut next = Vec::with_capacity(level.len() * 4);
                for rect in &level {
                    let children = rect.subdivide();
                    let [_, ne, sw, se] = children;
                    assert_eq!(ne.max_x(), rect.max_x());
                    assert_eq!(se.max_x(), rect.max_x());
                    assert_eq!(sw.max_y(), rect.max_y());
                    assert_eq!(se.max_y(), rect.max_y());

                    let center = rect.center();
                    let far_edge = [
                        Point::new(rect.max_x(), rect.y),
                        Point::new(rect.max_x(), center.y),
                        Point::new(rect.x, rect.max_y()),
                        Point::new(center.x, rect.max_y()),
                        Point::new(rect.max_x(), rect.max_y()),
                    ];
                    for p in far_edge {
                        assert!(rect.contains(&p));
                        assert!(children.iter().any(|c| c.contains(&p)), "{} not covered in {}", p, rect);
                    }
                    next.extend(children);
                }
                level = next;
            }
        }
    }

    #[test]
    fn test_rectangle_shared_edge_in_both_children() {
        let [nw, ne, sw, se] = Rectangle::new(0.0, 0.0, 10.0, 10.0).subdivide();
        let center = Point::new(5.0, 5.0);
        assert!(nw.contains(&center));
        assert!(ne.contains(&center));
        assert!(sw.contains(&center));
        assert!(se.contains(&center));
    }

    #[test]
    fn test_rectangle_validity() {
        assert!(Rectangle::new(0.0, 0.0, 0.0, 0.0).is_valid());
        assert!(!Rectangle::new(0.0, 0.0, -1.0, 5.0).is_valid());
        assert!(!Rectangle::new(0.0, 0.0, f64::NAN, 5.0).is_valid());
    }

    #[test]
    fn test_rectangle_display() {
        assert_eq!(Rectangle::new(0.0, 0.0, 128.0, 64.5).to_string(), "[0, 0, 128, 64.5]");
        assert_eq!(Rectangle::new(0.0, 0.0, 10.0, 10.0).center(), Point::new(5.0, 5.0));
    }
}
