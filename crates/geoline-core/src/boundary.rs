//! 视口边界与裁剪
//!
//! 可见区域是以原点为中心、边长为 2 的正方形（NDC 的 `[-1, 1]²`）。
//! 任意无限直线与凸四边形的边界要么不相交，要么恰好交于两点，
//! 裁剪即是求出这两个交点。

use crate::geometry::Line;
use crate::math::{points_close, Point2, COINCIDENCE_TOLERANCE};

/// 视口半边长
pub const HALF_EXTENT: f64 = 1.0;

/// 裁剪后的可绘制线段
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

/// 视口边界：上、下、左、右四条边，顺序固定
#[derive(Debug, Clone)]
pub struct Boundary {
    edges: [Line; 4],
}

impl Boundary {
    pub fn new() -> Self {
        let h = HALF_EXTENT;
        Self {
            edges: [
                // 上
                Line::from_points_unchecked(Point2::new(-h, h), Point2::new(h, h)),
                // 下
                Line::from_points_unchecked(Point2::new(-h, -h), Point2::new(h, -h)),
                // 左
                Line::from_points_unchecked(Point2::new(-h, -h), Point2::new(-h, h)),
                // 右
                Line::from_points_unchecked(Point2::new(h, -h), Point2::new(h, h)),
            ],
        }
    }

    /// 点是否在正方形内（含边界）
    pub fn contains(&self, point: &Point2) -> bool {
        let limit = HALF_EXTENT + COINCIDENCE_TOLERANCE;
        point.x.abs() <= limit && point.y.abs() <= limit
    }

    /// 把无限直线裁剪为视口内的线段
    ///
    /// 按上、下、左、右顺序与四条边精确求交，丢弃平行边以及落在正方形外的交点，
    /// 取前两个互不重合的交点。不足两个时（在视口外、只擦过一个角）返回 `None`。
    pub fn clip(&self, line: &Line) -> Option<Segment> {
        let mut first: Option<Point2> = None;

        for edge in &self.edges {
            let Some(hit) = line.crossing(edge) else {
                continue;
            };
            if !self.contains(&hit) {
                continue;
            }
            match first {
                None => first = Some(hit),
                Some(start) if points_close(&start, &hit, COINCIDENCE_TOLERANCE) => {}
                Some(start) => return Some(Segment::new(start, hit)),
            }
        }

        None
    }
}

impl Default for Boundary {
    fn default() -> Self {
        Self::new()
    }
}
