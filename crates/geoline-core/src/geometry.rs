//! 几何图元定义
//!
//! - 点 (Point)：二维位置，齐次坐标第三分量恒为 1
//! - 直线 (Line)：由有序点对 `(p, q)` 定义的无限直线
//!
//! 直线的派生量：
//! - 方向 `d = q - p`
//! - 法向 `n = (-d.y, d.x)`
//! - 隐式方程 `n.x·x + n.y·y + c = 0`，其中 `c = -n·p`
//! - 参数方程 `r(t) = p + d·t`

use crate::error::GeometryError;
use crate::math::{perpendicular, Point2, Point3, Vector2, Vector3, EPSILON};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub position: Point2,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: Point2::new(x, y),
        }
    }

    pub fn from_point2(position: Point2) -> Self {
        Self { position }
    }

    /// 齐次坐标 `(x, y, 1)`
    pub fn homogeneous(&self) -> Point3 {
        Point3::new(self.position.x, self.position.y, 1.0)
    }

    pub fn distance_to(&self, other: &Point2) -> f64 {
        (self.position - other).norm()
    }
}

/// 直线
///
/// 保存两个定义点的坐标副本：之后移动源点不会影响已创建的直线。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    p: Point2,
    q: Point2,
}

impl Line {
    /// 由两个不同的点创建直线
    ///
    /// 两点重合时法向为零向量，返回 `GeometryError::InvalidGeometry`。
    pub fn new(p: Point2, q: Point2) -> Result<Self, GeometryError> {
        if (q - p).norm_squared() == 0.0 {
            return Err(GeometryError::InvalidGeometry { p, q });
        }
        Ok(Self { p, q })
    }

    /// 内部使用：调用方已保证 `p != q`
    pub(crate) fn from_points_unchecked(p: Point2, q: Point2) -> Self {
        debug_assert!(p != q);
        Self { p, q }
    }

    pub fn p(&self) -> Point2 {
        self.p
    }

    pub fn q(&self) -> Point2 {
        self.q
    }

    /// 方向向量 `q - p`（未归一化）
    pub fn direction(&self) -> Vector2 {
        self.q - self.p
    }

    /// 法向量（方向逆时针旋转 90°，未归一化）
    pub fn normal(&self) -> Vector2 {
        perpendicular(&self.direction())
    }

    /// 两个定义点之间的距离
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// 隐式方程系数 `(a, b, c)`，满足 `a·x + b·y + c = 0`
    pub fn implicit_coefficients(&self) -> (f64, f64, f64) {
        let n = self.normal();
        (n.x, n.y, -n.dot(&self.p.coords))
    }

    /// 齐次形式 `(a, b, c)`，与 `Point::homogeneous()` 的点积即为隐式方程左侧
    pub fn homogeneous(&self) -> Vector3 {
        let (a, b, c) = self.implicit_coefficients();
        Vector3::new(a, b, c)
    }

    /// 参数方程在 `t` 处的取值
    pub fn point_at(&self, t: f64) -> Point2 {
        self.p + self.direction() * t
    }

    /// 与另一条直线求交（克莱姆法则）
    ///
    /// 两条法向构成的行列式绝对值小于 `EPSILON` 时视为平行，返回 `None`。
    pub fn intersection(&self, other: &Line) -> Option<Point2> {
        self.solve(other, EPSILON)
    }

    /// 精确求交：只有行列式恰为零时才视为平行
    ///
    /// 视口裁剪用它，以免与边界夹角很小的直线丢失交点。
    pub fn crossing(&self, other: &Line) -> Option<Point2> {
        self.solve(other, 0.0)
    }

    fn solve(&self, other: &Line, min_det: f64) -> Option<Point2> {
        let (a1, b1, c1) = self.implicit_coefficients();
        let (a2, b2, c2) = other.implicit_coefficients();

        let det = a1 * b2 - b1 * a2;
        if det == 0.0 || det.abs() < min_det {
            return None;
        }

        let x = (b1 * c2 - c1 * b2) / det;
        let y = (c1 * a2 - a1 * c2) / det;
        Some(Point2::new(x, y))
    }

    /// 点到直线的距离 `|n·x + c| / |n|`
    pub fn distance_to_point(&self, point: &Point2) -> f64 {
        let n = self.normal();
        let (_, _, c) = self.implicit_coefficients();
        (n.dot(&point.coords) + c).abs() / n.norm()
    }

    /// 点是否在直线上（距离不超过 `EPSILON`）
    pub fn contains_point(&self, point: &Point2) -> bool {
        self.contains_point_within(point, EPSILON)
    }

    pub fn contains_point_within(&self, point: &Point2, tolerance: f64) -> bool {
        self.distance_to_point(point) <= tolerance
    }

    /// 平移直线使 `p` 落在 `new_p`，方向与长度保持不变
    pub fn move_to(&mut self, new_p: Point2) {
        let offset = new_p - self.p;
        self.p = new_p;
        self.q += offset;
    }

    /// 隐式方程文本，如 `0.00x + 0.50y - 0.25 = 0`
    pub fn implicit_equation(&self) -> String {
        let (a, b, c) = self.implicit_coefficients();
        let (b_sign, b) = split_sign(b);
        let (c_sign, c) = split_sign(c);
        format!(
            "{:.2}x {} {:.2}y {} {:.2} = 0",
            unsigned_zero(a),
            b_sign,
            b,
            c_sign,
            c
        )
    }

    /// 参数方程文本，如 `r(t) = (0.00, 0.00) + (0.50, 0.00)t`
    pub fn parametric_equation(&self) -> String {
        let d = self.direction();
        format!(
            "r(t) = ({:.2}, {:.2}) + ({:.2}, {:.2})t",
            unsigned_zero(self.p.x),
            unsigned_zero(self.p.y),
            unsigned_zero(d.x),
            unsigned_zero(d.y)
        )
    }
}

/// `-0.0` 打印为 `0.00`
fn unsigned_zero(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

fn split_sign(v: f64) -> (char, f64) {
    if v < 0.0 {
        ('-', -v)
    } else {
        ('+', unsigned_zero(v))
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.implicit_equation())
    }
}
