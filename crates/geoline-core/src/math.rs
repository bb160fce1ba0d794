//! 数学类型
//!
//! 基于 nalgebra 的类型别名。三维类型只用于齐次坐标（第三分量恒为 1 的点，
//! 或直线的 `(a, b, c)` 系数），不表示真实深度。

pub type Point2 = nalgebra::Point2<f64>;
pub type Point3 = nalgebra::Point3<f64>;
pub type Vector2 = nalgebra::Vector2<f64>;
pub type Vector3 = nalgebra::Vector3<f64>;

/// 全局拾取/平行判定容差
pub const EPSILON: f64 = 0.01;

/// 判定两个交点重合、或点落在边界线段范围内时使用的数值容差
pub const COINCIDENCE_TOLERANCE: f64 = 1e-9;

/// 把二维向量逆时针旋转 90°: `(x, y) -> (-y, x)`
#[inline]
pub fn perpendicular(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// 在给定容差内比较两点
#[inline]
pub fn points_close(a: &Point2, b: &Point2, tolerance: f64) -> bool {
    (a - b).norm() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perpendicular_rotates_counter_clockwise() {
        let v = perpendicular(&Vector2::new(1.0, 0.0));
        assert_eq!(v, Vector2::new(-0.0, 1.0));
        assert!(v.dot(&Vector2::new(1.0, 0.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_points_close() {
        assert!(points_close(&Point2::new(0.0, 0.0), &Point2::new(0.005, 0.0), EPSILON));
        assert!(!points_close(&Point2::new(0.0, 0.0), &Point2::new(0.5, 0.0), EPSILON));
    }
}
