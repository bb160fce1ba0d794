//! 像素坐标与归一化设备坐标（NDC）之间的转换
//!
//! 像素坐标原点在窗口左上角、y 轴向下；NDC 原点在窗口中心、y 轴向上，
//! 可见区域为 `[-1, 1]²`。

use crate::math::Point2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// 像素坐标 -> NDC
    pub fn to_ndc(&self, px: f64, py: f64) -> Point2 {
        Point2::new(
            2.0 * (px / self.width - 0.5),
            2.0 * (0.5 - py / self.height),
        )
    }

    /// NDC -> 像素坐标
    pub fn to_pixel(&self, ndc: &Point2) -> (f64, f64) {
        (
            (ndc.x / 2.0 + 0.5) * self.width,
            (0.5 - ndc.y / 2.0) * self.height,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(600.0, 600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_ndc() {
        let vp = Viewport::new(600.0, 600.0);
        assert_eq!(vp.to_ndc(300.0, 300.0), Point2::new(0.0, 0.0));
        assert_eq!(vp.to_ndc(450.0, 300.0), Point2::new(0.5, 0.0));
        assert_eq!(vp.to_ndc(0.0, 0.0), Point2::new(-1.0, 1.0));
        assert_eq!(vp.to_ndc(600.0, 600.0), Point2::new(1.0, -1.0));
    }

    #[test]
    fn test_non_square_window() {
        let vp = Viewport::new(800.0, 400.0);
        assert_eq!(vp.to_ndc(200.0, 100.0), Point2::new(-0.5, 0.5));
        let (px, py) = vp.to_pixel(&Point2::new(-0.5, 0.5));
        assert!((px - 200.0).abs() < 1e-9);
        assert!((py - 100.0).abs() < 1e-9);
    }
}
