//! 绘图文档：点集合与线集合的组合
//!
//! 记录每个集合自上次上传后是否发生变化，渲染端据此只重新上传变化的顶点缓冲。

use crate::entity::{LineId, PointId};
use crate::error::GeometryError;
use crate::lines::LineCollection;
use crate::math::Point2;
use crate::points::PointCollection;

#[derive(Debug, Clone, Default)]
pub struct Drawing {
    pub points: PointCollection,
    pub lines: LineCollection,
    points_dirty: bool,
    lines_dirty: bool,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point(&mut self, position: Point2) -> PointId {
        self.points_dirty = true;
        self.points.add_point(position)
    }

    /// 用两个已有点创建直线
    pub fn add_line(&mut self, start: PointId, end: PointId) -> Result<LineId, GeometryError> {
        let p = self
            .points
            .get(start)
            .ok_or(GeometryError::PointNotFound(start))?;
        let q = self
            .points
            .get(end)
            .ok_or(GeometryError::PointNotFound(end))?;
        let id = self.lines.add_line(p, q)?;
        self.lines_dirty = true;
        Ok(id)
    }

    pub fn move_line(&mut self, id: LineId, new_p: Point2) -> Result<(), GeometryError> {
        self.lines.move_line(id, new_p)?;
        self.lines_dirty = true;
        Ok(())
    }

    /// 两条直线的交点；平行或句柄无效时为 `None`
    pub fn intersection(&self, a: LineId, b: LineId) -> Option<Point2> {
        let first = self.lines.get(a)?;
        let second = self.lines.get(b)?;
        first.intersection(second)
    }

    pub fn points_dirty(&self) -> bool {
        self.points_dirty
    }

    pub fn lines_dirty(&self) -> bool {
        self.lines_dirty
    }

    /// 取出并清除点集合的变化标记
    pub fn take_points_dirty(&mut self) -> bool {
        std::mem::take(&mut self.points_dirty)
    }

    /// 取出并清除线集合的变化标记
    pub fn take_lines_dirty(&mut self) -> bool {
        std::mem::take(&mut self.lines_dirty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirty_flags() {
        let mut drawing = Drawing::new();
        assert!(!drawing.points_dirty());
        assert!(!drawing.lines_dirty());

        let a = drawing.add_point(Point2::new(0.0, 0.0));
        let b = drawing.add_point(Point2::new(0.0, 0.5));
        assert!(drawing.take_points_dirty());
        assert!(!drawing.points_dirty());
        assert!(!drawing.lines_dirty());

        let line = drawing.add_line(a, b).unwrap();
        assert!(drawing.take_lines_dirty());

        drawing.move_line(line, Point2::new(0.3, 0.0)).unwrap();
        assert!(drawing.lines_dirty());
        assert!(!drawing.points_dirty());
    }

    #[test]
    fn test_failed_add_line_keeps_lines_clean() {
        let mut drawing = Drawing::new();
        let a = drawing.add_point(Point2::new(0.4, 0.4));
        let b = drawing.add_point(Point2::new(0.4, 0.4));

        assert!(matches!(
            drawing.add_line(a, b),
            Err(GeometryError::InvalidGeometry { .. })
        ));
        assert!(!drawing.lines_dirty());
    }

    #[test]
    fn test_add_line_with_unknown_point() {
        let mut drawing = Drawing::new();
        let a = drawing.add_point(Point2::new(0.4, 0.4));
        let missing = PointId(7);
        assert_eq!(
            drawing.add_line(a, missing),
            Err(GeometryError::PointNotFound(missing))
        );
    }

    #[test]
    fn test_intersection_by_handle() {
        let mut drawing = Drawing::new();
        let o = drawing.add_point(Point2::new(0.0, 0.0));
        let x = drawing.add_point(Point2::new(0.5, 0.0));
        let y = drawing.add_point(Point2::new(0.0, 0.5));
        let horizontal = drawing.add_line(o, x).unwrap();
        let vertical = drawing.add_line(o, y).unwrap();

        let p = drawing.intersection(horizontal, vertical).unwrap();
        assert!(p.coords.norm() < 1e-12);
        assert!(drawing.intersection(horizontal, horizontal).is_none());
        assert!(drawing.intersection(horizontal, LineId(9)).is_none());
    }
}
