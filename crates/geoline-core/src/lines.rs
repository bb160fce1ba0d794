//! 直线集合
//!
//! 只追加的直线列表。每次添加或移动直线后整体重建可渲染顶点：
//! 每条与视口相交的直线贡献两个顶点（独立线段，不构成折线）。

use crate::boundary::{Boundary, Segment};
use crate::entity::LineId;
use crate::error::GeometryError;
use crate::geometry::{Line, Point};
use crate::math::{Point2, EPSILON};
use crate::vertex::Vertex;
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct LineCollection {
    lines: Vec<Line>,
    boundary: Boundary,
    /// 裁剪后的线段顶点，每条可见直线两个
    vertices: Vec<Vertex>,
}

impl LineCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 由两个已有点创建直线
    ///
    /// 直线复制两点的坐标；之后源点的变化不会影响直线。
    pub fn add_line(&mut self, p: &Point, q: &Point) -> Result<LineId, GeometryError> {
        let line = Line::new(p.position, q.position)?;
        let id = LineId(self.lines.len());
        info!(line = %id, equation = %line, "Line added");
        self.lines.push(line);
        self.recompute_renderable();
        Ok(id)
    }

    pub fn get(&self, id: LineId) -> Option<&Line> {
        self.lines.get(id.0)
    }

    /// 位置拾取：按插入顺序返回第一条经过 `position` 的直线
    pub fn line_at(&self, position: &Point2) -> Option<LineId> {
        self.line_at_within(position, EPSILON)
    }

    pub fn line_at_within(&self, position: &Point2, tolerance: f64) -> Option<LineId> {
        self.lines
            .iter()
            .position(|l| l.contains_point_within(position, tolerance))
            .map(LineId)
    }

    /// 平移直线使其第一个定义点落在 `new_p`
    pub fn move_line(&mut self, id: LineId, new_p: Point2) -> Result<(), GeometryError> {
        let line = self
            .lines
            .get_mut(id.0)
            .ok_or(GeometryError::LineNotFound(id))?;
        line.move_to(new_p);
        self.recompute_renderable();
        Ok(())
    }

    /// 把某条直线裁剪为视口内线段
    pub fn clip(&self, id: LineId) -> Option<Segment> {
        self.get(id).and_then(|line| self.boundary.clip(line))
    }

    /// 整体重建可渲染顶点
    pub fn recompute_renderable(&mut self) {
        self.vertices.clear();
        for (i, line) in self.lines.iter().enumerate() {
            match self.boundary.clip(line) {
                Some(seg) => {
                    self.vertices.push(Vertex::from(seg.start));
                    self.vertices.push(Vertex::from(seg.end));
                }
                None => debug!(line = i, "Line does not cross the viewport"),
            }
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LineId, &Line)> {
        self.lines.iter().enumerate().map(|(i, l)| (LineId(i), l))
    }

    /// 可渲染顶点列表（按线段成对排列）
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_add_line_clips_to_viewport() {
        let mut lines = LineCollection::new();
        let id = lines.add_line(&pt(0.0, 0.0), &pt(0.5, 0.0)).unwrap();

        assert_eq!(id.index(), 0);
        assert_eq!(lines.vertices(), &[Vertex::new(-1.0, 0.0), Vertex::new(1.0, 0.0)]);
    }

    #[test]
    fn test_add_line_copies_coordinates() {
        let mut lines = LineCollection::new();
        let mut p = pt(0.0, 0.0);
        let id = lines.add_line(&p, &pt(0.0, 0.5)).unwrap();

        p.position = Point2::new(0.7, 0.7);
        assert_eq!(lines.get(id).unwrap().p(), Point2::new(0.0, 0.0));
    }

    #[test]
    fn test_add_line_rejects_coincident_points() {
        let mut lines = LineCollection::new();
        let result = lines.add_line(&pt(0.2, 0.2), &pt(0.2, 0.2));
        assert!(matches!(result, Err(GeometryError::InvalidGeometry { .. })));
        assert!(lines.is_empty());
        assert!(lines.vertices().is_empty());
    }

    #[test]
    fn test_invisible_lines_contribute_nothing() {
        let mut lines = LineCollection::new();
        lines.add_line(&pt(-3.0, 5.0), &pt(3.0, 5.0)).unwrap();
        lines.add_line(&pt(0.0, 0.0), &pt(0.0, 0.5)).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines.vertices().len(), 2);
        assert!(lines.clip(LineId(0)).is_none());
        assert!(lines.clip(LineId(1)).is_some());
    }

    #[test]
    fn test_line_at_returns_first_match() {
        let mut lines = LineCollection::new();
        lines.add_line(&pt(0.0, 0.0), &pt(1.0, 0.0)).unwrap();
        lines.add_line(&pt(0.0, 0.0), &pt(0.0, 1.0)).unwrap();

        // 原点同时在两条线上
        assert_eq!(lines.line_at(&Point2::origin()), Some(LineId(0)));
        assert_eq!(lines.line_at(&Point2::new(0.005, 0.6)), Some(LineId(1)));
        assert_eq!(lines.line_at(&Point2::new(0.5, 0.5)), None);
    }

    #[test]
    fn test_move_line_recomputes_renderable() {
        let mut lines = LineCollection::new();
        let id = lines.add_line(&pt(0.0, 0.0), &pt(0.5, 0.0)).unwrap();

        lines.move_line(id, Point2::new(0.2, 0.5)).unwrap();

        let line = lines.get(id).unwrap();
        assert_eq!(line.p(), Point2::new(0.2, 0.5));
        assert!((line.q() - Point2::new(0.7, 0.5)).norm() < 1e-12);
        assert_eq!(lines.vertices(), &[Vertex::new(-1.0, 0.5), Vertex::new(1.0, 0.5)]);

        // 移出视口后不再可见
        lines.move_line(id, Point2::new(0.0, 2.0)).unwrap();
        assert!(lines.vertices().is_empty());
    }

    #[test]
    fn test_move_unknown_line() {
        let mut lines = LineCollection::new();
        let result = lines.move_line(LineId(4), Point2::origin());
        assert_eq!(result, Err(GeometryError::LineNotFound(LineId(4))));
    }
}
