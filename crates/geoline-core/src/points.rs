//! 点集合
//!
//! 只追加、保持插入顺序，允许重复点。插入序号即点的稳定句柄。

use crate::entity::PointId;
use crate::geometry::Point;
use crate::math::Point2;
use crate::vertex::Vertex;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct PointCollection {
    points: Vec<Point>,
    /// 可渲染顶点，与 `points` 一一对应
    vertices: Vec<Vertex>,
}

impl PointCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个点
    pub fn add_point(&mut self, position: Point2) -> PointId {
        let id = PointId(self.points.len());
        self.points.push(Point::from_point2(position));
        self.vertices.push(Vertex::from(position));
        info!(point = %id, x = position.x, y = position.y, "Point added");
        id
    }

    pub fn get(&self, id: PointId) -> Option<&Point> {
        self.points.get(id.0)
    }

    /// 邻近搜索
    ///
    /// 按插入顺序线性扫描，返回第一个与 `position` 的距离不超过 `radius` 的点。
    /// 采用“先到先得”而非“最近优先”。
    pub fn proximity_search(&self, position: &Point2, radius: f64) -> Option<PointId> {
        self.points
            .iter()
            .position(|p| p.distance_to(position) <= radius)
            .map(PointId)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PointId, &Point)> {
        self.points.iter().enumerate().map(|(i, p)| (PointId(i), p))
    }

    /// 可渲染顶点列表（每个点一个顶点）
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}
