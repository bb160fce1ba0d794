//! 上传给渲染服务的顶点格式

use crate::math::Point2;

/// 二维顶点（NDC 坐标，f32）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    pub position: [f32; 2],
}

impl Vertex {
    pub fn new(x: f32, y: f32) -> Self {
        Self { position: [x, y] }
    }

    pub fn x(&self) -> f32 {
        self.position[0]
    }

    pub fn y(&self) -> f32 {
        self.position[1]
    }
}

impl From<Point2> for Vertex {
    fn from(p: Point2) -> Self {
        Self::new(p.x as f32, p.y as f32)
    }
}
