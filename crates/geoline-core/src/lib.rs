//! Geoline 核心几何引擎
//!
//! 在归一化设备坐标（NDC）的正方形视口内进行二维几何构造：
//! - `Line`: 由两点定义的无限直线，支持求交、点线距离、平移
//! - `Boundary`: 视口的四条边，用于把无限直线裁剪为可绘制线段
//! - `PointCollection` / `LineCollection`: 只追加的点/线集合，支持按位置拾取
//!
//! # 示例
//!
//! ```rust
//! use geoline_core::prelude::*;
//!
//! let mut drawing = Drawing::new();
//! let a = drawing.add_point(Point2::new(0.0, 0.0));
//! let b = drawing.add_point(Point2::new(0.5, 0.0));
//! drawing.add_line(a, b).unwrap();
//!
//! // 水平线被裁剪到左右两条边界
//! assert_eq!(drawing.lines.vertices().len(), 2);
//! ```

pub mod boundary;
pub mod drawing;
pub mod entity;
pub mod error;
pub mod geometry;
pub mod lines;
pub mod math;
pub mod points;
pub mod vertex;
pub mod viewport;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::boundary::{Boundary, Segment};
    pub use crate::drawing::Drawing;
    pub use crate::entity::{LineId, PointId};
    pub use crate::error::GeometryError;
    pub use crate::geometry::{Line, Point};
    pub use crate::lines::LineCollection;
    pub use crate::math::{Point2, Point3, Vector2, Vector3, EPSILON};
    pub use crate::points::PointCollection;
    pub use crate::vertex::Vertex;
    pub use crate::viewport::Viewport;
}
