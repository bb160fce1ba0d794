//! 几何错误定义

use crate::entity::{LineId, PointId};
use crate::math::Point2;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Invalid geometry: line endpoints coincide at {p:?}")]
    InvalidGeometry { p: Point2, q: Point2 },

    #[error("Point not found: {0}")]
    PointNotFound(PointId),

    #[error("Line not found: {0}")]
    LineNotFound(LineId),
}
