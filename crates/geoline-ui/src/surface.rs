//! 渲染服务与帧驱动接口
//!
//! 窗口、事件循环与 GPU 上传都在核心之外。核心只需要两个能力：
//! 上传某个缓冲的顶点列表，以及用指定图元类型和颜色绘制它。

use crate::event::InputEvent;
use geoline_core::vertex::Vertex;
use serde::{Deserialize, Serialize};

/// 顶点缓冲槽位，每个集合一个
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferSlot {
    Points,
    Lines,
}

/// 图元类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// 离散的点
    Points,
    /// 每两个顶点一条独立线段（不连成折线）
    Lines,
}

/// 颜色 (RGB)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const CYAN: Color = Color::new(0, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// 渲染服务
pub trait RenderSurface {
    /// 替换槽位中的顶点数据
    fn upload(&mut self, slot: BufferSlot, vertices: &[Vertex]);

    /// 绘制槽位中已上传的顶点
    fn draw(&mut self, slot: BufferSlot, kind: PrimitiveKind, color: Color);
}

/// 帧驱动：宿主事件循环逐个投递输入事件，并在需要时请求绘制。
/// 每个调用都在下一个调用之前完整执行完毕。
pub trait FrameDriver {
    /// 处理一个输入事件，返回是否需要重绘
    fn handle(&mut self, event: InputEvent) -> bool;

    /// 上传变化的缓冲并绘制一帧
    fn render(&mut self, surface: &mut dyn RenderSurface);
}
