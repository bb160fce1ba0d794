//! 基于 egui Painter 的渲染服务
//!
//! 顶点缓冲在帧之间保留，控制器只在集合变化时重新上传。

use geoline_core::math::Point2;
use geoline_core::vertex::Vertex;
use geoline_core::viewport::Viewport;
use geoline_ui::{BufferSlot, Color, PrimitiveKind, RenderSurface};
use std::collections::HashMap;

pub struct EguiSurface {
    buffers: HashMap<BufferSlot, Vec<Vertex>>,
    point_radius: f32,
    line_width: f32,
}

impl EguiSurface {
    pub fn new(point_radius: f32, line_width: f32) -> Self {
        Self {
            buffers: HashMap::new(),
            point_radius,
            line_width,
        }
    }

    /// 绑定本帧的画布
    pub fn frame<'a>(&'a mut self, painter: &'a egui::Painter, rect: egui::Rect) -> PainterFrame<'a> {
        PainterFrame {
            surface: self,
            painter,
            rect,
        }
    }

    pub fn buffer(&self, slot: BufferSlot) -> &[Vertex] {
        self.buffers.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// 单帧的绘制目标
pub struct PainterFrame<'a> {
    surface: &'a mut EguiSurface,
    painter: &'a egui::Painter,
    rect: egui::Rect,
}

impl RenderSurface for PainterFrame<'_> {
    fn upload(&mut self, slot: BufferSlot, vertices: &[Vertex]) {
        self.surface.buffers.insert(slot, vertices.to_vec());
    }

    fn draw(&mut self, slot: BufferSlot, kind: PrimitiveKind, color: Color) {
        let color = to_color32(color);
        let vertices = self.surface.buffer(slot);
        match kind {
            PrimitiveKind::Points => {
                for v in vertices {
                    let pos = ndc_to_screen(self.rect, *v);
                    self.painter.circle_filled(pos, self.surface.point_radius, color);
                }
            }
            PrimitiveKind::Lines => {
                let stroke = egui::Stroke::new(self.surface.line_width, color);
                for pair in vertices.chunks_exact(2) {
                    let start = ndc_to_screen(self.rect, pair[0]);
                    let end = ndc_to_screen(self.rect, pair[1]);
                    self.painter.line_segment([start, end], stroke);
                }
            }
        }
    }
}

pub fn to_color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

/// NDC -> 画布屏幕坐标
pub fn ndc_to_screen(rect: egui::Rect, v: Vertex) -> egui::Pos2 {
    let viewport = Viewport::new(rect.width() as f64, rect.height() as f64);
    let (px, py) = viewport.to_pixel(&Point2::new(v.x() as f64, v.y() as f64));
    egui::pos2(rect.left() + px as f32, rect.top() + py as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ndc_to_screen() {
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(600.0, 400.0));
        assert_eq!(ndc_to_screen(rect, Vertex::new(0.0, 0.0)), egui::pos2(310.0, 220.0));
        assert_eq!(ndc_to_screen(rect, Vertex::new(-1.0, 1.0)), egui::pos2(10.0, 20.0));
        assert_eq!(ndc_to_screen(rect, Vertex::new(1.0, -1.0)), egui::pos2(610.0, 420.0));
    }

    #[test]
    fn test_to_color32() {
        assert_eq!(to_color32(Color::new(1, 2, 3)), egui::Color32::from_rgb(1, 2, 3));
    }
}
