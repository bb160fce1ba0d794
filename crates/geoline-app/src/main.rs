//! Geoline 主应用程序入口
//! 使用 eframe 作为窗口与事件循环，egui Painter 作为渲染服务

mod config;
mod input;
mod surface;

use anyhow::Result;
use eframe::egui;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use config::{AppConfig, DEFAULT_CONFIG_FILE};
use geoline_core::viewport::Viewport;
use geoline_ui::{FrameDriver, InteractionController};
use surface::{to_color32, EguiSurface};

/// Geoline 应用程序
struct GeolineApp {
    controller: InteractionController,
    surface: EguiSurface,
    config: AppConfig,
}

impl GeolineApp {
    fn new(config: AppConfig) -> Self {
        let viewport = Viewport::new(config.window_width as f64, config.window_height as f64);
        Self {
            controller: InteractionController::new(config.controller_config(), viewport),
            surface: EguiSurface::new(config.point_radius, config.line_width),
            config,
        }
    }

    /// 光标下直线的方程
    fn hovered_line_text(&self, hover: Option<egui::Pos2>, rect: egui::Rect) -> Option<String> {
        let pos = hover?;
        if !rect.contains(pos) {
            return None;
        }
        let ndc = self
            .controller
            .viewport()
            .to_ndc((pos.x - rect.left()) as f64, (pos.y - rect.top()) as f64);
        let lines = &self.controller.drawing().lines;
        let id = lines.line_at_within(&ndc, self.config.pick_tolerance)?;
        let line = lines.get(id)?;
        Some(format!(
            "{}: {}\n{}",
            id,
            line.implicit_equation(),
            line.parametric_equation()
        ))
    }
}

impl eframe::App for GeolineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        // ===== 底部状态栏 =====
        let mode = self.controller.mode();
        let prompt = self.controller.prompt().to_string();
        let point_count = self.controller.drawing().points.len();
        let line_count = self.controller.drawing().lines.len();
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("模式: {} ({})", mode.name(), mode.shortcut()));
                ui.separator();
                ui.label(prompt);
                ui.separator();
                ui.label(format!("点: {}  直线: {}", point_count, line_count));
            });
        });

        // ===== 中央绘图区域 =====
        let background = to_color32(self.config.background_color);
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(background))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
                let rect = response.rect;
                self.controller
                    .set_viewport(Viewport::new(rect.width() as f64, rect.height() as f64));

                let events = ui.input(|i| i.events.clone());
                for event in &events {
                    if let Some(input) = input::translate(event, rect) {
                        self.controller.handle(input);
                    }
                }

                let mut frame = self.surface.frame(&painter, rect);
                self.controller.render(&mut frame);

                if let Some(text) = self.hovered_line_text(response.hover_pos(), rect) {
                    painter.text(
                        rect.left_top() + egui::vec2(8.0, 8.0),
                        egui::Align2::LEFT_TOP,
                        text,
                        egui::FontId::monospace(13.0),
                        egui::Color32::LIGHT_GRAY,
                    );
                }
            });
    }
}

/// 状态栏提示为中文，需要一个系统 CJK 字体作为后备
const CJK_FONTS: [&str; 3] = [
    "/System/Library/Fonts/PingFang.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
];

fn install_cjk_fallback(ctx: &egui::Context) {
    let Some((path, data)) = CJK_FONTS
        .iter()
        .find_map(|path| std::fs::read(path).ok().map(|data| (*path, data)))
    else {
        warn!("No CJK font found, prompts may not render");
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert("cjk".to_owned(), std::sync::Arc::new(egui::FontData::from_owned(data)));
    if let Some(family) = fonts.families.get_mut(&egui::FontFamily::Proportional) {
        family.push("cjk".to_owned());
    }
    ctx.set_fonts(fonts);
    info!(path, "Loaded CJK font");
}

fn main() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = AppConfig::load(&config_path)?;

    // 初始化日志
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_max_level(config.log_level()?)
            .finish(),
    )?;

    info!("Starting Geoline...");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title("Geoline"),
        ..Default::default()
    };

    eframe::run_native(
        "Geoline",
        native_options,
        Box::new(|cc| {
            install_cjk_fallback(&cc.egui_ctx);
            Ok(Box::new(GeolineApp::new(config)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {}", e))?;

    Ok(())
}
