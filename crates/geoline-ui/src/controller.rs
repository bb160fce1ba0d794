//! 交互控制器
//!
//! 四状态模式机（点/线/移动/交点）。按键切换模式时总是创建一个全新的
//! Action，上一个模式中拾取到一半的状态随之丢弃。只有主按钮驱动手势。

use crate::action::{Action, ActionContext, ActionResult, MouseButton};
use crate::actions::create_action;
use crate::event::InputEvent;
use crate::mode::Mode;
use crate::surface::{BufferSlot, Color, FrameDriver, PrimitiveKind, RenderSurface};
use geoline_core::drawing::Drawing;
use geoline_core::math::{Point2, EPSILON};
use geoline_core::viewport::Viewport;
use tracing::{info, warn};

/// 控制器配置
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// 点拾取与直线命中测试的容差（NDC）
    pub pick_tolerance: f64,
    pub initial_mode: Mode,
    pub point_color: Color,
    pub line_color: Color,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            pick_tolerance: EPSILON,
            initial_mode: Mode::Point,
            point_color: Color::RED,
            line_color: Color::CYAN,
        }
    }
}

pub struct InteractionController {
    drawing: Drawing,
    viewport: Viewport,
    config: ControllerConfig,
    mode: Mode,
    action: Box<dyn Action>,
    /// 主按钮是否按下
    button_held: bool,
}

impl InteractionController {
    pub fn new(config: ControllerConfig, viewport: Viewport) -> Self {
        let mode = config.initial_mode;
        Self {
            drawing: Drawing::new(),
            viewport,
            config,
            mode,
            action: create_action(mode),
            button_held: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// 当前 Action 的提示文本
    pub fn prompt(&self) -> &str {
        self.action.get_prompt()
    }

    /// 进入模式（即使与当前模式相同也重新开始）
    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            info!(from = self.mode.name(), to = mode.name(), "Mode changed");
        }
        self.mode = mode;
        self.action = create_action(mode);
        self.button_held = false;
    }

    /// 按键；未绑定的按键不做任何事
    pub fn on_key(&mut self, key: char) -> bool {
        if let Some(mode) = Mode::from_key(key) {
            self.set_mode(mode);
        }
        false
    }

    pub fn on_press(&mut self, button: MouseButton, x: f64, y: f64) -> bool {
        if button != MouseButton::Left {
            return false;
        }
        self.button_held = true;
        let cursor = self.viewport.to_ndc(x, y);
        self.dispatch(cursor, |action, ctx| action.on_press(ctx))
    }

    pub fn on_release(&mut self, button: MouseButton, x: f64, y: f64) -> bool {
        if button != MouseButton::Left {
            return false;
        }
        self.button_held = false;
        let cursor = self.viewport.to_ndc(x, y);
        self.dispatch(cursor, |action, ctx| action.on_release(ctx))
    }

    /// 光标移动；只有按住主按钮时才转发给 Action
    pub fn on_move(&mut self, x: f64, y: f64) -> bool {
        if !self.button_held {
            return false;
        }
        let cursor = self.viewport.to_ndc(x, y);
        self.dispatch(cursor, |action, ctx| action.on_drag(ctx))
    }

    /// 把事件交给当前 Action 并执行其结果
    fn dispatch<F>(&mut self, cursor: Point2, f: F) -> bool
    where
        F: FnOnce(&mut dyn Action, &ActionContext) -> ActionResult,
    {
        let ctx = ActionContext {
            cursor,
            drawing: &self.drawing,
            tolerance: self.config.pick_tolerance,
        };
        let result = f(self.action.as_mut(), &ctx);
        self.apply(result)
    }

    /// 执行 Action 的结果，返回是否需要重绘
    fn apply(&mut self, result: ActionResult) -> bool {
        match result {
            ActionResult::Continue => false,
            ActionResult::CreatePoint(position) => {
                self.drawing.add_point(position);
                true
            }
            ActionResult::CreateLine(start, end) => match self.drawing.add_line(start, end) {
                Ok(_) => true,
                Err(e) => {
                    warn!(error = %e, "Line not created");
                    false
                }
            },
            ActionResult::MoveLine(id, to) => match self.drawing.move_line(id, to) {
                Ok(()) => true,
                Err(e) => {
                    warn!(error = %e, "Line not moved");
                    false
                }
            },
        }
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(ControllerConfig::default(), Viewport::default())
    }
}

impl FrameDriver for InteractionController {
    fn handle(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Press { button, x, y } => self.on_press(button, x, y),
            InputEvent::Release { button, x, y } => self.on_release(button, x, y),
            InputEvent::Move { x, y } => self.on_move(x, y),
            InputEvent::Key(key) => self.on_key(key),
        }
    }

    fn render(&mut self, surface: &mut dyn RenderSurface) {
        if self.drawing.take_lines_dirty() {
            surface.upload(BufferSlot::Lines, self.drawing.lines.vertices());
        }
        if self.drawing.take_points_dirty() {
            surface.upload(BufferSlot::Points, self.drawing.points.vertices());
        }
        // 点画在线的上面
        surface.draw(BufferSlot::Lines, PrimitiveKind::Lines, self.config.line_color);
        surface.draw(BufferSlot::Points, PrimitiveKind::Points, self.config.point_color);
    }
}
