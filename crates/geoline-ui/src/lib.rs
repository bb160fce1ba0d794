//! Geoline 交互层
//!
//! 把原始的鼠标/键盘事件解释为对点集合与线集合的操作。
//! 每种模式（点/线/移动/交点）是一个独立的 Action，采用状态机处理多次点击的手势。

pub mod action;
pub mod actions;
pub mod controller;
pub mod event;
pub mod mode;
pub mod surface;

pub use action::{Action, ActionContext, ActionResult, MouseButton};
pub use actions::create_action;
pub use controller::{ControllerConfig, InteractionController};
pub use event::InputEvent;
pub use mode::Mode;
pub use surface::{BufferSlot, Color, FrameDriver, PrimitiveKind, RenderSurface};
