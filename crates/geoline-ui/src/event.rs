//! 输入事件
//!
//! 坐标为窗口像素坐标（左上角为原点），由控制器负责转换为 NDC。

use crate::action::MouseButton;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Press { button: MouseButton, x: f64, y: f64 },
    Release { button: MouseButton, x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Key(char),
}
