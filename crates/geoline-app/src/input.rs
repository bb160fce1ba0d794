//! egui 原始事件 -> 控制器输入事件
//!
//! 坐标换算为相对画布左上角的像素坐标。只有落在画布内的按下事件会被转发；
//! 松开和移动始终转发，这样拖出画布后也能正常结束拖动。

use geoline_ui::{InputEvent, MouseButton};

pub fn translate(event: &egui::Event, rect: egui::Rect) -> Option<InputEvent> {
    match event {
        egui::Event::PointerButton {
            pos,
            button,
            pressed,
            ..
        } => {
            let button = mouse_button(*button)?;
            let (x, y) = local(*pos, rect);
            if *pressed {
                rect.contains(*pos)
                    .then_some(InputEvent::Press { button, x, y })
            } else {
                Some(InputEvent::Release { button, x, y })
            }
        }
        egui::Event::PointerMoved(pos) => {
            let (x, y) = local(*pos, rect);
            Some(InputEvent::Move { x, y })
        }
        egui::Event::Key {
            key, pressed: true, repeat: false, ..
        } => key_char(*key).map(InputEvent::Key),
        _ => None,
    }
}

fn local(pos: egui::Pos2, rect: egui::Rect) -> (f64, f64) {
    ((pos.x - rect.left()) as f64, (pos.y - rect.top()) as f64)
}

fn mouse_button(button: egui::PointerButton) -> Option<MouseButton> {
    match button {
        egui::PointerButton::Primary => Some(MouseButton::Left),
        egui::PointerButton::Secondary => Some(MouseButton::Right),
        egui::PointerButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

/// 单字符按键转为小写字符，其余按键忽略
fn key_char(key: egui::Key) -> Option<char> {
    let mut chars = key.name().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}
