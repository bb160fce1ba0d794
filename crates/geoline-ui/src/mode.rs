//! 交互模式

use serde::{Deserialize, Serialize};

/// 当前交互模式，只能通过按键切换
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    /// 点击放置点
    #[default]
    Point,
    /// 依次拾取两个点构造直线
    Line,
    /// 按住并拖动直线
    Move,
    /// 依次拾取两条直线，在交点处放置点
    Intersect,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Point, Mode::Line, Mode::Move, Mode::Intersect];

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Point => "Point",
            Mode::Line => "Line",
            Mode::Move => "Move",
            Mode::Intersect => "Intersect",
        }
    }

    /// 切换到该模式的按键
    pub fn shortcut(&self) -> char {
        match self {
            Mode::Point => 'p',
            Mode::Line => 'l',
            Mode::Move => 'm',
            Mode::Intersect => 'i',
        }
    }

    /// 按键 -> 模式；未绑定的按键返回 `None`
    pub fn from_key(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.shortcut() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        assert_eq!(Mode::from_key('p'), Some(Mode::Point));
        assert_eq!(Mode::from_key('l'), Some(Mode::Line));
        assert_eq!(Mode::from_key('m'), Some(Mode::Move));
        assert_eq!(Mode::from_key('i'), Some(Mode::Intersect));
        assert_eq!(Mode::from_key('x'), None);
        assert_eq!(Mode::from_key('P'), None);
    }

    #[test]
    fn test_default_mode() {
        assert_eq!(Mode::default(), Mode::Point);
    }
}
