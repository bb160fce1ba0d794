//! 应用配置
//!
//! 从 JSON 文件加载；文件不存在时使用默认值，缺失的字段也取默认值。

use anyhow::{Context, Result};
use geoline_core::math::EPSILON;
use geoline_ui::{Color, ControllerConfig, Mode};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::Level;

/// 默认配置文件名（工作目录下）
pub const DEFAULT_CONFIG_FILE: &str = "geoline.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 窗口初始宽度（像素）
    pub window_width: f32,
    /// 窗口初始高度（像素）
    pub window_height: f32,
    /// 拾取容差（NDC）
    pub pick_tolerance: f64,
    pub initial_mode: Mode,
    pub point_color: Color,
    pub line_color: Color,
    pub background_color: Color,
    /// 点的绘制半径（像素）
    pub point_radius: f32,
    /// 线宽（像素）
    pub line_width: f32,
    /// 日志级别：trace/debug/info/warn/error
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 600.0,
            window_height: 600.0,
            pick_tolerance: EPSILON,
            initial_mode: Mode::Point,
            point_color: Color::RED,
            line_color: Color::CYAN,
            background_color: Color::BLACK,
            point_radius: 3.0,
            line_width: 1.5,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// 加载配置文件；文件不存在时返回默认配置
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid config: {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn log_level(&self) -> Result<Level> {
        self.log_level
            .parse::<Level>()
            .with_context(|| format!("Unknown log level: {}", self.log_level))
    }

    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            pick_tolerance: self.pick_tolerance,
            initial_mode: self.initial_mode,
            point_color: self.point_color,
            line_color: self.line_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.window_width, 600.0);
        assert_eq!(config.pick_tolerance, EPSILON);
        assert_eq!(config.log_level().unwrap(), Level::INFO);
        assert_eq!(config.controller_config().initial_mode, Mode::Point);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = AppConfig::from_json(
            r#"{ "pick_tolerance": 0.05, "line_color": { "r": 1, "g": 2, "b": 3 }, "initial_mode": "Line" }"#,
        )
        .unwrap();

        assert_eq!(config.pick_tolerance, 0.05);
        assert_eq!(config.line_color, Color::new(1, 2, 3));
        assert_eq!(config.initial_mode, Mode::Line);
        assert_eq!(config.point_color, Color::RED);
        assert_eq!(config.window_height, 600.0);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(AppConfig::from_json("{ not json").is_err());
        assert!(AppConfig::from_json(r#"{ "initial_mode": "Circle" }"#).is_err());
    }

    #[test]
    fn test_bad_log_level() {
        let config = AppConfig {
            log_level: "loud".to_string(),
            ..AppConfig::default()
        };
        assert!(config.log_level().is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = AppConfig::load(Path::new("/nonexistent/geoline.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
