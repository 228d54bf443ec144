//! # Config 模块
//!
//! 宿主层运行时配置。
//!
//! ## 配置优先级
//!
//! 1. 命令行参数（最高）
//! 2. 配置文件 (config.json)
//! 3. 默认值（最低）

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// 窗口配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// 窗口宽度
    #[serde(default = "default_window_width")]
    pub width: i32,
    /// 窗口高度
    #[serde(default = "default_window_height")]
    pub height: i32,
    /// 窗口标题
    #[serde(default = "default_window_title")]
    pub title: String,
}

fn default_window_width() -> i32 {
    1100
}

fn default_window_height() -> i32 {
    760
}

fn default_window_title() -> String {
    "Folio".to_string()
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
            title: default_window_title(),
        }
    }
}

/// 调试配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DebugConfig {
    /// 是否在画面上显示每个内容块的动画阶段
    #[serde(default)]
    pub show_phases: bool,
    /// 是否把 Runtime 发出的 Command 写入日志
    #[serde(default)]
    pub log_commands: bool,
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 资源根目录
    #[serde(default = "default_assets_root")]
    pub assets_root: PathBuf,

    /// 简历文件名（相对于 assets_root）
    #[serde(default = "default_resume_file")]
    pub resume_file: String,

    /// 下载目录
    #[serde(default = "default_downloads_dir")]
    pub downloads_dir: PathBuf,

    /// 字体文件名（相对于 assets_root，可选）
    #[serde(default)]
    pub font_file: Option<String>,

    /// 内容文件路径（可选；未配置时使用内置内容）
    #[serde(default)]
    pub content_file: Option<PathBuf>,

    /// 窗口配置
    #[serde(default)]
    pub window: WindowConfig,

    /// 调试配置
    #[serde(default)]
    pub debug: DebugConfig,
}

fn default_assets_root() -> PathBuf {
    PathBuf::from("assets")
}

fn default_resume_file() -> String {
    "resume.pdf".to_string()
}

fn default_downloads_dir() -> PathBuf {
    PathBuf::from("downloads")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assets_root: default_assets_root(),
            resume_file: default_resume_file(),
            downloads_dir: default_downloads_dir(),
            font_file: None,
            content_file: None,
            window: WindowConfig::default(),
            debug: DebugConfig::default(),
        }
    }
}

impl AppConfig {
    /// 从文件加载配置，失败时使用默认值
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!(error = %e, path = %path.display(), "解析配置文件失败，使用默认配置");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// 简历资源的完整路径
    pub fn resume_path(&self) -> PathBuf {
        self.assets_root.join(&self.resume_file)
    }

    /// 字体文件的完整路径（未配置时为 None）
    pub fn font_path(&self) -> Option<PathBuf> {
        self.font_file
            .as_ref()
            .map(|name| self.assets_root.join(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.resume_path(), PathBuf::from("assets/resume.pdf"));
        assert_eq!(config.window.width, 1100);
        assert!(config.content_file.is_none());
        assert!(config.font_path().is_none());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = AppConfig::load(Path::new("/nonexistent/config.json"));
        assert_eq!(config.resume_file, "resume.pdf");
    }

    #[test]
    fn test_partial_json() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "resume_file": "cv.pdf" }"#).unwrap();
        assert_eq!(config.resume_file, "cv.pdf");
        assert_eq!(config.window.title, "Folio");
    }
}
