//! # Host 层
//!
//! 作品集页面的宿主层实现，使用 macroquad 作为渲染和 IO 引擎。
//!
//! ## 架构说明
//!
//! Host 层负责：
//! - 窗口、滚动与输入采集
//! - 视口可见性观察
//! - 文本与页面绘制
//! - 简历的获取-保存流程
//! - 将 Runtime 的 Command 转换为实际效果
//!
//! Host 层不包含动画策略，入场动画的全部决策在 `folio-runtime`。

pub mod app;
pub mod config;
pub mod download;
pub mod page;
pub mod panel;
pub mod text;
pub mod ui;

pub use app::{AppState, PageRoot, draw, execute_command, update};
pub use config::{AppConfig, DebugConfig, WindowConfig};
pub use download::{DownloadError, fetch_resume, resume_size};
pub use panel::ConfigPanel;
pub use text::TextRenderer;
pub use ui::{Button, Modal, ModalResult, Theme, Toast, ToastManager, UiContext};
