//! # Command 模块
//!
//! 定义 Runtime 向 Host 发出的所有指令。
//! Command 是 Runtime 与 Host 之间的**唯一通信方式**。
//!
//! ## 设计原则
//!
//! - **声明式**：Command 描述"做什么"，不描述"怎么做"
//! - **无副作用**：Command 本身不执行任何操作
//! - **引擎无关**：不包含任何渲染框架的类型

use serde::{Deserialize, Serialize};

/// 主题模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// 浅色
    Light,
    /// 深色
    Dark,
}

impl ThemeMode {
    /// 由深色开关推导模式
    pub fn from_dark_flag(dark_mode: bool) -> Self {
        if dark_mode { Self::Dark } else { Self::Light }
    }

    /// 页面根主题属性的取值
    pub fn as_attr(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// 提示消息类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    /// 普通信息
    Info,
    /// 成功
    Success,
    /// 错误
    Error,
}

/// Runtime 向 Host 发出的指令
///
/// Host 接收 Command 后，将其转换为实际的渲染、IO 等操作。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// 将主题模式镜像到页面根主题属性
    SetRootTheme {
        /// 目标模式
        mode: ThemeMode,
    },

    /// 显示一条短暂的提示消息
    ShowToast {
        /// 消息类型
        kind: ToastKind,
        /// 消息内容
        message: String,
    },

    /// 获取简历资源并保存到本地
    ///
    /// Host 完成（或失败）后通过
    /// [`PageInput::DownloadFinished`](crate::input::PageInput) 回报结果。
    FetchResume,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_mode_attr() {
        assert_eq!(ThemeMode::Dark.as_attr(), "dark");
        assert_eq!(ThemeMode::Light.as_attr(), "light");
        assert_eq!(ThemeMode::from_dark_flag(true), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_dark_flag(false), ThemeMode::Light);
    }

    #[test]
    fn test_command_serialization() {
        let cmd = Command::ShowToast {
            kind: ToastKind::Success,
            message: "Resume saved".to_string(),
        };

        let json = serde_json::to_string(&cmd).unwrap();
        let deserialized: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, deserialized);
    }
}
