//! # Input 模块
//!
//! 定义 Host 向 Runtime 传递的输入事件。
//!
//! ## 设计说明
//!
//! - Runtime 不直接处理鼠标/滚动事件，只处理语义化的输入
//! - 可见性事件由 Host 的视口观察产生；trigger-once 的判定在
//!   Runtime 内部完成，Host 可以放心地重复上报
//! - 配置替换是**整值交换**：面板产出一份只改了一个字段的完整
//!   配置副本，由页面持有者一次性换入

use serde::{Deserialize, Serialize};

use crate::config::PortfolioConfig;
use crate::section::SectionId;

/// 简历下载结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DownloadOutcome {
    /// 已保存到本地
    Saved {
        /// 保存路径
        path: String,
    },
    /// 获取或保存失败
    Failed {
        /// 失败原因（面向用户的描述）
        reason: String,
    },
}

/// Host 向 Runtime 传递的输入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PageInput {
    /// 内容块进入视口
    SectionEntered {
        /// 内容块标识
        id: SectionId,
    },

    /// 内容块离开视口
    ///
    /// 接受但不产生任何效果：可见性信号对动画而言只在首次变为
    /// true 时有意义。
    SectionLeft {
        /// 内容块标识
        id: SectionId,
    },

    /// 用整份新配置替换当前配置
    ReplaceConfig {
        /// 新配置
        config: PortfolioConfig,
    },

    /// 用户请求下载简历
    DownloadRequested,

    /// Host 回报下载流程的结果
    DownloadFinished {
        /// 结果
        outcome: DownloadOutcome,
    },
}

impl PageInput {
    /// 创建进入视口输入
    pub fn entered(id: SectionId) -> Self {
        Self::SectionEntered { id }
    }

    /// 创建离开视口输入
    pub fn left(id: SectionId) -> Self {
        Self::SectionLeft { id }
    }

    /// 创建配置替换输入
    pub fn replace(config: PortfolioConfig) -> Self {
        Self::ReplaceConfig { config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_creation() {
        assert_eq!(
            PageInput::entered(SectionId::Hero),
            PageInput::SectionEntered {
                id: SectionId::Hero
            }
        );
        assert_eq!(
            PageInput::left(SectionId::Footer),
            PageInput::SectionLeft {
                id: SectionId::Footer
            }
        );
    }

    #[test]
    fn test_input_serialization() {
        let input = PageInput::DownloadFinished {
            outcome: DownloadOutcome::Saved {
                path: "downloads/resume.pdf".to_string(),
            },
        };
        let json = serde_json::to_string(&input).unwrap();
        let deserialized: PageInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, deserialized);
    }
}
