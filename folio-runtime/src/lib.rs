//! # Folio Runtime
//!
//! 个人作品集页面的核心运行时库。
//!
//! ## 架构概述
//!
//! `folio-runtime` 是纯逻辑核心，不依赖任何 IO 或渲染引擎。
//! 它通过 **命令驱动模式** 与宿主层（Host）通信：
//!
//! ```text
//! Host                          Runtime
//!   │                              │
//!   │──── PageInput ─────────────►│
//!   │                              │ tick(dt)
//!   │◄─── Vec<Command> ───────────│
//!   │                              │
//! ```
//!
//! Host 负责窗口、滚动、可见性观察与绘制；Runtime 持有配置值与
//! 每个内容块的入场动画状态机，并决定它们的几何状态。
//!
//! ## 核心类型
//!
//! - [`PortfolioConfig`]：动画/样式配置（不可变值，整体替换）
//! - [`SectionAnimator`]：单个内容块的 trigger-once 入场动画状态机
//! - [`PortfolioPage`]：页面引擎，配置的唯一持有者
//! - [`Command`]：Runtime 向 Host 发出的指令
//! - [`PageInput`]：Host 向 Runtime 传递的输入
//! - [`PortfolioData`]：只读的页面内容

pub mod animator;
pub mod carousel;
pub mod command;
pub mod config;
pub mod content;
pub mod easing;
pub mod edit;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
pub mod section;

pub use animator::{SectionAnimator, SectionPhase};
pub use carousel::SkillCarousel;
pub use command::{Command, ThemeMode, ToastKind};
pub use config::{
    AnimationConfig, AnimationDirection, AnimationKind, PortfolioConfig, SkillsView, StyleConfig,
};
pub use content::{
    Education, Experience, Language, PersonalInfo, PortfolioData, Proficiency, Project, SkillBar,
    SkillGroup, SocialLink,
};
pub use easing::EasingFunction;
pub use edit::{BORDER_RADIUS_RANGE, ConfigEdit, DELAY_RANGE, DURATION_RANGE};
pub use engine::PortfolioPage;
pub use error::ContentError;
pub use geometry::{ENTRY_OFFSET, SectionGeometry, Vec2};
pub use input::{DownloadOutcome, PageInput};
pub use section::SectionId;
