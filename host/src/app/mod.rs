//! # App 模块
//!
//! 应用状态与主循环逻辑。

mod commands;
mod draw;
mod update;

pub use commands::{PageRoot, execute_command};
pub use draw::draw;
pub use update::update;

use folio_runtime::{
    PageInput, PortfolioConfig, PortfolioData, PortfolioPage, SectionId, SkillCarousel, SkillsView,
};

use crate::config::AppConfig;
use crate::page::decor::Decor;
use crate::panel::ConfigPanel;
use crate::text::TextRenderer;
use crate::ui::{Modal, Theme, ToastManager, UiContext};

/// 应用状态
pub struct AppState {
    /// 应用配置
    pub config: AppConfig,
    /// 页面内容（只读）
    pub content: PortfolioData,
    /// 页面引擎（配置的唯一持有者）
    pub page: PortfolioPage,
    /// 根主题属性的宿主侧镜像
    pub page_root: PageRoot,

    /// UI 上下文
    pub ui: UiContext,
    /// 文本渲染器
    pub text: TextRenderer,
    /// Toast 提示管理器
    pub toasts: ToastManager,
    /// 配置面板
    pub panel: ConfigPanel,
    /// 下载确认对话框（打开时为 Some）
    pub modal: Option<Modal>,
    /// 背景装饰
    pub decor: Decor,
    /// 技能跑马灯
    pub carousel: SkillCarousel,

    /// 页面滚动偏移
    pub scroll: f32,
    /// 页面总高度（上一帧排版结果）
    pub page_height: f32,
    /// 每个内容块的排版矩形（上一帧）
    pub layout: Vec<(SectionId, macroquad::prelude::Rect)>,
    /// 每个内容块上一帧的可见性（用于产生进入/离开事件）
    pub visible: [bool; SectionId::ALL.len()],

    /// 下一次 tick 要消化的输入
    pub pending_inputs: Vec<PageInput>,

    /// 装饰动画时钟
    pub clock: f32,
    /// 技能统计条时钟（切换视图时清零）
    pub skills_clock: f32,
    /// 上一帧的技能视图（检测切换）
    last_skills_view: SkillsView,
}

impl AppState {
    pub fn new(config: AppConfig, content: PortfolioData, text: TextRenderer) -> Self {
        let portfolio_config = PortfolioConfig::default();
        let carousel = SkillCarousel::new(content.flat_skills().iter().map(|s| s.to_string()));

        Self {
            config,
            page: PortfolioPage::new(portfolio_config),
            page_root: PageRoot::default(),
            ui: UiContext::new(Theme::from_style(&portfolio_config.style)),
            text,
            toasts: ToastManager::new(),
            panel: ConfigPanel::new(),
            modal: None,
            decor: Decor::new(),
            carousel,
            scroll: 0.0,
            page_height: 0.0,
            layout: Vec::new(),
            visible: [false; SectionId::ALL.len()],
            pending_inputs: Vec::new(),
            clock: 0.0,
            skills_clock: 0.0,
            last_skills_view: portfolio_config.style.skills_view,
            content,
        }
    }

    /// 技能视图是否刚切换（并推进检测状态）
    pub fn sync_skills_view(&mut self) {
        let current = self.page.config().style.skills_view;
        if current != self.last_skills_view {
            self.last_skills_view = current;
            self.skills_clock = 0.0;
        }
    }
}
