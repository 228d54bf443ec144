//! # Page 模块
//!
//! 单页排版与视口可见性观察。
//!
//! 排版是一次纯测量：给定内容、主题与视口宽度，算出每个内容块在
//! 页面坐标系（y 自页面顶部向下）中的矩形。绘制时把矩形减去滚动
//! 偏移、再叠加该内容块的入场几何偏移。

pub mod decor;
pub mod sections;

use folio_runtime::{PortfolioConfig, PortfolioData, SectionId, SkillCarousel};
use macroquad::prelude::Rect;

use crate::text::TextRenderer;
use crate::ui::{Theme, UiContext};

/// 顶部导航条高度
pub const NAV_HEIGHT: f32 = 64.0;
/// 内容列最大宽度
pub const CONTENT_MAX_WIDTH: f32 = 896.0;
/// 内容块之间的垂直间距
pub const SECTION_GAP: f32 = 48.0;
/// 视口可见性阈值（内容块高度的占比）
pub const VISIBILITY_THRESHOLD: f32 = 0.1;

/// 渲染/测量上下文
pub struct SectionCtx<'a> {
    pub ui: &'a UiContext,
    pub text: &'a TextRenderer,
    pub content: &'a PortfolioData,
    pub config: &'a PortfolioConfig,
    pub carousel: &'a SkillCarousel,
    /// 装饰动画时钟（自启动以来的秒数）
    pub clock: f32,
    /// 技能统计条的动画时钟（切换视图时清零）
    pub skills_clock: f32,
    /// 是否实际绘制（false 时只测量）
    pub paint: bool,
    /// 所在内容块的入场透明度
    pub alpha: f32,
}

/// 页面排版结果
pub struct PageLayout {
    /// 每个内容块的页面坐标矩形，按排版顺序
    pub sections: Vec<(SectionId, Rect)>,
    /// 页面总高度
    pub total_height: f32,
}

impl PageLayout {
    /// 查找内容块的矩形
    pub fn rect_of(&self, id: SectionId) -> Option<Rect> {
        self.sections
            .iter()
            .find(|(sid, _)| *sid == id)
            .map(|(_, rect)| *rect)
    }
}

/// 内容列的 x 坐标与宽度
pub fn content_column(screen_width: f32) -> (f32, f32) {
    let w = CONTENT_MAX_WIDTH.min(screen_width - 48.0).max(320.0);
    ((screen_width - w) / 2.0, w)
}

/// 测量整页排版
pub fn layout(ctx: &SectionCtx) -> PageLayout {
    let (x, w) = content_column(ctx.ui.screen_width);
    let mut y = NAV_HEIGHT + SECTION_GAP;
    let mut sections = Vec::with_capacity(SectionId::ALL.len());

    for id in SectionId::ALL {
        let height = sections::render(ctx, id, Rect::new(x, y, w, 0.0));
        sections.push((id, Rect::new(x, y, w, height)));
        y += height + SECTION_GAP;
    }

    PageLayout {
        sections,
        total_height: y,
    }
}

/// 内容块是否算作进入视口
///
/// 至少 [`VISIBILITY_THRESHOLD`] 的高度与视口相交时为 true。
pub fn section_visible(rect: Rect, scroll: f32, screen_height: f32) -> bool {
    let top = rect.y - scroll;
    let bottom = top + rect.h;
    let overlap = bottom.min(screen_height) - top.max(0.0);
    overlap >= rect.h * VISIBILITY_THRESHOLD
}

/// 主介绍区的按钮矩形（左：Contact Me，右：Download CV）
pub fn hero_button_rects(rect: Rect, theme: &Theme) -> (Rect, Rect) {
    let button_w = 170.0;
    let y = rect.y + rect.h - theme.padding - theme.button_height;
    let center = rect.x + rect.w / 2.0;
    (
        Rect::new(
            center - button_w - theme.spacing_small,
            y,
            button_w,
            theme.button_height,
        ),
        Rect::new(center + theme.spacing_small, y, button_w, theme.button_height),
    )
}

/// 技能区头部的视图切换按钮矩形（左：Card，右：Stats）
pub fn skills_toggle_rects(rect: Rect, theme: &Theme) -> (Rect, Rect) {
    let w = 72.0;
    let h = 30.0;
    let y = rect.y + theme.padding + 4.0;
    let right = rect.x + rect.w - theme.padding;
    (
        Rect::new(right - w * 2.0 - theme.spacing_small, y, w, h),
        Rect::new(right - w, y, w, h),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_visibility_threshold() {
        let rect = Rect::new(0.0, 1000.0, 800.0, 200.0);

        // 完全在视口下方
        assert!(!section_visible(rect, 0.0, 700.0));
        // 露出不到 10%
        assert!(!section_visible(rect, 310.0, 700.0));
        // 露出超过 10%
        assert!(section_visible(rect, 330.0, 700.0));
        // 完全可见
        assert!(section_visible(rect, 600.0, 700.0));
        // 滚过头，完全在视口上方
        assert!(!section_visible(rect, 1300.0, 700.0));
    }

    #[test]
    fn test_content_column_centered() {
        let (x, w) = content_column(1100.0);
        assert_eq!(w, CONTENT_MAX_WIDTH);
        assert!((x - (1100.0 - w) / 2.0).abs() < 1e-6);

        // 窄屏时收缩
        let (_, w) = content_column(700.0);
        assert_eq!(w, 700.0 - 48.0);
    }
}
