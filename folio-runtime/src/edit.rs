//! # Edit 模块
//!
//! 配置面板的编辑模型。
//!
//! 面板的每次字段编辑都产出一个 [`ConfigEdit`]；[`ConfigEdit::apply`]
//! 基于旧配置产出一份**只改了该字段**的完整替换配置。模型本身不做
//! 数值校验，min/max 由面板控件使用本模块导出的区间常量约束。

use crate::config::{
    AnimationDirection, AnimationKind, PortfolioConfig, SkillsView,
};

/// 时长控件区间（秒）
pub const DURATION_RANGE: (f32, f32) = (0.1, 2.0);
/// 延迟控件区间（秒）
pub const DELAY_RANGE: (f32, f32) = (0.0, 1.0);
/// 圆角控件区间（像素）
pub const BORDER_RADIUS_RANGE: (f32, f32) = (0.0, 20.0);

/// 单字段编辑
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigEdit {
    /// 动画类型
    AnimationKind(AnimationKind),
    /// 水平偏向
    AnimationDirection(AnimationDirection),
    /// 过渡时长（秒）
    Duration(f32),
    /// 起始延迟（秒）
    Delay(f32),
    /// 圆角半径（像素）
    BorderRadius(f32),
    /// 卡片阴影开关
    BoxShadow(bool),
    /// 深色模式开关
    DarkMode(bool),
    /// 技能区展示形式
    SkillsView(SkillsView),
}

impl ConfigEdit {
    /// 产出替换配置：旧配置的副本，仅本编辑对应的字段被改写
    pub fn apply(&self, config: &PortfolioConfig) -> PortfolioConfig {
        let mut next = *config;
        match *self {
            ConfigEdit::AnimationKind(kind) => next.animation.kind = kind,
            ConfigEdit::AnimationDirection(direction) => next.animation.direction = direction,
            ConfigEdit::Duration(duration) => next.animation.duration = duration,
            ConfigEdit::Delay(delay) => next.animation.delay = delay,
            ConfigEdit::BorderRadius(radius) => next.style.border_radius = radius,
            ConfigEdit::BoxShadow(enabled) => next.style.box_shadow = enabled,
            ConfigEdit::DarkMode(enabled) => next.style.dark_mode = enabled,
            ConfigEdit::SkillsView(view) => next.style.skills_view = view,
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_changes_exactly_one_field() {
        let base = PortfolioConfig::default();
        let edited = ConfigEdit::DarkMode(true).apply(&base);

        assert!(edited.style.dark_mode);
        // 其余字段保持原值
        assert_eq!(edited.animation, base.animation);
        assert_eq!(edited.style.border_radius, base.style.border_radius);
        assert_eq!(edited.style.box_shadow, base.style.box_shadow);
        assert_eq!(edited.style.skills_view, base.style.skills_view);
    }

    #[test]
    fn test_toggle_roundtrip_restores_original() {
        // 往返恢复：改一个字段再改回去，与原值逐字段相等
        let base = PortfolioConfig::default();

        let there = ConfigEdit::AnimationKind(AnimationKind::Fade).apply(&base);
        let back = ConfigEdit::AnimationKind(base.animation.kind).apply(&there);
        assert_eq!(back, base);

        let there = ConfigEdit::Duration(1.5).apply(&base);
        let back = ConfigEdit::Duration(base.animation.duration).apply(&there);
        assert_eq!(back, base);
    }

    #[test]
    fn test_apply_does_not_clamp() {
        // 区间约束属于控件，不属于模型
        let base = PortfolioConfig::default();
        let edited = ConfigEdit::Duration(-3.0).apply(&base);
        assert_eq!(edited.animation.duration, -3.0);

        let edited = ConfigEdit::BorderRadius(500.0).apply(&base);
        assert_eq!(edited.style.border_radius, 500.0);
    }

    #[test]
    fn test_widget_ranges() {
        assert!(DURATION_RANGE.0 < DURATION_RANGE.1);
        assert!(DELAY_RANGE.0 < DELAY_RANGE.1);
        assert!(BORDER_RADIUS_RANGE.0 < BORDER_RADIUS_RANGE.1);
    }
}
