//! # Config 模块
//!
//! 定义页面的动画/样式配置模型。
//!
//! ## 设计原则
//!
//! - 配置是**不可变值**：编辑产生一份完整的替换值，不做原地修改
//! - 配置只有类型形状，**不做数值校验**；数值输入的 min/max
//!   由面板控件约束（见 [`crate::edit`]），越界值原样接受
//! - 所有类型可序列化，便于宿主与外部工具读写

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 入场动画类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
    /// 上跳入场（向上位移 + 淡入）
    #[default]
    Jump,
    /// 淡入入场（仅透明度，可带水平位移）
    Fade,
    /// 无动画（内容块始终直接可见，不观察可见性）
    None,
}

impl FromStr for AnimationKind {
    type Err = ();

    /// 从字符串解析（不区分大小写）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jump" => Ok(Self::Jump),
            "fade" => Ok(Self::Fade),
            "none" => Ok(Self::None),
            _ => Err(()),
        }
    }
}

/// 入场动画的水平偏向
///
/// 决定隐藏态的水平偏移方向；`Normal` 不加水平偏移。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationDirection {
    /// 从左向右入场（隐藏态偏左）
    Ltr,
    /// 从右向左入场（隐藏态偏右）
    Rtl,
    /// 无水平偏移
    #[default]
    Normal,
}

impl FromStr for AnimationDirection {
    type Err = ();

    /// 从字符串解析（不区分大小写）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ltr" => Ok(Self::Ltr),
            "rtl" => Ok(Self::Rtl),
            "normal" => Ok(Self::Normal),
            _ => Err(()),
        }
    }
}

/// 动画配置
///
/// 描述内容块如何入场。每个 Section Animator 在每次渲染时读取
/// 最新快照；已完成的动画不会因配置变化而重播。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// 动画类型
    #[serde(rename = "type")]
    pub kind: AnimationKind,
    /// 水平偏向
    pub direction: AnimationDirection,
    /// 过渡时长（秒）
    pub duration: f32,
    /// 触发后的起始延迟（秒）
    pub delay: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            kind: AnimationKind::Jump,
            direction: AnimationDirection::Normal,
            duration: 0.5,
            delay: 0.2,
        }
    }
}

/// 技能区的展示形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillsView {
    /// 卡片视图（按熟练度分组的网格）
    #[default]
    Card,
    /// 统计视图（带等级条）
    Stats,
}

impl FromStr for SkillsView {
    type Err = ();

    /// 从字符串解析（不区分大小写）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "card" => Ok(Self::Card),
            "stats" => Ok(Self::Stats),
            _ => Err(()),
        }
    }
}

/// 样式配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// 卡片圆角半径（像素）
    pub border_radius: f32,
    /// 是否绘制卡片阴影
    pub box_shadow: bool,
    /// 是否为深色模式（镜像到页面根主题属性）
    pub dark_mode: bool,
    /// 技能区展示形式（与动画引擎无关）
    pub skills_view: SkillsView,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            border_radius: 8.0,
            box_shadow: true,
            dark_mode: false,
            skills_view: SkillsView::Card,
        }
    }
}

/// 页面配置
///
/// 由页面根组件独占持有，按值传递给每个 Section 包装器与配置面板。
/// 任何修改都通过面板回调向上提交一份完整的替换值。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PortfolioConfig {
    /// 动画配置
    pub animation: AnimationConfig,
    /// 样式配置
    pub style: StyleConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_config() {
        let config = PortfolioConfig::default();
        assert_eq!(config.animation.kind, AnimationKind::Jump);
        assert_eq!(config.animation.direction, AnimationDirection::Normal);
        assert_eq!(config.animation.duration, 0.5);
        assert_eq!(config.animation.delay, 0.2);
        assert_eq!(config.style.border_radius, 8.0);
        assert!(config.style.box_shadow);
        assert!(!config.style.dark_mode);
        assert_eq!(config.style.skills_view, SkillsView::Card);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(AnimationKind::from_str("jump"), Ok(AnimationKind::Jump));
        assert_eq!(AnimationKind::from_str("FADE"), Ok(AnimationKind::Fade));
        assert_eq!(AnimationKind::from_str("None"), Ok(AnimationKind::None));
        assert_eq!(AnimationKind::from_str("bounce"), Err(()));
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!(
            AnimationDirection::from_str("ltr"),
            Ok(AnimationDirection::Ltr)
        );
        assert_eq!(
            AnimationDirection::from_str("RTL"),
            Ok(AnimationDirection::Rtl)
        );
        assert_eq!(
            AnimationDirection::from_str("normal"),
            Ok(AnimationDirection::Normal)
        );
        assert_eq!(AnimationDirection::from_str(""), Err(()));
    }

    #[test]
    fn test_config_json_roundtrip() {
        let mut config = PortfolioConfig::default();
        config.animation.kind = AnimationKind::Fade;
        config.animation.direction = AnimationDirection::Rtl;
        config.style.dark_mode = true;
        config.style.skills_view = SkillsView::Stats;

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: PortfolioConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_enum_serde_lowercase() {
        let json = serde_json::to_string(&AnimationKind::None).unwrap();
        assert_eq!(json, "\"none\"");
        let json = serde_json::to_string(&SkillsView::Stats).unwrap();
        assert_eq!(json, "\"stats\"");
    }

    #[test]
    fn test_out_of_range_values_accepted() {
        // 模型不做校验：负时长原样保留，由渲染层自行容忍
        let json = r#"{
            "animation": { "type": "jump", "direction": "normal", "duration": -1.0, "delay": -0.5 },
            "style": { "border_radius": 999.0, "box_shadow": false, "dark_mode": false, "skills_view": "card" }
        }"#;
        let config: PortfolioConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.animation.duration, -1.0);
        assert_eq!(config.animation.delay, -0.5);
        assert_eq!(config.style.border_radius, 999.0);
    }
}
