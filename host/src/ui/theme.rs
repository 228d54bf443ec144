//! # UI 主题
//!
//! 定义 UI 的颜色、字体大小、间距等样式。
//!
//! 调色板由 [`StyleConfig`] 的 `dark_mode` 决定；`border_radius` 与
//! `box_shadow` 直接取自配置，因此配置面板的修改在下一帧就反映到
//! 所有卡片上。

use folio_runtime::StyleConfig;
use macroquad::prelude::Color;

/// UI 主题配置
#[derive(Debug, Clone)]
pub struct Theme {
    // ===== 颜色 =====
    /// 页面背景色
    pub bg_primary: Color,
    /// 次要背景色（分隔条、滑轨等）
    pub bg_secondary: Color,
    /// 卡片背景色
    pub bg_card: Color,
    /// 覆盖层背景色（半透明黑）
    pub bg_overlay: Color,
    /// 卡片阴影色
    pub shadow: Color,

    /// 主文字色
    pub text_primary: Color,
    /// 次要文字色
    pub text_secondary: Color,

    /// 强调色（链接、高亮、选中等）
    pub accent: Color,
    /// 强调色悬停
    pub accent_hover: Color,
    /// 强调色按下
    pub accent_pressed: Color,

    /// 按钮默认背景
    pub button_bg: Color,
    /// 按钮悬停背景
    pub button_hover: Color,
    /// 按钮按下背景
    pub button_pressed: Color,

    /// 技术标签背景
    pub tag_bg: Color,
    /// 技术标签文字
    pub tag_text: Color,

    /// 危险/错误色
    pub danger: Color,
    /// 成功色
    pub success: Color,

    // ===== 尺寸 =====
    /// 标题字号
    pub font_size_title: f32,
    /// 大字号
    pub font_size_large: f32,
    /// 正常字号
    pub font_size_normal: f32,
    /// 小字号
    pub font_size_small: f32,

    /// 按钮高度
    pub button_height: f32,
    /// 卡片圆角半径（来自样式配置）
    pub corner_radius: f32,
    /// 是否绘制卡片阴影（来自样式配置）
    pub card_shadow: bool,
    /// 标准间距
    pub spacing: f32,
    /// 大间距
    pub spacing_large: f32,
    /// 小间距
    pub spacing_small: f32,
    /// 内边距
    pub padding: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_style(&StyleConfig::default())
    }
}

impl Theme {
    /// 由样式配置推导主题
    pub fn from_style(style: &StyleConfig) -> Self {
        let mut theme = if style.dark_mode {
            Self::dark()
        } else {
            Self::light()
        };
        theme.corner_radius = style.border_radius;
        theme.card_shadow = style.box_shadow;
        theme
    }

    /// 浅色主题
    pub fn light() -> Self {
        Self {
            // 背景
            bg_primary: Color::new(0.98, 0.98, 0.99, 1.0),
            bg_secondary: Color::new(0.9, 0.91, 0.93, 1.0),
            bg_card: Color::new(1.0, 1.0, 1.0, 1.0),
            bg_overlay: Color::new(0.0, 0.0, 0.0, 0.5),
            shadow: Color::new(0.0, 0.0, 0.0, 0.12),

            // 文字
            text_primary: Color::new(0.1, 0.12, 0.16, 1.0),
            text_secondary: Color::new(0.42, 0.45, 0.5, 1.0),

            // 强调色（蓝色调）
            accent: Color::new(0.15, 0.39, 0.92, 1.0),
            accent_hover: Color::new(0.23, 0.47, 0.96, 1.0),
            accent_pressed: Color::new(0.11, 0.31, 0.76, 1.0),

            // 按钮
            button_bg: Color::new(0.88, 0.89, 0.91, 1.0),
            button_hover: Color::new(0.82, 0.84, 0.87, 1.0),
            button_pressed: Color::new(0.76, 0.78, 0.82, 1.0),

            // 标签
            tag_bg: Color::new(0.86, 0.91, 1.0, 1.0),
            tag_text: Color::new(0.11, 0.31, 0.76, 1.0),

            // 状态色
            danger: Color::new(0.85, 0.25, 0.25, 1.0),
            success: Color::new(0.2, 0.65, 0.35, 1.0),

            // 字号
            font_size_title: 42.0,
            font_size_large: 28.0,
            font_size_normal: 20.0,
            font_size_small: 15.0,

            // 尺寸
            button_height: 44.0,
            corner_radius: 8.0,
            card_shadow: true,
            spacing: 16.0,
            spacing_large: 32.0,
            spacing_small: 8.0,
            padding: 24.0,
        }
    }

    /// 深色主题
    pub fn dark() -> Self {
        Self {
            // 背景
            bg_primary: Color::new(0.07, 0.09, 0.12, 1.0),
            bg_secondary: Color::new(0.15, 0.18, 0.23, 1.0),
            bg_card: Color::new(0.12, 0.15, 0.19, 1.0),
            bg_overlay: Color::new(0.0, 0.0, 0.0, 0.7),
            shadow: Color::new(0.0, 0.0, 0.0, 0.45),

            // 文字
            text_primary: Color::new(0.95, 0.96, 0.97, 1.0),
            text_secondary: Color::new(0.62, 0.66, 0.72, 1.0),

            // 强调色
            accent: Color::new(0.38, 0.58, 0.98, 1.0),
            accent_hover: Color::new(0.48, 0.66, 1.0, 1.0),
            accent_pressed: Color::new(0.3, 0.48, 0.85, 1.0),

            // 按钮
            button_bg: Color::new(0.19, 0.23, 0.29, 1.0),
            button_hover: Color::new(0.25, 0.3, 0.37, 1.0),
            button_pressed: Color::new(0.15, 0.18, 0.23, 1.0),

            // 标签
            tag_bg: Color::new(0.12, 0.2, 0.38, 1.0),
            tag_text: Color::new(0.62, 0.76, 1.0, 1.0),

            // 状态色
            danger: Color::new(0.9, 0.35, 0.35, 1.0),
            success: Color::new(0.3, 0.75, 0.45, 1.0),

            // 字号
            font_size_title: 42.0,
            font_size_large: 28.0,
            font_size_normal: 20.0,
            font_size_small: 15.0,

            // 尺寸
            button_height: 44.0,
            corner_radius: 8.0,
            card_shadow: true,
            spacing: 16.0,
            spacing_large: 32.0,
            spacing_small: 8.0,
            padding: 24.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_style_applies_config() {
        let style = StyleConfig {
            border_radius: 14.0,
            box_shadow: false,
            dark_mode: true,
            ..StyleConfig::default()
        };
        let theme = Theme::from_style(&style);
        assert_eq!(theme.corner_radius, 14.0);
        assert!(!theme.card_shadow);
        // 深色调色板
        assert!(theme.bg_primary.r < 0.5);
    }

    #[test]
    fn test_light_and_dark_differ() {
        assert!(Theme::light().bg_primary.r > Theme::dark().bg_primary.r);
    }
}
