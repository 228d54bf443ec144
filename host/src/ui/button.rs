//! # 按钮组件

use super::{UiContext, color_with_alpha, draw_rounded_rect};
use crate::text::TextRenderer;
use macroquad::prelude::*;

/// 按钮状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonState {
    Normal,
    Hovered,
    Pressed,
}

/// 按钮样式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    /// 主要按钮（强调色）
    Primary,
    /// 次要按钮（普通）
    Secondary,
    /// 选中态（分段选择控件中当前项）
    Selected,
}

/// 按钮组件
pub struct Button {
    /// 按钮文本
    pub text: String,
    /// 按钮矩形区域
    pub rect: Rect,
    /// 按钮样式
    pub style: ButtonStyle,
    /// 当前状态
    state: ButtonState,
}

impl Button {
    pub fn new(text: impl Into<String>, x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            text: text.into(),
            rect: Rect::new(x, y, w, h),
            style: ButtonStyle::Secondary,
            state: ButtonState::Normal,
        }
    }

    /// 设置样式
    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// 更新按钮状态并返回是否被点击
    pub fn update(&mut self, ctx: &UiContext) -> bool {
        let hovered = ctx.mouse_in_rect(self.rect);

        if hovered {
            self.state = if ctx.mouse_pressed {
                ButtonState::Pressed
            } else {
                ButtonState::Hovered
            };

            // 鼠标释放时算作点击
            if ctx.mouse_just_released {
                return true;
            }
        } else {
            self.state = ButtonState::Normal;
        }

        false
    }

    /// 绘制按钮
    pub fn draw(&self, ctx: &UiContext, text: &TextRenderer, alpha: f32) {
        let theme = &ctx.theme;

        let (bg_color, text_color) = match (self.style, self.state) {
            (ButtonStyle::Primary, ButtonState::Normal) => (theme.accent, WHITE),
            (ButtonStyle::Primary, ButtonState::Hovered) => (theme.accent_hover, WHITE),
            (ButtonStyle::Primary, ButtonState::Pressed) => (theme.accent_pressed, WHITE),
            (ButtonStyle::Secondary, ButtonState::Normal) => (theme.button_bg, theme.text_primary),
            (ButtonStyle::Secondary, ButtonState::Hovered) => {
                (theme.button_hover, theme.text_primary)
            }
            (ButtonStyle::Secondary, ButtonState::Pressed) => {
                (theme.button_pressed, theme.text_primary)
            }
            (ButtonStyle::Selected, _) => (theme.accent, WHITE),
        };

        draw_rounded_rect(
            self.rect.x,
            self.rect.y,
            self.rect.w,
            self.rect.h,
            theme.corner_radius.min(self.rect.h / 2.0),
            color_with_alpha(bg_color, alpha),
        );

        // 文字居中
        let font_size = theme.font_size_normal;
        let text_width = text.measure(&self.text, font_size).width;
        let text_x = self.rect.x + (self.rect.w - text_width) / 2.0;
        let text_y = self.rect.y + (self.rect.h + font_size * 0.7) / 2.0;
        text.draw(
            &self.text,
            text_x,
            text_y,
            font_size,
            color_with_alpha(text_color, alpha),
        );
    }
}
