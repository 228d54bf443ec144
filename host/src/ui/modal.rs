//! # 模态对话框组件

use super::{Button, ButtonStyle, UiContext, draw_card, draw_overlay};
use crate::text::TextRenderer;
use macroquad::prelude::*;

/// 模态对话框结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalResult {
    /// 无操作
    None,
    /// 确认
    Confirm,
    /// 取消
    Cancel,
}

/// 模态对话框
pub struct Modal {
    /// 标题
    pub title: String,
    /// 消息内容（逐行显示）
    pub lines: Vec<String>,
    /// 确认按钮文本
    pub confirm_text: String,
    /// 内部按钮状态
    confirm_button: Option<Button>,
    cancel_button: Option<Button>,
}

const MODAL_WIDTH: f32 = 420.0;
const MODAL_HEIGHT: f32 = 220.0;

impl Modal {
    /// 创建确认对话框
    pub fn confirm(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
            confirm_text: "Download".to_string(),
            confirm_button: None,
            cancel_button: None,
        }
    }

    /// 设置确认按钮文本
    pub fn with_confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = text.into();
        self
    }

    fn rect(ctx: &UiContext) -> Rect {
        Rect::new(
            (ctx.screen_width - MODAL_WIDTH) / 2.0,
            (ctx.screen_height - MODAL_HEIGHT) / 2.0,
            MODAL_WIDTH,
            MODAL_HEIGHT,
        )
    }

    /// 更新并返回结果
    pub fn update(&mut self, ctx: &UiContext) -> ModalResult {
        let theme = &ctx.theme;
        let rect = Self::rect(ctx);

        let button_width = 130.0;
        let button_y = rect.y + rect.h - theme.button_height - theme.padding;
        let confirm_x = rect.x + rect.w / 2.0 + theme.spacing_small;
        let cancel_x = rect.x + rect.w / 2.0 - button_width - theme.spacing_small;

        if self.confirm_button.is_none() {
            self.confirm_button = Some(
                Button::new(
                    &self.confirm_text,
                    confirm_x,
                    button_y,
                    button_width,
                    theme.button_height,
                )
                .with_style(ButtonStyle::Primary),
            );
        }
        if self.cancel_button.is_none() {
            self.cancel_button = Some(Button::new(
                "Cancel",
                cancel_x,
                button_y,
                button_width,
                theme.button_height,
            ));
        }

        if let Some(ref mut btn) = self.confirm_button
            && btn.update(ctx)
        {
            return ModalResult::Confirm;
        }
        if let Some(ref mut btn) = self.cancel_button
            && btn.update(ctx)
        {
            return ModalResult::Cancel;
        }

        // ESC 取消 / Enter 确认
        if is_key_pressed(KeyCode::Escape) {
            return ModalResult::Cancel;
        }
        if is_key_pressed(KeyCode::Enter) {
            return ModalResult::Confirm;
        }

        ModalResult::None
    }

    /// 绘制对话框
    pub fn draw(&self, ctx: &UiContext, text: &TextRenderer) {
        let theme = &ctx.theme;
        let rect = Self::rect(ctx);

        draw_overlay(ctx);
        draw_card(rect.x, rect.y, rect.w, rect.h, theme, 1.0);

        // 标题
        text.draw(
            &self.title,
            rect.x + theme.padding,
            rect.y + theme.padding + theme.font_size_large * 0.8,
            theme.font_size_large,
            theme.text_primary,
        );

        // 消息行
        let mut y = rect.y + theme.padding + theme.font_size_large + theme.spacing;
        for line in &self.lines {
            y += theme.font_size_normal * 1.3;
            text.draw(
                line,
                rect.x + theme.padding,
                y,
                theme.font_size_normal,
                theme.text_secondary,
            );
        }

        // 按钮
        if let Some(ref btn) = self.confirm_button {
            btn.draw(ctx, text, 1.0);
        }
        if let Some(ref btn) = self.cancel_button {
            btn.draw(ctx, text, 1.0);
        }
    }
}
