//! # Toast 提示组件

use super::{UiContext, color_with_alpha, draw_rounded_rect};
use crate::text::TextRenderer;
use folio_runtime::ToastKind;
use macroquad::prelude::*;

/// 单个 Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    /// 消息内容
    pub message: String,
    /// 类型
    pub kind: ToastKind,
    /// 剩余显示时间
    pub remaining_time: f32,
    /// 淡出进度 (0.0 - 1.0)
    pub fade_progress: f32,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind, duration: f32) -> Self {
        Self {
            message: message.into(),
            kind,
            remaining_time: duration,
            fade_progress: 0.0,
        }
    }

    /// 更新状态，返回是否应该移除
    pub fn update(&mut self, dt: f32) -> bool {
        self.remaining_time -= dt;

        // 最后 0.3 秒开始淡出
        if self.remaining_time <= 0.3 {
            self.fade_progress = 1.0 - (self.remaining_time / 0.3).max(0.0);
        }

        self.remaining_time <= 0.0
    }
}

/// Toast 管理器
pub struct ToastManager {
    /// 活跃的 Toast 列表
    toasts: Vec<Toast>,
    /// 默认显示时间
    default_duration: f32,
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: Vec::new(),
            default_duration: 3.0,
        }
    }

    /// 显示消息
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.toasts
            .push(Toast::new(message, kind, self.default_duration));
    }

    /// 更新所有 Toast
    pub fn update(&mut self, dt: f32) {
        self.toasts.retain_mut(|toast| !toast.update(dt));
    }

    /// 是否有活跃的 Toast
    pub fn has_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }

    /// 活跃的 Toast 列表
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// 绘制所有 Toast（右上角堆叠）
    pub fn draw(&self, ctx: &UiContext, text: &TextRenderer) {
        let theme = &ctx.theme;
        let toast_height = 48.0;
        let margin = theme.spacing;
        let start_y = 80.0;

        for (i, toast) in self.toasts.iter().enumerate() {
            let font_size = theme.font_size_small;
            let toast_width = text.measure(&toast.message, font_size).width + theme.padding * 2.0;
            let y = start_y + i as f32 * (toast_height + margin);
            let x = ctx.screen_width - toast_width - margin;

            let accent = match toast.kind {
                ToastKind::Info => theme.accent,
                ToastKind::Success => theme.success,
                ToastKind::Error => theme.danger,
            };

            // 应用淡出透明度
            let alpha = 1.0 - toast.fade_progress;

            draw_rounded_rect(
                x,
                y,
                toast_width,
                toast_height,
                theme.corner_radius,
                color_with_alpha(theme.bg_card, 0.95 * alpha),
            );
            // 左侧类型色条
            draw_rectangle(
                x,
                y + 4.0,
                4.0,
                toast_height - 8.0,
                color_with_alpha(accent, alpha),
            );

            text.draw(
                &toast.message,
                x + theme.padding,
                y + toast_height / 2.0 + font_size * 0.35,
                font_size,
                color_with_alpha(theme.text_primary, alpha),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_lifecycle() {
        let mut manager = ToastManager::new();
        manager.show("saved", ToastKind::Success);
        assert!(manager.has_toasts());

        // 显示时间耗尽后移除
        manager.update(10.0);
        assert!(!manager.has_toasts());
    }

    #[test]
    fn test_toast_fades_near_end() {
        let mut toast = Toast::new("hi", ToastKind::Info, 1.0);
        assert!(!toast.update(0.8));
        assert!(toast.fade_progress > 0.0);
    }
}
