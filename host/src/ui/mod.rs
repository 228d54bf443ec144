//! # UI 组件模块
//!
//! 提供页面与配置面板共用的 UI 组件库。

pub mod button;
pub mod modal;
pub mod theme;
pub mod toast;

pub use button::{Button, ButtonStyle};
pub use modal::{Modal, ModalResult};
pub use theme::Theme;
pub use toast::{Toast, ToastManager};

use macroquad::prelude::*;

/// UI 上下文，存储 UI 渲染所需的共享状态
pub struct UiContext {
    /// 当前主题
    pub theme: Theme,
    /// 屏幕宽度
    pub screen_width: f32,
    /// 屏幕高度
    pub screen_height: f32,
    /// 鼠标位置
    pub mouse_pos: Vec2,
    /// 鼠标是否按下
    pub mouse_pressed: bool,
    /// 鼠标是否刚按下（本帧）
    pub mouse_just_pressed: bool,
    /// 鼠标是否刚释放（本帧）
    pub mouse_just_released: bool,
}

impl UiContext {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            screen_width: screen_width(),
            screen_height: screen_height(),
            mouse_pos: Vec2::ZERO,
            mouse_pressed: false,
            mouse_just_pressed: false,
            mouse_just_released: false,
        }
    }

    /// 每帧更新状态
    pub fn update(&mut self) {
        self.screen_width = screen_width();
        self.screen_height = screen_height();
        self.mouse_pos = Vec2::new(mouse_position().0, mouse_position().1);
        self.mouse_just_pressed = is_mouse_button_pressed(MouseButton::Left);
        self.mouse_just_released = is_mouse_button_released(MouseButton::Left);
        self.mouse_pressed = is_mouse_button_down(MouseButton::Left);
    }

    /// 检查鼠标是否在矩形内
    pub fn mouse_in_rect(&self, rect: Rect) -> bool {
        rect.contains(self.mouse_pos)
    }
}

/// 为颜色应用 alpha 系数
#[inline]
pub fn color_with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, color.a * alpha)
}

/// 绘制圆角矩形（用四个圆角近似）
pub fn draw_rounded_rect(x: f32, y: f32, w: f32, h: f32, radius: f32, color: Color) {
    let r = radius.clamp(0.0, (w / 2.0).min(h / 2.0));

    if r <= 0.5 {
        draw_rectangle(x, y, w, h, color);
        return;
    }

    // 中心矩形
    draw_rectangle(x + r, y, w - 2.0 * r, h, color);
    // 左右矩形
    draw_rectangle(x, y + r, r, h - 2.0 * r, color);
    draw_rectangle(x + w - r, y + r, r, h - 2.0 * r, color);

    // 四个角（用圆形近似）
    draw_circle(x + r, y + r, r, color);
    draw_circle(x + w - r, y + r, r, color);
    draw_circle(x + r, y + h - r, r, color);
    draw_circle(x + w - r, y + h - r, r, color);
}

/// 绘制卡片：可选阴影 + 圆角背景
///
/// 圆角半径与阴影开关来自主题（即实时的样式配置）；`alpha`
/// 是所在内容块的入场透明度。
pub fn draw_card(x: f32, y: f32, w: f32, h: f32, theme: &Theme, alpha: f32) {
    if theme.card_shadow {
        draw_rounded_rect(
            x + 2.0,
            y + 3.0,
            w,
            h,
            theme.corner_radius,
            color_with_alpha(theme.shadow, alpha),
        );
    }
    draw_rounded_rect(
        x,
        y,
        w,
        h,
        theme.corner_radius,
        color_with_alpha(theme.bg_card, alpha),
    );
}

/// 全屏覆盖层（半透明背景）
pub fn draw_overlay(ctx: &UiContext) {
    draw_rectangle(
        0.0,
        0.0,
        ctx.screen_width,
        ctx.screen_height,
        ctx.theme.bg_overlay,
    );
}
