//! # Panel 模块
//!
//! 配置面板：从右侧滑入的控制面板，对每个可编辑字段提供控件。
//!
//! 每次控件变动都产出一个 [`ConfigEdit`]；App 层把它应用到当前配置
//! 上得到完整的替换值，再作为 [`folio_runtime::PageInput::ReplaceConfig`]
//! 交给 Runtime。面板只负责控件的 min/max 约束，模型本身不做校验。

use folio_runtime::{
    AnimationDirection, AnimationKind, BORDER_RADIUS_RANGE, ConfigEdit, DELAY_RANGE,
    DURATION_RANGE, EasingFunction, PortfolioConfig, SkillsView,
};
use macroquad::prelude::*;

use crate::text::TextRenderer;
use crate::ui::{Button, ButtonStyle, UiContext, color_with_alpha, draw_rounded_rect};

/// 面板宽度
const PANEL_WIDTH: f32 = 320.0;
/// 滑入/滑出时长（秒）
const SLIDE_SECS: f32 = 0.25;

/// 面板内各控件的矩形
struct PanelRects {
    panel: Rect,
    close: Rect,
    kind: [Rect; 3],
    direction: [Rect; 3],
    duration: Rect,
    delay: Rect,
    radius: Rect,
    shadow: Rect,
    dark: Rect,
    view: [Rect; 2],
}

/// 配置面板
pub struct ConfigPanel {
    /// 是否展开
    pub open: bool,
    /// 滑入进度 (0.0 - 1.0)
    slide: f32,
    /// 正在拖动的滑块
    dragging: Option<&'static str>,
}

impl Default for ConfigPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigPanel {
    pub fn new() -> Self {
        Self {
            open: false,
            slide: 0.0,
            dragging: None,
        }
    }

    /// 切换展开状态
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// 鼠标是否落在面板上（用于屏蔽下层页面的交互）
    pub fn contains_mouse(&self, ctx: &UiContext) -> bool {
        self.slide > 0.01 && ctx.mouse_in_rect(self.rects(ctx).panel)
    }

    /// 面板 x 坐标（带滑入缓动）
    fn panel_x(&self, ctx: &UiContext) -> f32 {
        let eased = EasingFunction::EaseOut.apply(self.slide);
        ctx.screen_width - PANEL_WIDTH * eased
    }

    fn rects(&self, ctx: &UiContext) -> PanelRects {
        let theme = &ctx.theme;
        let x = self.panel_x(ctx) + theme.padding;
        let w = PANEL_WIDTH - theme.padding * 2.0;
        let seg3_w = (w - theme.spacing_small * 2.0) / 3.0;
        let seg2_w = (w - theme.spacing_small) / 2.0;

        let row = |y: f32, h: f32| Rect::new(x, y, w, h);
        let seg = |y: f32, i: f32, sw: f32| {
            Rect::new(x + i * (sw + theme.spacing_small), y, sw, 32.0)
        };

        // 自上而下排布：标题、Animation 组、Style 组
        let mut y = 16.0 + theme.font_size_large + theme.spacing;
        let header_step = theme.font_size_normal + theme.spacing_small;
        let widget_step = 32.0 + theme.spacing;
        let label_step = theme.font_size_small + 6.0;

        y += header_step; // "Animation"
        y += label_step; // "Type"
        let kind = [seg(y, 0.0, seg3_w), seg(y, 1.0, seg3_w), seg(y, 2.0, seg3_w)];
        y += widget_step;
        y += label_step; // "Direction"
        let direction = [seg(y, 0.0, seg3_w), seg(y, 1.0, seg3_w), seg(y, 2.0, seg3_w)];
        y += widget_step;
        y += label_step; // "Duration"
        let duration = row(y, 28.0);
        y += widget_step;
        y += label_step; // "Delay"
        let delay = row(y, 28.0);
        y += widget_step;

        y += theme.spacing_small + header_step; // "Style"
        y += label_step; // "Border Radius"
        let radius = row(y, 28.0);
        y += widget_step;
        let shadow = Rect::new(x + w - 56.0, y, 56.0, 28.0); // "Box Shadow"
        y += widget_step;
        let dark = Rect::new(x + w - 56.0, y, 56.0, 28.0); // "Dark Mode"
        y += widget_step;
        y += label_step; // "Skills View"
        let view = [seg(y, 0.0, seg2_w), seg(y, 1.0, seg2_w)];

        PanelRects {
            panel: Rect::new(self.panel_x(ctx), 0.0, PANEL_WIDTH, ctx.screen_height),
            close: Rect::new(self.panel_x(ctx) + PANEL_WIDTH - 44.0, 14.0, 30.0, 30.0),
            kind,
            direction,
            duration,
            delay,
            radius,
            shadow,
            dark,
            view,
        }
    }

    /// 更新面板，返回本帧产生的编辑
    pub fn update(&mut self, ctx: &UiContext, config: &PortfolioConfig, dt: f32) -> Vec<ConfigEdit> {
        // 滑入/滑出
        let target = if self.open { 1.0 } else { 0.0 };
        let step = dt / SLIDE_SECS;
        self.slide = if self.slide < target {
            (self.slide + step).min(target)
        } else {
            (self.slide - step).max(target)
        };

        if !self.open || self.slide < 0.99 {
            self.dragging = None;
            return Vec::new();
        }

        let rects = self.rects(ctx);
        let mut edits = Vec::new();

        // 关闭按钮
        if ctx.mouse_just_released && ctx.mouse_in_rect(rects.close) {
            self.open = false;
            return edits;
        }

        // 分段选择：动画类型
        let kinds = [AnimationKind::Jump, AnimationKind::Fade, AnimationKind::None];
        for (rect, kind) in rects.kind.iter().zip(kinds) {
            if ctx.mouse_just_released
                && ctx.mouse_in_rect(*rect)
                && config.animation.kind != kind
            {
                edits.push(ConfigEdit::AnimationKind(kind));
            }
        }

        // 分段选择：方向
        let directions = [
            AnimationDirection::Normal,
            AnimationDirection::Ltr,
            AnimationDirection::Rtl,
        ];
        for (rect, direction) in rects.direction.iter().zip(directions) {
            if ctx.mouse_just_released
                && ctx.mouse_in_rect(*rect)
                && config.animation.direction != direction
            {
                edits.push(ConfigEdit::AnimationDirection(direction));
            }
        }

        // 滑块
        if ctx.mouse_just_released {
            self.dragging = None;
        }
        if let Some(value) = self.slider_value(
            ctx,
            "duration",
            rects.duration,
            DURATION_RANGE,
            0.1,
            config.animation.duration,
        ) {
            edits.push(ConfigEdit::Duration(value));
        }
        if let Some(value) = self.slider_value(
            ctx,
            "delay",
            rects.delay,
            DELAY_RANGE,
            0.1,
            config.animation.delay,
        ) {
            edits.push(ConfigEdit::Delay(value));
        }
        if let Some(value) = self.slider_value(
            ctx,
            "radius",
            rects.radius,
            BORDER_RADIUS_RANGE,
            1.0,
            config.style.border_radius,
        ) {
            edits.push(ConfigEdit::BorderRadius(value));
        }

        // 开关
        if ctx.mouse_just_released && ctx.mouse_in_rect(rects.shadow) {
            edits.push(ConfigEdit::BoxShadow(!config.style.box_shadow));
        }
        if ctx.mouse_just_released && ctx.mouse_in_rect(rects.dark) {
            edits.push(ConfigEdit::DarkMode(!config.style.dark_mode));
        }

        // 分段选择：技能视图
        let views = [SkillsView::Card, SkillsView::Stats];
        for (rect, view) in rects.view.iter().zip(views) {
            if ctx.mouse_just_released
                && ctx.mouse_in_rect(*rect)
                && config.style.skills_view != view
            {
                edits.push(ConfigEdit::SkillsView(view));
            }
        }

        edits
    }

    /// 滑块的拖动求值：值有变化时返回 Some
    fn slider_value(
        &mut self,
        ctx: &UiContext,
        key: &'static str,
        rect: Rect,
        range: (f32, f32),
        step: f32,
        current: f32,
    ) -> Option<f32> {
        if ctx.mouse_just_pressed && ctx.mouse_in_rect(rect) {
            self.dragging = Some(key);
        }
        if self.dragging != Some(key) {
            return None;
        }

        let rel = ((ctx.mouse_pos.x - rect.x) / rect.w).clamp(0.0, 1.0);
        let raw = range.0 + rel * (range.1 - range.0);
        let value = (raw / step).round() * step;

        if (value - current).abs() > step / 2.0 - 1e-4 {
            Some(value)
        } else {
            None
        }
    }

    /// 绘制面板
    pub fn draw(&self, ctx: &UiContext, text: &TextRenderer, config: &PortfolioConfig) {
        if self.slide < 0.01 {
            return;
        }

        let theme = &ctx.theme;
        let rects = self.rects(ctx);
        let px = rects.panel.x;

        // 面板背景
        draw_rectangle(
            px,
            0.0,
            PANEL_WIDTH,
            ctx.screen_height,
            color_with_alpha(theme.bg_card, 0.98),
        );
        draw_line(px, 0.0, px, ctx.screen_height, 1.0, theme.bg_secondary);

        // 标题与关闭按钮
        text.draw(
            "Configuration",
            px + theme.padding,
            16.0 + theme.font_size_large * 0.8,
            theme.font_size_large,
            theme.text_primary,
        );
        text.draw(
            "x",
            rects.close.x + 10.0,
            rects.close.y + 21.0,
            theme.font_size_normal,
            theme.text_secondary,
        );

        let label = |s: &str, rect: Rect| {
            text.draw(
                s,
                px + theme.padding,
                rect.y - 6.0,
                theme.font_size_small,
                theme.text_secondary,
            );
        };
        let group = |s: &str, y: f32| {
            text.draw(s, px + theme.padding, y, theme.font_size_normal, theme.text_primary);
        };

        // Animation 组
        group("Animation", rects.kind[0].y - 44.0);
        label("Type", rects.kind[0]);
        self.draw_segmented(
            ctx,
            text,
            &rects.kind,
            &["Jump", "Fade", "None"],
            match config.animation.kind {
                AnimationKind::Jump => 0,
                AnimationKind::Fade => 1,
                AnimationKind::None => 2,
            },
        );

        label("Direction", rects.direction[0]);
        self.draw_segmented(
            ctx,
            text,
            &rects.direction,
            &["Normal", "LTR", "RTL"],
            match config.animation.direction {
                AnimationDirection::Normal => 0,
                AnimationDirection::Ltr => 1,
                AnimationDirection::Rtl => 2,
            },
        );

        label("Duration (seconds)", rects.duration);
        self.draw_slider(
            ctx,
            text,
            rects.duration,
            DURATION_RANGE,
            config.animation.duration,
            &format!("{:.1}", config.animation.duration),
        );

        label("Delay (seconds)", rects.delay);
        self.draw_slider(
            ctx,
            text,
            rects.delay,
            DELAY_RANGE,
            config.animation.delay,
            &format!("{:.1}", config.animation.delay),
        );

        // Style 组
        group("Style", rects.radius.y - 44.0);
        label("Border Radius", rects.radius);
        self.draw_slider(
            ctx,
            text,
            rects.radius,
            BORDER_RADIUS_RANGE,
            config.style.border_radius,
            &format!("{:.0}", config.style.border_radius),
        );

        text.draw(
            "Box Shadow",
            px + theme.padding,
            rects.shadow.y + 20.0,
            theme.font_size_normal,
            theme.text_primary,
        );
        self.draw_toggle(ctx, rects.shadow, config.style.box_shadow);

        text.draw(
            "Dark Mode",
            px + theme.padding,
            rects.dark.y + 20.0,
            theme.font_size_normal,
            theme.text_primary,
        );
        self.draw_toggle(ctx, rects.dark, config.style.dark_mode);

        label("Skills View", rects.view[0]);
        self.draw_segmented(
            ctx,
            text,
            &rects.view,
            &["Card", "Stats"],
            match config.style.skills_view {
                SkillsView::Card => 0,
                SkillsView::Stats => 1,
            },
        );
    }

    /// 绘制分段选择控件
    fn draw_segmented(
        &self,
        ctx: &UiContext,
        text: &TextRenderer,
        rects: &[Rect],
        labels: &[&str],
        selected: usize,
    ) {
        for (i, (rect, label)) in rects.iter().zip(labels).enumerate() {
            let style = if i == selected {
                ButtonStyle::Selected
            } else {
                ButtonStyle::Secondary
            };
            let mut btn = Button::new(*label, rect.x, rect.y, rect.w, rect.h).with_style(style);
            btn.update(ctx);
            btn.draw(ctx, text, 1.0);
        }
    }

    /// 绘制滑块
    fn draw_slider(
        &self,
        ctx: &UiContext,
        text: &TextRenderer,
        rect: Rect,
        range: (f32, f32),
        value: f32,
        value_label: &str,
    ) {
        let theme = &ctx.theme;
        let track_w = rect.w - 44.0;
        let frac = ((value - range.0) / (range.1 - range.0)).clamp(0.0, 1.0);

        // 轨道与填充
        draw_rounded_rect(
            rect.x,
            rect.y + rect.h / 2.0 - 4.0,
            track_w,
            8.0,
            4.0,
            theme.bg_secondary,
        );
        draw_rounded_rect(
            rect.x,
            rect.y + rect.h / 2.0 - 4.0,
            track_w * frac,
            8.0,
            4.0,
            theme.accent,
        );
        // 滑块
        draw_circle(
            rect.x + track_w * frac,
            rect.y + rect.h / 2.0,
            9.0,
            theme.text_primary,
        );
        // 当前值
        text.draw(
            value_label,
            rect.x + track_w + 12.0,
            rect.y + rect.h / 2.0 + theme.font_size_small * 0.35,
            theme.font_size_small,
            theme.text_secondary,
        );
    }

    /// 绘制开关
    fn draw_toggle(&self, ctx: &UiContext, rect: Rect, value: bool) {
        let theme = &ctx.theme;
        let bg = if value { theme.accent } else { theme.bg_secondary };
        draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, rect.h / 2.0, bg);

        let knob_x = if value {
            rect.x + rect.w - rect.h + 4.0
        } else {
            rect.x + 4.0
        };
        draw_circle(
            knob_x + (rect.h - 8.0) / 2.0,
            rect.y + rect.h / 2.0,
            (rect.h - 8.0) / 2.0,
            WHITE,
        );
    }
}
