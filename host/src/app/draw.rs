//! # 渲染逻辑（每帧调用）

use folio_runtime::EasingFunction;
use macroquad::prelude::*;

use super::AppState;
use super::update::{gear_rect, nav_theme_rect};
use crate::page::{self, NAV_HEIGHT, SectionCtx};
use crate::ui::{color_with_alpha, draw_rounded_rect};

/// 渲染入口（每帧调用）
pub fn draw(app: &AppState) {
    let theme = &app.ui.theme;
    let dark = app.page.config().style.dark_mode;

    clear_background(theme.bg_primary);
    app.decor
        .draw(app.clock, dark, app.ui.screen_width, app.ui.screen_height);

    // 内容块：排版矩形减去滚动偏移，再叠加入场几何
    for (id, rect) in &app.layout {
        let geometry = app.page.geometry(*id);
        if geometry.opacity <= 0.001 {
            continue;
        }

        let screen_rect = Rect::new(
            rect.x + geometry.offset.x,
            rect.y - app.scroll + geometry.offset.y,
            rect.w,
            rect.h,
        );
        // 视口外跳过
        if screen_rect.y > app.ui.screen_height || screen_rect.y + screen_rect.h < 0.0 {
            continue;
        }

        let ctx = SectionCtx {
            ui: &app.ui,
            text: &app.text,
            content: &app.content,
            config: app.page.config(),
            carousel: &app.carousel,
            clock: app.clock,
            skills_clock: app.skills_clock,
            paint: true,
            alpha: geometry.opacity,
        };
        page::sections::render(&ctx, *id, screen_rect);
    }

    draw_nav(app);
    draw_gear(app);
    app.panel.draw(&app.ui, &app.text, app.page.config());
    if let Some(modal) = &app.modal {
        modal.draw(&app.ui, &app.text);
    }
    app.toasts.draw(&app.ui, &app.text);

    if app.config.debug.show_phases {
        draw_debug_overlay(app);
    }
}

/// 顶部导航条（启动时从上方滑入，纯装饰）
fn draw_nav(app: &AppState) {
    let theme = &app.ui.theme;
    let slide = EasingFunction::EaseOut.apply((app.clock / 0.5).min(1.0));
    let y = -NAV_HEIGHT * (1.0 - slide);

    draw_rectangle(
        0.0,
        y,
        app.ui.screen_width,
        NAV_HEIGHT,
        color_with_alpha(theme.bg_card, 0.92),
    );
    draw_line(
        0.0,
        y + NAV_HEIGHT,
        app.ui.screen_width,
        y + NAV_HEIGHT,
        1.0,
        theme.bg_secondary,
    );

    app.text.draw(
        &app.content.personal.name,
        24.0,
        y + NAV_HEIGHT / 2.0 + theme.font_size_large * 0.35,
        theme.font_size_large,
        theme.text_primary,
    );

    // 主题切换按钮
    let rect = nav_theme_rect(app.ui.screen_width);
    let hovered = app.ui.mouse_in_rect(rect);
    let bg = if hovered {
        theme.button_hover
    } else {
        theme.button_bg
    };
    draw_rounded_rect(rect.x, rect.y + y, rect.w, rect.h, rect.h / 2.0, bg);
    let label = if app.page.config().style.dark_mode {
        "Light"
    } else {
        "Dark"
    };
    let dims = app.text.measure(label, theme.font_size_small);
    app.text.draw(
        label,
        rect.x + (rect.w - dims.width) / 2.0,
        rect.y + y + rect.h / 2.0 + theme.font_size_small * 0.35,
        theme.font_size_small,
        theme.text_primary,
    );
}

/// 右下角的配置面板开关
fn draw_gear(app: &AppState) {
    let theme = &app.ui.theme;
    let rect = gear_rect(app.ui.screen_width, app.ui.screen_height);
    let hovered = app.ui.mouse_in_rect(rect);

    let bg = if hovered { theme.accent_hover } else { theme.accent };
    draw_circle(
        rect.x + rect.w / 2.0,
        rect.y + rect.h / 2.0,
        rect.w / 2.0,
        bg,
    );
    let dims = app.text.measure("</>", theme.font_size_small);
    app.text.draw(
        "</>",
        rect.x + (rect.w - dims.width) / 2.0,
        rect.y + rect.h / 2.0 + theme.font_size_small * 0.35,
        theme.font_size_small,
        WHITE,
    );
}

/// 调试覆盖层：每个内容块的动画阶段与根主题属性
fn draw_debug_overlay(app: &AppState) {
    let theme = &app.ui.theme;
    let mut y = NAV_HEIGHT + 20.0;

    app.text.draw(
        &format!("root theme: {}", app.page_root.theme_attr),
        12.0,
        y,
        theme.font_size_small,
        theme.text_secondary,
    );
    y += 18.0;

    for (id, _) in &app.layout {
        let line = format!("{:?}: {:?}", id, app.page.phase(*id));
        app.text
            .draw(&line, 12.0, y, theme.font_size_small, theme.text_secondary);
        y += 18.0;
    }
}
