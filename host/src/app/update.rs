//! # 更新逻辑（每帧调用）
//!
//! 职责顺序：采集输入 → 排版测量 → 可见性观察 → UI 交互 →
//! Runtime tick → 执行 Command。

use folio_runtime::{ConfigEdit, PageInput, SectionId, SkillsView, ToastKind};
use macroquad::prelude::*;
use tracing::debug;

use super::{AppState, execute_command};
use crate::page::{self, NAV_HEIGHT, SectionCtx};
use crate::download;
use crate::ui::{Modal, ModalResult, Theme};

/// 导航栏主题切换按钮的矩形
pub(crate) fn nav_theme_rect(screen_width: f32) -> Rect {
    Rect::new(screen_width - 116.0, 14.0, 92.0, 36.0)
}

/// 右下角配置面板开关按钮的矩形
pub(crate) fn gear_rect(screen_width: f32, screen_height: f32) -> Rect {
    Rect::new(screen_width - 68.0, screen_height - 68.0, 48.0, 48.0)
}

/// 更新入口（每帧调用）
pub fn update(app: &mut AppState) {
    let dt = get_frame_time();
    app.clock += dt;
    app.skills_clock += dt;
    app.ui.update();
    app.toasts.update(dt);
    app.carousel.update(dt);

    // 主题跟随当前样式配置（圆角/阴影/调色板都可能在上一帧被替换）
    app.ui.theme = Theme::from_style(&app.page.config().style);

    // 排版测量
    let layout = {
        let ctx = SectionCtx {
            ui: &app.ui,
            text: &app.text,
            content: &app.content,
            config: app.page.config(),
            carousel: &app.carousel,
            clock: app.clock,
            skills_clock: app.skills_clock,
            paint: false,
            alpha: 1.0,
        };
        page::layout(&ctx)
    };
    app.layout = layout.sections;
    app.page_height = layout.total_height;

    // 滚动（滚轮 + 方向键）
    if app.modal.is_none() {
        let wheel = mouse_wheel().1;
        if wheel != 0.0 {
            app.scroll -= wheel.signum() * 48.0;
        }
        if is_key_down(KeyCode::Down) {
            app.scroll += 600.0 * dt;
        }
        if is_key_down(KeyCode::Up) {
            app.scroll -= 600.0 * dt;
        }
    }
    let max_scroll = (app.page_height - app.ui.screen_height + NAV_HEIGHT).max(0.0);
    app.scroll = app.scroll.clamp(0.0, max_scroll);

    // 可见性观察：边界穿越时上报进入/离开事件。
    // trigger-once 的判定在 Runtime 内部，这里只做如实上报。
    for (id, rect) in &app.layout {
        let visible = page::section_visible(*rect, app.scroll, app.ui.screen_height);
        let idx = id.index();
        if visible != app.visible[idx] {
            app.visible[idx] = visible;
            app.pending_inputs.push(if visible {
                PageInput::entered(*id)
            } else {
                PageInput::left(*id)
            });
        }
    }

    // 模态对话框打开时独占输入
    if let Some(modal) = &mut app.modal {
        match modal.update(&app.ui) {
            ModalResult::Confirm => {
                app.pending_inputs.push(PageInput::DownloadRequested);
                app.modal = None;
            }
            ModalResult::Cancel => app.modal = None,
            ModalResult::None => {}
        }
    } else {
        // 配置面板：把编辑折叠成一份完整的替换配置
        let current = *app.page.config();
        let edits = app.panel.update(&app.ui, &current, dt);
        let mut next = current;
        for edit in &edits {
            next = edit.apply(&next);
        }
        if next != current {
            app.pending_inputs.push(PageInput::replace(next));
        }

        let panel_captures = app.panel.contains_mouse(&app.ui);
        if !panel_captures && app.ui.mouse_just_released {
            if app.ui.mouse_in_rect(nav_theme_rect(app.ui.screen_width)) {
                // 导航栏的深色开关与面板里的开关等价
                let toggled =
                    ConfigEdit::DarkMode(!current.style.dark_mode).apply(app.page.config());
                app.pending_inputs.push(PageInput::replace(toggled));
            } else if app
                .ui
                .mouse_in_rect(gear_rect(app.ui.screen_width, app.ui.screen_height))
            {
                app.panel.toggle();
            } else {
                handle_section_clicks(app);
            }
        }
    }

    // Runtime tick 与 Command 执行
    let inputs = std::mem::take(&mut app.pending_inputs);
    let commands = app.page.tick(dt, &inputs);
    let resume_path = app.config.resume_path();
    for command in &commands {
        if app.config.debug.log_commands {
            debug!(?command, "执行指令");
        }
        execute_command(
            command,
            &mut app.page_root,
            &mut app.toasts,
            &resume_path,
            &app.config.downloads_dir,
            &mut app.pending_inputs,
        );
    }

    app.sync_skills_view();
}

/// 页面内控件的点击判定（主介绍区按钮、技能视图切换）
fn handle_section_clicks(app: &mut AppState) {
    let layout = app.layout.clone();
    let theme = app.ui.theme.clone();

    for (id, rect) in layout {
        let geometry = app.page.geometry(id);
        let screen_rect = Rect::new(
            rect.x + geometry.offset.x,
            rect.y - app.scroll + geometry.offset.y,
            rect.w,
            rect.h,
        );

        match id {
            SectionId::Hero => {
                let (contact, download_btn) = page::hero_button_rects(screen_rect, &theme);
                if app.ui.mouse_in_rect(contact) {
                    let email = app.content.personal.email.clone();
                    app.toasts.show(format!("Email: {email}"), ToastKind::Info);
                } else if app.ui.mouse_in_rect(download_btn) {
                    open_download_modal(app);
                }
            }
            SectionId::Skills => {
                let (card, stats) = page::skills_toggle_rects(screen_rect, &theme);
                let view = if app.ui.mouse_in_rect(card) {
                    Some(SkillsView::Card)
                } else if app.ui.mouse_in_rect(stats) {
                    Some(SkillsView::Stats)
                } else {
                    None
                };
                if let Some(view) = view
                    && view != app.page.config().style.skills_view
                {
                    let next = ConfigEdit::SkillsView(view).apply(app.page.config());
                    app.pending_inputs.push(PageInput::replace(next));
                }
            }
            _ => {}
        }
    }
}

/// 打开下载确认对话框
fn open_download_modal(app: &mut AppState) {
    let resume_path = app.config.resume_path();
    let size_line = match download::resume_size(&resume_path) {
        Some(bytes) => format!("{} ({:.0} KB)", app.config.resume_file, bytes as f32 / 1024.0),
        None => format!("{} (file missing)", app.config.resume_file),
    };

    app.modal = Some(Modal::confirm(
        "Download CV",
        vec![
            format!("Save {size_line}"),
            format!("to {}?", app.config.downloads_dir.display()),
        ],
    ));
}
