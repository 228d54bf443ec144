//! # Sections 模块
//!
//! 各内容块的渲染器。
//!
//! 每个渲染器既是测量函数也是绘制函数：`ctx.paint = false` 时只走
//! 排版数学并返回高度，`true` 时按传入矩形（高度来自测量趟）实际
//! 绘制。两趟共享同一条代码路径，避免测量与绘制漂移。

use folio_runtime::{Proficiency, SectionId, SkillsView};
use macroquad::prelude::*;

use super::{SectionCtx, hero_button_rects, skills_toggle_rects};
use crate::ui::{Button, ButtonStyle, color_with_alpha, draw_card, draw_rounded_rect};

/// 渲染（或测量）一个内容块，返回高度
pub fn render(ctx: &SectionCtx, id: SectionId, rect: Rect) -> f32 {
    match id {
        SectionId::Emblem => render_emblem(ctx, rect),
        SectionId::Hero => render_hero(ctx, rect),
        SectionId::Skills => render_skills(ctx, rect),
        SectionId::Experience => render_experience(ctx, rect),
        SectionId::Projects => render_projects(ctx, rect),
        SectionId::Education => render_education(ctx, rect),
        SectionId::Languages => render_languages(ctx, rect),
        SectionId::Footer => render_footer(ctx, rect),
    }
}

/// 带类型色块的区块标题行，返回占用高度
fn header(ctx: &SectionCtx, id: SectionId, rect: Rect) -> f32 {
    let theme = &ctx.ui.theme;
    if ctx.paint
        && let Some(title) = id.title()
    {
        let x = rect.x + theme.padding;
        let y = rect.y + theme.padding;
        draw_rounded_rect(
            x,
            y + 4.0,
            20.0,
            20.0,
            4.0,
            color_with_alpha(theme.accent, ctx.alpha),
        );
        ctx.text.draw(
            title,
            x + 32.0,
            y + theme.font_size_large * 0.85,
            theme.font_size_large,
            color_with_alpha(ctx.ui.theme.text_primary, ctx.alpha),
        );
    }
    theme.font_size_large + theme.spacing
}

/// 文本行（paint 守卫）
fn put_text(ctx: &SectionCtx, s: &str, x: f32, y: f32, size: f32, color: Color) {
    if ctx.paint {
        ctx.text
            .draw(s, x, y, size, color_with_alpha(color, ctx.alpha));
    }
}

/// 技术标签按宽度折行，返回每行的 (文本, 宽度) 列表
fn tag_rows<'t>(ctx: &SectionCtx, tags: &'t [String], max_w: f32) -> Vec<Vec<(&'t str, f32)>> {
    const TAG_PAD: f32 = 16.0;
    const TAG_GAP: f32 = 8.0;

    let theme = &ctx.ui.theme;
    let mut rows: Vec<Vec<(&str, f32)>> = Vec::new();
    let mut row: Vec<(&str, f32)> = Vec::new();
    let mut row_w = 0.0;

    for tag in tags {
        let w = ctx.text.measure(tag, theme.font_size_small).width + TAG_PAD;
        if !row.is_empty() && row_w + TAG_GAP + w > max_w {
            rows.push(std::mem::take(&mut row));
            row_w = 0.0;
        }
        if !row.is_empty() {
            row_w += TAG_GAP;
        }
        row_w += w;
        row.push((tag.as_str(), w));
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

/// 绘制标签行，返回占用高度
fn draw_tags(ctx: &SectionCtx, tags: &[String], x: f32, y: f32, max_w: f32) -> f32 {
    const TAG_H: f32 = 26.0;
    const TAG_GAP: f32 = 8.0;

    let theme = &ctx.ui.theme;
    let rows = tag_rows(ctx, tags, max_w);

    if ctx.paint {
        for (ri, row) in rows.iter().enumerate() {
            let mut tx = x;
            let ty = y + ri as f32 * (TAG_H + TAG_GAP);
            for (tag, w) in row {
                draw_rounded_rect(
                    tx,
                    ty,
                    *w,
                    TAG_H,
                    TAG_H / 2.0,
                    color_with_alpha(theme.tag_bg, ctx.alpha),
                );
                ctx.text.draw(
                    tag,
                    tx + 8.0,
                    ty + TAG_H / 2.0 + theme.font_size_small * 0.35,
                    theme.font_size_small,
                    color_with_alpha(theme.tag_text, ctx.alpha),
                );
                tx += w + TAG_GAP;
            }
        }
    }

    match rows.len() {
        0 => 0.0,
        n => n as f32 * (TAG_H + TAG_GAP),
    }
}

// ===== 装饰块 =====

/// 页首装饰：脉动的代码符号、闪烁的代码行、技能跑马灯
fn render_emblem(ctx: &SectionCtx, rect: Rect) -> f32 {
    let theme = &ctx.ui.theme;
    let symbol_h = 96.0;
    let line_h = 30.0;
    let strip_h = 52.0;
    let height = symbol_h + 8.0 + line_h + theme.spacing + strip_h;

    if !ctx.paint {
        return height;
    }

    // 脉动符号（3 秒一个周期）
    let pulse = 1.0 + 0.08 * (ctx.clock * std::f32::consts::TAU / 3.0).sin();
    let symbol = "</>";
    let size = theme.font_size_title * 1.6 * pulse;
    let dims = ctx.text.measure(symbol, size);
    ctx.text.draw(
        symbol,
        rect.x + (rect.w - dims.width) / 2.0,
        rect.y + symbol_h * 0.75,
        size,
        color_with_alpha(theme.accent, ctx.alpha),
    );

    // 闪烁的代码行
    let blink = 0.55 + 0.45 * (ctx.clock * 2.5).sin();
    let line = "console.log(\"Hello, World!\");";
    let dims = ctx.text.measure(line, theme.font_size_normal);
    ctx.text.draw(
        line,
        rect.x + (rect.w - dims.width) / 2.0,
        rect.y + symbol_h + line_h * 0.8,
        theme.font_size_normal,
        color_with_alpha(theme.text_secondary, ctx.alpha * blink),
    );

    // 技能跑马灯：去重列表复制一倍，按时间平移，走到一半时回绕
    let strip_y = rect.y + height - strip_h;
    let items = ctx.carousel.items();
    if !items.is_empty() {
        const TILE_GAP: f32 = 12.0;
        let tile_w = |name: &str| ctx.text.measure(name, theme.font_size_small).width + 38.0;
        let total: f32 = items.iter().map(|s| tile_w(s) + TILE_GAP).sum();
        let mut x = rect.x - ctx.carousel.offset() * total;

        for name in items {
            let w = tile_w(name);
            if x + w > rect.x && x < rect.x + rect.w {
                draw_rounded_rect(
                    x,
                    strip_y,
                    w,
                    40.0,
                    theme.corner_radius,
                    color_with_alpha(theme.bg_secondary, ctx.alpha * 0.8),
                );
                draw_rounded_rect(
                    x + 8.0,
                    strip_y + 13.0,
                    14.0,
                    14.0,
                    4.0,
                    color_with_alpha(theme.accent, ctx.alpha),
                );
                ctx.text.draw(
                    name,
                    x + 30.0,
                    strip_y + 20.0 + theme.font_size_small * 0.35,
                    theme.font_size_small,
                    color_with_alpha(theme.text_primary, ctx.alpha),
                );
            }
            x += w + TILE_GAP;
        }
    }

    height
}

// ===== 内容块 =====

fn render_hero(ctx: &SectionCtx, rect: Rect) -> f32 {
    let theme = &ctx.ui.theme;
    let personal = &ctx.content.personal;
    let inner_w = rect.w - theme.padding * 2.0;

    let title_h = theme.font_size_title + theme.spacing;
    let about_h = ctx
        .text
        .wrapped_height(&personal.about, theme.font_size_normal, inner_w);
    let height =
        theme.padding + title_h + about_h + theme.spacing_large + theme.button_height + theme.padding;

    if !ctx.paint {
        return height;
    }

    draw_card(rect.x, rect.y, rect.w, height, theme, ctx.alpha);

    // 头衔（居中）
    let dims = ctx.text.measure(&personal.title, theme.font_size_title);
    put_text(
        ctx,
        &personal.title,
        rect.x + (rect.w - dims.width) / 2.0,
        rect.y + theme.padding + theme.font_size_title * 0.85,
        theme.font_size_title,
        theme.text_primary,
    );

    // 自我介绍
    if ctx.paint {
        ctx.text.draw_wrapped(
            &personal.about,
            rect.x + theme.padding,
            rect.y + theme.padding + title_h,
            theme.font_size_normal,
            inner_w,
            color_with_alpha(theme.text_secondary, ctx.alpha),
        );
    }

    // 操作按钮（点击在 update 趟用同一对矩形判定）
    let full = Rect::new(rect.x, rect.y, rect.w, height);
    let (contact_rect, download_rect) = hero_button_rects(full, theme);
    let mut contact = Button::new(
        "Contact Me",
        contact_rect.x,
        contact_rect.y,
        contact_rect.w,
        contact_rect.h,
    )
    .with_style(ButtonStyle::Primary);
    contact.update(ctx.ui);
    contact.draw(ctx.ui, ctx.text, ctx.alpha);

    let mut download = Button::new(
        "Download CV",
        download_rect.x,
        download_rect.y,
        download_rect.w,
        download_rect.h,
    );
    download.update(ctx.ui);
    download.draw(ctx.ui, ctx.text, ctx.alpha);

    height
}

fn render_skills(ctx: &SectionCtx, rect: Rect) -> f32 {
    let theme = &ctx.ui.theme;
    if ctx.paint {
        draw_card(rect.x, rect.y, rect.w, rect.h, theme, ctx.alpha);
    }
    let inner_w = rect.w - theme.padding * 2.0;
    let x = rect.x + theme.padding;
    let mut y = rect.y + theme.padding + header(ctx, SectionId::Skills, rect);

    let body_h = match ctx.config.style.skills_view {
        SkillsView::Card => skills_card_view(ctx, x, y, inner_w),
        SkillsView::Stats => skills_stats_view(ctx, x, y, inner_w),
    };
    y += body_h;

    let height = y - rect.y + theme.padding;

    if ctx.paint {
        // 视图切换按钮画在卡片之上
        let full = Rect::new(rect.x, rect.y, rect.w, height);
        let (card_rect, stats_rect) = skills_toggle_rects(full, theme);
        for (label, r, view) in [
            ("Card", card_rect, SkillsView::Card),
            ("Stats", stats_rect, SkillsView::Stats),
        ] {
            let style = if ctx.config.style.skills_view == view {
                ButtonStyle::Selected
            } else {
                ButtonStyle::Secondary
            };
            let mut btn = Button::new(label, r.x, r.y, r.w, r.h).with_style(style);
            btn.update(ctx.ui);
            btn.draw(ctx.ui, ctx.text, ctx.alpha);
        }
    }

    height
}

/// 卡片视图：按熟练度分组的技能格
fn skills_card_view(ctx: &SectionCtx, x: f32, y0: f32, inner_w: f32) -> f32 {
    const CHIP_H: f32 = 44.0;
    const GAP: f32 = 12.0;

    let theme = &ctx.ui.theme;
    let chip_w = (inner_w - GAP * 2.0) / 3.0;
    let mut y = y0;

    for group in &ctx.content.skills {
        put_text(
            ctx,
            &format!("{} Skills", group.tier.label()),
            x,
            y + theme.font_size_normal,
            theme.font_size_normal,
            theme.text_primary,
        );
        y += theme.font_size_normal + theme.spacing_small * 1.5;

        for (i, skill) in group.skills.iter().enumerate() {
            let col = i % 3;
            let row = i / 3;
            let cx = x + col as f32 * (chip_w + GAP);
            let cy = y + row as f32 * (CHIP_H + GAP);

            if ctx.paint {
                draw_rounded_rect(
                    cx,
                    cy,
                    chip_w,
                    CHIP_H,
                    theme.corner_radius,
                    color_with_alpha(tier_tint(group.tier, theme), ctx.alpha),
                );
                let dims = ctx.text.measure(skill, theme.font_size_small);
                ctx.text.draw(
                    skill,
                    cx + (chip_w - dims.width) / 2.0,
                    cy + CHIP_H / 2.0 + theme.font_size_small * 0.35,
                    theme.font_size_small,
                    color_with_alpha(theme.text_primary, ctx.alpha),
                );
            }
        }

        let rows = group.skills.len().div_ceil(3);
        y += rows as f32 * (CHIP_H + GAP) + theme.spacing;
    }

    y - y0
}

/// 统计视图：带等级条的技能列表（错峰填充动画）
fn skills_stats_view(ctx: &SectionCtx, x: f32, y0: f32, inner_w: f32) -> f32 {
    const BAR_BLOCK_H: f32 = 68.0;
    const GAP: f32 = 16.0;

    let theme = &ctx.ui.theme;
    let col_w = (inner_w - GAP) / 2.0;
    let bars = ctx.content.skill_bars();

    if ctx.paint {
        for (i, bar) in bars.iter().enumerate() {
            let col = i % 2;
            let row = i / 2;
            let bx = x + col as f32 * (col_w + GAP);
            let by = y0 + row as f32 * BAR_BLOCK_H;

            // 名称与百分比
            ctx.text.draw(
                &bar.name,
                bx,
                by + theme.font_size_normal,
                theme.font_size_normal,
                color_with_alpha(theme.text_primary, ctx.alpha),
            );
            let pct = format!("{}%", bar.level);
            let dims = ctx.text.measure(&pct, theme.font_size_small);
            ctx.text.draw(
                &pct,
                bx + col_w - dims.width,
                by + theme.font_size_normal,
                theme.font_size_small,
                color_with_alpha(theme.text_secondary, ctx.alpha),
            );

            // 等级条：宽度从 0 填充到等级值，按序号错峰
            let track_y = by + theme.font_size_normal + 10.0;
            draw_rounded_rect(
                bx,
                track_y,
                col_w,
                8.0,
                4.0,
                color_with_alpha(theme.bg_secondary, ctx.alpha),
            );
            let t = ((ctx.skills_clock - i as f32 * 0.1) / 1.0).clamp(0.0, 1.0);
            let eased = folio_runtime::EasingFunction::EaseOut.apply(t);
            let fill = col_w * (bar.level as f32 / 100.0) * eased;
            if fill > 1.0 {
                draw_rounded_rect(
                    bx,
                    track_y,
                    fill,
                    8.0,
                    4.0,
                    color_with_alpha(tier_accent(bar.tier, theme), ctx.alpha),
                );
            }

            ctx.text.draw(
                bar.tier.label(),
                bx,
                track_y + 14.0 + theme.font_size_small,
                theme.font_size_small,
                color_with_alpha(theme.text_secondary, ctx.alpha),
            );
        }
    }

    bars.len().div_ceil(2) as f32 * BAR_BLOCK_H
}

/// 层级底色（卡片视图的技能格）
fn tier_tint(tier: Proficiency, theme: &crate::ui::Theme) -> Color {
    let accent = tier_accent(tier, theme);
    Color::new(accent.r, accent.g, accent.b, 0.14)
}

/// 层级强调色（统计视图的等级条）
fn tier_accent(tier: Proficiency, theme: &crate::ui::Theme) -> Color {
    match tier {
        Proficiency::Advanced => theme.accent,
        Proficiency::Intermediate => theme.success,
        Proficiency::Basic => Color::new(0.85, 0.65, 0.2, 1.0),
    }
}

fn render_experience(ctx: &SectionCtx, rect: Rect) -> f32 {
    let theme = &ctx.ui.theme;
    if ctx.paint {
        draw_card(rect.x, rect.y, rect.w, rect.h, theme, ctx.alpha);
    }
    let inner_w = rect.w - theme.padding * 2.0;
    let x = rect.x + theme.padding;
    let mut y = rect.y + theme.padding + header(ctx, SectionId::Experience, rect);

    for exp in &ctx.content.experience {
        let entry_top = y;
        let text_x = x + 18.0;
        let text_w = inner_w - 18.0;

        put_text(
            ctx,
            &exp.role,
            text_x,
            y + theme.font_size_large * 0.9,
            theme.font_size_large * 0.85,
            theme.text_primary,
        );
        y += theme.font_size_large;

        put_text(
            ctx,
            &format!("{} | {}", exp.company, exp.period),
            text_x,
            y + theme.font_size_small,
            theme.font_size_small,
            theme.text_secondary,
        );
        y += theme.font_size_small + theme.spacing_small;

        let desc_h = ctx
            .text
            .wrapped_height(&exp.description, theme.font_size_normal, text_w);
        if ctx.paint {
            ctx.text.draw_wrapped(
                &exp.description,
                text_x,
                y,
                theme.font_size_normal,
                text_w,
                color_with_alpha(theme.text_secondary, ctx.alpha),
            );
        }
        y += desc_h;

        if !exp.technologies.is_empty() {
            y += theme.spacing_small;
            y += draw_tags(ctx, &exp.technologies, text_x, y, text_w);
        }

        // 左侧强调线
        if ctx.paint {
            draw_rectangle(
                x,
                entry_top,
                3.0,
                y - entry_top,
                color_with_alpha(theme.accent, ctx.alpha),
            );
        }
        y += theme.spacing_large;
    }

    y - rect.y + theme.padding - theme.spacing_large
}

fn render_projects(ctx: &SectionCtx, rect: Rect) -> f32 {
    const GAP: f32 = 20.0;
    const INNER_PAD: f32 = 16.0;

    let theme = &ctx.ui.theme;
    if ctx.paint {
        draw_card(rect.x, rect.y, rect.w, rect.h, theme, ctx.alpha);
    }
    let inner_w = rect.w - theme.padding * 2.0;
    let x = rect.x + theme.padding;
    let mut y = rect.y + theme.padding + header(ctx, SectionId::Projects, rect);

    let col_w = (inner_w - GAP) / 2.0;
    let text_w = col_w - INNER_PAD * 2.0;

    // 单个项目卡的内容高度
    let card_h = |project: &folio_runtime::Project| -> f32 {
        let desc_h = ctx
            .text
            .wrapped_height(&project.description, theme.font_size_small, text_w);
        let tags_h = tag_rows(ctx, &project.technologies, text_w).len() as f32 * 34.0;
        INNER_PAD + theme.font_size_normal + theme.spacing_small + desc_h + theme.spacing_small
            + tags_h
            + INNER_PAD
    };

    for pair in ctx.content.projects.chunks(2) {
        let row_h = pair.iter().map(|p| card_h(p)).fold(0.0, f32::max);

        for (col, project) in pair.iter().enumerate() {
            let cx = x + col as f32 * (col_w + GAP);

            if ctx.paint {
                draw_rounded_rect(
                    cx,
                    y,
                    col_w,
                    row_h,
                    theme.corner_radius,
                    color_with_alpha(theme.bg_secondary, ctx.alpha * 0.6),
                );
            }

            let tx = cx + INNER_PAD;
            let mut ty = y + INNER_PAD;

            put_text(
                ctx,
                &project.title,
                tx,
                ty + theme.font_size_normal * 0.9,
                theme.font_size_normal,
                theme.text_primary,
            );
            if ctx.paint {
                let dims = ctx.text.measure(&project.period, theme.font_size_small);
                ctx.text.draw(
                    &project.period,
                    cx + col_w - INNER_PAD - dims.width,
                    ty + theme.font_size_normal * 0.9,
                    theme.font_size_small,
                    color_with_alpha(theme.text_secondary, ctx.alpha),
                );
            }
            ty += theme.font_size_normal + theme.spacing_small;

            let desc_h = ctx
                .text
                .wrapped_height(&project.description, theme.font_size_small, text_w);
            if ctx.paint {
                ctx.text.draw_wrapped(
                    &project.description,
                    tx,
                    ty,
                    theme.font_size_small,
                    text_w,
                    color_with_alpha(theme.text_secondary, ctx.alpha),
                );
            }
            ty += desc_h + theme.spacing_small;

            draw_tags(ctx, &project.technologies, tx, ty, text_w);
        }

        y += row_h + GAP;
    }

    y - rect.y + theme.padding - GAP
}

fn render_education(ctx: &SectionCtx, rect: Rect) -> f32 {
    let theme = &ctx.ui.theme;
    if ctx.paint {
        draw_card(rect.x, rect.y, rect.w, rect.h, theme, ctx.alpha);
    }
    let x = rect.x + theme.padding;
    let mut y = rect.y + theme.padding + header(ctx, SectionId::Education, rect);

    for edu in &ctx.content.education {
        let entry_top = y;
        let text_x = x + 18.0;

        put_text(
            ctx,
            &edu.degree,
            text_x,
            y + theme.font_size_large * 0.9,
            theme.font_size_large * 0.85,
            theme.text_primary,
        );
        y += theme.font_size_large;

        put_text(
            ctx,
            &format!("{} | {}", edu.institution, edu.period),
            text_x,
            y + theme.font_size_small,
            theme.font_size_small,
            theme.text_secondary,
        );
        y += theme.font_size_small + theme.spacing_small;

        put_text(
            ctx,
            &format!("Score: {}", edu.score),
            text_x,
            y + theme.font_size_normal,
            theme.font_size_normal,
            theme.text_secondary,
        );
        y += theme.font_size_normal;

        if ctx.paint {
            draw_rectangle(
                x,
                entry_top,
                3.0,
                y - entry_top,
                color_with_alpha(theme.success, ctx.alpha),
            );
        }
        y += theme.spacing_large;
    }

    y - rect.y + theme.padding - theme.spacing_large
}

fn render_languages(ctx: &SectionCtx, rect: Rect) -> f32 {
    const TILE_H: f32 = 52.0;
    const GAP: f32 = 16.0;

    let theme = &ctx.ui.theme;
    if ctx.paint {
        draw_card(rect.x, rect.y, rect.w, rect.h, theme, ctx.alpha);
    }
    let inner_w = rect.w - theme.padding * 2.0;
    let x = rect.x + theme.padding;
    let y0 = rect.y + theme.padding + header(ctx, SectionId::Languages, rect);

    let col_w = (inner_w - GAP) / 2.0;

    if ctx.paint {
        for (i, lang) in ctx.content.languages.iter().enumerate() {
            let col = i % 2;
            let row = i / 2;
            let tx = x + col as f32 * (col_w + GAP);
            let ty = y0 + row as f32 * (TILE_H + GAP);

            draw_rounded_rect(
                tx,
                ty,
                col_w,
                TILE_H,
                theme.corner_radius,
                color_with_alpha(theme.bg_secondary, ctx.alpha * 0.6),
            );
            ctx.text.draw(
                &lang.name,
                tx + theme.spacing,
                ty + TILE_H / 2.0 + theme.font_size_normal * 0.35,
                theme.font_size_normal,
                color_with_alpha(theme.text_primary, ctx.alpha),
            );
            let dims = ctx.text.measure(&lang.level, theme.font_size_small);
            ctx.text.draw(
                &lang.level,
                tx + col_w - theme.spacing - dims.width,
                ty + TILE_H / 2.0 + theme.font_size_small * 0.35,
                theme.font_size_small,
                color_with_alpha(theme.text_secondary, ctx.alpha),
            );
        }
    }

    let rows = ctx.content.languages.len().div_ceil(2);
    let body_h = rows as f32 * (TILE_H + GAP) - GAP;
    y0 - rect.y + body_h + theme.padding
}

fn render_footer(ctx: &SectionCtx, rect: Rect) -> f32 {
    let theme = &ctx.ui.theme;
    let personal = &ctx.content.personal;
    let line = format!("(c) 2025 {}. All rights reserved.", personal.name);

    let mut height = theme.font_size_small + theme.spacing;

    if ctx.paint {
        let dims = ctx.text.measure(&line, theme.font_size_small);
        ctx.text.draw(
            &line,
            rect.x + (rect.w - dims.width) / 2.0,
            rect.y + theme.font_size_small,
            theme.font_size_small,
            color_with_alpha(theme.text_secondary, ctx.alpha),
        );
    }

    if !personal.social.is_empty() {
        let gap = theme.spacing_large;
        let total: f32 = personal
            .social
            .iter()
            .map(|s| ctx.text.measure(&s.name, theme.font_size_normal).width)
            .sum::<f32>()
            + gap * (personal.social.len() as f32 - 1.0);
        let mut sx = rect.x + (rect.w - total) / 2.0;
        let sy = rect.y + height + theme.font_size_normal;

        for social in &personal.social {
            put_text(ctx, &social.name, sx, sy, theme.font_size_normal, theme.accent);
            sx += ctx.text.measure(&social.name, theme.font_size_normal).width + gap;
        }
        height += theme.font_size_normal + theme.spacing;
    }

    height
}
