//! # TextRenderer 模块
//!
//! 文本渲染器：可选的自定义字体、测量与按词换行。

use macroquad::prelude::*;

/// 文本渲染器
#[derive(Default)]
pub struct TextRenderer {
    /// 自定义字体（加载失败时回退到 macroquad 内置字体）
    font: Option<Font>,
}

impl TextRenderer {
    /// 创建新的文本渲染器
    pub fn new() -> Self {
        Self { font: None }
    }

    /// 加载字体
    pub async fn load_font(&mut self, path: &str) -> Result<(), String> {
        match load_ttf_font(path).await {
            Ok(font) => {
                self.font = Some(font);
                Ok(())
            }
            Err(e) => Err(format!("failed to load font {path}: {e}")),
        }
    }

    /// 是否使用自定义字体
    pub fn has_custom_font(&self) -> bool {
        self.font.is_some()
    }

    /// 绘制文本（基线坐标）
    pub fn draw(&self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        draw_text_ex(
            text,
            x,
            y,
            TextParams {
                font: self.font.as_ref(),
                font_size: font_size as u16,
                font_scale: 1.0,
                color,
                ..Default::default()
            },
        );
    }

    /// 测量文本尺寸
    pub fn measure(&self, text: &str, font_size: f32) -> TextDimensions {
        measure_text(text, self.font.as_ref(), font_size as u16, 1.0)
    }

    /// 按词换行
    ///
    /// 单词本身超宽时独占一行（不截断）。
    pub fn wrap(&self, text: &str, font_size: f32, max_width: f32) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();

        for word in text.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };

            if self.measure(&candidate, font_size).width <= max_width || current.is_empty() {
                current = candidate;
            } else {
                lines.push(current);
                current = word.to_string();
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }

        lines
    }

    /// 换行后占用的高度
    pub fn wrapped_height(&self, text: &str, font_size: f32, max_width: f32) -> f32 {
        self.wrap(text, font_size, max_width).len() as f32 * font_size * 1.4
    }

    /// 绘制换行文本，返回占用高度
    pub fn draw_wrapped(
        &self,
        text: &str,
        x: f32,
        y: f32,
        font_size: f32,
        max_width: f32,
        color: Color,
    ) -> f32 {
        let line_height = font_size * 1.4;
        let mut line_y = y;
        for line in self.wrap(text, font_size, max_width) {
            line_y += line_height;
            self.draw(&line, x, line_y, font_size, color);
        }
        line_y - y
    }
}
