//! # Decor 模块
//!
//! 纯装饰性的页面背景，只由深色开关参数化。
//!
//! 深色模式：闪烁的星空；浅色模式：缓慢漂移的柔和色块。
//! 没有任何行为契约，也不参与入场动画。

use macroquad::prelude::*;
use macroquad::rand::gen_range;

/// 星星数量（深色模式）
const STAR_COUNT: usize = 100;
/// 色块数量（浅色模式）
const BLOB_COUNT: usize = 5;

struct Star {
    /// 位置（屏幕占比）
    x: f32,
    y: f32,
    /// 半径（像素）
    size: f32,
    /// 闪烁相位
    phase: f32,
    /// 闪烁速度
    speed: f32,
}

struct Blob {
    x: f32,
    y: f32,
    radius: f32,
    drift: f32,
    hue_mix: f32,
}

/// 背景装饰
pub struct Decor {
    stars: Vec<Star>,
    blobs: Vec<Blob>,
}

impl Default for Decor {
    fn default() -> Self {
        Self::new()
    }
}

impl Decor {
    /// 随机生成星空与色块（启动时一次）
    pub fn new() -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                x: gen_range(0.0, 1.0),
                y: gen_range(0.0, 1.0),
                size: gen_range(1.0, 3.0),
                phase: gen_range(0.0, std::f32::consts::TAU),
                speed: gen_range(0.4, 1.2),
            })
            .collect();

        let blobs = (0..BLOB_COUNT)
            .map(|_| Blob {
                x: gen_range(0.1, 0.9),
                y: gen_range(0.1, 0.9),
                radius: gen_range(120.0, 260.0),
                drift: gen_range(0.02, 0.06),
                hue_mix: gen_range(0.0, 1.0),
            })
            .collect();

        Self { stars, blobs }
    }

    /// 绘制背景
    pub fn draw(&self, t: f32, dark: bool, screen_w: f32, screen_h: f32) {
        if dark {
            for star in &self.stars {
                let twinkle = 0.45 + 0.35 * (t * star.speed + star.phase).sin();
                draw_circle(
                    star.x * screen_w,
                    star.y * screen_h,
                    star.size,
                    Color::new(1.0, 1.0, 1.0, twinkle * 0.6),
                );
            }
        } else {
            for blob in &self.blobs {
                let dx = (t * blob.drift).sin() * 40.0;
                let dy = (t * blob.drift * 1.3).cos() * 30.0;
                let color = Color::new(
                    0.55 + 0.25 * blob.hue_mix,
                    0.65,
                    0.95 - 0.2 * blob.hue_mix,
                    0.06,
                );
                draw_circle(
                    blob.x * screen_w + dx,
                    blob.y * screen_h + dy,
                    blob.radius,
                    color,
                );
            }
        }
    }
}
