//! Folio - 个人作品集页面（macroquad 宿主）
//!
//! main 只保留入口与主循环胶水：读配置、装内容、进帧循环。

use clap::Parser;
use macroquad::prelude::*;
use std::path::PathBuf;
use tracing::warn;

use folio_runtime::PortfolioData;
use host::app::{AppState, draw, update};
use host::config::AppConfig;
use host::text::TextRenderer;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "folio", about = "Personal portfolio page")]
struct Args {
    /// 配置文件路径
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// 内容文件路径（覆盖配置文件中的 content_file）
    #[arg(long)]
    content: Option<PathBuf>,
}

/// 窗口配置（macroquad 在 main 之前调用一次）
fn window_conf() -> Conf {
    let args = Args::parse();
    let config = AppConfig::load(&args.config);
    Conf {
        window_title: config.window.title,
        window_width: config.window.width,
        window_height: config.window.height,
        high_dpi: true,
        ..Default::default()
    }
}

/// 加载页面内容：显式路径 > 配置文件路径 > 内置默认
fn load_content(args: &Args, config: &AppConfig) -> PortfolioData {
    let path = args.content.clone().or_else(|| config.content_file.clone());
    let Some(path) = path else {
        return PortfolioData::default();
    };

    match std::fs::read_to_string(&path) {
        Ok(json) => PortfolioData::from_json(&json).unwrap_or_else(|e| {
            warn!(error = %e, path = %path.display(), "内容文件解析失败，使用内置内容");
            PortfolioData::default()
        }),
        Err(e) => {
            warn!(error = %e, path = %path.display(), "内容文件读取失败，使用内置内容");
            PortfolioData::default()
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();
    let config = AppConfig::load(&args.config);
    let content = load_content(&args, &config);

    let mut text = TextRenderer::new();
    if let Some(font_path) = config.font_path()
        && let Err(e) = text.load_font(&font_path.to_string_lossy()).await
    {
        warn!(error = %e, "字体加载失败，回退到内置字体");
    }

    let mut app = AppState::new(config, content, text);

    loop {
        update(&mut app);
        draw(&app);
        next_frame().await;
    }
}
