//! # 页面流程集成测试
//!
//! 测试 Runtime → execute_command → 宿主状态 的执行链路。
//! 这些测试不依赖窗口或渲染设备。

use std::fs;
use std::path::PathBuf;

use folio_runtime::{
    Command, ConfigEdit, PageInput, PortfolioConfig, PortfolioPage, SectionGeometry, SectionId,
    SectionPhase, ThemeMode, ToastKind,
};
use host::app::{PageRoot, execute_command};
use host::ui::ToastManager;

/// 每个测试独立的临时目录
fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("folio-flow-{}-{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// 执行一批 Command，返回新产生的输入
fn execute_all(
    commands: &[Command],
    page_root: &mut PageRoot,
    toasts: &mut ToastManager,
    resume: &PathBuf,
    downloads: &PathBuf,
) -> Vec<PageInput> {
    let mut pending = Vec::new();
    for command in commands {
        execute_command(command, page_root, toasts, resume, downloads, &mut pending);
    }
    pending
}

#[test]
fn test_theme_attribute_mirroring() {
    let dir = temp_dir("theme");
    let resume = dir.join("resume.pdf");
    let downloads = dir.join("downloads");

    let mut page = PortfolioPage::new(PortfolioConfig::default());
    let mut page_root = PageRoot::default();
    let mut toasts = ToastManager::new();

    // 首次 tick 公告初始主题
    let commands = page.tick(0.0, &[]);
    execute_all(&commands, &mut page_root, &mut toasts, &resume, &downloads);
    assert_eq!(page_root.theme_attr, "light");

    // dark_mode 翻转 → 属性变为 "dark"
    let dark = ConfigEdit::DarkMode(true).apply(page.config());
    let commands = page.tick(0.0, &[PageInput::replace(dark)]);
    assert!(matches!(
        commands[0],
        Command::SetRootTheme {
            mode: ThemeMode::Dark
        }
    ));
    execute_all(&commands, &mut page_root, &mut toasts, &resume, &downloads);
    assert_eq!(page_root.theme_attr, "dark");

    // 其他样式字段不影响属性
    let radius = ConfigEdit::BorderRadius(0.0).apply(page.config());
    let commands = page.tick(0.0, &[PageInput::replace(radius)]);
    execute_all(&commands, &mut page_root, &mut toasts, &resume, &downloads);
    assert_eq!(page_root.theme_attr, "dark");
}

#[test]
fn test_download_flow_saves_file_and_toasts() {
    let dir = temp_dir("download-ok");
    let resume = dir.join("resume.pdf");
    fs::write(&resume, b"%PDF-1.4 folio").unwrap();
    let downloads = dir.join("downloads");

    let mut page = PortfolioPage::new(PortfolioConfig::default());
    let mut page_root = PageRoot::default();
    let mut toasts = ToastManager::new();
    page.tick(0.0, &[]);

    // 请求下载 → FetchResume
    let commands = page.tick(0.0, &[PageInput::DownloadRequested]);
    assert_eq!(commands, vec![Command::FetchResume]);

    // 执行获取：产生 DownloadFinished 输入，文件已就位
    let pending = execute_all(&commands, &mut page_root, &mut toasts, &resume, &downloads);
    assert_eq!(pending.len(), 1);
    assert_eq!(
        fs::read(downloads.join("resume.pdf")).unwrap(),
        b"%PDF-1.4 folio"
    );

    // 结果回流 → 成功提示
    let commands = page.tick(0.0, &pending);
    execute_all(&commands, &mut page_root, &mut toasts, &resume, &downloads);
    assert!(!page.is_downloading());
    let toast = &toasts.toasts()[0];
    assert_eq!(toast.kind, ToastKind::Success);
    assert!(toast.message.contains("Resume saved to"));
}

#[test]
fn test_download_flow_missing_asset_degrades_to_toast() {
    let dir = temp_dir("download-missing");
    let resume = dir.join("absent.pdf");
    let downloads = dir.join("downloads");

    let mut page = PortfolioPage::new(PortfolioConfig::default());
    let mut page_root = PageRoot::default();
    let mut toasts = ToastManager::new();
    page.tick(0.0, &[]);

    let commands = page.tick(0.0, &[PageInput::DownloadRequested]);
    let pending = execute_all(&commands, &mut page_root, &mut toasts, &resume, &downloads);

    let commands = page.tick(0.0, &pending);
    execute_all(&commands, &mut page_root, &mut toasts, &resume, &downloads);

    let toast = &toasts.toasts()[0];
    assert_eq!(toast.kind, ToastKind::Error);
    assert!(toast.message.contains("Download failed"));
}

#[test]
fn test_entrance_flow_end_to_end() {
    let mut page = PortfolioPage::new(PortfolioConfig::default());
    page.tick(0.0, &[]);

    // 进入视口前保持隐藏态
    assert_eq!(page.geometry(SectionId::Projects).opacity, 0.0);

    // 进入 → 按 delay + duration 走完 → 永久可见
    page.tick(0.0, &[PageInput::entered(SectionId::Projects)]);
    page.tick(0.8, &[]);
    assert_eq!(page.phase(SectionId::Projects), SectionPhase::Settled);

    // 离开视口不再有任何影响
    page.tick(0.1, &[PageInput::left(SectionId::Projects)]);
    assert_eq!(
        page.geometry(SectionId::Projects),
        SectionGeometry::visible()
    );
}
