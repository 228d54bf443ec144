//! # Command 执行
//!
//! 把 Runtime 发出的 Command 转换为宿主侧效果。
//!
//! 执行不依赖窗口或渲染设备，便于在集成测试里驱动完整的
//! Runtime → Host 链路。

use folio_runtime::{Command, DownloadOutcome, PageInput};
use std::path::Path;
use tracing::{debug, info};

use crate::download;
use crate::ui::ToastManager;

/// 页面根：文档根主题属性的宿主侧镜像
#[derive(Debug, Clone)]
pub struct PageRoot {
    /// 根主题属性（"light" / "dark"）
    pub theme_attr: String,
}

impl Default for PageRoot {
    fn default() -> Self {
        Self {
            theme_attr: "light".to_string(),
        }
    }
}

/// 执行单条 Command
///
/// `FetchResume` 同步完成文件复制，并把结果作为
/// [`PageInput::DownloadFinished`] 推入 `pending`，由下一次 tick 消化。
pub fn execute_command(
    command: &Command,
    page_root: &mut PageRoot,
    toasts: &mut ToastManager,
    resume_path: &Path,
    downloads_dir: &Path,
    pending: &mut Vec<PageInput>,
) {
    match command {
        Command::SetRootTheme { mode } => {
            debug!(mode = mode.as_attr(), "镜像根主题属性");
            page_root.theme_attr = mode.as_attr().to_string();
        }

        Command::ShowToast { kind, message } => {
            toasts.show(message.clone(), *kind);
        }

        Command::FetchResume => {
            let outcome = match download::fetch_resume(resume_path, downloads_dir) {
                Ok(path) => {
                    info!(path = %path.display(), "简历已保存");
                    DownloadOutcome::Saved {
                        path: path.display().to_string(),
                    }
                }
                Err(e) => DownloadOutcome::Failed {
                    reason: e.to_string(),
                },
            };
            pending.push(PageInput::DownloadFinished { outcome });
        }
    }
}
