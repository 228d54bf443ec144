//! # Download 模块
//!
//! 简历的获取-保存流程：读取固定路径的简历资源，写入下载目录。
//!
//! 流程只有两种结果（成功保存 / 失败原因），没有重试、退避或部分
//! 失败处理；失败由调用方转成一条提示消息，绝不升级为程序错误。

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 下载流程错误
#[derive(Error, Debug)]
pub enum DownloadError {
    /// 简历资源不存在
    #[error("resume asset not found: {path}")]
    NotFound {
        /// 查找过的路径
        path: String,
    },

    /// 读取或写入失败
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 简历资源的文件大小（字节），资源缺失时为 None
pub fn resume_size(asset: &Path) -> Option<u64> {
    fs::metadata(asset).ok().map(|m| m.len())
}

/// 把简历资源保存到下载目录，返回保存路径
pub fn fetch_resume(asset: &Path, downloads_dir: &Path) -> Result<PathBuf, DownloadError> {
    if !asset.is_file() {
        return Err(DownloadError::NotFound {
            path: asset.display().to_string(),
        });
    }

    fs::create_dir_all(downloads_dir)?;

    let file_name = asset.file_name().unwrap_or(OsStr::new("resume.pdf"));
    let dest = downloads_dir.join(file_name);
    fs::copy(asset, &dest)?;

    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 每个测试独立的临时目录
    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("folio-download-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_fetch_copies_file() {
        let dir = temp_dir("ok");
        let asset = dir.join("resume.pdf");
        fs::write(&asset, b"%PDF-1.4 fake").unwrap();

        let downloads = dir.join("downloads");
        let saved = fetch_resume(&asset, &downloads).unwrap();

        assert_eq!(saved, downloads.join("resume.pdf"));
        assert_eq!(fs::read(&saved).unwrap(), b"%PDF-1.4 fake");
    }

    #[test]
    fn test_fetch_missing_asset() {
        let dir = temp_dir("missing");
        let err = fetch_resume(&dir.join("absent.pdf"), &dir.join("downloads")).unwrap_err();
        assert!(matches!(err, DownloadError::NotFound { .. }));
        // 失败时不创建下载目录之外的任何东西
        assert!(!dir.join("downloads").join("absent.pdf").exists());
    }

    #[test]
    fn test_resume_size() {
        let dir = temp_dir("size");
        let asset = dir.join("resume.pdf");
        fs::write(&asset, vec![0u8; 1024]).unwrap();

        assert_eq!(resume_size(&asset), Some(1024));
        assert_eq!(resume_size(&dir.join("absent.pdf")), None);
    }
}
