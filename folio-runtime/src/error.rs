//! # Error 模块
//!
//! 定义 folio-runtime 中使用的错误类型。
//!
//! 核心引擎本身没有错误路径（配置与几何都是惰性数据）；唯一可失败
//! 的入口是内容文件的解析。

use thiserror::Error;

/// 内容解析错误
#[derive(Error, Debug)]
pub enum ContentError {
    /// JSON 结构不合法或字段缺失
    #[error("内容文件不合法: {0}")]
    Invalid(#[from] serde_json::Error),
}
