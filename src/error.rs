//! 定义了整个 `podcast-search` 库的错误类型 `PodcastSearchError`。

use thiserror::Error;

/// `podcast-search` 库的通用错误枚举。
#[derive(Error, Debug)]
pub enum PodcastSearchError {
    /// 调用方提供的参数无法构成合法请求，此时不会发出任何网络请求
    #[error("无效的请求参数: {0}")]
    InvalidRequest(String),

    /// 上游服务返回了非成功状态码，或目标 URL 无法构造
    #[error("上游服务错误: {0}")]
    Upstream(String),

    /// 网络请求失败 (源自 `reqwest::Error`)
    #[error("网络请求失败: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// JSON 解析失败 (源自 `serde_json::Error`)
    #[error("JSON 解析失败: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// 操作在发出请求前观察到了取消信号
    #[error("操作已被取消")]
    Cancelled,
}

/// `PodcastSearchError` 的 `Result` 类型别名，方便在函数签名中使用。
pub type Result<T> = std::result::Result<T, PodcastSearchError>;
