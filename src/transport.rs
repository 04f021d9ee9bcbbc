//! 传输层模块
//!
//! 该模块定义了「按 URL 抓取字节并报告状态码」的传输抽象，
//! 以及基于 `reqwest` 的默认实现。

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use reqwest::header::USER_AGENT;

use crate::error::Result;

/// 默认的 User-Agent 请求头。
pub const DEFAULT_USER_AGENT: &str =
    concat!("podcast-search-rs/", env!("CARGO_PKG_VERSION"));

/// 一次传输调用的结果：状态码与原始响应体。
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP 状态码。
    pub status: u16,
    /// 未经解码的响应体字节。
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// 状态码是否属于 2xx 成功区间。
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 定义了客户端所依赖的 HTTP 传输接口。
///
/// 实现方负责连接复用等传输细节；库本身不做重试和缓存。
#[async_trait]
pub trait Transport: Send + Sync {
    ///
    /// 对目标 URL 发起一次 GET 请求。
    ///
    /// # 参数
    /// * `url` - 完整的目标 URL。
    ///
    /// # 返回
    /// 一个 `Result`，成功时包含状态码与响应体；
    /// 传输层面的失败（DNS、连接、超时等）返回错误。
    ///
    async fn fetch(&self, url: &str) -> Result<TransportResponse>;
}

/// 基于 `reqwest` 的默认传输实现。
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    user_agent: String,
}

impl ReqwestTransport {
    /// 使用默认 User-Agent 创建传输实例。
    #[must_use]
    pub fn new() -> Self {
        Self::with_user_agent(DEFAULT_USER_AGENT)
    }

    /// 使用指定的 User-Agent 创建传输实例。
    pub fn with_user_agent(user_agent: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            user_agent: user_agent.into(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn fetch(&self, url: &str) -> Result<TransportResponse> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, self.user_agent.as_str())
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(TransportResponse { status, body })
    }
}

/// 可克隆的取消令牌。
///
/// 克隆出的句柄共享同一个标志位；客户端在每次发出请求前检查它，
/// 已取消时操作以 [`PodcastSearchError::Cancelled`](crate::PodcastSearchError::Cancelled)
/// 快速失败。
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// 创建一个未取消的令牌。
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 发出取消信号。对所有克隆可见。
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// 该令牌是否已被取消。
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancellation_token_shared_across_clones() {
        let token = CancellationToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled(), "新令牌不应处于已取消状态");

        token.cancel();
        assert!(clone.is_cancelled(), "取消信号应对克隆可见");
    }

    #[test]
    fn test_transport_response_success_range() {
        let ok = TransportResponse {
            status: 200,
            body: Vec::new(),
        };
        let redirect = TransportResponse {
            status: 301,
            body: Vec::new(),
        };
        let not_found = TransportResponse {
            status: 404,
            body: Vec::new(),
        };

        assert!(ok.is_success());
        assert!(!redirect.is_success(), "3xx 不应视为成功");
        assert!(!not_found.is_success());
    }
}
