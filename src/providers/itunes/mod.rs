//! 此模块实现了与 iTunes 播客目录交互的客户端。
//! 搜索 API 参考 <https://performance-partners.apple.com/search-api>

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::{PodcastSearchError, Result},
    model::{
        country::Country, entity::EntityKind, filter::SearchFilters, genre::Genre,
        podcast::SearchResults,
    },
    transport::{CancellationToken, DEFAULT_USER_AGENT, ReqwestTransport, Transport},
};

pub mod models;
pub mod query;

const DIRECTORY_BASE_URL: &str = "https://itunes.apple.com";
const TRENDING_BASE_URL: &str = "https://rss.applemarketingtools.com/api/v2";
const SEARCH_PATH: &str = "/search";
const LOOKUP_PATH: &str = "/lookup";

/// iTunes 客户端的连接配置。
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// 搜索与按 ID 查询端点的基地址。
    pub directory_base_url: String,
    /// 热门榜单端点的基地址。
    pub trending_base_url: String,
    /// 默认传输层使用的 User-Agent。
    pub user_agent: String,
    /// 可选的取消令牌。所有操作在发出请求前检查它。
    pub cancellation: Option<CancellationToken>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            directory_base_url: DIRECTORY_BASE_URL.to_string(),
            trending_base_url: TRENDING_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cancellation: None,
        }
    }
}

/// iTunes 播客目录的客户端实现。
///
/// 所有操作都是一次性的请求响应调用，内部没有并发、后台任务
/// 和可变共享状态；同一实例可以被任意数量的任务并发使用。
#[derive(Clone)]
pub struct ItunesClient {
    transport: Arc<dyn Transport>,
    config: ClientConfig,
}

impl Default for ItunesClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ItunesClient {
    /// 使用默认配置创建客户端。
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// 使用指定配置创建客户端，传输层为内置的 `reqwest` 实现。
    #[must_use]
    pub fn with_config(config: ClientConfig) -> Self {
        let transport = Arc::new(ReqwestTransport::with_user_agent(config.user_agent.clone()));
        Self { transport, config }
    }

    /// 使用自定义传输层创建客户端。
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { transport, config }
    }

    ///
    /// 按过滤条件搜索播客目录。
    ///
    /// 未指定实体种类时默认为混合实体（播客与单集）。
    ///
    /// # 参数
    /// * `filters` - 过滤条件集合，所有字段可选。
    ///
    /// # 返回
    /// 一个 `Result`，成功时包含规范化后的结果集。
    ///
    #[instrument(skip(self, filters))]
    pub async fn search(&self, filters: &SearchFilters) -> Result<SearchResults> {
        self.ensure_not_cancelled()?;

        let entity = filters.entity.unwrap_or_default();
        let mut effective = filters.clone();
        effective.entity = Some(entity);

        let params = query::build_search_params(&effective);
        let url = query::build_url(&self.directory_endpoint(SEARCH_PATH), &params);
        info!(url = %url, "正在搜索播客目录");

        let envelope: models::SearchResponse = self.fetch_json(&url).await?;
        Ok(normalize_response(envelope, entity))
    }

    ///
    /// 按目录 ID 批量查询播客。
    ///
    /// # 参数
    /// * `ids` - 目录 ID 列表。传入空列表会直接返回
    ///   [`PodcastSearchError::InvalidRequest`]，不发出任何请求。
    ///
    /// # 返回
    /// 一个 `Result`，成功时包含规范化后的结果集；
    /// 结果按播客本体实体规范化。
    ///
    #[instrument(skip(self, ids))]
    pub async fn lookup(&self, ids: &[String]) -> Result<SearchResults> {
        if ids.is_empty() {
            return Err(PodcastSearchError::InvalidRequest(
                "ID 列表不能为空".to_string(),
            ));
        }
        self.ensure_not_cancelled()?;

        let params = vec![
            ("id", ids.join(",")),
            (query::FIXED_MEDIA.0, query::FIXED_MEDIA.1.to_string()),
        ];
        let url = query::build_url(&self.directory_endpoint(LOOKUP_PATH), &params);
        info!(url = %url, count = ids.len(), "正在按 ID 查询播客");

        let envelope: models::SearchResponse = self.fetch_json(&url).await?;
        Ok(normalize_response(envelope, EntityKind::Podcast))
    }

    ///
    /// 获取指定国家热门播客的目录 ID 列表，按榜单名次排列。
    ///
    /// 榜单端点的响应整体宽容：响应体缺少预期结构（甚至不是合法
    /// JSON）时返回空列表而不是错误；只有传输失败和非 2xx 状态码
    /// 才会失败。
    ///
    /// # 参数
    /// * `country` - 榜单所属国家。
    /// * `limit` - 榜单长度上限。
    ///
    #[instrument(skip(self))]
    pub async fn trending_ids(&self, country: Country, limit: u32) -> Result<Vec<String>> {
        self.ensure_not_cancelled()?;

        let url = format!(
            "{}/{}/podcasts/top/{}/podcasts.json",
            self.config.trending_base_url,
            country.code().to_lowercase(),
            limit
        );
        reqwest::Url::parse(&url)
            .map_err(|e| PodcastSearchError::Upstream(format!("榜单 URL 无法构造: {e}")))?;
        debug!(url = %url, "正在获取热门榜单");

        let response = self.transport.fetch(&url).await?;
        if !response.is_success() {
            return Err(PodcastSearchError::Upstream(format!(
                "榜单端点返回状态码 {}",
                response.status
            )));
        }

        let parsed: models::TrendingResponse =
            serde_json::from_slice(&response.body).unwrap_or_default();
        let ids: Vec<String> = parsed
            .feed
            .map(|feed| feed.results)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|entry| entry.id)
            .collect();
        debug!(count = ids.len(), "榜单 ID 获取完成");
        Ok(ids)
    }

    ///
    /// 获取指定国家热门播客的完整条目。
    ///
    /// 先取榜单 ID 再按 ID 查询详情，两次请求严格顺序执行。
    /// 榜单为空时直接返回空结果集，不发出查询请求。
    ///
    /// # 参数
    /// * `country` - 榜单所属国家。
    /// * `limit` - 榜单长度上限。
    ///
    #[instrument(skip(self))]
    pub async fn trending_items(&self, country: Country, limit: u32) -> Result<SearchResults> {
        let ids = self.trending_ids(country, limit).await?;
        if ids.is_empty() {
            info!("榜单为空，跳过详情查询");
            return Ok(SearchResults::default());
        }
        self.lookup(&ids).await
    }

    ///
    /// 按类目搜索播客。
    ///
    /// 以固定关键词 `podcast` 搭配类目过滤，并在构造好的查询之后
    /// 追加端点专属的 `limit` 参数。
    ///
    /// # 参数
    /// * `genre` - 播客类目。
    /// * `entity` - 期望返回的媒体实体种类。
    /// * `limit` - 返回条目数上限。
    ///
    #[instrument(skip(self))]
    pub async fn by_category(
        &self,
        genre: Genre,
        entity: EntityKind,
        limit: u32,
    ) -> Result<SearchResults> {
        self.ensure_not_cancelled()?;

        let filters = SearchFilters {
            term: Some("podcast".to_string()),
            genre: Some(genre),
            entity: Some(entity),
            ..Default::default()
        };
        let mut params = query::build_search_params(&filters);
        params.push(("limit", limit.to_string()));

        let url = query::build_url(&self.directory_endpoint(SEARCH_PATH), &params);
        info!(url = %url, "正在按类目搜索播客");

        let envelope: models::SearchResponse = self.fetch_json(&url).await?;
        Ok(normalize_response(envelope, entity))
    }

    fn directory_endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.config.directory_base_url)
    }

    fn ensure_not_cancelled(&self) -> Result<()> {
        if self
            .config
            .cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
        {
            return Err(PodcastSearchError::Cancelled);
        }
        Ok(())
    }

    /// 私有辅助函数：校验 URL、执行请求、检查状态码并反序列化信封。
    async fn fetch_json<R>(&self, url: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        reqwest::Url::parse(url)
            .map_err(|e| PodcastSearchError::Upstream(format!("目标 URL 无法构造: {e}")))?;

        let response = self.transport.fetch(url).await?;

        let response_text = String::from_utf8_lossy(&response.body);
        tracing::trace!(
            url = url,
            response.body = %response_text,
            "原始 JSON 响应"
        );

        if !response.is_success() {
            return Err(PodcastSearchError::Upstream(format!(
                "端点返回状态码 {}",
                response.status
            )));
        }

        Ok(serde_json::from_slice(&response.body)?)
    }
}

/// 将信封中的原始数组规范化为公开结果集。
///
/// 无法投影的元素（缺少 `collectionId`）被静默丢弃并计数；
/// 结果总数保持后端报告值，不与列表长度对账。
fn normalize_response(envelope: models::SearchResponse, entity: EntityKind) -> SearchResults {
    let result_count = envelope.result_count;
    let total = envelope.results.len();

    let mut podcasts = Vec::with_capacity(total);
    for value in envelope.results {
        let item: models::Item = serde_json::from_value(value).unwrap_or_default();
        if let Some(podcast) = item.into_podcast(entity) {
            podcasts.push(podcast);
        }
    }

    let dropped = total - podcasts.len();
    if dropped > 0 {
        warn!(dropped, "部分条目缺少 collectionId，已被丢弃");
    }

    SearchResults {
        result_count,
        podcasts,
        dropped,
    }
}
