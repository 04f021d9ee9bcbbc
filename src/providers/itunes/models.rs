//! 此模块定义了所有用于反序列化 iTunes 目录 API 响应的数据结构，
//! 以及从原始条目到公开播客模型的投影。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, de::DeserializeOwned};

use crate::model::{entity::EntityKind, podcast::Podcast};

// =================================================================
// 搜索 / 查询接口 ( /search, /lookup ) 的模型
// =================================================================

/// 搜索与按 ID 查询响应共用的信封。
///
/// `resultCount` 或 `results` 缺失属于信封损坏，会作为解析错误向上传播；
/// 数组元素内部的问题则不会（见 [`Item`]）。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// 后端报告的结果总数，可能大于 `results` 的长度。
    pub result_count: u64,
    /// 未经解析的原始结果数组。
    pub results: Vec<serde_json::Value>,
}

/// 搜索结果数组中的单个原始条目。
///
/// 所有字段彼此独立且宽容：缺失或类型不符的字段一律退化为
/// `None`（列表字段退化为空），条目本身的构造永不失败。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    /// 目录分配的规范条目 ID。
    #[serde(deserialize_with = "lenient")]
    pub collection_id: Option<i64>,
    /// 单集级别的条目 ID，可能与 `collection_id` 相同。
    #[serde(deserialize_with = "lenient")]
    pub track_id: Option<i64>,
    /// 艺术家（作者）名。
    #[serde(deserialize_with = "lenient")]
    pub artist_name: Option<String>,
    /// 合辑（播客）名。
    #[serde(deserialize_with = "lenient")]
    pub collection_name: Option<String>,
    /// 单集或播客的标题。
    #[serde(deserialize_with = "lenient")]
    pub track_name: Option<String>,
    /// RSS 订阅源 URL。
    #[serde(deserialize_with = "lenient")]
    pub feed_url: Option<String>,
    /// 合辑在目录中的页面 URL。
    #[serde(deserialize_with = "lenient")]
    pub collection_view_url: Option<String>,
    /// 单集在目录中的页面 URL。
    #[serde(deserialize_with = "lenient")]
    pub track_view_url: Option<String>,
    /// 30px 封面图 URL。
    #[serde(deserialize_with = "lenient")]
    pub artwork_url_30: Option<String>,
    /// 60px 封面图 URL。
    #[serde(deserialize_with = "lenient")]
    pub artwork_url_60: Option<String>,
    /// 100px 封面图 URL。
    #[serde(deserialize_with = "lenient")]
    pub artwork_url_100: Option<String>,
    /// 600px 封面图 URL。
    #[serde(deserialize_with = "lenient")]
    pub artwork_url_600: Option<String>,
    /// 最近一集的发布时间，RFC 3339 格式。
    #[serde(deserialize_with = "lenient_datetime")]
    pub release_date: Option<DateTime<Utc>>,
    /// 合辑价格。
    #[serde(deserialize_with = "lenient")]
    pub collection_price: Option<f64>,
    /// 单集价格。
    #[serde(deserialize_with = "lenient")]
    pub track_price: Option<f64>,
    /// 单集租赁价格。
    #[serde(deserialize_with = "lenient")]
    pub track_rental_price: Option<f64>,
    /// 高清合辑价格。
    #[serde(deserialize_with = "lenient")]
    pub collection_hd_price: Option<f64>,
    /// 高清单集价格。
    #[serde(deserialize_with = "lenient")]
    pub track_hd_price: Option<f64>,
    /// 高清单集租赁价格。
    #[serde(deserialize_with = "lenient")]
    pub track_hd_rental_price: Option<f64>,
    /// 合辑的成人内容标记。
    #[serde(deserialize_with = "lenient")]
    pub collection_explicitness: Option<String>,
    /// 单集的成人内容标记。
    #[serde(deserialize_with = "lenient")]
    pub track_explicitness: Option<String>,
    /// 合辑包含的单集数量。
    #[serde(deserialize_with = "lenient")]
    pub track_count: Option<u32>,
    /// 主类目名称。
    #[serde(deserialize_with = "lenient")]
    pub primary_genre_name: Option<String>,
    /// 类目 ID 列表。
    #[serde(deserialize_with = "lenient_seq")]
    pub genre_ids: Vec<String>,
    /// 类目名称列表。
    #[serde(deserialize_with = "lenient_seq")]
    pub genres: Vec<String>,
}

/// 相等性只覆盖身份与展示字段。
///
/// 封面、价格、时间、成人标记等易变字段不参与比较。
impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.collection_id == other.collection_id
            && self.track_id == other.track_id
            && self.artist_name == other.artist_name
            && self.collection_name == other.collection_name
            && self.track_name == other.track_name
            && self.feed_url == other.feed_url
            && self.collection_view_url == other.collection_view_url
            && self.primary_genre_name == other.primary_genre_name
    }
}

impl Item {
    /// 将原始条目投影为公开的播客模型。
    ///
    /// `collection_id` 是投影的唯一硬性要求，缺失时返回 `None`，
    /// 调用方会把该条目从结果集中丢弃。其余字段按既定回退规则填充：
    /// 封面优先取 600px，其次 100px，再缺失时为空字符串哨兵；
    /// 作者名缺失时为空字符串。
    #[must_use]
    pub fn into_podcast(self, entity: EntityKind) -> Option<Podcast> {
        let id = self.collection_id?;
        Some(Podcast {
            id: id.to_string(),
            title: self.track_name,
            image: self
                .artwork_url_600
                .or(self.artwork_url_100)
                .unwrap_or_default(),
            publication_date: self.release_date,
            author: self.artist_name.unwrap_or_default(),
            is_podcast: entity == EntityKind::Podcast,
            feed_url: self.feed_url,
        })
    }
}

// =================================================================
// 热门榜单接口 ( rss.applemarketingtools.com ) 的模型
// =================================================================

/// 榜单响应的顶层对象。
///
/// 榜单路径整体宽容：任何层级缺失都不是错误，只会得到空结果。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrendingResponse {
    /// 榜单内容容器。
    #[serde(default)]
    pub feed: Option<TrendingFeed>,
}

/// 榜单内容。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrendingFeed {
    /// 榜单条目，按名次排列。
    #[serde(default)]
    pub results: Vec<TrendingEntry>,
}

/// 单个榜单条目。只保留目录 ID，其余字段忽略。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrendingEntry {
    /// 条目的目录 ID。
    #[serde(default)]
    pub id: Option<String>,
}

// =================================================================
// 宽容反序列化辅助函数
// =================================================================

/// 宽容地反序列化单个字段：任何无法按目标类型解析的值都退化为 `None`。
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// 宽容地反序列化列表字段：无法解析时退化为空列表。
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// 宽容地解析 RFC 3339 时间字符串：缺失或无法解析时退化为 `None`。
fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc)))
}
