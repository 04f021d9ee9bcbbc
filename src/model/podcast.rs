//! 对外公开的播客模型与结果集。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 一条规范化后的播客条目。
///
/// 由单条原始搜索结果在规范化阶段一次性构造，构造后不再变化。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Podcast {
    /// 目录分配的规范 ID，即 `collectionId` 的字符串形式。
    pub id: String,
    /// 播客标题（取自 `trackName`）。
    pub title: Option<String>,
    /// 封面图 URL。优先取 600px 封面，其次 100px，均缺失时为空字符串哨兵。
    pub image: String,
    /// 最近一集的发布时间。
    pub publication_date: Option<DateTime<Utc>>,
    /// 作者名。后端未给出时为空字符串。
    pub author: String,
    /// 发起请求时的媒体实体是否为「播客本体」。
    ///
    /// 该标志只取决于请求参数，与条目内容无关。
    pub is_podcast: bool,
    /// RSS 订阅源 URL。
    pub feed_url: Option<String>,
}

/// 一次目录操作返回的结果集。
///
/// `result_count` 来自后端报告，可能大于列表长度；二者不做对账。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResults {
    /// 后端报告的结果总数。
    pub result_count: u64,
    /// 规范化后的播客列表，保持后端返回顺序。
    pub podcasts: Vec<Podcast>,
    /// 规范化阶段被静默丢弃的无效条目数。
    pub dropped: usize,
}

impl SearchResults {
    /// 返回结果列表的长度。
    #[must_use]
    pub fn len(&self) -> usize {
        self.podcasts.len()
    }

    /// 结果列表是否为空。
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.podcasts.is_empty()
    }
}
