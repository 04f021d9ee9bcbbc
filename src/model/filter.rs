//! 搜索过滤条件。

use serde::{Deserialize, Serialize};

use crate::model::{
    attribute::Attribute, country::Country, entity::EntityKind, genre::Genre, language::Language,
};

/// 一次目录搜索的过滤条件集合。
///
/// 所有字段彼此独立且可选；未设置的字段不会出现在查询参数中，
/// 字段之间也不做交叉校验。
///
/// # 示例
///
/// ```
/// use podcast_search_rs::model::{country::Country, filter::SearchFilters};
///
/// let filters = SearchFilters {
///     term: Some("true crime".to_string()),
///     country: Some(Country::UnitedStates),
///     ..Default::default()
/// };
/// assert!(filters.entity.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// 搜索关键词。注意 `Some("")` 与 `None` 含义不同：空字符串仍会被发出。
    pub term: Option<String>,
    /// 目录店面所属国家。
    pub country: Option<Country>,
    /// 期望返回的媒体实体种类。
    pub entity: Option<EntityKind>,
    /// 关键词所匹配的字段。
    pub attribute: Option<Attribute>,
    /// 播客类目。
    pub genre: Option<Genre>,
    /// 结果语言。
    pub language: Option<Language>,
    /// 后端 API 版本号，按十进制原样发出，不做范围校验。
    pub version: Option<u32>,
    /// 是否包含成人内容。后端识别 `"Yes"` / `"No"`，此处原样透传。
    pub explicit: Option<String>,
}
