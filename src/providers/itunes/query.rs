//! 查询参数构造。
//!
//! 将 [`SearchFilters`] 转换为有序的键值对序列，并负责最终 URL 的拼接。
//! 参数的发出顺序是确定的。

use crate::model::filter::SearchFilters;

/// 每个搜索请求末尾固定携带的媒体参数。
///
/// 实体参数筛选结果的类型，媒体参数固定结果的介质，二者互不影响。
pub(crate) const FIXED_MEDIA: (&str, &str) = ("media", "podcast");

/// 根据过滤条件构造有序的查询参数序列。
///
/// 未设置的过滤字段不会产生参数。发出顺序固定为：
/// `term`、`country`、`entity`、`attribute`、`genreId`、`lang`、
/// `version`、`explicit`，最后恒为 `media=podcast`。
///
/// 关键词中的空格在此处替换为 `+`；空字符串关键词仍会被发出
/// （未设置与设置为空是两种不同输入）。
#[must_use]
pub fn build_search_params(filters: &SearchFilters) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();

    if let Some(term) = &filters.term {
        params.push(("term", term.replace(' ', "+")));
    }
    if let Some(country) = filters.country {
        params.push(("country", country.code().to_string()));
    }
    if let Some(entity) = filters.entity {
        params.push(("entity", entity.code().to_string()));
    }
    if let Some(attribute) = filters.attribute {
        params.push(("attribute", attribute.code().to_string()));
    }
    if let Some(genre) = filters.genre {
        params.push(("genreId", genre.id().to_string()));
    }
    if let Some(language) = filters.language {
        params.push(("lang", language.code().to_string()));
    }
    if let Some(version) = filters.version {
        params.push(("version", version.to_string()));
    }
    if let Some(explicit) = &filters.explicit {
        params.push(("explicit", explicit.clone()));
    }

    params.push((FIXED_MEDIA.0, FIXED_MEDIA.1.to_string()));
    params
}

/// 将参数序列拼接到端点 URL 之后。
///
/// 参数值会被百分号转义，但保留 [`build_search_params`] 写入的 `+`
/// 以及按 ID 查询时连接多个 ID 的 `,`。
#[must_use]
pub fn build_url(endpoint: &str, params: &[(&'static str, String)]) -> String {
    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={}", encode_component(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{endpoint}?{query}")
}

/// 转义单个参数值，`+` 与 `,` 原样保留。
fn encode_component(value: &str) -> String {
    urlencoding::encode(value)
        .replace("%2B", "+")
        .replace("%2C", ",")
}
