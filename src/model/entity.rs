//! 媒体实体种类。

use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumString};

/// 枚举：表示搜索结果的媒体实体种类。
///
/// 实体筛选的是结果的*类型*；无论选择哪一种，
/// 请求中的媒体参数始终固定为播客。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, Serialize, Deserialize, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum EntityKind {
    /// 仅播客本体。
    Podcast,
    /// 仅播客单集。
    PodcastEpisode,
    /// 播客本体与单集混合，未指定实体时的默认值。
    #[default]
    PodcastAndEpisode,
}

impl EntityKind {
    /// 将实体种类转换为后端识别的实体代码。
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            EntityKind::Podcast => "podcast",
            EntityKind::PodcastEpisode => "podcastEpisode",
            EntityKind::PodcastAndEpisode => "podcastAndEpisode",
        }
    }
}
