//! 搜索属性。

use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumString};

/// 枚举：表示关键词所匹配的字段。
///
/// 不设置时后端会在所有字段上匹配关键词。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Serialize, Deserialize, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Attribute {
    /// 按标题匹配。
    TitleTerm,
    /// 按语言匹配。
    LanguageTerm,
    /// 按作者匹配。
    AuthorTerm,
    /// 按类目索引匹配。
    GenreIndex,
    /// 按艺术家匹配。
    ArtistTerm,
    /// 按分级索引匹配。
    RatingIndex,
    /// 按关键字列表匹配。
    KeywordsTerm,
    /// 按描述文本匹配。
    DescriptionTerm,
}

impl Attribute {
    /// 将搜索属性转换为后端识别的属性代码。
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Attribute::TitleTerm => "titleTerm",
            Attribute::LanguageTerm => "languageTerm",
            Attribute::AuthorTerm => "authorTerm",
            Attribute::GenreIndex => "genreIndex",
            Attribute::ArtistTerm => "artistTerm",
            Attribute::RatingIndex => "ratingIndex",
            Attribute::KeywordsTerm => "keywordsTerm",
            Attribute::DescriptionTerm => "descriptionTerm",
        }
    }
}
