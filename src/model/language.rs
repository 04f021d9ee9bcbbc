//! 结果语言。

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// 枚举：表示结果所使用的语言。
///
/// 代码为目录使用的五段式店面语言代码（如 `en_us`）。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString, Serialize, Deserialize, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Language {
    /// 英语（美国店面）。
    #[strum(serialize = "en_us")]
    English,
    /// 日语。
    #[strum(serialize = "ja_jp")]
    Japanese,
    /// 法语。
    #[strum(serialize = "fr_fr")]
    French,
    /// 德语。
    #[strum(serialize = "de_de")]
    German,
    /// 西班牙语。
    #[strum(serialize = "es_es")]
    Spanish,
    /// 意大利语。
    #[strum(serialize = "it_it")]
    Italian,
    /// 葡萄牙语（巴西店面）。
    #[strum(serialize = "pt_br")]
    Portuguese,
    /// 荷兰语。
    #[strum(serialize = "nl_nl")]
    Dutch,
    /// 瑞典语。
    #[strum(serialize = "sv_se")]
    Swedish,
    /// 韩语。
    #[strum(serialize = "ko_kr")]
    Korean,
    /// 简体中文。
    #[strum(serialize = "zh_cn")]
    ChineseSimplified,
    /// 繁体中文（台湾店面）。
    #[strum(serialize = "zh_tw")]
    ChineseTraditional,
}

impl Language {
    /// 返回目录识别的店面语言代码。
    #[must_use]
    pub fn code(&self) -> &str {
        self.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_language_codes_are_five_segment() {
        for language in Language::iter() {
            let code = language.code();
            assert_eq!(code.len(), 5, "语言代码应为五段式: {code}");
            assert_eq!(&code[2..3], "_", "语言代码应以下划线分隔: {code}");
        }
    }
}
