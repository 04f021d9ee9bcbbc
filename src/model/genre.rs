//! 播客类目。

use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumString};

/// 枚举：表示目录定义的播客类目。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Serialize, Deserialize, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Genre {
    /// 艺术。
    Arts,
    /// 喜剧。
    Comedy,
    /// 教育。
    Education,
    /// 儿童与家庭。
    KidsAndFamily,
    /// 影视。
    TvAndFilm,
    /// 音乐。
    Music,
    /// 宗教与灵性。
    ReligionAndSpirituality,
    /// 科技。
    Technology,
    /// 商业。
    Business,
    /// 社会与文化。
    SocietyAndCulture,
    /// 小说。
    Fiction,
    /// 历史。
    History,
    /// 真实罪案。
    TrueCrime,
    /// 新闻。
    News,
    /// 休闲。
    Leisure,
    /// 政府。
    Government,
    /// 健康与健身。
    HealthAndFitness,
    /// 科学。
    Science,
    /// 体育。
    Sports,
}

impl Genre {
    /// 返回目录为该类目分配的数字 ID。
    #[must_use]
    pub fn id(self) -> u32 {
        match self {
            Genre::Arts => 1301,
            Genre::Comedy => 1303,
            Genre::Education => 1304,
            Genre::KidsAndFamily => 1305,
            Genre::TvAndFilm => 1309,
            Genre::Music => 1310,
            Genre::ReligionAndSpirituality => 1314,
            Genre::Technology => 1318,
            Genre::Business => 1321,
            Genre::SocietyAndCulture => 1324,
            Genre::Fiction => 1483,
            Genre::History => 1487,
            Genre::TrueCrime => 1488,
            Genre::News => 1489,
            Genre::Leisure => 1502,
            Genre::Government => 1511,
            Genre::HealthAndFitness => 1512,
            Genre::Science => 1533,
            Genre::Sports => 1545,
        }
    }
}
