//! 目录店面国家。

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// 枚举：表示目录店面所属的国家或地区。
///
/// 代码为两位 ISO 3166-1 国家代码，查询参数中按大写原样发出。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString, Serialize, Deserialize, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Country {
    /// 阿尔及利亚。
    #[strum(serialize = "DZ")]
    Algeria,
    /// 安哥拉。
    #[strum(serialize = "AO")]
    Angola,
    /// 安圭拉。
    #[strum(serialize = "AI")]
    Anguilla,
    /// 安提瓜和巴布达。
    #[strum(serialize = "AG")]
    AntiguaAndBarbuda,
    /// 阿根廷。
    #[strum(serialize = "AR")]
    Argentina,
    /// 亚美尼亚。
    #[strum(serialize = "AM")]
    Armenia,
    /// 澳大利亚。
    #[strum(serialize = "AU")]
    Australia,
    /// 奥地利。
    #[strum(serialize = "AT")]
    Austria,
    /// 阿塞拜疆。
    #[strum(serialize = "AZ")]
    Azerbaijan,
    /// 巴哈马。
    #[strum(serialize = "BS")]
    Bahamas,
    /// 巴林。
    #[strum(serialize = "BH")]
    Bahrain,
    /// 巴巴多斯。
    #[strum(serialize = "BB")]
    Barbados,
    /// 白俄罗斯。
    #[strum(serialize = "BY")]
    Belarus,
    /// 比利时。
    #[strum(serialize = "BE")]
    Belgium,
    /// 伯利兹。
    #[strum(serialize = "BZ")]
    Belize,
    /// 贝宁。
    #[strum(serialize = "BJ")]
    Benin,
    /// 百慕大。
    #[strum(serialize = "BM")]
    Bermuda,
    /// 不丹。
    #[strum(serialize = "BT")]
    Bhutan,
    /// 玻利维亚。
    #[strum(serialize = "BO")]
    Bolivia,
    /// 博茨瓦纳。
    #[strum(serialize = "BW")]
    Botswana,
    /// 巴西。
    #[strum(serialize = "BR")]
    Brazil,
    /// 英属维尔京群岛。
    #[strum(serialize = "VG")]
    BritishVirginIslands,
    /// 文莱。
    #[strum(serialize = "BN")]
    Brunei,
    /// 保加利亚。
    #[strum(serialize = "BG")]
    Bulgaria,
    /// 布基纳法索。
    #[strum(serialize = "BF")]
    BurkinaFaso,
    /// 柬埔寨。
    #[strum(serialize = "KH")]
    Cambodia,
    /// 加拿大。
    #[strum(serialize = "CA")]
    Canada,
    /// 佛得角。
    #[strum(serialize = "CV")]
    CapeVerde,
    /// 开曼群岛。
    #[strum(serialize = "KY")]
    CaymanIslands,
    /// 乍得。
    #[strum(serialize = "TD")]
    Chad,
    /// 智利。
    #[strum(serialize = "CL")]
    Chile,
    /// 中国大陆。
    #[strum(serialize = "CN")]
    China,
    /// 哥伦比亚。
    #[strum(serialize = "CO")]
    Colombia,
    /// 刚果（布）。
    #[strum(serialize = "CG")]
    Congo,
    /// 哥斯达黎加。
    #[strum(serialize = "CR")]
    CostaRica,
    /// 克罗地亚。
    #[strum(serialize = "HR")]
    Croatia,
    /// 塞浦路斯。
    #[strum(serialize = "CY")]
    Cyprus,
    /// 捷克。
    #[strum(serialize = "CZ")]
    CzechRepublic,
    /// 丹麦。
    #[strum(serialize = "DK")]
    Denmark,
    /// 多米尼克。
    #[strum(serialize = "DM")]
    Dominica,
    /// 多米尼加。
    #[strum(serialize = "DO")]
    DominicanRepublic,
    /// 厄瓜多尔。
    #[strum(serialize = "EC")]
    Ecuador,
    /// 埃及。
    #[strum(serialize = "EG")]
    Egypt,
    /// 萨尔瓦多。
    #[strum(serialize = "SV")]
    ElSalvador,
    /// 爱沙尼亚。
    #[strum(serialize = "EE")]
    Estonia,
    /// 斐济。
    #[strum(serialize = "FJ")]
    Fiji,
    /// 芬兰。
    #[strum(serialize = "FI")]
    Finland,
    /// 法国。
    #[strum(serialize = "FR")]
    France,
    /// 冈比亚。
    #[strum(serialize = "GM")]
    Gambia,
    /// 德国。
    #[strum(serialize = "DE")]
    Germany,
    /// 加纳。
    #[strum(serialize = "GH")]
    Ghana,
    /// 希腊。
    #[strum(serialize = "GR")]
    Greece,
    /// 格林纳达。
    #[strum(serialize = "GD")]
    Grenada,
    /// 危地马拉。
    #[strum(serialize = "GT")]
    Guatemala,
    /// 几内亚比绍。
    #[strum(serialize = "GW")]
    GuineaBissau,
    /// 圭亚那。
    #[strum(serialize = "GY")]
    Guyana,
    /// 洪都拉斯。
    #[strum(serialize = "HN")]
    Honduras,
    /// 香港。
    #[strum(serialize = "HK")]
    HongKong,
    /// 匈牙利。
    #[strum(serialize = "HU")]
    Hungary,
    /// 冰岛。
    #[strum(serialize = "IS")]
    Iceland,
    /// 印度。
    #[strum(serialize = "IN")]
    India,
    /// 印度尼西亚。
    #[strum(serialize = "ID")]
    Indonesia,
    /// 爱尔兰。
    #[strum(serialize = "IE")]
    Ireland,
    /// 以色列。
    #[strum(serialize = "IL")]
    Israel,
    /// 意大利。
    #[strum(serialize = "IT")]
    Italy,
    /// 牙买加。
    #[strum(serialize = "JM")]
    Jamaica,
    /// 日本。
    #[strum(serialize = "JP")]
    Japan,
    /// 约旦。
    #[strum(serialize = "JO")]
    Jordan,
    /// 哈萨克斯坦。
    #[strum(serialize = "KZ")]
    Kazakhstan,
    /// 肯尼亚。
    #[strum(serialize = "KE")]
    Kenya,
    /// 科威特。
    #[strum(serialize = "KW")]
    Kuwait,
    /// 吉尔吉斯斯坦。
    #[strum(serialize = "KG")]
    Kyrgyzstan,
    /// 老挝。
    #[strum(serialize = "LA")]
    Laos,
    /// 拉脱维亚。
    #[strum(serialize = "LV")]
    Latvia,
    /// 黎巴嫩。
    #[strum(serialize = "LB")]
    Lebanon,
    /// 利比里亚。
    #[strum(serialize = "LR")]
    Liberia,
    /// 立陶宛。
    #[strum(serialize = "LT")]
    Lithuania,
    /// 卢森堡。
    #[strum(serialize = "LU")]
    Luxembourg,
    /// 澳门。
    #[strum(serialize = "MO")]
    Macau,
    /// 北马其顿。
    #[strum(serialize = "MK")]
    Macedonia,
    /// 马达加斯加。
    #[strum(serialize = "MG")]
    Madagascar,
    /// 马拉维。
    #[strum(serialize = "MW")]
    Malawi,
    /// 马来西亚。
    #[strum(serialize = "MY")]
    Malaysia,
    /// 马里。
    #[strum(serialize = "ML")]
    Mali,
    /// 马耳他。
    #[strum(serialize = "MT")]
    Malta,
    /// 毛里塔尼亚。
    #[strum(serialize = "MR")]
    Mauritania,
    /// 毛里求斯。
    #[strum(serialize = "MU")]
    Mauritius,
    /// 墨西哥。
    #[strum(serialize = "MX")]
    Mexico,
    /// 密克罗尼西亚。
    #[strum(serialize = "FM")]
    Micronesia,
    /// 摩尔多瓦。
    #[strum(serialize = "MD")]
    Moldova,
    /// 蒙古。
    #[strum(serialize = "MN")]
    Mongolia,
    /// 蒙特塞拉特。
    #[strum(serialize = "MS")]
    Montserrat,
    /// 莫桑比克。
    #[strum(serialize = "MZ")]
    Mozambique,
    /// 纳米比亚。
    #[strum(serialize = "NA")]
    Namibia,
    /// 尼泊尔。
    #[strum(serialize = "NP")]
    Nepal,
    /// 荷兰。
    #[strum(serialize = "NL")]
    Netherlands,
    /// 新西兰。
    #[strum(serialize = "NZ")]
    NewZealand,
    /// 尼加拉瓜。
    #[strum(serialize = "NI")]
    Nicaragua,
    /// 尼日尔。
    #[strum(serialize = "NE")]
    Niger,
    /// 尼日利亚。
    #[strum(serialize = "NG")]
    Nigeria,
    /// 挪威。
    #[strum(serialize = "NO")]
    Norway,
    /// 阿曼。
    #[strum(serialize = "OM")]
    Oman,
    /// 巴基斯坦。
    #[strum(serialize = "PK")]
    Pakistan,
    /// 帕劳。
    #[strum(serialize = "PW")]
    Palau,
    /// 巴拿马。
    #[strum(serialize = "PA")]
    Panama,
    /// 巴布亚新几内亚。
    #[strum(serialize = "PG")]
    PapuaNewGuinea,
    /// 巴拉圭。
    #[strum(serialize = "PY")]
    Paraguay,
    /// 秘鲁。
    #[strum(serialize = "PE")]
    Peru,
    /// 菲律宾。
    #[strum(serialize = "PH")]
    Philippines,
    /// 波兰。
    #[strum(serialize = "PL")]
    Poland,
    /// 葡萄牙。
    #[strum(serialize = "PT")]
    Portugal,
    /// 卡塔尔。
    #[strum(serialize = "QA")]
    Qatar,
    /// 罗马尼亚。
    #[strum(serialize = "RO")]
    Romania,
    /// 俄罗斯。
    #[strum(serialize = "RU")]
    Russia,
    /// 圣基茨和尼维斯。
    #[strum(serialize = "KN")]
    SaintKittsAndNevis,
    /// 圣卢西亚。
    #[strum(serialize = "LC")]
    SaintLucia,
    /// 圣文森特和格林纳丁斯。
    #[strum(serialize = "VC")]
    SaintVincentAndTheGrenadines,
    /// 沙特阿拉伯。
    #[strum(serialize = "SA")]
    SaudiArabia,
    /// 塞内加尔。
    #[strum(serialize = "SN")]
    Senegal,
    /// 塞舌尔。
    #[strum(serialize = "SC")]
    Seychelles,
    /// 塞拉利昂。
    #[strum(serialize = "SL")]
    SierraLeone,
    /// 新加坡。
    #[strum(serialize = "SG")]
    Singapore,
    /// 斯洛伐克。
    #[strum(serialize = "SK")]
    Slovakia,
    /// 斯洛文尼亚。
    #[strum(serialize = "SI")]
    Slovenia,
    /// 所罗门群岛。
    #[strum(serialize = "SB")]
    SolomonIslands,
    /// 南非。
    #[strum(serialize = "ZA")]
    SouthAfrica,
    /// 韩国。
    #[strum(serialize = "KR")]
    SouthKorea,
    /// 西班牙。
    #[strum(serialize = "ES")]
    Spain,
    /// 斯里兰卡。
    #[strum(serialize = "LK")]
    SriLanka,
    /// 苏里南。
    #[strum(serialize = "SR")]
    Suriname,
    /// 斯威士兰。
    #[strum(serialize = "SZ")]
    Swaziland,
    /// 瑞典。
    #[strum(serialize = "SE")]
    Sweden,
    /// 瑞士。
    #[strum(serialize = "CH")]
    Switzerland,
    /// 台湾。
    #[strum(serialize = "TW")]
    Taiwan,
    /// 塔吉克斯坦。
    #[strum(serialize = "TJ")]
    Tajikistan,
    /// 坦桑尼亚。
    #[strum(serialize = "TZ")]
    Tanzania,
    /// 泰国。
    #[strum(serialize = "TH")]
    Thailand,
    /// 特立尼达和多巴哥。
    #[strum(serialize = "TT")]
    TrinidadAndTobago,
    /// 突尼斯。
    #[strum(serialize = "TN")]
    Tunisia,
    /// 土耳其。
    #[strum(serialize = "TR")]
    Turkey,
    /// 土库曼斯坦。
    #[strum(serialize = "TM")]
    Turkmenistan,
    /// 特克斯和凯科斯群岛。
    #[strum(serialize = "TC")]
    TurksAndCaicos,
    /// 乌干达。
    #[strum(serialize = "UG")]
    Uganda,
    /// 乌克兰。
    #[strum(serialize = "UA")]
    Ukraine,
    /// 阿联酋。
    #[strum(serialize = "AE")]
    UnitedArabEmirates,
    /// 英国。
    #[strum(serialize = "GB")]
    UnitedKingdom,
    /// 美国。
    #[strum(serialize = "US")]
    UnitedStates,
    /// 乌拉圭。
    #[strum(serialize = "UY")]
    Uruguay,
    /// 乌兹别克斯坦。
    #[strum(serialize = "UZ")]
    Uzbekistan,
    /// 委内瑞拉。
    #[strum(serialize = "VE")]
    Venezuela,
    /// 越南。
    #[strum(serialize = "VN")]
    Vietnam,
    /// 也门。
    #[strum(serialize = "YE")]
    Yemen,
    /// 津巴布韦。
    #[strum(serialize = "ZW")]
    Zimbabwe,
}

impl Country {
    /// 返回目录识别的两位国家代码。
    #[must_use]
    pub fn code(&self) -> &str {
        self.as_ref()
    }
}
