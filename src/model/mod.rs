//! 数据模型模块
//!
//! 包含对外公开的播客模型、搜索过滤器，以及目录后端识别的各类封闭词汇表。

pub mod attribute;
pub mod country;
pub mod entity;
pub mod filter;
pub mod genre;
pub mod language;
pub mod podcast;
