#![warn(missing_docs)]

//! # Podcast Search RS
//!
//! 一个异步 Rust 库，用于搜索 iTunes 播客目录、按 ID 查询播客，以及获取各国热门播客榜单。
//!
//! ## 主要功能
//!
//! - **目录搜索**: 按关键词搭配国家、类目、语言、实体等过滤条件搜索播客与单集。
//! - **按 ID 查询**: 将一组目录 ID 一次性解析为完整的播客条目。
//! - **热门榜单**: 获取指定国家的热门播客 ID 列表或完整条目。
//! - **宽容的规范化**: 后端返回的松散 JSON 被规范化为稳定的 [`Podcast`] 模型，
//!   个别字段缺失或损坏不会导致失败。
//!
//! ## 搜索播客
//!
//! ```rust,no_run
//! use podcast_search_rs::model::country::Country;
//! use podcast_search_rs::{ItunesClient, SearchFilters};
//!
//! async {
//!     let client = ItunesClient::new();
//!     let filters = SearchFilters {
//!         term: Some("true crime".to_string()),
//!         country: Some(Country::UnitedStates),
//!         ..Default::default()
//!     };
//!     match client.search(&filters).await {
//!         Ok(results) => println!("共 {} 条结果。", results.result_count),
//!         Err(e) => eprintln!("发生错误: {e}"),
//!     }
//! };
//! ```
//!
//! ## 热门榜单
//!
//! ```rust,no_run
//! use podcast_search_rs::ItunesClient;
//! use podcast_search_rs::model::country::Country;
//!
//! async {
//!     let client = ItunesClient::new();
//!     match client.trending_items(Country::Japan, 20).await {
//!         Ok(charts) => {
//!             for podcast in &charts.podcasts {
//!                 println!("{} - {}", podcast.id, podcast.title.as_deref().unwrap_or("(无标题)"));
//!             }
//!         }
//!         Err(e) => eprintln!("发生错误: {e}"),
//!     }
//! };
//! ```
pub mod error;
pub mod model;
pub mod providers;
pub mod transport;

pub use crate::{
    error::{PodcastSearchError, Result},
    model::{
        filter::SearchFilters,
        podcast::{Podcast, SearchResults},
    },
    providers::itunes::{ClientConfig, ItunesClient},
};
