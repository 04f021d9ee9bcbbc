use std::{
    collections::VecDeque,
    path::Path,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use chrono::Datelike;
use podcast_search_rs::{
    ClientConfig, ItunesClient, SearchFilters,
    model::{country::Country, entity::EntityKind},
    transport::{Transport, TransportResponse},
};

fn load_test_data(filename: &str) -> String {
    let path = Path::new("tests/test_data").join(filename);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("读取测试文件 '{path:?}' 失败: {e}"))
}

/// 按预置顺序回放响应体的测试传输。
struct ReplayTransport {
    responses: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<String>>,
}

impl ReplayTransport {
    fn new(bodies: Vec<String>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(bodies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ReplayTransport {
    async fn fetch(&self, url: &str) -> podcast_search_rs::Result<TransportResponse> {
        self.requests.lock().unwrap().push(url.to_string());
        let body = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("预置的响应数量不足");
        Ok(TransportResponse {
            status: 200,
            body: body.into_bytes(),
        })
    }
}

fn client_with(transport: Arc<ReplayTransport>) -> ItunesClient {
    ItunesClient::with_transport(ClientConfig::default(), transport)
}

#[tokio::test]
async fn test_search_normalizes_realistic_payload() {
    let transport = ReplayTransport::new(vec![load_test_data("search_response.json")]);
    let client = client_with(transport);

    let filters = SearchFilters {
        term: Some("deep code".to_string()),
        country: Some(Country::UnitedStates),
        ..Default::default()
    };
    let results = client.search(&filters).await.expect("搜索应当成功");

    assert_eq!(results.result_count, 3);
    assert_eq!(results.len(), 3);
    assert_eq!(results.dropped, 0);

    let first = &results.podcasts[0];
    assert_eq!(first.id, "1701984547");
    assert_eq!(first.title.as_deref(), Some("Deep Code Stories"));
    assert_eq!(first.author, "Binary Audio Lab");
    assert!(
        first.image.ends_with("600x600bb.jpg"),
        "应优先选用 600px 封面: {}",
        first.image
    );
    assert_eq!(
        first.feed_url.as_deref(),
        Some("https://feeds.binaryaudiolab.example/deepcode.xml")
    );

    let date = first.publication_date.expect("发布时间应当被解析");
    assert_eq!(date.year(), 2024);

    assert!(
        !first.is_podcast,
        "未指定实体时按混合实体规范化，播客标志应为否"
    );

    let episode = &results.podcasts[2];
    assert_eq!(
        episode.id, "1701984547",
        "单集条目的 ID 同样来自所属合辑"
    );
    assert_eq!(
        episode.title.as_deref(),
        Some("Episode 186: The Borrow Checker's Apprentice")
    );
}

#[tokio::test]
async fn test_search_accounts_for_dropped_elements() {
    let transport = ReplayTransport::new(vec![load_test_data("search_response_partial.json")]);
    let client = client_with(transport);

    let results = client
        .search(&SearchFilters::default())
        .await
        .expect("搜索应当成功");

    assert_eq!(results.result_count, 3, "总数应保持后端报告值");
    assert_eq!(results.len(), 2, "缺少 collectionId 的条目应被丢弃");
    assert_eq!(results.dropped, 1);

    let ids: Vec<&str> = results.podcasts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1701984547", "1590329240"], "剩余条目应保持原顺序");

    let degraded = &results.podcasts[0];
    assert!(
        degraded.image.ends_with("100x100bb.jpg"),
        "600px 缺失时应回退到 100px: {}",
        degraded.image
    );
}

#[tokio::test]
async fn test_lookup_normalizes_as_podcast() {
    let transport = ReplayTransport::new(vec![load_test_data("lookup_response.json")]);
    let client = client_with(transport.clone());

    let ids = vec!["1701984547".to_string(), "1590329240".to_string()];
    let results = client.lookup(&ids).await.expect("按 ID 查询应当成功");

    assert_eq!(results.len(), 2);
    assert!(
        results.podcasts.iter().all(|p| p.is_podcast),
        "按 ID 查询的结果应按播客本体实体规范化"
    );

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert!(
        requests[0].contains("id=1701984547,1590329240"),
        "请求应携带逗号连接的 ID: {}",
        requests[0]
    );
    assert!(
        requests[0].contains("media=podcast"),
        "请求应携带固定的媒体参数: {}",
        requests[0]
    );
}

#[tokio::test]
async fn test_trending_chain_end_to_end() {
    let transport = ReplayTransport::new(vec![
        load_test_data("trending_response.json"),
        load_test_data("lookup_response.json"),
    ]);
    let client = client_with(transport.clone());

    let results = client
        .trending_items(Country::UnitedStates, 2)
        .await
        .expect("榜单全流程应当成功");

    assert_eq!(results.len(), 2);
    assert_eq!(results.podcasts[0].id, "1701984547");
    assert_eq!(results.podcasts[1].id, "1590329240");
    assert_eq!(results.podcasts[1].author, "夜航电台");

    let requests = transport.requests();
    assert_eq!(requests.len(), 2, "应先取榜单再查详情");
    assert!(
        requests[0].ends_with("/us/podcasts/top/2/podcasts.json"),
        "榜单请求路径不符: {}",
        requests[0]
    );
    assert!(
        requests[1].contains("id=1701984547,1590329240"),
        "详情请求应携带榜单顺序的 ID: {}",
        requests[1]
    );
}

#[tokio::test]
async fn test_by_category_uses_fixed_term() {
    let transport = ReplayTransport::new(vec![load_test_data("search_response.json")]);
    let client = client_with(transport.clone());

    let results = client
        .by_category(
            podcast_search_rs::model::genre::Genre::Technology,
            EntityKind::Podcast,
            3,
        )
        .await
        .expect("按类目搜索应当成功");

    assert_eq!(results.len(), 3);
    assert!(
        results.podcasts.iter().all(|p| p.is_podcast),
        "按播客本体实体请求时标志应为真"
    );

    let requests = transport.requests();
    assert!(
        requests[0].contains("term=podcast") && requests[0].contains("genreId=1318"),
        "按类目搜索应使用固定关键词与类目 ID: {}",
        requests[0]
    );
    assert!(
        requests[0].ends_with("limit=3"),
        "limit 应位于查询末尾: {}",
        requests[0]
    );
}
