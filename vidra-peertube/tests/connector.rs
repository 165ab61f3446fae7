use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use url::Url;
use vidra_core::connector::{SearchProvider, TrendingProvider};
use vidra_core::{Transport, VidraError};
use vidra_peertube::PeerTubeConnector;

struct Recording {
    body: &'static str,
    urls: Mutex<Vec<Url>>,
}

#[async_trait]
impl Transport for Recording {
    async fn get(&self, url: &Url) -> Result<String, VidraError> {
        self.urls.lock().unwrap().push(url.clone());
        Ok(self.body.to_string())
    }
}

const PAGE: &str = r#"{"total":1,"data":[
    {"uuid":"u-1","name":"Fed","account":{"displayName":"Alice","host":"tube.example"}}
]}"#;

#[tokio::test]
async fn trending_is_newest_sfw_capped_at_ten() {
    let t = Arc::new(Recording {
        body: PAGE,
        urls: Mutex::new(Vec::new()),
    });
    let c = PeerTubeConnector::new(t.clone());
    let recs = c.trending("US").await.unwrap();
    assert_eq!(recs.len(), 1);

    let url = t.urls.lock().unwrap()[0].clone();
    let q = url.query().unwrap();
    assert!(q.contains("count=10"));
    assert!(q.contains("sort=-publishedAt"));
    assert!(q.contains("nsfw=false"));
    assert!(!q.contains("search="));
}

#[tokio::test]
async fn search_sorts_by_relevance_capped_at_twenty() {
    let t = Arc::new(Recording {
        body: PAGE,
        urls: Mutex::new(Vec::new()),
    });
    let c = PeerTubeConnector::new(t.clone());
    c.search("solar punk").await.unwrap();

    let url = t.urls.lock().unwrap()[0].clone();
    let q = url.query().unwrap();
    assert!(q.contains("count=20"));
    assert!(q.contains("sort=-match"));
    assert!(q.contains("search=solar+punk"));
}
