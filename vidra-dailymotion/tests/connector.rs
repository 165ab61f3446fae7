use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use url::Url;
use vidra_core::connector::{SearchProvider, TrendingProvider};
use vidra_core::{Transport, VidraError};
use vidra_dailymotion::DailymotionConnector;

/// Records every requested URL and answers with a fixed page.
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

const PAGE: &str = r#"{"list":[
    {"id":"x1","title":"One","views_total":1500000,"duration":90,
     "owner.screenname":"Chan","thumbnail_480_url":"https://t/1.jpg"},
    {"id":"x2","title":"Two"}
]}"#;

#[tokio::test]
async fn trending_is_region_scoped_and_capped() {
    let t = Arc::new(Recording {
        body: PAGE,
        urls: Mutex::new(Vec::new()),
    });
    let c = DailymotionConnector::new(t.clone());
    let recs = c.trending("FR").await.unwrap();

    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].views, "1.5M");

    let url = t.urls.lock().unwrap()[0].clone();
    let q = url.query().unwrap();
    assert!(q.contains("sort=trending"));
    assert!(q.contains("country=fr"));
    assert!(q.contains("limit=20"));
    assert!(q.contains("flags=no_live,no_premium"));
    assert!(q.contains("fields="));
}

#[tokio::test]
async fn search_uses_same_fields_with_query() {
    let t = Arc::new(Recording {
        body: PAGE,
        urls: Mutex::new(Vec::new()),
    });
    let c = DailymotionConnector::new(t.clone());
    c.search("cats & dogs").await.unwrap();

    let url = t.urls.lock().unwrap()[0].clone();
    let q = url.query().unwrap();
    assert!(q.contains("search=cats+%26+dogs"));
    assert!(q.contains("limit=20"));
    assert!(!q.contains("sort=trending"));
}
