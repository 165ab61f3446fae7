#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use vidra_core::connector::{
    SearchProvider, StreamUrlProvider, SuggestionsProvider, TrendingProvider, VidraConnector,
};
use vidra_core::VidraError;
use vidra_types::{Platform, VideoRecord};

/// Simple in-memory connector used by integration tests. Each capability is
/// scripted independently; `None` means the capability is not exposed at all.
pub struct ScriptedConnector {
    pub name: &'static str,
    pub platform: Platform,
    pub trending: Option<Script<Vec<VideoRecord>>>,
    pub search: Option<Script<Vec<VideoRecord>>>,
    pub suggestions: Option<Script<Vec<String>>>,
    pub stream_url: Option<Script<Option<String>>>,
    pub calls: Arc<AtomicUsize>,
}

/// Scripted outcome for one capability.
#[derive(Clone)]
pub enum Script<T> {
    Ok(T),
    Fail(&'static str),
}

impl<T: Clone> Script<T> {
    fn run(&self, connector: &'static str) -> Result<T, VidraError> {
        match self {
            Self::Ok(v) => Ok(v.clone()),
            Self::Fail(msg) => Err(VidraError::connector(connector, *msg)),
        }
    }
}

impl ScriptedConnector {
    pub fn new(platform: Platform) -> Self {
        Self {
            name: "scripted",
            platform,
            trending: None,
            search: None,
            suggestions: None,
            stream_url: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl VidraConnector for ScriptedConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn platform(&self) -> Platform {
        self.platform
    }

    fn as_trending_provider(&self) -> Option<&dyn TrendingProvider> {
        self.trending.as_ref().map(|_| self as &dyn TrendingProvider)
    }

    fn as_search_provider(&self) -> Option<&dyn SearchProvider> {
        self.search.as_ref().map(|_| self as &dyn SearchProvider)
    }

    fn as_suggestions_provider(&self) -> Option<&dyn SuggestionsProvider> {
        self.suggestions
            .as_ref()
            .map(|_| self as &dyn SuggestionsProvider)
    }

    fn as_stream_url_provider(&self) -> Option<&dyn StreamUrlProvider> {
        self.stream_url
            .as_ref()
            .map(|_| self as &dyn StreamUrlProvider)
    }
}

#[async_trait]
impl TrendingProvider for ScriptedConnector {
    async fn trending(&self, _region: &str) -> Result<Vec<VideoRecord>, VidraError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.trending.as_ref().unwrap().run(self.name)
    }
}

#[async_trait]
impl SearchProvider for ScriptedConnector {
    async fn search(&self, _query: &str) -> Result<Vec<VideoRecord>, VidraError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.search.as_ref().unwrap().run(self.name)
    }
}

#[async_trait]
impl SuggestionsProvider for ScriptedConnector {
    async fn suggestions(&self, _query: &str) -> Result<Vec<String>, VidraError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.suggestions.as_ref().unwrap().run(self.name)
    }
}

#[async_trait]
impl StreamUrlProvider for ScriptedConnector {
    async fn stream_url(&self, _id: &str) -> Result<Option<String>, VidraError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.stream_url.as_ref().unwrap().run(self.name)
    }
}

/// A minimal record for assertions.
pub fn record(platform: Platform, id: &str, title: &str) -> VideoRecord {
    let mut rec = VideoRecord::empty(platform);
    rec.id = id.to_string();
    rec.title = title.to_string();
    rec.uploader = "helper".to_string();
    rec
}
