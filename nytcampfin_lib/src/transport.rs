//! Caching decorator for any [`Transport`].

use async_trait::async_trait;
use nytcampfin_api::{Error, HttpResponse, Transport};
use url::Url;

use crate::cache::MemoryCache;

/// Wraps an inner transport with an in-memory TTL cache.
///
/// Keyed by the full request URL. Only 200 responses are stored, so errors
/// are always re-fetched. Hits never reach the inner transport.
pub struct CachedTransport<T> {
    inner: T,
    cache: MemoryCache,
}

impl<T: Transport> CachedTransport<T> {
    pub fn new(inner: T, cache: MemoryCache) -> Self {
        Self { inner, cache }
    }

    pub fn cache(&self) -> &MemoryCache {
        &self.cache
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }
}

#[async_trait]
impl<T: Transport> Transport for CachedTransport<T> {
    async fn get(&self, url: &Url) -> Result<HttpResponse, Error> {
        let cache_key = url.as_str();

        if let Some(cached) = self.cache.get(cache_key) {
            match serde_json::from_str::<HttpResponse>(&cached) {
                Ok(resp) => {
                    tracing::debug!("cache hit: {}", url.path());
                    return Ok(resp);
                }
                Err(e) => tracing::warn!("Discarding unreadable cache entry: {}", e),
            }
        }

        tracing::debug!("cache miss: {}", url.path());
        let resp = self.inner.get(url).await?;
        if resp.status == 200 {
            if let Ok(json) = serde_json::to_string(&resp) {
                self.cache.set(cache_key.to_string(), json);
            }
        }
        Ok(resp)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;

    struct Counting {
        status: u16,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Transport for Counting {
        async fn get(&self, _url: &Url) -> Result<HttpResponse, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(HttpResponse::new(self.status, r#"{"results":[]}"#))
        }
    }

    fn cached(status: u16) -> CachedTransport<Counting> {
        CachedTransport::new(
            Counting {
                status,
                calls: AtomicUsize::new(0),
            },
            MemoryCache::new(Duration::from_secs(60)),
        )
    }

    #[tokio::test]
    async fn second_get_is_served_from_cache() {
        let transport = cached(200);
        let url = Url::parse("http://h/2012/filings.json?api-key=k").unwrap();

        let first = transport.get(&url).await.unwrap();
        let second = transport.get(&url).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(transport.inner().calls.load(Ordering::SeqCst), 1);
        assert_eq!(transport.cache().len(), 1);
    }

    #[tokio::test]
    async fn different_queries_are_different_entries() {
        let transport = cached(200);
        let page1 = Url::parse("http://h/2012/filings.json?offset=0").unwrap();
        let page2 = Url::parse("http://h/2012/filings.json?offset=20").unwrap();

        transport.get(&page1).await.unwrap();
        transport.get(&page2).await.unwrap();

        assert_eq!(transport.inner().calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let transport = cached(404);
        let url = Url::parse("http://h/2012/candidates/ZZ00000000.json").unwrap();

        transport.get(&url).await.unwrap();
        transport.get(&url).await.unwrap();

        assert_eq!(transport.inner().calls.load(Ordering::SeqCst), 2);
        assert!(transport.cache().is_empty());
    }

    #[tokio::test]
    async fn expired_pages_are_swept_on_next_miss() {
        let transport = CachedTransport::new(
            Counting {
                status: 200,
                calls: AtomicUsize::new(0),
            },
            MemoryCache::new(Duration::from_millis(1)),
        );
        for offset in (0..2000).step_by(20) {
            let url = Url::parse(&format!("http://h/2012/candidates/new.json?offset={}", offset))
                .unwrap();
            transport.get(&url).await.unwrap();
        }
        tokio::time::sleep(Duration::from_millis(20)).await;

        let url = Url::parse("http://h/2012/filings.json?offset=0").unwrap();
        transport.get(&url).await.unwrap();

        assert_eq!(transport.cache().len(), 1);
    }

    #[tokio::test]
    async fn corrupt_entry_falls_through_to_inner() {
        let transport = cached(200);
        let url = Url::parse("http://h/2012/filings.json").unwrap();
        transport
            .cache()
            .set(url.as_str().to_string(), "not json".to_string());

        let resp = transport.get(&url).await.unwrap();

        assert_eq!(resp.status, 200);
        assert_eq!(transport.inner().calls.load(Ordering::SeqCst), 1);
    }
}
