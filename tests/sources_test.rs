use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tabiplan::services::cache::{load_locations, LocationCache};
use tabiplan::services::debounce::Debouncer;
use tabiplan::services::sources::{
    fetch_all_locations, CancelToken, LocationDataSource, LocationPage, Pagination, SourceError,
    MAX_LOCATION_PAGES,
};
use tabiplan::{Airport, Location};

fn init_logging() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .is_test(true)
            .init();
    });
}

fn poi(id: &str) -> Location {
    Location {
        id: id.to_string(),
        name: format!("POI {}", id),
        category: "culture".to_string(),
        subtype: None,
        city: "Kyoto".to_string(),
        prefecture: "Kansai".to_string(),
        coordinates: (35.0, 135.0),
        rating: 4.0,
        review_count: 5,
        budget: None,
        duration: None,
        price_level: None,
        wheelchair_accessible: false,
        vegetarian_friendly: false,
        permanently_closed: false,
        open_now: None,
        photos: Vec::new(),
    }
}

/// A well-behaved source with a fixed number of pages.
struct PagedSource {
    pages: usize,
    per_page: usize,
}

impl LocationDataSource for PagedSource {
    async fn fetch_page(&self, page: u32) -> Result<LocationPage, SourceError> {
        let page = page as usize;
        let data = (0..self.per_page)
            .map(|i| poi(&format!("p{}-{}", page, i)))
            .collect();
        Ok(LocationPage {
            data,
            pagination: Pagination {
                has_next: page < self.pages,
            },
        })
    }
}

/// A misbehaving source that always claims another page exists.
struct EndlessSource {
    calls: Arc<AtomicUsize>,
}

impl LocationDataSource for EndlessSource {
    async fn fetch_page(&self, page: u32) -> Result<LocationPage, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(LocationPage {
            data: vec![poi(&format!("endless-{}", page))],
            pagination: Pagination { has_next: true },
        })
    }
}

struct FailingSource;

impl LocationDataSource for FailingSource {
    async fn fetch_page(&self, _page: u32) -> Result<LocationPage, SourceError> {
        Err(SourceError::Status(503))
    }
}

#[tokio::test]
async fn aggregates_every_page() {
    let source = PagedSource {
        pages: 3,
        per_page: 4,
    };
    let locations = fetch_all_locations(&source).await.unwrap();
    assert_eq!(locations.len(), 12);
    assert_eq!(locations[0].id, "p1-0");
    assert_eq!(locations[11].id, "p3-3");
}

#[tokio::test]
async fn endless_source_is_capped_not_looped() {
    init_logging();
    let calls = Arc::new(AtomicUsize::new(0));
    let source = EndlessSource {
        calls: calls.clone(),
    };

    let locations = fetch_all_locations(&source).await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), MAX_LOCATION_PAGES as usize);
    assert_eq!(locations.len(), MAX_LOCATION_PAGES as usize);
}

#[tokio::test]
async fn fetch_errors_propagate_when_nothing_is_cached() {
    let mut cache = LocationCache::default();
    let result = load_locations(&mut cache, "explore", &FailingSource).await;
    assert!(matches!(result, Err(SourceError::Status(503))));
}

#[tokio::test]
async fn failed_refresh_keeps_the_stale_list() {
    init_logging();
    // A zero-width staleness window: everything cached is already stale.
    let mut cache = LocationCache::new(chrono::Duration::zero());
    cache.put("explore", vec![poi("cached-1"), poi("cached-2")]);
    tokio::time::sleep(Duration::from_millis(5)).await;
    assert!(cache.is_stale("explore"));

    let locations = load_locations(&mut cache, "explore", &FailingSource)
        .await
        .unwrap();
    assert_eq!(locations.len(), 2);
    assert_eq!(locations[0].id, "cached-1");
}

#[tokio::test]
async fn fresh_cache_short_circuits_the_fetch() {
    let mut cache = LocationCache::default();
    cache.put("explore", vec![poi("cached-only")]);

    // The failing source is never consulted while the entry is fresh.
    let locations = load_locations(&mut cache, "explore", &FailingSource)
        .await
        .unwrap();
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].id, "cached-only");
}

#[tokio::test]
async fn successful_fetch_repopulates_the_cache() {
    let mut cache = LocationCache::new(chrono::Duration::minutes(10));
    let source = PagedSource {
        pages: 1,
        per_page: 2,
    };

    let fetched = load_locations(&mut cache, "explore", &source).await.unwrap();
    assert_eq!(fetched.len(), 2);
    assert!(!cache.is_stale("explore"));
    assert_eq!(cache.get("explore").unwrap().len(), 2);
}

#[test]
fn cancel_token_discards_late_results() {
    let token = CancelToken::new();
    let for_fetch = token.clone();
    assert!(!for_fetch.is_cancelled());

    // The owning view is torn down before the response lands.
    token.cancel();

    // The fetch callback checks the token and drops its payload.
    assert!(for_fetch.is_cancelled());
}

#[test]
fn airport_region_is_normalized_for_scoring() {
    let airport = Airport {
        id: "kix".to_string(),
        name: "Kansai International Airport".to_string(),
        short_name: "Kansai Intl".to_string(),
        city: "Osaka".to_string(),
        iata_code: "KIX".to_string(),
        region: "  KANSAI ".to_string(),
        coordinates: (34.4347, 135.2441),
    };

    let entry = airport.entry_point();
    assert_eq!(entry.region_id, "kansai");
    assert_eq!(entry.iata_code, "KIX");
}

#[tokio::test]
async fn debouncer_fires_only_the_last_call() {
    let fired = Arc::new(AtomicUsize::new(0));
    let mut debouncer = Debouncer::new(Duration::from_millis(30));

    for _ in 0..3 {
        let fired = fired.clone();
        debouncer.call(move || {
            fired.fetch_add(1, Ordering::SeqCst);
        });
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    tokio::time::sleep(Duration::from_millis(120)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn cancelled_debounce_never_fires() {
    let fired = Arc::new(AtomicUsize::new(0));
    let mut debouncer = Debouncer::new(Duration::from_millis(20));

    {
        let fired = fired.clone();
        debouncer.call(move || {
            fired.fetch_add(1, Ordering::SeqCst);
        });
    }
    debouncer.cancel();

    tokio::time::sleep(Duration::from_millis(80)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}
