use chrono::{Duration, Utc};
use link_shortener::domain::entities::{NewClick, NewLink};
use link_shortener::domain::repositories::{LinkRepository, StatsRepository};
use link_shortener::error::AppError;
use link_shortener::infrastructure::persistence::{
    MemoryLinkRepository, MemoryStatsRepository, MemoryStore,
};
use std::sync::Arc;

fn repositories() -> (MemoryLinkRepository, MemoryStatsRepository) {
    let store = Arc::new(MemoryStore::new());
    (
        MemoryLinkRepository::new(store.clone()),
        MemoryStatsRepository::new(store),
    )
}

fn new_link(code: &str, minutes: i64) -> NewLink {
    let now = Utc::now();
    NewLink {
        code: code.to_string(),
        original_url: "https://example.com/".to_string(),
        created_at: now,
        expires_at: now + Duration::minutes(minutes),
    }
}

#[tokio::test]
async fn test_create_then_stats() {
    let (links, stats) = repositories();

    let created = links.create(new_link("abc123", 30)).await.unwrap();
    assert_eq!(created.clicks, 0);

    let detailed = stats.get_stats_by_code("abc123").await.unwrap().unwrap();
    assert_eq!(detailed.link, created);
    assert!(detailed.items.is_empty());
    assert_eq!(links.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_duplicate_create_keeps_first() {
    let (links, stats) = repositories();
    links.create(new_link("dup", 30)).await.unwrap();

    let mut second = new_link("dup", 60);
    second.original_url = "https://other.example/".to_string();
    let result = links.create(second).await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
    let kept = stats.get_stats_by_code("dup").await.unwrap().unwrap();
    assert_eq!(kept.link.original_url, "https://example.com/");
}

#[tokio::test]
async fn test_resolve_updates_counter_and_history_together() {
    let (links, stats) = repositories();
    links.create(new_link("go", 30)).await.unwrap();

    let at = Utc::now();
    links
        .resolve("go", NewClick::new(Some("https://news.example")), at)
        .await
        .unwrap();
    let link = links
        .resolve("go", NewClick::new(None), at)
        .await
        .unwrap();
    assert_eq!(link.clicks, 2);

    let detailed = stats.get_stats_by_code("go").await.unwrap().unwrap();
    assert_eq!(detailed.link.clicks, 2);
    assert_eq!(detailed.items.len(), 2);
    assert_eq!(detailed.items[0].referrer, "https://news.example");
    assert_eq!(detailed.items[1].referrer, "unknown");
    assert_eq!(detailed.items[0].timestamp, at);
}

#[tokio::test]
async fn test_resolve_after_expiry_leaves_record_untouched() {
    let (links, stats) = repositories();
    let created = links.create(new_link("brief", 1)).await.unwrap();

    let later = created.expires_at + Duration::seconds(1);
    let result = links.resolve("brief", NewClick::new(None), later).await;

    assert!(matches!(result, Err(AppError::Expired { .. })));
    let detailed = stats.get_stats_by_code("brief").await.unwrap().unwrap();
    assert_eq!(detailed.link.clicks, 0);
    assert!(detailed.items.is_empty());
}

#[tokio::test]
async fn test_stats_after_expiry_keep_recorded_clicks() {
    let (links, stats) = repositories();
    let created = links.create(new_link("lapsed", 10)).await.unwrap();

    let live = created.created_at + Duration::minutes(1);
    links
        .resolve("lapsed", NewClick::new(Some("https://a.example")), live)
        .await
        .unwrap();
    links
        .resolve("lapsed", NewClick::new(None), live + Duration::minutes(1))
        .await
        .unwrap();
    links
        .resolve("lapsed", NewClick::new(None), created.expires_at)
        .await
        .unwrap();

    let after = created.expires_at + Duration::seconds(1);
    let result = links.resolve("lapsed", NewClick::new(None), after).await;
    assert!(matches!(result, Err(AppError::Expired { .. })));

    let detailed = stats.get_stats_by_code("lapsed").await.unwrap().unwrap();
    assert_eq!(detailed.link.clicks, 3);
    assert_eq!(detailed.items.len(), 3);
    assert_eq!(detailed.items[0].referrer, "https://a.example");
    assert_eq!(detailed.items[2].timestamp, created.expires_at);
}

#[tokio::test]
async fn test_resolve_exactly_at_expiry_succeeds() {
    let (links, _) = repositories();
    let created = links.create(new_link("edge", 5)).await.unwrap();

    let result = links
        .resolve("edge", NewClick::new(None), created.expires_at)
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_resolve_missing_is_not_found() {
    let (links, _) = repositories();

    let result = links.resolve("ghost", NewClick::new(None), Utc::now()).await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[tokio::test]
async fn test_stats_missing_is_none() {
    let (_, stats) = repositories();

    assert!(stats.get_stats_by_code("ghost").await.unwrap().is_none());
}
