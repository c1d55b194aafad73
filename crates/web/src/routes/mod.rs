use axum::Router;
use storage::SharedStore;

use crate::error::WebError;
use crate::features::{fighters, fights, rankings};

pub fn router(store: SharedStore) -> Router {
    let api = Router::new()
        .merge(fighters::routes::routes())
        .merge(fights::routes::routes())
        .merge(rankings::routes::routes());

    Router::new()
        .nest("/api", api)
        .fallback(not_found)
        .with_state(store)
}

async fn not_found() -> WebError {
    WebError::NotFound
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use axum::{
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode},
    };
    use serde_json::{Value, json};
    use storage::{
        InMemoryStore,
        models::{Division, Fight, FightOutcome, Fighter, FighterStats, RankingEntry},
    };
    use tower::ServiceExt;

    use super::*;

    fn fighter(id: i32, name: &str, weight_class: &str) -> Fighter {
        Fighter {
            id,
            name: name.to_string(),
            weight_class: Some(weight_class.to_string()),
            stats: FighterStats {
                wins: Some(10),
                losses: Some(2),
                ranking: Some(id),
                slpm: Some(5.1),
                ..Default::default()
            },
        }
    }

    fn seeded() -> Arc<InMemoryStore> {
        let store = Arc::new(InMemoryStore::new());
        store.insert(fighter(1, "A", "185"));
        store.insert(fighter(2, "B", "205"));
        store.insert(fighter(3, "C", "185"));
        store
    }

    async fn send(store: &Arc<InMemoryStore>, method: Method, uri: &str) -> (StatusCode, Value) {
        let app = router(store.clone());
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn select(store: &Arc<InMemoryStore>, weight_class: &str) -> (StatusCode, Value) {
        send(
            store,
            Method::POST,
            &format!("/api/select_fighters/{}", weight_class),
        )
        .await
    }

    fn names(body: &Value) -> HashSet<String> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["name"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_select_fighters_by_weight_class() {
        let store = seeded();

        let (status, body) = select(&store, "185").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            names(&body),
            HashSet::from(["A".to_string(), "C".to_string()])
        );
        for entry in body.as_array().unwrap() {
            assert_eq!(entry.as_object().unwrap().len(), 1);
        }
    }

    #[tokio::test]
    async fn test_select_fighters_without_matches_is_empty() {
        let store = seeded();

        let (status, body) = select(&store, "999").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_select_fighters_is_exact_and_case_sensitive() {
        let store = seeded();
        store.insert(fighter(4, "D", "Light Heavyweight"));

        let (_, body) = select(&store, "light%20heavyweight").await;
        assert_eq!(body, json!([]));

        let (_, body) = select(&store, "Light%20Heavyweight").await;
        assert_eq!(body, json!([{ "name": "D" }]));

        let (_, body) = select(&store, "%20185").await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_select_fighters_includes_incomplete_records() {
        let store = seeded();
        store.insert(Fighter {
            id: 5,
            name: "Unranked".to_string(),
            weight_class: Some("185".to_string()),
            stats: FighterStats::default(),
        });

        let (status, body) = select(&store, "185").await;

        assert_eq!(status, StatusCode::OK);
        assert!(names(&body).contains("Unranked"));
        assert_eq!(names(&body).len(), 3);
    }

    #[tokio::test]
    async fn test_select_fighters_is_repeatable() {
        let store = seeded();

        let (_, first) = select(&store, "185").await;
        let (_, second) = select(&store, "185").await;

        assert_eq!(names(&first), names(&second));
    }

    #[tokio::test]
    async fn test_database_failure_then_recovery() {
        let store = seeded();

        store.set_available(false);
        let (status, body) = select(&store, "185").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "An internal error occurred" }));

        store.set_available(true);
        let (status, body) = select(&store, "185").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body).len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_weight_class_is_rejected() {
        let store = seeded();

        let (status, body) = select(&store, &"9".repeat(51)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Validation failed");

        let (status, _) = select(&store, "185%0A").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_fighters_returns_full_records() {
        let store = seeded();

        let (status, body) = send(&store, Method::GET, "/api/fighters/205").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["name"], "B");
        assert_eq!(body[0]["weight_class"], "205");
        assert_eq!(body[0]["wins"], 10);
        assert_eq!(body[0]["slpm"], 5.1);
        assert_eq!(body[0]["reach"], Value::Null);
    }

    #[tokio::test]
    async fn test_list_fights_filters_by_query() {
        let store = seeded();
        store.insert(Fight {
            id: 1,
            fighter1: "A".to_string(),
            fighter2: "C".to_string(),
            fight_year: 2024,
            fighter1_stats: FighterStats {
                wins: Some(9),
                ..Default::default()
            },
            fighter2_stats: FighterStats::default(),
            weight_class: Some("185".to_string()),
            round_finished: Some(3),
            fight_rounds: Some(3),
            outcome: Some(FightOutcome::Fighter1Win),
        });

        let uri = "/api/fights?fighter1=A&fight_year=2024";
        let (status, body) = send(&store, Method::GET, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["outcome"], 1);
        assert_eq!(body[0]["fighter1_stats"]["wins"], 9);

        let (_, body) = send(&store, Method::GET, "/api/fights?fighter1=C").await;
        assert_eq!(body, json!([]));

        let (status, body) = send(&store, Method::GET, "/api/fights?fight_year=last").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_rankings() {
        let store = seeded();
        store.insert(RankingEntry::new(Division::Middleweight, 2, "C"));
        store.insert(RankingEntry::new(Division::Middleweight, 1, "A"));
        store.insert(RankingEntry::new(Division::LightHeavyweight, 1, "B"));

        let (status, body) = send(&store, Method::GET, "/api/rankings/middleweight").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["fighter_name"], "A");
        assert_eq!(body[1]["fighter_name"], "C");

        let (_, body) = send(&store, Method::GET, "/api/rankings/lightheavyweight").await;
        assert_eq!(body[0]["fighter_name"], "B");

        let (status, _) = send(&store, Method::GET, "/api/rankings/strawweight").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(&store, Method::GET, "/api/rankings").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["rank"], 1);
        assert_eq!(body[0]["middleweight"], "A");
        assert_eq!(body[0]["light_heavyweight"], "B");
        assert_eq!(body[1]["middleweight"], "C");
        assert_eq!(body[1]["flyweight"], Value::Null);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let store = seeded();

        let (status, body) = send(&store, Method::GET, "/api/champions").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Resource not found" }));
    }
}
