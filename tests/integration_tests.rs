//! Integration tests for the public API and the fragment server
//!
//! Drives the engine through the crate root and the axum router through
//! `tower::ServiceExt::oneshot`.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use pagelinks::cli::{router, ServerConfig};
use pagelinks::{load_config_from_str, PageItem, PaginationEngine};
use pretty_assertions::assert_eq;
use tower::ServiceExt;

async fn get(uri: &str) -> (StatusCode, String) {
    let app = router(ServerConfig::default());
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

// ============================================================================
// Engine Scenarios
// ============================================================================

#[test]
fn test_empty_result_set() {
    let engine = PaginationEngine::new(0, 16, 1, "/artworks").unwrap();
    assert!(!engine.has_pages());
    assert_eq!(engine.total_pages(), 0);
    assert_eq!(engine.render(), "");
}

#[test]
fn test_requested_page_beyond_end() {
    let engine = PaginationEngine::new(17, 16, 5, "/artworks").unwrap();
    assert_eq!(engine.total_pages(), 2);
    assert_eq!(engine.current_page(), 2);
}

#[test]
fn test_full_fragment_for_small_result_set() {
    let html = PaginationEngine::new(40, 16, 2, "/postcards?series=ships")
        .unwrap()
        .with_partial_target("#postcards")
        .render();

    let link = |page: u64| {
        format!(
            concat!(
                r#"<a class="page-link" href="/postcards?page={p}&amp;series=ships""#,
                r##" hx-get="/postcards?page={p}&amp;series=ships" hx-target="#postcards""##,
                r#" hx-push-url="/postcards?page={p}&amp;series=ships""#
            ),
            p = page
        )
    };

    let expected = format!(
        concat!(
            r#"<nav class="pagination" aria-label="Pagination"><ul class="pagination-list">"#,
            r#"<li>{prev} rel="prev">«</a></li>"#,
            r#"<li>{one}>1</a></li>"#,
            r#"<li><span class="page-link is-current" aria-current="page">2</span></li>"#,
            r#"<li>{three}>3</a></li>"#,
            r#"<li>{next} rel="next">»</a></li>"#,
            "</ul></nav>"
        ),
        prev = link(1),
        one = link(1),
        three = link(3),
        next = link(3),
    );
    assert_eq!(html, expected);
}

#[test]
fn test_partial_url_and_filters_preserved() {
    let engine = PaginationEngine::new(100, 16, 3, "/artworks?q=rubens&page=2")
        .unwrap()
        .with_partial_url("/fragments/artworks?q=rubens&view=grid")
        .with_partial_target("results");

    let items = engine.items();
    let page5 = items.iter().find(|item| item.page() == Some(5) && item.is_numbered());
    match page5 {
        Some(PageItem::Link {
            href, partial_href, ..
        }) => {
            assert_eq!(href, "/artworks?page=5&q=rubens");
            assert_eq!(partial_href, "/fragments/artworks?page=5&q=rubens&view=grid");
        }
        other => panic!("Expected link for page 5, got {other:?}"),
    }
}

#[test]
fn test_config_drives_rendering() {
    let config = load_config_from_str(
        r"
page_param: p
markup:
  previous_label: Previous
  next_label: Next
  push_url: false
",
    )
    .unwrap();

    let engine = PaginationEngine::new(100, 10, 4, "/guestbook")
        .unwrap()
        .with_page_param(&config.page_param);
    let html = engine.render_with(&pagelinks::HtmlRenderer::new(config.markup));

    assert!(html.contains(r#"href="/guestbook?p=3""#));
    assert!(html.contains(">Previous</a>"));
    assert!(html.contains(">Next</a>"));
    assert!(!html.contains("hx-push-url"));
}

// ============================================================================
// Server Tests
// ============================================================================

#[tokio::test]
async fn test_health() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("ok"));
}

#[tokio::test]
async fn test_fragment_endpoint() {
    let (status, body) = get(
        "/fragment?total=500&per_page=10&page=25&base_url=%2Fartworks%3Fq%3Drubens&target=results",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"aria-current="page">25</span>"#));
    assert!(body.contains(r#"href="/artworks?page=22&amp;q=rubens""#));
    assert!(body.contains(r##"hx-target="#results""##));
    assert_eq!(body.matches("page-ellipsis").count(), 2);
}

#[tokio::test]
async fn test_fragment_single_page_is_empty() {
    let (status, body) = get("/fragment?total=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "");
}

#[tokio::test]
async fn test_window_endpoint() {
    let (status, body) = get("/window?total=500&per_page=10&page=2").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["total_pages"], 50);
    assert_eq!(
        json["data"]["window"]["first"],
        serde_json::json!([1, 2, 3, 4, 5, 6, 7, 8])
    );
    assert_eq!(json["data"]["window"]["last"], serde_json::json!([49, 50]));
}

#[tokio::test]
async fn test_invalid_per_page_is_bad_request() {
    let (status, body) = get("/fragment?total=100&per_page=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("greater than zero"));
}

#[tokio::test]
async fn test_unparsable_page_falls_back_to_first_page() {
    for page in ["abc", "", "2.5"] {
        let (status, body) = get(&format!("/window?total=500&per_page=10&page={page}")).await;
        assert_eq!(status, StatusCode::OK, "page={page}");

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["data"]["current_page"], 1, "page={page}");
    }

    let (status, body) = get("/fragment?total=500&per_page=10&page=abc").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"aria-current="page">1</span>"#));
}

#[tokio::test]
async fn test_overflowing_page_clamps_to_last_page() {
    let (status, body) = get("/window?total=500&per_page=10&page=99999999999999999999").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["data"]["current_page"], 50);
}

#[tokio::test]
async fn test_non_numeric_per_page_is_json_bad_request() {
    let (status, body) = get("/fragment?total=100&per_page=many").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["success"], false);
    assert!(json["error"].is_string());
}
