use super::*;
use chrono::{Days, Utc};

/// Tests listing drivers registered in a date range that includes today.
///
/// Expected: 200 with desde, hasta and the registered driver
#[tokio::test]
async fn lists_drivers_in_range() {
    let (_test, app) = setup().await;

    register(&app, "Ana", "Gomez", "ABC123").await;

    let today = Utc::now().date_naive();
    let from = today.checked_sub_days(Days::new(1)).unwrap();
    let uri = format!("/api/conductores/registrados?desde={}&hasta={}", from, today);

    let (status, body) = send(&app, Method::GET, &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["desde"], from.to_string());
    assert_eq!(body["hasta"], today.to_string());
    assert_eq!(body["cantidad"], 1);
}

/// Tests an inverted range.
///
/// Expected: 400 Rango de fechas inválido
#[tokio::test]
async fn rejects_inverted_range() {
    let (_test, app) = setup().await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/conductores/registrados?desde=2024-02-01&hasta=2024-01-01",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Rango de fechas inválido");
}
