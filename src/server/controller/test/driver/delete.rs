use super::*;

/// Tests deleting a driver over HTTP.
///
/// Expected: 200 with conductor_eliminado, then 404 on lookup
#[tokio::test]
async fn deletes_driver() {
    let (_test, app) = setup().await;

    let created = register(&app, "Ana", "Gomez", "ABC123").await;

    let (status, body) = send(&app, Method::DELETE, "/api/conductores/ABC123", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mensaje"], "Conductor eliminado exitosamente");
    assert_eq!(body["conductor_eliminado"], created);

    let (status, _) = send(&app, Method::GET, "/api/conductores/ABC123", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Tests deleting an unknown license.
///
/// Expected: 404
#[tokio::test]
async fn returns_404_for_unknown_license() {
    let (_test, app) = setup().await;

    let (status, _) = send(&app, Method::DELETE, "/api/conductores/NOPE999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
