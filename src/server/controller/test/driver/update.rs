use super::*;

/// Tests a partial update over HTTP.
///
/// Verifies that only the phone changes and both snapshots are returned.
///
/// Expected: 200 with conductor_anterior and conductor_actualizado
#[tokio::test]
async fn updates_phone_only() {
    let (_test, app) = setup().await;

    let created = register(&app, "Ana", "Gomez", "ABC123").await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/conductores/abc123",
        Some(json!({ "telefono": "5559999", "licencia": "OTHER" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mensaje"], "Conductor actualizado exitosamente");
    assert_eq!(body["conductor_anterior"], created);
    assert_eq!(body["conductor_actualizado"]["telefono"], "5559999");
    assert_eq!(body["conductor_actualizado"]["nombre"], "Ana");
    assert_eq!(body["conductor_actualizado"]["licencia"], "ABC123");
}

/// Tests an update body without usable fields.
///
/// Expected: 400 Datos insuficientes
#[tokio::test]
async fn rejects_empty_update() {
    let (_test, app) = setup().await;

    register(&app, "Ana", "Gomez", "ABC123").await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/conductores/ABC123",
        Some(json!({ "nombre": "  " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Datos insuficientes");
}

/// Tests updating an unknown license.
///
/// Expected: 404
#[tokio::test]
async fn returns_404_for_unknown_license() {
    let (_test, app) = setup().await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/conductores/NOPE999",
        Some(json!({ "telefono": "5559999" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
