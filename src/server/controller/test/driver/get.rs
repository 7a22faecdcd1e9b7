use super::*;

/// Tests fetching a driver by license in any case.
///
/// Expected: 200 with mensaje and conductor
#[tokio::test]
async fn gets_driver_by_license() {
    let (_test, app) = setup().await;

    let created = register(&app, "Ana", "Gomez", "ABC123").await;

    let (status, body) = send(&app, Method::GET, "/api/conductores/abc123", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mensaje"], "Conductor encontrado");
    assert_eq!(body["conductor"], created);
}

/// Tests fetching an unknown license.
///
/// The body echoes the normalized license that was looked up.
///
/// Expected: 404 No encontrado
#[tokio::test]
async fn returns_404_for_unknown_license() {
    let (_test, app) = setup().await;

    let (status, body) = send(&app, Method::GET, "/api/conductores/nope999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No encontrado");
    assert_eq!(
        body["mensaje"],
        "Conductor no encontrado con la licencia proporcionada"
    );
    assert_eq!(body["licencia"], "NOPE999");
}
