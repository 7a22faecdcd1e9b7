use super::*;

/// Tests registering a driver over HTTP.
///
/// Verifies the 201 status, the Spanish field names, and license normalization.
///
/// Expected: 201 with mensaje and conductor
#[tokio::test]
async fn registers_driver() {
    let (_test, app) = setup().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/conductores",
        Some(json!({
            "nombre": " Ana ",
            "apellido": "Gomez",
            "licencia": "abc123",
            "telefono": "5551234",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["mensaje"], "Conductor registrado exitosamente");
    assert_eq!(body["conductor"]["nombre"], "Ana");
    assert_eq!(body["conductor"]["licencia"], "ABC123");
    assert!(body["conductor"]["id"].as_i64().unwrap() > 0);
    assert!(body["conductor"]["fecha_registro"].is_string());
}

/// Tests that missing fields are all reported.
///
/// Expected: 400 with one detail per missing field
#[tokio::test]
async fn rejects_incomplete_payload() {
    let (_test, app) = setup().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/conductores",
        Some(json!({ "nombre": "Ana" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Datos inválidos");
    assert_eq!(
        body["detalles"],
        json!([
            "El apellido es requerido",
            "La licencia es requerida",
            "El teléfono es requerido",
        ])
    );
}

/// Tests registering a license that is already taken.
///
/// Expected: 409 with the existing driver's summary
#[tokio::test]
async fn conflicts_on_duplicate_license() {
    let (_test, app) = setup().await;

    register(&app, "Ana", "Gomez", "ABC123").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/conductores",
        Some(json!({
            "nombre": "Luis",
            "apellido": "Perez",
            "licencia": "abc123",
            "telefono": "5550000",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Conflicto");
    assert_eq!(body["mensaje"], "Ya existe un conductor con esa licencia");
    assert_eq!(body["conductor_existente"]["nombre"], "Ana");
    assert_eq!(body["conductor_existente"]["apellido"], "Gomez");
}
