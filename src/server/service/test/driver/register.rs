use super::*;

/// Tests registering a driver and reading it back.
///
/// Verifies that values are trimmed, the license is upper-cased, and a lookup with the
/// normalized license returns an equivalent record dated today.
///
/// Expected: Ok(Driver)
#[tokio::test]
async fn registers_and_normalizes_driver() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_driver_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = DriverService::new(db);
    let driver = service
        .register(candidate(" Ana ", "Gomez", " abc123 ", "5551234 "))
        .await?;

    assert_eq!(driver.first_name, "Ana");
    assert_eq!(driver.license, "ABC123");
    assert_eq!(driver.phone, "5551234");
    assert_eq!(driver.registered_on, Utc::now().date_naive());

    let found = service.get("ABC123").await?;
    assert_eq!(found, driver);

    Ok(())
}

/// Tests that invalid input is rejected before touching storage.
///
/// Expected: Err(DriverError::Validation) listing each violation
#[tokio::test]
async fn rejects_invalid_candidate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_driver_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = DriverService::new(db);
    let result = service
        .register(DriverCandidate {
            first_name: Some("Ana".to_string()),
            license: Some("X".repeat(21)),
            ..Default::default()
        })
        .await;

    let errors = match result {
        Err(AppError::DriverErr(DriverError::Validation(errors))) => errors,
        other => panic!("expected validation error, got {:?}", other),
    };
    assert_eq!(
        errors,
        vec![
            "El apellido es requerido",
            "La licencia debe tener máximo 20 caracteres",
            "El teléfono es requerido",
        ]
    );

    let list = service.list(ListDriversParams::default()).await?;
    assert_eq!(list.total, 0);

    Ok(())
}

/// Tests registering a license that differs only in case from an existing one.
///
/// Verifies that the conflict carries a summary of the driver already holding it.
///
/// Expected: Err(DriverError::DuplicateLicense) with existing summary
#[tokio::test]
async fn duplicate_license_includes_existing_driver() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_driver_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = DriverService::new(db);
    let first = service
        .register(candidate("Ana", "Gomez", "ABC123", "5551234"))
        .await?;

    let result = service
        .register(candidate("Luis", "Perez", "abc123", "5550000"))
        .await;

    let (license, existing) = match result {
        Err(AppError::DriverErr(DriverError::DuplicateLicense { license, existing })) => {
            (license, existing)
        }
        other => panic!("expected duplicate license error, got {:?}", other),
    };
    assert_eq!(license, "ABC123");
    assert_eq!(existing, Some(first.summary()));

    Ok(())
}

/// Tests that a failed lookup of the conflicting driver degrades to no summary.
///
/// Runs against a database without the drivers table so the lookup errors.
///
/// Expected: None
#[tokio::test]
async fn existing_summary_is_none_when_lookup_fails() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = DriverService::new(db);
    let existing = service.existing_summary("ABC123").await;

    assert!(existing.is_none());
}
