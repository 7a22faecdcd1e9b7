use super::*;

/// Tests that lookups normalize the requested license.
///
/// Expected: Ok(Driver)
#[tokio::test]
async fn gets_driver_with_lowercase_license() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_driver_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = DriverFactory::new(db).license("ABC123").build().await?;

    let service = DriverService::new(db);
    let driver = service.get(" abc123").await?;

    assert_eq!(driver.id, created.id);

    Ok(())
}

/// Tests fetching an unknown license.
///
/// Expected: Err(DriverError::NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_license() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_driver_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = DriverService::new(db);
    let result = service.get("NOPE999").await;

    assert!(matches!(
        result,
        Err(AppError::DriverErr(DriverError::NotFound(ref license))) if license == "NOPE999"
    ));

    Ok(())
}
