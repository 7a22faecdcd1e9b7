use super::*;

/// Tests listing with pagination metadata.
///
/// Expected: Ok(PaginatedDrivers) with the total across all pages and a one-based page
#[tokio::test]
async fn lists_page_with_total() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_driver_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        DriverFactory::new(db).build().await?;
    }

    let service = DriverService::new(db);
    let page = service
        .list(ListDriversParams::from_query(Some(2), Some(2), None)?)
        .await?;

    assert_eq!(page.total, 5);
    assert_eq!(page.drivers.len(), 2);
    assert_eq!(page.page, 2);
    assert_eq!(page.per_page, 2);

    Ok(())
}

/// Tests listing an empty registry.
///
/// Expected: Ok(PaginatedDrivers) with no drivers
#[tokio::test]
async fn lists_empty_registry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_driver_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = DriverService::new(db);
    let page = service.list(ListDriversParams::default()).await?;

    assert_eq!(page.total, 0);
    assert!(page.drivers.is_empty());
    assert_eq!(page.page, 1);

    Ok(())
}
