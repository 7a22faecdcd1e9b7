use super::*;

/// Tests license existence checks.
///
/// Expected: true for a registered license, false otherwise
#[tokio::test]
async fn reports_whether_license_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_driver_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    DriverFactory::new(db).license("ABC123").build().await?;

    let repo = DriverRepository::new(db);

    assert!(repo.exists_by_license("ABC123").await?);
    assert!(!repo.exists_by_license("XYZ789").await?);

    Ok(())
}
