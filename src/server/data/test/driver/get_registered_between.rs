use super::*;

/// Tests fetching drivers registered within a date range.
///
/// Verifies that both bounds are inclusive and results are newest first.
///
/// Expected: Ok(Vec<Driver>) with the three drivers inside the range
#[tokio::test]
async fn returns_drivers_in_inclusive_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_driver_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dates = [
        date(2024, 1, 31),
        date(2024, 2, 1),
        date(2024, 2, 15),
        date(2024, 2, 29),
        date(2024, 3, 1),
    ];
    for registered_on in dates {
        DriverFactory::new(db)
            .registered_on(registered_on)
            .build()
            .await?;
    }

    let repo = DriverRepository::new(db);
    let drivers = repo
        .get_registered_between(date(2024, 2, 1), date(2024, 2, 29))
        .await?;

    let found: Vec<NaiveDate> = drivers.iter().map(|d| d.registered_on).collect();
    assert_eq!(
        found,
        vec![date(2024, 2, 29), date(2024, 2, 15), date(2024, 2, 1)]
    );

    Ok(())
}

/// Tests a range with no registrations.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_outside_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_driver_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    DriverFactory::new(db)
        .registered_on(date(2024, 6, 1))
        .build()
        .await?;

    let repo = DriverRepository::new(db);
    let drivers = repo
        .get_registered_between(date(2023, 1, 1), date(2023, 12, 31))
        .await?;

    assert!(drivers.is_empty());

    Ok(())
}
