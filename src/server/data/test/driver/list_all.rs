use super::*;
use crate::server::model::driver::{DriverSort, DriverSortColumn, SortDirection};

/// Tests the default listing order.
///
/// Verifies that drivers come back newest registration first.
///
/// Expected: Ok(Vec<Driver>) ordered by registered_on descending
#[tokio::test]
async fn lists_newest_first_by_default() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_driver_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let oldest = DriverFactory::new(db)
        .registered_on(date(2024, 1, 1))
        .build()
        .await?;
    let newest = DriverFactory::new(db)
        .registered_on(date(2024, 3, 1))
        .build()
        .await?;
    let middle = DriverFactory::new(db)
        .registered_on(date(2024, 2, 1))
        .build()
        .await?;

    let repo = DriverRepository::new(db);
    let drivers = repo.list_all(&ListDriversParams::default()).await?;

    let ids: Vec<i32> = drivers.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);

    Ok(())
}

/// Tests paging through drivers.
///
/// Verifies that consecutive pages are disjoint and contiguous, including when every
/// row shares the same sort value.
///
/// Expected: Ok with two pages covering all four drivers
#[tokio::test]
async fn pages_are_disjoint_and_contiguous() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_driver_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..4 {
        DriverFactory::new(db)
            .registered_on(date(2024, 5, 5))
            .build()
            .await?;
    }

    let repo = DriverRepository::new(db);
    let first = repo
        .list_all(&ListDriversParams {
            limit: 2,
            offset: 0,
            ..Default::default()
        })
        .await?;
    let second = repo
        .list_all(&ListDriversParams {
            limit: 2,
            offset: 2,
            ..Default::default()
        })
        .await?;

    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 2);

    let mut ids: Vec<i32> = first.iter().chain(second.iter()).map(|d| d.id).collect();
    let in_order = ids.clone();
    ids.sort_unstable_by(|a, b| b.cmp(a));
    ids.dedup();
    assert_eq!(ids.len(), 4);
    assert_eq!(in_order, ids);

    Ok(())
}

/// Tests ordering by a requested column.
///
/// Expected: Ok(Vec<Driver>) ordered by first name ascending
#[tokio::test]
async fn orders_by_requested_column() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_driver_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Carla", "Ana", "Bruno"] {
        DriverFactory::new(db).first_name(name).build().await?;
    }

    let repo = DriverRepository::new(db);
    let drivers = repo
        .list_all(&ListDriversParams {
            sort: DriverSort {
                column: DriverSortColumn::FirstName,
                direction: SortDirection::Asc,
            },
            ..Default::default()
        })
        .await?;

    let names: Vec<&str> = drivers.iter().map(|d| d.first_name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Bruno", "Carla"]);

    Ok(())
}

/// Tests an offset past the last row.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_driver_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_driver(db).await?;

    let repo = DriverRepository::new(db);
    let drivers = repo
        .list_all(&ListDriversParams {
            offset: 10,
            ..Default::default()
        })
        .await?;

    assert!(drivers.is_empty());

    Ok(())
}
