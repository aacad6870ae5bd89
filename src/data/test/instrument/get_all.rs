use super::*;

/// Tests listing all instruments ordered by id.
///
/// Expected: Ok(Vec) with instruments in insertion order
#[tokio::test]
async fn lists_all_instruments_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Instrument)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::instrument::create_instrument(db).await?;
    let second = factory::instrument::create_instrument(db).await?;

    let instruments = InstrumentRepository::new(db).get_all().await?;

    assert_eq!(instruments.len(), 2);
    assert_eq!(instruments[0].id, first.id);
    assert_eq!(instruments[1].id, second.id);

    Ok(())
}

/// Tests listing when no instruments exist.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_list_when_no_instruments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Instrument)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let instruments = InstrumentRepository::new(db).get_all().await?;

    assert!(instruments.is_empty());

    Ok(())
}
