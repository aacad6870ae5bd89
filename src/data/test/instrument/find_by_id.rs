use super::*;

/// Tests finding an existing instrument by id.
///
/// Expected: Ok(Some(Instrument)) with matching data
#[tokio::test]
async fn finds_existing_instrument() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Instrument)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let instrument = factory::instrument::create_instrument_with_name(db, "Saxophone").await?;

    let found = InstrumentRepository::new(db)
        .find_by_id(instrument.id)
        .await?
        .unwrap();

    assert_eq!(found.id, instrument.id);
    assert_eq!(found.name, "Saxophone");

    Ok(())
}

/// Tests querying a non-existent instrument.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_instrument() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Instrument)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = InstrumentRepository::new(db).find_by_id(99999).await?;

    assert!(result.is_none());

    Ok(())
}
