use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::model::instrument::Instrument;

pub struct InstrumentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InstrumentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an instrument by its id.
    ///
    /// # Returns
    /// - `Ok(Some(Instrument))` - Instrument found
    /// - `Ok(None)` - No instrument with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Instrument>, DbErr> {
        let entity = entity::prelude::Instrument::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Instrument::from_entity))
    }

    /// Gets all instruments ordered by id. Used by the diagnostic table dump.
    pub async fn get_all(&self) -> Result<Vec<Instrument>, DbErr> {
        let entities = entity::prelude::Instrument::find()
            .order_by_asc(entity::instrument::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Instrument::from_entity).collect())
    }
}
