//! Instrument factory for creating test instrument entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test instruments with customizable fields.
pub struct InstrumentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> InstrumentFactory<'a> {
    /// Creates a new InstrumentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Instrument {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Instrument {}", id),
        }
    }

    /// Sets the name for the instrument.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the instrument entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::instrument::Model)` - Created instrument entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::instrument::Model, DbErr> {
        entity::instrument::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an instrument with default values.
///
/// Shorthand for `InstrumentFactory::new(db).build().await`.
pub async fn create_instrument(
    db: &DatabaseConnection,
) -> Result<entity::instrument::Model, DbErr> {
    InstrumentFactory::new(db).build().await
}

/// Creates an instrument with a specific name.
///
/// Shorthand for `InstrumentFactory::new(db).name(name).build().await`.
pub async fn create_instrument_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::instrument::Model, DbErr> {
    InstrumentFactory::new(db).name(name).build().await
}
