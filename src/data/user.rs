//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the
//! database. It handles user lookups by login, the unbounded user listing,
//! the telephone update, and role flag management, with conversion between
//! entity models and domain models at the infrastructure boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::model::{
    instrument::Instrument,
    user::{UpdateUserRightsParam, User},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by their login.
    ///
    /// # Arguments
    /// - `login` - Externally issued login of the user
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that login
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_login(&self, login: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(login.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by login together with the instruments they play.
    ///
    /// # Arguments
    /// - `login` - Externally issued login of the user
    ///
    /// # Returns
    /// - `Ok(Some((user, instruments)))` - User found, instruments may be empty
    /// - `Ok(None)` - No user with that login
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_with_instruments(
        &self,
        login: &str,
    ) -> Result<Option<(User, Vec<Instrument>)>, DbErr> {
        let mut rows = entity::prelude::User::find_by_id(login.to_string())
            .find_with_related(entity::prelude::Instrument)
            .all(self.db)
            .await?;

        let Some((user, instruments)) = rows.pop() else {
            return Ok(None);
        };

        Ok(Some((
            User::from_entity(user),
            instruments.into_iter().map(Instrument::from_entity).collect(),
        )))
    }

    /// Gets all users with their instruments, ordered by login.
    ///
    /// The result set is unbounded by design; the member base is small and
    /// the listing endpoint is admin-only.
    ///
    /// # Returns
    /// - `Ok(Vec<(User, Vec<Instrument>)>)` - All users with instrument lists
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_with_instruments(
        &self,
    ) -> Result<Vec<(User, Vec<Instrument>)>, DbErr> {
        let rows = entity::prelude::User::find()
            .find_with_related(entity::prelude::Instrument)
            .order_by_asc(entity::user::Column::Login)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(user, instruments)| {
                (
                    User::from_entity(user),
                    instruments.into_iter().map(Instrument::from_entity).collect(),
                )
            })
            .collect())
    }

    /// Overwrites a user's telephone number.
    ///
    /// # Arguments
    /// - `login` - Login of the user to update
    /// - `telephone` - New telephone number
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that login
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_telephone(
        &self,
        login: &str,
        telephone: String,
    ) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(login.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut user: entity::user::ActiveModel = user.into();
        user.telephone = ActiveValue::Set(telephone);

        let updated = user.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Replaces a user's role flag pair.
    ///
    /// Both flags are always written; the operation is a full replace of
    /// exactly `{adherent, admin}`.
    ///
    /// # Arguments
    /// - `login` - Login of the user to update
    /// - `param` - The new role flag pair
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that login
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_rights(
        &self,
        login: &str,
        param: UpdateUserRightsParam,
    ) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(login.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut user: entity::user::ActiveModel = user.into();
        user.adherent = ActiveValue::Set(param.adherent);
        user.admin = ActiveValue::Set(param.admin);

        let updated = user.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }
}
