//! User service for business logic.
//!
//! This module provides the `UserService` for user profile reads, telephone
//! updates, instrument attachment, role flag management, and the
//! upcoming-reservation queries. Identity resolution happens in the
//! controllers; services work with plain logins.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        instrument::InstrumentRepository, reservation::ReservationRepository,
        user::UserRepository, user_instrument::UserInstrumentRepository,
    },
    error::AppError,
    model::{
        reservation::ReservationDetail,
        user::{UpdateUserRightsParam, User, UserProfile},
    },
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all users with their instruments, ordered by login.
    ///
    /// The result set is unbounded by design (small member base, admin-only
    /// endpoint).
    ///
    /// # Returns
    /// - `Ok(Vec<UserProfile>)` - All users with instrument lists
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all_users(&self) -> Result<Vec<UserProfile>, AppError> {
        let user_repo = UserRepository::new(self.db);

        let rows = user_repo.get_all_with_instruments().await?;

        Ok(rows
            .into_iter()
            .map(|(user, instruments)| UserProfile { user, instruments })
            .collect())
    }

    /// Retrieves a user's profile (user plus instruments) by login.
    ///
    /// # Arguments
    /// - `login` - Login of the user to fetch
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - The user with their instrument list
    /// - `Err(AppError::NotFound)` - No user with that login
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_profile(&self, login: &str) -> Result<UserProfile, AppError> {
        let user_repo = UserRepository::new(self.db);

        let (user, instruments) = user_repo
            .find_with_instruments(login)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {} not found", login)))?;

        Ok(UserProfile { user, instruments })
    }

    /// Overwrites a user's telephone number.
    ///
    /// # Arguments
    /// - `login` - Login of the user to update
    /// - `telephone` - New telephone number
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that login
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_telephone(
        &self,
        login: &str,
        telephone: String,
    ) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .update_telephone(login, telephone)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {} not found", login)))
    }

    /// Attaches an instrument to a user.
    ///
    /// Idempotent: attaching an already-attached instrument leaves the set
    /// unchanged. Both the login and the instrument id must resolve.
    ///
    /// # Arguments
    /// - `login` - Login of the user
    /// - `instrument_id` - Id of the instrument to attach
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - The user with their updated instrument list
    /// - `Err(AppError::NotFound)` - Unknown login or instrument id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add_instrument(
        &self,
        login: &str,
        instrument_id: i32,
    ) -> Result<UserProfile, AppError> {
        self.resolve_pair(login, instrument_id).await?;

        UserInstrumentRepository::new(self.db)
            .add(login, instrument_id)
            .await?;

        self.get_profile(login).await
    }

    /// Detaches an instrument from a user.
    ///
    /// Detaching a never-attached instrument is a no-op, not an error. Both
    /// the login and the instrument id must resolve.
    ///
    /// # Arguments
    /// - `login` - Login of the user
    /// - `instrument_id` - Id of the instrument to detach
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - The user with their updated instrument list
    /// - `Err(AppError::NotFound)` - Unknown login or instrument id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn remove_instrument(
        &self,
        login: &str,
        instrument_id: i32,
    ) -> Result<UserProfile, AppError> {
        self.resolve_pair(login, instrument_id).await?;

        UserInstrumentRepository::new(self.db)
            .remove(login, instrument_id)
            .await?;

        self.get_profile(login).await
    }

    /// Replaces a user's role flag pair.
    ///
    /// # Arguments
    /// - `login` - Login of the user to update
    /// - `param` - The new `{adherent, admin}` pair
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that login
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn set_rights(
        &self,
        login: &str,
        param: UpdateUserRightsParam,
    ) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .set_rights(login, param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {} not found", login)))
    }

    /// Retrieves a user's upcoming reservations.
    ///
    /// The cutoff is observed once at the start of the call, so every
    /// returned reservation begins at or after that single instant. Results
    /// are ascending by beginning and include the reserving user and the
    /// reserved room.
    ///
    /// # Arguments
    /// - `login` - Login of the reserving user
    ///
    /// # Returns
    /// - `Ok(Vec<ReservationDetail>)` - Upcoming reservations, earliest first
    /// - `Err(AppError::NotFound)` - No user with that login
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn upcoming_reservations(
        &self,
        login: &str,
    ) -> Result<Vec<ReservationDetail>, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_login(login)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {} not found", login)))?;

        let now = Utc::now();

        let details = ReservationRepository::new(self.db)
            .find_upcoming_for_user(&user, now)
            .await?;

        Ok(details)
    }

    /// Checks that both the user and the instrument exist.
    async fn resolve_pair(&self, login: &str, instrument_id: i32) -> Result<(), AppError> {
        UserRepository::new(self.db)
            .find_by_login(login)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {} not found", login)))?;

        InstrumentRepository::new(self.db)
            .find_by_id(instrument_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("instrument {} not found", instrument_id))
            })?;

        Ok(())
    }
}
