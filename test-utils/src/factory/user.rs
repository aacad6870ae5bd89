//! User factory for creating test user entities.
//!
//! Provides factory methods for creating user entities with sensible defaults,
//! reducing boilerplate in tests. The factory supports customization through a
//! builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .login("alice")
///     .full_name("Alice Martin")
///     .admin(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    login: String,
    full_name: String,
    mail: String,
    telephone: String,
    admin: bool,
    adherent: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - login: `"user_{id}"` where id is auto-incremented
    /// - full_name: `"User {id}"`
    /// - mail: `"user{id}@example.org"`
    /// - telephone: `"06{id:08}"`
    /// - admin: `false`
    /// - adherent: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            login: format!("user_{}", id),
            full_name: format!("User {}", id),
            mail: format!("user{}@example.org", id),
            telephone: format!("06{:08}", id),
            admin: false,
            adherent: false,
        }
    }

    /// Sets the login for the user.
    pub fn login(mut self, login: impl Into<String>) -> Self {
        self.login = login.into();
        self
    }

    /// Sets the full name for the user.
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    /// Sets the mail address for the user.
    pub fn mail(mut self, mail: impl Into<String>) -> Self {
        self.mail = mail.into();
        self
    }

    /// Sets the telephone number for the user.
    pub fn telephone(mut self, telephone: impl Into<String>) -> Self {
        self.telephone = telephone.into();
        self
    }

    /// Sets the admin flag for the user.
    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    /// Sets the adherent flag for the user.
    pub fn adherent(mut self, adherent: bool) -> Self {
        self.adherent = adherent;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            login: ActiveValue::Set(self.login),
            full_name: ActiveValue::Set(self.full_name),
            mail: ActiveValue::Set(self.mail),
            telephone: ActiveValue::Set(self.telephone),
            admin: ActiveValue::Set(self.admin),
            adherent: ActiveValue::Set(self.adherent),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with a specific login.
///
/// Shorthand for `UserFactory::new(db).login(login).build().await`.
pub async fn create_user_with_login(
    db: &DatabaseConnection,
    login: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).login(login).build().await
}
