//! Diagnostic dump of every table, printed as JSON.
//!
//! Connects to the configured database, runs pending migrations, and prints
//! the full contents of the user, room, instrument and reservation tables.
//! Users and rooms are printed with their instrument lists; the first user's
//! instruments are also printed on their own as an association spot check.

use serde_json::json;
use tracing_subscriber::EnvFilter;

use bandroom::{
    config::Config,
    data::{
        instrument::InstrumentRepository, reservation::ReservationRepository,
        room::RoomRepository, user::UserRepository,
    },
    model::{room::RoomDetail, user::UserProfile},
    startup,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let users = UserRepository::new(&db).get_all_with_instruments().await?;
    let rooms = RoomRepository::new(&db).get_all_with_instruments().await?;
    let instruments = InstrumentRepository::new(&db).get_all().await?;
    let reservations = ReservationRepository::new(&db).get_all().await?;

    let first_user_instruments = users
        .first()
        .map(|(_, instruments)| instruments.clone())
        .unwrap_or_default();

    let dump = json!({
        "users": users
            .into_iter()
            .map(|(user, instruments)| UserProfile { user, instruments }.into_dto())
            .collect::<Vec<_>>(),
        "rooms": rooms
            .into_iter()
            .map(|(room, instruments)| RoomDetail { room, instruments }.into_dto())
            .collect::<Vec<_>>(),
        "instruments": instruments
            .into_iter()
            .map(|i| i.into_dto())
            .collect::<Vec<_>>(),
        "reservations": reservations
            .into_iter()
            .map(|r| r.into_dto())
            .collect::<Vec<_>>(),
        "firstUserInstruments": first_user_instruments
            .into_iter()
            .map(|i| i.into_dto())
            .collect::<Vec<_>>(),
    });

    println!("{}", serde_json::to_string_pretty(&dump)?);

    Ok(())
}
