pub use super::instrument::Entity as Instrument;
pub use super::reservation::Entity as Reservation;
pub use super::room::Entity as Room;
pub use super::room_instrument::Entity as RoomInstrument;
pub use super::user::Entity as User;
pub use super::user_instrument::Entity as UserInstrument;
