pub mod prelude;

pub mod instrument;
pub mod reservation;
pub mod room;
pub mod room_instrument;
pub mod user;
pub mod user_instrument;
