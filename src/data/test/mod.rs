mod instrument;
mod reservation;
mod room;
mod room_instrument;
mod user;
mod user_instrument;
