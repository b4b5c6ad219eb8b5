//! # Value Objects
//!
//! Independent data holders. None of them depends on another.

pub mod circle;
pub mod counter;
pub mod person;
pub mod text_style;
pub mod user;
pub mod vehicle;

pub use circle::Circle;
pub use counter::{Counter, CounterView};
pub use person::Person;
pub use text_style::TextStyle;
pub use user::User;
pub use vehicle::{Car, Vehicle, VehicleBase};
