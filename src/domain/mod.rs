// Domain layer: the lab types and the ports they are exercised through.

pub mod book;
pub mod catalog;
pub mod hero;
pub mod ports;
pub mod smartphone;
pub mod vehicle;

pub use book::Book;
pub use catalog::{AudioBook, BookListing, Listing, PaperBook};
pub use hero::Hero;
pub use ports::{Clock, Exercise, FixedClock, SystemClock};
pub use smartphone::Smartphone;
pub use vehicle::{Car, Truck, Vehicle, VehicleBase};
