pub mod hotels;

pub use hotels::{HotelLookupService, HotelService};
