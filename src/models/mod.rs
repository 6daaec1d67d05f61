pub mod hotel;
pub mod query;
