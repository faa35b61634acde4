//! Rules shared by the aggregates

pub mod quantity;

pub use quantity::parse_positive_quantity;
