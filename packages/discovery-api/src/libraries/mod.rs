pub mod categories;
pub mod geo;
