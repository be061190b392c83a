mod handler;

pub use handler::{CityQuery, suggest_cities};
