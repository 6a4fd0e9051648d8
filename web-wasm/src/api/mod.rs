//! カタログAPI連携

mod catalog;

pub use catalog::{load_catalog, refresh_ratings, submit_rating};
