//! Categories module - category model and the default seed set.

mod categories_constants;
mod categories_model;

pub use categories_constants::*;
pub use categories_model::{default_categories, Category};
