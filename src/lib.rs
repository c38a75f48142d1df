pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod persistence;
pub mod planner;
pub mod service;
pub mod sources;

pub use error::{MealError, Result};
pub use models::{FoodItem, MacroTargets};
