pub mod analysis;
pub mod catalog;
pub mod filter;

pub use catalog::{catalog, SynergyRecord};
pub use filter::{filter_database, filter_dashboard, CategoryFilter, GoalFilter, SearchView};
