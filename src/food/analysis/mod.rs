pub mod session;
pub mod synergy;

pub use session::{AnalyzerSession, IngredientSlots};
pub use synergy::{SynergyAnalysis, SynergyAnalyzer};
