pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod food;
pub mod llm;
pub mod providers;

// Re-export commonly used items
pub use config::ProviderConfig;
pub use error::{AnalysisError, ChatError, InputError, ProviderError};
pub use food::analysis::{AnalyzerSession, SynergyAnalysis, SynergyAnalyzer};
pub use llm::{ChatClient, ChatSession};
pub use providers::gemini::GeminiProvider;
