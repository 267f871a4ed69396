pub mod gemini;
pub mod traits;

#[cfg(test)]
pub mod mock;
