pub mod error;
pub mod gemini;
pub mod generator;

pub use gemini::client::GeminiClient;
pub use generator::TextGenerator;
