// Adapters layer: concrete implementations for external systems (model API, file storage).

pub mod gemini;
pub mod storage;

pub use gemini::GeminiClient;
pub use storage::LocalStorage;
