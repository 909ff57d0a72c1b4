// Service exports
pub mod gemini;
pub mod transport;

pub use gemini::GeminiClient;
pub use transport::{GenerationRequest, GenerativeTransport, TransportError};
