//! ユースケース

pub mod generate;
pub mod input;
pub mod settings;

pub use generate::{GenerateUseCase, GenerationRequest};
pub use input::resolve_content;
pub use settings::{resolve_language, resolve_settings};
