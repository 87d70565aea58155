//! LLMドライバーとプロバイダの実装
//!
//! 生成エンドポイントへの単発リクエストを扱う。ストリーミング・リトライは持たない。

pub mod driver;
pub mod echo;
pub mod factory;
pub mod gemini;
pub mod provider;

pub use driver::LlmDriver;
pub use factory::{create_driver, create_provider, ProviderSettings, ProviderType};
pub use provider::LlmProvider;
