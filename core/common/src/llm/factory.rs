//! プロバイダファクトリー
//!
//! プロバイダタイプと設定から適切なプロバイダを作成する。

use crate::error::Error;
use crate::llm::driver::LlmDriver;
use crate::llm::echo::EchoProvider;
use crate::llm::gemini::{GeminiProvider, DEFAULT_API_KEY_ENVS};
use crate::llm::provider::LlmProvider;
use crate::ports::outbound::EnvResolver;

/// プロバイダタイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    /// Google Gemini（generateContent）
    Gemini,
    /// Echo（プロンプトをそのまま返す）
    Echo,
}

impl ProviderType {
    /// 文字列からプロバイダタイプを解析
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "gemini" | "google" => Some(Self::Gemini),
            "echo" => Some(Self::Echo),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::Echo => "echo",
        }
    }

    /// ビルトインのプロバイダ名一覧（エラー表示用）
    pub fn names() -> &'static [&'static str] {
        &["gemini", "echo"]
    }
}

/// プロバイダ生成に必要な設定（CLI・環境変数・config.json を解決した後の値）
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSettings {
    pub provider_type: ProviderType,
    pub model: Option<String>,
    /// API キーを読む環境変数名（省略時は GEMINI_API_KEY → API_KEY）
    pub api_key_env: Option<String>,
    pub base_url: Option<String>,
}

impl ProviderSettings {
    pub fn new(provider_type: ProviderType) -> Self {
        Self {
            provider_type,
            model: None,
            api_key_env: None,
            base_url: None,
        }
    }
}

/// API キーを環境変数から探す
fn resolve_api_key(settings: &ProviderSettings, env: &dyn EnvResolver) -> Result<String, Error> {
    let candidates: Vec<&str> = match settings.api_key_env.as_deref() {
        Some(name) => vec![name],
        None => DEFAULT_API_KEY_ENVS.to_vec(),
    };
    candidates
        .iter()
        .find_map(|name| env.var(name).filter(|v| !v.trim().is_empty()))
        .ok_or_else(|| {
            Error::env(format!(
                "{} environment variable not set.",
                candidates.join(" or ")
            ))
        })
}

/// プロバイダを作成する
pub fn create_provider(
    settings: &ProviderSettings,
    env: &dyn EnvResolver,
) -> Result<Box<dyn LlmProvider>, Error> {
    match settings.provider_type {
        ProviderType::Gemini => {
            let api_key = resolve_api_key(settings, env)?;
            let provider =
                GeminiProvider::new(settings.model.clone(), api_key, settings.base_url.clone())?;
            Ok(Box::new(provider))
        }
        ProviderType::Echo => Ok(Box::new(EchoProvider::new())),
    }
}

/// ドライバーを作成する
pub fn create_driver(
    settings: &ProviderSettings,
    env: &dyn EnvResolver,
) -> Result<LlmDriver<Box<dyn LlmProvider>>, Error> {
    Ok(LlmDriver::new(create_provider(settings, env)?))
}
