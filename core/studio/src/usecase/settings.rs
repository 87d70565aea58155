//! 実行設定の解決
//!
//! 優先順位: CLI 引数 > 環境変数（STUDIO_PROVIDER / STUDIO_MODEL / STUDIO_LANG） > config.json > 既定値

use common::config::StudioConfig;
use common::domain::{LanguageCode, ModelName, ProviderName};
use common::error::Error;
use common::llm::{ProviderSettings, ProviderType};
use common::ports::outbound::EnvResolver;

/// プロバイダ設定と出力言語
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSettings {
    pub provider: ProviderSettings,
    pub language: LanguageCode,
}

fn env_value(env: &dyn EnvResolver, name: &str) -> Option<String> {
    env.var(name).filter(|s| !s.trim().is_empty())
}

/// 出力言語だけを解決する（ヘルプ表示等でも使う）
pub fn resolve_language(
    cli: Option<&LanguageCode>,
    env: &dyn EnvResolver,
    config: &StudioConfig,
) -> LanguageCode {
    cli.cloned()
        .or_else(|| env_value(env, "STUDIO_LANG").map(LanguageCode::new))
        .or_else(|| config.language.clone().map(LanguageCode::new))
        .unwrap_or_default()
}

pub fn resolve_settings(
    cli_provider: Option<&ProviderName>,
    cli_model: Option<&ModelName>,
    cli_language: Option<&LanguageCode>,
    env: &dyn EnvResolver,
    config: &StudioConfig,
) -> Result<ResolvedSettings, Error> {
    let provider_name = cli_provider
        .map(|p| p.to_string())
        .or_else(|| env_value(env, "STUDIO_PROVIDER"))
        .or_else(|| config.provider.clone())
        .unwrap_or_else(|| ProviderType::Gemini.as_str().to_string());

    let provider_type = ProviderType::parse(&provider_name).ok_or_else(|| {
        Error::invalid_argument(format!(
            "Unknown provider: {}. Available providers: {}",
            provider_name,
            ProviderType::names().join(", ")
        ))
    })?;

    let model = cli_model
        .map(|m| m.to_string())
        .or_else(|| env_value(env, "STUDIO_MODEL"))
        .or_else(|| config.model.clone());

    let mut provider = ProviderSettings::new(provider_type);
    provider.model = model;
    provider.api_key_env = config.api_key_env.clone();
    provider.base_url = config.base_url.clone();

    Ok(ResolvedSettings {
        provider,
        language: resolve_language(cli_language, env, config),
    })
}
