//! LlmDriver を使う ContentGenerator 実装
//!
//! 指示文・出力言語・本文をプロンプトに組み立て、プロバイダへ 1 回送信する。
//! プロバイダは generate 時に作る（API キー未設定は生成失敗として扱われる）。

use std::sync::Arc;

use common::domain::LanguageCode;
use common::error::Error;
use common::i18n::language_name;
use common::llm::gemini::DEFAULT_MODEL;
use common::llm::{create_driver, ProviderSettings, ProviderType};
use common::ports::outbound::EnvResolver;
use common::prompt::build_prompt;

use crate::ports::outbound::ContentGenerator;

pub struct DriverContentGenerator {
    settings: ProviderSettings,
    env: Arc<dyn EnvResolver>,
}

impl DriverContentGenerator {
    pub fn new(settings: ProviderSettings, env: Arc<dyn EnvResolver>) -> Self {
        Self { settings, env }
    }
}

impl ContentGenerator for DriverContentGenerator {
    fn generate(
        &self,
        prompt_prefix: &str,
        content: &str,
        language: &LanguageCode,
    ) -> Result<String, Error> {
        let driver = create_driver(&self.settings, self.env.as_ref())?;
        let prompt = build_prompt(prompt_prefix, content, language_name(language));
        driver.query(&prompt)
    }

    fn model_label(&self) -> String {
        let model = match self.settings.provider_type {
            ProviderType::Gemini => self.settings.model.as_deref().unwrap_or(DEFAULT_MODEL),
            ProviderType::Echo => "echo",
        };
        format!("{}/{}", self.settings.provider_type.as_str(), model)
    }
}
