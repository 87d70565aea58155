//! LLMドライバーの実装
//!
//! プロバイダに依存しない共通処理（payload → HTTP → テキスト抽出）を提供する。

use crate::error::Error;
use crate::llm::provider::LlmProvider;

/// LLMドライバー
pub struct LlmDriver<P: LlmProvider> {
    provider: P,
}

impl<P: LlmProvider> LlmDriver<P> {
    /// 新しいドライバーを作成
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// プロンプトを 1 回送信して応答テキストを取得する（リトライなし）
    ///
    /// # Returns
    /// * `Ok(String)` - LLMからの応答テキスト
    /// * `Err(Error)` - 通信失敗・API エラー・応答にテキストが無い場合
    pub fn query(&self, prompt: &str) -> Result<String, Error> {
        let payload = self.provider.make_request_payload(prompt)?;

        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;

        let response_json = self.provider.make_http_request(&request_json)?;

        self.provider
            .parse_response_text(&response_json)?
            .ok_or_else(|| Error::provider("No text in response"))
    }

    /// プロバイダを取得
    pub fn provider(&self) -> &P {
        &self.provider
    }
}
