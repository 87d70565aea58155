//! LLMプロバイダのトレイト定義

use crate::error::Error;
use serde_json::Value;

/// LLMプロバイダのトレイト
///
/// 各プロバイダ（Gemini、Echo）はこのトレイトを実装する。
/// 1 回の生成は payload 生成 → HTTP → テキスト抽出 の 3 段。
pub trait LlmProvider: Send + Sync {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// 使用するモデル名
    fn model(&self) -> &str;

    /// リクエストペイロードを生成
    ///
    /// # Arguments
    /// * `prompt` - 組み立て済みのプロンプト全文
    fn make_request_payload(&self, prompt: &str) -> Result<Value, Error>;

    /// HTTPリクエストを実行してレスポンスJSON文字列を取得
    ///
    /// 非 2xx はエラー。ボディに `error.message` があればそれをメッセージに含める。
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスからテキストを抽出（存在しない場合は None）
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error>;
}

impl<P: LlmProvider + ?Sized> LlmProvider for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn model(&self) -> &str {
        (**self).model()
    }

    fn make_request_payload(&self, prompt: &str) -> Result<Value, Error> {
        (**self).make_request_payload(prompt)
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        (**self).make_http_request(request_json)
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        (**self).parse_response_text(response_json)
    }
}
