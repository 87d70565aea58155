//! コンテンツ生成 Outbound ポート
//!
//! 指示文・本文・出力言語から 1 回だけ生成を依頼し、全文を受け取る。

use common::domain::LanguageCode;
use common::error::Error;

pub trait ContentGenerator: Send + Sync {
    fn generate(
        &self,
        prompt_prefix: &str,
        content: &str,
        language: &LanguageCode,
    ) -> Result<String, Error>;

    /// ログ用のモデル表示名
    fn model_label(&self) -> String;
}
