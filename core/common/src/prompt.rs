//! プロンプト組み立て
//!
//! テンプレート（指示文）・出力言語・ユーザー入力を 1 本の文字列にする。

/// 指示文 + 出力言語指定 + 区切り線 + ユーザー入力
pub fn build_prompt(prefix: &str, content: &str, language_name: &str) -> String {
    format!(
        "{}\n\nPlease provide the response in {}.\n\n---\n\n{}",
        prefix, language_name, content
    )
}
