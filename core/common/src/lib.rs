//! studio 共通ライブラリ
//!
//! `studio` コマンドが使う LLM プロバイダ・プロンプト・翻訳・ポートとアダプタを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// 設定ファイル
pub mod config;

/// 出力言語と UI 文字列
pub mod i18n;

/// プロンプト組み立て
pub mod prompt;

/// LLMドライバーとプロバイダ
pub mod llm;

pub mod ports;

pub mod adapter;
