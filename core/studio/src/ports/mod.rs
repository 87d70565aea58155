//! Ports & Adapters のポート定義
//!
//! - inbound: CLI がアプリを呼び出す入口
//! - outbound: アプリが外界（生成 API・端末・標準入力）に依頼するための trait

pub mod inbound;
pub mod outbound;
