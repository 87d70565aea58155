//! config.json の読み込み
//!
//! `$STUDIO_HOME/config.json`（任意）。ファイルが無ければ既定値、壊れていればパス付きのエラー。
//!
//! ```json
//! { "provider": "gemini", "model": "gemini-2.5-flash", "language": "ja",
//!   "api_key_env": "MY_GEMINI_KEY", "base_url": "https://proxy.example/v1beta" }
//! ```

use crate::domain::HomeDir;
use crate::error::Error;
use crate::ports::outbound::FileSystem;
use serde::Deserialize;

/// config.json の内容（すべて省略可能）
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StudioConfig {
    /// 既定のプロバイダ名（gemini | echo）
    #[serde(alias = "default_provider")]
    pub provider: Option<String>,
    /// 既定のモデル名
    #[serde(alias = "default_model")]
    pub model: Option<String>,
    /// 既定の出力言語コード
    #[serde(alias = "lang")]
    pub language: Option<String>,
    /// API キーを読む環境変数名
    pub api_key_env: Option<String>,
    /// API のベース URL
    pub base_url: Option<String>,
}

impl StudioConfig {
    /// JSON 文字列からパース（ファイル読みは load で行う）
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// ホームディレクトリ直下の config.json を読み込む
    pub fn load(fs: &dyn FileSystem, home: &HomeDir) -> Result<Self, Error> {
        let path = home.config_path();
        if !fs.is_file(&path) {
            return Ok(Self::default());
        }
        let contents = fs.read_to_string(&path)?;
        Self::parse(&contents).map_err(|e| Error::json(format!("{}: {}", path.display(), e)))
    }
}
