//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::HomeDir;
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }

    fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
        resolve_home_dir_with(|name| self.var(name))
    }
}

/// 変数取得関数を差し替えてホームディレクトリを解決する（テスト用に分離）
pub(crate) fn resolve_home_dir_with<F>(var: F) -> Result<HomeDir, Error>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |name: &str| var(name).filter(|s| !s.is_empty());

    if let Some(home) = non_empty("STUDIO_HOME") {
        return Ok(HomeDir::new(PathBuf::from(home)));
    }

    let config_base = non_empty("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| non_empty("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok_or_else(|| Error::env("HOME is not set"))?;

    Ok(HomeDir::new(config_base.join("studio")))
}
