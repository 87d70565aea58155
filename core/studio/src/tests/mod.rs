//! バイナリクレート内のテスト（ユースケース・Runner）と共有テスト用アダプタ

mod run_app_tests;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use common::domain::HomeDir;
use common::error::Error;
use common::ports::outbound::{EnvResolver, Log, LogRecord};

/// テスト用: 固定のマップから環境変数を返す。ホームは STUDIO_HOME のみ見る
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn empty() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    pub fn with(pairs: &[(&str, &str)]) -> Self {
        Self {
            vars: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl EnvResolver for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
        self.var("STUDIO_HOME")
            .map(|p| HomeDir::new(PathBuf::from(p)))
            .ok_or_else(|| Error::env("STUDIO_HOME is not set"))
    }
}

/// テスト用: 書き出されたログレコードをそのまま保持する
#[derive(Default)]
pub struct CaptureLog {
    records: Mutex<Vec<LogRecord>>,
}

impl CaptureLog {
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }

    /// message が一致する最初のレコード
    pub fn find(&self, message: &str) -> Option<LogRecord> {
        self.records().into_iter().find(|r| r.message == message)
    }
}

impl Log for CaptureLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}
