//! アダプター（外界の I/O を trait で抽象化した Outbound ポートの標準実装）

pub mod file_json_log;
pub mod std_env_resolver;
pub mod std_fs;

pub use file_json_log::{CompositeLog, FileJsonLog, NoopLog, StderrLog};
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
