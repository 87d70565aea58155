//! 配線: 標準アダプタで App を組み立てる

use std::sync::Arc;

use common::adapter::{CompositeLog, FileJsonLog, NoopLog, StderrLog, StdEnvResolver, StdFileSystem};
use common::llm::ProviderSettings;
use common::ports::outbound::{EnvResolver, FileSystem, Log};

use crate::adapter::{DriverContentGenerator, StdInputSource, StdioViewFactory};
use crate::ports::outbound::{ContentGenerator, InputSource, PanelViewFactory};
use crate::usecase::GenerateUseCase;

/// main / Runner が使う依存一式
pub struct App {
    pub env_resolver: Arc<dyn EnvResolver>,
    pub fs: Arc<dyn FileSystem>,
    pub logger: Arc<dyn Log>,
    pub input: Arc<dyn InputSource>,
    pub view_factory: Arc<dyn PanelViewFactory>,
}

impl App {
    /// プロバイダ設定から生成ユースケースを組み立てる
    pub fn generate_use_case(&self, settings: ProviderSettings) -> GenerateUseCase {
        let generator: Arc<dyn ContentGenerator> = Arc::new(DriverContentGenerator::new(
            settings,
            Arc::clone(&self.env_resolver),
        ));
        GenerateUseCase::new(generator, Arc::clone(&self.logger))
    }
}

/// ログ: ホームが解決できればファイル（JSONL）、verbose なら stderr にも
fn build_logger(env: &dyn EnvResolver, fs: &Arc<dyn FileSystem>, verbose: bool) -> Arc<dyn Log> {
    let mut logs: Vec<Arc<dyn Log>> = Vec::new();
    if let Ok(home) = env.resolve_home_dir() {
        logs.push(Arc::new(FileJsonLog::new(Arc::clone(fs), home.log_path())));
    }
    if verbose {
        logs.push(Arc::new(StderrLog));
    }
    match logs.len() {
        0 => Arc::new(NoopLog),
        1 => logs.remove(0),
        _ => Arc::new(CompositeLog::new(logs)),
    }
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_studio(verbose: bool) -> App {
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let logger = build_logger(env_resolver.as_ref(), &fs, verbose);
    App {
        env_resolver,
        fs,
        logger,
        input: Arc::new(StdInputSource),
        view_factory: Arc::new(StdioViewFactory),
    }
}
