use std::sync::Arc;

use common::adapter::StdFileSystem;
use common::domain::{LanguageCode, ProviderName};
use common::error::Error;

use crate::adapter::{FixedInput, RecordingViewFactory};
use crate::cli::Config;
use crate::domain::PanelState;
use crate::ports::inbound::UseCaseRunner;
use crate::tests::{CaptureLog, MapEnv};
use crate::wiring::App;

/// Runner と、描画状態・ログを後から確認するためのハンドル
struct TestRun {
    runner: crate::Runner,
    views: Arc<RecordingViewFactory>,
    log: Arc<CaptureLog>,
}

impl TestRun {
    fn new(env: MapEnv, stdin: Option<&str>) -> Self {
        let views = Arc::new(RecordingViewFactory::default());
        let log = Arc::new(CaptureLog::default());
        let app = App {
            env_resolver: Arc::new(env),
            fs: Arc::new(StdFileSystem),
            logger: log.clone(),
            input: Arc::new(FixedInput(stdin.map(str::to_string))),
            view_factory: views.clone(),
        };
        Self {
            runner: crate::Runner { app },
            views,
            log,
        }
    }

    fn run(&self, config: Config) -> Result<i32, Error> {
        self.runner.run(config)
    }

    /// echo プロバイダが返したプロンプト全文
    fn prompt(&self) -> String {
        self.views.result_text().unwrap_or_default()
    }

    fn finished_exit_code(&self) -> Option<i64> {
        self.log
            .find("command finished")?
            .fields?
            .get("exit_code")?
            .as_i64()
    }
}

/// 標準入力なし・環境変数なしで Runner を実行する
fn run_app(config: Config) -> Result<i32, Error> {
    TestRun::new(MapEnv::empty(), None).run(config)
}

fn echo_config(mode: &str, words: &[&str]) -> Config {
    Config {
        mode: Some(mode.to_string()),
        content_args: words.iter().map(|w| w.to_string()).collect(),
        provider: Some(ProviderName::new("echo")),
        quiet: true,
        ..Default::default()
    }
}

#[test]
fn test_run_app_with_help() {
    let config = Config {
        help: true,
        ..Default::default()
    };
    assert_eq!(run_app(config).unwrap(), 0);
}

#[test]
fn test_run_app_help_in_unknown_language() {
    let config = Config {
        help: true,
        language: Some(LanguageCode::new("xx")),
        ..Default::default()
    };
    assert_eq!(run_app(config).unwrap(), 0);
}

#[test]
fn test_run_app_list_commands() {
    let languages = Config {
        list_languages: true,
        ..Default::default()
    };
    assert_eq!(run_app(languages).unwrap(), 0);
    let modes = Config {
        list_modes: true,
        language: Some(LanguageCode::new("fr")),
        ..Default::default()
    };
    assert_eq!(run_app(modes).unwrap(), 0);
}

#[test]
fn test_run_app_without_mode() {
    let err = run_app(Config::default()).unwrap_err();
    assert!(err.to_string().contains("No mode given"));
    assert_eq!(err.exit_code(), 64);
}

#[test]
fn test_run_app_without_content() {
    let t = TestRun::new(MapEnv::empty(), None);
    let err = t.run(echo_config("text", &[])).unwrap_err();
    assert!(
        err.to_string().contains("No content provided for 'text'"),
        "got: {}",
        err
    );
    assert_eq!(err.exit_code(), 64);
    assert_eq!(t.views.states(), vec![PanelState::Idle]);
}

#[test]
fn test_run_app_finished_log_carries_failure_exit_code() {
    let t = TestRun::new(MapEnv::empty(), None);
    assert!(t.run(echo_config("text", &[])).is_err());
    assert_eq!(t.finished_exit_code(), Some(64));
    assert!(t.log.find("command started").is_some());
}

#[test]
fn test_run_app_finished_log_carries_success_exit_code() {
    let t = TestRun::new(MapEnv::empty(), None);
    assert_eq!(t.run(echo_config("story", &["a", "fox"])).unwrap(), 0);
    assert_eq!(t.finished_exit_code(), Some(0));
}

#[test]
fn test_run_app_with_echo_text() {
    let t = TestRun::new(MapEnv::empty(), Some("ignored stdin"));
    assert_eq!(t.run(echo_config("text", &["rivers", "are", "long"])).unwrap(), 0);
    assert_eq!(
        t.prompt(),
        "Summarize the following text concisely and accurately:\n\nPlease provide the response in English.\n\n---\n\nrivers are long"
    );
    assert_eq!(
        t.views.states()[..2],
        [PanelState::Idle, PanelState::Loading]
    );
}

#[test]
fn test_run_app_language_reaches_prompt() {
    let t = TestRun::new(MapEnv::empty(), None);
    let config = Config {
        language: Some(LanguageCode::new("ja")),
        ..echo_config("story", &["a", "fox"])
    };
    assert_eq!(t.run(config).unwrap(), 0);
    assert!(t.prompt().contains("Please provide the response in 日本語."));
}

#[test]
fn test_run_app_reads_piped_stdin() {
    let t = TestRun::new(MapEnv::empty(), Some("once upon a time"));
    assert_eq!(t.run(echo_config("story", &[])).unwrap(), 0);
    assert!(t.prompt().ends_with("---\n\nonce upon a time"));
}

#[test]
fn test_run_app_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("transcript.txt");
    std::fs::write(&path, "speaker one: hello").unwrap();
    let t = TestRun::new(MapEnv::empty(), Some("ignored stdin"));
    let config = Config {
        file: Some(path),
        ..echo_config("video", &[])
    };
    assert_eq!(t.run(config).unwrap(), 0);
    let prompt = t.prompt();
    assert!(prompt.starts_with("Summarize the key points from the following video transcript:"));
    assert!(prompt.ends_with("---\n\nspeaker one: hello"));
}

#[test]
fn test_run_app_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        file: Some(dir.path().join("missing.txt")),
        ..echo_config("video", &[])
    };
    let err = run_app(config).unwrap_err();
    assert_eq!(err.exit_code(), 74);
}

#[test]
fn test_run_app_recipe_without_ingredients() {
    let err = run_app(echo_config("recipe", &[])).unwrap_err();
    assert!(err.to_string().contains("No ingredients provided"));
    assert_eq!(err.exit_code(), 64);
}

#[test]
fn test_run_app_recipe_with_echo() {
    let t = TestRun::new(MapEnv::empty(), None);
    let config = Config {
        ingredients: Some("eggs, rice".to_string()),
        time: Some("20 minutes".to_string()),
        skill: Some("intermediate".to_string()),
        ..echo_config("recipe", &[])
    };
    assert_eq!(t.run(config).unwrap(), 0);
    assert!(t.prompt().ends_with(
        "Ingredients available: eggs, rice\nCooking appliances and tools: Standard kitchen tools\nMaximum time: 20 minutes\nMy cooking skill level is: Intermediate"
    ));
}

#[test]
fn test_run_app_recipe_words_as_ingredients() {
    let t = TestRun::new(MapEnv::empty(), None);
    assert_eq!(t.run(echo_config("recipe", &["tofu", "rice"])).unwrap(), 0);
    let prompt = t.prompt();
    assert!(prompt.contains("Ingredients available: tofu rice\n"), "got: {}", prompt);
    assert!(prompt.contains("Please provide the response in English."));
}

#[test]
fn test_run_app_unknown_provider() {
    let config = Config {
        provider: Some(ProviderName::new("nope")),
        ..echo_config("text", &["x"])
    };
    let err = run_app(config).unwrap_err();
    assert!(err.to_string().contains("gemini, echo"), "got: {}", err);
    assert_eq!(err.exit_code(), 64);
}

#[test]
fn test_run_app_gemini_without_key_fails_with_config_code() {
    // キー未設定はリクエスト前に失敗する（ネットワーク不要）
    let t = TestRun::new(MapEnv::empty(), None);
    let config = Config {
        provider: None,
        ..echo_config("text", &["content"])
    };
    assert_eq!(t.run(config).unwrap(), 78);
    match t.views.states().last() {
        Some(PanelState::Error(msg)) => assert!(msg.contains("GEMINI_API_KEY"), "got: {}", msg),
        other => panic!("unexpected state: {:?}", other),
    }
    assert_eq!(t.finished_exit_code(), Some(78));
}

#[test]
fn test_run_app_provider_from_config_file() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join("config.json"), r#"{"provider": "echo"}"#).unwrap();
    let env = MapEnv::with(&[("STUDIO_HOME", home.path().to_str().unwrap())]);
    let t = TestRun::new(env, None);
    let config = Config {
        provider: None,
        ..echo_config("story", &["a", "fox"])
    };
    assert_eq!(t.run(config).unwrap(), 0);
    assert!(t.prompt().ends_with("---\n\na fox"));
}

#[test]
fn test_run_app_broken_config_is_json_error() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join("config.json"), "{ not json").unwrap();
    let env = MapEnv::with(&[("STUDIO_HOME", home.path().to_str().unwrap())]);
    let err = TestRun::new(env, None)
        .run(echo_config("text", &["x"]))
        .unwrap_err();
    assert_eq!(err.exit_code(), 65);
}
