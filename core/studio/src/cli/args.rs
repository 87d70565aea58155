use std::path::PathBuf;

use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;

use crate::domain::{GenerateArgs, RecipeRequest, SkillLevel, StudioCommand, ToolMode};
use common::domain::{LanguageCode, ModelName, ProviderName};
use common::error::Error;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// --list-languages: 選択できる出力言語の一覧
    pub list_languages: bool,
    /// --list-modes: モード一覧（選択言語のラベル付き）
    pub list_modes: bool,
    /// -v / --verbose: 構造化ログを stderr にも出す
    pub verbose: bool,
    /// -q / --quiet: 見出し・進行表示を出さない（結果とエラーのみ）
    pub quiet: bool,
    pub provider: Option<ProviderName>,
    pub model: Option<ModelName>,
    pub language: Option<LanguageCode>,
    pub file: Option<PathBuf>,
    pub ingredients: Option<String>,
    pub tools: Option<String>,
    pub time: Option<String>,
    pub skill: Option<String>,
    /// 先頭の位置引数（text / video / story / recipe）
    pub mode: Option<String>,
    pub content_args: Vec<String>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("studio")
        .about("Summarize text or transcripts, write stories and create recipes with Gemini")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("list-languages")
                .long("list-languages")
                .help("List available output languages")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("list-modes")
                .long("list-modes")
                .help("List generation modes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Emit structured logs to stderr (for troubleshooting)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print the result (and errors)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("lang")
                .short('l')
                .long("lang")
                .value_name("code")
                .help("Output and UI language (en, es, fr, de, ja, zh)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("provider")
                .short('p')
                .long("provider")
                .value_name("provider")
                .help("LLM provider (gemini, echo)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("model")
                .short('m')
                .long("model")
                .value_name("model")
                .help("Model name (e.g. gemini-2.5-flash)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("file")
                .short('f')
                .long("file")
                .value_name("path")
                .help("Read the content to process from a file")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("ingredients")
                .long("ingredients")
                .value_name("list")
                .help("recipe: ingredients you have (required)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("tools")
                .long("tools")
                .value_name("list")
                .help("recipe: cooking appliances and tools")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("time")
                .long("time")
                .value_name("limit")
                .help("recipe: maximum time")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("skill")
                .long("skill")
                .value_name("level")
                .help("recipe: beginner, intermediate or advanced")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("mode")
                .index(1)
                .help("Mode: text, video, story or recipe"),
        )
        .arg(
            clap::Arg::new("content")
                .index(2)
                .help("Text to process (otherwise --file or stdin)")
                .num_args(0..)
                .trailing_var_arg(true),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let string = |id: &str| matches.get_one::<String>(id).cloned();
    Config {
        help: matches.get_flag("help"),
        list_languages: matches.get_flag("list-languages"),
        list_modes: matches.get_flag("list-modes"),
        verbose: matches.get_flag("verbose"),
        quiet: matches.get_flag("quiet"),
        provider: string("provider").map(ProviderName::new),
        model: string("model").map(ModelName::new),
        language: string("lang").map(LanguageCode::new),
        file: matches.get_one::<PathBuf>("file").cloned(),
        ingredients: string("ingredients"),
        tools: string("tools"),
        time: string("time"),
        skill: string("skill"),
        mode: string("mode"),
        content_args: matches
            .get_many::<String>("content")
            .map(|i| i.cloned().collect())
            .unwrap_or_default(),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[cfg(test)]
pub fn parse_args_from(args: &[&str]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args.iter().copied())
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "studio", &mut std::io::stdout());
}

/// Config を StudioCommand に変換する。モードや腕前が不正なら usage エラー
pub fn config_to_command(config: Config) -> Result<StudioCommand, Error> {
    if config.help {
        return Ok(StudioCommand::Help {
            language: config.language,
        });
    }
    if config.list_languages {
        return Ok(StudioCommand::ListLanguages);
    }
    if config.list_modes {
        return Ok(StudioCommand::ListModes {
            language: config.language,
        });
    }

    let mode_name = config.mode.ok_or_else(|| {
        Error::invalid_argument("No mode given. Choose one of: text, video, story, recipe.")
    })?;
    let mode = ToolMode::parse(&mode_name).ok_or_else(|| {
        Error::invalid_argument(format!(
            "Unknown mode: {}. Choose one of: text, video, story, recipe.",
            mode_name
        ))
    })?;

    let skill = match config.skill.as_deref() {
        Some(s) => SkillLevel::parse(s).ok_or_else(|| {
            Error::invalid_argument(format!(
                "Unknown skill level: {}. Choose beginner, intermediate or advanced.",
                s
            ))
        })?,
        None => SkillLevel::default(),
    };

    Ok(StudioCommand::Generate(GenerateArgs {
        mode,
        words: config.content_args,
        file: config.file,
        recipe: RecipeRequest {
            ingredients: config.ingredients.unwrap_or_default(),
            tools: config.tools.unwrap_or_default(),
            time: config.time.unwrap_or_default(),
            skill,
        },
        provider: config.provider,
        model: config.model,
        language: config.language,
        quiet: config.quiet,
    }))
}
