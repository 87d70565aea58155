mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use common::config::StudioConfig;
use common::domain::LanguageCode;
use common::error::Error;
use common::i18n::{Translator, LANGUAGES};
use common::ports::outbound::{LogLevel, LogRecord};
use domain::{GenerateArgs, StudioCommand, ToolMode};
use ports::inbound::UseCaseRunner;
use usecase::{resolve_content, resolve_language, resolve_settings, GenerationRequest};
use wiring::{wire_studio, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl Runner {
    /// config.json を読む。ホームが解決できなければ既定値
    fn load_config(&self) -> Result<StudioConfig, Error> {
        match self.app.env_resolver.resolve_home_dir() {
            Ok(home) => StudioConfig::load(self.app.fs.as_ref(), &home),
            Err(_) => Ok(StudioConfig::default()),
        }
    }

    fn translator(&self, cli: Option<&LanguageCode>) -> Result<Translator, Error> {
        let config = self.load_config()?;
        Ok(Translator::new(resolve_language(
            cli,
            self.app.env_resolver.as_ref(),
            &config,
        )))
    }

    fn generate(&self, args: GenerateArgs) -> Result<i32, Error> {
        let config = self.load_config()?;
        let settings = resolve_settings(
            args.provider.as_ref(),
            args.model.as_ref(),
            args.language.as_ref(),
            self.app.env_resolver.as_ref(),
            &config,
        )?;

        let request = if args.mode.takes_free_text() {
            let text = resolve_content(
                &args.words,
                args.file.as_deref(),
                self.app.fs.as_ref(),
                self.app.input.as_ref(),
            )?;
            GenerationRequest::text(args.mode, text, settings.language.clone())
        } else {
            let mut recipe = args.recipe;
            // studio recipe eggs rice → 位置引数を材料として扱う
            if recipe.ingredients.trim().is_empty() {
                recipe.ingredients = args.words.join(" ");
            }
            GenerationRequest::recipe(recipe, settings.language.clone())
        };

        let use_case = self.app.generate_use_case(settings.provider);
        let mut view = self.app.view_factory.create(args.quiet);
        use_case.run(&request, view.as_mut())
    }
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(config)?;
        let command_name = cmd_name_for_log(&cmd);
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command started", "cli", "lifecycle")
                .field("command", command_name),
        );

        let result = match cmd {
            StudioCommand::Help { language } => {
                print_help(&self.translator(language.as_ref())?);
                Ok(0)
            }
            StudioCommand::ListLanguages => {
                for lang in LANGUAGES {
                    println!("{}\t{}", lang.code, lang.name);
                }
                Ok(0)
            }
            StudioCommand::ListModes { language } => {
                let t = self.translator(language.as_ref())?;
                for mode in ToolMode::ALL {
                    let keys = mode.label_keys();
                    println!("{}\t{}", mode.cli_name(), t.t(keys.tab));
                }
                Ok(0)
            }
            StudioCommand::Generate(args) => self.generate(args),
        };

        let code = result.as_ref().map_or_else(Error::exit_code, |c| *c);
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command finished", "cli", "lifecycle")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            let _ = self
                .app
                .logger
                .log(&LogRecord::new(LogLevel::Error, e.to_string(), "cli", "error"));
        }
        result
    }
}

fn cmd_name_for_log(cmd: &StudioCommand) -> &'static str {
    match cmd {
        StudioCommand::Help { .. } => "help",
        StudioCommand::ListLanguages => "list-languages",
        StudioCommand::ListModes { .. } => "list-modes",
        StudioCommand::Generate(args) => args.mode.cli_name(),
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("studio: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_studio(config.verbose);
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: studio [options] <text|video|story|recipe> [content...]");
}

fn print_help(t: &Translator) {
    println!("{} - {}", t.t("appTitle"), t.t("appDescription"));
    println!();
    println!("Usage: studio [options] <text|video|story|recipe> [content...]");
    println!();
    println!("Modes:");
    for mode in ToolMode::ALL {
        let keys = mode.label_keys();
        println!("  {:<8} {}", mode.cli_name(), t.t(keys.title));
    }
    println!();
    println!("Options:");
    println!("  -h, --help                Show this help message");
    println!("  -l, --lang <code>         Output and UI language (see --list-languages). Default: en");
    println!("  -p, --provider <name>     LLM provider: gemini (default) or echo (offline, returns the prompt)");
    println!("  -m, --model <model>       Model name. Default: gemini-2.5-flash");
    println!("  -f, --file <path>         Read the content from a file instead of the arguments");
    println!("  -q, --quiet               Only print the result (and errors)");
    println!("  -v, --verbose             Emit structured logs to stderr");
    println!("      --ingredients <list>  recipe: {} (required)", t.t("ingredientsLabel"));
    println!("      --tools <list>        recipe: {}", t.t("toolsLabel"));
    println!("      --time <limit>        recipe: {}", t.t("timeLabel"));
    println!("      --skill <level>       recipe: {} (beginner, intermediate, advanced)", t.t("skillLabel"));
    println!("      --list-languages      List output languages");
    println!("      --list-modes          List modes");
    println!("      --generate <shell>    Generate shell completion script (bash, zsh, fish)");
    println!();
    println!("Content is taken from the arguments, then --file, then piped stdin.");
    println!();
    println!("Environment:");
    println!("  GEMINI_API_KEY / API_KEY  Gemini API key");
    println!("  STUDIO_HOME               Home directory (config.json, logs/). Default: $XDG_CONFIG_HOME/studio");
    println!("  STUDIO_LANG               Default language");
    println!("  STUDIO_PROVIDER           Default provider");
    println!("  STUDIO_MODEL              Default model");
    println!();
    println!("Examples:");
    println!("  studio text \"$(cat article.txt)\"");
    println!("  studio video -f transcript.txt -l ja");
    println!("  echo \"a lighthouse keeper who befriends a storm\" | studio story");
    println!("  studio recipe --ingredients \"eggs, rice, spinach\" --time \"20 minutes\" --skill beginner");
    println!();
    println!("{}", t.t("footerPoweredBy"));
}
