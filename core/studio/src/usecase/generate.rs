//! 生成ユースケース: 入力判定 → 生成中 → 1 回の生成 → エラー / 結果

use std::sync::Arc;

use common::domain::LanguageCode;
use common::error::Error;
use common::i18n::Translator;
use common::ports::outbound::{Log, LogLevel, LogRecord};

use crate::domain::{Panel, PanelState, RecipeRequest, ToolMode};
use crate::ports::outbound::{ContentGenerator, PanelView};

/// 1 回の生成要求
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub mode: ToolMode,
    /// 自由記述モードの本文（レシピでは使わない）
    pub text: String,
    pub recipe: RecipeRequest,
    pub language: LanguageCode,
}

impl GenerationRequest {
    pub fn text(mode: ToolMode, text: impl Into<String>, language: LanguageCode) -> Self {
        Self {
            mode,
            text: text.into(),
            recipe: RecipeRequest::default(),
            language,
        }
    }

    pub fn recipe(recipe: RecipeRequest, language: LanguageCode) -> Self {
        Self {
            mode: ToolMode::Recipe,
            text: String::new(),
            recipe,
            language,
        }
    }

    /// 送信可否の判定に使う必須入力
    fn required_input(&self) -> &str {
        if self.mode.takes_free_text() {
            &self.text
        } else {
            &self.recipe.ingredients
        }
    }

    fn content(&self, t: &Translator) -> String {
        if self.mode.takes_free_text() {
            self.text.clone()
        } else {
            self.recipe.content(t)
        }
    }
}

fn missing_input_message(mode: ToolMode) -> String {
    if mode.takes_free_text() {
        format!(
            "No content provided for '{}'. Pass text as arguments, with --file, or on stdin.",
            mode.cli_name()
        )
    } else {
        "No ingredients provided. Use --ingredients to list what you have.".to_string()
    }
}

/// 応答が空だったときの終了コード
const EMPTY_REPLY_EXIT_CODE: i32 = 69;

pub struct GenerateUseCase {
    generator: Arc<dyn ContentGenerator>,
    logger: Arc<dyn Log>,
}

impl GenerateUseCase {
    pub fn new(generator: Arc<dyn ContentGenerator>, logger: Arc<dyn Log>) -> Self {
        Self { generator, logger }
    }

    fn log(&self, record: LogRecord) {
        let _ = self.logger.log(&record);
    }

    /// 状態遷移ごとに view へ描画し、終了コードを返す
    ///
    /// 必須入力が空なら要求は送らず usage エラー。生成の失敗はエラー状態として描画し、
    /// `Err` ではなく非 0 の終了コードで返す。
    pub fn run(&self, request: &GenerationRequest, view: &mut dyn PanelView) -> Result<i32, Error> {
        let t = Translator::new(request.language.clone());
        let labels = request.mode.panel_labels(&t);
        let mut panel = Panel::new();
        view.render(panel.state(), &labels)?;

        if !panel.begin(request.required_input()) {
            return Err(Error::invalid_argument(missing_input_message(request.mode)));
        }
        view.render(panel.state(), &labels)?;

        let content = request.content(&t);
        self.log(
            LogRecord::new(LogLevel::Info, "generation requested", "usecase", "generation")
                .field("mode", request.mode.key())
                .field("language", request.language.to_string())
                .field("model", self.generator.model_label())
                .field("content_chars", content.chars().count()),
        );

        let outcome = self
            .generator
            .generate(request.mode.prompt_prefix(), &content, &request.language);
        let failure_code = outcome.as_ref().err().map(Error::exit_code);
        panel.finish(outcome.map_err(|e| e.to_string()));
        view.render(panel.state(), &labels)?;

        match panel.state() {
            PanelState::Result(text) => {
                self.log(
                    LogRecord::new(LogLevel::Info, "generation succeeded", "usecase", "generation")
                        .field("mode", request.mode.key())
                        .field("result_chars", text.chars().count()),
                );
                Ok(0)
            }
            PanelState::Error(message) => {
                self.log(
                    LogRecord::new(LogLevel::Warn, "generation failed", "usecase", "generation")
                        .field("mode", request.mode.key())
                        .field("error", message.as_str()),
                );
                Ok(failure_code.unwrap_or(EMPTY_REPLY_EXIT_CODE))
            }
            PanelState::Idle | PanelState::Loading => Err(Error::system(format!(
                "generation ended in unexpected state: {}",
                panel.state().name()
            ))),
        }
    }
}
