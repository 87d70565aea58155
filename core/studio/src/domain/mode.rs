//! 生成モード（テキスト要約・動画要約・物語・レシピ）
//!
//! モード間の違いはプロンプトの指示文と入力項目、表示ラベルだけ。

use common::i18n::Translator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolMode {
    Text,
    Video,
    Story,
    Recipe,
}

/// 表示ラベルの翻訳キー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeLabelKeys {
    pub tab: &'static str,
    pub title: &'static str,
    pub placeholder: &'static str,
    pub button: &'static str,
    pub output_placeholder: &'static str,
    pub loading: &'static str,
}

/// 翻訳済みの表示ラベル（出力パネルの描画に使う）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLabels {
    pub title: String,
    pub button: String,
    pub busy_button: String,
    pub output_placeholder: String,
    pub loading: String,
    pub error_title: String,
}

const RECIPE_PROMPT: &str = "You are an expert chef. Create a delicious recipe based on the following constraints. Provide a creative name for the recipe, a list of ingredients, clear step-by-step instructions, and the approximate total time. The recipe should be easy to follow for the specified skill level. Format the response neatly.";

impl ToolMode {
    pub const ALL: [ToolMode; 4] = [Self::Text, Self::Video, Self::Story, Self::Recipe];

    /// CLI 名（text / video / story / recipe）または設定キー（text-summarizer 等）から解析
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.cli_name() == s || m.key() == s)
    }

    pub fn cli_name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Video => "video",
            Self::Story => "story",
            Self::Recipe => "recipe",
        }
    }

    /// ログ等で使う安定したキー
    pub fn key(&self) -> &'static str {
        match self {
            Self::Text => "text-summarizer",
            Self::Video => "video-summarizer",
            Self::Story => "story-writer",
            Self::Recipe => "recipe-creator",
        }
    }

    /// プロンプト先頭の指示文
    pub fn prompt_prefix(&self) -> &'static str {
        match self {
            Self::Text => "Summarize the following text concisely and accurately:",
            Self::Video => "Summarize the key points from the following video transcript:",
            Self::Story => "Write a creative and engaging story based on the following idea:",
            Self::Recipe => RECIPE_PROMPT,
        }
    }

    /// 自由記述 1 欄だけを入力に取るモードか（レシピ以外）
    pub fn takes_free_text(&self) -> bool {
        !matches!(self, Self::Recipe)
    }

    pub fn label_keys(&self) -> ModeLabelKeys {
        match self {
            Self::Text => ModeLabelKeys {
                tab: "summarizeTextTab",
                title: "textSummarizerTitle",
                placeholder: "textSummarizerPlaceholder",
                button: "summarizeTextButton",
                output_placeholder: "summaryOutputPlaceholder",
                loading: "analyzingContentLoading",
            },
            Self::Video => ModeLabelKeys {
                tab: "summarizeVideoTab",
                title: "videoSummarizerTitle",
                placeholder: "videoSummarizerPlaceholder",
                button: "summarizeVideoButton",
                output_placeholder: "summaryOutputPlaceholder",
                loading: "analyzingTranscriptLoading",
            },
            Self::Story => ModeLabelKeys {
                tab: "writeStoryTab",
                title: "storyWriterTitle",
                placeholder: "storyWriterPlaceholder",
                button: "writeStoryButton",
                output_placeholder: "storyOutputPlaceholder",
                loading: "writingStoryLoading",
            },
            Self::Recipe => ModeLabelKeys {
                tab: "createRecipeTab",
                title: "recipeCreatorTitle",
                placeholder: "ingredientsPlaceholder",
                button: "createRecipeButton",
                output_placeholder: "recipeOutputPlaceholder",
                loading: "creatingRecipeLoading",
            },
        }
    }

    pub fn panel_labels(&self, t: &Translator) -> PanelLabels {
        let keys = self.label_keys();
        PanelLabels {
            title: t.t(keys.title).to_string(),
            button: t.t(keys.button).to_string(),
            busy_button: t.t("generatingButton").to_string(),
            output_placeholder: t.t(keys.output_placeholder).to_string(),
            loading: t.t(keys.loading).to_string(),
            error_title: t.t("errorTitle").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::domain::LanguageCode;

    #[test]
    fn test_parse_cli_names_and_keys() {
        assert_eq!(ToolMode::parse("text"), Some(ToolMode::Text));
        assert_eq!(ToolMode::parse("VIDEO"), Some(ToolMode::Video));
        assert_eq!(ToolMode::parse("story-writer"), Some(ToolMode::Story));
        assert_eq!(ToolMode::parse("recipe-creator"), Some(ToolMode::Recipe));
        assert_eq!(ToolMode::parse("poem"), None);
    }

    #[test]
    fn test_prompt_prefixes_are_distinct() {
        let prefixes: std::collections::BTreeSet<&str> =
            ToolMode::ALL.iter().map(|m| m.prompt_prefix()).collect();
        assert_eq!(prefixes.len(), 4);
        assert!(ToolMode::Recipe.prompt_prefix().starts_with("You are an expert chef."));
    }

    #[test]
    fn test_only_recipe_has_structured_input() {
        assert!(ToolMode::Text.takes_free_text());
        assert!(ToolMode::Story.takes_free_text());
        assert!(!ToolMode::Recipe.takes_free_text());
    }

    #[test]
    fn test_panel_labels_localized() {
        let labels = ToolMode::Story.panel_labels(&Translator::new(LanguageCode::new("es")));
        assert_eq!(labels.title, "Escritor de historias");
        assert_eq!(labels.busy_button, "Generando...");
        assert_eq!(labels.loading, "Escribiendo tu historia...");
    }

    #[test]
    fn test_panel_labels_english() {
        let labels = ToolMode::Text.panel_labels(&Translator::default());
        assert_eq!(labels.output_placeholder, "Your summary will appear here.");
        assert_eq!(labels.error_title, "An Error Occurred");
    }
}
