//! レシピ作成の入力（材料・器具・時間・腕前）

use common::i18n::Translator;

/// 料理の腕前
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }

    pub fn translation_key(&self) -> &'static str {
        match self {
            Self::Beginner => "skillBeginner",
            Self::Intermediate => "skillIntermediate",
            Self::Advanced => "skillAdvanced",
        }
    }
}

const DEFAULT_TOOLS: &str = "Standard kitchen tools";
const DEFAULT_TIME: &str = "No time limit";

/// レシピ要求。ingredients だけが必須
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipeRequest {
    pub ingredients: String,
    pub tools: String,
    pub time: String,
    pub skill: SkillLevel,
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() {
        default
    } else {
        value
    }
}

impl RecipeRequest {
    /// プロンプト本文（制約の列挙）。腕前は選択言語のラベルで埋め込む
    pub fn content(&self, t: &Translator) -> String {
        format!(
            "Ingredients available: {}\nCooking appliances and tools: {}\nMaximum time: {}\nMy cooking skill level is: {}",
            self.ingredients,
            or_default(&self.tools, DEFAULT_TOOLS),
            or_default(&self.time, DEFAULT_TIME),
            t.t(self.skill.translation_key()),
        )
    }
}
