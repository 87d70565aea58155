//! studio コマンドの enum（Command Pattern）

use std::path::PathBuf;

use crate::domain::{RecipeRequest, ToolMode};
use common::domain::{LanguageCode, ModelName, ProviderName};

/// 生成コマンドの入力（CLI から受け取ったそのまま。既定値の解決は usecase で行う）
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateArgs {
    pub mode: ToolMode,
    /// 位置引数の本文
    pub words: Vec<String>,
    /// -f / --file
    pub file: Option<PathBuf>,
    pub recipe: RecipeRequest,
    pub provider: Option<ProviderName>,
    pub model: Option<ModelName>,
    pub language: Option<LanguageCode>,
    pub quiet: bool,
}

/// studio の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum StudioCommand {
    /// ヘルプ表示（言語指定があればその言語のラベルで）
    Help { language: Option<LanguageCode> },
    ListLanguages,
    ListModes { language: Option<LanguageCode> },
    Generate(GenerateArgs),
}
