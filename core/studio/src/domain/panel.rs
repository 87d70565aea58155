//! 出力パネルの状態（待機・生成中・エラー・結果）
//!
//! 状態は常にどれか 1 つ。生成中は再送信できない。

/// 生成失敗時メッセージの先頭
pub const GENERATION_ERROR_PREFIX: &str = "An error occurred while trying to generate content";

/// 失敗詳細から表示用メッセージを作る
pub fn generation_error_message(detail: &str) -> String {
    format!("{}: {}", GENERATION_ERROR_PREFIX, detail)
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Result(String),
}

impl PanelState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Error(_) => "error",
            Self::Result(_) => "result",
        }
    }
}

/// 1 つのモードの出力パネル
#[derive(Debug, Clone, Default)]
pub struct Panel {
    state: PanelState,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == PanelState::Loading
    }

    /// 送信ボタンが押せるか（生成中でなく、必須入力が空白以外を含む）
    pub fn can_submit(&self, required_input: &str) -> bool {
        !self.is_loading() && !required_input.trim().is_empty()
    }

    /// 生成を開始する。押せない状態なら何も変えず false
    pub fn begin(&mut self, required_input: &str) -> bool {
        if !self.can_submit(required_input) {
            return false;
        }
        // 前回のエラー・結果はここで消える
        self.state = PanelState::Loading;
        true
    }

    /// 生成結果を反映する。空の応答はエラー扱い
    pub fn finish(&mut self, outcome: Result<String, String>) {
        self.state = match outcome {
            Ok(text) if !text.trim().is_empty() => PanelState::Result(text),
            Ok(_) => PanelState::Error(generation_error_message("The model returned an empty response.")),
            Err(detail) => PanelState::Error(generation_error_message(&detail)),
        };
    }
}
