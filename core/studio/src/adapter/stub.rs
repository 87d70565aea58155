//! テスト用: 固定応答の ContentGenerator / 状態を記録する PanelView / 固定の標準入力

use std::sync::{Arc, Mutex};

use common::domain::LanguageCode;
use common::error::Error;

use crate::domain::{PanelLabels, PanelState};
use crate::ports::outbound::{ContentGenerator, InputSource, PanelView, PanelViewFactory};

/// generate に渡された引数
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateCall {
    pub prompt_prefix: String,
    pub content: String,
    pub language: LanguageCode,
}

/// テスト用: 固定の結果を返し、呼び出しを記録する
pub struct StubGenerator {
    response: Result<String, Error>,
    pub calls: Mutex<Vec<GenerateCall>>,
}

impl StubGenerator {
    pub fn ok(text: &str) -> Self {
        Self {
            response: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn err(error: Error) -> Self {
        Self {
            response: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<GenerateCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl ContentGenerator for StubGenerator {
    fn generate(
        &self,
        prompt_prefix: &str,
        content: &str,
        language: &LanguageCode,
    ) -> Result<String, Error> {
        self.calls.lock().unwrap().push(GenerateCall {
            prompt_prefix: prompt_prefix.to_string(),
            content: content.to_string(),
            language: language.clone(),
        });
        self.response.clone()
    }

    fn model_label(&self) -> String {
        "stub/stub".to_string()
    }
}

/// テスト用: render された状態を順に記録する
#[derive(Default)]
pub struct RecordingView {
    pub states: Vec<PanelState>,
    pub labels: Vec<PanelLabels>,
}

impl PanelView for RecordingView {
    fn render(&mut self, state: &PanelState, labels: &PanelLabels) -> Result<(), Error> {
        self.states.push(state.clone());
        self.labels.push(labels.clone());
        Ok(())
    }
}

/// テスト用: 作った view の描画状態を共有の Vec に記録する
#[derive(Default)]
pub struct RecordingViewFactory {
    states: Arc<Mutex<Vec<PanelState>>>,
}

impl RecordingViewFactory {
    pub fn states(&self) -> Vec<PanelState> {
        self.states.lock().unwrap().clone()
    }

    /// 最後に描画された結果本文
    pub fn result_text(&self) -> Option<String> {
        self.states().into_iter().rev().find_map(|s| match s {
            PanelState::Result(text) => Some(text),
            _ => None,
        })
    }
}

struct SharedRecordingView {
    states: Arc<Mutex<Vec<PanelState>>>,
}

impl PanelView for SharedRecordingView {
    fn render(&mut self, state: &PanelState, _labels: &PanelLabels) -> Result<(), Error> {
        self.states.lock().unwrap().push(state.clone());
        Ok(())
    }
}

impl PanelViewFactory for RecordingViewFactory {
    fn create(&self, _quiet: bool) -> Box<dyn PanelView> {
        Box::new(SharedRecordingView {
            states: Arc::clone(&self.states),
        })
    }
}

/// テスト用: 固定の標準入力（None は端末扱い）
pub struct FixedInput(pub Option<String>);

impl InputSource for FixedInput {
    fn read_piped_stdin(&self) -> Result<Option<String>, Error> {
        Ok(self.0.clone())
    }
}
