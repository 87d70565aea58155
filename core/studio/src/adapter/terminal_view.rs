//! 端末向け PanelView 実装
//!
//! 結果本文だけを stdout に出し、見出し・進行表示・エラーは stderr に出す（パイプで結果だけ取れる）。

use std::io::Write;

use common::error::Error;

use crate::domain::{PanelLabels, PanelState};
use crate::ports::outbound::{PanelView, PanelViewFactory};

pub struct TerminalView<O: Write, E: Write> {
    out: O,
    err: E,
    /// true のとき待機・生成中の表示を出さない
    quiet: bool,
}

impl TerminalView<std::io::Stdout, std::io::Stderr> {
    pub fn stdio(quiet: bool) -> Self {
        Self::new(std::io::stdout(), std::io::stderr(), quiet)
    }
}

impl<O: Write, E: Write> TerminalView<O, E> {
    pub fn new(out: O, err: E, quiet: bool) -> Self {
        Self { out, err, quiet }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}

fn io_err(e: std::io::Error) -> Error {
    Error::io_msg(format!("Failed to write to terminal: {}", e))
}

/// 末尾が改行でなければ改行を足す
fn with_trailing_newline(text: &str) -> String {
    if text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{}\n", text)
    }
}

impl<O: Write, E: Write> PanelView for TerminalView<O, E> {
    fn render(&mut self, state: &PanelState, labels: &PanelLabels) -> Result<(), Error> {
        match state {
            PanelState::Idle => {
                if !self.quiet {
                    writeln!(self.err, "== {} ==", labels.title).map_err(io_err)?;
                    writeln!(self.err, "{}", labels.output_placeholder).map_err(io_err)?;
                }
            }
            PanelState::Loading => {
                if !self.quiet {
                    writeln!(self.err, "[{}] {}", labels.busy_button, labels.loading)
                        .map_err(io_err)?;
                }
            }
            PanelState::Error(message) => {
                writeln!(self.err, "{}", labels.error_title).map_err(io_err)?;
                writeln!(self.err, "  {}", message).map_err(io_err)?;
            }
            PanelState::Result(text) => {
                self.out
                    .write_all(with_trailing_newline(text).as_bytes())
                    .map_err(io_err)?;
            }
        }
        self.out.flush().map_err(io_err)?;
        self.err.flush().map_err(io_err)
    }
}

/// 標準出力・標準エラーに描画する TerminalView を作る
#[derive(Debug, Clone, Default)]
pub struct StdioViewFactory;

impl PanelViewFactory for StdioViewFactory {
    fn create(&self, quiet: bool) -> Box<dyn PanelView> {
        Box::new(TerminalView::stdio(quiet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ToolMode;
    use common::i18n::Translator;

    fn labels() -> PanelLabels {
        ToolMode::Text.panel_labels(&Translator::default())
    }

    fn render_all(states: &[PanelState], quiet: bool) -> (String, String) {
        let mut view = TerminalView::new(Vec::new(), Vec::new(), quiet);
        for s in states {
            view.render(s, &labels()).unwrap();
        }
        let (out, err) = view.into_parts();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_result_goes_to_stdout_only() {
        let (out, err) = render_all(
            &[
                PanelState::Idle,
                PanelState::Loading,
                PanelState::Result("A short summary.".to_string()),
            ],
            false,
        );
        assert_eq!(out, "A short summary.\n");
        assert!(err.contains("== Text Summarizer =="));
        assert!(err.contains("Your summary will appear here."));
        assert!(err.contains("[Generating...] Analyzing content..."));
        assert!(!err.contains("A short summary."));
    }

    #[test]
    fn test_quiet_hides_progress_but_not_errors() {
        let (out, err) = render_all(
            &[
                PanelState::Idle,
                PanelState::Loading,
                PanelState::Error("An error occurred while trying to generate content: x".to_string()),
            ],
            true,
        );
        assert!(out.is_empty());
        assert_eq!(
            err,
            "An Error Occurred\n  An error occurred while trying to generate content: x\n"
        );
    }

    #[test]
    fn test_result_keeps_existing_trailing_newline() {
        let (out, _) = render_all(&[PanelState::Result("line\n".to_string())], true);
        assert_eq!(out, "line\n");
    }
}
