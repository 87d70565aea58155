//! 出力パネル描画 Outbound ポート
//!
//! usecase は状態が変わるたびに render を呼ぶ。端末・テスト用の記録など実装を差し替える。

use crate::domain::{PanelLabels, PanelState};
use common::error::Error;

pub trait PanelView {
    fn render(&mut self, state: &PanelState, labels: &PanelLabels) -> Result<(), Error>;
}

/// 1 回の実行ごとに PanelView を作る（-q / --quiet を受け取る）
pub trait PanelViewFactory: Send + Sync {
    fn create(&self, quiet: bool) -> Box<dyn PanelView>;
}
