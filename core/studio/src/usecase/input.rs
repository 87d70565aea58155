//! 生成本文の取得（位置引数 → --file → パイプされた標準入力）

use std::path::Path;

use common::error::Error;
use common::ports::outbound::FileSystem;

use crate::ports::outbound::InputSource;

/// 本文を取得する。どこにも無ければ空文字列（送信可否の判定は Panel に任せる）
pub fn resolve_content(
    words: &[String],
    file: Option<&Path>,
    fs: &dyn FileSystem,
    input: &dyn InputSource,
) -> Result<String, Error> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    if let Some(path) = file {
        return fs.read_to_string(path);
    }
    Ok(input.read_piped_stdin()?.unwrap_or_default())
}
