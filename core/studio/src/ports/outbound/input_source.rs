//! 標準入力 Outbound ポート

use common::error::Error;

pub trait InputSource: Send + Sync {
    /// パイプ等で渡された標準入力を全部読む。端末に接続されている場合は None
    fn read_piped_stdin(&self) -> Result<Option<String>, Error>;
}
