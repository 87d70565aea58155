//! 標準入力の InputSource 実装

use std::io::{IsTerminal, Read};

use common::error::Error;

use crate::ports::outbound::InputSource;

#[derive(Debug, Clone, Default)]
pub struct StdInputSource;

impl InputSource for StdInputSource {
    fn read_piped_stdin(&self) -> Result<Option<String>, Error> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Ok(None);
        }
        let mut buf = String::new();
        stdin
            .lock()
            .read_to_string(&mut buf)
            .map_err(|e| Error::io_msg(format!("Failed to read stdin: {}", e)))?;
        Ok(Some(buf))
    }
}
