//! CLI（引数解析と Config → StudioCommand 変換）

pub mod args;

pub use args::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
#[cfg(test)]
pub use args::parse_args_from;
