//! アダプター（Outbound ポートの標準実装）

pub mod driver_generator;
pub mod std_input_source;
#[cfg(test)]
pub mod stub;
pub mod terminal_view;

pub use driver_generator::DriverContentGenerator;
pub use std_input_source::StdInputSource;
pub use terminal_view::StdioViewFactory;

#[cfg(test)]
pub use stub::{FixedInput, RecordingView, RecordingViewFactory, StubGenerator};
