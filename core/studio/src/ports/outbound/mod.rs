//! Outbound ポート: studio が外界を使うための trait

pub mod content_generator;
pub mod input_source;
pub mod panel_view;

pub use content_generator::ContentGenerator;
pub use input_source::InputSource;
pub use panel_view::{PanelView, PanelViewFactory};
