//! studio 固有のドメイン型（型と不変条件）

pub mod command;
pub mod mode;
pub mod panel;
pub mod recipe;

pub use command::{GenerateArgs, StudioCommand};
pub use mode::{PanelLabels, ToolMode};
pub use panel::{Panel, PanelState};
pub use recipe::{RecipeRequest, SkillLevel};
