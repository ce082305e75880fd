//! Terminal walkthrough of relational database normalization.
//!
//! This crate renders a fixed, fully-inlined guide inside the terminal,
//! featuring a side navigation list with scroll-spy highlighting, an
//! interactive step-by-step normalization example, and blocks that fade in
//! the first time they scroll into view. It is driven entirely by terminal
//! events and keeps no state beyond the current step and scroll position.

pub mod application;
pub mod configuration;
pub mod domain;

pub use application::ui::{destruct_terminal_for_panic, start};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{Event, Guide, Step, StepView};
pub use domain::services::{AppState, AppStateProps};
