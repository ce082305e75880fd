use serde::Deserialize;
use serde::Serialize;

use super::TableSpec;

/// One fixed, pre-authored step of the normalization walkthrough.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Default, Debug)]
pub struct Step {
    pub title: String,
    pub description: String,
    pub tables: Vec<TableSpec>,
}

impl Step {
    pub fn new(title: &str, description: &str, tables: Vec<TableSpec>) -> Step {
        return Step {
            title: title.to_string(),
            description: description.to_string(),
            tables,
        };
    }
}

/// Structured description of a rendered step, decoupled from the terminal.
/// The host commits it to the screen; the view owns no live UI resources.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StepView {
    pub badge: String,
    pub title: String,
    pub description: String,
    pub tables: Vec<TableSpec>,
    pub controls: StepControls,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StepControls {
    pub retreat_enabled: bool,
    pub advance_enabled: bool,
}
