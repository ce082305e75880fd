use serde::Deserialize;
use serde::Serialize;

/// A table drawn inside the guide, headers plus zero or more rows.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Default, Debug)]
pub struct TableSpec {
    pub caption: Option<String>,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableSpec {
    pub fn new(caption: Option<&str>, header: &[&str], rows: &[&[&str]]) -> TableSpec {
        return TableSpec {
            caption: caption.map(|e| e.to_string()),
            header: header.iter().map(|e| e.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|e| e.to_string()).collect())
                .collect(),
        };
    }
}

/// A hands-on exercise block, revealed on scroll like its host section.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Default, Debug)]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub body: String,
}

/// One piece of section content, rendered top to bottom in order.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum Block {
    Paragraph(String),
    Table(TableSpec),
    Activity(Activity),
    /// Placeholder the step sequencer renders its current view into.
    StepPanel,
}
