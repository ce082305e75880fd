use serde::Deserialize;
use serde::Serialize;

use super::Block;

/// A labeled slice of the guide document, addressable from the side nav.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Default, Debug)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn new(id: &str, title: &str, blocks: Vec<Block>) -> Section {
        return Section {
            id: id.to_string(),
            title: title.to_string(),
            blocks,
        };
    }
}

/// One entry of the side navigation list. `target` references a section id
/// the way an anchor href would, e.g. "#introduccion".
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Default, Debug)]
pub struct NavLink {
    pub label: String,
    pub target: String,
}

impl NavLink {
    pub fn new(label: &str, target: &str) -> NavLink {
        return NavLink {
            label: label.to_string(),
            target: target.to_string(),
        };
    }
}

/// Position of a section or activity block in document-line coordinates.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct Region {
    pub id: String,
    pub top: i64,
    pub height: i64,
}

impl Region {
    pub fn new(id: &str, top: i64, height: i64) -> Region {
        return Region {
            id: id.to_string(),
            top,
            height,
        };
    }
}
