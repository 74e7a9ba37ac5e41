use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One key/value resource read from the search path.
///
/// Records feed diagnostics only; scanning never influences engine
/// selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestRecord {
    /// Where the resource was found.
    pub source: String,
    /// Main attributes, in file order.
    pub attributes: IndexMap<String, String>,
    /// Named sub-sections, in file order.
    pub sections: IndexMap<String, IndexMap<String, String>>,
}

impl ManifestRecord {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }
}
