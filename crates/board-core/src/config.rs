//! Board Configuration

/// Settings the board is opened with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Key the whole board is stored under
    pub storage_key: String,
    /// Title given to a list created without one
    pub default_list_title: String,
}

impl BoardConfig {
    pub const DEFAULT_STORAGE_KEY: &'static str = "trelloList";
    pub const DEFAULT_LIST_TITLE: &'static str = "New List";

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: Self::DEFAULT_STORAGE_KEY.to_string(),
            default_list_title: Self::DEFAULT_LIST_TITLE.to_string(),
        }
    }
}
