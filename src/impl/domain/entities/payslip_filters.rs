#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde_derive::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Latest period first.
    #[default]
    Newest,
    Oldest,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayslipFilters {
    /// Falls back to the configured default when not set.
    pub sort_order: Option<SortOrder>,
    pub year: Option<i32>,
    pub search_text: Option<String>,
}

// --

impl PayslipFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sorted(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    pub fn in_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn matching(mut self, search_text: impl Into<String>) -> Self {
        self.search_text = Some(search_text.into());
        self
    }
}
