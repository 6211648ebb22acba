/// Labels of the metadata block written above the item table.
pub const METADATA_LABELS: &[&str] = &[
    "Line",
    "Process",
    "Inventory",
    "Tool",
    "Customer",
    "Source",
    "Created",
];

/// A fully assembled quote, independent of the format it is written in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuoteSheet {
    pub title: String,
    pub metadata: Vec<(String, String)>,
    pub header: Vec<String>,
    pub items: Vec<Vec<String>>,
}

impl QuoteSheet {
    pub fn metadata_value(&self, label: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, value)| value.as_str())
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Widest row in the sheet, used to pad rows for writers that need rectangular output.
    pub fn column_count(&self) -> usize {
        self.items
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0)
    }
}
