pub mod builder;
pub mod filename;
pub mod sheet;

pub use builder::{assemble, QuoteBuilder, QuoteRequest, UNNAMED_CUSTOMER};
pub use filename::{parse_quote_filename, QuoteFilename};
pub use sheet::{QuoteSheet, METADATA_LABELS};
