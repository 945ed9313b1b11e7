pub mod connectors;

pub use connectors::{CatalogSummary, CsvConnector, DataValidator, RequiredColumn};
