pub mod aggregator;
pub mod generator;
pub mod pools;
pub mod store;

pub use aggregator::Aggregator;
pub use generator::SyntheticGenerator;
pub use store::{CatalogStore, FetchState};
