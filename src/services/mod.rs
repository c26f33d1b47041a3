pub mod quote_service;
pub mod region_loader;

pub use quote_service::QuoteService;
pub use region_loader::{LoadError, LoadSummary, ReferenceDataStatus, RegionLoader};
