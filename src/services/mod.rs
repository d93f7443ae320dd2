pub mod comparison;
pub mod comparison_service;
pub mod eligibility;
pub mod metrics;
pub mod normalize;
pub mod report;
pub mod scoring;
pub mod search;

pub use comparison_service::ComparisonService;
pub use search::DebouncedSearch;
