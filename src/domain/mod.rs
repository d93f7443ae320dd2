mod catalog;
mod course;
mod history;
mod metrics;
pub mod slots;
pub(crate) mod storage;

pub use catalog::CourseCatalog;
pub use course::{Course, CourseUniversityLink, Listing};
pub use history::{HistoryEntry, RecentComparisons, DEFAULT_HISTORY_LIMIT};
pub use metrics::{BestValue, Comparison, MetricRow, NormalizedMetrics, RawMetrics};
pub use slots::{
    reduce, reduce_all, ComparisonSlots, LinkState, SlotAction, SlotState, SLOT_COUNT,
};
pub use storage::{Storage, StorageKeys};
