// ============================================================================
// UTILS MODULE - Storage + formato
// ============================================================================

pub mod storage;
pub mod format;

pub use storage::{browser_storage, LocalStorage, MemoryStorage, NullStorage, StorageBackend};
pub use format::{format_date, format_date_time};
