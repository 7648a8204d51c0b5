// ============================================================================
// SERVICES - API simulada + datos de demo
// ============================================================================

pub mod api;
pub mod mock_data;

pub use api::{ApiError, ApiResult};
