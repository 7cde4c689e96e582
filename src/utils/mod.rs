// ============================================================================
// Utilities Module
// Helper functions for binaries and benchmarks
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;
