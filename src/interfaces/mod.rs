// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod field_handler;

pub use field_handler::{
    CollectingFieldHandler, DecimalFieldHandler, LoggingFieldHandler, NoOpFieldHandler,
};
