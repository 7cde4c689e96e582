// ============================================================================
// Field Handler Interface
// Defines the contract for consuming decoded decimal fields
// ============================================================================

use crate::numeric::{DecimalError, ReadOnlyDecimalFloat};

/// Receives decimal fields as the decoder finds them.
///
/// The value is borrowed from the decoder's scratch instance and is only
/// valid for the duration of the call; copy it out if it must be kept.
pub trait DecimalFieldHandler {
    /// Handle a successfully parsed decimal field
    fn on_decimal(&mut self, tag: u32, value: &ReadOnlyDecimalFloat);

    /// Handle a decimal field that was skipped under the `Skip` policy
    fn on_invalid(&mut self, tag: u32, error: DecimalError) {
        let _ = (tag, error);
    }
}

impl<H: DecimalFieldHandler + ?Sized> DecimalFieldHandler for &mut H {
    fn on_decimal(&mut self, tag: u32, value: &ReadOnlyDecimalFloat) {
        (**self).on_decimal(tag, value);
    }

    fn on_invalid(&mut self, tag: u32, error: DecimalError) {
        (**self).on_invalid(tag, error);
    }
}

/// No-op handler, useful for validation-only passes
pub struct NoOpFieldHandler;

impl DecimalFieldHandler for NoOpFieldHandler {
    fn on_decimal(&mut self, _tag: u32, _value: &ReadOnlyDecimalFloat) {
        // Do nothing
    }
}

/// Logging handler
pub struct LoggingFieldHandler;

impl DecimalFieldHandler for LoggingFieldHandler {
    fn on_decimal(&mut self, tag: u32, value: &ReadOnlyDecimalFloat) {
        tracing::debug!(tag, %value, "Decoded decimal field");
    }

    fn on_invalid(&mut self, tag: u32, error: DecimalError) {
        tracing::warn!(tag, %error, "Skipped invalid decimal field");
    }
}

/// Records every field it sees
#[derive(Debug, Default)]
pub struct CollectingFieldHandler {
    pub decimals: Vec<(u32, ReadOnlyDecimalFloat)>,
    pub invalid: Vec<(u32, DecimalError)>,
}

impl CollectingFieldHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// First decoded value for `tag`
    pub fn get(&self, tag: u32) -> Option<&ReadOnlyDecimalFloat> {
        self.decimals
            .iter()
            .find(|(field, _)| *field == tag)
            .map(|(_, value)| value)
    }
}

impl DecimalFieldHandler for CollectingFieldHandler {
    fn on_decimal(&mut self, tag: u32, value: &ReadOnlyDecimalFloat) {
        self.decimals.push((tag, *value));
    }

    fn on_invalid(&mut self, tag: u32, error: DecimalError) {
        self.invalid.push((tag, error));
    }
}
