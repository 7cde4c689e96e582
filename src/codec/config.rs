// ============================================================================
// Decimal Field Configuration
// Which FIX tags carry decimals and how the decoder treats bad values
// ============================================================================

use smallvec::{smallvec, SmallVec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Standard FIX field delimiter (SOH)
pub const SOH: u8 = 0x01;

/// Pipe delimiter, common in logs and test fixtures
pub const PIPE: u8 = b'|';

// ============================================================================
// Invalid Decimal Policy
// ============================================================================

/// What the decoder does when a configured tag holds a bad decimal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InvalidDecimalPolicy {
    /// Abort decoding and surface the error with its tag
    #[default]
    Reject,

    /// Report the error to the handler, log it, and continue
    Skip,
}

// ============================================================================
// Field Configuration
// ============================================================================

/// Describes which tags of a message are decimal fields.
///
/// This is the slice of a message dictionary the decimal codec needs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalFieldConfig {
    /// Tags whose values are parsed as decimals
    pub decimal_tags: SmallVec<[u32; 8]>,

    /// Byte terminating each `tag=value` field
    pub delimiter: u8,

    /// Handling of malformed or out-of-range decimals
    pub on_invalid: InvalidDecimalPolicy,
}

impl DecimalFieldConfig {
    /// Create a configuration for the given tags with SOH framing
    pub fn new(decimal_tags: &[u32]) -> Self {
        Self {
            decimal_tags: SmallVec::from_slice(decimal_tags),
            delimiter: SOH,
            on_invalid: InvalidDecimalPolicy::Reject,
        }
    }

    /// Builder method: Add one more decimal tag
    pub fn with_tag(mut self, tag: u32) -> Self {
        self.decimal_tags.push(tag);
        self
    }

    /// Builder method: Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder method: Set the invalid decimal policy
    pub fn with_policy(mut self, policy: InvalidDecimalPolicy) -> Self {
        self.on_invalid = policy;
        self
    }

    /// True if `tag` is configured as a decimal field
    #[inline]
    pub fn is_decimal_tag(&self, tag: u32) -> bool {
        self.decimal_tags.contains(&tag)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.decimal_tags.is_empty() {
            return Err("At least one decimal tag is required".to_string());
        }

        if self.decimal_tags.contains(&0) {
            return Err("Tag 0 is not a valid FIX tag".to_string());
        }

        for (index, tag) in self.decimal_tags.iter().enumerate() {
            if self.decimal_tags[index + 1..].contains(tag) {
                return Err(format!("Duplicate decimal tag {}", tag));
            }
        }

        if self.delimiter == b'=' || self.delimiter.is_ascii_digit() {
            return Err(format!(
                "Delimiter {:#04x} collides with tag=value syntax",
                self.delimiter
            ));
        }

        Ok(())
    }

    /// Load a configuration from JSON
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl DecimalFieldConfig {
    /// Order entry (NewOrderSingle, OrderCancelReplaceRequest)
    /// - OrderQty(38), Price(44), StopPx(99)
    pub fn order_entry() -> Self {
        Self {
            decimal_tags: smallvec![38, 44, 99],
            ..Self::new(&[])
        }
    }

    /// Execution reports
    /// - AvgPx(6), CumQty(14), LastPx(31), LastQty(32), OrderQty(38),
    ///   Price(44), LeavesQty(151)
    pub fn execution_report() -> Self {
        Self {
            decimal_tags: smallvec![6, 14, 31, 32, 38, 44, 151],
            ..Self::new(&[])
        }
    }

    /// Market data snapshots and incremental refreshes
    /// - MDEntryPx(270), MDEntrySize(271)
    pub fn market_data() -> Self {
        Self {
            decimal_tags: smallvec![270, 271],
            ..Self::new(&[])
        }
    }
}
