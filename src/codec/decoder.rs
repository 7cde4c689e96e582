// ============================================================================
// Decimal Field Decoder
// Walks tag=value fields and parses decimal tags in place
// ============================================================================

use super::config::{DecimalFieldConfig, InvalidDecimalPolicy};
use super::errors::{CodecError, CodecResult};
use crate::interfaces::DecimalFieldHandler;
use crate::numeric::DecimalFloat;

/// Decodes the decimal fields of FIX messages.
///
/// One `DecimalFloat` is reused for every field, so a decode pass does not
/// allocate. Fields whose tag is not configured are skipped without being
/// inspected beyond their framing.
pub struct DecimalFieldDecoder<H: DecimalFieldHandler> {
    config: DecimalFieldConfig,
    handler: H,
    scratch: DecimalFloat,
}

impl<H: DecimalFieldHandler> DecimalFieldDecoder<H> {
    /// Create a decoder after validating `config`.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the configuration is rejected.
    pub fn new(config: DecimalFieldConfig, handler: H) -> CodecResult<Self> {
        config.validate().map_err(CodecError::InvalidConfig)?;

        tracing::debug!(
            tags = ?config.decimal_tags.as_slice(),
            policy = ?config.on_invalid,
            "Created decimal field decoder"
        );

        Ok(Self {
            config,
            handler,
            scratch: DecimalFloat::zero(),
        })
    }

    pub fn config(&self) -> &DecimalFieldConfig {
        &self.config
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Decode every decimal field in `message`.
    ///
    /// `message` must be a sequence of `tag=value<delimiter>` fields; the
    /// last field must be terminated. Returns the number of decimal fields
    /// handed to the handler.
    ///
    /// # Errors
    /// - `MalformedField` for a missing `=`, a non-numeric tag or an
    ///   unterminated field
    /// - `Decimal` for a bad decimal value under the `Reject` policy
    pub fn decode(&mut self, message: &[u8]) -> CodecResult<usize> {
        let delimiter = self.config.delimiter;
        let mut decoded = 0;
        let mut start = 0;

        while start < message.len() {
            let (tag, value_start, value_end) = split_field(message, start, delimiter)?;

            if self.config.is_decimal_tag(tag) {
                let length = value_end - value_start;
                match self.scratch.parse_from_range(message, value_start, length) {
                    Ok(value) => {
                        tracing::trace!(tag, value = %value, "Decimal field");
                        self.handler.on_decimal(tag, value.as_read_only());
                        decoded += 1;
                    },
                    Err(source) => match self.config.on_invalid {
                        InvalidDecimalPolicy::Reject => {
                            tracing::debug!(tag, error = %source, "Rejected decimal field");
                            return Err(CodecError::Decimal { tag, source });
                        },
                        InvalidDecimalPolicy::Skip => {
                            tracing::debug!(tag, error = %source, "Skipped decimal field");
                            self.handler.on_invalid(tag, source);
                        },
                    },
                }
            }

            start = value_end + 1;
        }

        Ok(decoded)
    }
}

/// Locate one field starting at `start`: `(tag, value_start, value_end)`.
///
/// `value_end` indexes the delimiter.
fn split_field(message: &[u8], start: usize, delimiter: u8) -> CodecResult<(u32, usize, usize)> {
    let malformed = CodecError::MalformedField { offset: start };
    let field = &message[start..];

    let equals = field
        .iter()
        .position(|&byte| byte == b'=')
        .ok_or_else(|| malformed.clone())?;
    let tag = parse_tag(&field[..equals]).ok_or_else(|| malformed.clone())?;

    let value_start = start + equals + 1;
    let value_len = message[value_start..]
        .iter()
        .position(|&byte| byte == delimiter)
        .ok_or(malformed)?;

    Ok((tag, value_start, value_start + value_len))
}

/// Parse a positive decimal tag number.
fn parse_tag(digits: &[u8]) -> Option<u32> {
    if digits.is_empty() {
        return None;
    }
    digits.iter().try_fold(0_u32, |tag, &byte| {
        if byte.is_ascii_digit() {
            tag.checked_mul(10)?.checked_add(u32::from(byte - b'0'))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::config::PIPE;
    use crate::interfaces::{CollectingFieldHandler, NoOpFieldHandler};
    use crate::numeric::{DecimalError, ReadOnlyDecimalFloat};

    fn d(value: i64, scale: i32) -> ReadOnlyDecimalFloat {
        ReadOnlyDecimalFloat::new(value, scale).unwrap()
    }

    fn pipe_decoder(policy: InvalidDecimalPolicy) -> DecimalFieldDecoder<CollectingFieldHandler> {
        let config = DecimalFieldConfig::execution_report()
            .with_delimiter(PIPE)
            .with_policy(policy);
        DecimalFieldDecoder::new(config, CollectingFieldHandler::new()).unwrap()
    }

    #[test]
    fn test_parse_tag() {
        assert_eq!(parse_tag(b"44"), Some(44));
        assert_eq!(parse_tag(b""), None);
        assert_eq!(parse_tag(b"4a"), None);
        assert_eq!(parse_tag(b"99999999999"), None);
    }

    #[test]
    fn test_decode_execution_report() {
        let mut decoder = pipe_decoder(InvalidDecimalPolicy::Reject);
        let message = b"8=FIX.4.4|35=8|44=101.250|38=500|32=200|31=101.25|151=300|6=0|";

        let decoded = decoder.decode(message).unwrap();

        assert_eq!(decoded, 6);
        let handler = decoder.handler();
        assert_eq!(handler.get(44), Some(&d(10125, 2)));
        assert_eq!(handler.get(31), handler.get(44));
        assert_eq!(handler.get(38), Some(&d(500, 0)));
        assert_eq!(handler.get(6), Some(&ReadOnlyDecimalFloat::ZERO));
        assert_eq!(handler.get(35), None);
    }

    #[test]
    fn test_decode_with_soh() {
        let config = DecimalFieldConfig::market_data();
        let mut decoder = DecimalFieldDecoder::new(config, CollectingFieldHandler::new()).unwrap();

        let decoded = decoder.decode(b"35=W\x01270=-1.5\x01271=1e3\x01").unwrap();

        assert_eq!(decoded, 2);
        let handler = decoder.into_handler();
        assert_eq!(handler.get(270), Some(&d(-15, 1)));
        assert_eq!(handler.get(271), Some(&d(1000, 0)));
    }

    #[test]
    fn test_reject_policy_surfaces_tag() {
        let mut decoder = pipe_decoder(InvalidDecimalPolicy::Reject);

        let result = decoder.decode(b"44=1.5|38=99999999999999990000000|");

        assert_eq!(
            result,
            Err(CodecError::Decimal {
                tag: 38,
                source: DecimalError::RangeOverflow
            })
        );
    }

    #[test]
    fn test_skip_policy_reports_and_continues() {
        let mut decoder = pipe_decoder(InvalidDecimalPolicy::Skip);

        let decoded = decoder.decode(b"44=abc|38=10|31=|").unwrap();

        assert_eq!(decoded, 1);
        let handler = decoder.handler();
        assert_eq!(handler.get(38), Some(&d(10, 0)));
        assert_eq!(
            handler.invalid,
            vec![
                (44, DecimalError::InvalidFormat),
                (31, DecimalError::InvalidFormat)
            ]
        );
    }

    #[test]
    fn test_malformed_fields() {
        let mut decoder = pipe_decoder(InvalidDecimalPolicy::Reject);

        assert_eq!(
            decoder.decode(b"44=1|novalue|"),
            Err(CodecError::MalformedField { offset: 5 })
        );
        assert_eq!(
            decoder.decode(b"4x=1|"),
            Err(CodecError::MalformedField { offset: 0 })
        );
        assert_eq!(
            decoder.decode(b"44=1|38=2"),
            Err(CodecError::MalformedField { offset: 5 })
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = DecimalFieldDecoder::new(DecimalFieldConfig::new(&[]), NoOpFieldHandler);
        assert!(matches!(result, Err(CodecError::InvalidConfig(_))));
    }

    #[test]
    fn test_decoder_reused_across_messages() {
        let mut handler = CollectingFieldHandler::new();
        {
            let config = DecimalFieldConfig::new(&[44]).with_delimiter(PIPE);
            let mut decoder = DecimalFieldDecoder::new(config, &mut handler).unwrap();
            assert_eq!(decoder.decode(b"44=1.1|").unwrap(), 1);
            assert_eq!(decoder.decode(b"44=2.2|").unwrap(), 1);
            assert_eq!(decoder.decode(b"").unwrap(), 0);
        }
        assert_eq!(handler.decimals, vec![(44, d(11, 1)), (44, d(22, 1))]);
    }
}
