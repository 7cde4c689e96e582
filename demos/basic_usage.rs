// ============================================================================
// Basic Usage Example
// ============================================================================

use fix_decimal::codec::PIPE;
use fix_decimal::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    fix_decimal::utils::init_logging();

    println!("=== FIX Decimal Example ===\n");

    // Same value, different spellings
    let a: ReadOnlyDecimalFloat = "5".parse().unwrap();
    let b: ReadOnlyDecimalFloat = "5.00".parse().unwrap();
    let c: ReadOnlyDecimalFloat = "0.5e1".parse().unwrap();
    println!("5 == 5.00 == 0.5e1: {}", a == b && b == c);

    // Ordering across scales
    let mut prices: Vec<ReadOnlyDecimalFloat> = ["101.25", "101.2", "-3", "0.045", "101.250001"]
        .iter()
        .map(|text| text.parse().unwrap())
        .collect();
    prices.sort();
    println!("Sorted: {:?}\n", prices.iter().map(|p| p.to_string()).collect::<Vec<_>>());

    // Decode an execution report with one reused scratch value
    let inbound = b"8=FIX.4.4|35=8|44=101.2500|38=500|32=200|31=101.25|151=300|6=101.25|";
    let config = DecimalFieldConfig::execution_report().with_delimiter(PIPE);
    let mut decoder = DecimalFieldDecoder::new(config, CollectingFieldHandler::new()).unwrap();

    let decoded = decoder.decode(inbound).unwrap();
    println!("Decoded {} decimal fields:", decoded);
    for (tag, value) in &decoder.handler().decimals {
        println!("  {:>3} = {}", tag, value);
    }

    // Re-encode canonically
    let mut outbound = [0u8; 128];
    let mut pos = 0;
    for (tag, value) in &decoder.handler().decimals {
        pos += encode_decimal_field(&mut outbound, pos, *tag, value, PIPE).unwrap();
    }
    println!("\nCanonical: {}", String::from_utf8_lossy(&outbound[..pos]));

    // Failures are typed
    for text in ["99999999999999990000000", "1e2.3", ""] {
        match text.parse::<ReadOnlyDecimalFloat>() {
            Ok(value) => println!("{:?} -> {}", text, value),
            Err(error) => println!("{:?} -> {}", text, error),
        }
    }

    println!("\n=== Example Complete ===");
}
