//! Shared value helpers: parsing user input into chain values and
//! rendering chain values back into the exact strings the UI shows.

use alloy_primitives::utils::parse_ether;
use alloy_primitives::{Address, U256};
use chrono::{DateTime, Utc};

use crate::VaultError;

/// Smallest displayed amount increment: 10^13 wei = 0.00001 ETH.
const DISPLAY_STEP_WEI: u64 = 10_000_000_000_000;

/// `"{d}d {h}h {m}m"` from remaining seconds, or the literal `"Expired"`
/// once nothing remains.
pub fn countdown(seconds: i64) -> String {
    if seconds <= 0 {
        return "Expired".to_string();
    }
    let d = seconds / 86_400;
    let h = (seconds % 86_400) / 3_600;
    let m = (seconds % 3_600) / 60;
    format!("{d}d {h}h {m}m")
}

/// Wei → decimal ether string with at most 5 fractional digits, half-up
/// rounded, trailing zeros trimmed: `1 ETH → "1"`, `0.5 ETH → "0.5"`,
/// `1.000005 ETH → "1.00001"`.
pub fn format_amount(wei: U256) -> String {
    let step = U256::from(DISPLAY_STEP_WEI);
    let scaled = (wei + step / U256::from(2)) / step;
    let whole = scaled / U256::from(100_000u64);
    let frac = (scaled % U256::from(100_000u64)).to::<u32>();
    if frac == 0 {
        return whole.to_string();
    }
    let digits = format!("{frac:05}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

/// Deposit-field text → wei. Absent, zero, and unparsable all collapse to
/// [`VaultError::MissingAmount`]; the UI shows one message for the three.
pub fn parse_amount(input: &str) -> Result<U256, VaultError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(VaultError::MissingAmount);
    }
    let wei = parse_ether(input).map_err(|_| VaultError::MissingAmount)?;
    if wei.is_zero() {
        return Err(VaultError::MissingAmount);
    }
    Ok(wei)
}

/// Address-field text → canonical 20-byte address. Accepts any hex casing;
/// case-insensitive equality falls out of comparing the parsed bytes.
pub fn parse_address(input: &str) -> Result<Address, VaultError> {
    input.trim().parse::<Address>().map_err(|_| VaultError::InvalidAddress)
}

/// Dashboard short form: first six and last four characters of the
/// checksummed hex, `"0x1234...abcd"`.
pub fn short_address(addr: Address) -> String {
    let s = addr.to_string();
    format!("{}...{}", &s[..6], &s[s.len() - 4..])
}

/// Shareable claim-page URL for an owner's vaults.
pub fn claim_link(origin: &str, owner: Address) -> String {
    format!("{origin}/?tab=claim&search={owner}")
}

/// Unix timestamp → `"Mar 5, 2026, 3:04 PM"` (UTC). Timestamps outside
/// chrono's range render as `"Invalid Date"`, as the original page did.
pub fn format_date(timestamp: u64) -> String {
    match i64::try_from(timestamp)
        .ok()
        .and_then(|t| DateTime::<Utc>::from_timestamp(t, 0))
    {
        Some(dt) => dt.format("%b %-d, %Y, %-I:%M %p").to_string(),
        None => "Invalid Date".to_string(),
    }
}
