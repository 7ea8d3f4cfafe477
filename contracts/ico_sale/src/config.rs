//! Sale parameters. They are compiled in rather than passed to the constructor, so a
//! deployed sale can never be misconfigured on these axes.

/// One whole payment-token unit in base units (18 decimals).
pub const UNIT: i128 = 1_000_000_000_000_000_000;

/// Maximum cumulative payment the sale accepts.
pub const CAP: i128 = 1_000 * UNIT;

/// Seconds after deployment before claims unlock.
pub const LOCK_DURATION: u64 = 120;

/// SCM base units minted per payment-token base unit.
pub const CONVERSION_RATE: i128 = 10;
