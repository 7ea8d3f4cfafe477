#![allow(dead_code)]

extern crate std;

use crate::config::{CAP, CONVERSION_RATE};

/// The sale never accepts more than `CAP` in total.
pub fn assert_total_within_cap(total_raised: i128) {
    assert!(
        (0..=CAP).contains(&total_raised),
        "total raised {} outside [0, {}]",
        total_raised,
        CAP
    );
}

/// An accepted investment moves the total by exactly `amount`.
pub fn assert_investment_recorded(total_before: i128, total_after: i128, amount: i128) {
    assert_eq!(
        total_after,
        total_before + amount,
        "investment not recorded: {} + {} != {}",
        total_before,
        amount,
        total_after
    );
}

/// A rejected call leaves the observed value untouched.
pub fn assert_unchanged(before: i128, after: i128, what: &str) {
    assert_eq!(before, after, "{} changed by a rejected call", what);
}

/// A claim mints exactly `invested × CONVERSION_RATE`.
pub fn assert_claim_conversion(invested: i128, minted: i128) {
    assert_eq!(
        minted,
        invested * CONVERSION_RATE,
        "claim minted {} for {} invested",
        minted,
        invested
    );
}
