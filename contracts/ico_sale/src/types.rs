use soroban_sdk::{contracttype, Address};

/// Immutable sale configuration, written once by the constructor.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleConfig {
    /// Receives every investment the moment it is made.
    pub beneficiary: Address,
    /// SEP-41 token investors pay with.
    pub accepted_token: Address,
    /// SCM token whose minter is this sale.
    pub reward_token: Address,
    /// Ledger timestamp of deployment.
    pub sale_start: u64,
    /// First timestamp at which `claim` succeeds.
    pub unlock_at: u64,
}
