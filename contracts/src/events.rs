//! Protocol event definitions.
//!
//! Registry mutations, deposit/redeem flows, reserve sweeps, and the
//! CEP-18 surface of the wrapper token each emit an event so off-chain
//! indexers can reconstruct the full accounting history.

use odra::prelude::*;
use odra::casper_types::U256;

/// A stablecoin was added to the accepted set.
#[odra::event]
pub struct StablecoinAdded {
    /// Stablecoin contract address
    pub stablecoin: Address,
}

/// A stablecoin was removed from the accepted set.
#[odra::event]
pub struct StablecoinRemoved {
    /// Stablecoin contract address
    pub stablecoin: Address,
}

/// A deposit minted wrapper tokens against a stablecoin.
#[odra::event]
pub struct Deposit {
    /// Depositor
    pub account: Address,
    /// Stablecoin pulled into custody
    pub stablecoin: Address,
    /// Amount deposited and minted (6 decimals)
    pub amount: U256,
}

/// A redemption burned wrapper tokens for a stablecoin.
#[odra::event]
pub struct Redeem {
    /// Redeemer
    pub account: Address,
    /// Stablecoin paid out of custody
    pub stablecoin: Address,
    /// Amount burned and paid out (6 decimals)
    pub amount: U256,
}

/// The admin swept the full custody balance of a stablecoin.
#[odra::event]
pub struct ReservesWithdrawn {
    /// Stablecoin swept
    pub stablecoin: Address,
    /// Recipient of the swept balance
    pub recipient: Address,
    /// Full custody balance at sweep time
    pub amount: U256,
}

/// The admin capability moved to a new address.
#[odra::event]
pub struct AdminChanged {
    /// New admin
    pub new_admin: Address,
}

/// CEP-18 transfer. Mints carry `from: None`, burns carry `to: None`.
#[odra::event]
pub struct Transfer {
    pub from: Option<Address>,
    pub to: Option<Address>,
    pub amount: U256,
}

/// CEP-18 approval.
#[odra::event]
pub struct Approval {
    pub owner: Address,
    pub spender: Address,
    pub amount: U256,
}
