//! CSPR-Wrap Contracts
//!
//! Casper-native wrapped stablecoin: a CEP-18 wrapper token minted 1:1
//! against deposits of accepted reserve stablecoins.
//!
//! ## Architecture
//!
//! - **WrappedStable**: the core contract — accepted-stablecoin registry,
//!   CEP-18 wrapper ledger, deposit/redeem accounting, and the admin
//!   reserve sweep
//! - **MockStable**: faucet-style CEP-18 token used by the test suite as
//!   a stand-in reserve stablecoin
//!
//! ## Accounting invariants
//!
//! - Wrapper tokens are minted only on deposit and burned only on redeem.
//! - Per-stablecoin custody balances are read live from each stablecoin's
//!   own ledger, never cached locally.
//! - A redeem is rejected unless custody of the requested stablecoin
//!   covers it, independent of the caller's wrapper balance.

#![cfg_attr(target_arch = "wasm32", no_std)]

#[cfg(target_arch = "wasm32")]
extern crate alloc;

// Re-export odra for downstream usage
pub use odra;

pub mod errors;
pub mod events;
pub mod mock_stable;
pub mod wrapped_stable;
