//! Mock Stablecoin Contract
//!
//! Minimal CEP-18 token with a faucet-style `mint`, used by the test
//! suite to stand in for external reserve stablecoins. Misbehavior is
//! configurable so the wrapper's defenses can be exercised: decimals
//! for precision-mismatch handling, a skimmed transfer fee for
//! fee-on-transfer tokens, a `false`-returning transfer mode, and a
//! reentrancy hook that calls back into a target contract mid-transfer.

use odra::prelude::*;
use odra::casper_types::{U256, runtime_args};
use odra::CallDef;
use crate::errors::WrapError;

/// Mock CEP-18 stablecoin
#[odra::module]
pub struct MockStable {
    /// Token name
    name: Var<String>,
    /// Token symbol
    symbol: Var<String>,
    /// Decimals
    decimals: Var<u8>,
    /// Total supply
    total_supply: Var<U256>,
    /// Balance mapping
    balances: Mapping<Address, U256>,
    /// Allowance mapping (owner -> spender -> amount)
    allowances: Mapping<(Address, Address), U256>,
    /// Fee skimmed from every transfer (fee-on-transfer simulation)
    transfer_fee: Var<U256>,
    /// When set, transfers return false without moving funds
    fail_transfers: Var<bool>,
    /// When set, `transfer` calls `deposit` back on this contract
    reenter_into: Var<Option<Address>>,
}

#[odra::module]
impl MockStable {
    /// Initialize the mock stablecoin
    pub fn init(&mut self, name: String, symbol: String, decimals: u8) {
        self.name.set(name);
        self.symbol.set(symbol);
        self.decimals.set(decimals);
        self.total_supply.set(U256::zero());
        self.transfer_fee.set(U256::zero());
        self.fail_transfers.set(false);
        self.reenter_into.set(None);
    }

    /// Skim `fee` from every subsequent transfer
    pub fn set_transfer_fee(&mut self, fee: U256) {
        self.transfer_fee.set(fee);
    }

    /// Make subsequent transfers return false without moving funds
    pub fn set_fail_transfers(&mut self, fail: bool) {
        self.fail_transfers.set(fail);
    }

    /// Make `transfer` reenter `target` via its `deposit` entry point
    pub fn set_reenter_into(&mut self, target: Address) {
        self.reenter_into.set(Some(target));
    }

    /// Get token name
    pub fn name(&self) -> String {
        self.name.get().unwrap_or_default()
    }

    /// Get token symbol
    pub fn symbol(&self) -> String {
        self.symbol.get().unwrap_or_default()
    }

    /// Get decimals
    pub fn decimals(&self) -> u8 {
        self.decimals.get().unwrap_or(0)
    }

    /// Get total supply
    pub fn total_supply(&self) -> U256 {
        self.total_supply.get().unwrap_or(U256::zero())
    }

    /// Get balance of an account
    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).unwrap_or(U256::zero())
    }

    /// Get allowance for spender
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(&(owner, spender)).unwrap_or(U256::zero())
    }

    /// Faucet mint, unrestricted
    pub fn mint(&mut self, to: Address, amount: U256) {
        let new_balance = self.balance_of(to) + amount;
        self.balances.set(&to, new_balance);
        self.total_supply.set(self.total_supply() + amount);
    }

    /// Transfer tokens to recipient
    pub fn transfer(&mut self, recipient: Address, amount: U256) -> bool {
        if self.fail_transfers.get().unwrap_or(false) {
            return false;
        }

        if let Some(target) = self.reenter_into.get().flatten() {
            let args = runtime_args! {
                "stablecoin" => self.env().self_address(),
                "amount" => amount
            };
            let call_def = CallDef::new("deposit", true, args);
            self.env().call_contract::<()>(target, call_def);
        }

        let sender = self.env().caller();
        self.transfer_internal(sender, recipient, amount);
        true
    }

    /// Approve spender to spend tokens
    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let owner = self.env().caller();
        self.allowances.set(&(owner, spender), amount);
        true
    }

    /// Transfer tokens from owner to recipient (requires allowance)
    pub fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool {
        if self.fail_transfers.get().unwrap_or(false) {
            return false;
        }

        let spender = self.env().caller();

        let current_allowance = self.allowance(owner, spender);
        if current_allowance < amount {
            self.env().revert(WrapError::InsufficientAllowance);
        }

        self.transfer_internal(owner, recipient, amount);
        self.allowances.set(&(owner, spender), current_allowance - amount);
        true
    }

    fn transfer_internal(&mut self, from: Address, to: Address, amount: U256) {
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            self.env().revert(WrapError::InsufficientBalance);
        }

        // Fee-on-transfer: the sender is debited in full, the recipient
        // is credited net of the fee, and the fee leaves the supply.
        let fee = core::cmp::min(self.transfer_fee.get().unwrap_or(U256::zero()), amount);

        self.balances.set(&from, from_balance - amount);
        self.balances.set(&to, self.balance_of(to) + amount - fee);
        self.total_supply.set(self.total_supply() - fee);
    }
}
