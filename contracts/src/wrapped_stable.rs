//! Wrapped Stablecoin Contract
//!
//! CEP-18 compatible wrapper token backed 1:1 by a basket of accepted
//! stablecoins. Depositing any accepted stablecoin mints the same amount
//! of wrapper token; redeeming burns wrapper tokens and pays out the
//! requested stablecoin from custody. The admin manages the accepted set
//! and can sweep custody balances in emergencies.
//!
//! Accounting rules:
//! - Mint happens only in `deposit`, after the stablecoin pull succeeded.
//! - Burn happens only in `redeem`, before the stablecoin payout.
//! - Custody balances are never tracked locally; the stablecoin's own
//!   `balance_of(self)` is the authoritative reserve figure.
//! - Every accepted stablecoin must use the wrapper's 6-decimal precision;
//!   registration rejects mismatches instead of assuming equivalence.

use odra::prelude::*;
use odra::casper_types::{U256, RuntimeArgs, runtime_args, Key};
use odra::casper_types::bytesrepr::ToBytes;
use odra::CallDef;
use crate::errors::WrapError;
use crate::events::{
    AdminChanged, Approval, Deposit, Redeem, ReservesWithdrawn, StablecoinAdded,
    StablecoinRemoved, Transfer,
};
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;

/// Fixed wrapper precision. Accepted stablecoins must match it.
pub const WRAP_DECIMALS: u8 = 6;

const CEP18_NAME_KEY: &str = "name";
const CEP18_SYMBOL_KEY: &str = "symbol";
const CEP18_DECIMALS_KEY: &str = "decimals";
const CEP18_TOTAL_SUPPLY_KEY: &str = "total_supply";
const CEP18_BALANCES_DICT: &str = "balances";
const CEP18_ALLOWANCES_DICT: &str = "allowances";

/// Wrapped Stablecoin Contract
#[odra::module]
pub struct WrappedStable {
    /// Token name
    name: Var<String>,
    /// Token symbol
    symbol: Var<String>,
    /// Decimals (always 6)
    decimals: Var<u8>,
    /// Total supply
    total_supply: Var<U256>,
    /// Balance mapping
    balances: Mapping<Address, U256>,
    /// Allowance mapping (owner -> spender -> amount)
    allowances: Mapping<(Address, Address), U256>,
    /// Admin address
    admin: Var<Address>,
    /// Accepted stablecoins, dense, swap-remove on removal
    supported_stables: Var<Vec<Address>>,
    /// Membership flag, consistent with `supported_stables`
    is_supported: Mapping<Address, bool>,
    /// Reentrancy lock
    locked: Var<bool>,
}

#[odra::module]
impl WrappedStable {
    /// Initialize the wrapper. The caller becomes admin.
    ///
    /// Candidate stablecoins that are the zero address, duplicates, or do
    /// not use 6 decimals are silently skipped.
    pub fn init(&mut self, name: String, symbol: String, initial_stables: Vec<Address>) {
        self.name.set(name.clone());
        self.symbol.set(symbol.clone());
        self.decimals.set(WRAP_DECIMALS);
        self.total_supply.set(U256::zero());
        self.admin.set(self.env().caller());
        self.locked.set(false);

        self.env().init_dictionary(CEP18_BALANCES_DICT);
        self.env().init_dictionary(CEP18_ALLOWANCES_DICT);
        self.env().set_named_value(CEP18_NAME_KEY, name);
        self.env().set_named_value(CEP18_SYMBOL_KEY, symbol);
        self.env().set_named_value(CEP18_DECIMALS_KEY, WRAP_DECIMALS);
        self.env().set_named_value(CEP18_TOTAL_SUPPLY_KEY, U256::zero());

        let mut accepted: Vec<Address> = Vec::new();
        for stable in initial_stables {
            if is_zero_address(stable) || accepted.contains(&stable) {
                continue;
            }
            if self.stable_decimals(stable) != WRAP_DECIMALS {
                continue;
            }
            self.is_supported.set(&stable, true);
            accepted.push(stable);
        }
        self.supported_stables.set(accepted);
    }

    // ========== Registry Functions (Admin) ==========

    /// Add a stablecoin to the accepted set (admin only)
    pub fn add_stablecoin(&mut self, stablecoin: Address) {
        self.require_admin();
        self.acquire_lock();

        if is_zero_address(stablecoin) {
            self.env().revert(WrapError::InvalidStablecoin);
        }
        if self.is_supported_stable(stablecoin) {
            self.env().revert(WrapError::AlreadyRegistered);
        }
        if self.stable_decimals(stablecoin) != WRAP_DECIMALS {
            self.env().revert(WrapError::DecimalsMismatch);
        }

        let mut stables = self.supported_stables.get().unwrap_or_default();
        stables.push(stablecoin);
        self.supported_stables.set(stables);
        self.is_supported.set(&stablecoin, true);

        self.env().emit_event(StablecoinAdded { stablecoin });
        self.release_lock();
    }

    /// Remove a stablecoin from the accepted set (admin only)
    ///
    /// Swap-removes from the dense list, so the relative order of the
    /// surviving entries changes. Custody balances are left untouched;
    /// only `withdraw_reserves` can recover them afterwards.
    pub fn remove_stablecoin(&mut self, stablecoin: Address) {
        self.require_admin();

        if !self.is_supported_stable(stablecoin) {
            self.env().revert(WrapError::NotRegistered);
        }

        self.is_supported.set(&stablecoin, false);

        let mut stables = self.supported_stables.get().unwrap_or_default();
        if let Some(index) = stables.iter().position(|s| *s == stablecoin) {
            stables.swap_remove(index);
        }
        self.supported_stables.set(stables);

        self.env().emit_event(StablecoinRemoved { stablecoin });
    }

    /// Check if a stablecoin is currently accepted
    pub fn is_supported_stable(&self, stablecoin: Address) -> bool {
        self.is_supported.get(&stablecoin).unwrap_or(false)
    }

    /// Get all currently accepted stablecoins
    ///
    /// Order reflects swap-remove history, not insertion order.
    pub fn get_all_supported_stables(&self) -> Vec<Address> {
        self.supported_stables.get().unwrap_or_default()
    }

    // ========== Deposit / Redeem ==========

    /// Deposit an accepted stablecoin and mint the same amount of wrapper
    ///
    /// The caller must have approved this contract for `amount` on the
    /// stablecoin beforehand. The custody balance is snapshotted around
    /// the pull; anything other than an exact `amount` delta (e.g. a
    /// fee-on-transfer token) reverts the whole operation.
    pub fn deposit(&mut self, stablecoin: Address, amount: U256) {
        self.acquire_lock();

        if !self.is_supported_stable(stablecoin) {
            self.env().revert(WrapError::UnsupportedStablecoin);
        }
        if amount.is_zero() {
            self.env().revert(WrapError::InvalidAmount);
        }

        let caller = self.env().caller();
        let custody = self.env().self_address();

        let balance_before = self.stable_balance_of(stablecoin, custody);
        self.stable_transfer_from(stablecoin, caller, custody, amount);
        let balance_after = self.stable_balance_of(stablecoin, custody);

        if balance_after.saturating_sub(balance_before) != amount {
            self.env().revert(WrapError::TransferAmountMismatch);
        }

        self.mint_internal(caller, amount);

        self.env().emit_event(Deposit {
            account: caller,
            stablecoin,
            amount,
        });
        self.release_lock();
    }

    /// Burn wrapper tokens and pay out the requested stablecoin
    ///
    /// Burns before paying out, so a reentrant call can never observe
    /// wrapper supply that is no longer backed.
    pub fn redeem(&mut self, stablecoin: Address, amount: U256) {
        self.acquire_lock();

        if !self.is_supported_stable(stablecoin) {
            self.env().revert(WrapError::UnsupportedStablecoin);
        }
        if amount.is_zero() {
            self.env().revert(WrapError::InvalidAmount);
        }

        let custody = self.env().self_address();
        if self.stable_balance_of(stablecoin, custody) < amount {
            self.env().revert(WrapError::InsufficientReserves);
        }

        let caller = self.env().caller();
        self.burn_internal(caller, amount);
        self.stable_transfer(stablecoin, caller, amount);

        self.env().emit_event(Redeem {
            account: caller,
            stablecoin,
            amount,
        });
        self.release_lock();
    }

    /// Get the current custody balance of a stablecoin
    ///
    /// Read live from the stablecoin's own ledger; well-defined even for
    /// stablecoins that are no longer accepted.
    pub fn reserves_of(&self, stablecoin: Address) -> U256 {
        self.stable_balance_of(stablecoin, self.env().self_address())
    }

    // ========== Reserve Sweep (Admin) ==========

    /// Sweep the entire custody balance of a stablecoin (admin only)
    ///
    /// Unconditional on registry membership: balances of removed
    /// stablecoins, and reserves backing outstanding wrapper supply, can
    /// both be swept. No partial withdrawal mode exists.
    pub fn withdraw_reserves(&mut self, stablecoin: Address, recipient: Address) {
        self.require_admin();
        self.acquire_lock();

        if is_zero_address(recipient) {
            self.env().revert(WrapError::InvalidRecipient);
        }

        let balance = self.stable_balance_of(stablecoin, self.env().self_address());
        if balance.is_zero() {
            self.env().revert(WrapError::NoReserves);
        }

        self.stable_transfer(stablecoin, recipient, balance);

        self.env().emit_event(ReservesWithdrawn {
            stablecoin,
            recipient,
            amount: balance,
        });
        self.release_lock();
    }

    // ========== Admin Functions ==========

    /// Transfer admin to new address (admin only)
    ///
    /// The zero address is rejected; it would leave every restricted
    /// operation permanently unreachable.
    pub fn transfer_admin(&mut self, new_admin: Address) {
        self.require_admin();
        if is_zero_address(new_admin) {
            self.env().revert(WrapError::InvalidRecipient);
        }
        self.admin.set(new_admin);
        self.env().emit_event(AdminChanged { new_admin });
    }

    /// Get the admin address
    pub fn get_admin(&self) -> Option<Address> {
        self.admin.get()
    }

    /// Check if an address is the admin
    pub fn is_admin(&self, caller: Address) -> bool {
        self.admin.get().map_or(false, |admin| admin == caller)
    }

    // ========== CEP-18 Standard Functions ==========

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
        self.decimals.get().unwrap_or(WRAP_DECIMALS)
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

    /// Transfer wrapper tokens to recipient
    pub fn transfer(&mut self, recipient: Address, amount: U256) -> bool {
        let sender = self.env().caller();
        self.transfer_internal(sender, recipient, amount);
        true
    }

    /// Approve spender to spend wrapper tokens
    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let owner = self.env().caller();
        self.approve_internal(owner, spender, amount);
        true
    }

    /// Transfer wrapper tokens from owner to recipient (requires allowance)
    pub fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool {
        let spender = self.env().caller();

        let current_allowance = self.allowance(owner, spender);
        if current_allowance < amount {
            self.env().revert(WrapError::InsufficientAllowance);
        }

        self.transfer_internal(owner, recipient, amount);
        self.approve_internal(owner, spender, current_allowance - amount);
        true
    }

    // ========== Internal Functions ==========

    fn transfer_internal(&mut self, from: Address, to: Address, amount: U256) {
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            self.env().revert(WrapError::InsufficientBalance);
        }

        let new_from_balance = from_balance - amount;
        self.balances.set(&from, new_from_balance);
        self.set_balance_cep18(from, new_from_balance);

        let to_balance = self.balance_of(to);
        let new_to_balance = to_balance + amount;
        self.balances.set(&to, new_to_balance);
        self.set_balance_cep18(to, new_to_balance);

        self.env().emit_event(Transfer {
            from: Some(from),
            to: Some(to),
            amount,
        });
    }

    fn approve_internal(&mut self, owner: Address, spender: Address, amount: U256) {
        self.allowances.set(&(owner, spender), amount);
        self.set_allowance_cep18(owner, spender, amount);

        self.env().emit_event(Approval {
            owner,
            spender,
            amount,
        });
    }

    fn mint_internal(&mut self, to: Address, amount: U256) {
        let new_balance = self.balance_of(to) + amount;
        self.balances.set(&to, new_balance);
        self.set_balance_cep18(to, new_balance);

        let new_supply = self.total_supply() + amount;
        self.total_supply.set(new_supply);
        self.set_total_supply_cep18(new_supply);

        self.env().emit_event(Transfer {
            from: None,
            to: Some(to),
            amount,
        });
    }

    fn burn_internal(&mut self, from: Address, amount: U256) {
        let current_balance = self.balance_of(from);
        if current_balance < amount {
            self.env().revert(WrapError::InsufficientBalance);
        }

        let new_balance = current_balance - amount;
        self.balances.set(&from, new_balance);
        self.set_balance_cep18(from, new_balance);

        let new_supply = self.total_supply() - amount;
        self.total_supply.set(new_supply);
        self.set_total_supply_cep18(new_supply);

        self.env().emit_event(Transfer {
            from: Some(from),
            to: None,
            amount,
        });
    }

    // ========== Stablecoin Cross-Contract Calls ==========
    //
    // Reserve stablecoins are CEP-18 tokens exposing `transfer`,
    // `transfer_from`, `balance_of`, and `decimals`. `transfer` and
    // `transfer_from` return `bool` and must reject on insufficient
    // balance/allowance rather than silently truncate.

    fn stable_balance_of(&self, stablecoin: Address, account: Address) -> U256 {
        let args = runtime_args! {
            "account" => account
        };
        let call_def = CallDef::new("balance_of", false, args);
        self.env().call_contract(stablecoin, call_def)
    }

    fn stable_decimals(&self, stablecoin: Address) -> u8 {
        let call_def = CallDef::new("decimals", false, RuntimeArgs::new());
        self.env().call_contract(stablecoin, call_def)
    }

    fn stable_transfer(&self, stablecoin: Address, recipient: Address, amount: U256) {
        let args = runtime_args! {
            "recipient" => recipient,
            "amount" => amount
        };
        let call_def = CallDef::new("transfer", true, args);
        let success: bool = self.env().call_contract(stablecoin, call_def);
        if !success {
            self.env().revert(WrapError::StableTransferFailed);
        }
    }

    fn stable_transfer_from(&self, stablecoin: Address, owner: Address, recipient: Address, amount: U256) {
        let args = runtime_args! {
            "owner" => owner,
            "recipient" => recipient,
            "amount" => amount
        };
        let call_def = CallDef::new("transfer_from", true, args);
        let success: bool = self.env().call_contract(stablecoin, call_def);
        if !success {
            self.env().revert(WrapError::StableTransferFailed);
        }
    }

    // ========== CEP-18 Named-Key Mirror ==========

    fn set_balance_cep18(&self, owner: Address, amount: U256) {
        let key = Self::cep18_balance_key(owner);
        self.env().set_dictionary_value(CEP18_BALANCES_DICT, key.as_bytes(), amount);
    }

    fn set_allowance_cep18(&self, owner: Address, spender: Address, amount: U256) {
        let key = Self::cep18_allowance_key(owner, spender);
        self.env().set_dictionary_value(CEP18_ALLOWANCES_DICT, key.as_bytes(), amount);
    }

    fn set_total_supply_cep18(&self, amount: U256) {
        self.env().set_named_value(CEP18_TOTAL_SUPPLY_KEY, amount);
    }

    fn cep18_balance_key(owner: Address) -> String {
        let key = Key::from(owner);
        let bytes = key.to_bytes().unwrap_or_default();
        BASE64_STANDARD.encode(bytes)
    }

    fn cep18_allowance_key(owner: Address, spender: Address) -> String {
        let owner_key = Key::from(owner);
        let spender_key = Key::from(spender);
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&owner_key.to_bytes().unwrap_or_default());
        bytes.extend_from_slice(&spender_key.to_bytes().unwrap_or_default());
        BASE64_STANDARD.encode(bytes)
    }

    // ========== Guards ==========

    fn require_admin(&self) {
        let caller = self.env().caller();
        if !self.is_admin(caller) {
            self.env().revert(WrapError::Unauthorized);
        }
    }

    fn acquire_lock(&mut self) {
        if self.locked.get().unwrap_or(false) {
            self.env().revert(WrapError::ReentrantCall);
        }
        self.locked.set(true);
    }

    fn release_lock(&mut self) {
        self.locked.set(false);
    }
}

/// Check if an address is the zero address of either variant.
///
/// Serializes through `Key`: one tag byte followed by the 32-byte hash.
pub fn is_zero_address(address: Address) -> bool {
    let bytes = Key::from(address).to_bytes().unwrap_or_default();
    bytes.len() > 1 && bytes[1..].iter().all(|b| *b == 0)
}
