//! Protocol error definitions.

use odra::prelude::*;

/// Wrapped stablecoin protocol errors
#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum WrapError {
    // Registry errors (1xx)
    InvalidStablecoin = 100,
    AlreadyRegistered = 101,
    NotRegistered = 102,
    DecimalsMismatch = 103,

    // Deposit/redeem errors (2xx)
    UnsupportedStablecoin = 200,
    InvalidAmount = 201,
    InsufficientReserves = 202,
    TransferAmountMismatch = 203,

    // Token errors (3xx)
    InsufficientBalance = 300,
    InsufficientAllowance = 301,
    StableTransferFailed = 302,

    // Access control errors (4xx)
    Unauthorized = 400,

    // Reserve sweep errors (5xx)
    InvalidRecipient = 500,
    NoReserves = 501,

    // Execution errors (6xx)
    ReentrantCall = 600,
}

impl WrapError {
    pub const fn message(&self) -> &'static str {
        match self {
            // Registry
            WrapError::InvalidStablecoin => "Stablecoin address is the zero address",
            WrapError::AlreadyRegistered => "Stablecoin already registered",
            WrapError::NotRegistered => "Stablecoin not registered",
            WrapError::DecimalsMismatch => "Stablecoin decimals do not match wrapper precision",

            // Deposit/redeem
            WrapError::UnsupportedStablecoin => "Stablecoin not supported",
            WrapError::InvalidAmount => "Amount must be greater than zero",
            WrapError::InsufficientReserves => "Insufficient reserves of requested stablecoin",
            WrapError::TransferAmountMismatch => "Received amount differs from requested amount",

            // Token
            WrapError::InsufficientBalance => "Insufficient token balance",
            WrapError::InsufficientAllowance => "Insufficient token allowance",
            WrapError::StableTransferFailed => "Stablecoin transfer failed",

            // Access control
            WrapError::Unauthorized => "Unauthorized: caller is not admin",

            // Reserve sweep
            WrapError::InvalidRecipient => "Recipient address is the zero address",
            WrapError::NoReserves => "No reserves to withdraw",

            // Execution
            WrapError::ReentrantCall => "Reentrant call detected",
        }
    }
}

impl core::fmt::Display for WrapError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<WrapError> for OdraError {
    fn from(error: WrapError) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            OdraError::user(error as u16)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            OdraError::user(error as u16, error.message())
        }
    }
}
