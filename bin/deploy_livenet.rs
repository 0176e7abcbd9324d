//! Deploy the wrapped stablecoin contract to Casper livenet/testnet using
//! the Odra livenet environment.
//!
//! Usage:
//!   cargo run --bin deploy_livenet --release
//!
//! Requires .env file with:
//!   ODRA_CASPER_LIVENET_SECRET_KEY_PATH=/path/to/secret_key.pem
//!   ODRA_CASPER_LIVENET_NODE_ADDRESS=https://node.testnet.casper.network
//!   ODRA_CASPER_LIVENET_CHAIN_NAME=casper-test
//!   ODRA_CASPER_LIVENET_PAYMENT_AMOUNT=200000000000

use odra::host::Deployer;
use odra::prelude::*;

use cspr_wrap_contracts::wrapped_stable::{WrappedStable, WrappedStableInitArgs};

fn main() {
    // Load environment from .env file
    dotenv::dotenv().ok();

    println!("=== CSPR-Wrap Livenet Deployment ===");
    println!();

    // Initialize Odra livenet environment
    let env = odra_casper_livenet_env::env();

    // Configure payment amount for deployments/calls (required for Casper 2.0 txs)
    let payment_amount: u64 = std::env::var("ODRA_CASPER_LIVENET_PAYMENT_AMOUNT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(200_000_000_000);
    env.set_gas(payment_amount);

    // Get deployer address; the deployer becomes the wrapper admin
    let deployer = env.caller();
    println!("Deployer (admin): {:?}", deployer);
    println!();

    println!("Deploying WrappedStable...");
    let wrapper = WrappedStable::deploy(
        &env,
        WrappedStableInitArgs {
            name: String::from("Wrapped USD"),
            symbol: String::from("wUSD"),
            // Registered post-deploy via add_stablecoin, which verifies
            // each token's decimals against the wrapper's.
            initial_stables: Vec::new(),
        },
    );
    println!("WrappedStable deployed at: {:?}", wrapper.address().clone());
    println!();

    println!("=== Deployment Complete ===");
    println!("Next: call add_stablecoin(..) as the admin for each reserve stablecoin.");
}
