//! Colored console output for the genesis tool.
//!
//! Color scheme: blue+bold headers, cyan values, green success,
//! yellow warnings, dimmed secondary text.

use crate::genesis::{BuildGenesisReply, Genesis};
use alloy_primitives::{Address, B256, U256};
use colored::Colorize;
use std::path::Path;

// ── Headers ────────────────────────────────────────────────────────

/// Print a section header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", format!("=== {title} ===").blue().bold());
}

/// Print a labelled value.
pub fn print_field(label: &str, value: impl std::fmt::Display) {
    println!("  {:<22}{}", format!("{label}:").dimmed(), value.to_string().cyan());
}

// ── Genesis ────────────────────────────────────────────────────────

/// Print a short summary of a genesis.
pub fn print_genesis_summary(genesis: &Genesis) {
    print_field("Chain ID", genesis.config.chain_id);
    print_field("Gas limit", genesis.gas_limit);
    print_field("Fee gas limit", genesis.config.fee_config.gas_limit);
    print_field("Alloc accounts", genesis.alloc.len());
    if genesis.config.swimmer_config.is_none() {
        println!(
            "  {} no swimmerConfig: predeploy allocs were not generated",
            "WARN".yellow().bold()
        );
    }
}

/// Print encoded genesis bytes (goes to stdout so it can be piped).
pub fn print_encoded(reply: &BuildGenesisReply) {
    eprintln!(
        "  {} Encoded genesis ({}, {} chars)",
        "OK".green().bold(),
        reply.encoding.to_string().cyan(),
        reply.genesis_bytes.len().to_string().cyan()
    );
    println!("{}", reply.genesis_bytes);
}

/// Print confirmation that a file was written.
pub fn print_written(path: &Path) {
    println!("  {} Wrote {}", "OK".green().bold(), path.display().to_string().cyan());
}

// ── Predeploy state ────────────────────────────────────────────────

/// Print the consensus values read from state.
pub fn print_consensus_values(gas_limit: U256, gas_price: U256, reward_pool: Address) {
    print_field("Gas limit", gas_limit);
    print_field("Gas price", gas_price);
    print_field("Reward pool", reward_pool);
}

/// Print a whitelist membership flag.
pub fn print_flag(label: &str, value: bool) {
    let shown = if value { "yes".green().bold() } else { "no".dimmed() };
    println!("  {:<22}{}", format!("{label}:").dimmed(), shown);
}

/// Print a resolved storage slot.
pub fn print_slot(contract: Address, slot: B256) {
    print_field("Contract", contract);
    print_field("Slot", slot);
}
