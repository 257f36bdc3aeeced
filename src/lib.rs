//! # Swimmer Predeploy - on-chain contracts baked into the Swimmer subnet genesis
//!
//! Storage layout and typed accessors for the Consensus and AccessControl predeploys,
//! the genesis allocation that installs them, and the checksummed CB58/hex codec used
//! to ship genesis bytes between tools.

pub mod cli;
pub mod constants;
pub mod errors;
pub mod formatting;
pub mod genesis;
pub mod onchain;
pub mod output;
pub mod predeploy;
