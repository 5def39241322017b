//! Validated token pair fixtures for exchange test scenarios.
//!
//! A fixture names two tokens (symbol, address and how much of each to fund)
//! and the initial price between them. Fixtures are loaded once per test run
//! and are immutable afterwards.

pub mod domain;
pub mod dto;
mod error;
pub mod infra;


pub use {
    domain::{Funding, PriceRatio, Symbol, Token, TokenPairFixture, eth::TokenAddress},
    error::MalformedFixture,
    infra::file::{Format, load, load_file},
};

/// The WETH/RDN fixture: 94.97 WETH funded, no RDN, listed at 514 RDN per
/// WETH.
pub const WETH_RDN: &str = include_str!("../data/weth-rdn.json");

/// Loads the embedded [`WETH_RDN`] fixture.
pub fn weth_rdn() -> Result<TokenPairFixture, MalformedFixture> {
    load(WETH_RDN, Format::Json)
}
