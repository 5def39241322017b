//! Mainnet addresses of tokens that show up in fixtures.

use {ethereum_types::H160, hex_literal::hex};

pub const WETH: H160 = H160(hex!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"));
pub const RDN: H160 = H160(hex!("255aa6df07540cb5d3d297f0d0d4d84cb52bc8e6"));
pub const DAI: H160 = H160(hex!("6b175474e89094c44da98b954eedeac495271d0f"));
pub const USDC: H160 = H160(hex!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"));
