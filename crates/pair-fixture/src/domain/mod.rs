pub mod eth;
mod fixture;

pub use fixture::{Funding, PriceRatio, Symbol, Token, TokenPairFixture};
