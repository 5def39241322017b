use {
    crate::domain::{PriceRatio, eth},
    bigdecimal::BigDecimal,
};

/// A token pair fixture that could not be loaded.
///
/// Every way a fixture can be wrong maps to this one error type. Callers are
/// expected to abort the affected test; nothing is ever defaulted.
#[derive(Debug, thiserror::Error)]
pub enum MalformedFixture {
    /// The source is not valid JSON, misses a required field or carries an
    /// unknown one.
    #[error("failed to decode JSON fixture: {0}")]
    Json(#[from] serde_json::Error),
    /// Same as `Json`, for TOML sources.
    #[error("failed to decode TOML fixture: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid token symbol {0:?}; expected 1 to 16 uppercase ASCII letters or digits")]
    InvalidSymbol(String),
    #[error("invalid token address {0:?}; expected 0x followed by 40 lowercase hex digits")]
    InvalidAddress(String),
    #[error("token funding must not be negative, got {0}")]
    NegativeFunding(BigDecimal),
    #[error("initial price numerator must be positive")]
    ZeroNumerator,
    #[error("initial price denominator must be positive")]
    ZeroDenominator,
    /// Components above `i64::MAX` cannot be written back to TOML.
    #[error("initial price component {0} exceeds {max}", max = PriceRatio::MAX)]
    PriceOutOfRange(u64),
    #[error("tokenA and tokenB share the address {0}")]
    DuplicateToken(eth::TokenAddress),
}
