use {
    super::eth,
    crate::MalformedFixture,
    bigdecimal::{BigDecimal, Zero as _},
    num::{BigInt, BigRational},
    std::{fmt, str::FromStr},
};

/// An immutable, validated description of two tokens and their initial
/// exchange price, used to drive an exchange test scenario.
///
/// Invariants upheld by construction:
/// - the two token addresses differ
/// - both fundings are non-negative
/// - the price numerator and denominator are positive
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenPairFixture {
    token_a: Token,
    token_b: Token,
    initial_price: PriceRatio,
}

impl TokenPairFixture {
    /// Creates a new fixture. Returns `Err` if both tokens share an address.
    pub fn try_new(
        token_a: Token,
        token_b: Token,
        initial_price: PriceRatio,
    ) -> Result<Self, MalformedFixture> {
        if token_a.address == token_b.address {
            return Err(MalformedFixture::DuplicateToken(token_a.address));
        }

        Ok(Self {
            token_a,
            token_b,
            initial_price,
        })
    }

    pub fn token_a(&self) -> &Token {
        &self.token_a
    }

    pub fn token_b(&self) -> &Token {
        &self.token_b
    }

    /// The initial price, in units of token B per unit of token A.
    pub fn initial_price(&self) -> PriceRatio {
        self.initial_price
    }

    /// Returns both tokens, token A first.
    pub fn tokens(&self) -> [&Token; 2] {
        [&self.token_a, &self.token_b]
    }

    /// Returns the token of this pair with the specified address.
    pub fn token(&self, address: &eth::TokenAddress) -> Option<&Token> {
        self.tokens()
            .into_iter()
            .find(|token| token.address == *address)
    }

    /// Returns the tokens that need to be funded for the scenario, that is
    /// the ones with a non-zero funding amount.
    pub fn funded_tokens(&self) -> impl Iterator<Item = &Token> + '_ {
        self.tokens()
            .into_iter()
            .filter(|token| !token.funding.is_zero())
    }

    /// Returns the amount of the other token of the pair that one unit of
    /// `address` is worth at the initial price, or `None` if `address` is
    /// not part of the pair.
    pub fn price_of(&self, address: &eth::TokenAddress) -> Option<BigRational> {
        if *address == self.token_a.address {
            Some(self.initial_price.to_rational())
        } else if *address == self.token_b.address {
            Some(self.initial_price.inverse().to_rational())
        } else {
            None
        }
    }

    /// Returns the same pair with token A and token B swapped. The price is
    /// inverted so that it still reads as "token B per token A".
    pub fn reversed(&self) -> Self {
        Self {
            token_a: self.token_b.clone(),
            token_b: self.token_a.clone(),
            initial_price: self.initial_price.inverse(),
        }
    }
}

/// One side of a token pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    symbol: Symbol,
    address: eth::TokenAddress,
    funding: Funding,
}

impl Token {
    pub fn new(symbol: Symbol, address: eth::TokenAddress, funding: Funding) -> Self {
        Self {
            symbol,
            address,
            funding,
        }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn address(&self) -> eth::TokenAddress {
        self.address
    }

    pub fn funding(&self) -> &Funding {
        &self.funding
    }
}

/// A short upper-case token ticker such as `WETH`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    const MAX_LEN: usize = 16;

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Symbol {
    type Err = MalformedFixture;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = (1..=Self::MAX_LEN).contains(&s.len())
            && s
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
        if !valid {
            return Err(MalformedFixture::InvalidSymbol(s.to_owned()));
        }
        Ok(Self(s.to_owned()))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A non-negative token amount supplied to the test scenario, in whole token
/// units (not atoms).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Funding(BigDecimal);

impl Funding {
    /// Creates a new funding amount. Returns `Err` for negative amounts.
    pub fn try_new(amount: BigDecimal) -> Result<Self, MalformedFixture> {
        if amount < BigDecimal::zero() {
            return Err(MalformedFixture::NegativeFunding(amount));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> &BigDecimal {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

/// An exact price expressed as `numerator / denominator`.
///
/// Equality is structural: `1028/2` and `514/1` are different values even
/// though they describe the same price. Compare [`PriceRatio::to_rational`]
/// results for numeric equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PriceRatio {
    numerator: u64,
    denominator: u64,
}

impl PriceRatio {
    /// Largest accepted numerator or denominator. TOML integers are signed
    /// 64-bit, so anything above cannot be written back.
    pub const MAX: u64 = i64::MAX.unsigned_abs();

    /// Creates a new price ratio. Returns `Err` if either component is zero
    /// or above [`PriceRatio::MAX`].
    pub fn try_new(numerator: u64, denominator: u64) -> Result<Self, MalformedFixture> {
        if numerator == 0 {
            return Err(MalformedFixture::ZeroNumerator);
        }
        if denominator == 0 {
            return Err(MalformedFixture::ZeroDenominator);
        }
        if let Some(component) = [numerator, denominator].into_iter().find(|c| *c > Self::MAX) {
            return Err(MalformedFixture::PriceOutOfRange(component));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    /// Returns the price as a normalized rational number.
    pub fn to_rational(&self) -> BigRational {
        BigRational::new(BigInt::from(self.numerator), BigInt::from(self.denominator))
    }

    /// Returns the price as a decimal. Non-terminating fractions are rounded
    /// to `bigdecimal`'s default division precision.
    pub fn to_decimal(&self) -> BigDecimal {
        BigDecimal::from(self.numerator) / BigDecimal::from(self.denominator)
    }

    /// Returns the reciprocal price.
    pub fn inverse(&self) -> Self {
        Self {
            numerator: self.denominator,
            denominator: self.numerator,
        }
    }
}
