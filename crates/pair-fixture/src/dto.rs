//! Source representation of a token pair fixture, as written in fixture
//! files. Values here are not validated; convert into the domain type with
//! [`TokenPairFixture::into_domain`] before using them.

use {
    crate::{MalformedFixture, domain},
    bigdecimal::BigDecimal,
    number::serialization::DecimalOrNumber,
    serde::{Deserialize, Serialize},
    serde_with::serde_as,
};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TokenPairFixture {
    pub token_a: Token,
    pub token_b: Token,
    pub initial_price: PriceRatio,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Token {
    pub symbol: String,
    pub address: String,
    #[serde_as(as = "DecimalOrNumber")]
    pub funding: BigDecimal,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PriceRatio {
    pub numerator: u64,
    pub denominator: u64,
}

impl TokenPairFixture {
    /// Validates the fixture and converts it into its domain representation.
    pub fn into_domain(self) -> Result<domain::TokenPairFixture, MalformedFixture> {
        domain::TokenPairFixture::try_new(
            self.token_a.into_domain()?,
            self.token_b.into_domain()?,
            self.initial_price.into_domain()?,
        )
    }

    pub fn from_domain(fixture: &domain::TokenPairFixture) -> Self {
        Self {
            token_a: Token::from_domain(fixture.token_a()),
            token_b: Token::from_domain(fixture.token_b()),
            initial_price: PriceRatio::from_domain(fixture.initial_price()),
        }
    }
}

impl Token {
    fn into_domain(self) -> Result<domain::Token, MalformedFixture> {
        Ok(domain::Token::new(
            self.symbol.parse()?,
            self.address.parse()?,
            domain::Funding::try_new(self.funding)?,
        ))
    }

    fn from_domain(token: &domain::Token) -> Self {
        Self {
            symbol: token.symbol().to_string(),
            address: token.address().to_string(),
            funding: token.funding().amount().clone(),
        }
    }
}

impl PriceRatio {
    fn into_domain(self) -> Result<domain::PriceRatio, MalformedFixture> {
        domain::PriceRatio::try_new(self.numerator, self.denominator)
    }

    fn from_domain(price: domain::PriceRatio) -> Self {
        Self {
            numerator: price.numerator(),
            denominator: price.denominator(),
        }
    }
}
