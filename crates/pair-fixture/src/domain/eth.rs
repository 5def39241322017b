use {
    crate::MalformedFixture,
    std::{fmt, str::FromStr},
};

pub use ethereum_types::H160;

/// An ERC20 token address.
///
/// Parsing only accepts the canonical fixture spelling: `0x` followed by
/// exactly 40 lower-case hex digits. Checksummed (mixed-case) addresses are
/// rejected so that two spellings of one token can never both appear in a
/// fixture file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenAddress(pub H160);

impl From<H160> for TokenAddress {
    fn from(value: H160) -> Self {
        Self(value)
    }
}

impl From<TokenAddress> for H160 {
    fn from(value: TokenAddress) -> Self {
        value.0
    }
}

impl FromStr for TokenAddress {
    type Err = MalformedFixture;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MalformedFixture::InvalidAddress(s.to_owned());

        let digits = s
            .strip_prefix("0x")
            .filter(|digits| {
                digits.len() == 40
                    && digits
                        .bytes()
                        .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
            })
            .ok_or_else(invalid)?;

        let mut bytes = [0_u8; 20];
        hex::decode_to_slice(digits, &mut bytes).map_err(|_| invalid())?;
        Ok(Self(H160(bytes)))
    }
}

impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `H160`'s own `Display` abbreviates the address.
        write!(f, "{:#x}", self.0)
    }
}
