//! Every way of breaking the WETH/RDN fixture is rejected with
//! `MalformedFixture`.

use {
    crate::{Format, MalformedFixture, tests},
    serde_json::{Value, json},
};

/// Loads the WETH/RDN fixture with the value at `pointer` replaced.
fn load_with(pointer: &str, value: Value) -> Result<crate::TokenPairFixture, MalformedFixture> {
    let mut json = tests::weth_rdn_json();
    *json.pointer_mut(pointer).unwrap() = value;
    tests::load_json(&json)
}

/// Loads the WETH/RDN fixture with the field at `pointer` removed.
fn load_without(pointer: &str) -> Result<crate::TokenPairFixture, MalformedFixture> {
    let (parent, field) = pointer.rsplit_once('/').unwrap();
    let mut json = tests::weth_rdn_json();
    json.pointer_mut(parent)
        .unwrap()
        .as_object_mut()
        .unwrap()
        .remove(field)
        .unwrap();
    tests::load_json(&json)
}

#[test]
fn zero_denominator() {
    assert!(matches!(
        load_with("/initialPrice/denominator", json!(0)),
        Err(MalformedFixture::ZeroDenominator)
    ));
}

#[test]
fn zero_numerator() {
    assert!(matches!(
        load_with("/initialPrice/numerator", json!(0)),
        Err(MalformedFixture::ZeroNumerator)
    ));
}

#[test]
fn price_components_beyond_signed_64_bit() {
    for pointer in ["/initialPrice/numerator", "/initialPrice/denominator"] {
        for value in [i64::MAX.unsigned_abs() + 1, u64::MAX] {
            assert!(
                matches!(
                    load_with(pointer, json!(value)),
                    Err(MalformedFixture::PriceOutOfRange(component)) if component == value
                ),
                "{pointer} = {value}"
            );
        }
    }
}

#[test]
fn negative_or_fractional_price() {
    for (pointer, value) in [
        ("/initialPrice/numerator", json!(-514)),
        ("/initialPrice/denominator", json!(-1)),
        ("/initialPrice/numerator", json!(513.5)),
        ("/initialPrice/denominator", json!("1")),
    ] {
        assert!(
            matches!(load_with(pointer, value.clone()), Err(MalformedFixture::Json(_))),
            "{pointer} = {value}"
        );
    }
}

#[test]
fn negative_funding() {
    for pointer in ["/tokenA/funding", "/tokenB/funding"] {
        assert!(
            matches!(
                load_with(pointer, json!(-1)),
                Err(MalformedFixture::NegativeFunding(_))
            ),
            "{pointer}"
        );
    }
    assert!(matches!(
        load_with("/tokenB/funding", json!("-0.5")),
        Err(MalformedFixture::NegativeFunding(_))
    ));
}

#[test]
fn non_decimal_funding() {
    for value in [
        json!("lots"),
        json!(true),
        json!(null),
        json!([94.97]),
        json!("0.1e-9223372036854775808"),
        json!("1e9223372036854775807"),
    ] {
        assert!(
            matches!(
                load_with("/tokenA/funding", value.clone()),
                Err(MalformedFixture::Json(_))
            ),
            "{value}"
        );
    }
}

#[test]
fn duplicate_token_address() {
    let result = load_with(
        "/tokenB/address",
        json!("0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"),
    );
    assert!(matches!(result, Err(MalformedFixture::DuplicateToken(_))));
}

#[test]
fn invalid_addresses() {
    for address in [
        "0xC02AAA39B223FE8D0A0E5C4F27EAD9083C756CC2",
        "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc",
        "c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
        "WETH",
    ] {
        assert!(
            matches!(
                load_with("/tokenA/address", json!(address)),
                Err(MalformedFixture::InvalidAddress(_))
            ),
            "{address}"
        );
    }
    assert!(matches!(
        load_with("/tokenA/address", json!(42)),
        Err(MalformedFixture::Json(_))
    ));
}

#[test]
fn invalid_symbols() {
    for symbol in ["weth", "", "W ETH"] {
        assert!(
            matches!(
                load_with("/tokenB/symbol", json!(symbol)),
                Err(MalformedFixture::InvalidSymbol(_))
            ),
            "{symbol:?}"
        );
    }
}

#[test]
fn missing_fields() {
    for pointer in [
        "/tokenA",
        "/tokenB",
        "/initialPrice",
        "/tokenA/symbol",
        "/tokenA/address",
        "/tokenA/funding",
        "/tokenB/funding",
        "/initialPrice/numerator",
        "/initialPrice/denominator",
    ] {
        assert!(
            matches!(load_without(pointer), Err(MalformedFixture::Json(_))),
            "{pointer}"
        );
    }
}

#[test]
fn unknown_fields() {
    let mut json = tests::weth_rdn_json();
    json["tokenC"] = json!({});
    assert!(matches!(
        tests::load_json(&json),
        Err(MalformedFixture::Json(_))
    ));

    let mut json = tests::weth_rdn_json();
    json["tokenA"]["decimals"] = json!(18);
    assert!(matches!(
        tests::load_json(&json),
        Err(MalformedFixture::Json(_))
    ));
}

#[test]
fn malformed_sources() {
    assert!(matches!(
        crate::load("", Format::Json),
        Err(MalformedFixture::Json(_))
    ));
    assert!(matches!(
        crate::load("{", Format::Json),
        Err(MalformedFixture::Json(_))
    ));
    assert!(matches!(
        crate::load("[tokenA]\nsymbol = \"WETH\"\n", Format::Toml),
        Err(MalformedFixture::Toml(_))
    ));
    assert!(matches!(
        crate::load(crate::WETH_RDN, Format::Toml),
        Err(MalformedFixture::Toml(_))
    ));
}
