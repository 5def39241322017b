use serde_json::Value;

/// Asserts that two JSON values are equal, printing both pretty-printed on
/// failure. Accepts anything convertible into a [`serde_json::Value`].
#[macro_export]
macro_rules! assert_json_matches {
    ($actual:expr, $expected:expr $(,)?) => {{
        let actual: ::serde_json::Value = $actual.into();
        let expected: ::serde_json::Value = $expected.into();
        if let Some(diff) = $crate::assert::json_diff(&actual, &expected) {
            panic!(
                "JSON did not match at {diff}\nactual:\n{}\nexpected:\n{}",
                ::serde_json::to_string_pretty(&actual).unwrap(),
                ::serde_json::to_string_pretty(&expected).unwrap(),
            );
        }
    }};
}

/// Returns the JSON pointer of the first location where `actual` and
/// `expected` differ, or `None` if they are equal.
pub fn json_diff(actual: &Value, expected: &Value) -> Option<String> {
    diff_at(actual, expected, String::new())
}

fn diff_at(actual: &Value, expected: &Value, path: String) -> Option<String> {
    match (actual, expected) {
        (Value::Object(a), Value::Object(e)) => {
            let keys = a.keys().chain(e.keys().filter(|key| !a.contains_key(*key)));
            for key in keys {
                let path = format!("{path}/{key}");
                match (a.get(key), e.get(key)) {
                    (Some(a), Some(e)) => {
                        if let Some(diff) = diff_at(a, e, path) {
                            return Some(diff);
                        }
                    }
                    _ => return Some(path),
                }
            }
            None
        }
        (Value::Array(a), Value::Array(e)) => {
            if a.len() != e.len() {
                return Some(path);
            }
            a.iter()
                .zip(e)
                .enumerate()
                .find_map(|(i, (a, e))| diff_at(a, e, format!("{path}/{i}")))
        }
        _ if actual == expected => None,
        _ => Some(if path.is_empty() { "/".to_owned() } else { path }),
    }
}
