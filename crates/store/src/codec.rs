//! Codec catalog for persisted values.
//!
//! A `Codec<T>` maps a typed value to and from the string representation the
//! backing store holds. Absence (`None`) is the only failure signal on both
//! sides: a deserializer never panics and never propagates a parse error.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serialize/deserialize pair for one supported value shape.
///
/// Both halves are plain function pointers, so entries built from a codec can
/// live in `const` context and a codec has no identity beyond its behavior.
pub struct Codec<T> {
    ser: fn(&T) -> Option<String>,
    de: fn(&str) -> Option<T>,
}

impl<T> Codec<T> {
    /// Build a codec from a serialize/deserialize pair.
    ///
    /// The deserializer must signal failure as `None`, never by panicking.
    pub const fn new(ser: fn(&T) -> Option<String>, de: fn(&str) -> Option<T>) -> Self {
        Self { ser, de }
    }

    /// Encode a value, or `None` if it has no string representation.
    pub fn serialize(&self, value: &T) -> Option<String> {
        (self.ser)(value)
    }

    /// Decode a stored string, or `None` if it does not hold a `T`.
    pub fn deserialize(&self, raw: &str) -> Option<T> {
        (self.de)(raw)
    }
}

impl<T> Clone for Codec<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Codec<T> {}

impl Codec<String> {
    /// Identity codec. Never absent in either direction.
    pub const fn string() -> Self {
        Codec::new(|v| Some(v.clone()), |raw| Some(raw.to_string()))
    }
}

impl Codec<bool> {
    /// `"true"`/`"false"` out; case-insensitive `"true"` in.
    ///
    /// Decoding is deliberately lossy: any other input, malformed or not,
    /// reads as `false` rather than absent. Round-trips only hold for
    /// strings this codec produced itself.
    pub const fn boolean() -> Self {
        Codec::new(
            |v| Some(v.to_string()),
            |raw| Some(raw.eq_ignore_ascii_case("true")),
        )
    }
}

impl Codec<f64> {
    /// Decimal text both ways.
    ///
    /// NaN and the infinities are unrepresentable, and stored text that does
    /// not parse back to a finite number is absent.
    pub const fn number() -> Self {
        Codec::new(
            |v| v.is_finite().then(|| v.to_string()),
            |raw| match raw.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Some(n),
                _ => None,
            },
        )
    }
}

impl Codec<Vec<String>> {
    /// JSON array of strings.
    ///
    /// Anything the JSON codec would reject, including an array of the
    /// wrong element shape, is absent.
    pub const fn string_list() -> Self {
        Codec::new(|v| serde_json::to_string(v).ok(), parse_json::<Vec<String>>)
    }
}

impl<T: Serialize + DeserializeOwned> Codec<T> {
    /// Arbitrary JSON-representable value.
    ///
    /// Absent on empty input, the literal `"null"`, or a parse failure;
    /// parse failures are logged at warn. Values `serde_json` cannot encode
    /// are absent on the way out.
    pub const fn json() -> Self {
        Codec::new(|v| serde_json::to_string(v).ok(), parse_json::<T>)
    }
}

fn parse_json<T: DeserializeOwned>(raw: &str) -> Option<T> {
    if raw.is_empty() || raw == "null" {
        return None;
    }
    match serde_json::from_str(raw) {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("failed to parse value: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn string_round_trips() {
        let codec = Codec::string();
        let raw = codec.serialize(&"hello".to_string()).unwrap();
        assert_eq!(codec.deserialize(&raw), Some("hello".to_string()));
        assert_eq!(codec.deserialize(""), Some(String::new()));
    }

    #[test]
    fn boolean_accepts_any_case_of_true() {
        let codec = Codec::boolean();
        assert_eq!(codec.deserialize("true"), Some(true));
        assert_eq!(codec.deserialize("TRUE"), Some(true));
        assert_eq!(codec.deserialize("True"), Some(true));
    }

    // The boolean decoder is intentionally lossy: unparseable input is
    // `false`, not absent, so a garbage value will not fall back to an
    // entry's default. Callers get round-trip fidelity only for strings the
    // matching serializer produced.
    #[test]
    fn boolean_garbage_is_false_not_absent() {
        let codec = Codec::boolean();
        assert_eq!(codec.deserialize("false"), Some(false));
        assert_eq!(codec.deserialize(""), Some(false));
        assert_eq!(codec.deserialize("yes"), Some(false));
        assert_eq!(codec.deserialize("1"), Some(false));
    }

    #[test]
    fn boolean_round_trips_its_own_output() {
        let codec = Codec::boolean();
        for v in [true, false] {
            let raw = codec.serialize(&v).unwrap();
            assert_eq!(codec.deserialize(&raw), Some(v));
        }
    }

    #[test]
    fn number_round_trips_finite_values() {
        let codec = Codec::number();
        for v in [0.0, 42.0, -1.5, 1e9] {
            let raw = codec.serialize(&v).unwrap();
            assert_eq!(codec.deserialize(&raw), Some(v));
        }
    }

    #[test]
    fn number_rejects_unparsable_text() {
        let codec = Codec::number();
        assert_eq!(codec.deserialize("abc"), None);
        assert_eq!(codec.deserialize(""), None);
        assert_eq!(codec.deserialize("12abc"), None);
    }

    #[test]
    fn number_treats_non_finite_as_failure() {
        let codec = Codec::number();
        assert_eq!(codec.serialize(&f64::NAN), None);
        assert_eq!(codec.serialize(&f64::INFINITY), None);
        assert_eq!(codec.deserialize("NaN"), None);
        assert_eq!(codec.deserialize("inf"), None);
    }

    #[test]
    fn string_list_round_trips() {
        let codec = Codec::string_list();
        let list = vec!["a".to_string(), "b".to_string()];
        let raw = codec.serialize(&list).unwrap();
        assert_eq!(codec.deserialize(&raw), Some(list));
        assert_eq!(codec.deserialize("[]"), Some(vec![]));
    }

    #[test]
    fn string_list_shape_mismatch_is_absent() {
        let codec = Codec::string_list();
        assert_eq!(codec.deserialize("[1, 2]"), None);
        assert_eq!(codec.deserialize("{\"a\": 1}"), None);
        assert_eq!(codec.deserialize("\"a\""), None);
    }

    #[test]
    fn json_rejects_empty_null_and_truncated_input() {
        let codec = Codec::<serde_json::Value>::json();
        assert!(codec.deserialize("").is_none());
        assert!(codec.deserialize("null").is_none());
        assert!(codec.deserialize("{\"a\":").is_none());
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Point {
        x: f64,
        y: f64,
    }

    #[test]
    fn json_round_trips_struct() {
        let codec = Codec::<Point>::json();
        let p = Point { x: 1.0, y: -2.5 };
        let raw = codec.serialize(&p).unwrap();
        assert_eq!(codec.deserialize(&raw), Some(Point { x: 1.0, y: -2.5 }));
    }
}
