//! Lenient helpers for reading generator options out of a `serde_json::Value`.
//!
//! Browser and CLI callers hand options over as loose JSON objects. A missing
//! key, a `null`, or a value of the wrong type yields the default instead of
//! an error, matching the engine's never-fail policy for numeric input.

use serde_json::Value;

/// Reads `params[name]` as an `f64`, accepting integers too.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Reads `params[name]` as an `i64`.
///
/// Whole-valued floats such as `30.0` (what JavaScript sliders often emit) are
/// accepted; fractional values fall back to `default`.
pub fn param_i64(params: &Value, name: &str, default: i64) -> i64 {
    match params.get(name) {
        Some(v) => v
            .as_i64()
            .or_else(|| {
                v.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            })
            .unwrap_or(default),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -- param_f64 --

    #[test]
    fn param_f64_extracts_float_and_integer() {
        let params = json!({"vibrancy": 62.5, "count": 10});
        assert_eq!(param_f64(&params, "vibrancy", 50.0), 62.5);
        assert_eq!(param_f64(&params, "count", 0.0), 10.0);
    }

    #[test]
    fn param_f64_falls_back_on_missing_null_or_wrong_type() {
        let params = json!({"a": null, "b": "loud"});
        assert_eq!(param_f64(&params, "a", 1.0), 1.0);
        assert_eq!(param_f64(&params, "b", 2.0), 2.0);
        assert_eq!(param_f64(&params, "c", 3.0), 3.0);
    }

    #[test]
    fn param_f64_falls_back_for_non_object() {
        assert_eq!(param_f64(&json!([1, 2]), "vibrancy", 7.0), 7.0);
    }

    // -- param_i64 --

    #[test]
    fn param_i64_extracts_negative_integer() {
        let params = json!({"hueShift": -45});
        assert_eq!(param_i64(&params, "hueShift", 0), -45);
    }

    #[test]
    fn param_i64_accepts_whole_float() {
        let params = json!({"hueShift": 30.0});
        assert_eq!(param_i64(&params, "hueShift", 0), 30);
    }

    #[test]
    fn param_i64_rejects_fractional_float() {
        let params = json!({"hueShift": 12.5});
        assert_eq!(param_i64(&params, "hueShift", 9), 9);
    }

    #[test]
    fn param_i64_falls_back_for_string() {
        let params = json!({"hueShift": "left"});
        assert_eq!(param_i64(&params, "hueShift", 4), 4);
    }
}
