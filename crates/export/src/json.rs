//! Plain JSON export: color tables keyed by set and shade, plus raw gradients.

use crate::naming::safe_name;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use shadecraft_core::{ColorSet, Gradient, GradientKind, HexColor};

#[derive(Serialize)]
struct JsonExport<'a> {
    colors: IndexMap<String, IndexMap<String, HexColor>>,
    gradients: Vec<JsonGradient<'a>>,
}

#[derive(Serialize)]
struct JsonGradient<'a> {
    id: &'a str,
    name: &'a str,
    #[serde(rename = "type")]
    kind: GradientKind,
    angle: Value,
    stops: Vec<JsonStop<'a>>,
}

#[derive(Serialize)]
struct JsonStop<'a> {
    color: HexColor,
    position: Value,
    id: &'a str,
}

/// Integral values are written without a fractional part (`90`, not `90.0`).
fn number(x: f64) -> Value {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if x.fract() == 0.0 && x.abs() < MAX_EXACT {
        Value::from(x as i64)
    } else {
        Value::from(x)
    }
}

pub(crate) fn json_document(color_sets: &[ColorSet], gradients: &[Gradient]) -> String {
    // Sets whose safe names collide keep the first slot and the last shades.
    let colors: IndexMap<String, IndexMap<String, HexColor>> = color_sets
        .iter()
        .map(|set| {
            let shades: IndexMap<String, HexColor> = set
                .shades()
                .iter()
                .map(|s| (s.shade.to_string(), s.hex))
                .collect();
            (safe_name(&set.name), shades)
        })
        .collect();

    let gradients: Vec<JsonGradient<'_>> = gradients
        .iter()
        .map(|g| JsonGradient {
            id: &g.id,
            name: &g.name,
            kind: g.kind,
            angle: number(g.angle),
            stops: g
                .stops()
                .iter()
                .map(|s| JsonStop {
                    color: s.color,
                    position: number(s.position),
                    id: &s.id,
                })
                .collect(),
        })
        .collect();

    let export = JsonExport { colors, gradients };
    // Every field is a string, a map of strings or a JSON value, none of which can fail.
    serde_json::to_string_pretty(&export).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shadecraft_core::{GradientStop, ShadeOptions};

    fn set(name: &str, hex: &str) -> ColorSet {
        ColorSet::new("id", name, HexColor::parse(hex).unwrap(), ShadeOptions::default())
    }

    #[test]
    fn colors_keep_set_and_shade_order() {
        let text = json_document(&[set("Zeta", "#15437F"), set("Alpha", "#FF0000")], &[]);
        let zeta = text.find("\"zeta\"").unwrap();
        let alpha = text.find("\"alpha\"").unwrap();
        assert!(zeta < alpha);
        let s50 = text.find("\"50\"").unwrap();
        let s900 = text.find("\"900\"").unwrap();
        assert!(s50 < s900);
    }

    #[test]
    fn parses_back_with_expected_shape() {
        let text = json_document(&[set("Primary", "#15437F")], &[]);
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["colors"]["primary"]["500"], "#2D74D2");
        assert_eq!(value["gradients"], Value::Array(vec![]));
        assert!(text.starts_with("{\n  \"colors\": {\n    \"primary\": {\n      \"50\": \"#F2F4F8\","));
    }

    #[test]
    fn gradient_numbers_are_integral_when_whole() {
        let g = Gradient::new(
            "g1",
            "Sky",
            GradientKind::Linear,
            vec![
                GradientStop::new("s1", HexColor::WHITE, 0.0),
                GradientStop::new("s2", HexColor::BLACK, 62.5),
            ],
            90.0,
        )
        .unwrap();
        let text = json_document(&[set("Primary", "#15437F")], &[g]);
        assert!(text.contains("\"angle\": 90,"));
        assert!(text.contains("\"position\": 0,"));
        assert!(text.contains("\"position\": 62.5,"));
        assert!(text.contains("\"type\": \"linear\""));
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["gradients"][0]["stops"][1]["id"], "s2");
    }

    #[test]
    fn colliding_names_keep_first_position_and_last_value() {
        let text = json_document(
            &[
                set("Brand", "#15437F"),
                set("Other", "#00FF00"),
                set("brand", "#FF0000"),
            ],
            &[],
        );
        let value: Value = serde_json::from_str(&text).unwrap();
        let keys: Vec<&String> = value["colors"].as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 2);
        assert!(text.find("\"brand\"").unwrap() < text.find("\"other\"").unwrap());
        let red = set("x", "#FF0000").shades().get(500).unwrap().hex.to_string();
        assert_eq!(value["colors"]["brand"]["500"], red.as_str());
    }

    #[test]
    fn number_keeps_fractions_and_handles_nan() {
        assert_eq!(number(45.0), Value::from(45));
        assert_eq!(number(33.5), Value::from(33.5));
        assert_eq!(number(f64::NAN), Value::Null);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn whole_numbers_are_written_as_integers(n in any::<i32>()) {
                let value = number(f64::from(n));
                prop_assert_eq!(value.as_i64(), Some(i64::from(n)));
            }

            #[test]
            fn fractional_numbers_survive(n in -1000_i32..1000) {
                let x = f64::from(n) + 0.25;
                prop_assert_eq!(number(x).as_f64(), Some(x));
            }
        }
    }
}
