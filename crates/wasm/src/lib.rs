#![deny(unsafe_code)]
//! WASM bindings for the shadecraft engine.
//!
//! Every binding takes and returns JSON strings (or plain numbers) so the
//! browser side needs no generated type definitions. Colors go through the
//! same lenient normalization as the UI's text fields; only malformed JSON,
//! unknown format names and invalid gradients are reported as errors.

use serde::Serialize;
use serde_json::Value;
use shadecraft_core::vision::simulate_ramp;
use shadecraft_core::{
    all_harmonies, format_hex_value, generate_shades as shade_ramp, palette_accessibility,
    Gradient, HexColor, PaletteDocument, ShadeOptions,
};
use shadecraft_export::{render_document, ExportFormat};
use wasm_bindgen::prelude::*;

/// Native-testable implementations; the `#[wasm_bindgen]` wrappers only
/// convert the error side into `JsError`.
mod bridge {
    use super::*;

    pub(crate) type BridgeResult<T> = Result<T, String>;

    pub(crate) fn color(raw: &str) -> HexColor {
        format_hex_value(raw, HexColor::BLACK)
    }

    /// Empty input means "all defaults".
    pub(crate) fn options(options_json: &str) -> BridgeResult<ShadeOptions> {
        if options_json.trim().is_empty() {
            return Ok(ShadeOptions::default());
        }
        let value: Value = serde_json::from_str(options_json)
            .map_err(|e| format!("invalid options JSON: {e}"))?;
        Ok(ShadeOptions::from_json(&value))
    }

    pub(crate) fn to_json(value: &impl Serialize) -> BridgeResult<String> {
        serde_json::to_string(value).map_err(|e| e.to_string())
    }

    pub(crate) fn gradient(gradient_json: &str) -> BridgeResult<Gradient> {
        serde_json::from_str(gradient_json).map_err(|e| format!("invalid gradient: {e}"))
    }

    pub(crate) fn shades(base: &str, options_json: &str) -> BridgeResult<String> {
        to_json(&shade_ramp(color(base), options(options_json)?))
    }

    pub(crate) fn accessibility(base: &str, options_json: &str) -> BridgeResult<String> {
        let ramp = shade_ramp(color(base), options(options_json)?);
        to_json(&palette_accessibility(&ramp))
    }

    pub(crate) fn simulated_shades(base: &str, options_json: &str, id: &str) -> BridgeResult<String> {
        let ramp = shade_ramp(color(base), options(options_json)?);
        to_json(&simulate_ramp(&ramp, id))
    }

    pub(crate) fn export(format: &str, document_json: &str) -> BridgeResult<String> {
        let format = format.parse::<ExportFormat>().map_err(|e| e.to_string())?;
        let document: PaletteDocument = serde_json::from_str(document_json)
            .map_err(|e| format!("invalid palette document: {e}"))?;
        Ok(render_document(format, &document))
    }
}

fn js(result: bridge::BridgeResult<String>) -> Result<String, JsError> {
    result.map_err(|e| JsError::new(&e))
}

/// Normalizes free-form input into `#RRGGBB`; never fails.
#[wasm_bindgen]
pub fn format_hex(raw: &str) -> String {
    bridge::color(raw).to_string()
}

/// Shade ramp as a JSON array. `options_json` may carry `vibrancy` and `hueShift`.
#[wasm_bindgen]
pub fn generate_shades(base: &str, options_json: &str) -> Result<String, JsError> {
    js(bridge::shades(base, options_json))
}

/// All ten harmonies as a JSON array.
#[wasm_bindgen]
pub fn harmonies(base: &str) -> Result<String, JsError> {
    js(bridge::to_json(&all_harmonies(bridge::color(base))))
}

/// Contrast report over the ramp, highest ratio first.
#[wasm_bindgen]
pub fn accessibility(base: &str, options_json: &str) -> Result<String, JsError> {
    js(bridge::accessibility(base, options_json))
}

/// WCAG contrast ratio of two colors, 1 to 21.
#[wasm_bindgen]
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    shadecraft_core::contrast_ratio(bridge::color(a), bridge::color(b))
}

/// Simulates one color; unknown deficiency ids return the color unchanged.
#[wasm_bindgen]
pub fn simulate(color: &str, deficiency_id: &str) -> String {
    shadecraft_core::simulate(bridge::color(color), deficiency_id).to_string()
}

/// Simulated shade ramp as a JSON array.
#[wasm_bindgen]
pub fn simulate_shades(
    base: &str,
    options_json: &str,
    deficiency_id: &str,
) -> Result<String, JsError> {
    js(bridge::simulated_shades(base, options_json, deficiency_id))
}

/// CSS value of a gradient given as JSON.
#[wasm_bindgen]
pub fn gradient_css(gradient_json: &str) -> Result<String, JsError> {
    js(bridge::gradient(gradient_json).map(|g| g.css_string()))
}

/// Interpolated color at `position` percent of a JSON gradient.
#[wasm_bindgen]
pub fn gradient_color_at(gradient_json: &str, position: f64) -> Result<String, JsError> {
    js(bridge::gradient(gradient_json).map(|g| g.color_at(position).to_string()))
}

/// Renders a palette document (`{"colorSets": [...], "gradients": [...]}`).
#[wasm_bindgen]
pub fn export(format: &str, document_json: &str) -> Result<String, JsError> {
    js(bridge::export(format, document_json))
}

#[cfg(test)]
mod tests {
    use super::bridge;
    use super::*;

    const GRADIENT: &str = r##"{"id":"g","name":"Fade","type":"linear","angle":90,
        "stops":[{"id":"b","color":"#FFFFFF","position":100},
                 {"id":"a","color":"#000000","position":0}]}"##;

    #[test]
    fn format_hex_normalizes() {
        assert_eq!(format_hex("f00"), "#FF0000");
        assert_eq!(format_hex(""), "#000000");
    }

    #[test]
    fn options_accept_empty_and_partial_json() {
        assert_eq!(bridge::options("").unwrap(), ShadeOptions::default());
        let opts = bridge::options(r#"{"hueShift": -30}"#).unwrap();
        assert_eq!(opts, ShadeOptions::new(50.0, -30));
        assert!(bridge::options("{nope").is_err());
    }

    #[test]
    fn shades_json_matches_fixture() {
        let value: Value = serde_json::from_str(&bridge::shades("#15437F", "{}").unwrap()).unwrap();
        assert_eq!(value[5]["hex"], "#2D74D2");
        assert_eq!(value[5]["shade"], 500);
    }

    #[test]
    fn accessibility_has_fifteen_pairs() {
        let value: Value =
            serde_json::from_str(&bridge::accessibility("#15437F", "").unwrap()).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 15);
        assert_eq!(value[0]["level"], "AAA");
    }

    #[test]
    fn simple_bindings() {
        assert!((contrast_ratio("#000000", "#FFFFFF") - 21.0).abs() < 1e-9);
        assert_eq!(simulate("#FF0000", "protanopia"), "#918E00");
        assert_eq!(simulate("#FF0000", "unknown"), "#FF0000");
    }

    #[test]
    fn simulated_shades_keep_metadata() {
        let value: Value = serde_json::from_str(
            &bridge::simulated_shades("#15437F", "", "achromatopsia").unwrap(),
        )
        .unwrap();
        assert_eq!(value[0]["lightness"], 96);
    }

    #[test]
    fn gradient_bindings() {
        let g = bridge::gradient(GRADIENT).unwrap();
        assert_eq!(
            g.css_string(),
            "linear-gradient(90deg, #000000 0%, #FFFFFF 100%)"
        );
        assert_eq!(g.color_at(50.0).to_string(), "#808080");
        assert!(bridge::gradient(r#"{"id":"g","name":"x","stops":[]}"#).is_err());
    }

    #[test]
    fn export_binding() {
        let doc = serde_json::to_string(&PaletteDocument::default()).unwrap();
        let css = bridge::export("css", &doc).unwrap();
        assert!(css.contains("--color-primary-500: #2D74D2;"));
        assert!(bridge::export("yaml", &doc).is_err());
        assert!(bridge::export("css", "[]").is_err());
    }
}
