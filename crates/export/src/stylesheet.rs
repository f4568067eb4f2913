//! CSS custom properties and Sass/Less variables.

use crate::naming::{gradient_name, safe_name};
use shadecraft_core::{ColorSet, Gradient};

pub(crate) fn css_variables(color_sets: &[ColorSet], gradients: &[Gradient]) -> String {
    let mut css = String::from(":root {\n");
    for set in color_sets {
        let name = safe_name(&set.name);
        for shade in set.shades() {
            css.push_str(&format!("  --color-{name}-{}: {};\n", shade.shade, shade.hex));
        }
    }

    if !gradients.is_empty() {
        css.push_str("\n  /* Gradients */\n");
        for (i, gradient) in gradients.iter().enumerate() {
            let name = gradient_name(&gradient.name, i, false);
            css.push_str(&format!("  --{name}: {};\n", gradient.css_string()));
        }
    }

    css.push_str("}\n");
    css
}

pub(crate) fn scss_variables(color_sets: &[ColorSet], gradients: &[Gradient]) -> String {
    prefixed_variables('$', color_sets, gradients)
}

pub(crate) fn less_variables(color_sets: &[ColorSet], gradients: &[Gradient]) -> String {
    prefixed_variables('@', color_sets, gradients)
}

/// Sass and Less differ only in the variable sigil.
fn prefixed_variables(sigil: char, color_sets: &[ColorSet], gradients: &[Gradient]) -> String {
    let mut out = String::new();
    for set in color_sets {
        let name = safe_name(&set.name);
        for shade in set.shades() {
            out.push_str(&format!("{sigil}color-{name}-{}: {};\n", shade.shade, shade.hex));
        }
        out.push('\n');
    }

    if !gradients.is_empty() {
        out.push_str("// Gradients\n");
        for (i, gradient) in gradients.iter().enumerate() {
            let name = gradient_name(&gradient.name, i, false);
            out.push_str(&format!("{sigil}{name}: {};\n", gradient.css_string()));
        }
    }
    out
}
