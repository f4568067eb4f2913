//! JavaScript theme and config modules: Tailwind, UnoCSS, WindiCSS, Styled
//! Components, Material UI and Chakra UI.

use crate::naming::{gradient_name, safe_name};
use shadecraft_core::{ColorSet, Gradient};

/// Shades promoted to `main`/`light`/`dark` in the Material UI palette.
const MUI_ROLES: [(&str, u16); 3] = [("main", 500), ("light", 300), ("dark", 700)];

/// How object keys are written.
#[derive(Clone, Copy)]
enum KeyStyle {
    /// Always single-quoted: `'brand-blue': {`.
    Quoted,
    /// Bare when the name is a JS identifier, quoted otherwise.
    Identifier,
}

fn quote(name: &str) -> String {
    format!("'{}'", name.replace('\\', "\\\\").replace('\'', "\\'"))
}

fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

fn key(name: &str, style: KeyStyle) -> String {
    match style {
        KeyStyle::Quoted => quote(name),
        KeyStyle::Identifier if is_js_identifier(name) => name.to_string(),
        KeyStyle::Identifier => quote(name),
    }
}

fn trailing_comma(index: usize, len: usize) -> &'static str {
    if index + 1 < len {
        ","
    } else {
        ""
    }
}

/// One nested object per color set, one entry per shade.
fn color_objects(out: &mut String, color_sets: &[ColorSet], indent: usize, style: KeyStyle) {
    let pad = " ".repeat(indent);
    for (i, set) in color_sets.iter().enumerate() {
        out.push_str(&format!("{pad}{}: {{\n", key(&safe_name(&set.name), style)));
        for shade in set.shades() {
            let shade_key = match style {
                KeyStyle::Quoted => quote(&shade.shade.to_string()),
                KeyStyle::Identifier => shade.shade.to_string(),
            };
            out.push_str(&format!("{pad}  {shade_key}: '{}',\n", shade.hex));
        }
        out.push_str(&format!("{pad}}}{}\n", trailing_comma(i, color_sets.len())));
    }
}

/// One `name: 'css-value'` entry per gradient.
fn gradient_entries(out: &mut String, gradients: &[Gradient], indent: usize, style: KeyStyle) {
    let pad = " ".repeat(indent);
    let js_identifier = matches!(style, KeyStyle::Identifier);
    for (i, gradient) in gradients.iter().enumerate() {
        let name = gradient_name(&gradient.name, i, js_identifier);
        out.push_str(&format!(
            "{pad}{}: '{}'{}\n",
            key(&name, style),
            gradient.css_string(),
            trailing_comma(i, gradients.len())
        ));
    }
}

/// Shared body of the Tailwind and WindiCSS `theme.extend` blocks.
fn extend_block(out: &mut String, color_sets: &[ColorSet], gradients: &[Gradient]) {
    out.push_str("    extend: {\n      colors: {\n");
    color_objects(out, color_sets, 8, KeyStyle::Quoted);
    out.push_str("      },\n");
    if !gradients.is_empty() {
        out.push_str("      backgroundImage: {\n");
        gradient_entries(out, gradients, 8, KeyStyle::Quoted);
        out.push_str("      },\n");
    }
    out.push_str("    },\n");
}

pub(crate) fn tailwind_config(color_sets: &[ColorSet], gradients: &[Gradient]) -> String {
    let mut out = String::from(
        "/** @type {import('tailwindcss').Config} */\nmodule.exports = {\n  theme: {\n",
    );
    extend_block(&mut out, color_sets, gradients);
    out.push_str("  },\n};\n");
    out
}

pub(crate) fn windicss_theme(color_sets: &[ColorSet], gradients: &[Gradient]) -> String {
    let mut out = String::from("// WindiCSS theme configuration\nexport default {\n  theme: {\n");
    extend_block(&mut out, color_sets, gradients);
    out.push_str("  },\n};\n");
    out
}

pub(crate) fn unocss_theme(color_sets: &[ColorSet], gradients: &[Gradient]) -> String {
    let mut out = String::from(
        "// UnoCSS theme configuration\nexport default {\n  theme: {\n    colors: {\n",
    );
    color_objects(&mut out, color_sets, 6, KeyStyle::Quoted);
    out.push_str("    },\n");
    if !gradients.is_empty() {
        out.push_str("    backgroundImage: {\n");
        gradient_entries(&mut out, gradients, 6, KeyStyle::Quoted);
        out.push_str("    },\n");
    }
    out.push_str("  },\n};\n");
    out
}

pub(crate) fn styled_components_theme(color_sets: &[ColorSet], gradients: &[Gradient]) -> String {
    let mut out = String::from("// Styled Components theme\nexport const theme = {\n  colors: {\n");
    color_objects(&mut out, color_sets, 4, KeyStyle::Identifier);
    out.push_str("  },\n");
    if !gradients.is_empty() {
        out.push_str("  gradients: {\n");
        gradient_entries(&mut out, gradients, 4, KeyStyle::Identifier);
        out.push_str("  },\n");
    }
    out.push_str("};\n");
    out
}

pub(crate) fn material_ui_theme(color_sets: &[ColorSet], gradients: &[Gradient]) -> String {
    let mut out = String::from(
        "// Material UI theme colors\n\
         import { createTheme } from '@mui/material/styles';\n\
         \n\
         const theme = createTheme({\n  palette: {\n",
    );
    for (i, set) in color_sets.iter().enumerate() {
        let shades = set.shades();
        out.push_str(&format!(
            "    {}: {{\n",
            key(&safe_name(&set.name), KeyStyle::Identifier)
        ));
        for (role, shade) in MUI_ROLES {
            if let Some(s) = shades.get(shade) {
                out.push_str(&format!("      {role}: '{}',\n", s.hex));
            }
        }
        for s in shades
            .iter()
            .filter(|s| !MUI_ROLES.iter().any(|&(_, role_shade)| role_shade == s.shade))
        {
            out.push_str(&format!("      {}: '{}',\n", s.shade, s.hex));
        }
        out.push_str(&format!("    }}{}\n", trailing_comma(i, color_sets.len())));
    }
    out.push_str("  },\n");
    if !gradients.is_empty() {
        out.push_str("  customGradients: {\n");
        gradient_entries(&mut out, gradients, 4, KeyStyle::Identifier);
        out.push_str("  },\n");
    }
    out.push_str("});\n\nexport default theme;\n");
    out
}

pub(crate) fn chakra_ui_theme(color_sets: &[ColorSet], gradients: &[Gradient]) -> String {
    let mut out = String::from("// Chakra UI theme colors\nexport const colors = {\n");
    color_objects(&mut out, color_sets, 2, KeyStyle::Identifier);
    out.push_str("};\n\n");
    if !gradients.is_empty() {
        out.push_str("// Custom gradients for Chakra UI\nexport const gradients = {\n");
        gradient_entries(&mut out, gradients, 2, KeyStyle::Identifier);
        out.push_str("};\n\n");
    }
    out.push_str("// Example of extending the Chakra theme\nexport const extendTheme = {\n  colors,\n");
    // `gradients` is only declared above when there are any.
    if !gradients.is_empty() {
        out.push_str("  gradients,\n");
    }
    out.push_str("};\n");
    out
}
