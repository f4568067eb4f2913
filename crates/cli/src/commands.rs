//! Subcommand implementations. Each returns the text to print on stdout.

use crate::error::CliError;
use serde_json::json;
use shadecraft_core::contrast::{classify, failing, passing};
use shadecraft_core::vision::simulate_ramp;
use shadecraft_core::{
    all_harmonies, contrast_ratio, format_hex_value, generate_shades, harmony,
    palette_accessibility, random_color, ColorHarmony, ColorSet, ContrastScore, Deficiency,
    Gradient, GradientKind, HarmonyType, HexColor, IdGenerator, PaletteDocument, ShadeOptions,
    ShadeRamp, Xorshift64,
};
use shadecraft_export::{render_document, write_export, ExportFormat};
use std::path::Path;

/// Normalizes free-form color input; never fails.
pub fn color_arg(raw: &str) -> HexColor {
    format_hex_value(raw, HexColor::BLACK)
}

fn pretty(value: &impl serde::Serialize) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn ramp_lines(ramp: &ShadeRamp) -> String {
    ramp.iter()
        .map(|s| {
            format!(
                "{:>4}  {}  hsl({}, {}%, {}%)",
                s.shade, s.hex, s.hue, s.saturation, s.lightness
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Ten-shade ramp, one line per rung.
pub fn shades(color: HexColor, options: ShadeOptions, json: bool) -> Result<String, CliError> {
    let ramp = generate_shades(color, options);
    if json {
        return pretty(&ramp);
    }
    Ok(ramp_lines(&ramp))
}

fn harmony_block(h: &ColorHarmony) -> String {
    let colors: Vec<String> = h.colors.iter().map(HexColor::to_string).collect();
    format!("{}\n  {}\n  {}", h.name, h.description, colors.join(" "))
}

/// All harmonies, or just `kind` when given.
pub fn harmonies(color: HexColor, kind: Option<&str>, json: bool) -> Result<String, CliError> {
    let list = match kind {
        Some(name) => vec![harmony(color, name.parse::<HarmonyType>()?)],
        None => all_harmonies(color),
    };
    if json {
        return pretty(&list);
    }
    Ok(list.iter().map(harmony_block).collect::<Vec<_>>().join("\n\n"))
}

/// Which slice of the accessibility report to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFilter {
    All,
    Passing,
    Failing,
}

/// Accessibility report for the ramp of `color`, filtered.
pub fn contrast(
    color: HexColor,
    options: ShadeOptions,
    filter: ReportFilter,
    json: bool,
) -> Result<String, CliError> {
    let report = palette_accessibility(&generate_shades(color, options));
    let scores: Vec<ContrastScore> = match filter {
        ReportFilter::All => report,
        ReportFilter::Passing => passing(&report),
        ReportFilter::Failing => failing(&report),
    };
    if json {
        return pretty(&scores);
    }
    Ok(scores
        .iter()
        .map(|s| {
            format!(
                "{:>4} / {:<4} {:>6.2}:1  {}",
                s.background.shade, s.foreground.shade, s.ratio, s.level
            )
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Contrast ratio of two colors with its WCAG level.
pub fn ratio(a: HexColor, b: HexColor, json: bool) -> Result<String, CliError> {
    let ratio = contrast_ratio(a, b);
    let (level, pass) = classify(ratio);
    if json {
        return pretty(&json!({
            "a": a,
            "b": b,
            "ratio": ratio,
            "level": level,
            "pass": pass,
        }));
    }
    Ok(format!("{a} / {b}  {ratio:.2}:1  {level}"))
}

/// One simulated color, or a whole simulated ramp when `ramp` is set.
pub fn simulate(
    color: HexColor,
    deficiency: &str,
    ramp: Option<ShadeOptions>,
    json: bool,
) -> Result<String, CliError> {
    let deficiency = deficiency.parse::<Deficiency>()?;
    match ramp {
        Some(options) => {
            let simulated = simulate_ramp(&generate_shades(color, options), deficiency.id());
            if json {
                return pretty(&json!({
                    "deficiency": deficiency,
                    "shades": simulated,
                }));
            }
            Ok(format!("{}\n{}", deficiency.name(), ramp_lines(&simulated)))
        }
        None => {
            let simulated = deficiency.apply(color);
            if json {
                return pretty(&json!({
                    "deficiency": deficiency,
                    "input": color,
                    "output": simulated,
                }));
            }
            Ok(format!("{color} -> {simulated}  ({})", deficiency.name()))
        }
    }
}

/// Gradient settings gathered from the command line.
#[derive(Debug, Clone, Copy)]
pub struct GradientArgs {
    pub angle: f64,
    pub radial: bool,
    pub at: Option<f64>,
    pub seed: u64,
}

/// Gradient CSS for evenly spaced `colors`, plus an optional sample.
pub fn gradient(colors: &[HexColor], args: GradientArgs, json: bool) -> Result<String, CliError> {
    let mut ids = IdGenerator::new(args.seed);
    let id = ids.next_id();
    let kind = if args.radial {
        GradientKind::Radial
    } else {
        GradientKind::Linear
    };
    let gradient = Gradient::from_colors(id, colors, &mut ids)?
        .with_kind(kind)
        .with_angle(args.angle);
    let css = gradient.css_string();
    let sample = args.at.map(|p| (p, gradient.color_at(p)));

    if json {
        let mut out = json!({ "css": css, "gradient": gradient });
        if let Some((position, color)) = sample {
            out["colorAt"] = json!({ "position": position, "color": color });
        }
        return pretty(&out);
    }
    let mut text = css;
    if let Some((position, color)) = sample {
        text.push_str(&format!("\n{position}% -> {color}"));
    }
    Ok(text)
}

/// Reads a palette document from `path`.
pub fn load_document(path: &Path) -> Result<PaletteDocument, CliError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|e| CliError::Input(format!("invalid palette document {}: {e}", path.display())))
}

/// Builds a document from base colors: a "Primary" set, then "Color N" sets.
pub fn document_from_colors(colors: &[HexColor], seed: u64) -> PaletteDocument {
    let mut ids = IdGenerator::new(seed);
    let mut iter = colors.iter();
    let Some(&first) = iter.next() else {
        return PaletteDocument::default();
    };
    let primary = ColorSet::new(ids.next_id(), "Primary", first, ShadeOptions::default());
    iter.fold(PaletteDocument::new(primary), |doc, &color| {
        doc.add_color_set(ids.next_id(), color)
    })
}

/// Renders `document`, to stdout or to `output`.
pub fn export(
    format: &str,
    document: &PaletteDocument,
    output: Option<&Path>,
    json: bool,
) -> Result<String, CliError> {
    let format = format.parse::<ExportFormat>()?;
    match output {
        Some(path) => {
            write_export(format, document, path)?;
            if json {
                return pretty(&json!({
                    "format": format,
                    "output": path.display().to_string(),
                }));
            }
            Ok(format!("wrote {} export to {}", format.name(), path.display()))
        }
        None => {
            let content = render_document(format, document);
            if json {
                return pretty(&json!({ "format": format, "content": content }));
            }
            Ok(content)
        }
    }
}

/// A random color reproducible from `seed`.
pub fn random(seed: u64, json: bool) -> Result<String, CliError> {
    let color = random_color(&mut Xorshift64::new(seed));
    if json {
        let hsl = color.hsl();
        return pretty(&json!({
            "seed": seed,
            "color": color,
            "hsl": { "h": hsl.h, "s": hsl.s, "l": hsl.l },
        }));
    }
    Ok(color.to_string())
}

/// Export formats, deficiencies and harmony types.
pub fn list(json: bool) -> Result<String, CliError> {
    if json {
        let formats: Vec<_> = ExportFormat::all()
            .into_iter()
            .map(|f| json!({"id": f.id(), "name": f.name(), "extension": f.file_extension()}))
            .collect();
        let deficiencies: Vec<_> = Deficiency::all()
            .into_iter()
            .map(|d| json!({"id": d.id(), "name": d.name(), "description": d.description()}))
            .collect();
        let harmonies: Vec<_> = HarmonyType::all()
            .into_iter()
            .map(|h| json!({"id": h.id(), "name": h.name()}))
            .collect();
        return pretty(&json!({
            "formats": formats,
            "deficiencies": deficiencies,
            "harmonies": harmonies,
        }));
    }

    let mut lines = vec!["Export formats:".to_string()];
    lines.extend(
        ExportFormat::all()
            .iter()
            .map(|f| format!("  {:<10} {} (.{})", f.id(), f.name(), f.file_extension())),
    );
    lines.push("Vision deficiencies:".to_string());
    lines.extend(
        Deficiency::all()
            .iter()
            .map(|d| format!("  {:<15} {}", d.id(), d.description())),
    );
    lines.push("Harmonies:".to_string());
    lines.extend(
        HarmonyType::all()
            .iter()
            .map(|h| format!("  {:<19} {}", h.id(), h.name())),
    );
    Ok(lines.join("\n"))
}
