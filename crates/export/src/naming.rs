//! Identifier rules shared by every export template.

/// Lowercases `name` and replaces each run of whitespace with `-`.
pub(crate) fn safe_name(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut in_space = false;
    for c in lower.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

/// Safe gradient name, or a positional fallback when the name is empty.
///
/// `index` is zero-based. CSS-family formats use `gradient-N`; formats whose
/// keys are bare JS identifiers use `gradientN`.
pub(crate) fn gradient_name(name: &str, index: usize, js_identifier: bool) -> String {
    let safe = safe_name(name);
    if !safe.is_empty() {
        return safe;
    }
    if js_identifier {
        format!("gradient{}", index + 1)
    } else {
        format!("gradient-{}", index + 1)
    }
}
