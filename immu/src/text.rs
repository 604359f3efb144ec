//! String conversion helpers shared by `Display`, `join` and `to_locale_string`

use crate::value::Value;

/// Render a number the way the host string conversion does
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // covers -0
        return "0".to_string();
    }

    let abs = n.abs();
    if !(1e-6..1e21).contains(&abs) {
        let exp = format!("{:e}", n);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        };
    }

    if n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        format!("{}", n)
    }
}

/// Render a number with en-US grouping and at most three fraction digits
pub(crate) fn format_locale_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = format!("{:.3}", n.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if n < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Join elements with a separator, rendering null and undefined as empty
pub(crate) fn join(items: &[Value], separator: &str) -> String {
    join_with(items, separator, |item| item.to_string())
}

/// Locale-aware variant of [`join`] using `,` as separator
pub(crate) fn join_locale(items: &[Value]) -> String {
    join_with(items, ",", |item| match item {
        Value::Number(n) => format_locale_number(*n),
        other => match other.elements() {
            Some(nested) => join_locale(nested),
            None => other.to_string(),
        },
    })
}

fn join_with<F>(items: &[Value], separator: &str, render: F) -> String
where
    F: Fn(&Value) -> String,
{
    let mut out = String::new();
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            out.push_str(separator);
        }
        if !matches!(item, Value::Null | Value::Undefined) {
            out.push_str(&render(item));
        }
    }
    out
}
