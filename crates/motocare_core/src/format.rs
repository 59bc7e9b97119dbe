//! Shared text-formatting conventions for user-facing answers.

/// Joins lines with the `• ` bullet prefix, dropping empty ones.
pub fn bullets<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter(|line| !line.as_ref().is_empty())
        .map(|line| format!("• {}", line.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats Colombian pesos with no decimals and dot thousands separators,
/// e.g. `$ 16.000`.
pub fn format_cop(value: f64) -> String {
    let rounded = value.round() as i64;
    let negative = rounded < 0;
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (offset, ch) in digits.chars().enumerate() {
        if offset > 0 && (digits.len() - offset) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if negative {
        format!("$ -{grouped}")
    } else {
        format!("$ {grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::{bullets, format_cop};

    #[test]
    fn cop_groups_thousands_with_dots() {
        assert_eq!(format_cop(0.0), "$ 0");
        assert_eq!(format_cop(950.0), "$ 950");
        assert_eq!(format_cop(16000.0), "$ 16.000");
        assert_eq!(format_cop(1234567.4), "$ 1.234.567");
    }

    #[test]
    fn bullets_skip_empty_lines() {
        let joined = bullets(["uno", "", "dos"]);
        assert_eq!(joined, "• uno\n• dos");
    }
}
