//! Small text helpers shared by the game reporters.

use std::fmt::Write;

/// Horizontal rule framing banners.
pub const RULE: &str = "****************************";

/// Frame lines between two rules.
#[must_use]
pub fn boxed<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::from(RULE);
    for line in lines {
        out.push('\n');
        out.push_str(line.as_ref());
    }
    out.push('\n');
    out.push_str(RULE);
    out
}

/// Join characters with single spaces: `"otter"` becomes `"o t t e r"`.
#[must_use]
pub fn spaced(chars: impl IntoIterator<Item = char>) -> String {
    let mut out = String::new();
    for c in chars {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Render an amount of cents as `Ksh 12.50`.
#[must_use]
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write!(out, "Ksh {sign}{}.{:02}", abs / 100, abs % 100);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed() {
        let text = boxed(["Welcome"]);
        assert_eq!(text, format!("{RULE}\nWelcome\n{RULE}"));

        let empty = boxed(Vec::<String>::new());
        assert_eq!(empty, format!("{RULE}\n{RULE}"));
    }

    #[test]
    fn test_spaced() {
        assert_eq!(spaced("otter".chars()), "o t t e r");
        assert_eq!(spaced("".chars()), "");
        assert_eq!(spaced("a".chars()), "a");
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(0), "Ksh 0.00");
        assert_eq!(format_cents(1250), "Ksh 12.50");
        assert_eq!(format_cents(5), "Ksh 0.05");
        assert_eq!(format_cents(-300), "Ksh -3.00");
    }
}
