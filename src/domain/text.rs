use std::{cmp::Ordering, iter::Peekable, str::Chars};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Fits `s` into `width` terminal cells, replacing the tail with `…` when it
/// does not fit.
pub fn fit_width(s: &str, width: usize) -> String {
    if width == 0 {
        return String::from("");
    }
    if s.width() <= width {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len());
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width + 1 > width {
            break;
        }
        current_width += char_width;
        result.push(c);
    }
    result.push('…');
    result
}

/// Formats a count with thousands separators.
pub fn format_count(n: usize) -> String {
    use thousands::Separable;
    n.separate_with_commas()
}

/// Case-insensitive alphanumeric ordering: digit runs compare by numeric
/// value, so `Name2` sorts before `Name10`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();
    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let l_run = take_digits(&mut left);
                let r_run = take_digits(&mut right);
                let ordering = l_run
                    .len()
                    .cmp(&r_run.len())
                    .then_with(|| l_run.cmp(&r_run));
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (Some(l), Some(r)) => {
                let ordering = l.to_lowercase().cmp(r.to_lowercase());
                if ordering != Ordering::Equal {
                    return ordering;
                }
                left.next();
                right.next();
            }
        }
    }
}

/// Consumes a run of digits, without its leading zeros.
fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        if !(run.is_empty() && c == '0') {
            run.push(c);
        }
    }
    run
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("", 5, "")]
    #[case("abc", 0, "")]
    #[case("abc", 3, "abc")]
    #[case("abcdef", 4, "abc…")]
    #[case("abcdef", 1, "…")]
    #[case("あいう", 4, "あ…")]
    fn test_fit_width(#[case] s: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(fit_width(s, width), expected);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(7), "7");
        assert_eq!(format_count(12345), "12,345");
    }

    #[rstest]
    #[case("Name2", "Name10", Ordering::Less)]
    #[case("name10", "Name9", Ordering::Greater)]
    #[case("ADA", "ada", Ordering::Equal)]
    #[case("Name007", "Name7", Ordering::Equal)]
    #[case("B-12", "b-3", Ordering::Greater)]
    #[case("Lane", "Lovelace", Ordering::Less)]
    #[case("", "a", Ordering::Less)]
    fn test_natural_cmp(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
        assert_eq!(natural_cmp(a, b), expected);
    }
}
