use once_cell::sync::Lazy;
use regex::Regex;

// Letters and digits of any script, no underscore.
static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\W_]+$").unwrap());
static GROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\W_]{2,}$").unwrap());
static BIRTHDATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").unwrap());
static GENDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[MmFf]$").unwrap());

fn is_parenthesized(group: &str) -> bool {
    group.len() >= 2 && group.starts_with('(') && group.ends_with(')')
}

fn strip_parentheses(group: &str) -> &str {
    match is_parenthesized(group) {
        true => &group[1..group.len() - 1],
        false => group,
    }
}

/// Loose phone number check.
///
/// A single group is an alphanumeric token with an optional `+`, optionally
/// wrapped in parentheses with the `+` outside or inside them. Several
/// groups are split on spaces and hyphens: at most one may be parenthesized,
/// a first group longer than two characters may not carry a `+`, and every
/// later group must be an alphanumeric token of at least two characters.
pub fn validate_number(input: &str) -> bool {
    let groups: Vec<&str> = input.split(|c| c == ' ' || c == '-').collect();

    if groups.len() == 1 {
        let group = match input.strip_prefix('+') {
            Some(rest) => strip_parentheses(rest),
            // The sign may also sit inside the parentheses: `(+123)`.
            None => {
                let inner = strip_parentheses(input);
                inner.strip_prefix('+').unwrap_or(inner)
            }
        };
        return TOKEN.is_match(group);
    }

    if groups.iter().filter(|g| is_parenthesized(g)).count() > 1 {
        return false;
    }

    if groups[0].chars().count() > 2 && groups[0].contains('+') {
        return false;
    }

    groups.iter()
        .skip(1)
        .all(|g| GROUP.is_match(strip_parentheses(g)))
}

/// `DD/MM/YYYY` shape only; the calendar is not consulted.
pub fn validate_birthdate(input: &str) -> bool {
    BIRTHDATE.is_match(input)
}

pub fn validate_gender(input: &str) -> bool {
    GENDER.is_match(input)
}
