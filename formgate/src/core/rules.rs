//! Fixed per-field format rules and their messages.
//!
//! The table is built once and never mutated. `ConfirmPassword` has no format
//! of its own: it is checked against the current password by the engine.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::types::FieldKind;

pub const EMPTY_MESSAGE: &str = "This field cannot be empty";
pub const NAME_MESSAGE: &str = "Invalid name";
pub const EMAIL_MESSAGE: &str = "Invalid email address";
pub const PASSWORD_MESSAGE: &str = "Password must be 8-32 characters long and contain at least one uppercase and one lowercase letter";
pub const CONFIRM_PASSWORD_MESSAGE: &str = "Passwords do not match";

/// Whitespace as browsers define it for `\s` and `String.prototype.trim`:
/// includes U+FEFF, excludes U+0085. Written as character-class contents.
const WHITESPACE_CLASS: &str = r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Letters (ASCII plus the Latin-1 .. Latin Extended Additional range) and whitespace.
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^[a-zA-Z\x{{00C0}}-\x{{1EF9}}{WHITESPACE_CLASS}]+$")).unwrap()
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^{WHITESPACE_CLASS}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).unwrap()
});

static LINE_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\n\r\x{2028}\x{2029}]").unwrap());
static LOWER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z]").unwrap());
static UPPER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]").unwrap());

static RULES: LazyLock<RuleSet> = LazyLock::new(RuleSet::standard);

/// Format predicate for a single field value.
pub type FormatTest = fn(&str) -> bool;

/// One entry of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub kind: FieldKind,
    /// `None` for fields validated against another field's value.
    pub format: Option<FormatTest>,
    pub message: &'static str,
}

impl Rule {
    /// Apply the format predicate; contextual rules always pass here.
    pub fn test(&self, value: &str) -> bool {
        self.format.is_none_or(|format| format(value))
    }
}

/// Immutable mapping from field kind to rule, indexed in form order.
#[derive(Debug)]
pub struct RuleSet {
    rules: [Rule; 4],
}

impl RuleSet {
    fn standard() -> Self {
        Self {
            rules: [
                Rule {
                    kind: FieldKind::Name,
                    format: Some(is_valid_name),
                    message: NAME_MESSAGE,
                },
                Rule {
                    kind: FieldKind::Email,
                    format: Some(is_valid_email),
                    message: EMAIL_MESSAGE,
                },
                Rule {
                    kind: FieldKind::Password,
                    format: Some(is_valid_password),
                    message: PASSWORD_MESSAGE,
                },
                Rule {
                    kind: FieldKind::ConfirmPassword,
                    format: None,
                    message: CONFIRM_PASSWORD_MESSAGE,
                },
            ],
        }
    }

    /// Look up the rule for `kind`. Total over [`FieldKind`].
    pub fn rule(&self, kind: FieldKind) -> &Rule {
        let rule = &self.rules[kind.index()];
        debug_assert_eq!(rule.kind, kind, "rule table out of order");
        rule
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }
}

/// The process-wide rule table.
pub fn rule_set() -> &'static RuleSet {
    &RULES
}

/// True for the same characters as `WHITESPACE_CLASS`.
pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// True when the value is empty after trimming whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim_matches(is_form_whitespace).is_empty()
}

pub fn is_valid_name(value: &str) -> bool {
    NAME_RE.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Length bound plus lowercase and uppercase co-occurrence anywhere in the value.
///
/// Length is measured in UTF-16 code units, so a character outside the Basic
/// Multilingual Plane counts twice. Line terminators are not allowed.
pub fn is_valid_password(value: &str) -> bool {
    let units = value.encode_utf16().count();
    (8..=32).contains(&units)
        && !LINE_BREAK_RE.is_match(value)
        && LOWER_RE.is_match(value)
        && UPPER_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_accept_letters_accents_and_spaces() {
        assert!(is_valid_name("Müller"));
        assert!(is_valid_name("Ana Costa"));
        assert!(is_valid_name("Nguyễn Văn An"));
        assert!(!is_valid_name("John3"));
        assert!(!is_valid_name("-"));
        assert!(!is_valid_name("O'Brien"));
        assert!(!is_valid_name(""));
    }

    #[test]
    fn emails_need_local_domain_and_dot() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("@b.co"));
    }

    #[test]
    fn passwords_need_length_and_both_cases() {
        assert!(is_valid_password("Abcdefgh"));
        assert!(is_valid_password("zzzzzzzzZ"));
        assert!(!is_valid_password("abcdefgh"));
        assert!(!is_valid_password("ABCDEFGH"));
        assert!(!is_valid_password("short1A"));
        assert!(is_valid_password(&format!("A{}", "b".repeat(31))));
        assert!(!is_valid_password(&format!("A{}", "b".repeat(32))));
    }

    #[test]
    fn passwords_reject_line_breaks() {
        assert!(!is_valid_password("Abcd\nefgh"));
        assert!(!is_valid_password("Abcd\u{2028}efgh"));
    }

    /// Astral characters count as two units toward the length bound.
    #[test]
    fn password_length_counts_utf16_units() {
        assert!(is_valid_password("Abcdef😀"));
        assert!(!is_valid_password("Abcde😀"));
        assert!(is_valid_password(&format!("Ab{}", "😀".repeat(15))));
        assert!(!is_valid_password(&format!("Abc{}", "😀".repeat(15))));
    }

    /// U+FEFF is whitespace and U+0085 is not.
    #[test]
    fn names_use_form_whitespace_set() {
        assert!(is_valid_name("Ana\u{FEFF}Costa"));
        assert!(is_valid_name("Ana\u{3000}Costa"));
        assert!(!is_valid_name("\u{0085}"));
        assert!(!is_valid_name("Ana\u{0085}Costa"));
    }

    #[test]
    fn emails_use_form_whitespace_set() {
        assert!(!is_valid_email("a\u{FEFF}@b.co"));
        assert!(!is_valid_email("a@b.\u{A0}co"));
        assert!(is_valid_email("a\u{0085}@b.co"));
    }

    #[test]
    fn blank_follows_form_whitespace_set() {
        assert!(is_blank("\u{FEFF}"));
        assert!(is_blank(" \u{FEFF}\u{A0}\u{205F} "));
        assert!(!is_blank("\u{0085}"));
    }

    #[test]
    fn whitespace_predicate_matches_regex_class() {
        let class = Regex::new(&format!("^[{WHITESPACE_CLASS}]$")).unwrap();
        for code in 0..=0x3000_u32 {
            if let Some(c) = char::from_u32(code) {
                assert_eq!(
                    is_form_whitespace(c),
                    class.is_match(c.encode_utf8(&mut [0; 4])),
                    "U+{code:04X}"
                );
            }
        }
        assert!(is_form_whitespace('\u{FEFF}'));
    }

    #[test]
    fn rule_lookup_is_total_and_ordered() {
        let rules = rule_set();
        for kind in FieldKind::ALL {
            assert_eq!(rules.rule(kind).kind, kind);
        }
        assert_eq!(rules.iter().count(), 4);
    }

    #[test]
    fn confirm_password_has_no_format() {
        let rule = rule_set().rule(FieldKind::ConfirmPassword);
        assert!(rule.format.is_none());
        assert!(rule.test("anything at all"));
        assert_eq!(rule.message, CONFIRM_PASSWORD_MESSAGE);
    }

    #[test]
    fn blank_detection_trims_whitespace() {
        assert!(is_blank(""));
        assert!(is_blank("  \t\n"));
        assert!(!is_blank(" a "));
    }
}
