//! # Folgezettel Identifiers
//!
//! Every note in a Luhmann-style Zettelkasten carries a short alphanumeric identifier
//! that encodes its position in a tree. The identifier *is* the tree: there is no other
//! stored structure.
//!
//! ## Grammar
//!
//! An identifier is a concatenation of **components**, each a maximal run of decimal
//! digits (`[0-9]+`) or lowercase letters (`[a-z]+`). By convention the kinds alternate
//! with depth:
//!
//! ```text
//! 1        top level  (digits)
//! 1a       level 1    (letters)
//! 1a2      level 2    (digits)
//! 1a2c     level 3    (letters)
//! ```
//!
//! Dropping the last component yields the parent (`1a2` → `1a`). A single-component
//! identifier has no parent and lives at the top level.
//!
//! ## Incrementing
//!
//! Only the last component changes when moving to the next sibling:
//! - Numeric components count in decimal without padding (`9` → `10`, `09` → `10`).
//! - Letter components bump their *trailing* letter, and `z` overflows into `aa`
//!   (`a` → `b`, `z` → `aa`, `az` → `aaa`, `zz` → `zaa`). Interior letters never carry.
//!   This is not positional base-26 arithmetic, and existing note collections depend
//!   on exactly this sequence.
//!
//! ## Permissive Degradation
//!
//! None of the functions here fail. Identifiers are normally produced by this module,
//! so malformed input means a note went missing, not that the engine was misused:
//! empty or unparseable input comes back unchanged, as an empty string, or as the
//! default seed component.
//!
//! ## Filenames
//!
//! Notes are files whose name starts with their identifier. [`file_to_id`] extracts it
//! under one of three [`MatchRule`]s; [`MatchPolicy`] bundles the rule with the
//! separator and the recognized note extension.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

static COMPONENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+|[a-z]+").expect("component pattern is valid"));

static STRICT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9a-z]+)$").expect("strict pattern is valid"));

static LEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9a-z]+)").expect("leading pattern is valid"));

/// Seed for the first child of a numeric-terminated identifier.
pub const LETTER_SEED: &str = "a";
/// Seed for the first child of a letter-terminated (or empty) identifier.
pub const NUMERIC_SEED: &str = "1";

/// One maximal digit-run or letter-run of an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Component {
    Numeric(String),
    Letters(String),
}

impl Component {
    /// Classifies a whole string as a single component.
    ///
    /// Returns `None` for the empty string or anything mixing kinds or
    /// containing characters outside `[0-9a-z]`.
    pub fn parse(s: &str) -> Option<Component> {
        if s.is_empty() {
            return None;
        }
        if s.bytes().all(|b| b.is_ascii_digit()) {
            Some(Component::Numeric(s.to_string()))
        } else if s.bytes().all(|b| b.is_ascii_lowercase()) {
            Some(Component::Letters(s.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Component::Numeric(s) | Component::Letters(s) => s,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Component::Numeric(_))
    }

    /// The next component at the same depth.
    pub fn increment(&self) -> Component {
        match self {
            Component::Numeric(digits) => Component::Numeric(increment_digits(digits)),
            Component::Letters(letters) => Component::Letters(increment_letters(letters)),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn increment_digits(digits: &str) -> String {
    let mut out: Vec<char> = digits.trim_start_matches('0').chars().collect();
    let mut carry = true;
    for d in out.iter_mut().rev() {
        if *d == '9' {
            *d = '0';
        } else {
            *d = char::from(*d as u8 + 1);
            carry = false;
            break;
        }
    }
    if carry {
        out.insert(0, '1');
    }
    out.into_iter().collect()
}

fn increment_letters(letters: &str) -> String {
    let Some((pos, last)) = letters.char_indices().last() else {
        return letters.to_string();
    };
    let mut out = letters[..pos].to_string();
    if last == 'z' {
        out.push_str("aa");
    } else {
        out.push(char::from(last as u8 + 1));
    }
    out
}

/// Splits an identifier into its components, left to right.
///
/// Characters that are neither digits nor lowercase letters break a run and are
/// otherwise dropped.
pub fn parse_components(id: &str) -> Vec<Component> {
    COMPONENT_RE
        .find_iter(id)
        .filter_map(|m| Component::parse(m.as_str()))
        .collect()
}

fn join(components: &[Component]) -> String {
    components.iter().map(Component::as_str).collect()
}

/// Increments a single component. Empty or unclassifiable input is returned as is.
pub fn increment_component(component: &str) -> String {
    match Component::parse(component) {
        Some(c) => c.increment().to_string(),
        None => component.to_string(),
    }
}

/// The next sibling identifier: only the last component changes.
pub fn increment_id(id: &str) -> String {
    let mut components = parse_components(id);
    let Some(last) = components.pop() else {
        return id.to_string();
    };
    components.push(last.increment());
    join(&components)
}

/// The parent identifier, or `""` for top-level (and unparseable) identifiers.
pub fn parent_id(id: &str) -> String {
    let components = parse_components(id);
    if components.len() <= 1 {
        return String::new();
    }
    join(&components[..components.len() - 1])
}

/// Number of components; `0` for unparseable input.
pub fn depth(id: &str) -> usize {
    parse_components(id).len()
}

/// Seed component for the first child of `id`, keeping kinds alternating.
pub fn next_component_kind(id: &str) -> &'static str {
    match parse_components(id).last() {
        Some(c) if c.is_numeric() => LETTER_SEED,
        _ => NUMERIC_SEED,
    }
}

pub fn first_child_of(parent_id: &str) -> String {
    format!("{}{}", parent_id, next_component_kind(parent_id))
}

/// Walks the sibling sequence from `start_id` (inclusive) and returns the first
/// identifier for which `exists` is false.
///
/// Terminates whenever `exists` eventually returns false along the chain. An
/// unparseable `start_id` cannot advance and is returned as is.
pub fn first_available_id<F>(start_id: &str, mut exists: F) -> String
where
    F: FnMut(&str) -> bool,
{
    let mut candidate = start_id.to_string();
    while exists(&candidate) {
        let next = increment_id(&candidate);
        if next == candidate {
            break;
        }
        candidate = next;
    }
    candidate
}

/// True iff `s` is exactly one-or-more digit/letter runs and nothing else.
pub fn is_valid_id(s: &str) -> bool {
    STRICT_RE.is_match(s)
}

/// Orders identifiers the way they sit in the tree: component by component,
/// numbers by value, letter runs by length then alphabetically, numbers before
/// letters, and a parent before all of its descendants.
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    let left = parse_components(a);
    let right = parse_components(b);
    for (l, r) in left.iter().zip(right.iter()) {
        let ord = match (l, r) {
            (Component::Numeric(x), Component::Numeric(y)) => {
                let x = x.trim_start_matches('0');
                let y = y.trim_start_matches('0');
                x.len().cmp(&y.len()).then_with(|| x.cmp(y))
            }
            (Component::Letters(x), Component::Letters(y)) => {
                x.len().cmp(&y.len()).then_with(|| x.cmp(y))
            }
            (Component::Numeric(_), Component::Letters(_)) => Ordering::Less,
            (Component::Letters(_), Component::Numeric(_)) => Ordering::Greater,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    left.len().cmp(&right.len()).then_with(|| a.cmp(b))
}

/// How a leading identifier is recognized in a filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MatchRule {
    /// The whole name (sans extension) is the identifier.
    Strict,
    /// The identifier is followed immediately by the configured separator.
    Separator,
    /// Whatever leading digit/letter run the name starts with.
    #[default]
    Fuzzy,
}

impl fmt::Display for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchRule::Strict => write!(f, "strict"),
            MatchRule::Separator => write!(f, "separator"),
            MatchRule::Fuzzy => write!(f, "fuzzy"),
        }
    }
}

impl FromStr for MatchRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(MatchRule::Strict),
            "separator" => Ok(MatchRule::Separator),
            "fuzzy" => Ok(MatchRule::Fuzzy),
            other => Err(format!(
                "unsupported match rule `{other}`; expected strict|separator|fuzzy"
            )),
        }
    }
}

impl TryFrom<String> for MatchRule {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MatchRule> for String {
    fn from(rule: MatchRule) -> Self {
        rule.to_string()
    }
}

/// Extracts the leading identifier from a filename stem, or `""` when the name
/// does not match under `rule`. `separator` is only consulted by
/// [`MatchRule::Separator`].
pub fn file_to_id(filename: &str, rule: MatchRule, separator: &str) -> String {
    let captured = match rule {
        MatchRule::Strict => STRICT_RE
            .captures(filename)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string()),
        MatchRule::Fuzzy => LEADING_RE
            .captures(filename)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string()),
        MatchRule::Separator => {
            let pattern = format!("^([0-9a-z]+){}", regex::escape(separator));
            match Regex::new(&pattern) {
                Ok(re) => re
                    .captures(filename)
                    .and_then(|c| c.get(1))
                    .map(|m| m.as_str().to_string()),
                Err(err) => {
                    log::warn!("event=separator_pattern status=error error={}", err);
                    None
                }
            }
        }
    };
    captured.unwrap_or_default()
}

/// The identifier-matching policy: rule, separator and note-file suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchPolicy {
    pub rule: MatchRule,
    pub separator: String,
    pub extension: String,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            rule: MatchRule::Fuzzy,
            separator: " ".to_string(),
            extension: ".md".to_string(),
        }
    }
}

impl MatchPolicy {
    pub fn new(rule: MatchRule, separator: impl Into<String>, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        let extension = if extension.is_empty() || extension.starts_with('.') {
            extension
        } else {
            format!(".{}", extension)
        };
        Self {
            rule,
            separator: separator.into(),
            extension,
        }
    }

    /// The filename without the recognized note suffix, if it carries one.
    pub fn stem<'a>(&self, filename: &'a str) -> Option<&'a str> {
        filename.strip_suffix(self.extension.as_str())
    }

    /// The identifier of a note file, if it is one.
    pub fn id_of(&self, filename: &str) -> Option<String> {
        let stem = self.stem(filename)?;
        let id = file_to_id(stem, self.rule, &self.separator);
        (!id.is_empty()).then_some(id)
    }

    /// True iff `filename` carries the note suffix and yields a non-empty identifier.
    pub fn is_zettel_file(&self, filename: &str) -> bool {
        self.id_of(filename).is_some()
    }

    /// The human title: the stem minus the leading identifier and a directly
    /// following separator.
    pub fn title_of(&self, filename: &str, id: &str) -> String {
        let stem = self.stem(filename).unwrap_or(filename);
        let rest = stem.strip_prefix(id).unwrap_or(stem);
        let rest = if self.separator.is_empty() {
            rest
        } else {
            rest.strip_prefix(self.separator.as_str()).unwrap_or(rest)
        };
        rest.trim().to_string()
    }

    /// Builds the filename for a new note.
    pub fn build_filename(&self, id: &str, title: &str, add_title: bool) -> String {
        let title = title.trim();
        if add_title && !title.is_empty() {
            format!("{}{}{}{}", id, self.separator, title, self.extension)
        } else {
            format!("{}{}", id, self.extension)
        }
    }
}

/// Free-function form of [`MatchPolicy::is_zettel_file`].
pub fn is_zettel_file(filename: &str, policy: &MatchPolicy) -> bool {
    policy.is_zettel_file(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parse_components_alternating() {
        let parts = parse_components("1a2bc13");
        assert_eq!(
            parts,
            vec![
                Component::Numeric("1".into()),
                Component::Letters("a".into()),
                Component::Numeric("2".into()),
                Component::Letters("bc".into()),
                Component::Numeric("13".into()),
            ]
        );
    }

    #[test]
    fn test_parse_components_skips_foreign_chars() {
        let parts: Vec<String> = parse_components("12-ab_3").iter().map(|c| c.to_string()).collect();
        assert_eq!(parts, vec!["12", "ab", "3"]);
        assert!(parse_components("").is_empty());
        assert!(parse_components("--").is_empty());
        assert!(parse_components("ABC").is_empty());
    }

    #[test]
    fn test_increment_component_numeric() {
        assert_eq!(increment_component("9"), "10");
        assert_eq!(increment_component("0"), "1");
        assert_eq!(increment_component("42"), "43");
        assert_eq!(increment_component("09"), "10");
        assert_eq!(increment_component("199"), "200");
        assert_eq!(
            increment_component("99999999999999999999999999999999"),
            "100000000000000000000000000000000"
        );
    }

    #[test]
    fn test_increment_component_letters() {
        assert_eq!(increment_component("a"), "b");
        assert_eq!(increment_component("y"), "z");
        assert_eq!(increment_component("z"), "aa");
        assert_eq!(increment_component("az"), "aaa");
        assert_eq!(increment_component("ab"), "ac");
    }

    #[test]
    fn test_increment_component_trailing_overflow_only() {
        assert_eq!(increment_component("zz"), "zaa");
    }

    #[test]
    fn test_increment_component_empty_is_unchanged() {
        assert_eq!(increment_component(""), "");
        assert_eq!(increment_component("a1"), "a1");
    }

    #[test]
    fn test_increment_id() {
        assert_eq!(increment_id("1"), "2");
        assert_eq!(increment_id("1a"), "1b");
        assert_eq!(increment_id("1a9"), "1a10");
        assert_eq!(increment_id("3z"), "3aa");
        assert_eq!(increment_id(""), "");
        assert_eq!(increment_id("--"), "--");
    }

    #[test]
    fn test_parent_id() {
        assert_eq!(parent_id("1a2"), "1a");
        assert_eq!(parent_id("1a"), "1");
        assert_eq!(parent_id("1"), "");
        assert_eq!(parent_id(""), "");
        assert_eq!(parent_id("12bc"), "12");
    }

    #[test]
    fn test_first_child_of() {
        assert_eq!(first_child_of("1"), "1a");
        assert_eq!(first_child_of("1a"), "1a1");
        assert_eq!(first_child_of("1a10"), "1a10a");
        assert_eq!(first_child_of(""), "1");
    }

    #[test]
    fn test_next_component_kind() {
        assert_eq!(next_component_kind("7"), "a");
        assert_eq!(next_component_kind("7c"), "1");
        assert_eq!(next_component_kind(""), "1");
    }

    #[test]
    fn test_parent_of_first_child_round_trips() {
        for id in ["1", "1a", "1a2", "22bb3"] {
            assert_eq!(parent_id(&first_child_of(id)), id);
        }
    }

    #[test]
    fn test_first_available_id_skips_occupied() {
        let taken: HashSet<&str> = ["1", "2", "3"].into_iter().collect();
        assert_eq!(first_available_id("1", |c| taken.contains(c)), "4");
    }

    #[test]
    fn test_first_available_id_start_is_free() {
        let taken: HashSet<&str> = ["1", "3"].into_iter().collect();
        assert_eq!(first_available_id("2", |c| taken.contains(c)), "2");
    }

    #[test]
    fn test_first_available_id_letter_overflow() {
        let taken: HashSet<String> = ('a'..='z').map(|c| format!("1{}", c)).collect();
        assert_eq!(first_available_id("1a", |c| taken.contains(c)), "1aa");
    }

    #[test]
    fn test_first_available_id_unparseable_start_does_not_spin() {
        assert_eq!(first_available_id("", |_| true), "");
    }

    #[test]
    fn test_file_to_id_strict() {
        assert_eq!(file_to_id("1a2", MatchRule::Strict, " "), "1a2");
        assert_eq!(file_to_id("1a2 note", MatchRule::Strict, " "), "");
        assert_eq!(file_to_id("", MatchRule::Strict, " "), "");
    }

    #[test]
    fn test_file_to_id_separator() {
        assert_eq!(file_to_id("1a2 - My Note", MatchRule::Separator, " - "), "1a2");
        assert_eq!(file_to_id("1a2note", MatchRule::Separator, " - "), "");
        assert_eq!(file_to_id("1a2 My Note", MatchRule::Separator, " - "), "");
        assert_eq!(file_to_id("4.b (x)", MatchRule::Separator, "."), "4");
    }

    #[test]
    fn test_file_to_id_fuzzy() {
        assert_eq!(file_to_id("1a2_note", MatchRule::Fuzzy, " "), "1a2");
        assert_eq!(file_to_id("1a2", MatchRule::Fuzzy, " "), "1a2");
        assert_eq!(file_to_id("Note 1a2", MatchRule::Fuzzy, " "), "");
    }

    #[test]
    fn test_match_rule_from_str() {
        assert_eq!("Strict".parse::<MatchRule>().unwrap(), MatchRule::Strict);
        assert_eq!(" separator ".parse::<MatchRule>().unwrap(), MatchRule::Separator);
        assert!("loose".parse::<MatchRule>().is_err());
    }

    #[test]
    fn test_policy_is_zettel_file() {
        let policy = MatchPolicy::new(MatchRule::Separator, " - ", "md");
        assert_eq!(policy.extension, ".md");
        assert!(policy.is_zettel_file("1a - Idea.md"));
        assert!(!policy.is_zettel_file("1a - Idea.txt"));
        assert!(!policy.is_zettel_file("Idea.md"));
        assert!(!policy.is_zettel_file("1a.md"));
        assert!(is_zettel_file("1a - x.md", &policy));
    }

    #[test]
    fn test_policy_title_and_filename() {
        let policy = MatchPolicy::new(MatchRule::Separator, " - ", ".md");
        assert_eq!(policy.title_of("1a - Some Idea.md", "1a"), "Some Idea");
        assert_eq!(policy.build_filename("1b", "Next", true), "1b - Next.md");
        assert_eq!(policy.build_filename("1b", "Next", false), "1b.md");
        assert_eq!(policy.build_filename("1b", "   ", true), "1b.md");
    }

    #[test]
    fn test_compare_ids_tree_order() {
        let mut ids = vec!["2", "1a10", "10", "1", "1b", "1a2", "1a", "1aa", "1z"];
        ids.sort_by(|a, b| compare_ids(a, b));
        assert_eq!(ids, vec!["1", "1a", "1a2", "1a10", "1b", "1z", "1aa", "2", "10"]);
    }

    #[test]
    fn test_is_valid_id() {
        assert!(is_valid_id("1a2"));
        assert!(!is_valid_id(""));
        assert!(!is_valid_id("1A"));
        assert!(!is_valid_id("1 a"));
    }
}
