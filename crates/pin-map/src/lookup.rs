//! Ordered substring lookup ("contains-map").
//!
//! A [`LookupTable`] maps raw attribute text to a short code by substring
//! containment. Patterns may overlap (`"CF8"` is contained in `"CF8M"`,
//! `"23"` in `"23L"`), so the winner is chosen by an explicit rule rather
//! than by declaration order alone:
//!
//! 1. the pattern whose first occurrence starts earliest in the value wins;
//! 2. at the same start position, the longer pattern wins;
//! 3. remaining ties go to the pattern declared first.
//!
//! Matching is case-sensitive.

use pin_model::Attribute;

/// One `(pattern, code)` entry of a lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupRule {
    pub pattern: &'static str,
    pub code: &'static str,
}

impl LookupRule {
    pub const fn new(pattern: &'static str, code: &'static str) -> Self {
        Self { pattern, code }
    }
}

/// Ordered lookup rules for one attribute, plus the code used when nothing
/// matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    attribute: Attribute,
    rules: Vec<LookupRule>,
    default: &'static str,
}

impl LookupTable {
    /// Create an empty table whose unmatched values code to the empty string.
    pub fn new(attribute: Attribute) -> Self {
        Self {
            attribute,
            rules: Vec::new(),
            default: "",
        }
    }

    /// Set the code returned for unmatched or missing values.
    #[must_use]
    pub fn with_default(mut self, default: &'static str) -> Self {
        self.default = default;
        self
    }

    /// Append a rule. Declaration order only breaks exact ties.
    #[must_use]
    pub fn rule(mut self, pattern: &'static str, code: &'static str) -> Self {
        self.rules.push(LookupRule::new(pattern, code));
        self
    }

    pub fn attribute(&self) -> Attribute {
        self.attribute
    }

    pub fn rules(&self) -> &[LookupRule] {
        &self.rules
    }

    pub fn default_code(&self) -> &'static str {
        self.default
    }

    /// The rule that wins for `value`, if any.
    pub fn resolve(&self, value: &str) -> Option<&LookupRule> {
        find_rule(value, &self.rules)
    }

    /// Code for a raw cell; missing cells yield the default without scanning.
    pub fn lookup(&self, value: Option<&str>) -> &'static str {
        contains_map(value, &self.rules, self.default)
    }
}

/// First-match-wins substring lookup with the leftmost-longest rule.
///
/// Returns `default` for a missing value or when no pattern is contained in
/// the value.
pub fn contains_map<'a>(value: Option<&str>, rules: &[LookupRule], default: &'a str) -> &'a str {
    let Some(text) = value else {
        return default;
    };
    find_rule(text, rules).map_or(default, |rule| rule.code)
}

fn find_rule<'r>(text: &str, rules: &'r [LookupRule]) -> Option<&'r LookupRule> {
    // (start, pattern length, rule)
    let mut best: Option<(usize, usize, &LookupRule)> = None;
    for rule in rules {
        if rule.pattern.is_empty() {
            continue;
        }
        let Some(start) = text.find(rule.pattern) else {
            continue;
        };
        let len = rule.pattern.len();
        let better = match best {
            None => true,
            Some((best_start, best_len, _)) => {
                start < best_start || (start == best_start && len > best_len)
            }
        };
        if better {
            best = Some((start, len, rule));
        }
    }
    best.map(|(_, _, rule)| rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(pairs: &[(&'static str, &'static str)]) -> Vec<LookupRule> {
        pairs
            .iter()
            .map(|&(pattern, code)| LookupRule::new(pattern, code))
            .collect()
    }

    #[test]
    fn missing_value_returns_default() {
        let table = rules(&[("RF", "RF")]);
        assert_eq!(contains_map(None, &table, ""), "");
        assert_eq!(contains_map(None, &table, "NA"), "NA");
    }

    #[test]
    fn unmatched_value_returns_default() {
        let table = rules(&[("RF", "RF")]);
        assert_eq!(contains_map(Some("Threaded"), &table, "NA"), "NA");
    }

    #[test]
    fn earliest_occurrence_wins() {
        let table = rules(&[("316", "2"), ("HF", "1")]);
        assert_eq!(contains_map(Some("ABC-316HF"), &table, ""), "2");

        let reversed = rules(&[("HF", "1"), ("316", "2")]);
        assert_eq!(contains_map(Some("ABC-316HF"), &reversed, ""), "2");
    }

    #[test]
    fn longer_pattern_wins_at_same_start() {
        let table = rules(&[("CF8", "E"), ("CF8M", "G")]);
        assert_eq!(contains_map(Some("CF8M"), &table, ""), "G");
        assert_eq!(contains_map(Some("CF8"), &table, ""), "E");
        assert_eq!(contains_map(Some("ASTM CF8 body"), &table, ""), "E");
    }

    #[test]
    fn declaration_order_breaks_exact_ties() {
        let table = rules(&[("EQ", "2"), ("EQ", "9")]);
        assert_eq!(contains_map(Some("EQ%"), &table, ""), "2");
    }

    #[test]
    fn empty_pattern_never_matches() {
        let table = rules(&[("", "X")]);
        assert_eq!(contains_map(Some("anything"), &table, "-"), "-");
    }

    #[test]
    fn matching_is_case_sensitive() {
        let table = rules(&[("RF", "RF")]);
        assert_eq!(contains_map(Some("rf"), &table, ""), "");
    }

    #[test]
    fn table_builder_keeps_rule_order() {
        let table = LookupTable::new(Attribute::BonnetType)
            .with_default("NA")
            .rule("Standard", "ST")
            .rule("Extended", "EB");
        assert_eq!(table.rules()[0].pattern, "Standard");
        assert_eq!(table.default_code(), "NA");
        assert_eq!(table.lookup(Some("Extended bonnet")), "EB");
        assert_eq!(table.resolve("Finned"), None);
    }
}
