//! Text collation used to order records by their text keys, such as song titles.
//!
//! The collation chosen for a tree must stay the same for every insert, search and
//! remove on that tree; mixing collations breaks the ordering invariant.

use std::cmp::Ordering;

use cadence_collections::Comparator;
use cadence_common::{Result, error::Error};

/// Comparison rules for text keys.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Collation {
    /// Letters compare equal regardless of case: "hello" == "HELLO".
    #[default]
    CaseInsensitive,
    /// Case-insensitive first, then character order to break ties.
    CasePreserving,
    /// Plain character order.
    Ordinal,
}

impl TryFrom<&str> for Collation {
    type Error = cadence_common::error::Error;

    fn try_from(name: &str) -> Result<Self> {
        match name {
            "case-insensitive" => Ok(Collation::CaseInsensitive),
            "case-preserving" => Ok(Collation::CasePreserving),
            "ordinal" => Ok(Collation::Ordinal),
            _ => Err(Error::invalid_arg(
                "name",
                format!("Unrecognized collation: {name}"),
            )),
        }
    }
}

/// Resolves a collation by name.
pub fn create_collation(name: &str) -> Result<Collation> {
    Collation::try_from(name)
}

impl Collation {
    pub const fn name(&self) -> &'static str {
        match self {
            Collation::CaseInsensitive => "case-insensitive",
            Collation::CasePreserving => "case-preserving",
            Collation::Ordinal => "ordinal",
        }
    }

    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        match self {
            Collation::CaseInsensitive => compare_folded(left, right),
            Collation::CasePreserving => {
                compare_folded(left, right).then_with(|| left.chars().cmp(right.chars()))
            }
            Collation::Ordinal => left.chars().cmp(right.chars()),
        }
    }

    pub fn equals(&self, left: &str, right: &str) -> bool {
        self.compare(left, right) == Ordering::Equal
    }
}

impl Comparator<str> for Collation {
    fn compare(&self, left: &str, right: &str) -> Ordering {
        Collation::compare(self, left, right)
    }
}

fn compare_folded(left: &str, right: &str) -> Ordering {
    left.chars().map(fold_case).cmp(right.chars().map(fold_case))
}

/// Maps a character to a single case-folded form: uppercase, then lowercase.
///
/// Characters whose case mapping expands to several code points stay unchanged,
/// so folding never changes the character count.
fn fold_case(c: char) -> char {
    let upper = single_char(c, c.to_uppercase());
    single_char(upper, upper.to_lowercase())
}

fn single_char(original: char, mut mapped: impl Iterator<Item = char>) -> char {
    match (mapped.next(), mapped.next()) {
        (Some(ch), None) => ch,
        _ => original,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        let collation = Collation::CaseInsensitive;
        assert_eq!(collation.compare("Hello", "hELLO"), Ordering::Equal);
        assert_eq!(collation.compare("apple", "Banana"), Ordering::Less);
        assert_eq!(collation.compare("Zebra", "apple"), Ordering::Greater);
        assert_eq!(collation.compare("abc", "ABCD"), Ordering::Less);
        assert_eq!(collation.compare("", ""), Ordering::Equal);
        assert!(collation.equals("ÉCOLE", "école"));
        assert!(collation.equals("straße", "STRAẞE"));
    }

    #[test]
    fn test_case_preserving() {
        let collation = Collation::CasePreserving;
        assert_eq!(collation.compare("Apple", "apple"), Ordering::Less);
        assert_eq!(collation.compare("apple", "Banana"), Ordering::Less);
        assert_eq!(collation.compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_ordinal() {
        let collation = Collation::Ordinal;
        assert_eq!(collation.compare("Zebra", "apple"), Ordering::Less);
        assert!(!collation.equals("a", "A"));
    }

    #[test]
    fn test_create_collation() {
        for collation in [
            Collation::CaseInsensitive,
            Collation::CasePreserving,
            Collation::Ordinal,
        ] {
            assert_eq!(create_collation(collation.name()).unwrap(), collation);
        }
        assert!(create_collation("klingon").is_err());
        assert_eq!(Collation::default(), Collation::CaseInsensitive);
    }

    #[test]
    fn test_sorts_through_comparator() {
        let mut titles = vec!["delta", "Alpha", "charlie", "Bravo"];
        titles.sort_by(|a, b| Comparator::compare(&Collation::CaseInsensitive, *a, *b));
        assert_eq!(titles, vec!["Alpha", "Bravo", "charlie", "delta"]);
    }
}
