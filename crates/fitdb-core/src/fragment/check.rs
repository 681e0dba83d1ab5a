use crate::fragment::context::IssueSink;
use uuid::{Uuid, Variant};

///
/// Check
/// One acceptance rule over an already-shaped value.
///

pub trait Check<T: ?Sized> {
    fn check(&self, value: &T, ctx: &mut dyn IssueSink);
}

//
// ============================================================================
// Length
// ============================================================================
//

///
/// CharLen
/// Inclusive bounds on the number of characters in a string.
///

#[derive(Clone, Copy, Debug)]
pub struct CharLen {
    min: usize,
    max: usize,
}

impl CharLen {
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

impl Check<str> for CharLen {
    fn check(&self, s: &str, ctx: &mut dyn IssueSink) {
        let len = s.chars().count();

        if self.max == usize::MAX {
            if len < self.min {
                ctx.issue(format!(
                    "length ({len}) is lower than minimum of {}",
                    self.min
                ));
            }
        } else if len < self.min || len > self.max {
            ctx.issue(format!(
                "length ({len}) must be between {} and {} (inclusive)",
                self.min, self.max
            ));
        }
    }
}

///
/// ItemCount
/// Bounds on the number of elements in a sequence.
///

#[derive(Clone, Copy, Debug)]
pub enum ItemCount {
    AtLeast(usize),
    Exactly(usize),
}

impl<T> Check<[T]> for ItemCount {
    fn check(&self, items: &[T], ctx: &mut dyn IssueSink) {
        let len = items.len();

        match *self {
            Self::AtLeast(min) if len < min => {
                ctx.issue(format!("length ({len}) is lower than minimum of {min}"));
            }
            Self::Exactly(target) if len != target => {
                ctx.issue(format!("length ({len}) is not equal to {target}"));
            }
            _ => {}
        }
    }
}

//
// ============================================================================
// Number
// ============================================================================
//

///
/// Bounds
/// Inclusive numeric range.
///

#[derive(Clone, Copy, Debug)]
pub struct Bounds {
    min: f64,
    max: f64,
}

impl Bounds {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Check<f64> for Bounds {
    fn check(&self, n: &f64, ctx: &mut dyn IssueSink) {
        if !n.is_finite() {
            ctx.issue(format!("{n} is not a finite number"));
        } else if *n < self.min || *n > self.max {
            ctx.issue(format!(
                "{n} must be between {} and {} (inclusive)",
                self.min, self.max
            ));
        }
    }
}

//
// ============================================================================
// Text
// ============================================================================
//

///
/// IsUuid
/// Hyphenated RFC 4122 UUID text, versions 1 through 5, or the nil UUID.
///

#[derive(Clone, Copy, Debug)]
pub struct IsUuid;

impl IsUuid {
    fn accepts(s: &str) -> bool {
        // hyphenated is the only 36-character form the parser accepts
        if s.len() != 36 {
            return false;
        }

        Uuid::try_parse(s).is_ok_and(|uuid| {
            uuid.is_nil()
                || (uuid.get_variant() == Variant::RFC4122
                    && (1..=5).contains(&uuid.get_version_num()))
        })
    }
}

impl Check<str> for IsUuid {
    fn check(&self, s: &str, ctx: &mut dyn IssueSink) {
        if !Self::accepts(s) {
            ctx.issue(format!("'{s}' is not a valid UUID"));
        }
    }
}

///
/// InSet
/// Value must be one of a fixed set of slugs.
///

#[derive(Clone, Copy, Debug)]
pub struct InSet {
    values: &'static [&'static str],
}

impl InSet {
    #[must_use]
    pub const fn new(values: &'static [&'static str]) -> Self {
        Self { values }
    }
}

impl Check<str> for InSet {
    fn check(&self, s: &str, ctx: &mut dyn IssueSink) {
        if !self.values.contains(&s) {
            ctx.issue(format!(
                "'{s}' is not in the allowed values: {:?}",
                self.values
            ));
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::context::Issues;

    fn run<T: ?Sized>(check: &impl Check<T>, value: &T) -> Result<(), String> {
        let mut list = Issues::new();
        check.check(value, &mut list);

        list.into_result()
    }

    #[test]
    fn char_len_counts_characters_not_bytes() {
        let check = CharLen::new(1, 3);

        assert!(run(&check, "äöü").is_ok());
        assert_eq!(
            run(&check, "abcd"),
            Err("length (4) must be between 1 and 3 (inclusive)".to_string())
        );
    }

    #[test]
    fn unbounded_char_len_only_reports_minimum() {
        let check = CharLen::new(1, usize::MAX);

        assert_eq!(
            run(&check, ""),
            Err("length (0) is lower than minimum of 1".to_string())
        );
    }

    #[test]
    fn item_count_variants() {
        assert!(run(&ItemCount::AtLeast(1), &[1][..]).is_ok());
        assert!(run(&ItemCount::AtLeast(1), &[] as &[i32]).is_err());
        assert_eq!(
            run(&ItemCount::Exactly(2), &[1, 2, 3][..]),
            Err("length (3) is not equal to 2".to_string())
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        let check = Bounds::new(0.0, 100.0);

        assert!(run(&check, &0.0).is_ok());
        assert!(run(&check, &100.0).is_ok());
        assert!(run(&check, &-1.0).is_err());
        assert!(run(&check, &100.0001).is_err());
        assert!(run(&check, &f64::NAN).is_err());
    }

    #[test]
    fn uuid_must_be_hyphenated() {
        assert!(run(&IsUuid, "50c1fc75-0975-45f8-8177-ff4988b00de2").is_ok());
        assert!(run(&IsUuid, "50c1fc75097545f88177ff4988b00de2").is_err());
        assert!(run(&IsUuid, "not-a-uuid").is_err());
    }

    #[test]
    fn uuid_must_be_rfc_version_one_to_five() {
        // v1 and v5
        assert!(run(&IsUuid, "c232ab00-9414-11ec-b3c8-9f6bdeced846").is_ok());
        assert!(run(&IsUuid, "886313e1-3b8a-5372-9b90-0c9aee199e5d").is_ok());
        assert!(run(&IsUuid, "00000000-0000-0000-0000-000000000000").is_ok());

        // versions outside 1-5, then a Microsoft variant
        assert!(run(&IsUuid, "017f22e2-79b0-7cc3-98c4-dc0c0c07398f").is_err());
        assert!(run(&IsUuid, "50c1fc75-0975-05f8-8177-ff4988b00de2").is_err());
        assert!(run(&IsUuid, "50c1fc75-0975-45f8-c177-ff4988b00de2").is_err());
    }

    #[test]
    fn in_set_reports_allowed_values() {
        let check = InSet::new(&["a", "b"]);

        assert!(run(&check, "a").is_ok());
        assert_eq!(
            run(&check, "c"),
            Err("'c' is not in the allowed values: [\"a\", \"b\"]".to_string())
        );
    }
}
