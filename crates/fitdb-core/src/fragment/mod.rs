//! Validator fragments: the acceptance rule for one primitive value shape.
//!
//! A fragment never sees a whole record. It receives the value stored under
//! one key (or nothing, when the key is absent), coerces it, and either hands
//! back the coerced value or a detail line describing why it was rejected.
//! The user-facing message for a rejection belongs to the owning field
//! descriptor, not to the fragment.

pub mod catalog;
pub mod check;
pub mod context;
pub mod sanitize;

use crate::fragment::{
    check::{Bounds, CharLen, Check, InSet, IsUuid, ItemCount},
    context::{IssueSink, ItemIssues, Issues},
    sanitize::{Sanitizer, Trim},
};
use serde_json::Value;

///
/// Presence
/// What an absent or null value means for a fragment.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Presence {
    /// Key must be present and non-null.
    Required,
    /// Key may be absent; a present value must still have the right shape.
    Optional,
    /// Key may be absent and is then filled with the shape's empty value.
    Defaulted,
}

///
/// Shape
/// Structural rule for a present, non-null value.
///

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Any,
    Bool,
    Integer,
    Uuid,
    Text { min: usize, max: usize },
    Number { min: f64, max: f64 },
    NumberList { len: Option<usize>, min: f64, max: f64 },
    IdList { min_items: usize },
    Enum(&'static [&'static str]),
    EnumList(&'static [&'static str]),
}

impl Shape {
    /// Value used to fill an absent `Defaulted` key.
    fn empty(self) -> Value {
        match self {
            Self::Text { .. } => Value::String(String::new()),
            Self::NumberList { .. } | Self::IdList { .. } | Self::EnumList(_) => {
                Value::Array(Vec::new())
            }
            Self::Bool => Value::Bool(false),
            _ => Value::Null,
        }
    }

    fn sanitize(self, value: &mut Value) {
        match (self, value) {
            (Self::Text { .. }, Value::String(s)) => Trim.sanitize(s),
            (Self::Integer, value) if value.is_f64() => {
                if let Some(n) = whole_i64(value) {
                    *value = Value::from(n);
                }
            }
            _ => {}
        }
    }

    fn check(self, value: &Value, ctx: &mut dyn IssueSink) {
        match self {
            Self::Any => {}
            Self::Bool => {
                if !value.is_boolean() {
                    ctx.issue(mismatch("a boolean", value));
                }
            }
            Self::Integer => {
                if !is_integer(value) {
                    ctx.issue(mismatch("an integer", value));
                }
            }
            Self::Uuid => match value.as_str() {
                Some(s) => IsUuid.check(s, ctx),
                None => ctx.issue(mismatch("a string", value)),
            },
            Self::Text { min, max } => match value.as_str() {
                Some(s) => CharLen::new(min, max).check(s, ctx),
                None => ctx.issue(mismatch("a string", value)),
            },
            Self::Number { min, max } => match value.as_f64() {
                Some(n) => Bounds::new(min, max).check(&n, ctx),
                None => ctx.issue(mismatch("a number", value)),
            },
            Self::NumberList { len, min, max } => {
                let Some(items) = value.as_array() else {
                    ctx.issue(mismatch("an array", value));
                    return;
                };
                if let Some(len) = len {
                    ItemCount::Exactly(len).check(items.as_slice(), ctx);
                }
                let bounds = Bounds::new(min, max);
                for (i, item) in items.iter().enumerate() {
                    let mut item_issues = ItemIssues::new(&mut *ctx, i);
                    match item.as_f64() {
                        Some(n) => bounds.check(&n, &mut item_issues),
                        None => item_issues.issue(mismatch("a number", item)),
                    }
                }
            }
            Self::IdList { min_items } => {
                let Some(items) = value.as_array() else {
                    ctx.issue(mismatch("an array", value));
                    return;
                };
                ItemCount::AtLeast(min_items).check(items.as_slice(), ctx);
                for (i, item) in items.iter().enumerate() {
                    let mut item_issues = ItemIssues::new(&mut *ctx, i);
                    match item.as_str() {
                        Some(s) => IsUuid.check(s, &mut item_issues),
                        None => item_issues.issue(mismatch("a string", item)),
                    }
                }
            }
            Self::Enum(values) => match value.as_str() {
                Some(s) => InSet::new(values).check(s, ctx),
                None => ctx.issue(mismatch("a string", value)),
            },
            Self::EnumList(values) => {
                let Some(items) = value.as_array() else {
                    ctx.issue(mismatch("an array", value));
                    return;
                };
                let set = InSet::new(values);
                for (i, item) in items.iter().enumerate() {
                    let mut item_issues = ItemIssues::new(&mut *ctx, i);
                    match item.as_str() {
                        Some(s) => set.check(s, &mut item_issues),
                        None => item_issues.issue(mismatch("a string", item)),
                    }
                }
            }
        }
    }
}

///
/// Fragment
///
/// Reusable acceptance rule for one primitive value.
/// Fragments are process-wide statics (see [`catalog`]) and never mutate.
///

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fragment {
    pub name: &'static str,
    pub presence: Presence,
    pub shape: Shape,
}

impl Fragment {
    #[must_use]
    pub const fn new(name: &'static str, presence: Presence, shape: Shape) -> Self {
        Self {
            name,
            presence,
            shape,
        }
    }

    /// Coerce and check one value.
    ///
    /// `Ok(None)` means the key stays absent; `Ok(Some(_))` carries the
    /// coerced value; `Err` carries the rejection detail.
    pub fn apply(&self, value: Option<&Value>) -> Result<Option<Value>, String> {
        let value = match (value, self.presence) {
            (None, Presence::Optional) => return Ok(None),
            (None, Presence::Defaulted) => return Ok(Some(self.shape.empty())),
            (None, Presence::Required) => return Err("value is required".to_string()),
            (Some(Value::Null), Presence::Required) => {
                return Err("value is required".to_string());
            }
            (Some(Value::Null), _) if self.shape != Shape::Any => {
                return Err("value must not be null".to_string());
            }
            (Some(value), _) => value,
        };

        let mut value = value.clone();
        self.shape.sanitize(&mut value);

        let mut issues = Issues::new();
        self.shape.check(&value, &mut issues);
        issues.into_result()?;

        Ok(Some(value))
    }

    /// Whether a present value passes this fragment.
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        self.apply(Some(value)).is_ok()
    }
}

// integers may arrive as whole-valued floats from storage engines
fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => {
            n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
        }
        _ => false,
    }
}

/// Integer view of a number, accepting whole-valued floats.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn whole_i64(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }

    let f = value.as_f64()?;
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    let in_range = f >= -9_223_372_036_854_775_808.0 && f < 9_223_372_036_854_775_808.0;

    if f.fract() == 0.0 && in_range {
        Some(f as i64)
    } else {
        None
    }
}

fn mismatch(expected: &str, found: &Value) -> String {
    let found = match found {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };

    format!("expected {expected}, found {found}")
}

///
/// TESTS
///
