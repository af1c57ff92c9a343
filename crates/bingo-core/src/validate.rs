//! Validation of incoming goal sets and card identifiers.
//!
//! Everything here is pure. A request that fails these checks is rejected
//! before the store is touched.
//!
//! A goal is 1 to [`MAX_GOAL_CHARS`] characters drawn from a single composed
//! set: ASCII letters and digits plus the Hiragana, Katakana and CJK
//! ideograph blocks. Mixed-script goals such as `5km走る` are one valid token.

use std::fmt;

use uuid::Uuid;

use crate::{
  Error, Result,
  card::{GOALS_PER_CARD, MAX_GOAL_CHARS},
};

// ─── Violations ──────────────────────────────────────────────────────────────

/// A single broken rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
  /// The goal list does not hold exactly [`GOALS_PER_CARD`] entries.
  WrongCount { actual: usize },
  /// Goal `index` is empty or longer than [`MAX_GOAL_CHARS`].
  Length { index: usize, chars: usize },
  /// Goal `index` contains a character outside the allowed set.
  Charset { index: usize, found: char },
}

impl fmt::Display for Violation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Violation::WrongCount { actual } => {
        write!(f, "expected {GOALS_PER_CARD} goals, got {actual}")
      }
      Violation::Length { index, chars } => write!(
        f,
        "goal {index} must be 1-{MAX_GOAL_CHARS} characters, got {chars}"
      ),
      Violation::Charset { index, found } => write!(
        f,
        "goal {index} contains {found:?}; only Japanese or alphanumeric \
         characters are allowed"
      ),
    }
  }
}

/// Every rule a request broke, in the order they were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
  pub fn as_slice(&self) -> &[Violation] { &self.0 }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  pub fn len(&self) -> usize { self.0.len() }
}

impl fmt::Display for Violations {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, v) in self.0.iter().enumerate() {
      if i > 0 {
        f.write_str("; ")?;
      }
      write!(f, "{v}")?;
    }
    Ok(())
  }
}

impl std::error::Error for Violations {}

// ─── Goal set ────────────────────────────────────────────────────────────────

/// Whether `c` may appear in a goal.
pub fn is_goal_char(c: char) -> bool {
  c.is_ascii_alphanumeric()
    || matches!(c,
      '\u{3040}'..='\u{309F}'   // Hiragana
      | '\u{30A0}'..='\u{30FF}' // Katakana
      | '\u{4E00}'..='\u{9FAF}' // CJK ideographs
    )
}

/// Check one goal, appending any violations to `out`.
fn check_goal(index: usize, goal: &str, out: &mut Vec<Violation>) {
  let chars = goal.chars().count();
  if !(1..=MAX_GOAL_CHARS).contains(&chars) {
    out.push(Violation::Length { index, chars });
  }
  if let Some(found) = goal.chars().find(|c| !is_goal_char(*c)) {
    out.push(Violation::Charset { index, found });
  }
}

/// A list of goals that passed validation.
///
/// The only constructor is [`GoalSet::parse`], so holding a `GoalSet` means
/// the goals are fit to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalSet(Vec<String>);

impl GoalSet {
  /// Validate `goals`, collecting every violation rather than stopping at the
  /// first.
  pub fn parse(goals: Vec<String>) -> Result<Self, Violations> {
    let mut violations = Vec::new();
    if goals.len() != GOALS_PER_CARD {
      violations.push(Violation::WrongCount { actual: goals.len() });
    }
    for (index, goal) in goals.iter().enumerate() {
      check_goal(index, goal, &mut violations);
    }

    if violations.is_empty() {
      Ok(Self(goals))
    } else {
      Err(Violations(violations))
    }
  }

  pub fn as_slice(&self) -> &[String] { &self.0 }
}

impl IntoIterator for GoalSet {
  type Item = String;
  type IntoIter = std::vec::IntoIter<String>;

  fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

// ─── Card id ─────────────────────────────────────────────────────────────────

/// Parse a card identifier taken from a query string.
///
/// Only the canonical form is accepted: hyphenated, lowercase hex. The
/// uppercase, simple, braced and URN forms that [`Uuid::parse_str`] also
/// understands are rejected.
pub fn parse_card_id(raw: Option<&str>) -> Result<Uuid> {
  let raw = match raw {
    None | Some("") => return Err(Error::MissingCardId),
    Some(s) => s,
  };
  if raw.len() != uuid::fmt::Hyphenated::LENGTH
    || raw.bytes().any(|b| b.is_ascii_uppercase())
  {
    return Err(Error::MalformedCardId(raw.to_owned()));
  }
  Uuid::parse_str(raw).map_err(|_| Error::MalformedCardId(raw.to_owned()))
}
