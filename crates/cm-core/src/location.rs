//! Named places on the map.
//!
//! A [`Location`] is the payload carried by every graph node and every
//! display label.  Building entrances and labels carry a [`LocationCode`] and
//! a human-readable name; plain path junctions carry neither.

use std::fmt;

use crate::{CoreError, CoreResult, Point};

/// Number of characters in a [`LocationCode`].
pub const CODE_LEN: usize = 3;

// ── LocationCode ──────────────────────────────────────────────────────────────

/// Abbreviated identifier of a building or label, e.g. `"CSE"`.
///
/// Always exactly three ASCII uppercase letters or digits.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct LocationCode(String);

impl LocationCode {
    /// Strict constructor: `code` must already be in canonical form.
    pub fn new(code: &str) -> CoreResult<Self> {
        let valid = code.len() == CODE_LEN
            && code
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
        if valid {
            Ok(Self(code.to_owned()))
        } else {
            Err(CoreError::InvalidCode(code.to_owned()))
        }
    }

    /// Trim surrounding whitespace and uppercase `input`, then validate.
    ///
    /// This is the form user input arrives in: `" cse "` becomes `"CSE"`.
    pub fn normalize(input: &str) -> CoreResult<Self> {
        Self::new(&input.trim().to_ascii_uppercase())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for LocationCode {
    type Err = CoreError;
    fn from_str(s: &str) -> CoreResult<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for LocationCode {
    type Error = CoreError;
    fn try_from(s: String) -> CoreResult<Self> {
        Self::new(&s)
    }
}

impl From<LocationCode> for String {
    fn from(code: LocationCode) -> String {
        code.0
    }
}

// ── Location ──────────────────────────────────────────────────────────────────

/// An immutable named position on the map.
///
/// Two locations denote the same place only when their coordinates are
/// equal; use [`same_place`](Self::same_place) for that comparison.  The
/// derived `PartialEq` compares every field.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    code:  Option<LocationCode>,
    name:  String,
    point: Point,
}

impl Location {
    /// A named, coded location (building entrance or label).
    pub fn new(code: LocationCode, name: impl Into<String>, point: Point) -> Self {
        Self { code: Some(code), name: name.into(), point }
    }

    /// An anonymous path junction.
    pub fn junction(point: Point) -> Self {
        Self { code: None, name: String::new(), point }
    }

    #[inline]
    pub fn code(&self) -> Option<&LocationCode> {
        self.code.as_ref()
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn point(&self) -> Point {
        self.point
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.point.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.point.y
    }

    /// `true` for junctions created without a code.
    pub fn is_junction(&self) -> bool {
        self.code.is_none()
    }

    /// Coordinate equality, ignoring code and name.
    #[inline]
    pub fn same_place(&self, other: &Location) -> bool {
        self.point == other.point
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{code} \"{}\" at {}", self.name, self.point),
            None => write!(f, "junction at {}", self.point),
        }
    }
}
