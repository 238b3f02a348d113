use super::version::{Version, VersionParseError};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Why an affected-version range could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeParseError {
    #[error("range is empty")]
    Empty,

    #[error("invalid version '{text}' in range: {source}")]
    InvalidVersion {
        text: String,
        #[source]
        source: VersionParseError,
    },

    #[error("malformed interval '{interval}': {reason}")]
    MalformedInterval { interval: String, reason: String },

    #[error("unexpected input '{0}' after interval")]
    TrailingInput(String),
}

/// One endpoint of an interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bound {
    version: Version,
    inclusive: bool,
}

impl Bound {
    pub fn inclusive(version: Version) -> Self {
        Self {
            version,
            inclusive: true,
        }
    }

    pub fn exclusive(version: Version) -> Self {
        Self {
            version,
            inclusive: false,
        }
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn is_inclusive(&self) -> bool {
        self.inclusive
    }
}

/// A contiguous interval of versions; a missing bound is unbounded on that side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    lower: Option<Bound>,
    upper: Option<Bound>,
}

impl Interval {
    pub fn new(lower: Option<Bound>, upper: Option<Bound>) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, version: &Version) -> bool {
        let above_lower = self.lower.as_ref().is_none_or(|bound| {
            if bound.inclusive {
                version >= &bound.version
            } else {
                version > &bound.version
            }
        });
        let below_upper = self.upper.as_ref().is_none_or(|bound| {
            if bound.inclusive {
                version <= &bound.version
            } else {
                version < &bound.version
            }
        });
        above_lower && below_upper
    }

    fn is_empty(&self) -> bool {
        match (&self.lower, &self.upper) {
            (Some(lower), Some(upper)) => match lower.version.cmp(&upper.version) {
                std::cmp::Ordering::Greater => true,
                std::cmp::Ordering::Equal => !(lower.inclusive && upper.inclusive),
                std::cmp::Ordering::Less => false,
            },
            _ => false,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = match &self.lower {
            Some(bound) if bound.inclusive => "[",
            _ => "(",
        };
        let close = match &self.upper {
            Some(bound) if bound.inclusive => "]",
            _ => ")",
        };
        let lower = self
            .lower
            .as_ref()
            .map(|b| b.version.to_string())
            .unwrap_or_default();
        let upper = self
            .upper
            .as_ref()
            .map(|b| b.version.to_string())
            .unwrap_or_default();
        write!(f, "{}{},{}{}", open, lower, upper, close)
    }
}

/// The set of versions an advisory applies to.
///
/// Grammar:
/// - `*` matches every parseable version
/// - `1.2.3` or `[1.2.3]` matches exactly that version
/// - `[1.0.0,2.0.0)` bounded interval; `[` / `]` inclusive, `(` / `)` exclusive
/// - `[1.5.0,)` or `(,1.0]` open-ended on the empty side
/// - `[1.0,1.2),[1.5,2.0)` union of intervals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionRange {
    Any,
    Exact(Version),
    Union(Vec<Interval>),
}

impl VersionRange {
    pub fn parse(input: &str) -> Result<Self, RangeParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(RangeParseError::Empty);
        }
        if trimmed == "*" {
            return Ok(VersionRange::Any);
        }
        if !trimmed.starts_with(['[', '(']) {
            return parse_bound_version(trimmed).map(VersionRange::Exact);
        }

        let mut intervals = Vec::new();
        let mut rest = trimmed;
        loop {
            let (range, remaining) = parse_interval(rest)?;
            intervals.push(range);

            let remaining = remaining.trim_start();
            if remaining.is_empty() {
                break;
            }
            match remaining.strip_prefix(',') {
                Some(next) if next.trim_start().starts_with(['[', '(']) => {
                    rest = next.trim_start();
                }
                _ => return Err(RangeParseError::TrailingInput(remaining.to_string())),
            }
        }

        if let [Interval {
            lower: Some(lower),
            upper: Some(upper),
        }] = intervals.as_slice()
        {
            if lower.inclusive && upper.inclusive && lower.version == upper.version {
                return Ok(VersionRange::Exact(lower.version.clone()));
            }
        }

        Ok(VersionRange::Union(intervals))
    }

    /// Whether an already-parsed version falls inside the range.
    pub fn contains(&self, version: &Version) -> bool {
        match self {
            VersionRange::Any => true,
            VersionRange::Exact(expected) => version == expected,
            VersionRange::Union(intervals) => intervals.iter().any(|i| i.contains(version)),
        }
    }
}

/// Parses one `[...]` / `(...)` interval at the start of `input`, returning the
/// remaining unparsed text.
fn parse_interval(input: &str) -> Result<(Interval, &str), RangeParseError> {
    let open_inclusive = input.starts_with('[');
    let body_start = 1;
    let close_at = input
        .find([']', ')'])
        .ok_or_else(|| RangeParseError::MalformedInterval {
            interval: input.to_string(),
            reason: "missing closing bracket".to_string(),
        })?;
    let close_inclusive = input[close_at..].starts_with(']');
    let body = &input[body_start..close_at];
    let interval_text = &input[..=close_at];
    let remaining = &input[close_at + 1..];

    let malformed = |reason: &str| RangeParseError::MalformedInterval {
        interval: interval_text.to_string(),
        reason: reason.to_string(),
    };

    if body.contains(['[', '(']) {
        return Err(malformed("nested bracket"));
    }

    let interval = match body.split_once(',') {
        None => {
            if !(open_inclusive && close_inclusive) {
                return Err(malformed("a single-version interval must use [ ]"));
            }
            let version = parse_bound_version(body)?;
            Interval::new(
                Some(Bound::inclusive(version.clone())),
                Some(Bound::inclusive(version)),
            )
        }
        Some((lower_text, upper_text)) => {
            if upper_text.contains(',') {
                return Err(malformed("more than two endpoints"));
            }
            let lower = match lower_text.trim() {
                "" => None,
                text => Some(Bound {
                    version: parse_bound_version(text)?,
                    inclusive: open_inclusive,
                }),
            };
            let upper = match upper_text.trim() {
                "" => None,
                text => Some(Bound {
                    version: parse_bound_version(text)?,
                    inclusive: close_inclusive,
                }),
            };
            if lower.is_none() && upper.is_none() {
                return Err(malformed("interval has no bounds; use * to match everything"));
            }
            Interval::new(lower, upper)
        }
    };

    if interval.is_empty() {
        return Err(malformed("interval contains no versions"));
    }

    Ok((interval, remaining))
}

fn parse_bound_version(text: &str) -> Result<Version, RangeParseError> {
    Version::parse(text).map_err(|source| RangeParseError::InvalidVersion {
        text: text.trim().to_string(),
        source,
    })
}

impl FromStr for VersionRange {
    type Err = RangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionRange::Any => write!(f, "*"),
            VersionRange::Exact(version) => write!(f, "{}", version),
            VersionRange::Union(intervals) => {
                for (i, interval) in intervals.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", interval)?;
                }
                Ok(())
            }
        }
    }
}
