use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum length accepted for a version string.
///
/// Longer inputs are classified as malformed without being scanned.
const MAX_VERSION_LENGTH: usize = 256;

/// `major.minor.patch` plus an optional fourth revision component (`2.9.10.8`).
const MAX_NUMERIC_COMPONENTS: usize = 4;

/// A dot qualifier (`4.1.85.Final`) may only follow a full `major.minor.patch`.
const MIN_COMPONENTS_BEFORE_DOT_QUALIFIER: usize = 3;

/// Qualifiers that mark a release build rather than a pre-release.
const RELEASE_QUALIFIERS: [&str; 3] = ["final", "release", "ga"];

/// Why a version string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionParseError {
    #[error("version is empty")]
    Empty,

    #[error("version is too long ({0} bytes)")]
    TooLong(usize),

    #[error("invalid numeric component '{0}'")]
    InvalidComponent(String),

    #[error("expected at most 4 numeric components, found {0}")]
    TooManyComponents(usize),

    #[error("invalid qualifier '{0}'")]
    InvalidQualifier(String),
}

/// One dot-separated identifier of a pre-release qualifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Identifier {
    Numeric(u64),
    Alphanumeric(String),
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => a.cmp(b),
            (Identifier::Numeric(_), Identifier::Alphanumeric(_)) => Ordering::Less,
            (Identifier::Alphanumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::Alphanumeric(a), Identifier::Alphanumeric(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::Alphanumeric(s) => write!(f, "{}", s),
        }
    }
}

/// A parsed, totally ordered dependency version.
///
/// Accepts `major[.minor[.patch[.revision]]][-qualifier][+build]` with an optional
/// leading `v`. Missing components are zero, so `1.2` equals `1.2.0.0`. After a full
/// `major.minor.patch` the qualifier may also follow a dot (`5.3.20.RELEASE`,
/// `1.0.0.RC1`). A lone `Final`, `RELEASE` or `GA` qualifier marks a release and is
/// dropped. Build metadata is discarded and takes no part in ordering or equality.
///
/// Ordering follows semantic versioning precedence: numeric components compare
/// numerically and a release ranks above any pre-release of the same core version
/// (`1.0.0 > 1.0.0-rc1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    revision: u64,
    qualifier: Vec<Identifier>,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            revision: 0,
            qualifier: Vec::new(),
        }
    }

    /// Parses a version string. Never panics; malformed input yields a classified error.
    pub fn parse(input: &str) -> Result<Self, VersionParseError> {
        if input.len() > MAX_VERSION_LENGTH {
            return Err(VersionParseError::TooLong(input.len()));
        }

        let trimmed = input.trim();
        let trimmed = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);
        if trimmed.is_empty() {
            return Err(VersionParseError::Empty);
        }

        let without_build = match trimmed.split_once('+') {
            Some((head, _build)) => head,
            None => trimmed,
        };

        let (core, hyphen_qualifier) = match without_build.split_once('-') {
            Some((core, qualifier)) => (core, Some(qualifier)),
            None => (without_build, None),
        };

        let segments: Vec<&str> = core.split('.').collect();
        let numeric_len = segments
            .iter()
            .take_while(|segment| parse_numeric(segment).is_some())
            .count();
        if numeric_len == 0 {
            return Err(VersionParseError::InvalidComponent(segments[0].to_string()));
        }
        if numeric_len > MAX_NUMERIC_COMPONENTS {
            return Err(VersionParseError::TooManyComponents(numeric_len));
        }

        let mut numbers = [0u64; MAX_NUMERIC_COMPONENTS];
        for (slot, segment) in numbers.iter_mut().zip(&segments[..numeric_len]) {
            *slot = parse_numeric(segment)
                .ok_or_else(|| VersionParseError::InvalidComponent(segment.to_string()))?;
        }

        let mut qualifier = Vec::new();
        if let Some(first) = segments.get(numeric_len) {
            let starts_with_letter = first.starts_with(|c: char| c.is_ascii_alphabetic());
            if numeric_len < MIN_COMPONENTS_BEFORE_DOT_QUALIFIER || !starts_with_letter {
                return Err(VersionParseError::InvalidComponent(first.to_string()));
            }
            qualifier.extend(parse_qualifier(&segments[numeric_len..].join("."))?);
        }
        if let Some(q) = hyphen_qualifier {
            qualifier.extend(parse_qualifier(q)?);
        }
        if is_release_qualifier(&qualifier) {
            qualifier.clear();
        }

        Ok(Self {
            major: numbers[0],
            minor: numbers[1],
            patch: numbers[2],
            revision: numbers[3],
            qualifier,
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Fourth numeric component; zero when absent.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// True when the version carries a pre-release qualifier.
    pub fn is_prerelease(&self) -> bool {
        !self.qualifier.is_empty()
    }
}

fn parse_numeric(component: &str) -> Option<u64> {
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    component.parse().ok()
}

fn parse_qualifier(qualifier: &str) -> Result<Vec<Identifier>, VersionParseError> {
    qualifier
        .split('.')
        .map(|part| {
            if part.is_empty() || !part.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                return Err(VersionParseError::InvalidQualifier(qualifier.to_string()));
            }
            Ok(match parse_numeric(part) {
                Some(n) => Identifier::Numeric(n),
                None => Identifier::Alphanumeric(part.to_string()),
            })
        })
        .collect()
}

fn is_release_qualifier(qualifier: &[Identifier]) -> bool {
    match qualifier {
        [Identifier::Alphanumeric(word)] => RELEASE_QUALIFIERS
            .iter()
            .any(|release| word.eq_ignore_ascii_case(release)),
        _ => false,
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then(self.revision.cmp(&other.revision))
            .then_with(|| match (self.is_prerelease(), other.is_prerelease()) {
                (false, false) => Ordering::Equal,
                (false, true) => Ordering::Greater,
                (true, false) => Ordering::Less,
                (true, true) => self.qualifier.cmp(&other.qualifier),
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.revision != 0 {
            write!(f, ".{}", self.revision)?;
        }
        if let Some((first, rest)) = self.qualifier.split_first() {
            write!(f, "-{}", first)?;
            for identifier in rest {
                write!(f, ".{}", identifier)?;
            }
        }
        Ok(())
    }
}
