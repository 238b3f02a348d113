use crate::shared::error::HealthError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identity of a dependency artifact: `group:name:version`.
///
/// Fields are free-form strings. Equality is structural on all three fields;
/// nothing is normalized or case-folded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyCoordinate {
    group: String,
    name: String,
    version: String,
}

impl DependencyCoordinate {
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// False when group or name is blank; such coordinates have no known advisories.
    pub fn is_identified(&self) -> bool {
        !self.group.trim().is_empty() && !self.name.trim().is_empty()
    }
}

impl fmt::Display for DependencyCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}

impl FromStr for DependencyCoordinate {
    type Err = HealthError;

    /// Parses `group:name:version` notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| HealthError::InvalidCoordinate {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = s.trim().split(':').collect();
        let [group, name, version] = parts.as_slice() else {
            return Err(invalid(&format!(
                "expected 3 ':'-separated segments, found {}",
                parts.len()
            )));
        };
        if group.is_empty() || name.is_empty() || version.is_empty() {
            return Err(invalid("group, name and version must all be non-empty"));
        }

        Ok(Self::new(*group, *name, *version))
    }
}

/// Parses a dependency list: one `group:name:version` per line.
///
/// Blank lines and lines starting with `#` are skipped. The error names the
/// 1-based line number of the first invalid entry.
pub fn parse_coordinate_list(content: &str) -> crate::shared::Result<Vec<DependencyCoordinate>> {
    let mut coordinates = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let coordinate = line
            .parse::<DependencyCoordinate>()
            .map_err(|e| anyhow::anyhow!("line {}: {}", line_no + 1, e))?;
        coordinates.push(coordinate);
    }
    Ok(coordinates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_structural_equality() {
        let a = DependencyCoordinate::new("org.example", "libfoo", "1.2.0");
        let b = DependencyCoordinate::new("org.example", "libfoo", "1.2.0");
        let c = DependencyCoordinate::new("org.example", "libfoo", "1.2.1");
        let d = DependencyCoordinate::new("Org.Example", "libfoo", "1.2.0");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_parse_notation() {
        let coordinate: DependencyCoordinate = "org.example:libfoo:1.2.0".parse().unwrap();
        assert_eq!(coordinate.group(), "org.example");
        assert_eq!(coordinate.name(), "libfoo");
        assert_eq!(coordinate.version(), "1.2.0");
        assert_eq!(coordinate.to_string(), "org.example:libfoo:1.2.0");
    }

    #[test]
    fn test_parse_notation_rejects_wrong_segment_count() {
        assert!("libfoo".parse::<DependencyCoordinate>().is_err());
        assert!("org.example:libfoo".parse::<DependencyCoordinate>().is_err());
        assert!("a:b:c:d".parse::<DependencyCoordinate>().is_err());
    }

    #[test]
    fn test_parse_notation_rejects_empty_segments() {
        let err = "org.example::1.0".parse::<DependencyCoordinate>().unwrap_err();
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn test_is_identified() {
        assert!(DependencyCoordinate::new("g", "n", "").is_identified());
        assert!(!DependencyCoordinate::new("", "n", "1.0").is_identified());
        assert!(!DependencyCoordinate::new("g", "  ", "1.0").is_identified());
    }

    #[test]
    fn test_parse_coordinate_list() {
        let content = "# runtime\norg.example:libfoo:1.2.0\n\n  com.acme:widget:2.0  \n";
        let coordinates = parse_coordinate_list(content).unwrap();
        assert_eq!(coordinates.len(), 2);
        assert_eq!(coordinates[1].name(), "widget");
        assert_eq!(coordinates[1].version(), "2.0");
    }

    #[test]
    fn test_parse_coordinate_list_reports_line_number() {
        let err = parse_coordinate_list("a:b:1\nbroken\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
