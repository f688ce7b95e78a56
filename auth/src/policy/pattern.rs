use std::fmt;

use thiserror::Error;

/// Error for route pattern parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("Route pattern must start with '/': {0}")]
    MissingLeadingSlash(String),

    #[error("'**' is only allowed as the last segment: {0}")]
    MisplacedRemainder(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    /// `*`, exactly one segment
    Wildcard,
    /// `**`, zero or more trailing segments
    Remainder,
}

/// Path pattern in the `/api/employees/**` style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a route pattern.
    ///
    /// # Errors
    /// * `MissingLeadingSlash` - Pattern is not absolute
    /// * `MisplacedRemainder` - `**` appears before the last segment
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        if !pattern.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash(pattern.to_string()));
        }

        let parts: Vec<&str> = path_segments(pattern).collect();
        let mut segments = Vec::with_capacity(parts.len());

        for (index, part) in parts.iter().enumerate() {
            let segment = match *part {
                "**" if index + 1 == parts.len() => Segment::Remainder,
                "**" => return Err(PatternError::MisplacedRemainder(pattern.to_string())),
                "*" => Segment::Wildcard,
                literal => Segment::Literal(literal.to_string()),
            };
            segments.push(segment);
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Match against a path already split into non-empty segments.
    pub fn matches_segments(&self, path: &[&str]) -> bool {
        let mut remaining = path.iter();

        for segment in &self.segments {
            match segment {
                Segment::Remainder => return true,
                Segment::Wildcard => {
                    if remaining.next().is_none() {
                        return false;
                    }
                }
                Segment::Literal(literal) => match remaining.next() {
                    Some(part) if *part == literal => {}
                    _ => return false,
                },
            }
        }

        remaining.next().is_none()
    }

    pub fn matches(&self, path: &str) -> bool {
        let segments: Vec<&str> = path_segments(path).collect();
        self.matches_segments(&segments)
    }

    pub(crate) fn literal_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Literal(_)))
            .count()
    }

    pub(crate) fn has_remainder(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::Remainder))
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.raw.fmt(f)
    }
}

/// Split a path into its non-empty segments, ignoring repeated and trailing slashes.
pub(crate) fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}
