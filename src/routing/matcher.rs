//! Path pattern matching.
//!
//! # Responsibilities
//! - Parse patterns such as `/integrations/:path*`
//! - Match request paths segment by segment
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - Empty segments are ignored, so `/integrations/` matches like `/integrations`
//! - Repeating parameters (`*`, `+`) and optional ones (`?`) must be last
//! - No regex to guarantee O(n) matching

use axum::http::Request;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing a path pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern must start with '/': {0:?}")]
    MissingLeadingSlash(String),
    #[error("parameter without a name in {0:?}")]
    EmptyParameter(String),
    #[error("invalid parameter name {name:?} in {pattern:?}")]
    InvalidParameter { pattern: String, name: String },
    #[error("parameter {name:?} must be the last segment of {pattern:?}")]
    ModifierNotLast { pattern: String, name: String },
}

/// How many path segments a parameter consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Repeat {
    One,
    ZeroOrOne,
    ZeroOrMore,
    OneOrMore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param { name: String, repeat: Repeat },
}

/// A compiled path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    source: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        if !pattern.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash(pattern.to_string()));
        }

        let raw: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
        let mut segments = Vec::with_capacity(raw.len());

        for (i, part) in raw.iter().enumerate() {
            let Some(param) = part.strip_prefix(':') else {
                segments.push(Segment::Literal((*part).to_string()));
                continue;
            };

            let (name, repeat) = match param.as_bytes().last() {
                Some(b'*') => (&param[..param.len() - 1], Repeat::ZeroOrMore),
                Some(b'+') => (&param[..param.len() - 1], Repeat::OneOrMore),
                Some(b'?') => (&param[..param.len() - 1], Repeat::ZeroOrOne),
                _ => (param, Repeat::One),
            };

            if name.is_empty() {
                return Err(PatternError::EmptyParameter(pattern.to_string()));
            }
            if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(PatternError::InvalidParameter {
                    pattern: pattern.to_string(),
                    name: name.to_string(),
                });
            }
            if repeat != Repeat::One && i + 1 != raw.len() {
                return Err(PatternError::ModifierNotLast {
                    pattern: pattern.to_string(),
                    name: name.to_string(),
                });
            }

            segments.push(Segment::Param {
                name: name.to_string(),
                repeat,
            });
        }

        Ok(Self {
            source: pattern.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns true if `path` matches this pattern.
    pub fn matches(&self, path: &str) -> bool {
        let mut parts = path.split('/').filter(|s| !s.is_empty());

        for segment in &self.segments {
            match segment {
                Segment::Literal(expected) => match parts.next() {
                    Some(actual) if actual == expected => {}
                    _ => return false,
                },
                Segment::Param { repeat, .. } => match repeat {
                    Repeat::One => {
                        if parts.next().is_none() {
                            return false;
                        }
                    }
                    // Modifiers only appear last; they decide the rest.
                    Repeat::ZeroOrMore => return true,
                    Repeat::OneOrMore => return parts.next().is_some(),
                    Repeat::ZeroOrOne => {
                        parts.next();
                        return parts.next().is_none();
                    }
                },
            }
        }

        parts.next().is_none()
    }

    /// Returns true if the request path matches this pattern.
    pub fn matches_request<B>(&self, req: &Request<B>) -> bool {
        self.matches(req.uri().path())
    }

    /// Names of the parameters in this pattern.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param { name, .. } => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }
}

impl FromStr for PathPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
