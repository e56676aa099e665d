//! Path patterns.
//!
//! A pattern such as `/api/admin/drivers/:uuid/location` is compiled once, at
//! registration, into literal and parameter segments. Literal segments match
//! exactly; a `:name` segment matches exactly one non-empty path segment
//! without slashes. Matching is anchored at both ends: the path must have the
//! same number of segments as the pattern.

use thiserror::Error;

use schoolrun_core::AppError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("route pattern {0:?} must start with '/'")]
    NotAbsolute(String),

    #[error("route pattern {pattern:?} has an invalid parameter segment {segment:?}")]
    InvalidParam { pattern: String, segment: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        if !pattern.starts_with('/') {
            return Err(PatternError::NotAbsolute(pattern.to_string()));
        }

        let segments = pattern
            .split('/')
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) if is_param_name(name) => Ok(Segment::Param(name.to_string())),
                None if !segment.contains(':') => Ok(Segment::Literal(segment.to_string())),
                _ => Err(PatternError::InvalidParam {
                    pattern: pattern.to_string(),
                    segment: segment.to_string(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Parameter names in pattern order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Matches the whole `path`, returning captured parameters in pattern
    /// order.
    pub fn matches(&self, path: &str) -> Option<PathParams> {
        let mut parts = path.split('/');
        let mut params = PathParams::default();

        for segment in &self.segments {
            let part = parts.next()?;
            match segment {
                Segment::Literal(literal) if literal == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(_) if part.is_empty() => return None,
                Segment::Param(name) => params.push(name, part),
            }
        }

        if parts.next().is_some() {
            return None;
        }
        Some(params)
    }
}

fn is_param_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Values captured from a path, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    entries: Vec<(String, String)>,
}

impl PathParams {
    fn push(&mut self, name: &str, value: &str) {
        self.entries.push((name.to_string(), value.to_string()));
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(_, value)| value.as_str())
    }

    /// The parameter at `index`; a missing parameter means the handler was
    /// bound to a pattern with fewer parameters than it expects.
    pub fn required(&self, index: usize) -> Result<&str, AppError> {
        self.get(index).ok_or_else(|| {
            AppError::internal(anyhow::anyhow!("missing path parameter at position {index}"))
        })
    }

    pub fn named(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, value)| value.as_str())
    }

    pub fn into_values(self) -> Vec<String> {
        self.entries.into_iter().map(|(_, value)| value).collect()
    }
}
