use std::collections::BTreeMap;

use crate::{
    encoding::{decode_segment, encode_segment},
    error::RouteError,
};

/// Path parameters extracted from a location, keyed by parameter name.
pub type Params = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A parsed route path such as `/` or `/article/:id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        let Some(rest) = raw.strip_prefix('/') else {
            return Err(RouteError::invalid(raw, "must start with '/'"));
        };
        if rest.is_empty() {
            return Ok(Self {
                raw: "/".to_string(),
                segments: Vec::new(),
            });
        }

        let mut segments = Vec::new();
        for part in rest.split('/') {
            if part.is_empty() {
                return Err(RouteError::invalid(raw, "empty path segment"));
            }
            if let Some(name) = part.strip_prefix(':') {
                if name.is_empty()
                    || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
                {
                    return Err(RouteError::invalid(
                        raw,
                        format!("bad parameter name '{name}'"),
                    ));
                }
                if segments
                    .iter()
                    .any(|s| matches!(s, Segment::Param(existing) if existing == name))
                {
                    return Err(RouteError::invalid(
                        raw,
                        format!("parameter '{name}' appears twice"),
                    ));
                }
                segments.push(Segment::Param(name.to_string()));
            } else {
                if part == "." || part == ".." {
                    return Err(RouteError::invalid(raw, "dot segment"));
                }
                if part.contains(['?', '#', ':', '%']) {
                    return Err(RouteError::invalid(
                        raw,
                        format!("reserved character in segment '{part}'"),
                    ));
                }
                segments.push(Segment::Static(part.to_string()));
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Two patterns with the same shape match exactly the same locations.
    pub(crate) fn shape(&self) -> String {
        if self.segments.is_empty() {
            return "/".to_string();
        }
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Static(text) => format!("/{}", text.to_ascii_lowercase()),
                Segment::Param(_) => "/:".to_string(),
            })
            .collect()
    }

    /// `segments` are the raw, still percent-encoded segments of a location.
    pub(crate) fn matches(&self, segments: &[&str]) -> Option<Params> {
        if segments.len() != self.segments.len() {
            return None;
        }
        let mut params = Params::new();
        for (expected, actual) in self.segments.iter().zip(segments) {
            if actual.is_empty() {
                return None;
            }
            let decoded = decode_segment(actual);
            match expected {
                Segment::Static(text) => {
                    if !text.eq_ignore_ascii_case(&decoded) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert(name.clone(), decoded);
                }
            }
        }
        Some(params)
    }

    pub(crate) fn build(&self, route_name: &str, params: &Params) -> Result<String, RouteError> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Static(text) => path.push_str(&encode_segment(text)),
                Segment::Param(name) => {
                    let value = params
                        .get(name)
                        .filter(|value| !value.is_empty())
                        .ok_or_else(|| RouteError::MissingParam {
                            route: route_name.to_string(),
                            param: name.clone(),
                        })?;
                    if value == "." || value == ".." {
                        return Err(RouteError::InvalidParam {
                            route: route_name.to_string(),
                            param: name.clone(),
                            value: value.clone(),
                        });
                    }
                    path.push_str(&encode_segment(value));
                }
            }
        }
        Ok(path)
    }
}

#[cfg(test)]
#[path = "tests/pattern_tests.rs"]
mod tests;
