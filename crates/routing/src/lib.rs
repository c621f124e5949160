//! Data-driven route table: path patterns mapped to view handles, with
//! base path handling for deployments below the site root.

use std::collections::{HashMap, HashSet};

use tracing::debug;
use url::Url;

mod base;
mod encoding;
mod error;
mod pattern;

pub use base::BasePath;
pub use error::RouteError;
pub use pattern::{Params, PathPattern};

const PLACEHOLDER_ORIGIN: &str = "http://localhost/";

/// Normalised, percent-encoded path of an absolute URL or a path. Query
/// and fragment are dropped and dot segments resolved.
pub(crate) fn location_path(location: &str) -> Option<String> {
    let url = match Url::parse(location) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            // `//x` would otherwise be read as a host
            let relative = match location.trim_start_matches('/') {
                rest if rest.len() < location.len() => format!("/{rest}"),
                _ => location.to_string(),
            };
            Url::parse(PLACEHOLDER_ORIGIN).ok()?.join(&relative).ok()?
        }
        Err(_) => return None,
    };
    let path = url.path();
    path.starts_with('/').then(|| path.to_string())
}

#[derive(Debug, Clone)]
pub struct Route<V> {
    pattern: PathPattern,
    name: String,
    view: V,
    props: bool,
}

impl<V> Route<V> {
    pub fn new(path: &str, name: impl Into<String>, view: V) -> Result<Self, RouteError> {
        Ok(Self {
            pattern: PathPattern::parse(path)?,
            name: name.into(),
            view,
            props: false,
        })
    }

    /// Forward extracted path parameters to the view.
    pub fn with_props(mut self) -> Self {
        self.props = true;
        self
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn forwards_props(&self) -> bool {
        self.props
    }
}

#[derive(Debug)]
pub struct Match<'a, V> {
    pub route: &'a Route<V>,
    pub params: Params,
}

impl<'a, V> Match<'a, V> {
    pub fn view(&self) -> &'a V {
        &self.route.view
    }

    /// Parameters handed to the view, present only for routes that forward them.
    pub fn props(&self) -> Option<&Params> {
        self.route.props.then_some(&self.params)
    }
}

#[derive(Debug)]
pub enum Resolution<'a, V> {
    Matched(Match<'a, V>),
    NotFound { path: String },
}

#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    base: BasePath,
    routes: Vec<Route<V>>,
}

impl<V> RouteTable<V> {
    /// Builds the table, rejecting overlapping patterns and repeated names.
    pub fn new(base: BasePath, routes: Vec<Route<V>>) -> Result<Self, RouteError> {
        validate(&routes)?;
        debug!(routes = routes.len(), %base, "route table built");
        Ok(Self { base, routes })
    }

    pub fn base(&self) -> &BasePath {
        &self.base
    }

    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    /// Matches a location against the table in order; the first match wins.
    pub fn resolve(&self, location: &str) -> Resolution<'_, V> {
        let Some(path) = location_path(location) else {
            debug!(location, "location is not a usable path");
            return Resolution::NotFound {
                path: location.to_string(),
            };
        };
        let Some(local) = self.base.strip(&path) else {
            debug!(%path, base = %self.base, "location outside base path");
            return Resolution::NotFound { path };
        };

        let segments = split_segments(local);
        for route in &self.routes {
            if let Some(params) = route.pattern.matches(&segments) {
                debug!(%path, route = route.name(), "route matched");
                return Resolution::Matched(Match { route, params });
            }
        }

        debug!(%path, "no route matched");
        Resolution::NotFound { path }
    }

    /// External URL of a named route, base path included.
    pub fn href(&self, name: &str, params: &Params) -> Result<String, RouteError> {
        let route = self
            .routes
            .iter()
            .find(|route| route.name == name)
            .ok_or_else(|| RouteError::UnknownRoute {
                name: name.to_string(),
            })?;
        let path = route.pattern.build(&route.name, params)?;
        Ok(self.base.join(&path))
    }
}

fn validate<V>(routes: &[Route<V>]) -> Result<(), RouteError> {
    let mut shapes: HashMap<String, &str> = HashMap::new();
    let mut names: HashSet<&str> = HashSet::new();
    for route in routes {
        if !names.insert(route.name()) {
            return Err(RouteError::DuplicateName {
                name: route.name.clone(),
            });
        }
        if let Some(existing) = shapes.insert(route.pattern.shape(), route.pattern.as_str()) {
            return Err(RouteError::DuplicatePattern {
                pattern: route.pattern.as_str().to_string(),
                existing: existing.to_string(),
            });
        }
    }
    Ok(())
}

fn split_segments(path: &str) -> Vec<&str> {
    let path = match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    };
    match path.strip_prefix('/') {
        Some("") | None => Vec::new(),
        Some(rest) => rest.split('/').collect(),
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
