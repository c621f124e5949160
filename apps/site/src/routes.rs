use routing::{BasePath, Params, Resolution, Route, RouteError, RouteTable};
use shared::{
    domain::ViewId,
    protocol::{ResolvedLocation, RouteSummary},
};

pub(crate) const HOME: &str = "Home";
pub(crate) const ARTICLE: &str = "Article";

pub(crate) fn site_routes(base: BasePath) -> Result<RouteTable<ViewId>, RouteError> {
    RouteTable::new(
        base,
        vec![
            Route::new("/", HOME, ViewId::Home)?,
            Route::new("/article/:id", ARTICLE, ViewId::Article)?.with_props(),
        ],
    )
}

pub(crate) fn resolve_location(routes: &RouteTable<ViewId>, location: &str) -> ResolvedLocation {
    match routes.resolve(location) {
        Resolution::Matched(found) => ResolvedLocation::Matched {
            name: found.route.name().to_string(),
            view: *found.view(),
            props: found.props().cloned(),
        },
        Resolution::NotFound { path } => ResolvedLocation::NotFound { path },
    }
}

/// Table rows in declaration order. Only parameterless routes get an href.
pub(crate) fn route_summaries(routes: &RouteTable<ViewId>) -> Vec<RouteSummary> {
    routes
        .routes()
        .iter()
        .map(|route| RouteSummary {
            name: route.name().to_string(),
            path: route.pattern().as_str().to_string(),
            view: *route.view(),
            props: route.forwards_props(),
            href: (route.pattern().param_names().count() == 0)
                .then(|| routes.href(route.name(), &Params::new()).ok())
                .flatten(),
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/routes_tests.rs"]
mod tests;
