use content::ContentStore;
use routing::{Params, Resolution, RouteTable};
use shared::{
    domain::{ArticleId, ViewId},
    error::{ErrorCode, PageError},
    protocol::{RenderedPage, TitleSection},
};
use tracing::warn;

use crate::{app_state::AppState, routes::HOME};

pub(crate) trait View {
    fn render(&self, props: Option<&Params>) -> Result<RenderedPage, PageError>;
}

pub(crate) struct HomeView<'a> {
    pub(crate) content: &'a ContentStore,
}

impl View for HomeView<'_> {
    fn render(&self, _props: Option<&Params>) -> Result<RenderedPage, PageError> {
        let sections = self
            .content
            .collections()
            .iter()
            .map(|(category, titles)| TitleSection {
                category,
                label: category.label().to_string(),
                titles: titles.as_slice().to_vec(),
            })
            .collect();
        Ok(RenderedPage::Home { sections })
    }
}

pub(crate) struct ArticleView<'a> {
    pub(crate) routes: &'a RouteTable<ViewId>,
}

impl View for ArticleView<'_> {
    fn render(&self, props: Option<&Params>) -> Result<RenderedPage, PageError> {
        let id = props
            .and_then(|props| props.get("id"))
            .filter(|id| !id.is_empty())
            .ok_or_else(|| PageError::new(ErrorCode::Validation, "article id is missing"))?;
        let home_href = self
            .routes
            .href(HOME, &Params::new())
            .map_err(|e| PageError::new(ErrorCode::Internal, e.to_string()))?;
        Ok(RenderedPage::Article {
            id: ArticleId(id.clone()),
            home_href,
        })
    }
}

pub(crate) fn view_for(state: &AppState, view: ViewId) -> Box<dyn View + '_> {
    match view {
        ViewId::Home => Box::new(HomeView {
            content: &state.content,
        }),
        ViewId::Article => Box::new(ArticleView {
            routes: &state.routes,
        }),
    }
}

/// Resolves and renders a location. Unmatched paths and view failures come
/// back as pages, never as errors.
pub(crate) fn render_location(state: &AppState, location: &str) -> RenderedPage {
    match state.routes.resolve(location) {
        Resolution::Matched(found) => view_for(state, *found.view())
            .render(found.props())
            .unwrap_or_else(|error| {
                warn!(location, %error, "view failed to render");
                RenderedPage::Error { error }
            }),
        Resolution::NotFound { path } => {
            let error = PageError::not_found(&path);
            RenderedPage::NotFound { path, error }
        }
    }
}

#[cfg(test)]
#[path = "tests/views_tests.rs"]
mod tests;
