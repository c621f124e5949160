use std::sync::Arc;

use anyhow::Context;
use content::ContentStore;
use routing::{BasePath, RouteTable};
use shared::domain::ViewId;

use crate::{config::Settings, routes::site_routes};

/// Everything a view may read, built once at startup and passed down
/// explicitly.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) content: Arc<ContentStore>,
    pub(crate) routes: RouteTable<ViewId>,
}

impl AppState {
    pub(crate) fn new(content: ContentStore, routes: RouteTable<ViewId>) -> Self {
        Self {
            content: Arc::new(content),
            routes,
        }
    }

    pub(crate) fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let routes = site_routes(BasePath::new(&settings.base_path))
            .context("site route table is invalid")?;
        Ok(Self::new(ContentStore::seeded(), routes))
    }
}
