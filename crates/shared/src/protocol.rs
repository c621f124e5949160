use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::{
    domain::{ArticleId, ContentCategory, ViewId},
    error::PageError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleSection {
    pub category: ContentCategory,
    pub label: String,
    pub titles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum RenderedPage {
    Home {
        sections: Vec<TitleSection>,
    },
    Article {
        id: ArticleId,
        home_href: String,
    },
    NotFound {
        path: String,
        error: PageError,
    },
    Error {
        error: PageError,
    },
}

impl RenderedPage {
    pub fn view(&self) -> Option<ViewId> {
        match self {
            RenderedPage::Home { .. } => Some(ViewId::Home),
            RenderedPage::Article { .. } => Some(ViewId::Article),
            RenderedPage::NotFound { .. } | RenderedPage::Error { .. } => None,
        }
    }
}

impl fmt::Display for RenderedPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderedPage::Home { sections } => {
                writeln!(f, "# Home")?;
                for section in sections {
                    writeln!(f, "## {}", section.label)?;
                    if section.titles.is_empty() {
                        writeln!(f, "(none)")?;
                    }
                    for title in &section.titles {
                        writeln!(f, "- {title}")?;
                    }
                }
                Ok(())
            }
            RenderedPage::Article { id, home_href } => {
                writeln!(f, "# Article {id}")?;
                writeln!(f, "back: {home_href}")
            }
            RenderedPage::NotFound { error, .. } => {
                writeln!(f, "# Not found")?;
                writeln!(f, "{}", error.message)
            }
            RenderedPage::Error { error } => {
                writeln!(f, "# Error")?;
                writeln!(f, "{}", error.message)
            }
        }
    }
}

/// One row of the route listing printed by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub name: String,
    pub path: String,
    pub view: ViewId,
    pub props: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Outcome of resolving a location without rendering it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ResolvedLocation {
    Matched {
        name: String,
        view: ViewId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        props: Option<BTreeMap<String, String>>,
    },
    NotFound {
        path: String,
    },
}
