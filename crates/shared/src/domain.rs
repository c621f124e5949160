use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! text_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

text_newtype!(ArticleId);

/// Content categories shown on the home page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentCategory {
    LightNovel,
    Anime,
    Manga,
    Games,
}

impl ContentCategory {
    pub const ALL: [ContentCategory; 4] = [
        ContentCategory::LightNovel,
        ContentCategory::Anime,
        ContentCategory::Manga,
        ContentCategory::Games,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ContentCategory::LightNovel => "ln",
            ContentCategory::Anime => "anime",
            ContentCategory::Manga => "manga",
            ContentCategory::Games => "games",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentCategory::LightNovel => "Light novels",
            ContentCategory::Anime => "Anime",
            ContentCategory::Manga => "Manga",
            ContentCategory::Games => "Games",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewId {
    Home,
    Article,
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewId::Home => f.write_str("home"),
            ViewId::Article => f.write_str("article"),
        }
    }
}
