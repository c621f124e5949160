use serde::Serialize;
use shared::domain::ContentCategory;
use tracing::debug;

/// Ordered list of display titles for one category. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TitleCollection {
    titles: Vec<String>,
}

impl TitleCollection {
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.titles
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.titles.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

/// The site's title lists. Built once at startup and handed to views by
/// reference; there is no mutation API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentStore {
    light_novels: TitleCollection,
    anime: TitleCollection,
    manga: TitleCollection,
    games: TitleCollection,
}

/// Borrowed view of all four collections, returned by
/// [`ContentStore::collections`].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Collections<'a> {
    #[serde(rename = "ln")]
    pub light_novels: &'a TitleCollection,
    pub anime: &'a TitleCollection,
    pub manga: &'a TitleCollection,
    pub games: &'a TitleCollection,
}

impl<'a> Collections<'a> {
    /// Collections paired with their category, in [`ContentCategory::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ContentCategory, &'a TitleCollection)> {
        let this = *self;
        ContentCategory::ALL
            .into_iter()
            .map(move |category| (category, this.get(category)))
    }

    fn get(&self, category: ContentCategory) -> &'a TitleCollection {
        match category {
            ContentCategory::LightNovel => self.light_novels,
            ContentCategory::Anime => self.anime,
            ContentCategory::Manga => self.manga,
            ContentCategory::Games => self.games,
        }
    }
}

impl ContentStore {
    pub fn new(
        light_novels: TitleCollection,
        anime: TitleCollection,
        manga: TitleCollection,
        games: TitleCollection,
    ) -> Self {
        Self {
            light_novels,
            anime,
            manga,
            games,
        }
    }

    /// The literal catalogue the site ships with.
    pub fn seeded() -> Self {
        let store = Self::new(
            TitleCollection::new(["乐园NOISE"]),
            TitleCollection::default(),
            TitleCollection::default(),
            TitleCollection::default(),
        );
        debug!(
            light_novels = store.light_novels.len(),
            anime = store.anime.len(),
            manga = store.manga.len(),
            games = store.games.len(),
            "content store seeded"
        );
        store
    }

    pub fn collections(&self) -> Collections<'_> {
        Collections {
            light_novels: &self.light_novels,
            anime: &self.anime,
            manga: &self.manga,
            games: &self.games,
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
