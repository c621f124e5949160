use std::io::{BufRead, Write};

use anyhow::Context;
use serde::Serialize;
use shared::protocol::RenderedPage;
use tracing::{debug, info};

use crate::{app_state::AppState, views::render_location};

const QUIT: &str = ":q";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

pub(crate) fn write_json(out: &mut impl Write, value: &impl Serialize) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub(crate) fn write_page(
    out: &mut impl Write,
    page: &RenderedPage,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => write!(out, "{page}")?,
        OutputFormat::Json => write_json(out, page)?,
    }
    Ok(())
}

/// Line-driven navigation loop: one location per line, `:q` to stop.
pub(crate) struct Navigator {
    state: AppState,
    current: Option<String>,
    navigations: usize,
}

impl Navigator {
    pub(crate) fn new(state: AppState) -> Self {
        Self {
            state,
            current: None,
            navigations: 0,
        }
    }

    pub(crate) fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub(crate) fn navigations(&self) -> usize {
        self.navigations
    }

    pub(crate) fn navigate(&mut self, location: &str) -> RenderedPage {
        debug!(from = ?self.current(), to = location, "navigating");
        let page = render_location(&self.state, location);
        self.current = Some(location.to_string());
        self.navigations += 1;
        info!(location, view = ?page.view(), "navigated");
        page
    }

    pub(crate) fn run(
        &mut self,
        input: impl BufRead,
        out: &mut impl Write,
        format: OutputFormat,
    ) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read navigation input")?;
            let location = line.trim();
            if location.is_empty() {
                continue;
            }
            if location == QUIT {
                break;
            }
            let page = self.navigate(location);
            write_page(out, &page, format)?;
            out.flush()?;
        }
        info!(navigations = self.navigations(), "navigation loop finished");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/navigator_tests.rs"]
mod tests;
