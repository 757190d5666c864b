//! Page controller: fetch, render every section, then flip the visibility
//! containers. Sections render into a staging map that is committed only
//! when the whole render succeeds, so a failed page never shows a partial
//! portfolio.

use tracing::{error, info};

use crate::errors::FolioError;
use crate::fetch::ResumeSource;
use crate::page::{Display, Region, RegionMap, RenderTarget};
use crate::render::{render_portfolio, RenderContext};

#[derive(Debug)]
pub enum Outcome {
    Rendered,
    Failed(FolioError),
}

pub struct PageController<'a> {
    source: &'a dyn ResumeSource,
    ctx: RenderContext,
}

impl<'a> PageController<'a> {
    pub fn new(source: &'a dyn ResumeSource, ctx: RenderContext) -> Self {
        Self { source, ctx }
    }

    /// Drives one page view. `page` ends in exactly one of two states:
    /// content visible, or error visible; loading is hidden either way.
    pub async fn run(&self, page: &mut RegionMap) -> Outcome {
        page.set_display(Region::Loading, Display::Block);
        info!("Loading resume from {}", self.source.location());

        match self.load_and_render().await {
            Ok(staged) => {
                page.commit(staged);
                page.set_display(Region::Loading, Display::None);
                page.set_display(Region::Content, Display::Block);
                info!("Portfolio rendered");
                Outcome::Rendered
            }
            Err(e) => {
                error!(kind = ?e.kind(), "Error loading portfolio: {e}");
                page.set_display(Region::Loading, Display::None);
                page.set_display(Region::Error, Display::Block);
                Outcome::Failed(e)
            }
        }
    }

    async fn load_and_render(&self) -> Result<RegionMap, FolioError> {
        let doc = self.source.load().await?;
        let mut staged = RegionMap::new();
        render_portfolio(Some(&doc), &self.ctx, &mut staged)?;
        Ok(staged)
    }
}
