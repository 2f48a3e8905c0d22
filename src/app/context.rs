use std::sync::Arc;

use crate::app::error::Result;
use crate::browser::{Browser, SystemBrowser};
use crate::config::Config;
use crate::extractor::{Extractor, HtmlExtractor};
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::render::RenderOptions;

/// Everything a command or the TUI needs: configuration plus the I/O collaborators.
pub struct AppContext {
    pub config: Config,
    pub fetcher: Arc<dyn Fetcher>,
    pub extractor: Arc<dyn Extractor>,
    pub browser: Arc<dyn Browser>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher> = Arc::new(HttpFetcher::new(&config.source)?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    /// Build a context around an existing fetcher. The extractor shares it.
    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher>) -> Self {
        let extractor: Arc<dyn Extractor> =
            Arc::new(HtmlExtractor::new(fetcher.clone(), config.extractor.clone()));

        Self {
            config,
            fetcher,
            extractor,
            browser: Arc::new(SystemBrowser),
        }
    }

    pub fn with_browser(mut self, browser: Arc<dyn Browser>) -> Self {
        self.browser = browser;
        self
    }

    pub fn render_options(&self) -> &RenderOptions {
        &self.config.layout
    }
}
