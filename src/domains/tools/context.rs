//! Shared state handed to every tool route.

use std::sync::Arc;
use std::time::Duration;

use crate::core::config::Config;
use crate::core::Result;

use super::definitions::{JokeSource, PayrixClient};

/// Clients built once at startup and cloned into each route.
#[derive(Debug, Clone)]
pub struct ToolContext {
    pub config: Arc<Config>,
    pub payrix: Arc<PayrixClient>,
    pub jokes: JokeSource,
}

impl ToolContext {
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let payrix = Arc::new(PayrixClient::new(&config.payrix)?);
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.payrix.timeout_secs))
            .build()?;
        let jokes = JokeSource::new(http, config.services.joke_api_url.clone());

        Ok(Self {
            config,
            payrix,
            jokes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_from_default_config() {
        let context = ToolContext::new(Arc::new(Config::default())).unwrap();
        assert_eq!(context.payrix.base_url(), "");
    }
}
