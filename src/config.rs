use std::time::Duration;

use bon::Builder;
use url::Url;

use crate::Result;
use crate::auth::Credentials;
use crate::{PRODUCTION_HOST, TEST_HOST};

/// Which marketplace deployment requests are routed to.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Production,
    /// The sandbox, which accepts the same calls without touching live orders.
    Test,
}

impl Environment {
    #[must_use]
    pub const fn host(self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_HOST,
            Environment::Test => TEST_HOST,
        }
    }
}

/// Client configuration. Each [`crate::Client`] owns one; there is no global session.
#[non_exhaustive]
#[derive(Clone, Debug, Builder)]
pub struct Config {
    pub credentials: Credentials,
    #[builder(default)]
    pub environment: Environment,
    /// Takes precedence over [`Environment::host`] when set.
    pub host: Option<Url>,
    /// Whole-request timeout handed to the HTTP transport.
    pub timeout: Option<Duration>,
}

impl Config {
    /// Production configuration with default transport settings.
    #[must_use]
    pub fn production(credentials: Credentials) -> Self {
        Self::builder().credentials(credentials).build()
    }

    /// Sandbox configuration with default transport settings.
    #[must_use]
    pub fn test(credentials: Credentials) -> Self {
        Self::builder()
            .credentials(credentials)
            .environment(Environment::Test)
            .build()
    }

    /// Resolves the base URL requests are joined onto.
    ///
    /// The result always ends in `/`, so a path prefix on the host override survives
    /// joining, e.g. `https://proxy.example/plaza` serves
    /// `https://proxy.example/plaza/services/rest/orders/v2/`.
    pub fn base_url(&self) -> Result<Url> {
        let mut url = match &self.host {
            Some(host) => host.clone(),
            None => Url::parse(self.environment.host())?,
        };
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}
