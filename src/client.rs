use chrono::{DateTime, Utc};
use reqwest::Method;
use reqwest::blocking::Client as ReqwestClient;
use url::Url;

use crate::Result;
use crate::auth::{self, Credentials};
use crate::config::Config;
use crate::orders::OrderMethods;
use crate::payments::PaymentMethods;

/// Blocking Plaza API client.
///
/// Every call signs a fresh request with the current time and performs exactly one
/// round trip. Clones share the HTTP client's connection pool and nothing else.
#[derive(Clone, Debug)]
pub struct Client {
    host: Url,
    credentials: Credentials,
    client: ReqwestClient,
}

impl Client {
    /// Creates a client, rejecting unusable credentials up front.
    pub fn new(config: Config) -> Result<Self> {
        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Self::with_client(config, builder.build()?)
    }

    /// Creates a client on top of a preconfigured HTTP client.
    ///
    /// [`Config::timeout`] is ignored; configure it on `client` instead.
    pub fn with_client(config: Config, client: ReqwestClient) -> Result<Self> {
        config.credentials.validate()?;

        Ok(Self {
            host: config.base_url()?,
            credentials: config.credentials,
            client,
        })
    }

    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    #[must_use]
    pub fn orders(&self) -> OrderMethods<'_> {
        OrderMethods::new(self)
    }

    #[must_use]
    pub fn payments(&self) -> PaymentMethods<'_> {
        PaymentMethods::new(self)
    }

    /// Signs and sends a request, returning the response body.
    pub(crate) fn send(&self, method: Method, path: &str, body: Option<String>) -> Result<String> {
        self.send_at(method, path, body, Utc::now())
    }

    fn send_at(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        timestamp: DateTime<Utc>,
    ) -> Result<String> {
        let headers = auth::create_headers(&self.credentials, &method, path, timestamp)?;

        let mut builder = self.client.request(method, self.endpoint(path)?);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        let request = builder.build()?;

        crate::request(&self.client, request, headers)
    }

    // Relative join keeps any path prefix of a proxy host.
    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.host.join(path.trim_start_matches('/'))?)
    }
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;
    use crate::config::Environment;
    use crate::error::Kind;

    fn credentials(key: &str) -> Credentials {
        Credentials::new(key.to_owned(), SecretString::from("api_secret"))
    }

    #[test]
    fn rejects_malformed_credentials_before_any_request() {
        let err = Client::new(Config::test(credentials(""))).expect_err("empty key");
        assert_eq!(err.kind(), Kind::Signing);
    }

    #[test]
    fn joins_paths_onto_environment_host() -> Result<()> {
        let client = Client::new(
            Config::builder()
                .credentials(credentials("api_key"))
                .environment(Environment::Test)
                .build(),
        )?;

        assert_eq!(
            client.endpoint("/services/rest/orders/v2/")?.as_str(),
            "https://test-plazaapi.bol.com/services/rest/orders/v2/"
        );
        assert_eq!(client.credentials().key(), "api_key");
        Ok(())
    }

    #[test]
    fn keeps_path_prefix_of_host_override() -> Result<()> {
        for host in ["https://proxy.example/plaza", "https://proxy.example/plaza/"] {
            let client = Client::new(
                Config::builder()
                    .credentials(credentials("api_key"))
                    .host(Url::parse(host)?)
                    .build(),
            )?;

            assert_eq!(
                client.endpoint("/services/rest/payments/v2/201501")?.as_str(),
                "https://proxy.example/plaza/services/rest/payments/v2/201501"
            );
        }
        Ok(())
    }
}
