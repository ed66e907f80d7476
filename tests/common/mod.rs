#![allow(dead_code, reason = "each test binary uses a different subset")]

use httpmock::MockServer;
use plaza_client::auth::Credentials;
use plaza_client::{Client, Config, Environment};
use secrecy::SecretString;
use url::Url;

pub const ORDERS: &str = include_str!("../fixtures/orders.xml");
pub const PAYMENTS: &str = include_str!("../fixtures/payments.xml");
pub const PROCESS_ORDERS: &str = include_str!("../fixtures/process_orders.xml");
pub const PROCESS_RESULT: &str = include_str!("../fixtures/process_result.xml");

pub const XML_CONTENT_TYPE: &str = "application/xml; charset=UTF-8";

pub fn credentials() -> Credentials {
    Credentials::new("api_key".to_owned(), SecretString::from("api_secret"))
}

/// A sandbox client whose requests all go to `server`.
pub fn client(server: &MockServer) -> Client {
    client_at(server, "")
}

/// Like [`client`], but with every request routed under `prefix` on `server`.
pub fn client_at(server: &MockServer, prefix: &str) -> Client {
    let host = Url::parse(&server.url(prefix)).expect("mock server url");
    let config = Config::builder()
        .credentials(credentials())
        .environment(Environment::Test)
        .host(host)
        .build();

    Client::new(config).expect("client")
}
