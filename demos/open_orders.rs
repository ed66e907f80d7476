//! Lists open orders in the sandbox.
//!
//! ```sh
//! PLAZA_PUBLIC_KEY=... PLAZA_PRIVATE_KEY=... RUST_LOG=debug \
//!     cargo run --example open_orders --features tracing
//! ```

use std::env;

use plaza_client::auth::Credentials;
use plaza_client::{Client, Config};
use secrecy::SecretString;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let credentials = Credentials::new(
        env::var("PLAZA_PUBLIC_KEY")?,
        SecretString::from(env::var("PLAZA_PRIVATE_KEY")?),
    );
    let client = Client::new(Config::test(credentials))?;

    for order in client.orders().open()? {
        info!(
            order_id = %order.order_id,
            items = order.order_items.len(),
            city = order.customer_details.shipment_details.city.as_deref().unwrap_or("-"),
            "open order"
        );
    }

    Ok(())
}
