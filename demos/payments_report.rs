//! Sums the payments of one month in the sandbox.
//!
//! ```sh
//! PLAZA_PUBLIC_KEY=... PLAZA_PRIVATE_KEY=... RUST_LOG=debug \
//!     cargo run --example payments_report --features tracing -- 2015 1
//! ```

use std::env;

use anyhow::Context as _;
use plaza_client::auth::Credentials;
use plaza_client::types::Decimal;
use plaza_client::{Client, Config};
use secrecy::SecretString;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let year = args.next().context("missing year")?.parse()?;
    let month = args.next().context("missing month")?.parse()?;

    let credentials = Credentials::new(
        env::var("PLAZA_PUBLIC_KEY")?,
        SecretString::from(env::var("PLAZA_PRIVATE_KEY")?),
    );
    let client = Client::new(Config::test(credentials))?;

    let payments = client.payments().report(year, month)?;
    let total: Decimal = payments.iter().map(|p| p.payment_amount).sum();

    for payment in &payments {
        info!(
            invoice = %payment.credit_invoice_number,
            amount = %payment.payment_amount,
            shipments = payment.payment_shipments.len(),
            "payment"
        );
    }
    info!(count = payments.len(), %total, "payments for {year}-{month:02}");

    Ok(())
}
