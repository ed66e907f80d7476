//! Marks one order item as shipped in the sandbox.
//!
//! ```sh
//! PLAZA_PUBLIC_KEY=... PLAZA_PRIVATE_KEY=... \
//!     cargo run --example process_order -- <order id> <order item id> <track and trace>
//! ```

use std::env;
use std::io::Write as _;

use anyhow::Context as _;
use chrono::Utc;
use plaza_client::auth::Credentials;
use plaza_client::orders::{Shipment, Transporter};
use plaza_client::{Client, Config};
use secrecy::SecretString;

fn main() -> anyhow::Result<()> {
    let mut args = env::args().skip(1);
    let order_id = args.next().context("missing order id")?;
    let order_item_id = args.next().context("missing order item id")?;
    let track_and_trace = args.next().context("missing track and trace code")?;

    let credentials = Credentials::new(
        env::var("PLAZA_PUBLIC_KEY")?,
        SecretString::from(env::var("PLAZA_PRIVATE_KEY")?),
    );
    let client = Client::new(Config::test(credentials))?;

    let shipment = Shipment::builder()
        .order_id(order_id)
        .date_time(Utc::now().naive_utc())
        .transporter(Transporter::new("TNT", track_and_trace))
        .order_item_ids(vec![order_item_id])
        .build();

    let process_id = client.orders().process(&shipment)?;
    writeln!(std::io::stdout(), "process order id: {process_id}")?;

    Ok(())
}
