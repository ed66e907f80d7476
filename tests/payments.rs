mod common;

use chrono::NaiveDate;
use httpmock::prelude::*;
use plaza_client::payments::{PaymentStatus, ShipmentStatus};
use plaza_client::{Client, Config, Kind};
use rust_decimal_macros::dec;
use url::Url;

use crate::common::{PAYMENTS, XML_CONTENT_TYPE, client, credentials};

#[test]
fn report_should_succeed() -> anyhow::Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/services/rest/payments/v2/201501")
            .header("content-type", XML_CONTENT_TYPE)
            .header_exists("x-bol-authorization");
        then.status(200).body(PAYMENTS);
    });

    let payments = client(&server).payments().report(2015, 1)?;

    mock.assert();
    assert_eq!(payments.len(), 1);

    let payment = &payments[0];
    assert_eq!(payment.credit_invoice_number, "123");
    assert_eq!(payment.payment_amount, dec!(425.77));
    assert_eq!(
        Some(payment.date_time_payment),
        NaiveDate::from_ymd_opt(2015, 9, 23).and_then(|d| d.and_hms_opt(21, 35, 43))
    );

    assert_eq!(payment.payment_shipments.len(), 1);
    let shipment = &payment.payment_shipments[0];
    assert_eq!(shipment.shipment_id, "456");
    assert_eq!(shipment.order_id, "123001");
    assert_eq!(shipment.payment_shipment_amount, dec!(425.77));
    assert_eq!(shipment.payment_status, PaymentStatus::Final);
    assert_eq!(shipment.payment_status.to_string(), "FINAL");

    assert_eq!(shipment.payment_shipment_items.len(), 1);
    let item = &shipment.payment_shipment_items[0];
    assert_eq!(item.order_item_id, "123001001");
    assert_eq!(item.quantity, 1);
    assert_eq!(item.shipping_contribution, dec!(1.95));
    assert_eq!(item.transaction_fee, dec!(10.00));
    assert_eq!(item.total_amount, dec!(425.77));
    assert_eq!(item.shipment_status, ShipmentStatus::Normal);

    Ok(())
}

#[test]
fn invalid_month_should_not_reach_the_server() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.any_request();
        then.status(200).body(PAYMENTS);
    });

    let err = client(&server)
        .payments()
        .report(2015, 13)
        .expect_err("month 13");

    assert_eq!(err.kind(), Kind::Validation);
    mock.assert_calls(0);
}

#[test]
fn unreachable_host_should_be_transport_error() -> anyhow::Result<()> {
    let config = Config::builder()
        .credentials(credentials())
        .host(Url::parse("http://127.0.0.1:1")?)
        .build();

    let err = Client::new(config)?
        .payments()
        .report(2015, 1)
        .expect_err("nothing listens on port 1");

    assert_eq!(err.kind(), Kind::Transport);
    Ok(())
}
