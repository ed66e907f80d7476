//! Monthly payment reports.

mod client;
mod types;

pub use client::PaymentMethods;
pub use types::{Payment, PaymentShipment, PaymentShipmentItem, PaymentStatus, ShipmentStatus};
