//! Open orders and shipment processing.

mod client;
mod types;

pub use client::OrderMethods;
pub use types::{Address, CustomerDetails, Order, OrderItem, Shipment, Transporter};
