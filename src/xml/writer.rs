use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::Result;
use crate::error::{Error, Kind};
use crate::orders::Shipment;
use crate::xml::{DATE_TIME_FORMAT, NAMESPACE, XSI_NAMESPACE};

const INDENT: usize = 4;
const ROOT: &str = "ProcessOrders";

/// Serializes shipments into a `ProcessOrders` document.
///
/// The schema is order sensitive, so children are always written as `OrderId`,
/// `DateTime`, `Transporter`, `OrderItems`.
pub fn encode_process_orders(shipments: &[Shipment]) -> Result<String> {
    if shipments.is_empty() {
        return Err(Error::validation("at least one shipment is required"));
    }
    for shipment in shipments {
        shipment.validate()?;
    }

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(root()))?;
    writer.write_event(Event::Start(BytesStart::new("Shipments")))?;
    for shipment in shipments {
        write_shipment(&mut writer, shipment)?;
    }
    writer.write_event(Event::End(BytesEnd::new("Shipments")))?;
    writer.write_event(Event::End(BytesEnd::new(ROOT)))?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');

    String::from_utf8(bytes).map_err(|e| Error::with_source(Kind::Internal, e))
}

// Attributes go on their own lines, which `push_attribute` cannot express.
fn root() -> BytesStart<'static> {
    let pad = " ".repeat(INDENT);
    let content = format!(
        "{ROOT}\n{pad}xmlns=\"{NAMESPACE}\"\n{pad}xmlns:xsi=\"{XSI_NAMESPACE}\"\n{pad}xsi:schemaLocation=\"{NAMESPACE}\""
    );
    BytesStart::from_content(content, ROOT.len())
}

fn write_shipment(writer: &mut Writer<Vec<u8>>, shipment: &Shipment) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("Shipment")))?;

    leaf(writer, "OrderId", &shipment.order_id)?;
    leaf(
        writer,
        "DateTime",
        &shipment.date_time.format(DATE_TIME_FORMAT).to_string(),
    )?;

    writer.write_event(Event::Start(BytesStart::new("Transporter")))?;
    leaf(writer, "Code", &shipment.transporter.code)?;
    leaf(
        writer,
        "TrackAndTraceCode",
        &shipment.transporter.track_and_trace_code,
    )?;
    writer.write_event(Event::End(BytesEnd::new("Transporter")))?;

    writer.write_event(Event::Start(BytesStart::new("OrderItems")))?;
    for id in &shipment.order_item_ids {
        leaf(writer, "Id", id)?;
    }
    writer.write_event(Event::End(BytesEnd::new("OrderItems")))?;

    writer.write_event(Event::End(BytesEnd::new("Shipment")))?;
    Ok(())
}

fn leaf(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    writer
        .create_element(name)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::orders::Transporter;

    const EXPECTED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ProcessOrders
    xmlns="http://plazaapi.bol.com/services/xsd/plazaapiservice-1.0.xsd"
    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
    xsi:schemaLocation="http://plazaapi.bol.com/services/xsd/plazaapiservice-1.0.xsd">
    <Shipments>
        <Shipment>
            <OrderId>123</OrderId>
            <DateTime>2015-01-02T12:11:00</DateTime>
            <Transporter>
                <Code>DHLFORYOU</Code>
                <TrackAndTraceCode>1234</TrackAndTraceCode>
            </Transporter>
            <OrderItems>
                <Id>34567</Id>
            </OrderItems>
        </Shipment>
    </Shipments>
</ProcessOrders>
"#;

    fn shipment(order_id: &str, item_ids: &[&str]) -> Shipment {
        Shipment::builder()
            .order_id(order_id)
            .date_time(
                NaiveDate::from_ymd_opt(2015, 1, 2)
                    .and_then(|d| d.and_hms_opt(12, 11, 0))
                    .expect("valid timestamp"),
            )
            .transporter(Transporter::new("DHLFORYOU", "1234"))
            .order_item_ids(item_ids.iter().map(|id| (*id).to_owned()).collect())
            .build()
    }

    #[test]
    fn encodes_exact_document() -> Result<()> {
        let document = encode_process_orders(&[shipment("123", &["34567"])])?;
        assert_eq!(document, EXPECTED);
        Ok(())
    }

    #[test]
    fn writes_one_id_per_item_in_order() -> Result<()> {
        let document = encode_process_orders(&[shipment("123", &["1", "2", "3"])])?;

        let ids = "<Id>1</Id>\n                <Id>2</Id>\n                <Id>3</Id>";
        assert!(document.contains(ids), "{document}");
        Ok(())
    }

    #[test]
    fn escapes_text_content() -> Result<()> {
        let document = encode_process_orders(&[shipment("1<2&3", &["34567"])])?;
        assert!(
            document.contains("<OrderId>1&lt;2&amp;3</OrderId>"),
            "{document}"
        );
        Ok(())
    }

    #[test]
    fn rejects_incomplete_shipments() {
        for shipments in [
            Vec::new(),
            vec![shipment("", &["34567"])],
            vec![shipment("123", &[])],
            vec![shipment("123", &[""])],
        ] {
            let err = encode_process_orders(&shipments).expect_err("invalid shipment");
            assert_eq!(err.kind(), Kind::Validation);
        }
    }
}
