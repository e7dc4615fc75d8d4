use crate::types::{ExtractionResponse, FieldValue, LineItem};

/// Placeholder for any absent field.
const NOT_FOUND: &str = "Not found";

/// Build the details fragment for one extraction response. The fragment is
/// swapped into the page's container as a whole, never piecemeal.
pub fn render_bill_details(data: &ExtractionResponse) -> String {
    let structured = data.structured_data.as_ref();
    let vendor = structured.and_then(|s| s.vendor.as_ref());
    let invoice = structured.and_then(|s| s.invoice.as_ref());
    let amounts = structured.and_then(|s| s.amounts.as_ref());
    let items = structured.and_then(|s| s.items.as_deref()).unwrap_or(&[]);

    let mut html = String::new();
    html.push_str("<h4>Raw OCR Output</h4>\n");
    html.push_str(&format!("<pre>{}</pre>\n", raw_output_block(data)));
    html.push_str("<h4>Structured Output</h4>\n");
    html.push_str(&detail_line(
        "Document Type",
        resolve(structured.and_then(|s| s.document_type.as_deref())),
    ));
    html.push_str(&detail_line(
        "Vendor Name",
        resolve(vendor.and_then(|v| v.name.as_deref())),
    ));
    html.push_str(&detail_line(
        "GSTIN",
        resolve(vendor.and_then(|v| v.gstin.as_deref())),
    ));
    html.push_str(&detail_line(
        "Phone",
        resolve(vendor.and_then(|v| v.phone.as_deref())),
    ));
    html.push_str(&detail_line(
        "Invoice Number",
        resolve(invoice.and_then(|i| i.number.as_deref())),
    ));
    html.push_str(&detail_line(
        "Date",
        resolve(invoice.and_then(|i| i.date.as_deref())),
    ));
    html.push_str(&items_block(items));
    html.push_str(&detail_line(
        "Subtotal",
        &resolve_rupees(amounts.and_then(|a| a.subtotal.as_ref())),
    ));
    html.push_str(&detail_line(
        "Tax",
        &resolve_rupees(amounts.and_then(|a| a.tax.as_ref())),
    ));
    html.push_str(&detail_line(
        "Total",
        &resolve_rupees(amounts.and_then(|a| a.grand_total.as_ref())),
    ));
    html
}

/// Resolve an optional text field to its display string.
fn resolve(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_FOUND)
}

/// Resolve an optional currency field. Present values get the ₹ prefix;
/// absent ones render the bare placeholder, never "₹Not found".
fn resolve_rupees(value: Option<&FieldValue>) -> String {
    match value {
        Some(v) => format!("₹{}", v),
        None => NOT_FOUND.to_string(),
    }
}

fn detail_line(label: &str, value: &str) -> String {
    format!("<p><strong>{}:</strong> {}</p>\n", label, value)
}

fn raw_output_block(data: &ExtractionResponse) -> String {
    match &data.raw_output {
        Some(value) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| NOT_FOUND.to_string())
        }
        None => NOT_FOUND.to_string(),
    }
}

fn items_block(items: &[LineItem]) -> String {
    if items.is_empty() {
        return format!("<p><strong>Items:</strong> {}</p>\n", NOT_FOUND);
    }
    let mut table = String::from(
        "<h4>Items</h4>\n<table>\n<tr><th>Item</th><th>Unit Price</th><th>Qty</th><th>Total</th></tr>\n",
    );
    for item in items {
        table.push_str(&format!(
            "<tr><td>{}</td><td>₹{}</td><td>{}</td><td>₹{}</td></tr>\n",
            item.name, item.unit_price, item.quantity, item.total
        ));
    }
    table.push_str("</table>\n");
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Amounts, Invoice, StructuredData, Vendor};
    use serde_json::json;

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    fn full_response() -> ExtractionResponse {
        serde_json::from_value(json!({
            "raw_output": {"model": "donut", "status": "ok"},
            "structured_data": {
                "document_type": "invoice",
                "vendor": {"name": "Sharma Traders", "gstin": "22AAAAA0000A1Z5", "phone": "9876543210"},
                "invoice": {"number": "INV-1043", "date": "12/04/2024"},
                "items": [{"name": "Pen", "unit_price": 10, "quantity": 2, "total": 20}],
                "amounts": {"subtotal": 30, "tax": 5, "grand_total": 35}
            }
        }))
        .unwrap()
    }

    #[test]
    fn missing_structured_data_renders_every_placeholder() {
        let html = render_bill_details(&ExtractionResponse::default());
        // Raw block + 9 labelled lines + the items line.
        assert_eq!(count(&html, NOT_FOUND), 11);
        assert!(html.contains("<p><strong>Items:</strong> Not found</p>"));
        assert!(html.contains("<p><strong>Vendor Name:</strong> Not found</p>"));
        // No prefix conflict: absent currency leaves carry no ₹.
        assert_eq!(count(&html, "₹"), 0);
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn single_item_renders_one_table_row() {
        let html = render_bill_details(&full_response());
        assert_eq!(count(&html, "<tr><td>"), 1);
        assert!(html.contains("<tr><th>Item</th><th>Unit Price</th><th>Qty</th><th>Total</th></tr>"));
        assert!(html.contains("<tr><td>Pen</td><td>₹10</td><td>2</td><td>₹20</td></tr>"));
        assert!(!html.contains("<p><strong>Items:</strong>"));
    }

    #[test]
    fn present_fields_render_verbatim_exactly_once() {
        let html = render_bill_details(&full_response());
        for leaf in [
            "invoice",
            "Sharma Traders",
            "22AAAAA0000A1Z5",
            "9876543210",
            "INV-1043",
            "12/04/2024",
            "Pen",
        ] {
            assert_eq!(count(&html, leaf), 1, "leaf {:?}", leaf);
        }
        // Currency leaves are prefixed, non-currency leaves are not.
        for prefixed in ["₹10", "₹20", "₹30", "₹5", "₹35"] {
            assert_eq!(count(&html, prefixed), 1, "currency leaf {:?}", prefixed);
        }
        assert!(html.contains("<td>2</td>"));
        assert!(!html.contains("₹2<"));
        assert!(!html.contains(NOT_FOUND));
    }

    #[test]
    fn zero_is_a_present_value_not_a_placeholder() {
        let resp = ExtractionResponse {
            raw_output: None,
            structured_data: Some(StructuredData {
                amounts: Some(Amounts {
                    subtotal: Some(serde_json::from_value(json!(0)).unwrap()),
                    tax: None,
                    grand_total: None,
                }),
                ..Default::default()
            }),
        };
        let html = render_bill_details(&resp);
        assert!(html.contains("<p><strong>Subtotal:</strong> ₹0</p>"));
        assert!(html.contains("<p><strong>Tax:</strong> Not found</p>"));
    }

    #[test]
    fn raw_output_round_trips_through_the_pre_block() {
        let raw = json!({"lines": ["TOTAL 250", "CGST 12"], "confidence": 0.87});
        let resp = ExtractionResponse {
            raw_output: Some(raw.clone()),
            structured_data: None,
        };
        let html = render_bill_details(&resp);
        let start = html.find("<pre>").unwrap() + "<pre>".len();
        let end = html.find("</pre>").unwrap();
        let block = &html[start..end];
        assert_eq!(block, serde_json::to_string_pretty(&raw).unwrap());
        assert_eq!(serde_json::from_str::<serde_json::Value>(block).unwrap(), raw);
    }

    #[test]
    fn vendor_without_gstin_mixes_values_and_placeholders() {
        let resp = ExtractionResponse {
            raw_output: None,
            structured_data: Some(StructuredData {
                vendor: Some(Vendor {
                    name: Some("Hotel Annapurna".to_string()),
                    gstin: None,
                    phone: None,
                }),
                invoice: Some(Invoice {
                    number: None,
                    date: Some("01/01/2025".to_string()),
                }),
                ..Default::default()
            }),
        };
        let html = render_bill_details(&resp);
        assert!(html.contains("<p><strong>Vendor Name:</strong> Hotel Annapurna</p>"));
        assert!(html.contains("<p><strong>GSTIN:</strong> Not found</p>"));
        assert!(html.contains("<p><strong>Invoice Number:</strong> Not found</p>"));
        assert!(html.contains("<p><strong>Date:</strong> 01/01/2025</p>"));
    }
}
