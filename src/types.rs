use serde::{Deserialize, Serialize};

/// Numeric-or-string leaf as returned by the extraction service. The parser
/// emits plain numbers where a value came out whole and strings where OCR
/// kept punctuation or symbols.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(serde_json::Number),
    Text(String),
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vendor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gstin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// One row of the bill's item table, in document order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub unit_price: FieldValue,
    pub quantity: FieldValue,
    pub total: FieldValue,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Amounts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grand_total: Option<FieldValue>,
}

/// Structured fields the backend parses out of the raw OCR text. Every
/// section is optional; a sparse bill yields a sparse object, not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructuredData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<Vendor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice: Option<Invoice>,
    /// Absent and `null` both mean "no items".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<LineItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amounts: Option<Amounts>,
}

/// Full response body from the extraction endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionResponse {
    /// Raw model output, shown to the user verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_output: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_data: Option<StructuredData>,
}
