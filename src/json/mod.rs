//! JSON snapshots of documents for the persistence layer.
//!
//! A snapshot carries every computed amount. Loading one restores those
//! amounts exactly as stored; nothing is recalculated, so finalized
//! documents stay stable across library versions.

use crate::core::{BijakError, Document};

/// Serialize a document, including its computed line and document totals.
pub fn to_json(doc: &Document) -> Result<String, BijakError> {
    serde_json::to_string_pretty(doc).map_err(|e| BijakError::Serialization(e.to_string()))
}

/// Restore a document from a snapshot without recomputing anything.
pub fn from_json(json: &str) -> Result<Document, BijakError> {
    serde_json::from_str(json).map_err(|e| BijakError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn finalized() -> Document {
        let mut doc = DocumentBuilder::new(
            "INV/2024-25/007",
            DocumentKind::TaxInvoice,
            NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
        )
        .seller(PartyBuilder::new("Sharma Traders").state_code("27").build())
        .buyer(PartyBuilder::new("Rao & Sons").state_code("29").build())
        .add_line(LineItemInput::new(3, dec!(33.335)).rate(IGST, dec!(5)))
        .build(&Calculator::gst())
        .unwrap();
        doc.finalize().unwrap();
        doc
    }

    #[test]
    fn snapshot_restores_identical_document() {
        let doc = finalized();
        let json = to_json(&doc).unwrap();
        let restored = from_json(&json).unwrap();
        assert_eq!(restored, doc);
        assert!(restored.is_finalized());
        assert_eq!(restored.totals().grand_total, dec!(105.00525));
    }

    #[test]
    fn stored_amounts_are_not_recalculated() {
        let json = to_json(&finalized()).unwrap();
        // a future rate change would alter the computation; the stored value wins
        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        value["totals"]["totals_by_rate"]["IGST"] = serde_json::Value::String("5.01".into());
        let restored = from_json(&value.to_string()).unwrap();
        assert_eq!(restored.totals().tax_for(IGST), dec!(5.01));
        assert!(!validate_arithmetic(&restored).is_empty());
    }

    #[test]
    fn garbage_is_a_serialization_error() {
        assert!(matches!(from_json("{"), Err(BijakError::Serialization(_))));
    }
}
