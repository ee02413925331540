use chrono::NaiveDate;
use tracing::debug;

use super::calculator::Calculator;
use super::document::{Document, DocumentKind, Party, with_line_prefix};
use super::error::BijakError;
use super::types::LineItemInput;

/// Builder for documents.
///
/// ```
/// use bijak::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let doc = DocumentBuilder::new("INV/2024-25/001", DocumentKind::TaxInvoice, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
///     .seller(PartyBuilder::new("Sharma Traders").gstin("27AAPFU0939F1ZV").state_code("27").build())
///     .buyer(PartyBuilder::new("Patel Stores").state_code("27").build())
///     .add_line(LineItemInput::new(10, dec!(150)).rate(CGST, dec!(9)).rate(SGST, dec!(9)))
///     .build(&Calculator::gst())
///     .unwrap();
///
/// assert_eq!(doc.totals().grand_total, dec!(1770));
/// ```
pub struct DocumentBuilder {
    number: String,
    kind: DocumentKind,
    issue_date: NaiveDate,
    due_date: Option<NaiveDate>,
    seller: Option<Party>,
    buyer: Option<Party>,
    place_of_supply: Option<String>,
    notes: Vec<String>,
    lines: Vec<LineItemInput>,
}

impl DocumentBuilder {
    pub fn new(number: impl Into<String>, kind: DocumentKind, issue_date: NaiveDate) -> Self {
        Self {
            number: number.into(),
            kind,
            issue_date,
            due_date: None,
            seller: None,
            buyer: None,
            place_of_supply: None,
            notes: Vec::new(),
            lines: Vec::new(),
        }
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn seller(mut self, party: Party) -> Self {
        self.seller = Some(party);
        self
    }

    pub fn buyer(mut self, party: Party) -> Self {
        self.buyer = Some(party);
        self
    }

    pub fn place_of_supply(mut self, state_code: impl Into<String>) -> Self {
        self.place_of_supply = Some(state_code.into());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn add_line(mut self, line: LineItemInput) -> Self {
        self.lines.push(line);
        self
    }

    /// Compute every line through `calculator` and assemble a draft.
    ///
    /// Fails on the first line that does not compute; the error's field is
    /// qualified with the line index (e.g. `lines[3].discount`).
    pub fn build(self, calculator: &Calculator) -> Result<Document, BijakError> {
        if self.number.trim().is_empty() {
            return Err(BijakError::Builder("document number is required".into()));
        }
        if self.number.len() > 200 {
            return Err(BijakError::Builder(
                "document number cannot exceed 200 characters".into(),
            ));
        }
        // Input limits to prevent abuse
        if self.lines.len() > 10_000 {
            return Err(BijakError::Builder(
                "document cannot have more than 10,000 line items".into(),
            ));
        }
        if self.notes.len() > 100 {
            return Err(BijakError::Builder(
                "document cannot have more than 100 notes".into(),
            ));
        }
        let seller = self
            .seller
            .ok_or_else(|| BijakError::Builder("seller is required".into()))?;
        let buyer = self
            .buyer
            .ok_or_else(|| BijakError::Builder("buyer is required".into()))?;

        let lines = self
            .lines
            .iter()
            .enumerate()
            .map(|(i, input)| {
                calculator
                    .compute(input)
                    .map_err(|e| with_line_prefix(e, i))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut doc = Document::draft(
            self.number,
            self.kind,
            self.issue_date,
            seller,
            buyer,
            lines,
        )?;
        doc.due_date = self.due_date;
        doc.place_of_supply = self.place_of_supply;
        doc.notes = self.notes;

        debug!(
            document = %doc.number,
            lines = doc.lines().len(),
            grand_total = %doc.totals().grand_total,
            "built draft document"
        );
        Ok(doc)
    }
}

/// Builder for Party.
pub struct PartyBuilder {
    name: String,
    gstin: Option<String>,
    state_code: Option<String>,
    address: Option<String>,
}

impl PartyBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gstin: None,
            state_code: None,
            address: None,
        }
    }

    pub fn gstin(mut self, gstin: impl Into<String>) -> Self {
        self.gstin = Some(gstin.into());
        self
    }

    pub fn state_code(mut self, code: impl Into<String>) -> Self {
        self.state_code = Some(code.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn build(self) -> Party {
        Party {
            name: self.name,
            gstin: self.gstin,
            state_code: self.state_code,
            address: self.address,
        }
    }
}
