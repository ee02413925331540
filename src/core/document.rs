use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::aggregate::try_aggregate;
use super::calculator::Calculator;
use super::error::{BijakError, InvalidInputError};
use super::types::{DocumentTotals, LineItem, LineItemInput};

/// What kind of document this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    /// GST tax invoice issued to a customer.
    TaxInvoice,
    /// Purchase order sent to a supplier.
    PurchaseOrder,
    /// Quotation / estimate.
    Quotation,
    /// Credit note against an earlier invoice.
    CreditNote,
}

impl DocumentKind {
    /// Title printed at the top of the document.
    pub fn title(&self) -> &'static str {
        match self {
            Self::TaxInvoice => "Tax Invoice",
            Self::PurchaseOrder => "Purchase Order",
            Self::Quotation => "Quotation",
            Self::CreditNote => "Credit Note",
        }
    }
}

/// Lifecycle of a document's totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentStatus {
    /// Lines may change; totals are recomputed on every edit.
    Draft,
    /// Stored totals are authoritative and never recalculated.
    Finalized,
}

/// Seller, buyer, or supplier on a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// Legal or trading name.
    pub name: String,
    /// 15-character GST identification number, if registered.
    pub gstin: Option<String>,
    /// Two-digit GST state code (e.g. "27" for Maharashtra).
    pub state_code: Option<String>,
    /// Postal address as printed.
    pub address: Option<String>,
}

/// A line-itemized document that owns its rows and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document number (e.g. "INV/2024-25/001").
    pub number: String,
    pub kind: DocumentKind,
    pub issue_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub seller: Party,
    pub buyer: Party,
    /// State code of the place of supply.
    pub place_of_supply: Option<String>,
    pub notes: Vec<String>,
    lines: Vec<LineItem>,
    totals: DocumentTotals,
    status: DocumentStatus,
}

impl Document {
    pub(crate) fn draft(
        number: String,
        kind: DocumentKind,
        issue_date: NaiveDate,
        seller: Party,
        buyer: Party,
        lines: Vec<LineItem>,
    ) -> Result<Self, InvalidInputError> {
        let totals = try_aggregate(&lines)?;
        Ok(Self {
            number,
            kind,
            issue_date,
            due_date: None,
            seller,
            buyer,
            place_of_supply: None,
            notes: Vec::new(),
            lines,
            totals,
            status: DocumentStatus::Draft,
        })
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn totals(&self) -> &DocumentTotals {
        &self.totals
    }

    pub fn status(&self) -> DocumentStatus {
        self.status
    }

    pub fn is_finalized(&self) -> bool {
        self.status == DocumentStatus::Finalized
    }

    /// Compute and append a line. Draft only.
    pub fn push_line(
        &mut self,
        calculator: &Calculator,
        input: &LineItemInput,
    ) -> Result<&LineItem, BijakError> {
        self.ensure_draft("push_line")?;
        let item = calculator
            .compute(input)
            .map_err(|e| with_line_prefix(e, self.lines.len()))?;
        self.totals = self
            .totals
            .checked_combine(&DocumentTotals::from_line(&item))
            .ok_or_else(|| InvalidInputError::overflow("totals"))?;
        self.lines.push(item);
        Ok(&self.lines[self.lines.len() - 1])
    }

    /// Replace the line at `index` with a freshly computed one. Draft only.
    pub fn replace_line(
        &mut self,
        calculator: &Calculator,
        index: usize,
        input: &LineItemInput,
    ) -> Result<(), BijakError> {
        self.ensure_draft("replace_line")?;
        if index >= self.lines.len() {
            return Err(InvalidInputError::new(
                "index",
                format!("line {index} does not exist ({} lines)", self.lines.len()),
            )
            .into());
        }
        let item = calculator
            .compute(input)
            .map_err(|e| with_line_prefix(e, index))?;
        let mut lines = self.lines.clone();
        lines[index] = item;
        self.totals = try_aggregate(&lines)?;
        self.lines = lines;
        Ok(())
    }

    /// Remove and return the line at `index`. Draft only.
    pub fn remove_line(&mut self, index: usize) -> Result<LineItem, BijakError> {
        self.ensure_draft("remove_line")?;
        if index >= self.lines.len() {
            return Err(InvalidInputError::new(
                "index",
                format!("line {index} does not exist ({} lines)", self.lines.len()),
            )
            .into());
        }
        let mut lines = self.lines.clone();
        let removed = lines.remove(index);
        self.totals = try_aggregate(&lines)?;
        self.lines = lines;
        Ok(removed)
    }

    /// Recompute every line from its stored inputs. Draft only.
    ///
    /// Either every line recomputes or the document is left untouched.
    pub fn recompute(&mut self, calculator: &Calculator) -> Result<(), BijakError> {
        self.ensure_draft("recompute")?;
        let lines = self
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                calculator
                    .compute(line.input())
                    .map_err(|e| with_line_prefix(e, i))
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.totals = try_aggregate(&lines)?;
        self.lines = lines;
        debug!(
            document = %self.number,
            lines = self.lines.len(),
            grand_total = %self.totals.grand_total,
            "recomputed document totals"
        );
        Ok(())
    }

    /// Freeze the document. From here on the stored totals are authoritative.
    pub fn finalize(&mut self) -> Result<(), BijakError> {
        self.ensure_draft("finalize")?;
        self.status = DocumentStatus::Finalized;
        debug!(
            document = %self.number,
            kind = self.kind.title(),
            lines = self.lines.len(),
            grand_total = %self.totals.grand_total,
            "finalized document"
        );
        Ok(())
    }

    fn ensure_draft(&self, operation: &str) -> Result<(), BijakError> {
        if self.is_finalized() {
            warn!(document = %self.number, operation, "rejected change to finalized document");
            return Err(BijakError::Finalized(format!(
                "{operation} not allowed on finalized document {}",
                self.number
            )));
        }
        Ok(())
    }
}

/// Qualify an error's field with the line it came from (e.g. `lines[2].discount`).
pub(crate) fn with_line_prefix(err: BijakError, index: usize) -> BijakError {
    match err {
        BijakError::InvalidInput(mut e) => {
            e.field = format!("lines[{index}].{}", e.field);
            BijakError::InvalidInput(e)
        }
        BijakError::Validation(mut e) => {
            e.field = format!("lines[{index}].{}", e.field);
            BijakError::Validation(e)
        }
        other => other,
    }
}
