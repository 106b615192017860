//! Submission gate and payload projection.

use std::fmt;

use thiserror::Error;

use crate::domain::{OrderPayload, PayloadLine};

use super::total::compute_total;
use super::{OrderDraft, ProductLine};

/// A reason the draft cannot be submitted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocker {
    NoClient,
    NoProducts,
    MissingQuantity { product_id: String },
    ZeroTotal,
    /// Lines changed since the last recompute; the cached total no longer matches them.
    StaleTotal,
}

impl fmt::Display for SubmitBlocker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitBlocker::NoClient => f.write_str("no client selected"),
            SubmitBlocker::NoProducts => f.write_str("no products selected"),
            SubmitBlocker::MissingQuantity { product_id } => {
                write!(f, "no quantity for product {}", product_id)
            }
            SubmitBlocker::ZeroTotal => f.write_str("total is zero"),
            SubmitBlocker::StaleTotal => f.write_str("total is out of date"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmissionError {
    #[error("Order is incomplete: {}", describe(.0))]
    Incomplete(Vec<SubmitBlocker>),
}

fn describe(blockers: &[SubmitBlocker]) -> String {
    blockers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Every reason the draft is not ready, in wizard order. Empty when ready.
pub fn submission_blockers(draft: &OrderDraft) -> Vec<SubmitBlocker> {
    let mut blockers = Vec::new();
    if draft.client.is_none() {
        blockers.push(SubmitBlocker::NoClient);
    }
    if draft.products.is_empty() {
        blockers.push(SubmitBlocker::NoProducts);
    }
    blockers.extend(
        draft
            .products
            .iter()
            .filter(|line| line.quantity == 0)
            .map(|line| SubmitBlocker::MissingQuantity {
                product_id: line.id.clone(),
            }),
    );
    if draft.total.is_zero() {
        blockers.push(SubmitBlocker::ZeroTotal);
    }
    if compute_total(&draft.products) != draft.total {
        blockers.push(SubmitBlocker::StaleTotal);
    }
    blockers
}

pub fn can_submit(draft: &OrderDraft) -> bool {
    submission_blockers(draft).is_empty()
}

pub fn validate(draft: &OrderDraft) -> Result<(), SubmissionError> {
    let blockers = submission_blockers(draft);
    if blockers.is_empty() {
        Ok(())
    } else {
        Err(SubmissionError::Incomplete(blockers))
    }
}

/// Projects the draft onto the fields the order creation call accepts.
///
/// This only shapes data. It fails when no client is selected, since the
/// payload cannot name one; callers gate on [`validate`] before submitting.
pub fn build_payload(draft: &OrderDraft) -> Result<OrderPayload, SubmissionError> {
    let client = draft
        .client
        .as_ref()
        .ok_or_else(|| SubmissionError::Incomplete(vec![SubmitBlocker::NoClient]))?;

    Ok(OrderPayload {
        client_id: client.id.clone(),
        total: draft.total,
        lines: draft.products.iter().map(payload_line).collect(),
    })
}

fn payload_line(line: &ProductLine) -> PayloadLine {
    PayloadLine {
        id: line.id.clone(),
        name: line.name.clone(),
        price: line.price,
        quantity: line.quantity,
    }
}
