//! Order composition: the pure state machine behind the order-entry wizard.
//!
//! Client, product selection and quantities arrive as independent events and
//! are folded into one [`OrderDraft`] by [`reduce`]. Nothing in here does I/O.

mod draft;
pub mod quantity;
pub mod reconcile;
pub mod reducer;
pub mod submission;
pub mod total;

pub use draft::*;
pub use quantity::{parse_quantity, set_quantity, QuantityError, QuantityInput, QuantityUpdate};
pub use reconcile::reconcile;
pub use reducer::{reduce, OrderAction, Reduction};
pub use submission::{
    build_payload, can_submit, submission_blockers, validate, SubmissionError, SubmitBlocker,
};
pub use total::compute_total;
