pub mod aggregate;
pub mod classification;
pub mod requests;

pub use aggregate::{DeadlineStatus, Movement, MovementId};
pub use classification::{retain_state, split_by_state, MovementState};
pub use requests::{CheckoutForm, CheckoutRequest, MovementKind, ReturnForm, ReturnRequest};
