//! Success and failure outcomes that carry messages instead of raising errors.
//!
//! Every outcome is built through one of two factory namespaces:
//!
//! - [`Outcome`] for outcomes without a payload, and
//! - [`OutcomeOf`] for outcomes whose success carries a value of type `T`.
//!
//! The factories hand back concrete shapes, [`SuccessOutcome`] and
//! [`FailureOutcome`], whose fields are private. A failure never carries data,
//! so there is no accessor to call on it. Code that can end either way returns
//! an [`OutcomeResult`] and callers branch on it like any other [`Result`].
//!
//! ```
//! use outcome_wrapper::{Outcome, OutcomeOf, OutcomeResult, OutcomeView};
//!
//! fn parse_port(raw: &str) -> OutcomeResult<u16> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => Ok(OutcomeOf::success(port)),
//!         Err(err) => Err(OutcomeOf::fail_with_error_and_messages(
//!             err,
//!             [format!("'{raw}' is not a port")],
//!         )),
//!     }
//! }
//!
//! let outcome = parse_port("http");
//! assert!(!outcome.succeeded());
//! assert_eq!(outcome.messages(), ["'http' is not a port"]);
//!
//! let done = Outcome::success_with_message("saved")?;
//! assert_eq!(done.messages(), ["saved"]);
//! # Ok::<(), outcome_wrapper::ArgumentError>(())
//! ```
//!
//! Misusing the factory is a separate channel: a blank single message is
//! reported as an [`ArgumentError`] and no outcome is built.

mod cause;
mod error;
mod factory;
mod messages;
mod shapes;

pub use cause::ErrorObject;
pub use error::{ArgumentError, ArgumentResult};
pub use factory::{Outcome, OutcomeOf};
pub use shapes::{FailureOutcome, OutcomeResult, OutcomeView, SuccessOutcome};
