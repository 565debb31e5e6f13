//! Round rules: what the player must reproduce and how a submission is judged.
//!
//! Everything here is a pure function of the state. The session decides
//! what to schedule from the returned `RoundOutcome`.

pub mod validator;

pub use validator::{expected_order, judge, submit, RoundOutcome, Submission};
