//! Submission of pay events to the external authority.

mod gateway;

pub use gateway::{
    SubmissionClient, SubmissionGateway, SubmissionOutcome, DEFAULT_SUBMIT_TIMEOUT,
};
