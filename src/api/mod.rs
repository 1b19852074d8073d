//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints through which the surrounding
//! HR application drives interpretation and pay event generation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{InterpretRequest, PayEventRequest, PayslipRequest};
pub use response::{ApiError, InterpretResponse};
pub use state::AppState;
