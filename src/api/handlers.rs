//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{accrue_leave, interpret, resolve_super_rate, superannuation_for};
use crate::models::{AttendanceRecord, PayComponentType, Payslip};

use super::request::{InterpretRequest, PayEventRequest};
use super::response::{ApiError, ApiErrorResponse, InterpretResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/interpret", post(interpret_handler))
        .route("/pay-events", post(pay_events_handler))
        .with_state(state)
}

/// Converts a JSON extraction rejection into an error response.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for POST /interpret endpoint.
///
/// Interprets one attendance record into pay components, leave accruals and
/// the superannuation figure for the resulting gross amount.
async fn interpret_handler(
    State(state): State<AppState>,
    payload: Result<Json<InterpretRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing interpret request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let record: AttendanceRecord = request.record.into();
    let config = state.config();

    let components = interpret(&record, request.base_hourly_rate, config.award_rules());

    let gross_amount: Decimal = components.iter().map(|c| c.amount).sum();
    let (ordinary_hours, overtime_hours) = components.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(ordinary, overtime), c| match c.component_type {
            PayComponentType::Ordinary => (ordinary + c.units, overtime),
            PayComponentType::Overtime => (ordinary, overtime + c.units),
        },
    );

    let leave_accruals = accrue_leave(ordinary_hours, overtime_hours, config.leave_rules());
    let superannuation_rate = resolve_super_rate(record.date, config.super_schedule());
    let superannuation = superannuation_for(gross_amount, record.date, config.super_schedule());

    info!(
        correlation_id = %correlation_id,
        record_id = %record.id,
        employee_id = %record.employee_id,
        components = components.len(),
        gross_amount = %gross_amount,
        "Interpretation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(InterpretResponse {
            components,
            gross_amount,
            superannuation_rate,
            superannuation,
            leave_accruals,
        }),
    )
        .into_response()
}

/// Handler for POST /pay-events endpoint.
///
/// Generates a Draft pay event for the run's payslips and appends it to the
/// injected event store.
async fn pay_events_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayEventRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing pay event request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let payslips: Vec<Payslip> = request.payslips.into_iter().map(Into::into).collect();

    match state
        .processor()
        .process_run(&request.pay_run_id, &payslips, request.run_date)
    {
        Ok(event) => {
            info!(
                correlation_id = %correlation_id,
                pay_run_id = %request.pay_run_id,
                event_id = %event.id,
                employee_count = event.employee_count,
                total_gross = %event.total_gross,
                "Pay event generated"
            );
            (
                StatusCode::CREATED,
                [(header::CONTENT_TYPE, "application/json")],
                Json(event),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                pay_run_id = %request.pay_run_id,
                error = %err,
                "Pay event generation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
