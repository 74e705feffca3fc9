//! # Request Handlers
//!
//! Axum request handlers for the playground. Each handler parses its input,
//! makes exactly one gateway call and writes one response.

use crate::error::ApiError;
use crate::pages;
use crate::requests::{
    directory_lookup_request, from_first_values, skip_hpp_request, ModificationForm, PaymentForm,
};
use crate::state::AppState;
use axum::{
    extract::{rejection::FormRejection, State},
    response::Redirect,
    Form, Json,
};
use chrono::Utc;
use maud::Markup;
use pay_core::{AuthoriseResponse, ModificationResponse};
use tracing::{info, instrument};

/// Raw form pairs; decoded per handler so repeated keys keep their first value
type FormPairs = Result<Form<Vec<(String, String)>>, FormRejection>;

/// Payment form page
pub async fn show_form(State(state): State<AppState>) -> Markup {
    pages::payment_form(&state.gateway.client_url(), Utc::now())
}

/// Authorise a payment from the submitted form
#[instrument(skip(state, form))]
pub async fn perform_payment(
    State(state): State<AppState>,
    form: FormPairs,
) -> Result<Json<AuthoriseResponse>, ApiError> {
    let Form(pairs) = form?;
    let form: PaymentForm = from_first_values(pairs)?;
    let request = form.into_request(&state.merchant)?;

    info!(
        "Authorising: reference={}, amount={} {}, encrypted={}",
        request.reference,
        request.amount.value,
        request.amount.currency,
        request.source.is_encrypted()
    );

    let response = state.gateway.authorise(&request).await?;
    Ok(Json(response))
}

/// Capture a prior authorisation
#[instrument(skip(state, form))]
pub async fn perform_capture(
    State(state): State<AppState>,
    form: FormPairs,
) -> Result<Json<ModificationResponse>, ApiError> {
    let Form(pairs) = form?;
    let form: ModificationForm = from_first_values(pairs)?;
    let request = form.into_amount_request(&state.merchant)?;

    info!(
        "Capturing: original_reference={}, reference={}",
        request.original_reference, request.reference
    );

    let response = state.gateway.capture(&request).await?;
    Ok(Json(response))
}

/// Cancel a prior authorisation
#[instrument(skip(state, form))]
pub async fn perform_cancel(
    State(state): State<AppState>,
    form: FormPairs,
) -> Result<Json<ModificationResponse>, ApiError> {
    let Form(pairs) = form?;
    let form: ModificationForm = from_first_values(pairs)?;
    let request = form.into_cancel_request(&state.merchant);

    info!(
        "Cancelling: original_reference={}, reference={}",
        request.original_reference, request.reference
    );

    let response = state.gateway.cancel(&request).await?;
    Ok(Json(response))
}

/// Refund a captured payment
#[instrument(skip(state, form))]
pub async fn perform_refund(
    State(state): State<AppState>,
    form: FormPairs,
) -> Result<Json<ModificationResponse>, ApiError> {
    let Form(pairs) = form?;
    let form: ModificationForm = from_first_values(pairs)?;
    let request = form.into_amount_request(&state.merchant)?;

    info!(
        "Refunding: original_reference={}, reference={}",
        request.original_reference, request.reference
    );

    let response = state.gateway.refund(&request).await?;
    Ok(Json(response))
}

/// List hosted payment page methods
#[instrument(skip(state))]
pub async fn perform_lookup(State(state): State<AppState>) -> Result<Markup, ApiError> {
    let request = directory_lookup_request(&state.merchant, Utc::now());

    info!("Directory lookup: merchant_reference={}", request.merchant_reference);

    let lookup = state.gateway.directory_lookup(&request).await?;
    Ok(pages::payment_methods(&lookup))
}

/// Redirect the shopper to the hosted payment page
#[instrument(skip(state))]
pub async fn perform_hpp(State(state): State<AppState>) -> Result<Redirect, ApiError> {
    let request = skip_hpp_request(&state.merchant, Utc::now());

    info!("HPP redirect: merchant_reference={}", request.merchant_reference);

    let url = state.gateway.hpp_redirect_url(&request).await?;
    Ok(Redirect::temporary(&url))
}
