// Copyright (C) 2026 ASR Roofing
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use asr_po_api::{
    ApiError, ApprovalThresholds, AuthenticatedActor, AuthorizationService, AvailableActions,
    DEFAULT_OPERATIONS_MANAGER_LIMIT, DEFAULT_OWNER_APPROVAL_THRESHOLD, PoAction,
    PoNumberDisplay, PoSnapshot, available_actions_for_status, render_po_number,
};
use asr_po_domain::{
    CanonicalRole, Permission, PoNumber, PoStatus, has_permission, normalize_role,
    role_display_name,
};
use axum::{
    Json, Router,
    extract::{Path, State as AxumState, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// ASR PO Server - HTTP host for the purchase order rule engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Amount, in dollars, above which a PO is flagged for owner co-approval
    #[arg(long, default_value_t = DEFAULT_OWNER_APPROVAL_THRESHOLD)]
    owner_approval_threshold: f64,

    /// Amount, in dollars, above which an operations manager's PO is flagged
    #[arg(long, default_value_t = DEFAULT_OPERATIONS_MANAGER_LIMIT)]
    operations_manager_limit: f64,
}

/// Application state shared across handlers.
///
/// Everything here is immutable after startup.
#[derive(Clone)]
struct AppState {
    /// Advisory approval thresholds.
    thresholds: Arc<ApprovalThresholds>,
}

/// API request for encoding a PO number.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct EncodePoNumberRequest {
    /// The leader identifier (digits, e.g. `01`).
    leader_id: String,
    /// The division code (letters, e.g. `CP`).
    division_code: String,
    /// The work order number (0-9999).
    work_order_number: u32,
    /// The purchase sequence within the work order.
    purchase_sequence: u32,
}

/// API response for an encoded PO number.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EncodePoNumberResponse {
    /// The encoded PO number.
    po_number: String,
    /// Short hover description.
    tooltip: String,
    /// Verbose description using the leader and division tables.
    description: String,
}

/// API response for decoding a PO number.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DecodePoNumberResponse {
    /// The string that was decoded.
    code: String,
    /// Whether the string is a well-formed PO number.
    valid: bool,
    /// Render-ready decomposition, or plain text.
    display: PoNumberDisplay,
    /// Verbose description, present only for valid numbers.
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

/// API response describing a role label.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RoleResponse {
    /// The role label as given.
    role: String,
    /// The canonical role the label collapses to.
    canonical_role: String,
    /// The human-readable role name.
    display_name: String,
    /// Whether the role is administrative.
    is_admin: bool,
    /// Every permission token the role holds.
    permissions: Vec<String>,
}

/// API request for a single permission check.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct PermissionCheckRequest {
    /// The role label to check.
    role: String,
    /// The permission token, e.g. `po:approve`.
    permission: String,
}

/// API response for a permission check.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PermissionCheckResponse {
    /// Whether the role holds the permission.
    allowed: bool,
}

/// API request for computing available PO actions.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct PoActionsRequest {
    /// The actor's role label.
    role: String,
    /// The actor's division, if any.
    #[serde(default)]
    user_division_id: Option<String>,
    /// The PO's division, if any.
    #[serde(default)]
    po_division_id: Option<String>,
    /// The PO's status string.
    status: String,
    /// The PO's total, in dollars.
    amount: f64,
}

/// API response for available PO actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PoActionsResponse {
    /// The actions the actor may take.
    actions: AvailableActions,
    /// Advisory owner co-approval flag.
    requires_owner_approval: bool,
    /// Advisory operations-manager limit flag.
    exceeds_operations_manager_limit: bool,
}

/// API request for authorizing a single PO action.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct AuthorizePoActionRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The actor's role label.
    actor_role: String,
    /// The actor's division, if any.
    #[serde(default)]
    actor_division_id: Option<String>,
    /// The PO's status string.
    status: String,
    /// The PO's division, if any.
    #[serde(default)]
    po_division_id: Option<String>,
    /// The PO's total, in dollars.
    amount: f64,
    /// The action name, e.g. `approve`.
    action: String,
}

/// API response for an authorized PO action.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AuthorizePoActionResponse {
    /// Success indicator.
    authorized: bool,
    /// The action that was authorized.
    action: PoAction,
    /// The status the PO moves to, when the action changes status.
    #[serde(skip_serializing_if = "Option::is_none")]
    target_status: Option<PoStatus>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::ActionNotAvailable { .. } => StatusCode::CONFLICT,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection, "Rejected request body");
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Handler for POST `/po_numbers` endpoint.
///
/// Encodes a PO number from its components.
async fn handle_encode_po_number(
    payload: Result<Json<EncodePoNumberRequest>, JsonRejection>,
) -> Result<Json<EncodePoNumberResponse>, HttpError> {
    let Json(req) = payload?;

    info!(
        leader_id = %req.leader_id,
        division_code = %req.division_code,
        work_order_number = req.work_order_number,
        purchase_sequence = req.purchase_sequence,
        "Handling encode_po_number request"
    );

    let po: PoNumber = PoNumber::new(
        &req.leader_id,
        &req.division_code,
        req.work_order_number,
        req.purchase_sequence,
    )
    .map_err(|err| {
        warn!(error = %err, "Rejected PO number components");
        HttpError {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: ApiError::from(err).to_string(),
        }
    })?;

    Ok(Json(EncodePoNumberResponse {
        po_number: po.encode(),
        tooltip: po.tooltip(),
        description: po.describe(),
    }))
}

/// Handler for GET `/po_numbers/{code}` endpoint.
///
/// Decodes a PO number for display. Unparseable strings are returned as
/// plain text rather than rejected.
async fn handle_decode_po_number(Path(code): Path<String>) -> Json<DecodePoNumberResponse> {
    info!(code = %code, "Handling decode_po_number request");

    let description: Option<String> = PoNumber::parse(&code).ok().map(|po| po.describe());
    let display: PoNumberDisplay = render_po_number(&code);

    Json(DecodePoNumberResponse {
        valid: display.is_decomposed(),
        code,
        display,
        description,
    })
}

/// Handler for GET `/roles/{role}` endpoint.
///
/// Describes how a stored role label is interpreted. Unknown labels are
/// described as `USER`.
async fn handle_describe_role(Path(role): Path<String>) -> Json<RoleResponse> {
    info!(role = %role, "Handling describe_role request");

    let canonical: CanonicalRole = normalize_role(&role);
    Json(RoleResponse {
        canonical_role: canonical.as_str().to_string(),
        display_name: role_display_name(&role).to_string(),
        is_admin: canonical == CanonicalRole::Admin,
        permissions: canonical
            .permissions()
            .map(|p| p.as_str().to_string())
            .collect(),
        role,
    })
}

/// Handler for POST `/permissions/check` endpoint.
async fn handle_check_permission(
    payload: Result<Json<PermissionCheckRequest>, JsonRejection>,
) -> Result<Json<PermissionCheckResponse>, HttpError> {
    let Json(req) = payload?;

    info!(
        role = %req.role,
        permission = %req.permission,
        "Handling check_permission request"
    );

    let permission: Permission = req.permission.parse().map_err(|err| {
        warn!(error = %err, "Rejected permission check");
        HttpError::from(ApiError::from(err))
    })?;

    Ok(Json(PermissionCheckResponse {
        allowed: has_permission(&req.role, permission),
    }))
}

/// Handler for POST `/po_actions` endpoint.
///
/// Computes the actions available to a role on a PO, plus the advisory
/// threshold flags for its amount.
async fn handle_po_actions(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<PoActionsRequest>, JsonRejection>,
) -> Result<Json<PoActionsResponse>, HttpError> {
    let Json(req) = payload?;

    info!(
        role = %req.role,
        status = %req.status,
        amount = req.amount,
        "Handling po_actions request"
    );

    let actions: AvailableActions = available_actions_for_status(
        &req.role,
        req.user_division_id.as_deref(),
        req.po_division_id.as_deref(),
        &req.status,
        req.amount,
    );

    Ok(Json(PoActionsResponse {
        actions,
        requires_owner_approval: app_state.thresholds.requires_owner_approval(req.amount),
        exceeds_operations_manager_limit: app_state
            .thresholds
            .exceeds_operations_manager_limit(req.amount),
    }))
}

/// Handler for POST `/po_actions/authorize` endpoint.
///
/// Gate for a single PO action, run before a PO is mutated.
async fn handle_authorize_po_action(
    payload: Result<Json<AuthorizePoActionRequest>, JsonRejection>,
) -> Result<Json<AuthorizePoActionResponse>, HttpError> {
    let Json(req) = payload?;

    info!(
        actor_id = %req.actor_id,
        role = %req.actor_role,
        status = %req.status,
        action = %req.action,
        "Handling authorize_po_action request"
    );

    let status: PoStatus = req
        .status
        .parse()
        .map_err(|err| HttpError::from(ApiError::from(err)))?;
    let action: PoAction = req.action.parse()?;

    let actor: AuthenticatedActor =
        AuthenticatedActor::new(req.actor_id, req.actor_role, req.actor_division_id);
    let po: PoSnapshot = PoSnapshot::new(status, req.po_division_id, req.amount);

    AuthorizationService::authorize_po_action(&actor, &po, action).map_err(|err| {
        warn!(actor_id = %actor.id, error = %err, "PO action refused");
        HttpError::from(err)
    })?;

    Ok(Json(AuthorizePoActionResponse {
        authorized: true,
        action,
        target_status: action.target_status(),
    }))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/po_numbers", post(handle_encode_po_number))
        .route("/po_numbers/{code}", get(handle_decode_po_number))
        .route("/roles/{role}", get(handle_describe_role))
        .route("/permissions/check", post(handle_check_permission))
        .route("/po_actions", post(handle_po_actions))
        .route("/po_actions/authorize", post(handle_authorize_po_action))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing ASR PO Server");

    let thresholds: ApprovalThresholds = ApprovalThresholds {
        operations_manager_limit: args.operations_manager_limit,
        owner_approval_required: args.owner_approval_threshold,
    };
    info!(
        owner_approval_threshold = thresholds.owner_approval_required,
        operations_manager_limit = thresholds.operations_manager_limit,
        "Loaded approval thresholds"
    );

    let app_state: AppState = AppState {
        thresholds: Arc::new(thresholds),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
