//! Login endpoint.
//!
//! ```text
//! POST /login/ {"email":"admin@example.com","password":"password"}
//! ```
//!
//! The body is taken as an untyped JSON object so absent, `null` and
//! mistyped fields surface as per-field messages rather than a parse failure.

use actix_web::{HttpResponse, post, web};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;
use utoipa::ToSchema;
use zeroize::Zeroizing;

use crate::domain::{
    EmailAddress, FieldErrors, FieldIssue, LoginCredentials, LoginOutcome, LoginValidationError,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, FieldErrorsSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

const EMAIL_FIELD: &str = "email";
const PASSWORD_FIELD: &str = "password";

/// Login request body for `POST /login/`.
///
/// Both fields hold whatever JSON the client sent; [`validate_login_request`]
/// decides whether that is acceptable. Not `Debug`: `password` is a secret.
#[derive(Default, ToSchema)]
pub struct LoginRequest {
    /// Login address.
    #[schema(value_type = String, example = "admin@example.com")]
    pub email: Option<Value>,
    /// Password, taken verbatim.
    #[schema(value_type = String, format = Password, example = "password")]
    pub password: Option<Value>,
}

impl From<Map<String, Value>> for LoginRequest {
    fn from(mut body: Map<String, Value>) -> Self {
        Self {
            email: body.remove(EMAIL_FIELD),
            password: body.remove(PASSWORD_FIELD),
        }
    }
}

/// Body returned with `200 OK`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LoginSuccessBody {
    /// Always `Login successful`.
    #[schema(example = "Login successful")]
    pub message: &'static str,
    /// Where the client should navigate next.
    #[schema(example = "/dashboard/")]
    pub redirect_url: &'static str,
}

/// Body returned with `401 Unauthorized`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct InvalidCredentialsBody {
    /// Always `Invalid credentials`.
    #[schema(example = "Invalid credentials")]
    pub error: &'static str,
}

/// Check presence and shape of both fields.
///
/// Every offending field is reported. The email is trimmed; the password is
/// kept exactly as sent and may be empty.
///
/// # Errors
/// Returns the collected [`FieldErrors`] when either field is rejected.
///
/// # Examples
/// ```
/// use portal::inbound::http::login::{LoginRequest, validate_login_request};
/// use serde_json::json;
///
/// let request = LoginRequest {
///     email: Some(json!(" admin@example.com ")),
///     password: Some(json!("password")),
/// };
/// let credentials = validate_login_request(request).unwrap();
/// assert_eq!(credentials.email().as_ref(), "admin@example.com");
///
/// let errors = validate_login_request(LoginRequest::default()).unwrap_err();
/// assert_eq!(errors.fields().collect::<Vec<_>>(), ["email", "password"]);
/// ```
pub fn validate_login_request(request: LoginRequest) -> Result<LoginCredentials, FieldErrors> {
    let mut errors = FieldErrors::default();

    let email = match string_field(request.email).and_then(|raw| {
        EmailAddress::new(raw).map_err(email_issue)
    }) {
        Ok(email) => Some(email),
        Err(issue) => {
            errors.push(EMAIL_FIELD, issue);
            None
        }
    };
    let password = match string_field(request.password) {
        Ok(password) => Some(Zeroizing::new(password)),
        Err(issue) => {
            errors.push(PASSWORD_FIELD, issue);
            None
        }
    };

    match (email, password) {
        (Some(email), Some(password)) => Ok(LoginCredentials::new(email, &password)),
        _ => Err(errors),
    }
}

fn string_field(value: Option<Value>) -> Result<String, FieldIssue> {
    match value {
        None | Some(Value::Null) => Err(FieldIssue::Required),
        Some(Value::String(raw)) => Ok(raw),
        Some(_) => Err(FieldIssue::NotAString),
    }
}

fn email_issue(err: LoginValidationError) -> FieldIssue {
    match err {
        LoginValidationError::BlankEmail => FieldIssue::Blank,
        LoginValidationError::InvalidEmail => FieldIssue::InvalidEmail,
    }
}

/// Render a login outcome.
///
/// # Examples
/// ```
/// use actix_web::http::StatusCode;
/// use portal::domain::LoginOutcome;
/// use portal::inbound::http::login::login_response;
///
/// let response = login_response(LoginOutcome::InvalidCredentials);
/// assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
/// ```
pub fn login_response(outcome: LoginOutcome) -> HttpResponse {
    match outcome {
        LoginOutcome::Success { redirect_url, .. } => HttpResponse::Ok().json(LoginSuccessBody {
            message: "Login successful",
            redirect_url,
        }),
        LoginOutcome::InvalidCredentials => {
            HttpResponse::Unauthorized().json(InvalidCredentialsBody {
                error: "Invalid credentials",
            })
        }
        LoginOutcome::ValidationError(errors) => HttpResponse::BadRequest().json(errors),
    }
}

/// Authenticate with email and password and establish a session.
#[utoipa::path(
    post,
    path = "/login/",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login succeeded", body = LoginSuccessBody,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Field validation failed, keyed by field name",
            body = FieldErrorsSchema),
        (status = 401, description = "Credentials rejected", body = InvalidCredentialsBody),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Identity directory unavailable", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/login/")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<Map<String, Value>>,
) -> ApiResult<HttpResponse> {
    let outcome = match validate_login_request(LoginRequest::from(payload.into_inner())) {
        Ok(credentials) => state.login.log_in(&credentials).await?,
        Err(errors) => {
            info!(fields = ?errors.fields().collect::<Vec<_>>(), "login payload rejected");
            LoginOutcome::ValidationError(errors)
        }
    };

    if let LoginOutcome::Success { principal, .. } = &outcome {
        session.establish(principal)?;
    }
    Ok(login_response(outcome))
}
