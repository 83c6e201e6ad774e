//! Post-login destination.
//!
//! ```text
//! GET /dashboard/
//! ```

use actix_web::{get, web};
use tracing::warn;

use crate::domain::{Error, Principal};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, PrincipalSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Profile of the principal bound to the session.
///
/// A session naming a principal the provider no longer knows is treated the
/// same as no session.
#[utoipa::path(
    get,
    path = "/dashboard/",
    responses(
        (status = 200, description = "Signed-in principal", body = PrincipalSchema),
        (status = 401, description = "No established session", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Identity directory unavailable", body = ErrorSchema)
    ),
    tags = ["dashboard"],
    operation_id = "dashboard"
)]
#[get("/dashboard/")]
pub async fn dashboard(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Principal>> {
    let id = session.require_principal_id()?;
    match state.principals.find_principal(&id).await? {
        Some(principal) => Ok(web::Json(principal)),
        None => {
            warn!(principal_id = %id, "session names an unknown principal");
            Err(Error::unauthorized("login required"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;
    use serde_json::{Value, json};

    use crate::domain::ports::{
        FIXTURE_DISPLAY_NAME, FIXTURE_EMAIL, FIXTURE_PASSWORD, FIXTURE_PRINCIPAL_ID,
        FixtureAuthenticationProvider, MockAuthenticationProvider,
    };
    use crate::domain::ports::AuthenticationProvider;
    use crate::inbound::http::login::login;
    use crate::inbound::http::test_utils::{session_cookie, test_session_middleware};

    fn app(
        provider: Arc<dyn AuthenticationProvider>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(HttpState::new(provider)))
            .wrap(test_session_middleware())
            .service(login)
            .service(dashboard)
    }

    #[rstest]
    #[actix_web::test]
    async fn signed_in_principal_sees_their_profile() {
        let app = test::init_service(app(Arc::new(FixtureAuthenticationProvider))).await;
        let login_res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/login/")
                .set_json(json!({ "email": FIXTURE_EMAIL, "password": FIXTURE_PASSWORD }))
                .to_request(),
        )
        .await;
        let cookie = session_cookie(&login_res).expect("session cookie issued");

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/dashboard/")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(
            body,
            json!({
                "id": FIXTURE_PRINCIPAL_ID,
                "email": FIXTURE_EMAIL,
                "displayName": FIXTURE_DISPLAY_NAME,
            })
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn anonymous_requests_are_unauthorised() {
        let app = test::init_service(app(Arc::new(FixtureAuthenticationProvider))).await;
        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/dashboard/").to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["code"], "unauthorized");
    }

    #[rstest]
    #[actix_web::test]
    async fn unknown_principal_is_unauthorised() {
        let mut provider = MockAuthenticationProvider::new();
        provider
            .expect_authenticate()
            .returning(|_| FixtureAuthenticationProvider::principal().map(Some));
        provider.expect_find_principal().returning(|_| Ok(None));

        let app = test::init_service(app(Arc::new(provider))).await;
        let login_res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/login/")
                .set_json(json!({ "email": FIXTURE_EMAIL, "password": FIXTURE_PASSWORD }))
                .to_request(),
        )
        .await;
        let cookie = session_cookie(&login_res).expect("session cookie issued");

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/dashboard/")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
