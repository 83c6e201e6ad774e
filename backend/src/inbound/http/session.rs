//! Session helpers so handlers never touch Actix session keys directly.
//!
//! The session stores the principal id and the email used to sign in. The
//! cookie itself is issued and validated by `actix-session`.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{Error, Principal, PrincipalId};

pub(crate) const PRINCIPAL_ID_KEY: &str = "principal_id";
pub(crate) const EMAIL_KEY: &str = "email";

/// Domain-level view over the Actix session.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Wrap an Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Bind the session to `principal`.
    ///
    /// Existing state is discarded and the session id renewed before the
    /// principal is stored, so a pre-login cookie never carries over.
    ///
    /// # Errors
    /// Returns an internal error when the session cannot be serialised.
    pub fn establish(&self, principal: &Principal) -> Result<(), Error> {
        self.0.clear();
        self.0.renew();
        self.insert(PRINCIPAL_ID_KEY, principal.id().to_string())?;
        self.insert(EMAIL_KEY, principal.email().to_string())
    }

    /// Principal bound to this session, if any.
    ///
    /// A value that does not parse as a [`PrincipalId`] is treated as absent.
    ///
    /// # Errors
    /// Returns an internal error when the session cannot be read.
    pub fn principal_id(&self) -> Result<Option<PrincipalId>, Error> {
        let raw = self
            .0
            .get::<String>(PRINCIPAL_ID_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        let Some(raw) = raw else {
            return Ok(None);
        };
        match PrincipalId::new(&raw) {
            Ok(id) => Ok(Some(id)),
            Err(error) => {
                warn!(%error, "invalid principal id in session cookie");
                Ok(None)
            }
        }
    }

    /// Principal bound to this session, or `401 login required`.
    ///
    /// # Errors
    /// [`crate::domain::ErrorCode::Unauthorized`] without a principal.
    pub fn require_principal_id(&self) -> Result<PrincipalId, Error> {
        self.principal_id()?
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    fn insert(&self, key: &str, value: String) -> Result<(), Error> {
        self.0
            .insert(key, value)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};

    use crate::domain::EmailAddress;
    use crate::inbound::http::test_utils::{session_cookie, test_session_middleware};

    const ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    fn principal() -> Principal {
        Principal::new(
            PrincipalId::new(ID).expect("fixture id"),
            EmailAddress::new("ada@example.com").expect("fixture email"),
            "Ada Lovelace",
        )
    }

    async fn establish(session: SessionContext) -> Result<HttpResponse, Error> {
        session.establish(&principal())?;
        Ok(HttpResponse::Ok().finish())
    }

    async fn whoami(session: SessionContext) -> Result<HttpResponse, Error> {
        let id = session.require_principal_id()?;
        Ok(HttpResponse::Ok().body(id.to_string()))
    }

    async fn forged(session: Session) -> HttpResponse {
        session
            .insert(PRINCIPAL_ID_KEY, "not-a-uuid")
            .expect("insert forged id");
        HttpResponse::Ok().finish()
    }

    fn get(uri: &str, cookie: Option<Cookie<'static>>) -> actix_http::Request {
        let req = test::TestRequest::get().uri(uri);
        match cookie {
            Some(cookie) => req.cookie(cookie).to_request(),
            None => req.to_request(),
        }
    }

    #[actix_web::test]
    async fn established_session_round_trips_principal_id() {
        let app = test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .route("/establish", web::get().to(establish))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let res = test::call_service(&app, get("/establish", None)).await;
        assert_eq!(res.status(), StatusCode::OK);
        let cookie = session_cookie(&res).expect("session cookie issued");

        let res = test::call_service(&app, get("/whoami", Some(cookie))).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, ID);
    }

    #[actix_web::test]
    async fn missing_principal_is_unauthorised() {
        let app = test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let res = test::call_service(&app, get("/whoami", None)).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: Error = test::read_body_json(res).await;
        assert_eq!(body.message(), "login required");
    }

    #[actix_web::test]
    async fn forged_principal_id_is_treated_as_absent() {
        let app = test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .route("/forge", web::get().to(forged))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let res = test::call_service(&app, get("/forge", None)).await;
        let cookie = session_cookie(&res).expect("session cookie issued");

        let res = test::call_service(&app, get("/whoami", Some(cookie))).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
