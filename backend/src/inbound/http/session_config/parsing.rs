//! Environment value parsing shared by the session settings loader.

use actix_web::cookie::SameSite;
use mockable::Env;
use tracing::warn;

use super::{BuildMode, SAMESITE_ENV, SessionConfigError};

const BOOL_EXPECTED: &str = "1|0|true|false|yes|no|y|n";
const SAMESITE_EXPECTED: &str = "Strict|Lax|None";

/// A boolean toggle and the value debug builds fall back to.
pub(super) struct BoolEnv {
    name: &'static str,
    fallback: bool,
}

impl BoolEnv {
    pub(super) const fn new(name: &'static str, fallback: bool) -> Self {
        Self { name, fallback }
    }

    fn fallback_label(&self) -> &'static str {
        if self.fallback { "enabled" } else { "disabled" }
    }
}

/// Read a boolean toggle and pass a parsed value through `accept`.
pub(super) fn parse_bool_env<E, F>(
    env: &E,
    mode: BuildMode,
    toggle: BoolEnv,
    accept: F,
) -> Result<bool, SessionConfigError>
where
    E: Env,
    F: FnOnce(bool) -> Result<bool, SessionConfigError>,
{
    let Some(value) = env.string(toggle.name) else {
        return warn_or_fail(
            mode,
            toggle.fallback,
            SessionConfigError::MissingEnv { name: toggle.name },
            || warn!("{} not set; defaulting to {}", toggle.name, toggle.fallback_label()),
        );
    };

    match parse_bool(&value) {
        Some(flag) => accept(flag),
        None => {
            let label = toggle.fallback_label();
            warn_or_fail(
                mode,
                toggle.fallback,
                SessionConfigError::InvalidEnv {
                    name: toggle.name,
                    value: value.clone(),
                    expected: BOOL_EXPECTED,
                },
                || warn!(value = %value, "invalid {}; defaulting to {label}", toggle.name),
            )
        }
    }
}

/// Fall back with a warning in debug builds; fail in release builds.
pub(super) fn warn_or_fail<T, F>(
    mode: BuildMode,
    fallback: T,
    error: SessionConfigError,
    warn_fn: F,
) -> Result<T, SessionConfigError>
where
    F: FnOnce(),
{
    if mode.is_debug() {
        warn_fn();
        Ok(fallback)
    } else {
        Err(error)
    }
}

pub(super) fn parse_same_site(
    value: String,
    mode: BuildMode,
    cookie_secure: bool,
    fallback: SameSite,
) -> Result<SameSite, SessionConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "lax" => Ok(SameSite::Lax),
        "strict" => Ok(SameSite::Strict),
        "none" if cookie_secure => Ok(SameSite::None),
        "none" => warn_or_fail(
            mode,
            SameSite::None,
            SessionConfigError::InsecureSameSiteNone,
            || warn!("SESSION_SAMESITE=None without SESSION_COOKIE_SECURE; browsers may drop the cookie"),
        ),
        _ => warn_or_fail(
            mode,
            fallback,
            SessionConfigError::InvalidEnv {
                name: SAMESITE_ENV,
                value: value.clone(),
                expected: SAMESITE_EXPECTED,
            },
            || warn!(value = %value, "invalid SESSION_SAMESITE; using default"),
        ),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", Some(true))]
    #[case("YES", Some(true))]
    #[case(" y ", Some(true))]
    #[case("false", Some(false))]
    #[case("N", Some(false))]
    #[case("maybe", None)]
    #[case("", None)]
    fn parses_boolean_spellings(#[case] raw: &str, #[case] expected: Option<bool>) {
        assert_eq!(parse_bool(raw), expected);
    }

    #[rstest]
    #[case("strict", SameSite::Strict)]
    #[case("Lax", SameSite::Lax)]
    #[case("NONE", SameSite::None)]
    fn same_site_is_case_insensitive(#[case] raw: &str, #[case] expected: SameSite) {
        let parsed = parse_same_site(raw.to_owned(), BuildMode::Release, true, SameSite::Strict)
            .expect("valid policy");
        assert_eq!(parsed, expected);
    }

    #[rstest]
    fn debug_tolerates_insecure_none() {
        let parsed = parse_same_site("None".to_owned(), BuildMode::Debug, false, SameSite::Lax)
            .expect("debug builds only warn");
        assert_eq!(parsed, SameSite::None);
    }
}
