//! Environment-based construction.
//!
//! Kept in its own test binary with a single test, since it mutates the
//! process environment.

use podio::auth::{ENV_APP_ID, ENV_APP_TOKEN, ENV_CLIENT_ID, ENV_CLIENT_SECRET};
use podio::error::ConfigError;
use podio::{AppId, Error, PodioClient};

#[test]
fn test_client_from_env_requires_every_variable() {
    // SAFETY: the only test in this binary, so no other thread reads the environment
    unsafe {
        std::env::set_var(ENV_APP_ID, "1234");
        std::env::set_var(ENV_APP_TOKEN, "env-app-token");
        std::env::set_var(ENV_CLIENT_ID, "env-client");
        std::env::remove_var(ENV_CLIENT_SECRET);
    }

    let err = PodioClient::from_env().unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::MissingField {
            field: "client_secret"
        })
    ));

    unsafe {
        std::env::set_var(ENV_CLIENT_SECRET, "env-secret");
    }

    let client = PodioClient::from_env().unwrap();
    assert_eq!(client.app_id(), AppId::new(1234));
}
