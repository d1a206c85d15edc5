//! Authentication types.
//!
//! [`Credentials`] are supplied once per client. The access token obtained
//! with them is cached in an internal `AuthSession` and refreshed by the
//! client whenever it has expired.

mod credentials;
mod tokens;

pub use credentials::{
    Credentials, CredentialsBuilder, ENV_APP_ID, ENV_APP_TOKEN, ENV_CLIENT_ID, ENV_CLIENT_SECRET,
};
pub use tokens::AccessToken;

pub(crate) use tokens::AuthSession;
