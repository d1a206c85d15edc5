//! HTTP transport for the token and item endpoints.

mod client;
pub(crate) mod endpoints;

pub(crate) use client::HttpClient;
