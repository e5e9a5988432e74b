//! HTTP client helper with native-tls support.
//!
//! Both the recognition adapters and the Wikipedia probe share this agent
//! configuration. Non-2xx statuses are returned as responses rather than
//! errors so callers can read service error bodies.

use ureq::tls::{RootCerts, TlsConfig, TlsProvider};
use ureq::Agent;

use crate::constants::USER_AGENT;

/// Create a new HTTP agent configured with native-tls.
///
/// Uses the platform verifier for the system's root certificates.
pub fn agent() -> Agent {
    let tls_config = TlsConfig::builder()
        .provider(TlsProvider::NativeTls)
        .root_certs(RootCerts::PlatformVerifier)
        .build();

    Agent::config_builder()
        .tls_config(tls_config)
        .http_status_as_error(false)
        .build()
        .into()
}

/// User-Agent header value for outgoing requests
pub fn user_agent() -> &'static str {
    USER_AGENT
}
