//! VLESS link decomposition
//!
//! Link format: `vless://<credential>@<host>[:<port>][/path][?<query>][#<remark>]`
//!
//! ## Decomposition rules
//!
//! 1. Prefix `vless://` is matched case-sensitively; anything else is `InvalidScheme`.
//! 2. The remark (`#...`) is split off first, then the query (`?...`); the authority
//!    ends at the first `/` and any path is ignored.
//! 3. The credential is the userinfo before the last `@`, cut at its first `:`. It is
//!    passed through verbatim, with no UUID check.
//! 4. The host is lowercased; brackets around an IPv6 literal are removed.
//! 5. A port that is missing, empty, zero or not a number becomes `443`. Numbers above
//!    65535 are passed through untouched.
//!
//! Nothing else is validated.

use crate::constants::{DEFAULT_PORT, SCHEME, error_msg};
use crate::error::{ConvertError, Result};
use crate::query::Query;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A VLESS link split into its parts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedUri {
    /// Scheme name, without `://`
    pub scheme: String,
    /// User ID (UUID), may be empty
    pub credential: String,
    /// Server host, may be empty
    pub host: String,
    /// Server port
    pub port: u32,
    /// Decoded query parameters
    pub query: Query,
    /// Decoded remark from the fragment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

impl ParsedUri {
    /// Split a `vless://` link into credential, host, port and query
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidScheme`] if `link` does not start with `vless://`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vless2xray::ParsedUri;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let uri = ParsedUri::parse("vless://id@Example.com?type=xhttp")?;
    /// assert_eq!(uri.host, "example.com");
    /// assert_eq!(uri.port, 443);
    /// assert_eq!(uri.query.first("type"), Some("xhttp"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn parse(link: &str) -> Result<Self> {
        let Some(link_body) = link.strip_prefix(SCHEME) else {
            return Err(ConvertError::InvalidScheme(format!(
                "{} {}",
                error_msg::MUST_START_WITH,
                SCHEME
            )));
        };

        let (before_hash, remark) = match link_body.split_once('#') {
            Some((before, fragment)) => {
                let remark = urlencoding::decode(fragment)
                    .map(Cow::into_owned)
                    .unwrap_or_else(|_| fragment.to_string());
                (before, Some(remark))
            }
            None => (link_body, None),
        };

        let (before_query, query) = match before_hash.split_once('?') {
            Some((before, raw)) => (before, Query::parse(raw)),
            None => (before_hash, Query::default()),
        };

        let authority = match before_query.find('/') {
            Some(pos) => &before_query[..pos],
            None => before_query,
        };

        let (userinfo, host_port) = match authority.rfind('@') {
            Some(pos) => (&authority[..pos], &authority[pos + 1..]),
            None => ("", authority),
        };
        let credential = userinfo
            .split_once(':')
            .map_or(userinfo, |(user, _)| user);

        let (host, port_str) = split_host_port(host_port);
        let port = resolve_port(port_str);

        tracing::debug!(
            host = %host,
            port,
            params = query.len(),
            has_credential = !credential.is_empty(),
            "decomposed vless link"
        );

        Ok(ParsedUri {
            scheme: SCHEME.trim_end_matches("://").to_string(),
            credential: credential.to_string(),
            host: host.to_lowercase(),
            port,
            query,
            remark,
        })
    }
}

/// Split `host[:port]`, honouring `[v6]:port`.
fn split_host_port(host_port: &str) -> (&str, Option<&str>) {
    if let Some(bracketed) = host_port.strip_prefix('[') {
        return match bracketed.split_once(']') {
            Some((host, rest)) => (host, rest.strip_prefix(':')),
            // unterminated literal
            None => (bracketed, None),
        };
    }
    match host_port.split_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (host_port, None),
    }
}

fn resolve_port(port_str: Option<&str>) -> u32 {
    match port_str {
        None | Some("") => DEFAULT_PORT,
        Some(raw) => match raw.parse::<u32>() {
            Ok(port) if port > 0 => port,
            _ => {
                tracing::warn!(
                    port = raw,
                    fallback = DEFAULT_PORT,
                    "unusable port, using default"
                );
                DEFAULT_PORT
            }
        },
    }
}
