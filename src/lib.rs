//! # vless2xray
//!
//! Turns a single VLESS share link (`vless://...`) into a complete Xray client
//! configuration: a local SOCKS inbound, the proxy outbound described by the link,
//! `direct`/`block` outbounds and a rule routing private addresses directly.
//!
//! ## Pipeline
//!
//! - **[`ParsedUri`]** splits the link into credential, host, port and query.
//! - **[`Query`]** looks up parameters with defaults and answers "is this key present".
//! - **[`ProxyConfigDocument`]** assembles the document, adding `xhttpSettings` for
//!   `type=xhttp` and `realitySettings` for `security=reality`.
//!
//! ## Conversion rules
//!
//! - **Scheme prefix**: must be exactly `vless://`; anything else is `InvalidScheme`.
//! - **Port**: defaults to 443 when missing or unparseable.
//! - **Query string**: parsed as `application/x-www-form-urlencoded`; names are case-sensitive,
//!   the first occurrence of a repeated name wins.
//! - **Validation**: none. UUIDs, hosts and unknown `type`/`security` values pass through.
//!
//! ## Example
//!
//! ```rust
//! use vless2xray::convert;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = convert("vless://abc-123@example.com:8443?type=xhttp&path=%2Fapi")?;
//! let stream = doc.outbounds[0].stream_settings.as_ref().unwrap();
//! assert_eq!(stream.network, "xhttp");
//! assert_eq!(stream.xhttp_settings.as_ref().unwrap().path, "/api");
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under the MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod config;
mod constants;
mod error;
mod query;
mod uri;


pub use config::{
    Inbound, InboundSettings, LogConfig, Outbound, OutboundSettings, ProxyConfigDocument,
    RealitySettings, Routing, RoutingRule, ServerEntry, StreamSettings, User, XhttpSettings,
};
pub use error::{ConvertError, Result};
pub use query::Query;
pub use uri::ParsedUri;

/// Convert a `vless://` link into a client configuration document
///
/// # Errors
///
/// Returns [`ConvertError::InvalidScheme`] if the link does not start with `vless://`.
/// No other input makes conversion fail.
///
/// # Example
///
/// ```rust
/// use vless2xray::{convert, ConvertError};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let doc = convert("vless://u@h")?;
/// assert_eq!(doc.outbounds[0].settings.as_ref().unwrap().vnext[0].port, 443);
///
/// assert!(matches!(convert("http://u@h"), Err(ConvertError::InvalidScheme(_))));
/// # Ok(())
/// # }
/// ```
pub fn convert(link: &str) -> Result<ProxyConfigDocument> {
    let uri = ParsedUri::parse(link)?;
    Ok(ProxyConfigDocument::from_uri(&uri))
}

/// Convert a link and render the document as JSON
///
/// `pretty` selects two-space indented output; otherwise the JSON is on one line.
/// Non-ASCII text is emitted as-is.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidScheme`] for a non-VLESS link, or
/// [`ConvertError::JsonError`] if rendering fails.
pub fn convert_to_json(link: &str, pretty: bool) -> Result<String> {
    let doc = convert(link)?;
    let json = if pretty {
        serde_json::to_string_pretty(&doc)?
    } else {
        serde_json::to_string(&doc)?
    };
    Ok(json)
}
