//! Xray client configuration document
//!
//! [`ProxyConfigDocument::from_uri`] maps a decomposed link onto a fixed document
//! shape: one SOCKS inbound on `127.0.0.1:10808`, the `proxy` outbound built from
//! the link, `direct` and `block` outbounds, and a single rule sending private
//! addresses to `direct`.
//!
//! ## Optional blocks
//!
//! | Block | Present when | Fields |
//! |-------|--------------|--------|
//! | `xhttpSettings` | `type=xhttp` | `path` (default `/`), `host` and `mode` only if their key is in the query |
//! | `realitySettings` | `security=reality` | `serverName` (`sni`, then `serverName`), `publicKey`, `shortId`, `spiderX`, `fingerprint` (default `chrome`), `mldsa65Verify` only if `pqv` is in the query |
//!
//! Any other `type` or `security` value is carried into `streamSettings` as-is
//! without a block. Unset blocks are omitted from the output, never `null`.

use crate::constants::{defaults, doc, key, trigger};
use crate::query::Query;
use crate::uri::ParsedUri;
use serde::{Deserialize, Serialize};

/// Complete client configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProxyConfigDocument {
    /// Core log settings
    pub log: LogConfig,
    /// Local listeners
    pub inbounds: Vec<Inbound>,
    /// Outbounds; the first is the proxy derived from the link
    pub outbounds: Vec<Outbound>,
    /// Routing table
    pub routing: Routing,
}

/// `log` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level of the proxy core
    pub loglevel: String,
}

/// Local inbound listener
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Inbound {
    /// Inbound tag
    pub tag: String,
    /// Listen address
    pub listen: String,
    /// Listen port
    pub port: u16,
    /// Inbound protocol
    pub protocol: String,
    /// Protocol settings
    pub settings: InboundSettings,
}

/// SOCKS inbound settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InboundSettings {
    /// Relay UDP
    pub udp: bool,
}

/// Outbound handler
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Outbound {
    /// Outbound tag
    pub tag: String,
    /// Outbound protocol
    pub protocol: String,
    /// Protocol settings (proxy outbound only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<OutboundSettings>,
    /// Transport settings (proxy outbound only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_settings: Option<StreamSettings>,
}

/// VLESS outbound settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutboundSettings {
    /// Upstream servers
    pub vnext: Vec<ServerEntry>,
}

/// One upstream server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerEntry {
    /// Server address
    pub address: String,
    /// Server port
    pub port: u32,
    /// Users on this server
    pub users: Vec<User>,
}

/// VLESS user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// User ID (UUID)
    pub id: String,
    /// VLESS encryption
    pub encryption: String,
    /// Flow control
    pub flow: String,
}

/// `streamSettings` of the proxy outbound
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StreamSettings {
    /// Transport name
    pub network: String,
    /// XHTTP transport block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xhttp_settings: Option<XhttpSettings>,
    /// Security layer name
    pub security: String,
    /// REALITY block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reality_settings: Option<RealitySettings>,
}

/// XHTTP transport settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct XhttpSettings {
    /// Request path
    pub path: String,
    /// Host override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// XHTTP mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

/// REALITY security settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RealitySettings {
    /// SNI
    pub server_name: String,
    /// Server public key
    pub public_key: String,
    /// Short ID
    pub short_id: String,
    /// Spider path
    pub spider_x: String,
    /// TLS client fingerprint
    pub fingerprint: String,
    /// ML-DSA-65 verification key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mldsa65_verify: Option<String>,
}

/// `routing` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Routing {
    /// Routing rules, evaluated in order
    pub rules: Vec<RoutingRule>,
}

/// Routing rule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoutingRule {
    /// Rule type
    pub r#type: String,
    /// Destination IP matchers
    pub ip: Vec<String>,
    /// Target outbound
    pub outbound_tag: String,
}

impl ProxyConfigDocument {
    /// Build the client configuration for a decomposed link
    ///
    /// Never fails: missing or malformed parameters resolve to defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vless2xray::{ParsedUri, ProxyConfigDocument};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let uri = ParsedUri::parse("vless://id@example.com:8443?security=reality&sni=a.com")?;
    /// let doc = ProxyConfigDocument::from_uri(&uri);
    /// let proxy = doc.proxy().expect("proxy outbound");
    /// let stream = proxy.stream_settings.as_ref().expect("stream settings");
    /// assert_eq!(stream.security, "reality");
    /// assert_eq!(stream.reality_settings.as_ref().unwrap().server_name, "a.com");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_uri(uri: &ParsedUri) -> Self {
        let q = &uri.query;

        let user = User {
            id: uri.credential.clone(),
            encryption: q.get_or(key::ENCRYPTION, defaults::ENCRYPTION),
            flow: q.get_or(key::FLOW, ""),
        };

        let proxy = Outbound {
            tag: doc::PROXY_TAG.to_string(),
            protocol: doc::PROXY_PROTOCOL.to_string(),
            settings: Some(OutboundSettings {
                vnext: vec![ServerEntry {
                    address: uri.host.clone(),
                    port: uri.port,
                    users: vec![user],
                }],
            }),
            stream_settings: Some(StreamSettings::from_query(q)),
        };

        ProxyConfigDocument {
            log: LogConfig {
                loglevel: doc::LOG_LEVEL.to_string(),
            },
            inbounds: vec![Inbound {
                tag: doc::INBOUND_TAG.to_string(),
                listen: doc::INBOUND_LISTEN.to_string(),
                port: doc::INBOUND_PORT,
                protocol: doc::INBOUND_PROTOCOL.to_string(),
                settings: InboundSettings { udp: true },
            }],
            outbounds: vec![
                proxy,
                Outbound::fixed(doc::DIRECT_TAG, doc::DIRECT_PROTOCOL),
                Outbound::fixed(doc::BLOCK_TAG, doc::BLOCK_PROTOCOL),
            ],
            routing: Routing {
                rules: vec![RoutingRule {
                    r#type: doc::RULE_TYPE.to_string(),
                    ip: vec![doc::PRIVATE_IP.to_string()],
                    outbound_tag: doc::DIRECT_TAG.to_string(),
                }],
            },
        }
    }

    /// The outbound tagged `proxy`
    pub fn proxy(&self) -> Option<&Outbound> {
        self.outbounds.iter().find(|o| o.tag == doc::PROXY_TAG)
    }
}

impl Outbound {
    fn fixed(tag: &str, protocol: &str) -> Self {
        Outbound {
            tag: tag.to_string(),
            protocol: protocol.to_string(),
            settings: None,
            stream_settings: None,
        }
    }
}

impl StreamSettings {
    /// Resolve transport and security, building a block only for `xhttp` / `reality`
    pub fn from_query(q: &Query) -> Self {
        let network = q.get_or(key::TYPE, defaults::NETWORK);
        let security = q.get_or(key::SECURITY, defaults::SECURITY);

        let xhttp_settings = (network == trigger::XHTTP).then(|| XhttpSettings::from_query(q));
        let reality_settings =
            (security == trigger::REALITY).then(|| RealitySettings::from_query(q));

        tracing::debug!(
            network = %network,
            security = %security,
            xhttp = xhttp_settings.is_some(),
            reality = reality_settings.is_some(),
            "resolved stream settings"
        );

        StreamSettings {
            network,
            xhttp_settings,
            security,
            reality_settings,
        }
    }
}

impl XhttpSettings {
    /// `path` always; `host` and `mode` only when the key is present, even if empty
    pub fn from_query(q: &Query) -> Self {
        XhttpSettings {
            path: q.get_or(key::PATH, defaults::XHTTP_PATH),
            host: q.first(key::HOST).map(str::to_string),
            mode: q.first(key::MODE).map(str::to_string),
        }
    }
}

impl RealitySettings {
    /// Key material from `sni`/`serverName`, `pbk`, `sid`, `spx`, `fp` and `pqv`
    pub fn from_query(q: &Query) -> Self {
        let server_name = q
            .first(key::SNI)
            .or_else(|| q.first(key::SERVER_NAME))
            .unwrap_or_default()
            .to_string();

        RealitySettings {
            server_name,
            public_key: q.get_or(key::PUBLIC_KEY, ""),
            short_id: q.get_or(key::SHORT_ID, ""),
            spider_x: q.get_or(key::SPIDER_X, ""),
            fingerprint: q.get_or(key::FINGERPRINT, defaults::FINGERPRINT),
            mldsa65_verify: q.first(key::MLDSA65_VERIFY).map(str::to_string),
        }
    }
}
