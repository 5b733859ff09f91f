//! Shared constants: scheme prefix, query keys, defaults and the fixed
//! parts of the generated document.

/// Link scheme prefix (matched case-sensitively).
pub const SCHEME: &str = "vless://";

/// Port used when the link has none, or one that does not parse.
pub const DEFAULT_PORT: u32 = 443;

/// Query parameter names read from the link.
pub mod key {
    /// Transport (`tcp`, `xhttp`, ...)
    pub const TYPE: &str = "type";
    /// Security layer (`none`, `reality`, ...)
    pub const SECURITY: &str = "security";
    /// XHTTP path
    pub const PATH: &str = "path";
    /// XHTTP host override
    pub const HOST: &str = "host";
    /// XHTTP mode
    pub const MODE: &str = "mode";
    /// REALITY server name, preferred spelling
    pub const SNI: &str = "sni";
    /// REALITY server name, fallback spelling
    pub const SERVER_NAME: &str = "serverName";
    /// REALITY public key
    pub const PUBLIC_KEY: &str = "pbk";
    /// REALITY short ID
    pub const SHORT_ID: &str = "sid";
    /// REALITY spider path
    pub const SPIDER_X: &str = "spx";
    /// TLS client fingerprint
    pub const FINGERPRINT: &str = "fp";
    /// ML-DSA-65 verification key
    pub const MLDSA65_VERIFY: &str = "pqv";
    /// VLESS encryption
    pub const ENCRYPTION: &str = "encryption";
    /// VLESS flow
    pub const FLOW: &str = "flow";
}

/// Defaults substituted for missing query parameters.
pub mod defaults {
    pub const NETWORK: &str = "tcp";
    pub const SECURITY: &str = "none";
    pub const XHTTP_PATH: &str = "/";
    pub const FINGERPRINT: &str = "chrome";
    pub const ENCRYPTION: &str = "none";
}

/// Values that trigger an optional block.
pub mod trigger {
    /// `type` value that adds `xhttpSettings`
    pub const XHTTP: &str = "xhttp";
    /// `security` value that adds `realitySettings`
    pub const REALITY: &str = "reality";
}

/// Fixed parts of the generated document.
pub mod doc {
    pub const LOG_LEVEL: &str = "warning";

    pub const INBOUND_TAG: &str = "socks-in";
    pub const INBOUND_LISTEN: &str = "127.0.0.1";
    pub const INBOUND_PORT: u16 = 10808;
    pub const INBOUND_PROTOCOL: &str = "socks";

    pub const PROXY_TAG: &str = "proxy";
    pub const PROXY_PROTOCOL: &str = "vless";
    pub const DIRECT_TAG: &str = "direct";
    pub const DIRECT_PROTOCOL: &str = "freedom";
    pub const BLOCK_TAG: &str = "block";
    pub const BLOCK_PROTOCOL: &str = "blackhole";

    pub const RULE_TYPE: &str = "field";
    pub const PRIVATE_IP: &str = "geoip:private";
}

/// Common error message fragments.
pub mod error_msg {
    /// Link must start with scheme (placeholder: use with format!).
    pub const MUST_START_WITH: &str = "Link must start with";
}
