//! Connection details for a z/OSMF host.
//!
//! The rename operations pass a [`Session`] straight through to the
//! transport and never look inside it.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    #[default]
    Https,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Http => f.write_str("http"),
            Protocol::Https => f.write_str("https"),
        }
    }
}

impl FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            other => Err(format!("unsupported protocol: {}", other)),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub hostname: String,
    pub port: u16,
    pub protocol: Protocol,
    pub user: Option<String>,
    pub password: Option<String>,
    /// Prefix inserted before every resource path, e.g. an API mediation layer route.
    pub base_path: Option<String>,
    pub reject_unauthorized: bool,
}

impl Session {
    pub fn new(hostname: impl Into<String>, port: u16) -> Self {
        Self {
            hostname: hostname.into(),
            port,
            protocol: Protocol::default(),
            user: None,
            password: None,
            base_path: None,
            reject_unauthorized: true,
        }
    }

    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    pub fn with_basic_auth(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    pub fn with_reject_unauthorized(mut self, reject: bool) -> Self {
        self.reject_unauthorized = reject;
        self
    }

    /// `protocol://host:port[/base_path]` with no trailing slash.
    pub fn base_url(&self) -> String {
        let mut url = format!("{}://{}:{}", self.protocol, self.hostname, self.port);
        if let Some(base) = self.base_path.as_deref() {
            let base = base.trim_matches('/');
            if !base.is_empty() {
                url.push('/');
                url.push_str(base);
            }
        }
        url
    }
}

// SECURITY: never print the password
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("hostname", &self.hostname)
            .field("port", &self.port)
            .field("protocol", &self.protocol)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("base_path", &self.base_path)
            .field("reject_unauthorized", &self.reject_unauthorized)
            .finish()
    }
}
