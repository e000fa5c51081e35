//! Client construction parameters.
//!
//! A [`ClientConfig`] is built once and then handed to a client constructor.
//! It has no setters after construction; the `with_*` methods consume and
//! return the value.

use std::time::Duration;

use crate::error::RpcError;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_DAEMON_PORT: u16 = 17566;
pub const DEFAULT_TIMEOUT_SECS: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    host: String,
    port: u16,
    tls: bool,
    timeout: Option<Duration>,
    auth: Option<(String, String)>,
}

impl ClientConfig {
    /// Daemon defaults: `localhost:17566`, plain HTTP, 10 second timeout.
    pub fn daemon() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_DAEMON_PORT)
    }

    /// The wallet service has no conventional port, so it must be given.
    pub fn wallet(port: u16) -> Self {
        Self::new(DEFAULT_HOST, port)
    }

    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            tls: false,
            timeout: Some(Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS)),
            auth: None,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_tls(mut self, tls: bool) -> Self {
        self.tls = tls;
        self
    }

    /// A zero duration disables the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = (!timeout.is_zero()).then_some(timeout);
        self
    }

    /// Set the timeout from fractional seconds; `0` disables it. Rejects
    /// negative, NaN and infinite values.
    pub fn with_timeout_secs(self, secs: f64) -> Result<Self, RpcError> {
        let timeout = Duration::try_from_secs_f64(secs)
            .map_err(|e| RpcError::InvalidConfig(format!("timeout `{secs}`: {e}")))?;
        Ok(self.with_timeout(timeout))
    }

    /// HTTP basic auth credentials, sent with every request. An empty
    /// username or password clears them instead.
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let (username, password) = (username.into(), password.into());
        self.auth = if username.is_empty() || password.is_empty() {
            None
        } else {
            Some((username, password))
        };
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn tls(&self) -> bool {
        self.tls
    }

    /// `None` when requests may wait indefinitely.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn auth(&self) -> Option<(&str, &str)> {
        self.auth.as_ref().map(|(u, p)| (u.as_str(), p.as_str()))
    }

    pub fn scheme(&self) -> &'static str {
        if self.tls {
            "https"
        } else {
            "http"
        }
    }

    /// `{scheme}://{host}:{port}`, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme(), self.host, self.port)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::daemon()
    }
}
