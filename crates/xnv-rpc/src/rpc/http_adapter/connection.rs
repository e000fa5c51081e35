use reqwest::Url;

use crate::config::ClientConfig;
use crate::error::RpcError;

/// Validate the configured host/port/scheme and return the base URL.
pub(super) fn resolve_base_url(config: &ClientConfig) -> Result<String, RpcError> {
    if config.host().trim().is_empty() {
        return Err(RpcError::InvalidConfig("host must not be empty".to_owned()));
    }

    let base_url = config.base_url();
    let parsed = Url::parse(&base_url)
        .map_err(|e| RpcError::InvalidConfig(format!("invalid base url `{base_url}`: {e}")))?;
    if parsed.path() != "/" || parsed.query().is_some() {
        return Err(RpcError::InvalidConfig(format!(
            "host `{}` must not carry a path or query",
            config.host()
        )));
    }

    Ok(base_url)
}

/// Join a path or endpoint name onto the base URL.
pub(super) fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{base_url}/{}", path.trim_start_matches('/'))
}
