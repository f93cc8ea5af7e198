/// Address used when nothing else is configured.
pub const DEFAULT_BASE_ADDRESS: &str = "http://127.0.0.1:8090";

/// Prepends `http://` unless the address already carries an http(s) scheme.
///
/// No other checks happen here; a bad host or port only shows up when a
/// request fails.
pub fn normalize_base_address(address: &str) -> String {
    if address.starts_with("http://") || address.starts_with("https://") {
        address.to_string()
    } else {
        format!("http://{}", address)
    }
}

/// Joins the base address and an endpoint path by plain concatenation.
pub fn join_endpoint(base_address: &str, endpoint: &str) -> String {
    format!("{}{}", base_address, endpoint)
}
