use std::collections::BTreeMap;

use anyhow::{anyhow, Result};

/// Parses a multi-line `key=value` block into a parameter map.
///
/// Lines without `=` are dropped, the split happens on the first `=` only and
/// both sides are trimmed. A later duplicate key wins.
pub fn decode(text: &str) -> BTreeMap<String, String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}

/// Renders a parameter map as one `key=value` per line.
pub fn encode(parameters: &BTreeMap<String, String>) -> String {
    parameters
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses a single `key=value` argument, as given on the command line.
pub fn parse_pair(arg: &str) -> Result<(String, String)> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| anyhow!("Invalid parameter '{}', expected key=value", arg))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(anyhow!("Invalid parameter '{}', key is empty", arg));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

/// Builds a parameter map from repeated `key=value` arguments.
pub fn collect_pairs(args: &[String]) -> Result<BTreeMap<String, String>> {
    let mut parameters = BTreeMap::new();
    for arg in args {
        let (key, value) = parse_pair(arg)?;
        parameters.insert(key, value);
    }
    Ok(parameters)
}
