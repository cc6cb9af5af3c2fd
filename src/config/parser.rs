use crate::config::models::Config;
use crate::error::ServerError;
use std::fs;
use std::io::ErrorKind;
use tracing::warn;

/// Read the flat `key: value` config file. A missing file is not an error:
/// the server falls back to the defaults (port 8080). Any other read failure
/// is fatal at startup.
pub fn parse_config(path: &str) -> Result<Config, ServerError> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("{path} not found, using default configuration");
            return Ok(Config::default());
        }
        Err(e) => return Err(ServerError::Config(format!("{path}: {e}"))),
    };

    let mut config = Config::default();

    for raw_line in content.lines() {
        let trimmed = raw_line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (key, value) = split_kv(trimmed);
        apply_field(&mut config, key, value);
    }

    Ok(config)
}

fn apply_field(config: &mut Config, key: &str, value: &str) {
    match key {
        "host" => {
            config.host = value.to_string();
        }
        "port" => {
            config.port = value.parse::<u16>().unwrap_or(8080);
        }
        "timeout_seconds" => {
            config.timeout_seconds = value.parse::<u64>().unwrap_or(30);
        }
        "max_request_size" => {
            config.max_request_size = value.parse::<usize>().unwrap_or(1024 * 1024);
        }
        _ => {}
    }
}

fn split_kv(line: &str) -> (&str, &str) {
    if let Some((k, v)) = line.split_once(':') {
        (k.trim(), v.trim().trim_matches('"').trim_matches('\''))
    } else {
        (line.trim(), "")
    }
}
