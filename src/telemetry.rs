//! Log setup for the couplet service.
//!
//! LOG_LEVEL takes `EnvFilter` directives; LOG_FORMAT=json switches to one JSON
//! object per line. Lifecycle events log under the "ghalibify" target, lookups
//! and model attempts under "couplet".

use tracing_subscriber::EnvFilter;

/// Used when LOG_LEVEL is unset or does not parse.
const DEFAULT_FILTER: &str = "info,couplet=debug,ghalibify=debug,tower_http=info,axum=info";

fn log_filter() -> EnvFilter {
    EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn json_requested(format: Option<&str>) -> bool {
    format.map_or(false, |f| f.trim().eq_ignore_ascii_case("json"))
}

pub fn init_tracing() {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    if json_requested(std::env::var("LOG_FORMAT").ok().as_deref()) {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_valid() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn only_json_selects_structured_output() {
        assert!(json_requested(Some("json")));
        assert!(json_requested(Some(" JSON ")));
        assert!(!json_requested(Some("pretty")));
        assert!(!json_requested(None));
    }
}
