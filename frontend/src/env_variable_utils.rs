use lazy_static::lazy_static;
use web_sys::window;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";

lazy_static! {
    pub static ref API_BASE_URL: String = get_api_base_url();
}

/// Looks `key` up in the `window.ENV_CONFIG` object that `index.html` injects.
pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;

    if !value.is_undefined() {
        value.as_string()
    } else {
        log::warn!("Environment variable '{}' is undefined", key);
        None
    }
}

pub fn get_api_base_url() -> String {
    normalize_base_url(get_env_var("API_BASE_URL").as_deref())
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| "YouTube Explorer".to_string())
}

pub fn is_debug_mode() -> bool {
    parse_flag(get_env_var("DEBUG_MODE").as_deref())
}

fn normalize_base_url(configured: Option<&str>) -> String {
    let url = configured
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL);
    url.trim_end_matches('/').to_string()
}

fn parse_flag(value: Option<&str>) -> bool {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_falls_back_to_default() {
        assert_eq!(normalize_base_url(None), DEFAULT_API_BASE_URL);
        assert_eq!(normalize_base_url(Some("  ")), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn base_url_loses_trailing_slashes() {
        assert_eq!(
            normalize_base_url(Some("https://api.example.com/v1//")),
            "https://api.example.com/v1"
        );
    }

    #[test]
    fn debug_flag_parsing() {
        assert!(parse_flag(Some("true")));
        assert!(!parse_flag(Some("false")));
        assert!(!parse_flag(Some("yes")));
        assert!(!parse_flag(None));
    }
}
