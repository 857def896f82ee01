//! Build-time deployment configuration.

/// Where the "Get Started" call to action sends the visitor.
///
/// Deployments override the placeholder by setting `PIXEL2TEST_APP_URL`
/// when building.
pub fn app_url() -> &'static str {
    match option_env!("PIXEL2TEST_APP_URL") {
        Some(url) => url,
        None => "https://app.pixel2test.ai",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_url_is_absolute() {
        assert!(app_url().starts_with("https://"));
    }
}
