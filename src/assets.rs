use crate::config;

pub const PROJECT_CARD_PLACEHOLDER: &str = "/placeholder.svg?height=400&width=600";
pub const PROJECT_DETAIL_PLACEHOLDER: &str = "/placeholder.svg?height=800&width=1400";
pub const PORTRAIT_PLACEHOLDER: &str = "/placeholder.svg?height=600&width=600";

/// Maps an image reference from the content to the URL it is served at.
pub fn resolve_asset(reference: &str, fallback: &str) -> String {
    resolve_asset_with_base(config::base_path(), reference, fallback)
}

pub fn resolve_asset_with_base(base: &str, reference: &str, fallback: &str) -> String {
    let reference = reference.trim();
    if reference.is_empty() {
        return config::with_base(base, fallback);
    }
    if reference.starts_with("http://") || reference.starts_with("https://") {
        return reference.to_string();
    }
    // files under public/ are copied to the site root
    let path = reference.trim_start_matches("./");
    let path = path.strip_prefix("public/").unwrap_or(path);
    config::with_base(base, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_prefix_is_stripped() {
        assert_eq!(
            resolve_asset_with_base("", "public/Harsha_Madhushan.png", PORTRAIT_PLACEHOLDER),
            "/Harsha_Madhushan.png"
        );
        assert_eq!(
            resolve_asset_with_base("", "./public/me.png", PORTRAIT_PLACEHOLDER),
            "/me.png"
        );
    }

    #[test]
    fn test_fallback() {
        assert_eq!(
            resolve_asset_with_base("", "", PROJECT_CARD_PLACEHOLDER),
            PROJECT_CARD_PLACEHOLDER
        );
        assert_eq!(
            resolve_asset_with_base("/site", "  ", PROJECT_DETAIL_PLACEHOLDER),
            "/site/placeholder.svg?height=800&width=1400"
        );
    }

    #[test]
    fn test_base_path_and_passthrough() {
        assert_eq!(
            resolve_asset_with_base("/site", "/analytics-dashboard.png", PROJECT_CARD_PLACEHOLDER),
            "/site/analytics-dashboard.png"
        );
        assert_eq!(
            resolve_asset_with_base("/site", "https://cdn.example.com/a.png", PORTRAIT_PLACEHOLDER),
            "https://cdn.example.com/a.png"
        );
    }
}
