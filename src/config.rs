//! Build-time site settings, forwarded by `build.rs`.
//!
//! Server settings (address, site root, reload port) live in `[package.metadata.leptos]`
//! and are read through `leptos::config::get_configuration`.

pub const BUILD_TIME: &str = env!("BUILD_TIME");
pub const BUILD_YEAR: &str = env!("BUILD_YEAR");

/// Subpath the exported site is served under. Empty when hosted at the domain root.
pub const BASE_PATH: &str = env!("PORTFOLIO_BASE_PATH");

pub fn base_path() -> &'static str {
    normalize_base(BASE_PATH)
}

/// Strips trailing slashes and guarantees a leading one, `""` for the root.
pub fn normalize_base(base: &str) -> &str {
    let base = base.trim_end_matches('/');
    if base.is_empty() || !base.starts_with('/') {
        // a relative or empty base is treated as the root
        ""
    } else {
        base
    }
}

/// Prefixes an absolute site path with `base`.
pub fn with_base(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Stylesheet emitted by cargo-leptos, under the same `{base}/{pkg_dir}` root the
/// hydration scripts are loaded from.
pub fn stylesheet_href(base: &str, pkg_dir: &str, output_name: &str) -> String {
    with_base(base, &format!("{}/{output_name}.css", pkg_dir.trim_matches('/')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(""), "");
        assert_eq!(normalize_base("/"), "");
        assert_eq!(normalize_base("/portfolio/"), "/portfolio");
        assert_eq!(normalize_base("/portfolio"), "/portfolio");
        assert_eq!(normalize_base("portfolio"), "");
    }

    #[test]
    fn test_with_base() {
        assert_eq!(with_base("", "/"), "/");
        assert_eq!(with_base("", "/projects/x"), "/projects/x");
        assert_eq!(with_base("/portfolio", "/projects/x"), "/portfolio/projects/x");
        assert_eq!(with_base("/portfolio", "img.png"), "/portfolio/img.png");
    }

    #[test]
    fn test_stylesheet_href() {
        assert_eq!(stylesheet_href("", "pkg", "portfolio-site"), "/pkg/portfolio-site.css");
        assert_eq!(
            stylesheet_href(normalize_base("/portfolio/"), "/pkg/", "portfolio-site"),
            "/portfolio/pkg/portfolio-site.css"
        );
    }

    #[test]
    fn test_build_year() {
        let year: u32 = BUILD_YEAR.parse().expect("build year should be numeric");
        assert!(year >= 2024);
        assert!(BUILD_TIME.starts_with(BUILD_YEAR));
    }
}
