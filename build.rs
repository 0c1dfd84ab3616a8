use chrono::Datelike;

fn main() {
    // Capture the current timestamp as the build time
    let now = chrono::Utc::now();
    println!("cargo:rustc-env=BUILD_TIME={}", now.to_rfc3339());
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    // Optional subpath the static export is hosted under, e.g. "/portfolio"
    let base_path = std::env::var("PORTFOLIO_BASE_PATH").unwrap_or_default();
    println!("cargo:rustc-env=PORTFOLIO_BASE_PATH={}", base_path);

    println!("cargo:rerun-if-env-changed=PORTFOLIO_BASE_PATH");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
}
