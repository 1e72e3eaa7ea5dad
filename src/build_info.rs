//! Build-time information captured by the `vergen` build script

/// Build timestamp (when the binary was compiled)
pub const BUILD_TIMESTAMP: &str = env!("VERGEN_BUILD_TIMESTAMP");

/// Cargo optimization level (0, 1, 2, 3, s, z)
pub const CARGO_OPT_LEVEL: &str = env!("VERGEN_CARGO_OPT_LEVEL");

/// Target triple (e.g., x86_64-unknown-linux-gnu)
pub const CARGO_TARGET_TRIPLE: &str = env!("VERGEN_CARGO_TARGET_TRIPLE");

/// Rust compiler version (e.g., 1.85.0)
pub const RUSTC_SEMVER: &str = env!("VERGEN_RUSTC_SEMVER");

/// Rust channel (stable, beta, or nightly)
pub const RUSTC_CHANNEL: &str = env!("VERGEN_RUSTC_CHANNEL");

/// Crate version from Cargo.toml
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// `{version} ({target}-opt{level})`
pub fn version_string() -> String {
    format!("{PKG_VERSION} ({CARGO_TARGET_TRIPLE}-opt{CARGO_OPT_LEVEL})")
}

/// One line per build fact, for logs and the health report
pub fn detailed_info() -> Vec<String> {
    vec![
        format!("Version: {PKG_VERSION}"),
        format!("Built: {BUILD_TIMESTAMP}"),
        format!("Target: {CARGO_TARGET_TRIPLE}"),
        format!("Optimization: {CARGO_OPT_LEVEL}"),
        format!("Rustc: {RUSTC_SEMVER} ({RUSTC_CHANNEL})"),
    ]
}
