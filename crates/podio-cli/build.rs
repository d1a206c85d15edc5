//! Embeds a version string for `podio --version`.
//!
//! Uses `git describe` when building from a checkout and falls back to the
//! package version otherwise (e.g. when built from a published crate).

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs/tags");
    println!("cargo:rerun-if-env-changed=PODIO_CLI_VERSION_OVERRIDE");

    let version = std::env::var("PODIO_CLI_VERSION_OVERRIDE")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(describe)
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=PODIO_CLI_VERSION={}", version);
}

fn describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|o| o.status.success())?;

    let described = String::from_utf8(output.stdout).ok()?;
    let described = described.trim();
    let described = described.strip_prefix('v').unwrap_or(described);

    (!described.is_empty()).then(|| described.to_string())
}
