//! Build script for the Health Metrics Engine
//!
//! Embeds the compile timestamp; the engine keeps no state on disk.

fn main() {
    println!("cargo:rerun-if-changed=src");

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    println!("cargo:rustc-env=HM_BUILD_TIMESTAMP={}", timestamp);
}
