//! Build metadata reported by the CLI

use serde::Serialize;

/// Compile time in ISO 8601, set by build.rs
pub const BUILD_TIMESTAMP: &str = match option_env!("HM_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

/// Identifies which engine build produced a response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub built_at: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            built_at: BUILD_TIMESTAMP,
        }
    }

    /// One-line identification, e.g. `healthmetrics 1.0.0 (built 2024-05-01T10:00:00Z)`
    pub fn summary(&self) -> String {
        format!("{} {} (built {})", self.name, self.version, self.built_at)
    }
}

/// Announce the engine build on stderr
pub fn print_startup_banner() {
    eprintln!("Health Metrics Engine: {}", BuildInfo::current().summary());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_current() {
        let info = BuildInfo::current();
        assert_eq!(info.name, "healthmetrics");
        assert!(!info.version.is_empty());
        assert!(!info.built_at.is_empty());
    }

    #[test]
    fn test_summary_names_version() {
        let info = BuildInfo {
            name: "healthmetrics",
            version: "1.0.0",
            built_at: "2024-05-01T10:00:00Z",
        };
        assert_eq!(info.summary(), "healthmetrics 1.0.0 (built 2024-05-01T10:00:00Z)");
    }
}
