//! Static host facts collected once at startup.
//!
//! Includes the ASCII logo of the running OS, looked up among the logos
//! embedded from `assets/logos/`.

use rust_embed::Embed;
use tracing::{debug, info};

use crate::collector::{HostInfo, Platform};
use crate::fmt::capitalize;

/// First Windows build number that ships as Windows 11.
const WINDOWS_11_BUILD: u32 = 22000;

#[derive(Embed)]
#[folder = "assets/logos/"]
struct Logos;

/// Host and OS facts shared read-only by every tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostSnapshot {
    /// OS platform with its first character upper-cased, e.g. "Ubuntu".
    pub os_name: String,
    pub os_family: String,
    pub os_version: String,
    pub kernel_version: String,
    pub kernel_arch: String,
    pub hostname: String,
    pub physical_cores: Option<usize>,
    pub logical_cores: Option<usize>,
    pub cpu_model: Option<String>,
    pub cpu_frequency_mhz: Option<u64>,
    /// Key the logo was looked up by, e.g. "windows11".
    pub logo_key: String,
    /// Logo text, empty when no asset matches.
    pub logo: String,
}

impl HostSnapshot {
    /// Queries the platform once. Failed queries leave their fields empty.
    pub fn collect(platform: &mut impl Platform) -> Self {
        let host = platform.host_info().unwrap_or_else(|e| {
            debug!("Host info unavailable: {}", e);
            HostInfo::default()
        });

        let counts = platform.cpu_counts().map(Some).unwrap_or_else(|e| {
            debug!("CPU count unavailable: {}", e);
            None
        });

        // Any record will do; only the first is read and the list may be empty.
        let first_cpu = match platform.cpu_info() {
            Ok(infos) => infos.into_iter().next(),
            Err(e) => {
                debug!("CPU info unavailable: {}", e);
                None
            }
        };

        let logo_key = logo_key(&host.platform, &host.family, &host.version);
        let logo = load_logo(&logo_key);

        let snapshot = Self {
            os_name: capitalize(&host.platform),
            os_family: host.family,
            os_version: host.version,
            kernel_version: host.kernel_version,
            kernel_arch: host.kernel_arch,
            hostname: host.hostname,
            physical_cores: counts.and_then(|c| c.physical),
            logical_cores: counts.map(|c| c.logical),
            cpu_model: first_cpu
                .as_ref()
                .map(|cpu| cpu.model.clone())
                .filter(|model| !model.is_empty()),
            cpu_frequency_mhz: first_cpu
                .map(|cpu| cpu.frequency_mhz)
                .filter(|&mhz| mhz > 0),
            logo_key,
            logo,
        };

        info!(
            "Host snapshot: {} {} ({}), logo '{}'{}",
            snapshot.os_name,
            snapshot.os_version,
            snapshot.hostname,
            snapshot.logo_key,
            if snapshot.logo.is_empty() {
                " not found"
            } else {
                ""
            }
        );
        snapshot
    }

    /// Logo split into lines, without trailing blank lines.
    pub fn logo_lines(&self) -> impl Iterator<Item = &str> {
        self.logo.trim_end().lines()
    }
}

/// Normalized OS identifier used to pick a logo.
pub fn logo_key(platform: &str, family: &str, version: &str) -> String {
    if platform.contains("Windows 11") {
        return "windows11".to_string();
    }
    // Windows 11 still reports itself as "Windows 10" in many product names.
    if platform.to_ascii_lowercase().contains("windows") {
        return match windows_build(version) {
            Some(build) if build >= WINDOWS_11_BUILD => "windows11",
            _ => "windows10",
        }
        .to_string();
    }
    if platform.to_ascii_lowercase().contains("macos") || family == "Darwin" {
        return "macos".to_string();
    }
    if version.contains("kali") {
        return "kali".to_string();
    }
    platform.to_lowercase()
}

/// Build number in a Windows version string ("10.0.22631", "11 (22631)").
fn windows_build(version: &str) -> Option<u32> {
    version
        .split(|c: char| !c.is_ascii_digit())
        .rfind(|part| !part.is_empty())
        .and_then(|part| part.parse().ok())
}

/// Embedded logo for `key`, empty if none matches.
fn load_logo(key: &str) -> String {
    if key.is_empty() {
        return String::new();
    }
    Logos::get(&format!("{}.ascii", key))
        .map(|file| String::from_utf8_lossy(&file.data).into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::{CpuInfo, MockPlatform, PlatformError};

    #[test]
    fn test_logo_key_windows() {
        assert_eq!(
            logo_key("Windows 11 Pro", "Windows", "11 (22631)"),
            "windows11"
        );
        assert_eq!(
            logo_key("Microsoft Windows 10 Pro", "Windows", "10.0.19045"),
            "windows10"
        );
        assert_eq!(
            logo_key("Microsoft Windows 10 Pro", "Windows", "10.0.22631"),
            "windows11"
        );
        assert_eq!(logo_key("windows", "Windows", ""), "windows10");
    }

    #[test]
    fn test_logo_key_macos() {
        assert_eq!(logo_key("macOS", "", "14.5"), "macos");
        assert_eq!(logo_key("darwin", "Darwin", "23.5.0"), "macos");
    }

    #[test]
    fn test_logo_key_kali_and_fallback() {
        assert_eq!(logo_key("debian", "Linux", "2024.2-kali"), "kali");
        assert_eq!(logo_key("Fedora", "Linux", "40"), "fedora");
        assert_eq!(logo_key("", "", ""), "");
    }

    #[test]
    fn test_windows_build() {
        assert_eq!(windows_build("10.0.22631"), Some(22631));
        assert_eq!(windows_build("11 (22631)"), Some(22631));
        assert_eq!(windows_build("unknown"), None);
    }

    #[test]
    fn test_missing_logo_is_empty() {
        assert!(load_logo("plan9").is_empty());
        assert!(load_logo("").is_empty());
        assert!(!load_logo("ubuntu").is_empty());
    }

    #[test]
    fn test_collect_typical_system() {
        let mut platform = MockPlatform::typical_system();
        let host = HostSnapshot::collect(&mut platform);

        assert_eq!(host.os_name, "Ubuntu");
        assert_eq!(host.kernel_arch, "x86_64");
        assert_eq!(host.physical_cores, Some(4));
        assert_eq!(host.logical_cores, Some(8));
        assert_eq!(
            host.cpu_model.as_deref(),
            Some("Intel(R) Core(TM) i7-8565U CPU @ 1.80GHz")
        );
        assert_eq!(host.cpu_frequency_mhz, Some(1992));
        assert_eq!(host.logo_key, "ubuntu");
        assert!(host.logo_lines().count() > 0);
    }

    #[test]
    fn test_collect_empty_cpu_info() {
        let mut platform = MockPlatform::bare_vm();
        let host = HostSnapshot::collect(&mut platform);

        assert_eq!(host.cpu_model, None);
        assert_eq!(host.cpu_frequency_mhz, None);
        assert_eq!(host.physical_cores, None);
        assert_eq!(host.logical_cores, Some(1));
        assert_eq!(host.logo_key, "rocky");
        assert!(host.logo.is_empty());
    }

    #[test]
    fn test_collect_zero_frequency_omitted() {
        let mut platform = MockPlatform::typical_system();
        platform.cpu_info = Ok(vec![CpuInfo {
            model: "ARMv8".to_string(),
            frequency_mhz: 0,
        }]);
        let host = HostSnapshot::collect(&mut platform);
        assert_eq!(host.cpu_model.as_deref(), Some("ARMv8"));
        assert_eq!(host.cpu_frequency_mhz, None);
    }

    #[test]
    fn test_collect_all_failing() {
        let mut platform = MockPlatform::broken();
        platform.cpu_counts = Err(PlatformError::Unavailable("cpu count"));
        let host = HostSnapshot::collect(&mut platform);

        assert_eq!(host.os_name, "");
        assert_eq!(host.logical_cores, None);
        assert_eq!(host.cpu_model, None);
        assert!(host.logo.is_empty());
    }
}
