//! Abstraction over the host's metric sources to enable testing and mocking.
//!
//! The `Platform` trait allows the sampler to work with the real operating
//! system (via `sysinfo`) and with in-memory mock implementations in tests.
//! Every query returns its own `Result`, so one failing metric family never
//! hides the others.

use std::path::{Path, PathBuf};

/// Error type for platform query failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The platform does not report this metric (or reported nothing).
    Unavailable(&'static str),
    /// Partition disappeared between enumeration and usage query.
    PartitionGone(PathBuf),
    /// The backend reported a failure.
    Query(String),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformError::Unavailable(what) => write!(f, "{} unavailable", what),
            PlatformError::PartitionGone(path) => {
                write!(f, "partition {} disappeared", path.display())
            }
            PlatformError::Query(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

impl std::error::Error for PlatformError {}

/// Physical and logical CPU counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuCounts {
    /// Physical cores, if the platform can tell.
    pub physical: Option<usize>,
    /// Logical CPUs (hardware threads).
    pub logical: usize,
}

/// Static information about one logical CPU.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuInfo {
    /// Model name, e.g. "AMD Ryzen 7 5800X 8-Core Processor".
    pub model: String,
    /// Current frequency in MHz, 0 if unknown.
    pub frequency_mhz: u64,
}

/// CPU busy percentages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CpuUsage {
    /// Aggregate busy percentage across all CPUs.
    pub total: f64,
    /// Per-core busy percentages; index is the core id.
    pub per_core: Vec<f64>,
}

/// Virtual memory usage.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MemoryUsage {
    pub total: u64,
    pub used: u64,
    pub used_percent: f64,
}

impl MemoryUsage {
    pub fn new(total: u64, used: u64) -> Self {
        Self {
            total,
            used,
            used_percent: crate::fmt::percent_of(used, total),
        }
    }
}

/// A mounted partition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// Device name, e.g. "/dev/nvme0n1p2".
    pub device: String,
    pub mount_point: PathBuf,
    /// File system type, e.g. "ext4".
    pub file_system: String,
}

/// File system types that never back real storage.
const VIRTUAL_FILE_SYSTEMS: &[&str] = &[
    "autofs",
    "bpf",
    "cgroup",
    "cgroup2",
    "configfs",
    "debugfs",
    "devfs",
    "devpts",
    "devtmpfs",
    "efivarfs",
    "fusectl",
    "hugetlbfs",
    "mqueue",
    "nsfs",
    "proc",
    "pstore",
    "ramfs",
    "securityfs",
    "squashfs",
    "sysfs",
    "tmpfs",
    "tracefs",
];

impl Partition {
    pub fn new(device: &str, mount_point: impl AsRef<Path>, file_system: &str) -> Self {
        Self {
            device: device.to_string(),
            mount_point: mount_point.as_ref().to_path_buf(),
            file_system: file_system.to_string(),
        }
    }

    /// Whether the partition is a pseudo file system (tmpfs, proc, ...).
    pub fn is_virtual(&self) -> bool {
        VIRTUAL_FILE_SYSTEMS
            .iter()
            .any(|fs| self.file_system.eq_ignore_ascii_case(fs))
    }
}

/// Space usage of one mounted partition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiskUsage {
    pub path: PathBuf,
    pub total: u64,
    pub used: u64,
    pub used_percent: f64,
}

impl DiskUsage {
    pub fn new(path: impl AsRef<Path>, total: u64, used: u64) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            total,
            used,
            used_percent: crate::fmt::percent_of(used, total),
        }
    }
}

/// One temperature sensor reading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SensorReading {
    /// Sensor key, e.g. "coretemp Package id 0".
    pub label: String,
    /// Temperature in degrees Celsius.
    pub celsius: f64,
}

impl SensorReading {
    pub fn new(label: &str, celsius: f64) -> Self {
        Self {
            label: label.to_string(),
            celsius,
        }
    }
}

/// Static facts about the host and its operating system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostInfo {
    /// OS platform, e.g. "ubuntu", "macos", "Windows 11 Pro".
    pub platform: String,
    /// OS family, e.g. "Ubuntu", "Darwin".
    pub family: String,
    /// OS version, e.g. "24.04".
    pub version: String,
    pub kernel_version: String,
    /// Kernel architecture, e.g. "x86_64".
    pub kernel_arch: String,
    pub hostname: String,
}

/// Source of host metrics.
///
/// Implementations may block (CPU usage is measured over a window); the
/// sampler only ever calls them off the UI thread.
pub trait Platform: Send {
    /// Physical and logical CPU counts.
    fn cpu_counts(&mut self) -> Result<CpuCounts, PlatformError>;

    /// Static per-CPU records. May be empty.
    fn cpu_info(&mut self) -> Result<Vec<CpuInfo>, PlatformError>;

    /// Aggregate and per-core CPU busy percentages.
    fn cpu_usage(&mut self) -> Result<CpuUsage, PlatformError>;

    /// Virtual memory totals.
    fn memory(&mut self) -> Result<MemoryUsage, PlatformError>;

    /// Mounted partitions, in enumeration order.
    fn partitions(&mut self) -> Result<Vec<Partition>, PlatformError>;

    /// Space usage of one partition returned by [`Platform::partitions`].
    fn partition_usage(&mut self, partition: &Partition) -> Result<DiskUsage, PlatformError>;

    /// All temperature sensors the platform exposes.
    fn temperatures(&mut self) -> Result<Vec<SensorReading>, PlatformError>;

    /// Host and OS facts.
    fn host_info(&mut self) -> Result<HostInfo, PlatformError>;

    /// Seconds since boot.
    fn uptime(&mut self) -> Result<u64, PlatformError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_usage_percent() {
        let mem = MemoryUsage::new(8 * 1024, 2 * 1024);
        assert_eq!(mem.used_percent, 25.0);
        assert_eq!(MemoryUsage::new(0, 0).used_percent, 0.0);
    }

    #[test]
    fn test_disk_usage_percent() {
        let usage = DiskUsage::new("/", 200, 150);
        assert_eq!(usage.path, PathBuf::from("/"));
        assert_eq!(usage.used_percent, 75.0);
    }

    #[test]
    fn test_partition_is_virtual() {
        assert!(Partition::new("tmpfs", "/run", "tmpfs").is_virtual());
        assert!(Partition::new("proc", "/proc", "proc").is_virtual());
        assert!(Partition::new("sysfs", "/sys", "SYSFS").is_virtual());
        assert!(!Partition::new("/dev/sda1", "/", "ext4").is_virtual());
        assert!(!Partition::new("/dev/disk3s1", "/", "apfs").is_virtual());
    }

    #[test]
    fn test_platform_error_display() {
        assert_eq!(
            PlatformError::Unavailable("memory").to_string(),
            "memory unavailable"
        );
        assert_eq!(
            PlatformError::PartitionGone(PathBuf::from("/mnt/usb")).to_string(),
            "partition /mnt/usb disappeared"
        );
    }
}
