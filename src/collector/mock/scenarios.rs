//! Pre-built mock platform scenarios for testing.
//!
//! These scenarios provide realistic host states for exercising the
//! sampler and panel rendering.

use crate::collector::traits::{CpuCounts, CpuInfo, HostInfo, PlatformError};

use super::platform::MockPlatform;

const GIB: u64 = 1024 * 1024 * 1024;

#[allow(dead_code)]
impl MockPlatform {
    /// Creates a typical Linux workstation.
    ///
    /// Includes: 4 physical / 8 logical CPUs, 16 GiB of memory, three real
    /// partitions plus a tmpfs, and a mix of CPU and non-CPU sensors.
    pub fn typical_system() -> Self {
        let mut platform = Self::new()
            .with_memory(16 * GIB, 6 * GIB)
            .with_cpu_usage(37.5, &[12.0, 55.0, 81.0, 3.5, 49.99, 50.0, 79.99, 80.0])
            .with_partition("/", "ext4", 512 * GIB, 200 * GIB)
            .with_partition("/home", "ext4", 1024 * GIB, 900 * GIB)
            .with_partition("/boot/efi", "vfat", GIB / 2, GIB / 16)
            .with_partition("/run", "tmpfs", 2 * GIB, GIB / 64)
            .with_sensor("coretemp Package id 0", 52.0)
            .with_sensor("coretemp Core 0", 49.5)
            .with_sensor("acpitz temp1", 27.8)
            .with_sensor("nvme Composite", 38.85);

        platform.cpu_counts = Ok(CpuCounts {
            physical: Some(4),
            logical: 8,
        });
        platform.cpu_info = Ok((0..8)
            .map(|_| CpuInfo {
                model: "Intel(R) Core(TM) i7-8565U CPU @ 1.80GHz".to_string(),
                frequency_mhz: 1992,
            })
            .collect());
        platform.host_info = Ok(HostInfo {
            platform: "ubuntu".to_string(),
            family: "Linux".to_string(),
            version: "24.04".to_string(),
            kernel_version: "6.8.0-45-generic".to_string(),
            kernel_arch: "x86_64".to_string(),
            hostname: "workstation".to_string(),
        });
        platform.uptime = Ok(93_784);
        platform
    }

    /// Creates a virtual machine without sensors whose CPU info is empty.
    pub fn bare_vm() -> Self {
        let mut platform = Self::new()
            .with_memory(2 * GIB, GIB / 2)
            .with_cpu_usage(5.0, &[5.0])
            .with_partition("/", "xfs", 20 * GIB, 4 * GIB);

        platform.cpu_counts = Ok(CpuCounts {
            physical: None,
            logical: 1,
        });
        platform.host_info = Ok(HostInfo {
            platform: "rocky".to_string(),
            family: "Linux".to_string(),
            version: "9.3".to_string(),
            kernel_version: "5.14.0-362.el9.x86_64".to_string(),
            kernel_arch: "x86_64".to_string(),
            hostname: "vm-01".to_string(),
        });
        platform.uptime = Ok(59);
        platform
    }

    /// Creates a host where every metric query fails.
    pub fn broken() -> Self {
        let mut platform = Self::new();
        platform.partitions = Err(PlatformError::Query("mount table unreadable".into()));
        platform.temperatures = Err(PlatformError::Unavailable("sensors"));
        platform.cpu_info = Err(PlatformError::Unavailable("cpu info"));
        platform
    }
}
