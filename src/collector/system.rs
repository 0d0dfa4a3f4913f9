//! `sysinfo`-backed implementation of [`Platform`].

use std::thread;
use std::time::Instant;

use sysinfo::{
    Components, CpuRefreshKind, Disks, MINIMUM_CPU_UPDATE_INTERVAL, MemoryRefreshKind,
    RefreshKind, System,
};

use super::traits::{
    CpuCounts, CpuInfo, CpuUsage, DiskUsage, HostInfo, MemoryUsage, Partition, Platform,
    PlatformError, SensorReading,
};

/// Reads metrics from the running operating system.
///
/// CPU usage is the busy share since the previous `cpu_usage` call (or since
/// construction for the first one). Two refreshes closer together than
/// `sysinfo::MINIMUM_CPU_UPDATE_INTERVAL` are meaningless, so `cpu_usage`
/// sleeps for the remainder when called too early.
///
/// Sensors are enumerated on first use and only re-enumerated when none
/// were found; later calls just re-read the known ones.
pub struct SystemPlatform {
    system: System,
    disks: Disks,
    components: Components,
    last_cpu_refresh: Instant,
}

impl SystemPlatform {
    /// Creates a platform with CPU and memory counters primed.
    pub fn new() -> Self {
        let system = System::new_with_specifics(
            RefreshKind::nothing()
                .with_cpu(CpuRefreshKind::everything())
                .with_memory(MemoryRefreshKind::everything()),
        );
        Self {
            system,
            disks: Disks::new(),
            components: Components::new(),
            last_cpu_refresh: Instant::now(),
        }
    }
}

impl Default for SystemPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for SystemPlatform {
    fn cpu_counts(&mut self) -> Result<CpuCounts, PlatformError> {
        let logical = self.system.cpus().len();
        if logical == 0 {
            return Err(PlatformError::Unavailable("cpu count"));
        }
        Ok(CpuCounts {
            physical: System::physical_core_count(),
            logical,
        })
    }

    fn cpu_info(&mut self) -> Result<Vec<CpuInfo>, PlatformError> {
        self.system.refresh_cpu_frequency();
        Ok(self
            .system
            .cpus()
            .iter()
            .map(|cpu| CpuInfo {
                model: cpu.brand().trim().to_string(),
                frequency_mhz: cpu.frequency(),
            })
            .collect())
    }

    fn cpu_usage(&mut self) -> Result<CpuUsage, PlatformError> {
        let since = self.last_cpu_refresh.elapsed();
        if since < MINIMUM_CPU_UPDATE_INTERVAL {
            thread::sleep(MINIMUM_CPU_UPDATE_INTERVAL - since);
        }
        self.system.refresh_cpu_usage();
        self.last_cpu_refresh = Instant::now();

        let cpus = self.system.cpus();
        if cpus.is_empty() {
            return Err(PlatformError::Unavailable("cpu usage"));
        }
        Ok(CpuUsage {
            total: f64::from(self.system.global_cpu_usage()),
            per_core: cpus.iter().map(|c| f64::from(c.cpu_usage())).collect(),
        })
    }

    fn memory(&mut self) -> Result<MemoryUsage, PlatformError> {
        self.system.refresh_memory();
        let total = self.system.total_memory();
        if total == 0 {
            return Err(PlatformError::Unavailable("memory"));
        }
        Ok(MemoryUsage::new(total, self.system.used_memory()))
    }

    fn partitions(&mut self) -> Result<Vec<Partition>, PlatformError> {
        self.disks = Disks::new_with_refreshed_list();
        Ok(self
            .disks
            .list()
            .iter()
            .map(|disk| {
                Partition::new(
                    &disk.name().to_string_lossy(),
                    disk.mount_point(),
                    &disk.file_system().to_string_lossy(),
                )
            })
            .collect())
    }

    fn partition_usage(&mut self, partition: &Partition) -> Result<DiskUsage, PlatformError> {
        let mount = &partition.mount_point;
        let disk = self
            .disks
            .list()
            .iter()
            .find(|d| d.mount_point() == mount)
            .ok_or_else(|| PlatformError::PartitionGone(mount.clone()))?;

        let total = disk.total_space();
        if total == 0 {
            return Err(PlatformError::Query(format!(
                "{} reports zero capacity",
                partition.mount_point.display()
            )));
        }
        let used = total.saturating_sub(disk.available_space());
        Ok(DiskUsage::new(&partition.mount_point, total, used))
    }

    fn temperatures(&mut self) -> Result<Vec<SensorReading>, PlatformError> {
        if self.components.list().is_empty() {
            self.components.refresh(true);
        } else {
            for component in self.components.list_mut() {
                component.refresh();
            }
        }
        Ok(self
            .components
            .list()
            .iter()
            .filter_map(|c| {
                c.temperature()
                    .map(|t| SensorReading::new(c.label(), f64::from(t)))
            })
            .collect())
    }

    fn host_info(&mut self) -> Result<HostInfo, PlatformError> {
        // Windows has no distribution id; its long version carries the
        // "Windows 10"/"Windows 11" marker used for logo selection.
        let platform = if cfg!(target_os = "windows") {
            System::long_os_version().unwrap_or_else(|| "windows".to_string())
        } else {
            System::distribution_id()
        };
        Ok(HostInfo {
            platform,
            family: System::name().unwrap_or_default(),
            version: System::os_version().unwrap_or_default(),
            kernel_version: System::kernel_version().unwrap_or_default(),
            kernel_arch: System::cpu_arch(),
            hostname: System::host_name().unwrap_or_default(),
        })
    }

    fn uptime(&mut self) -> Result<u64, PlatformError> {
        Ok(System::uptime())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_platform_reports_host() {
        let mut platform = SystemPlatform::new();

        let host = platform.host_info().unwrap();
        assert!(!host.kernel_arch.is_empty());

        let memory = platform.memory().unwrap();
        assert!(memory.total > 0);
        assert!(memory.used <= memory.total);

        let counts = platform.cpu_counts().unwrap();
        assert!(counts.logical > 0);
    }

    #[test]
    fn test_system_platform_temperatures_reread() {
        let mut platform = SystemPlatform::new();
        assert!(platform.temperatures().is_ok());
        assert!(platform.temperatures().is_ok());
    }
}
