//! Per-tick metric collection.
//!
//! A [`MetricSample`] holds one `Result` per metric family, so a failing
//! source only degrades its own panel.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::collector::traits::{
    CpuUsage, DiskUsage, MemoryUsage, Platform, PlatformError, SensorReading,
};

/// Sensor label fragments identifying CPU temperature sources.
const CPU_SENSORS: &[&str] = &["coretemp", "k10temp", "zenpower", "cpu"];

/// Timing information for each collection phase.
///
/// Used for debugging slow platform backends.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleTiming {
    /// Total sample collection time.
    pub total: Duration,
    /// Time to measure CPU usage (includes the measurement window).
    pub cpu: Duration,
    pub memory: Duration,
    /// Time to enumerate partitions and query their usage.
    pub disks: Duration,
    pub temperatures: Duration,
}

/// Live metrics of one tick.
#[derive(Debug, Clone)]
pub struct MetricSample {
    pub cpu: Result<CpuUsage, PlatformError>,
    pub memory: Result<MemoryUsage, PlatformError>,
    /// Usage of every real partition whose query succeeded, in enumeration order.
    pub disks: Result<Vec<DiskUsage>, PlatformError>,
    /// Every sensor the platform reported, CPU or not.
    pub temperatures: Result<Vec<SensorReading>, PlatformError>,
    /// Seconds since boot.
    pub uptime: Result<u64, PlatformError>,
    pub timing: SampleTiming,
}

impl MetricSample {
    /// Queries every metric family once.
    ///
    /// Never fails as a whole: each family carries its own result.
    pub fn collect(platform: &mut impl Platform) -> Self {
        let total_start = Instant::now();
        let mut timing = SampleTiming::default();

        let start = Instant::now();
        let cpu = platform.cpu_usage();
        timing.cpu = start.elapsed();

        let start = Instant::now();
        let memory = platform.memory();
        timing.memory = start.elapsed();

        let start = Instant::now();
        let disks = collect_disks(platform);
        timing.disks = start.elapsed();

        let start = Instant::now();
        let temperatures = platform.temperatures();
        timing.temperatures = start.elapsed();

        let uptime = platform.uptime();
        timing.total = total_start.elapsed();

        let sample = Self {
            cpu,
            memory,
            disks,
            temperatures,
            uptime,
            timing,
        };
        sample.log_failures();
        sample
    }

    /// Sensors that belong to the CPU, in reported order.
    pub fn cpu_temperatures(&self) -> impl Iterator<Item = &SensorReading> {
        self.temperatures
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter(|reading| is_cpu_sensor(&reading.label))
    }

    fn log_failures(&self) {
        if let Err(e) = &self.cpu {
            debug!("CPU usage unavailable: {}", e);
        }
        if let Err(e) = &self.memory {
            debug!("Memory usage unavailable: {}", e);
        }
        if let Err(e) = &self.disks {
            debug!("Partition list unavailable: {}", e);
        }
        if let Err(e) = &self.temperatures {
            debug!("Temperatures unavailable: {}", e);
        }
        if let Err(e) = &self.uptime {
            debug!("Uptime unavailable: {}", e);
        }
    }
}

/// Whether a sensor label names a CPU temperature source.
pub fn is_cpu_sensor(label: &str) -> bool {
    let label = label.to_ascii_lowercase();
    CPU_SENSORS.iter().any(|key| label.contains(key))
}

/// Usage of all real partitions, first occurrence of each mount point wins.
fn collect_disks(platform: &mut impl Platform) -> Result<Vec<DiskUsage>, PlatformError> {
    let partitions = platform.partitions()?;
    let mut seen = HashSet::new();
    let mut disks = Vec::with_capacity(partitions.len());

    for partition in partitions {
        if partition.is_virtual() || !seen.insert(partition.mount_point.clone()) {
            continue;
        }
        match platform.partition_usage(&partition) {
            Ok(usage) => disks.push(usage),
            Err(e) => debug!(
                "Skipping partition {}: {}",
                partition.mount_point.display(),
                e
            ),
        }
    }
    Ok(disks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockPlatform;
    use std::path::PathBuf;

    const GIB: u64 = 1024 * 1024 * 1024;

    #[test]
    fn test_collect_typical_system() {
        let mut platform = MockPlatform::typical_system();
        let sample = MetricSample::collect(&mut platform);

        assert_eq!(sample.cpu.as_ref().unwrap().per_core.len(), 8);
        assert_eq!(sample.memory.as_ref().unwrap().total, 16 * GIB);
        assert_eq!(sample.uptime, Ok(93_784));
        assert_eq!(platform.sample_count(), 1);
    }

    #[test]
    fn test_virtual_partitions_skipped() {
        let mut platform = MockPlatform::typical_system();
        let sample = MetricSample::collect(&mut platform);

        let paths: Vec<_> = sample
            .disks
            .unwrap()
            .into_iter()
            .map(|d| d.path)
            .collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/"),
                PathBuf::from("/home"),
                PathBuf::from("/boot/efi")
            ]
        );
    }

    #[test]
    fn test_failing_partition_dropped() {
        let mut platform = MockPlatform::new()
            .with_partition("/", "ext4", 100, 10)
            .with_failing_partition("/mnt/usb", "vfat")
            .with_partition("/data", "xfs", 100, 90);
        let sample = MetricSample::collect(&mut platform);

        let disks = sample.disks.unwrap();
        assert_eq!(disks.len(), 2);
        assert_eq!(disks[0].path, PathBuf::from("/"));
        assert_eq!(disks[1].path, PathBuf::from("/data"));
    }

    #[test]
    fn test_duplicate_mount_points_collapsed() {
        let mut platform = MockPlatform::new()
            .with_partition("/", "ext4", 100, 10)
            .with_partition("/", "ext4", 100, 10);
        let sample = MetricSample::collect(&mut platform);
        assert_eq!(sample.disks.unwrap().len(), 1);
    }

    #[test]
    fn test_partition_list_failure() {
        let mut platform = MockPlatform::broken();
        let sample = MetricSample::collect(&mut platform);

        assert!(sample.cpu.is_err());
        assert!(sample.memory.is_err());
        assert!(sample.disks.is_err());
        assert!(sample.uptime.is_err());
        assert_eq!(sample.cpu_temperatures().count(), 0);
    }

    #[test]
    fn test_cpu_temperatures_filtered() {
        let mut platform = MockPlatform::typical_system();
        let sample = MetricSample::collect(&mut platform);

        assert_eq!(sample.temperatures.as_ref().unwrap().len(), 4);
        let labels: Vec<_> = sample
            .cpu_temperatures()
            .map(|r| r.label.as_str())
            .collect();
        assert_eq!(labels, vec!["coretemp Package id 0", "coretemp Core 0"]);
    }

    #[test]
    fn test_is_cpu_sensor() {
        assert!(is_cpu_sensor("coretemp Core 1"));
        assert!(is_cpu_sensor("k10temp Tctl"));
        assert!(is_cpu_sensor("zenpower Tdie"));
        assert!(is_cpu_sensor("CPU Temperature"));
        assert!(!is_cpu_sensor("acpitz temp1"));
        assert!(!is_cpu_sensor("nvme Composite"));
    }
}
