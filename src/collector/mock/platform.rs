//! In-memory platform for testing without a real host.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::collector::traits::{
    CpuCounts, CpuInfo, CpuUsage, DiskUsage, HostInfo, MemoryUsage, Partition, Platform,
    PlatformError, SensorReading,
};

/// Scripted platform.
///
/// Every metric family holds the `Result` that its query returns, so tests
/// can fail any single family. Partition usage is keyed by mount point;
/// a partition without an entry reports [`PlatformError::PartitionGone`].
#[derive(Debug, Clone)]
pub struct MockPlatform {
    pub cpu_counts: Result<CpuCounts, PlatformError>,
    pub cpu_info: Result<Vec<CpuInfo>, PlatformError>,
    pub cpu_usage: Result<CpuUsage, PlatformError>,
    pub memory: Result<MemoryUsage, PlatformError>,
    pub partitions: Result<Vec<Partition>, PlatformError>,
    pub usage: HashMap<PathBuf, Result<DiskUsage, PlatformError>>,
    pub temperatures: Result<Vec<SensorReading>, PlatformError>,
    pub host_info: Result<HostInfo, PlatformError>,
    pub uptime: Result<u64, PlatformError>,
    /// Number of `cpu_usage` calls, shared across clones.
    samples: Arc<AtomicUsize>,
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPlatform {
    /// Creates a platform where every query reports nothing.
    pub fn new() -> Self {
        Self {
            cpu_counts: Err(PlatformError::Unavailable("cpu count")),
            cpu_info: Ok(Vec::new()),
            cpu_usage: Err(PlatformError::Unavailable("cpu usage")),
            memory: Err(PlatformError::Unavailable("memory")),
            partitions: Ok(Vec::new()),
            usage: HashMap::new(),
            temperatures: Ok(Vec::new()),
            host_info: Err(PlatformError::Unavailable("host info")),
            uptime: Err(PlatformError::Unavailable("uptime")),
            samples: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Sets memory totals.
    pub fn with_memory(mut self, total: u64, used: u64) -> Self {
        self.memory = Ok(MemoryUsage::new(total, used));
        self
    }

    /// Sets aggregate and per-core CPU percentages.
    pub fn with_cpu_usage(mut self, total: f64, per_core: &[f64]) -> Self {
        self.cpu_usage = Ok(CpuUsage {
            total,
            per_core: per_core.to_vec(),
        });
        self
    }

    /// Adds a partition whose usage query succeeds.
    pub fn with_partition(
        mut self,
        mount_point: &str,
        file_system: &str,
        total: u64,
        used: u64,
    ) -> Self {
        self.push_partition(mount_point, file_system);
        self.usage.insert(
            PathBuf::from(mount_point),
            Ok(DiskUsage::new(mount_point, total, used)),
        );
        self
    }

    /// Adds a partition whose usage query fails.
    pub fn with_failing_partition(mut self, mount_point: &str, file_system: &str) -> Self {
        self.push_partition(mount_point, file_system);
        self.usage.remove(Path::new(mount_point));
        self
    }

    /// Adds a temperature sensor.
    pub fn with_sensor(mut self, label: &str, celsius: f64) -> Self {
        if let Ok(readings) = &mut self.temperatures {
            readings.push(SensorReading::new(label, celsius));
        }
        self
    }

    /// Number of CPU usage samples taken so far.
    pub fn sample_count(&self) -> usize {
        self.samples.load(Ordering::SeqCst)
    }

    fn push_partition(&mut self, mount_point: &str, file_system: &str) {
        let index = self.partitions.as_ref().map_or(0, Vec::len);
        let partition = Partition::new(&format!("/dev/mock{}", index), mount_point, file_system);
        match &mut self.partitions {
            Ok(list) => list.push(partition),
            Err(_) => self.partitions = Ok(vec![partition]),
        }
    }
}

impl Platform for MockPlatform {
    fn cpu_counts(&mut self) -> Result<CpuCounts, PlatformError> {
        self.cpu_counts.clone()
    }

    fn cpu_info(&mut self) -> Result<Vec<CpuInfo>, PlatformError> {
        self.cpu_info.clone()
    }

    fn cpu_usage(&mut self) -> Result<CpuUsage, PlatformError> {
        self.samples.fetch_add(1, Ordering::SeqCst);
        self.cpu_usage.clone()
    }

    fn memory(&mut self) -> Result<MemoryUsage, PlatformError> {
        self.memory.clone()
    }

    fn partitions(&mut self) -> Result<Vec<Partition>, PlatformError> {
        self.partitions.clone()
    }

    fn partition_usage(&mut self, partition: &Partition) -> Result<DiskUsage, PlatformError> {
        let mount = &partition.mount_point;
        self.usage
            .get(mount)
            .cloned()
            .unwrap_or_else(|| Err(PlatformError::PartitionGone(mount.clone())))
    }

    fn temperatures(&mut self) -> Result<Vec<SensorReading>, PlatformError> {
        self.temperatures.clone()
    }

    fn host_info(&mut self) -> Result<HostInfo, PlatformError> {
        self.host_info.clone()
    }

    fn uptime(&mut self) -> Result<u64, PlatformError> {
        self.uptime.clone()
    }
}
