//! Host metrics collection.
//!
//! This module provides the [`Platform`] abstraction over the operating
//! system's metric sources, with a `sysinfo`-backed implementation for
//! production and a scripted one for tests.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 MetricSample                  │
//! │  cpu · memory · disks · temperatures · uptime │
//! └──────────────────────┬───────────────────────┘
//!                        │
//!                 ┌──────▼──────┐
//!                 │  Platform   │ (trait)
//!                 └──────┬──────┘
//!          ┌─────────────┼─────────────┐
//!   ┌──────▼───────┐ ┌───▼──────────┐ ┌▼────────────┐
//!   │SystemPlatform│ │ MockPlatform │ │  Scenarios  │
//!   │  (sysinfo)   │ │  (Testing)   │ │ (Fixtures)  │
//!   └──────────────┘ └──────────────┘ └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use sysdash::collector::{MetricSample, MockPlatform};
//!
//! let mut platform = MockPlatform::typical_system();
//! let sample = MetricSample::collect(&mut platform);
//! assert_eq!(sample.disks.unwrap().len(), 3);
//! ```

pub mod mock;
mod sample;
mod system;
pub mod traits;

pub use mock::MockPlatform;
pub use sample::{MetricSample, SampleTiming, is_cpu_sensor};
pub use system::SystemPlatform;
pub use traits::{
    CpuCounts, CpuInfo, CpuUsage, DiskUsage, HostInfo, MemoryUsage, Partition, Platform,
    PlatformError, SensorReading,
};
