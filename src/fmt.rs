//! Shared formatting helpers for dashboard panels.
//!
//! Pure functions only: no ratatui styles, no theme lookups. The colored
//! counterparts built on top of these live in [`crate::panels`].

/// Usage percentage at or above which a metric is considered high.
pub const HIGH_USAGE: f64 = 80.0;
/// Usage percentage at or above which a metric is considered medium.
pub const MEDIUM_USAGE: f64 = 50.0;

const KIB: u64 = 1024;
const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];

/// Severity bracket of a usage percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Usage {
    Low,
    Medium,
    High,
}

impl Usage {
    /// Classifies a usage percentage.
    ///
    /// Boundaries belong to the more severe bracket: `50.0` is medium and
    /// `80.0` is high. NaN is treated as low.
    pub fn classify(percent: f64) -> Self {
        if percent >= HIGH_USAGE {
            Usage::High
        } else if percent >= MEDIUM_USAGE {
            Usage::Medium
        } else {
            Usage::Low
        }
    }
}

/// Format byte count as human-readable size.
///
/// Picks the largest binary unit whose scaled value is at least 1:
/// `"1023 B"`, `"1.00 KiB"`, `"1.50 GiB"`, `"2.00 TiB"`. A value that would
/// print as `1024.00` is promoted to the next unit.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < KIB {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64 / KIB as f64;
    let mut unit = 0;
    while unit + 1 < UNITS.len() && value >= 1023.995 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}

/// Format elapsed seconds as `"1d 2h 3m 4s"`.
///
/// Leading zero units are dropped, inner ones are kept (`"1h 0m 5s"`), and
/// seconds are always shown.
pub fn format_duration(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;
    let seconds = secs % 60;

    if days > 0 {
        format!("{}d {}h {}m {}s", days, hours, minutes, seconds)
    } else if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Usage percentage as displayed: NaN is 0, the rest clamped to `[0, 100]`.
pub fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

/// Number of filled cells of a `width`-cell bar for `percent`.
///
/// Always within `[0, width]`, whatever the platform reported.
pub fn bar_fill(percent: f64, width: usize) -> usize {
    let filled = (clamp_percent(percent) / 100.0 * width as f64).floor() as usize;
    filled.min(width)
}

/// `part` as a percentage of `whole`, `0.0` when `whole` is zero.
pub fn percent_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

/// Upper-cases the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_unit_boundaries() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1024), "1.00 KiB");
        assert_eq!(format_bytes(1536), "1.50 KiB");
        assert_eq!(format_bytes(1_048_576), "1.00 MiB");
        assert_eq!(format_bytes(1_073_741_824), "1.00 GiB");
        assert_eq!(format_bytes(1_099_511_627_776), "1.00 TiB");
    }

    #[test]
    fn test_format_bytes_stays_in_largest_unit() {
        assert_eq!(format_bytes(4 * 1_073_741_824), "4.00 GiB");
        assert_eq!(format_bytes(2048 * 1_099_511_627_776), "2048.00 TiB");
        assert_eq!(format_bytes(u64::MAX), "16777216.00 TiB");
    }

    #[test]
    fn test_format_bytes_promotes_rounded_values() {
        // One byte short of the next unit rounds up into it.
        assert_eq!(format_bytes(1_048_575), "1.00 MiB");
        assert_eq!(format_bytes(1_073_741_823), "1.00 GiB");
        assert_eq!(format_bytes(1_099_511_627_775), "1.00 TiB");
        assert_eq!(format_bytes(1_048_565), "1023.99 KiB");
    }

    #[test]
    fn test_usage_classify_boundaries() {
        assert_eq!(Usage::classify(0.0), Usage::Low);
        assert_eq!(Usage::classify(49.99), Usage::Low);
        assert_eq!(Usage::classify(50.0), Usage::Medium);
        assert_eq!(Usage::classify(79.99), Usage::Medium);
        assert_eq!(Usage::classify(80.0), Usage::High);
        assert_eq!(Usage::classify(100.0), Usage::High);
    }

    #[test]
    fn test_usage_classify_out_of_range() {
        assert_eq!(Usage::classify(-5.0), Usage::Low);
        assert_eq!(Usage::classify(250.0), Usage::High);
        assert_eq!(Usage::classify(f64::NAN), Usage::Low);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0s");
        assert_eq!(format_duration(59), "59s");
        assert_eq!(format_duration(61), "1m 1s");
        assert_eq!(format_duration(3_600), "1h 0m 0s");
        assert_eq!(format_duration(3_605), "1h 0m 5s");
        assert_eq!(format_duration(93_784), "1d 2h 3m 4s");
    }

    #[test]
    fn test_bar_fill() {
        assert_eq!(bar_fill(0.0, 20), 0);
        assert_eq!(bar_fill(4.99, 20), 0);
        assert_eq!(bar_fill(5.0, 20), 1);
        assert_eq!(bar_fill(50.0, 20), 10);
        assert_eq!(bar_fill(99.99, 20), 19);
        assert_eq!(bar_fill(100.0, 20), 20);
    }

    #[test]
    fn test_bar_fill_clamps_misreported_values() {
        assert_eq!(bar_fill(-12.0, 20), 0);
        assert_eq!(bar_fill(140.0, 20), 20);
        assert_eq!(bar_fill(f64::NAN, 20), 0);
        assert_eq!(bar_fill(f64::INFINITY, 20), 20);
        assert_eq!(bar_fill(f64::NEG_INFINITY, 20), 0);
    }

    #[test]
    fn test_clamp_percent() {
        assert_eq!(clamp_percent(37.5), 37.5);
        assert_eq!(clamp_percent(f64::NAN), 0.0);
        assert_eq!(clamp_percent(-3.0), 0.0);
        assert_eq!(clamp_percent(f64::INFINITY), 100.0);
        assert_eq!(clamp_percent(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(0, 0), 0.0);
        assert_eq!(percent_of(1, 4), 25.0);
        assert_eq!(percent_of(4, 8), 50.0);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("ubuntu"), "Ubuntu");
        assert_eq!(capitalize("Darwin"), "Darwin");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("élan"), "Élan");
    }
}
