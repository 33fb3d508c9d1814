use std::fmt;

const BYTES_PER_MB: f64 = 1_048_576.0;

/// Memory readout for the current process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryInfo {
    /// Peak resident set size in bytes
    pub peak_rss_bytes: u64,
}

impl MemoryInfo {
    pub fn peak_rss_mb(&self) -> f64 {
        self.peak_rss_bytes as f64 / BYTES_PER_MB
    }
}

impl fmt::Display for MemoryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} MB", self.peak_rss_mb())
    }
}

/// Peak memory of this process, or `None` where the platform offers no readout
#[cfg(unix)]
pub fn memory_info() -> Option<MemoryInfo> {
    // SAFETY: getrusage only writes into the zeroed struct we hand it
    let usage = unsafe {
        let mut usage: libc::rusage = std::mem::zeroed();
        if libc::getrusage(libc::RUSAGE_SELF, &mut usage) != 0 {
            return None;
        }
        usage
    };

    let maxrss = u64::try_from(usage.ru_maxrss).ok()?;
    // macOS reports bytes, everything else kilobytes
    let peak_rss_bytes = if cfg!(target_os = "macos") { maxrss } else { maxrss * 1024 };
    Some(MemoryInfo { peak_rss_bytes })
}

#[cfg(not(unix))]
pub fn memory_info() -> Option<MemoryInfo> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_in_megabytes() {
        let info = MemoryInfo { peak_rss_bytes: 3 * 1_048_576 + 524_288 };
        assert_eq!(info.to_string(), "3.50 MB");
    }

    #[cfg(unix)]
    #[test]
    fn test_memory_info_reports_nonzero_peak() {
        let info = memory_info().unwrap();
        assert!(info.peak_rss_bytes > 0);
    }
}
