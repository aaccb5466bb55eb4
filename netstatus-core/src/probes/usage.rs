use sysinfo::Networks;

const BYTES_PER_GIB: f64 = (1u64 << 30) as f64;

/// GiB with the two decimals the dashboard displays.
pub(crate) fn counters_to_gb(bytes_sent: u64, bytes_received: u64) -> f64 {
    ((bytes_sent + bytes_received) as f64 / BYTES_PER_GIB * 100.0).round() / 100.0
}

/// Reads the kernel's cumulative per-interface byte counters.
///
/// The counters reset with the host, so a reading taken after a reboot may
/// be smaller than one taken before it. Within one boot cycle the figure is
/// non-decreasing.
#[derive(Debug, Default)]
pub struct UsageProbe;

impl UsageProbe {
    pub fn new() -> Self {
        Self
    }

    /// Total GiB moved over all interfaces since the counters were reset.
    pub fn read_gb(&self) -> f64 {
        let networks = Networks::new_with_refreshed_list();
        let (sent, received) = networks
            .iter()
            .fold((0u64, 0u64), |(tx, rx), (_, data)| {
                (tx + data.total_transmitted(), rx + data.total_received())
            });
        counters_to_gb(sent, received)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_both_directions_and_scales_to_gib() {
        assert_eq!(counters_to_gb(1 << 30, 1 << 30), 2.0);
        assert_eq!(counters_to_gb(0, 0), 0.0);
        // 1.5 GiB received, nothing sent.
        assert_eq!(counters_to_gb(0, 1_610_612_736), 1.5);
    }

    #[test]
    fn rounds_to_two_decimals() {
        // 1234567890 bytes = 1.14978... GiB
        assert_eq!(counters_to_gb(1_234_567_890, 0), 1.15);
    }

    #[test]
    fn a_live_reading_is_non_negative() {
        assert!(UsageProbe::new().read_gb() >= 0.0);
    }
}
