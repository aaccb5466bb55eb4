use std::time::Duration;
use tokio::process::Command;

pub mod collector;
pub mod latency;
pub mod mock;
pub mod netsh;
pub mod nmcli;
pub mod throughput;
pub mod unsupported;
pub mod usage;

/// Sentinel SSID for a probe that ran but could not produce an answer.
pub const SSID_UNKNOWN: &str = "Unknown";

/// Sentinel SSID for hosts where no probe tool exists.
pub const SSID_UNSUPPORTED: &str = "Unsupported OS";

/// The two OS families the dashboard knows how to query, plus the terminal
/// "unsupported" classification. `Unsupported` is a valid answer, not an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    Linux,
    Unsupported,
}

impl OsFamily {
    pub fn detect() -> Self {
        Self::classify(std::env::consts::OS)
    }

    /// Lower-cased substring match on the reported system name.
    pub fn classify(os_name: &str) -> Self {
        let name = os_name.to_lowercase();
        if name.contains("windows") {
            OsFamily::Windows
        } else if name.contains("linux") {
            OsFamily::Linux
        } else {
            OsFamily::Unsupported
        }
    }
}

/// Runs a probe subprocess under a deadline and hands back its stdout.
///
/// A hung tool must not stall the request that triggered it, so the child is
/// killed when the deadline passes.
pub(crate) async fn run_tool(
    program: &str,
    args: &[&str],
    timeout: Duration,
) -> crate::Result<String> {
    let mut command = Command::new(program);
    command.args(args).kill_on_drop(true);

    let output = tokio::time::timeout(timeout, command.output())
        .await
        .map_err(|_| crate::Error::ProbeTimeout(timeout))??;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(crate::Error::CommandFailed(format!(
            "{program} exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    Ok(String::from_utf8(output.stdout)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_names_classify_as_windows() {
        assert_eq!(OsFamily::classify("windows"), OsFamily::Windows);
        assert_eq!(OsFamily::classify("Windows 11"), OsFamily::Windows);
    }

    #[test]
    fn linux_names_classify_as_linux() {
        assert_eq!(OsFamily::classify("linux"), OsFamily::Linux);
        assert_eq!(OsFamily::classify("GNU/Linux"), OsFamily::Linux);
    }

    #[test]
    fn everything_else_is_unsupported() {
        assert_eq!(OsFamily::classify("macos"), OsFamily::Unsupported);
        assert_eq!(OsFamily::classify("freebsd"), OsFamily::Unsupported);
        assert_eq!(OsFamily::classify(""), OsFamily::Unsupported);
    }

    #[tokio::test]
    async fn missing_binary_is_an_io_error() {
        let err = run_tool(
            "definitely-not-a-real-binary",
            &[],
            Duration::from_secs(1),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
