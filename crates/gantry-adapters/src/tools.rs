//! Tool availability probe.

use std::process::{Command, Stdio};

use gantry_core::application::ports::ToolChecker;
use tracing::debug;

/// Probes tools by running `<tool> --version` with all output discarded.
///
/// A tool counts as available only when the probe starts and exits
/// successfully.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandToolChecker;

impl CommandToolChecker {
    pub fn new() -> Self {
        Self
    }
}

impl ToolChecker for CommandToolChecker {
    fn is_available(&self, tool: &str) -> bool {
        let available = Command::new(tool)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false);
        debug!(tool, available, "Probed tool");
        available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tool_is_unavailable() {
        let checker = CommandToolChecker::new();
        assert!(!checker.is_available("gantry-no-such-tool-4f2a"));
    }

    #[test]
    fn cargo_is_available_under_test() {
        // Tests run through cargo, so it is on PATH here.
        assert!(CommandToolChecker::new().is_available("cargo"));
    }
}
