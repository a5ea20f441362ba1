//! Platform-aware ping command construction.

/// Operating system family, used to select the ping flag dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Windows-family: packet count selected with `-n`.
    Windows,
    /// Unix-family (Linux, macOS, BSD): packet count selected with `-c`.
    Unix,
}

impl Platform {
    /// Detect the platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    /// Flag that selects the number of echo requests.
    fn count_flag(self) -> &'static str {
        match self {
            Self::Windows => "-n",
            Self::Unix => "-c",
        }
    }
}

/// A fully-built child process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Program to execute.
    pub program: String,
    /// Arguments, in order.
    pub args: Vec<String>,
}

/// Build the ping invocation for the given platform.
///
/// Pure function, so the flag dialect is testable without spawning anything.
pub fn ping_command(program: &str, platform: Platform, target: &str, count: u32) -> CommandLine {
    CommandLine {
        program: program.to_string(),
        args: vec![
            platform.count_flag().to_string(),
            count.to_string(),
            target.to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_count_flag() {
        let cmd = ping_command("ping", Platform::Unix, "8.8.8.8", 4);
        assert_eq!(cmd.program, "ping");
        assert_eq!(cmd.args, vec!["-c", "4", "8.8.8.8"]);
    }

    #[test]
    fn test_windows_count_flag() {
        let cmd = ping_command("ping", Platform::Windows, "example.com", 2);
        assert_eq!(cmd.args, vec!["-n", "2", "example.com"]);
    }

    #[test]
    fn test_custom_program() {
        let cmd = ping_command("/usr/bin/ping", Platform::Unix, "::1", 1);
        assert_eq!(cmd.program, "/usr/bin/ping");
        assert_eq!(cmd.args.last().map(String::as_str), Some("::1"));
    }

    #[cfg(unix)]
    #[test]
    fn test_current_platform_is_unix() {
        assert_eq!(Platform::current(), Platform::Unix);
    }

    #[cfg(windows)]
    #[test]
    fn test_current_platform_is_windows() {
        assert_eq!(Platform::current(), Platform::Windows);
    }
}
