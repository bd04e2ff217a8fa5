//! Outbound links: project demos, repositories, socials and email.

use crate::error::{FolioError, Result};
use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

/// `mailto:` URL for an address.
pub fn mailto(address: &str) -> String {
    format!("mailto:{address}")
}

/// Whether `url` is something we are willing to hand to the system opener.
pub fn is_openable(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://") || url.starts_with("mailto:")
}

/// The platform's "open this URL" command.
pub fn opener_command(url: &str) -> Command {
    #[cfg(target_os = "windows")]
    let mut cmd = {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        cmd
    };
    #[cfg(target_os = "macos")]
    let mut cmd = {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    };
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let mut cmd = {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    };
    // The TUI owns the terminal; the opener must not write to it.
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    cmd
}

/// Open a URL in a new browser context.
///
/// Returns once the opener has been spawned; the browser itself is not
/// awaited.
pub fn open_in_browser(url: &str) -> Result<()> {
    if !is_openable(url) {
        return Err(FolioError::Opener {
            url: url.to_string(),
            reason: "unsupported scheme".to_string(),
        });
    }
    spawn_detached(opener_command(url)).map_err(|e| FolioError::Opener {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    tracing::info!(url, "opened link");
    Ok(())
}

/// Spawn `cmd` and reap it on a background thread so it never lingers as a
/// zombie.
fn spawn_detached(mut cmd: Command) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
    let mut child = cmd.spawn()?;
    Ok(thread::spawn(move || child.wait()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto() {
        assert_eq!(mailto("me@example.com"), "mailto:me@example.com");
    }

    #[test]
    fn test_is_openable() {
        assert!(is_openable("https://github.com/hadeexo"));
        assert!(is_openable("mailto:me@example.com"));
        assert!(!is_openable("file:///etc/passwd"));
        assert!(!is_openable("#"));
    }

    #[test]
    fn test_open_rejects_unsupported_scheme_without_spawning() {
        let err = open_in_browser("javascript:alert(1)").unwrap_err();
        assert!(matches!(err, FolioError::Opener { .. }));
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn test_opener_command_passes_url() {
        let cmd = opener_command("https://example.com");
        let args: Vec<_> = cmd.get_args().collect();
        assert!(args.iter().any(|a| *a == "https://example.com"));
    }

    #[cfg(unix)]
    #[test]
    fn test_spawned_opener_is_reaped() {
        let handle = spawn_detached(Command::new("true")).unwrap();
        let status = handle.join().unwrap().unwrap();
        assert!(status.success());
    }

    #[test]
    fn test_spawn_failure_is_reported() {
        let err = spawn_detached(Command::new("/nonexistent/folio-opener")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
