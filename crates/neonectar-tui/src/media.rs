//! Demo and avatar video panel state.
//!
//! Playback itself belongs to the platform's media player; this only tracks
//! which files belong to the current step and whether they are paused.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

use neonectar_core::{Language, StepAssets};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaState {
    pub assets: StepAssets,
    pub paused: bool,
}

impl MediaState {
    pub fn new(assets_dir: &Path, language: Language, step: usize) -> Self {
        Self {
            assets: StepAssets::resolve(assets_dir, language, step),
            paused: false,
        }
    }

    /// Load the files for a step and play from the start
    pub fn restart(&mut self, assets_dir: &Path, language: Language, step: usize) {
        self.assets = StepAssets::resolve(assets_dir, language, step);
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn demo_available(&self) -> bool {
        self.assets.demo.exists()
    }

    pub fn avatar_available(&self) -> bool {
        self.assets.avatar.exists()
    }

    /// Hand the demo video to the system opener. Failures are only logged.
    pub fn open_demo(&self) {
        open_with_system(&self.assets.demo);
    }
}

fn opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

fn open_with_system(path: &Path) {
    debug!(path = %path.display(), "opening video");
    if let Err(e) = spawn_reaped(Command::new(opener()).arg(path)) {
        warn!(error = %e, path = %path.display(), "could not open video");
    }
}

/// Start `command` detached from the terminal and wait for it on a
/// background thread so the child is reaped when it exits.
fn spawn_reaped(command: &mut Command) -> io::Result<thread::JoinHandle<()>> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    thread::Builder::new()
        .name("media-opener".to_string())
        .spawn(move || match child.wait() {
            Ok(status) if !status.success() => debug!(%status, "media opener exited"),
            Ok(_) => {}
            Err(e) => warn!(error = %e, "could not wait for media opener"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_restart_unpauses_and_switches_files() {
        let dir = Path::new("assets");
        let mut media = MediaState::new(dir, Language::En, 1);
        media.toggle_pause();
        assert!(media.paused);

        media.restart(dir, Language::Ger, 2);
        assert!(!media.paused);
        assert_eq!(media.assets.demo, dir.join("demo-gumloop-2.mp4"));
        assert_eq!(media.assets.avatar, dir.join("ger-avatar-gumloop-2.mp4"));
    }

    #[cfg(unix)]
    #[test]
    fn test_opener_child_is_waited_on() {
        let waiter = spawn_reaped(Command::new("true").arg("ignored")).unwrap();
        waiter.join().unwrap();
    }

    #[test]
    fn test_missing_opener_is_an_error() {
        assert!(spawn_reaped(&mut Command::new("neonectar-no-such-opener")).is_err());
    }

    #[test]
    fn test_availability_checks_disk() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("demo-gumloop-1.mp4"), b"").unwrap();

        let media = MediaState::new(dir.path(), Language::En, 1);
        assert!(media.demo_available());
        assert!(!media.avatar_available());
    }
}
