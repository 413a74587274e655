use std::{
    path::{Path, PathBuf},
    process::Stdio,
};
use tokio::process::Command as AsyncCommand;
use tracing::debug;

use super::ExternalViewer;

/// Lightweight browsers first, desktop openers last.
const BROWSERS: [&str; 9] = [
    "netsurf-gtk",
    "surf",
    "midori",
    "chromium-browser",
    "google-chrome",
    "firefox",
    "open", // macOS
    "epiphany",
    "xdg-open",
];

/// Executable named `command` on `PATH`, if any.
fn find_in_path(command: &str) -> Option<PathBuf> {
    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .map(|dir| dir.join(command))
        .find(|candidate| candidate.is_file())
}

impl ExternalViewer {
    /// Open `html_path` in the first browser found, returning its name.
    pub(super) async fn launch_browser(&self, html_path: &Path) -> color_eyre::Result<&'static str> {
        let url = format!("file://{}", html_path.display());

        for browser in BROWSERS {
            let Some(executable) = find_in_path(browser) else {
                continue;
            };

            let mut cmd = AsyncCommand::new(&executable);
            match browser {
                "open" | "xdg-open" => {
                    cmd.arg(html_path);
                }
                "midori" | "chromium-browser" | "google-chrome" => {
                    cmd.arg("--app");
                    cmd.arg(&url);
                }
                _ => {
                    cmd.arg(&url);
                }
            }

            cmd.stdout(Stdio::null());
            cmd.stderr(Stdio::null());

            match cmd.spawn() {
                Ok(_) => {
                    debug!("Launched document viewer with: {}", executable.display());
                    return Ok(browser);
                }
                Err(e) => debug!("{} failed to start: {}", browser, e),
            }
        }

        Err(color_eyre::eyre::eyre!(
            "No suitable browser found. Install one of: {}",
            BROWSERS.join(", ")
        ))
    }
}
