pub mod build;
pub mod watch;

use std::path::Path;

/// Sources and `stylewatch.toml` are resolved against the working directory;
/// an empty root keeps every reported path relative (`styles/a.css`).
pub fn project_root() -> &'static Path {
    Path::new("")
}
