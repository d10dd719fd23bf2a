//! Rendering of build and watch events

use stylewatch::application::BuildEvent;

use crate::ui::context::UiContext;
use crate::ui::theme::Marker;

fn describe(event: &BuildEvent) -> (Marker, String) {
    match event {
        BuildEvent::BuildStarted { roots } if roots.is_empty() => {
            (Marker::Building, "building nothing".to_string())
        }
        BuildEvent::BuildStarted { roots } => {
            (Marker::Building, format!("building {}", roots.join(" and ")))
        }
        BuildEvent::Compiled { source, output, .. } => {
            (Marker::Compiled, format!("compiled {source} to {output}"))
        }
        BuildEvent::CompileFailed { message, .. } => (Marker::Failed, message.clone()),
        BuildEvent::BuildComplete { compiled, failed: 0 } => {
            (Marker::Compiled, format!("build finished: {compiled} compiled"))
        }
        BuildEvent::BuildComplete { compiled, failed } => (
            Marker::Notice,
            format!("build finished: {compiled} compiled, {failed} failed"),
        ),
        BuildEvent::RootWatched { root, kind } => (
            Marker::Watching,
            format!("watching {root} directory for {} file changes", kind.label()),
        ),
        BuildEvent::RootSkipped { root, kind } => (
            Marker::Skipped,
            format!(
                "no {root} directory - not watching for {} file changes",
                kind.label()
            ),
        ),
        BuildEvent::FileChanged { path, change, kind } => (
            Marker::Changed,
            format!("saw {} file {}: {path}", kind.label(), change.verb()),
        ),
        BuildEvent::WatchError { message } => (Marker::Notice, format!("watch error: {message}")),
        BuildEvent::Shutdown => (Marker::Watching, "watch stopped.".to_string()),
    }
}

/// Render one event as `[HH:MM:SS] <marker> <text>` lines
pub fn render_event(timestamp: &str, event: &BuildEvent, color: bool, unicode: bool) -> String {
    let line = |marker: Marker, text: &str| {
        format!("[{timestamp}] {} {text}\n", marker.render(color, unicode))
    };

    let (marker, text) = describe(event);
    let mut out = line(marker, &text);
    match event {
        BuildEvent::CompileFailed {
            hint: Some(hint), ..
        } => out.push_str(&line(Marker::Changed, &format!("hint: {hint}"))),
        BuildEvent::Shutdown => out.insert(0, '\n'),
        _ => {}
    }
    out
}

fn timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Print one event as NDJSON or as a timestamped line
pub fn emit(ui: &UiContext, event: &BuildEvent) {
    if ui.json {
        let mut out = std::io::stdout().lock();
        let _ = crate::ui::json::write_line(&mut out, &event.to_json());
        return;
    }

    let rendered = render_event(&timestamp(), event, ui.color, ui.unicode);
    match event {
        BuildEvent::CompileFailed { .. } | BuildEvent::WatchError { .. } => eprint!("{rendered}"),
        _ => {
            print!("{rendered}");
            use std::io::Write;
            let _ = std::io::stdout().flush();
        }
    }
}
