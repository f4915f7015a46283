//! Shared output layer: human text or stable JSON, per command.

use serde::Serialize;
use std::io::{self, Write};

/// The two output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text.
    Human,
    /// Machine-readable JSON (one object per result, or a JSON array).
    Json,
}

impl OutputMode {
    pub fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Render a serializable result: pretty JSON in JSON mode, otherwise the
/// caller-provided human formatter.
pub fn render<T, F>(mode: OutputMode, value: &T, human: F) -> anyhow::Result<()>
where
    T: Serialize,
    F: FnOnce(&T, &mut dyn Write) -> io::Result<()>,
{
    let stdout = io::stdout();
    let mut w = stdout.lock();
    if mode.is_json() {
        serde_json::to_writer_pretty(&mut w, value)?;
        writeln!(w)?;
    } else {
        human(value, &mut w)?;
    }
    Ok(())
}

/// One-line success message; `{"ok": true, "message": ..}` in JSON mode.
pub fn render_success(mode: OutputMode, message: &str) -> anyhow::Result<()> {
    #[derive(Serialize)]
    struct Body<'a> {
        ok: bool,
        message: &'a str,
    }
    render(
        mode,
        &Body { ok: true, message },
        |v, w| writeln!(w, "{}", v.message),
    )
}

/// Key/value line for human task detail output.
pub fn human_kv(w: &mut dyn Write, key: &str, value: impl AsRef<str>) -> io::Result<()> {
    writeln!(w, "{:<12} {}", format!("{key}:"), value.as_ref())
}
