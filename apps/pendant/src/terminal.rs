//! Terminal display sink. Rendering only records the latest frame; the main
//! loop presents it on redraw ticks.

use std::io::{self, Write};

use console::DisplaySink;

const HEADER: &str = "---- console ----";

#[derive(Debug, Default)]
pub struct TerminalSink {
    frame: String,
    dirty: bool,
    last_pending: Option<String>,
    failing: bool,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> &str {
        &self.frame
    }

    /// Presents the frame, reporting a broken display once per outage. The
    /// frame stays dirty after a failure and is retried on the next tick.
    pub fn draw(&mut self, out: &mut impl Write, pending: &str) {
        match self.present(out, pending) {
            Ok(_) => {
                if self.failing {
                    tracing::info!("console display recovered");
                }
                self.failing = false;
            }
            Err(error) => {
                if !self.failing {
                    tracing::warn!(%error, "failed to draw console; will retry");
                }
                self.failing = true;
            }
        }
    }

    pub fn is_failing(&self) -> bool {
        self.failing
    }

    /// Writes the frame and the keypad line if either changed since the last
    /// call. Returns whether anything was written.
    pub fn present(&mut self, out: &mut impl Write, pending: &str) -> io::Result<bool> {
        let pending_changed = self.last_pending.as_deref() != Some(pending);
        if !self.dirty && !pending_changed {
            return Ok(false);
        }

        writeln!(out, "{HEADER}")?;
        out.write_all(self.frame.as_bytes())?;
        if !self.frame.is_empty() && !self.frame.ends_with('\n') {
            writeln!(out)?;
        }
        writeln!(out, "> {pending}")?;
        out.flush()?;

        self.dirty = false;
        self.last_pending = Some(pending.to_string());
        Ok(true)
    }
}

impl DisplaySink for TerminalSink {
    fn render(&mut self, text: &str) {
        self.frame.clear();
        self.frame.push_str(text);
        self.dirty = true;
    }
}
