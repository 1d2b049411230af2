//! Runs composed commands: local execution first, then the mirror, then the
//! log. A failing status is reported but never skips the later steps.

use shared::{
    error::ConsoleError,
    protocol::{ControlSignal, LineTerminator, StatusCode},
};

use crate::log_buffer::LogBuffer;

/// Synchronous local execution of one command line.
pub trait LocalInterpreter {
    fn execute(&mut self, line: &str) -> StatusCode;
    fn signal(&mut self, signal: ControlSignal);
}

/// Outbound mirror to remote listeners. Delivery is best effort; callers never
/// wait on it and never learn whether it arrived.
pub trait Transport {
    fn send_line(&self, line: &str, terminator: LineTerminator);
    fn send_signal(&self, signal: ControlSignal);
}

/// Receives the complete log text whenever it changes.
pub trait DisplaySink {
    fn render(&mut self, text: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched {
    pub command: String,
    pub status: StatusCode,
}

impl Dispatched {
    pub fn check(&self) -> Result<(), ConsoleError> {
        if self.status.is_ok() {
            Ok(())
        } else {
            Err(ConsoleError::rejected(&self.command, self.status))
        }
    }
}

pub struct Dispatcher<I, T> {
    interpreter: I,
    transport: T,
    terminator: LineTerminator,
}

impl<I: LocalInterpreter, T: Transport> Dispatcher<I, T> {
    pub fn new(interpreter: I, transport: T, terminator: LineTerminator) -> Self {
        Self {
            interpreter,
            transport,
            terminator,
        }
    }

    pub fn interpreter(&self) -> &I {
        &self.interpreter
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn dispatch(&mut self, line: &str, log: &mut LogBuffer) -> Dispatched {
        let dispatched = self.run(line);

        let mut entry = format!("{line}\n");
        if let Err(error) = dispatched.check() {
            tracing::warn!(command = line, %error, "local interpreter rejected command");
            entry.push_str(&format!("{}\n", dispatched.status));
        }
        log.append(&entry);
        dispatched
    }

    /// Runs each line to completion before composing the next result, then
    /// logs `summary` once, followed by any failing statuses.
    pub fn dispatch_sequence(
        &mut self,
        lines: &[String],
        summary: &str,
        log: &mut LogBuffer,
    ) -> Vec<Dispatched> {
        let results: Vec<Dispatched> = lines.iter().map(|line| self.run(line)).collect();

        let mut entry = format!("{summary}\n");
        for dispatched in &results {
            if let Err(error) = dispatched.check() {
                tracing::warn!(command = %dispatched.command, %error, "local interpreter rejected command");
                entry.push_str(&format!("{}: {}\n", dispatched.command, dispatched.status));
            }
        }
        log.append(&entry);
        results
    }

    pub fn signal(&mut self, signal: ControlSignal, log: &mut LogBuffer) {
        self.interpreter.signal(signal);
        self.transport.send_signal(signal);
        tracing::debug!(signal = signal.label(), "control signal dispatched");
        log.append(&format!("{}\n", signal.label()));
    }

    fn run(&mut self, line: &str) -> Dispatched {
        let status = self.interpreter.execute(line);
        self.transport.send_line(line, self.terminator);
        tracing::debug!(command = line, status = status.code(), "command dispatched");
        Dispatched {
            command: line.to_string(),
            status,
        }
    }
}

#[cfg(test)]
#[path = "tests/dispatcher_tests.rs"]
mod tests;
