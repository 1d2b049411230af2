//! The console aggregate. Every entry point runs one handler to completion:
//! compose, execute, mirror, log, then a single full redraw if the log moved.

use shared::{
    domain::{FeedRate, TravelDistance},
    protocol::LineTerminator,
};

use crate::{
    command_state::CommandState,
    composer::{compose, Composition},
    dispatcher::{Dispatcher, DisplaySink, LocalInterpreter, Transport},
    events::{translate, Action, InputEvent, Intent, KeypadEdit, Setting},
    log_buffer::{LogBuffer, DEFAULT_LOG_CAPACITY},
    pending::{PendingInput, DEFAULT_KEYPAD_MAX_LEN},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub log_capacity: usize,
    pub keypad_max_len: usize,
    pub terminator: LineTerminator,
    pub travel_distance: TravelDistance,
    pub feed_rate: FeedRate,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            log_capacity: DEFAULT_LOG_CAPACITY,
            keypad_max_len: DEFAULT_KEYPAD_MAX_LEN,
            terminator: LineTerminator::Lf,
            travel_distance: TravelDistance::default(),
            feed_rate: FeedRate::default(),
        }
    }
}

pub struct Console<I, T, S> {
    log: LogBuffer,
    state: CommandState,
    pending: PendingInput,
    selected_file: Option<String>,
    dispatcher: Dispatcher<I, T>,
    sink: S,
}

impl<I, T, S> Console<I, T, S>
where
    I: LocalInterpreter,
    T: Transport,
    S: DisplaySink,
{
    pub fn new(config: ConsoleConfig, interpreter: I, transport: T, sink: S) -> Self {
        Self {
            log: LogBuffer::new(config.log_capacity),
            state: CommandState::new(config.travel_distance, config.feed_rate),
            pending: PendingInput::new(config.keypad_max_len),
            selected_file: None,
            dispatcher: Dispatcher::new(interpreter, transport, config.terminator),
            sink,
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        let revision = self.log.revision();
        match translate(event) {
            Some(Intent::Act(action)) => self.run(&action),
            Some(Intent::Edit(edit)) => self.edit(edit),
            None => tracing::debug!(?event, "input event has no console action"),
        }
        self.refresh(revision);
    }

    pub fn handle(&mut self, action: &Action) {
        let revision = self.log.revision();
        self.run(action);
        self.refresh(revision);
    }

    /// Appends informational text that did not come from a command.
    pub fn note(&mut self, text: &str) {
        let revision = self.log.revision();
        self.log.append(text);
        self.refresh(revision);
    }

    pub fn log(&self) -> &LogBuffer {
        &self.log
    }

    pub fn state(&self) -> &CommandState {
        &self.state
    }

    pub fn pending(&self) -> &str {
        self.pending.as_str()
    }

    pub fn selected_file(&self) -> Option<&str> {
        self.selected_file.as_deref()
    }

    pub fn dispatcher(&self) -> &Dispatcher<I, T> {
        &self.dispatcher
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn run(&mut self, action: &Action) {
        if let Action::Configure(Setting::SelectedFile(name)) = action {
            self.selected_file = Some(name.clone());
        }

        match compose(&mut self.state, action) {
            Composition::Line(line) => {
                self.dispatcher.dispatch(&line, &mut self.log);
            }
            Composition::Sequence { lines, summary } => {
                self.dispatcher
                    .dispatch_sequence(&lines, &summary, &mut self.log);
            }
            Composition::Signal(signal) => self.dispatcher.signal(signal, &mut self.log),
            Composition::Echo(text) => {
                self.log.append(&text);
            }
        }
    }

    fn edit(&mut self, edit: KeypadEdit) {
        match edit {
            KeypadEdit::Insert(key) => {
                if !self.pending.insert(&key) {
                    tracing::debug!(key = %key, "keypad input is full; key dropped");
                }
            }
            KeypadEdit::Backspace => self.pending.backspace(),
            KeypadEdit::Clear => self.pending.clear(),
            KeypadEdit::Submit => self.submit_pending(),
        }
    }

    /// Dispatches the typed text and clears it before anything else can be
    /// composed, so the next submission starts empty.
    fn submit_pending(&mut self) {
        if self.pending.is_empty() {
            tracing::debug!("empty keypad submission ignored");
            return;
        }
        let text = self.pending.as_str().to_string();
        self.run(&Action::Raw(text));
        self.pending.clear();
    }

    fn refresh(&mut self, since: u64) {
        if self.log.revision() != since {
            self.sink.render(self.log.as_str());
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
