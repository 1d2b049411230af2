//! Recording doubles for the console collaborators. All three write into one
//! shared journal so tests can assert cross-collaborator ordering.

use std::{cell::RefCell, collections::HashSet, rc::Rc};

use shared::protocol::{ControlSignal, LineTerminator, StatusCode};

use crate::dispatcher::{DisplaySink, LocalInterpreter, Transport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Executed(String),
    Signalled(ControlSignal),
    Sent(String),
    SentSignal(u8),
    Rendered(String),
}

pub type Journal = Rc<RefCell<Vec<Entry>>>;

pub fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

pub struct RecordingInterpreter {
    journal: Journal,
    rejected: HashSet<String>,
}

impl RecordingInterpreter {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            rejected: HashSet::new(),
        }
    }

    pub fn rejecting(mut self, line: &str) -> Self {
        self.rejected.insert(line.to_string());
        self
    }
}

impl LocalInterpreter for RecordingInterpreter {
    fn execute(&mut self, line: &str) -> StatusCode {
        self.journal
            .borrow_mut()
            .push(Entry::Executed(line.to_string()));
        if self.rejected.contains(line) {
            StatusCode::UnsupportedCommand
        } else {
            StatusCode::Ok
        }
    }

    fn signal(&mut self, signal: ControlSignal) {
        self.journal.borrow_mut().push(Entry::Signalled(signal));
    }
}

pub struct RecordingTransport {
    journal: Journal,
}

impl RecordingTransport {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
        }
    }
}

impl Transport for RecordingTransport {
    fn send_line(&self, line: &str, terminator: LineTerminator) {
        self.journal
            .borrow_mut()
            .push(Entry::Sent(format!("{line}{}", terminator.as_str())));
    }

    fn send_signal(&self, signal: ControlSignal) {
        self.journal
            .borrow_mut()
            .push(Entry::SentSignal(signal.byte()));
    }
}

pub struct RecordingSink {
    journal: Journal,
}

impl RecordingSink {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
        }
    }
}

impl DisplaySink for RecordingSink {
    fn render(&mut self, text: &str) {
        self.journal
            .borrow_mut()
            .push(Entry::Rendered(text.to_string()));
    }
}

pub fn entries(journal: &Journal) -> Vec<Entry> {
    journal.borrow().clone()
}
