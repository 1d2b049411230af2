//! Fire-and-forget mirror transport over a bounded crossbeam queue.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use shared::protocol::{ControlSignal, LineTerminator};

use crate::dispatcher::Transport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorFrame {
    /// A command line with its terminator already attached.
    Line(String),
    Signal(ControlSignal),
}

impl MirrorFrame {
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            MirrorFrame::Line(line) => line.as_bytes().to_vec(),
            MirrorFrame::Signal(signal) => vec![signal.byte()],
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChannelTransport {
    tx: Sender<MirrorFrame>,
}

impl ChannelTransport {
    pub fn new(tx: Sender<MirrorFrame>) -> Self {
        Self { tx }
    }

    pub fn bounded(capacity: usize) -> (Self, Receiver<MirrorFrame>) {
        let (tx, rx) = bounded(capacity);
        (Self::new(tx), rx)
    }

    fn enqueue(&self, frame: MirrorFrame) {
        let kind = match &frame {
            MirrorFrame::Line(_) => "line",
            MirrorFrame::Signal(_) => "signal",
        };
        match self.tx.try_send(frame) {
            Ok(()) => tracing::debug!(frame = kind, "queued console->mirror frame"),
            Err(TrySendError::Full(_)) => {
                tracing::warn!(frame = kind, "mirror queue is full; frame dropped")
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::warn!(frame = kind, "mirror writer disconnected; frame dropped")
            }
        }
    }
}

impl Transport for ChannelTransport {
    fn send_line(&self, line: &str, terminator: LineTerminator) {
        self.enqueue(MirrorFrame::Line(format!("{line}{}", terminator.as_str())));
    }

    fn send_signal(&self, signal: ControlSignal) {
        self.enqueue(MirrorFrame::Signal(signal));
    }
}
