//! Operator console core: bounded log, jog parameters, command composition and
//! dispatch to the local interpreter and the mirror transport.

pub mod clock;
pub mod command_state;
pub mod composer;
pub mod dispatcher;
pub mod events;
pub mod interpreter;
pub mod log_buffer;
pub mod pending;
pub mod session;
pub mod transport;

pub use clock::{spawn_ticker, RedrawClock, RedrawPacer};
pub use command_state::CommandState;
pub use dispatcher::{Dispatched, Dispatcher, DisplaySink, LocalInterpreter, Transport};
pub use events::{Action, EventKind, InputEvent, Setting, Widget};
pub use interpreter::{LineInterpreter, MachineState};
pub use log_buffer::{AppendOutcome, LogBuffer};
pub use session::{Console, ConsoleConfig};
pub use transport::{ChannelTransport, MirrorFrame};

#[cfg(test)]
pub(crate) mod test_support;
