use console::{
    ChannelTransport, Console, ConsoleConfig, DisplaySink, EventKind, InputEvent, LineInterpreter,
    MachineState, MirrorFrame, Widget,
};
use crossbeam_channel::Receiver;
use shared::protocol::{ControlSignal, LineTerminator};

#[derive(Default)]
struct FrameSink {
    frames: Vec<String>,
}

impl DisplaySink for FrameSink {
    fn render(&mut self, text: &str) {
        self.frames.push(text.to_string());
    }
}

type PendantConsole = Console<LineInterpreter, ChannelTransport, FrameSink>;

fn pendant(config: ConsoleConfig) -> (PendantConsole, Receiver<MirrorFrame>) {
    let (transport, frames) = ChannelTransport::bounded(32);
    let console = Console::new(config, LineInterpreter::new(), transport, FrameSink::default());
    (console, frames)
}

fn press(console: &mut PendantConsole, widget: Widget, token: &str) {
    console.handle_event(&InputEvent::pressed(widget, token));
}

fn mirrored(frames: &Receiver<MirrorFrame>) -> Vec<u8> {
    frames.try_iter().flat_map(|frame| frame.to_bytes()).collect()
}

#[test]
fn reset_locks_out_jogs_until_unlocked() {
    let (mut console, frames) = pendant(ConsoleConfig::default());

    press(&mut console, Widget::JobPad, "RESET");
    press(&mut console, Widget::JogPad, "X+");
    press(&mut console, Widget::JobPad, "POWER");
    press(&mut console, Widget::JogPad, "X+");

    assert_eq!(
        console.log().as_str(),
        "Reset\n\
         G90G21X10F500\nerror:9 g-code locked out during alarm\n\
         $X\n\
         G90G21X10F500\n"
    );
    assert_eq!(console.dispatcher().interpreter().state(), MachineState::Idle);

    let bytes = mirrored(&frames);
    assert_eq!(ControlSignal::from_byte(bytes[0]), Some(ControlSignal::SoftReset));
    assert_eq!(&bytes[1..], b"G90G21X10F500\n$X\nG90G21X10F500\n");
    assert_eq!(console.sink().frames.len(), 4);
}

#[test]
fn typed_command_is_transmitted_with_configured_terminator() {
    let config = ConsoleConfig {
        terminator: LineTerminator::CrLf,
        ..ConsoleConfig::default()
    };
    let (mut console, frames) = pendant(config);

    for key in "G0X1.5".chars() {
        press(&mut console, Widget::Keypad, &key.to_string());
    }
    assert_eq!(console.pending(), "G0X1.5");
    assert!(console.sink().frames.is_empty());

    press(&mut console, Widget::Keypad, "OK");
    assert_eq!(console.pending(), "");
    assert_eq!(console.log().as_str(), "G0X1.5\n");
    assert_eq!(mirrored(&frames), b"G0X1.5\r\n".to_vec());
}

#[test]
fn long_session_keeps_the_log_bounded_and_line_aligned() {
    let config = ConsoleConfig {
        log_capacity: 64,
        ..ConsoleConfig::default()
    };
    let (mut console, frames) = pendant(config);

    for round in 0..40 {
        let label = if round % 2 == 0 { "Y+" } else { "-Y" };
        press(&mut console, Widget::JogPad, label);
        assert!(console.log().len() <= 64);
    }
    console.handle_event(&InputEvent::new(Widget::Keypad, EventKind::LongPressed, "<"));

    let log = console.log().as_str();
    assert!(log.ends_with("G90G21Y-10F500\n"));
    assert!(log.starts_with("G90G21Y"));
    assert_eq!(frames.try_iter().count(), 40);
    assert_eq!(console.sink().frames.last().map(String::as_str), Some(log));
}
