//! Stdin input collaborator: turns operator lines into the same normalized
//! widget events a touch panel would produce.

use std::{
    io::BufRead,
    thread::{self, JoinHandle},
};

use console::{EventKind, InputEvent, Widget};
use crossbeam_channel::Sender;
use shared::domain::TravelDistance;

pub const HELP: &str = "\
commands:
  jog <X+|-X|Y+|-Y|Z+|Z->   jog one step
  home                      home X then Y
  key <label> | key space   press a keypad key
  hold <label>              long-press a keypad key (hold < clears)
  ok                        submit typed text
  type <text>               press one key per character
  send <text>               type then submit
  unlock | pause | reset    job controls
  distance <50|10|5.0|1.0|0.1|0.01>
  feed <10..2000>
  file <name|index>         select a job file
  jobs | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatorInput {
    Events(Vec<InputEvent>),
    Jobs,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_operator_line(line: &str, jobs: &[String]) -> OperatorInput {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    let (verb, rest) = match trimmed.split_once(' ') {
        Some((verb, rest)) => (verb, rest),
        None => (trimmed, ""),
    };
    let arg = rest.trim();

    let single = |event: InputEvent| OperatorInput::Events(vec![event]);

    match verb.to_ascii_lowercase().as_str() {
        "" => OperatorInput::Events(Vec::new()),
        "quit" | "exit" => OperatorInput::Quit,
        "help" | "?" => OperatorInput::Help,
        "jobs" => OperatorInput::Jobs,
        "home" => single(InputEvent::pressed(Widget::JogPad, "HOME")),
        "jog" if !arg.is_empty() => single(InputEvent::pressed(Widget::JogPad, arg)),
        "key" if !arg.is_empty() => single(InputEvent::pressed(Widget::Keypad, key_label(arg))),
        "hold" if !arg.is_empty() => single(InputEvent::new(
            Widget::Keypad,
            EventKind::LongPressed,
            key_label(arg),
        )),
        "ok" => single(InputEvent::pressed(Widget::Keypad, "OK")),
        "type" => OperatorInput::Events(key_presses(rest)),
        "send" => {
            let mut events = key_presses(rest);
            events.push(InputEvent::pressed(Widget::Keypad, "OK"));
            OperatorInput::Events(events)
        }
        "unlock" => single(InputEvent::pressed(Widget::JobPad, "POWER")),
        "pause" => single(InputEvent::pressed(Widget::JobPad, "PAUSE")),
        "reset" => single(InputEvent::pressed(Widget::JobPad, "RESET")),
        "distance" if TravelDistance::from_label(arg).is_some() => {
            single(InputEvent::changed(Widget::DistanceList, arg))
        }
        "distance" => OperatorInput::Unknown(format!(
            "travel distance must be one of {}",
            TravelDistance::options().replace('\n', ", ")
        )),
        "feed" if !arg.is_empty() => single(InputEvent::changed(Widget::FeedSlider, arg)),
        "file" if !arg.is_empty() => match resolve_job(arg, jobs) {
            Some(name) => single(InputEvent::changed(Widget::FileList, name)),
            None => OperatorInput::Unknown(format!("no job file named '{arg}'")),
        },
        _ => OperatorInput::Unknown(format!("unrecognized input '{trimmed}'")),
    }
}

fn key_label(arg: &str) -> &str {
    if arg.eq_ignore_ascii_case("space") {
        " "
    } else {
        arg
    }
}

fn key_presses(text: &str) -> Vec<InputEvent> {
    text.chars()
        .map(|key| InputEvent::pressed(Widget::Keypad, key.to_string()))
        .collect()
}

/// Accepts an exact listed name or a 1-based index into the listing.
fn resolve_job<'a>(arg: &str, jobs: &'a [String]) -> Option<&'a str> {
    if let Some(name) = jobs.iter().find(|name| name.as_str() == arg) {
        return Some(name);
    }
    let index: usize = arg.parse().ok()?;
    jobs.get(index.checked_sub(1)?).map(String::as_str)
}

/// Reads operator lines until EOF, which is reported as `Quit`.
pub fn spawn_reader<R>(reader: R, jobs: Vec<String>, tx: Sender<OperatorInput>) -> JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || {
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(error) => {
                    tracing::warn!(%error, "failed to read operator input");
                    break;
                }
            };
            let input = parse_operator_line(&line, &jobs);
            let quit = input == OperatorInput::Quit;
            if tx.send(input).is_err() || quit {
                return;
            }
        }
        let _ = tx.send(OperatorInput::Quit);
    })
}

#[cfg(test)]
#[path = "tests/input_tests.rs"]
mod tests;
