#[allow(unused_imports)]
use crate::prelude::*;

pub mod frame;
pub mod message;

use crate::config::Config;
use crate::utils::keymap::{DefaultAction, bound_event, default_action};
use frame::{Frame, Screen};
use message::HostMessage;

use std::io::{BufRead, Write};
use std::sync::mpsc::{Receiver, Sender};

use wordfind_core::{Controller, Dictionary, Event, Outcome};

/// Everything the main loop can receive.
#[derive(Debug)]
pub enum Message {
    Line(String),
    /// A line that could not be decoded as UTF-8
    Malformed(String),
    Dataset(Result<Dictionary>),
    StdinClosed,
}

/// Result of handling one host message.
#[derive(Debug, PartialEq)]
pub enum Step {
    Frame(Frame),
    Exit,
}

/// Owns the controller and the screen it renders into.
pub struct Host {
    controller: Controller,
    screen: Screen,
    config: Config,
}

impl Host {
    pub fn new(config: Config) -> Self {
        Self {
            controller: Controller::new(),
            screen: Screen::new(config.render.clone()),
            config,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.controller.is_ready()
    }

    pub fn attach_dictionary(&mut self, dictionary: Dictionary) -> Result<()> {
        self.controller.attach_dictionary(dictionary)?;
        Ok(())
    }

    pub fn frame(&self, default_prevented: bool, submitted: bool) -> Frame {
        self.screen
            .frame(self.is_ready(), default_prevented, submitted)
    }

    pub fn handle(&mut self, message: HostMessage) -> Result<Step> {
        let (outcome, submitted) = match message {
            HostMessage::Exit => return Ok(Step::Exit),
            HostMessage::Input { value } => {
                self.screen.input.set_value(&value);
                (self.query_changed(), false)
            }
            HostMessage::Insert { text } => {
                self.screen.input.insert(&text);
                (self.query_changed(), false)
            }
            HostMessage::Backspace => {
                if self.screen.input.delete_backward() {
                    (self.query_changed(), false)
                } else {
                    (Outcome::inert(), false)
                }
            }
            HostMessage::Delete => {
                if self.screen.input.delete_forward() {
                    (self.query_changed(), false)
                } else {
                    (Outcome::inert(), false)
                }
            }
            HostMessage::Key { key } => self.key_pressed(&key),
            HostMessage::Click { index } => {
                let word = self
                    .controller
                    .results()
                    .get(index)
                    .cloned()
                    .ok_or(Error::NoSuchItem(index))?;
                (self.dispatch(Event::ItemActivated(word)), false)
            }
        };
        Ok(Step::Frame(self.frame(outcome.prevent_default, submitted)))
    }

    fn query_changed(&mut self) -> Outcome {
        let value = self.screen.input.value();
        self.dispatch(Event::QueryChanged(value))
    }

    fn key_pressed(&mut self, key: &str) -> (Outcome, bool) {
        let outcome = match bound_event(key, &self.config.keys) {
            Some(event) => self.dispatch(event),
            None => Outcome::inert(),
        };
        let mut submitted = false;
        if !outcome.prevent_default {
            match default_action(key) {
                DefaultAction::Cursor(movement) => self.screen.input.move_cursor(movement),
                DefaultAction::Submit => submitted = true,
                DefaultAction::Nothing => {}
            }
        }
        (outcome, submitted)
    }

    fn dispatch(&mut self, event: Event) -> Outcome {
        let outcome = self.controller.dispatch(event);
        outcome.apply_to(&mut self.screen);
        outcome
    }
}

fn write_frame<W: Write>(out: &mut W, frame: &Frame) -> Result<()> {
    serde_json::to_writer(&mut *out, frame)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Forward every line of `reader` to the loop, then `StdinClosed`. Lines that
/// are not UTF-8 are passed on as `Malformed` so one bad line does not end the
/// session.
pub fn forward_lines<R: BufRead>(mut reader: R, sender: &Sender<Message>) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        let message = match String::from_utf8(buf.clone()) {
            Ok(line) => Message::Line(line),
            Err(err) => Message::Malformed(err.to_string()),
        };
        sender
            .send(message)
            .map_err(|err| Error::SendError(err.to_string()))?;
    }
    sender
        .send(Message::StdinClosed)
        .map_err(|err| Error::SendError(err.to_string()))
}

/// Drain `receiver` until stdin closes or the host asks to exit, writing one
/// frame per handled message.
pub fn run<W: Write>(receiver: &Receiver<Message>, host: &mut Host, out: &mut W) -> Result<()> {
    let mut seq = 0usize;
    for msg in receiver {
        match msg {
            Message::Dataset(Ok(dictionary)) => {
                if let Err(err) = host.attach_dictionary(dictionary) {
                    log_handler_error!("Dataset", err);
                    continue;
                }
                log_debug!("Search enabled");
                write_frame(out, &host.frame(false, false))?;
            }
            Message::Dataset(Err(err)) => {
                log_handler_error!("Dataset", err);
            }
            Message::Line(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                seq += 1;
                let message = match HostMessage::parse(&line) {
                    Ok(message) => message,
                    Err(err) => {
                        log_handler_error!("Parse", err);
                        continue;
                    }
                };
                log_event!(seq, message);
                match host.handle(message) {
                    Ok(Step::Frame(frame)) => write_frame(out, &frame)?,
                    Ok(Step::Exit) => return Ok(()),
                    Err(err) => {
                        log_handler_error!("Message", err);
                    }
                }
            }
            Message::Malformed(reason) => {
                log_handler_error!("Read", reason);
            }
            Message::StdinClosed => return Ok(()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn sample() -> Dictionary {
        [
            ("cat", "a feline"),
            ("car", "a vehicle"),
            ("cart", "a wheeled container"),
        ]
        .into_iter()
        .collect()
    }

    fn ready_host() -> Host {
        let mut host = Host::new(Config::default());
        host.attach_dictionary(sample()).unwrap();
        host
    }

    fn frame(step: Step) -> Frame {
        match step {
            Step::Frame(frame) => frame,
            Step::Exit => panic!("expected a frame"),
        }
    }

    fn key(host: &mut Host, name: &str) -> Frame {
        frame(
            host.handle(HostMessage::Key {
                key: name.to_string(),
            })
            .unwrap(),
        )
    }

    fn words(frame: &Frame) -> Vec<&str> {
        frame.items.iter().map(|item| item.word.as_str()).collect()
    }

    fn selected(frame: &Frame) -> Option<&str> {
        frame
            .items
            .iter()
            .find(|item| item.selected)
            .map(|item| item.word.as_str())
    }

    #[test]
    fn test_typing_renders_highlighted_list() {
        let mut host = ready_host();
        host.handle(HostMessage::Insert {
            text: "c".to_string(),
        })
        .unwrap();
        let frame = frame(
            host.handle(HostMessage::Insert {
                text: "a".to_string(),
            })
            .unwrap(),
        );
        assert_eq!(words(&frame), vec!["car", "cart", "cat"]);
        assert_eq!(selected(&frame), Some("car"));
        assert_eq!(frame.items[1].markup, "<strong>ca</strong>rt");
        assert_eq!(frame.input.value, "ca");
    }

    #[test]
    fn test_navigate_and_commit() {
        let mut host = ready_host();
        host.handle(HostMessage::Input {
            value: "ca".to_string(),
        })
        .unwrap();

        let frame = key(&mut host, "ArrowDown");
        assert!(frame.default_prevented);
        // Cursor stays where typing left it
        assert_eq!(frame.input.cursor, 2);
        assert_eq!(selected(&frame), Some("cart"));

        key(&mut host, "ArrowDown");
        let frame = key(&mut host, "ArrowDown");
        assert_eq!(selected(&frame), Some("cat"));

        let frame = key(&mut host, "Enter");
        assert!(frame.default_prevented);
        assert!(!frame.submitted);
        assert!(frame.items.is_empty());
        assert_eq!(frame.input.value, "cat");
        let definition = frame.definition.unwrap();
        assert_eq!(definition.title, "cat");
        assert_eq!(definition.body, "a feline");
    }

    #[test]
    fn test_arrow_up_prevented_even_without_move() {
        let mut host = ready_host();
        host.handle(HostMessage::Input {
            value: "ca".to_string(),
        })
        .unwrap();
        host.handle(HostMessage::Key {
            key: "ArrowLeft".to_string(),
        })
        .unwrap();
        let frame = key(&mut host, "ArrowUp");
        assert!(frame.default_prevented);
        assert_eq!(frame.input.cursor, 1);
        assert_eq!(selected(&frame), Some("car"));
    }

    #[test]
    fn test_keys_before_load_keep_defaults() {
        let mut host = Host::new(Config::default());
        let frame = frame(
            host.handle(HostMessage::Input {
                value: "ca".to_string(),
            })
            .unwrap(),
        );
        assert!(!frame.ready);
        assert!(frame.items.is_empty());
        assert_eq!(frame.input.value, "ca");

        let frame = key(&mut host, "ArrowUp");
        assert!(!frame.default_prevented);
        assert_eq!(frame.input.cursor, 0);

        let frame = key(&mut host, "Enter");
        assert!(frame.submitted);
    }

    #[test]
    fn test_load_does_not_refilter_existing_input() {
        let mut host = Host::new(Config::default());
        host.handle(HostMessage::Input {
            value: "ca".to_string(),
        })
        .unwrap();
        host.attach_dictionary(sample()).unwrap();
        let frame = host.frame(false, false);
        assert!(frame.ready);
        assert!(frame.items.is_empty());

        let frame = frame_of(&mut host, HostMessage::Backspace);
        assert_eq!(words(&frame), vec!["car", "cart", "cat"]);
    }

    fn frame_of(host: &mut Host, message: HostMessage) -> Frame {
        frame(host.handle(message).unwrap())
    }

    #[test]
    fn test_click_picks_word() {
        let mut host = ready_host();
        frame_of(
            &mut host,
            HostMessage::Input {
                value: "ca".to_string(),
            },
        );
        let frame = frame_of(&mut host, HostMessage::Click { index: 2 });
        assert!(!frame.default_prevented);
        assert_eq!(frame.input.value, "cat");
        assert!(frame.items.is_empty());
        assert_eq!(frame.definition.unwrap().title, "cat");
    }

    #[test]
    fn test_click_out_of_range() {
        let mut host = ready_host();
        frame_of(
            &mut host,
            HostMessage::Input {
                value: "ca".to_string(),
            },
        );
        let err = host.handle(HostMessage::Click { index: 7 }).unwrap_err();
        assert!(matches!(err, Error::NoSuchItem(7)));
    }

    #[test]
    fn test_typing_clears_definition() {
        let mut host = ready_host();
        frame_of(
            &mut host,
            HostMessage::Input {
                value: "car".to_string(),
            },
        );
        key(&mut host, "Enter");
        let frame = frame_of(
            &mut host,
            HostMessage::Insert {
                text: "t".to_string(),
            },
        );
        assert_eq!(frame.definition, None);
        assert_eq!(words(&frame), vec!["cart"]);

        let frame = frame_of(
            &mut host,
            HostMessage::Input {
                value: " ".to_string(),
            },
        );
        assert!(frame.items.is_empty());
        assert_eq!(frame.definition, None);
    }

    #[test]
    fn test_backspace_on_empty_field_is_inert() {
        let mut host = ready_host();
        let frame = frame_of(&mut host, HostMessage::Backspace);
        assert_eq!(frame.input.value, "");
        assert!(frame.items.is_empty());
    }

    #[test]
    fn test_second_dictionary_rejected() {
        let mut host = ready_host();
        let err = host.attach_dictionary(sample()).unwrap_err();
        assert!(matches!(err, Error::Controller(_)));
    }

    #[test]
    fn test_run_loop_writes_frames() {
        let (sender, receiver) = mpsc::channel();
        sender
            .send(Message::Line(r#"{"type":"input","value":"ca"}"#.to_string()))
            .unwrap();
        sender.send(Message::Dataset(Ok(sample()))).unwrap();
        sender.send(Message::Line("garbage".to_string())).unwrap();
        sender.send(Message::Line(String::new())).unwrap();
        sender
            .send(Message::Line(r#"{"type":"input","value":"car"}"#.to_string()))
            .unwrap();
        sender
            .send(Message::Line(r#"{"type":"exit"}"#.to_string()))
            .unwrap();
        sender
            .send(Message::Line(r#"{"type":"input","value":"x"}"#.to_string()))
            .unwrap();

        let mut host = Host::new(Config::default());
        let mut out = Vec::new();
        run(&receiver, &mut host, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let frames: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0]["ready"], false);
        assert_eq!(frames[1]["ready"], true);
        assert_eq!(frames[2]["items"][0]["word"], "car");
        assert_eq!(frames[2]["items"][1]["word"], "cart");
        assert_eq!(frames[2]["items"][0]["selected"], true);
    }

    #[test]
    fn test_run_loop_continues_after_failed_message() {
        let (sender, receiver) = mpsc::channel();
        sender.send(Message::Dataset(Ok(sample()))).unwrap();
        sender
            .send(Message::Line(r#"{"type":"input","value":"ca"}"#.to_string()))
            .unwrap();
        sender
            .send(Message::Line(r#"{"type":"click","index":9}"#.to_string()))
            .unwrap();
        sender
            .send(Message::Line(r#"{"type":"click","index":0}"#.to_string()))
            .unwrap();
        sender.send(Message::StdinClosed).unwrap();

        let mut host = Host::new(Config::default());
        let mut out = Vec::new();
        run(&receiver, &mut host, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let frames: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        // ready, "ca", then the valid click; the bad index writes nothing
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[2]["definition"]["title"], "car");
        assert_eq!(frames[2]["input"]["value"], "car");
    }

    #[test]
    fn test_forward_lines_passes_bad_utf8_on() {
        let input: &[u8] = b"{\"type\":\"input\",\"value\":\"c\"}\n\xff\n{\"type\":\"input\",\"value\":\"ca\"}\r\n";
        let (sender, receiver) = mpsc::channel();
        forward_lines(input, &sender).unwrap();
        drop(sender);

        let messages: Vec<Message> = receiver.iter().collect();
        assert_eq!(messages.len(), 4);
        assert!(matches!(&messages[0], Message::Line(line) if line.ends_with("\"c\"}")));
        assert!(matches!(&messages[1], Message::Malformed(_)));
        assert!(matches!(&messages[2], Message::Line(line) if line.ends_with("\"ca\"}")));
        assert!(matches!(&messages[3], Message::StdinClosed));
    }

    #[test]
    fn test_run_loop_survives_bad_utf8_line() {
        let input: &[u8] = b"{\"type\":\"input\",\"value\":\"c\"}\n\xff\n{\"type\":\"input\",\"value\":\"ca\"}\n";
        let (sender, receiver) = mpsc::channel();
        sender.send(Message::Dataset(Ok(sample()))).unwrap();
        forward_lines(input, &sender).unwrap();

        let mut host = Host::new(Config::default());
        let mut out = Vec::new();
        run(&receiver, &mut host, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let frames: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[2]["input"]["value"], "ca");
        assert_eq!(frames[2]["items"][0]["word"], "car");
    }

    #[test]
    fn test_run_loop_survives_failed_load() {
        let (sender, receiver) = mpsc::channel();
        sender
            .send(Message::Dataset(Err(Error::DatasetLoad {
                path: "dictionary.json".to_string(),
                reason: "missing".to_string(),
            })))
            .unwrap();
        sender
            .send(Message::Line(r#"{"type":"input","value":"ca"}"#.to_string()))
            .unwrap();
        sender.send(Message::StdinClosed).unwrap();

        let mut host = Host::new(Config::default());
        let mut out = Vec::new();
        run(&receiver, &mut host, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.lines().count(), 1);
        assert!(!host.is_ready());
    }
}
