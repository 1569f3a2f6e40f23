#[macro_use]
mod utils;

mod config;
mod dataset;
mod error;
mod prelude;

use crate::config::Config;
use crate::dataset::spawn_loader;
use crate::prelude::*;
use crate::utils::host::{Host, Message, forward_lines, run};

use std::io;
use std::sync::mpsc::{self, Sender};
use std::thread;

fn main() -> Result<()> {
    // stdout carries frames; all logging goes to stderr.
    log_debug!("starting wordfind");

    let workspace_root = std::env::current_dir().ok();
    let config = Config::load_from_dir(workspace_root.as_deref());
    let dataset_path = config.dataset.resolve(workspace_root.as_deref());

    let (sender, receiver) = mpsc::channel();
    // Search stays disabled until this delivers; a failed load is only logged.
    spawn_loader(dataset_path, sender.clone(), Message::Dataset);
    spawn_stdin_reader(sender);

    let mut host = Host::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&receiver, &mut host, &mut out)?;

    log_debug!("shutting down");
    Ok(())
}

fn spawn_stdin_reader(sender: Sender<Message>) {
    thread::spawn(move || {
        if let Err(err) = forward_lines(io::stdin().lock(), &sender) {
            log_handler_error!("Stdin", err);
            // Still let the loop finish instead of waiting on the loader
            let _ = sender.send(Message::StdinClosed);
        }
    });
}
