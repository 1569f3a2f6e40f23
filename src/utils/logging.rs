//! Logging utilities. Everything goes to stderr; stdout carries frames only.

/// Log an incoming host message with its sequence number
#[macro_export]
macro_rules! log_event {
    ($seq:expr, $msg:expr) => {
        eprintln!("#{}: {:?}", $seq, $msg);
    };
}

/// Log a message handler error
#[macro_export]
macro_rules! log_handler_error {
    ($handler:expr, $err:expr) => {
        eprintln!("{} handler error: {:?}", $handler, $err);
    };
}

/// Log a debug message
#[macro_export]
macro_rules! log_debug {
    ($msg:expr) => {
        eprintln!("{}", $msg);
    };
    ($fmt:expr, $($arg:tt)*) => {
        eprintln!($fmt, $($arg)*);
    };
}
