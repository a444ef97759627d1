//! Background input reader.
//!
//! Blocking reads and escape-sequence assembly happen on a dedicated OS
//! thread, so the event loop only ever receives complete [`KeyInput`]s.

use std::{
    io::{self, Read},
    thread::{self, JoinHandle},
};

use selector_app::{KeyInput, keys};
use tokio::sync::mpsc;

/// Spawn the reader thread.
///
/// The thread exits quietly at end of input or once the receiving side is
/// dropped. A reader blocked on a read is reclaimed by process exit.
pub fn spawn<R>(input: R, tx: mpsc::Sender<KeyInput>) -> io::Result<JoinHandle<()>>
where
    R: Read + Send + 'static,
{
    thread::Builder::new().name("selector-input".into()).spawn(move || {
        for key in keys(input) {
            if tx.blocking_send(key).is_err() {
                tracing::debug!("event loop gone, input reader exiting");
                return;
            }
        }
        tracing::debug!("end of input, input reader exiting");
    })
}
