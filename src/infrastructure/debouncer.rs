use std::time::Duration;

use log::debug;
use tokio::{
    sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel},
    time::sleep,
};

/// The default quiet period before a query is dispatched.
pub const DEFAULT_DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// A delay stage that only lets a value through once no newer value arrived for `delay`.
pub struct Debouncer {
    /// The quiet period required before dispatching
    delay: Duration,
}

impl Debouncer {
    /// Creates a new `Debouncer` instance with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Spawns the delay stage, returning its input and output channels.
    ///
    /// A value sent on the input is forwarded to the output once the quiet period elapsed
    /// without a newer value. A newer value cancels the pending one. When the input is
    /// closed, the pending value is flushed and the output is closed.
    pub fn spawn<T: Send + 'static>(self) -> (UnboundedSender<T>, UnboundedReceiver<T>) {
        let (input_tx, mut input_rx) = unbounded_channel::<T>();
        let (output_tx, output_rx) = unbounded_channel::<T>();
        let delay = self.delay;
        tokio::spawn(async move {
            while let Some(mut pending) = input_rx.recv().await {
                let input_closed = loop {
                    tokio::select! {
                        next = input_rx.recv() => match next {
                            Some(value) => {
                                debug!("Debounced input superseded");
                                pending = value;
                            }
                            None => break true,
                        },
                        _ = sleep(delay) => break false,
                    }
                };
                if output_tx.send(pending).is_err() || input_closed {
                    return;
                }
            }
        });

        (input_tx, output_rx)
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_DELAY)
    }
}
