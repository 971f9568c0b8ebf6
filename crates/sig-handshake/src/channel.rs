//! Rendezvous channels between the two parties.
//!
//! A send only completes once the receiving side has taken the value, so a
//! party can never observe an item before its peer actually produced it.
//! Every operation is bounded by a timeout, a peer which never shows up
//! fails the run instead of blocking it forever. A sender which times out
//! withdraws its value, so both sides agree that no handover took place.
use std::time::Duration;
use thiserror::Error;
use tokio::{
    sync::{mpsc, oneshot},
    time::{timeout_at, Instant},
};

#[derive(Debug, Error, PartialEq)]
pub enum ChannelError {
    /// The other end of the channel was dropped
    #[error("channel closed by peer")]
    Closed,
    /// No peer answered within the configured duration
    #[error("no peer after {0:?}")]
    Timeout(Duration),
}

/// Creates a rendezvous channel whose operations give up after `wait`.
pub fn rendezvous<T>(wait: Duration) -> (RendezvousSender<T>, RendezvousReceiver<T>) {
    let (tx, rx) = mpsc::channel(1);
    (
        RendezvousSender { inner: tx, wait },
        RendezvousReceiver { inner: rx, wait },
    )
}

#[derive(Debug)]
pub struct RendezvousSender<T> {
    inner: mpsc::Sender<(T, oneshot::Sender<()>)>,
    wait: Duration,
}

#[derive(Debug)]
pub struct RendezvousReceiver<T> {
    inner: mpsc::Receiver<(T, oneshot::Sender<()>)>,
    wait: Duration,
}

impl<T> RendezvousSender<T> {
    /// Hands the value over and waits until the receiver has taken it.
    pub async fn send(&self, value: T) -> Result<(), ChannelError> {
        let deadline = Instant::now() + self.wait;
        let (ack_tx, mut ack_rx) = oneshot::channel();

        timeout_at(deadline, self.inner.send((value, ack_tx)))
            .await
            .map_err(|_| ChannelError::Timeout(self.wait))?
            .map_err(|_| ChannelError::Closed)?;

        match timeout_at(deadline, &mut ack_rx).await {
            Ok(ack) => ack.map_err(|_| ChannelError::Closed),
            Err(_) => {
                // withdraw the value unless the receiver took it meanwhile
                ack_rx.close();
                ack_rx
                    .try_recv()
                    .map_err(|_| ChannelError::Timeout(self.wait))
            }
        }
    }
}

impl<T> RendezvousReceiver<T> {
    /// Waits for the next value and releases its sender. Values withdrawn by
    /// a sender which timed out are skipped.
    pub async fn recv(&mut self) -> Result<T, ChannelError> {
        let deadline = Instant::now() + self.wait;
        loop {
            let (value, ack) = timeout_at(deadline, self.inner.recv())
                .await
                .map_err(|_| ChannelError::Timeout(self.wait))?
                .ok_or(ChannelError::Closed)?;
            if ack.send(()).is_ok() {
                return Ok(value);
            }
        }
    }
}
