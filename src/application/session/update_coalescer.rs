use crate::shared::Result;
use std::time::Duration;
use tokio::sync::mpsc;

/// Window used when the configuration does not set one
pub const DEFAULT_COALESCE_WINDOW: Duration = Duration::from_millis(250);

/// Trailing coalescing of update bursts
///
/// Every received update restarts the window; once the window passes without
/// a newer update, only the latest value is flushed. A value still pending
/// when the channel closes is flushed before returning.
#[derive(Debug, Clone, Copy)]
pub struct UpdateCoalescer {
    window: Duration,
}

impl UpdateCoalescer {
    pub fn new(window: Duration) -> Self {
        Self { window }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Drains `updates` until the channel closes, returning the number of flushes
    ///
    /// # Errors
    /// Stops at the first error returned by `flush` and propagates it.
    pub async fn run<T, F>(&self, mut updates: mpsc::Receiver<T>, mut flush: F) -> Result<usize>
    where
        F: FnMut(T) -> Result<()>,
    {
        let mut flushed = 0;

        while let Some(first) = updates.recv().await {
            let mut latest = first;
            let mut closed = false;

            loop {
                match tokio::time::timeout(self.window, updates.recv()).await {
                    Ok(Some(newer)) => latest = newer,
                    Ok(None) => {
                        closed = true;
                        break;
                    }
                    Err(_elapsed) => break,
                }
            }

            flush(latest)?;
            flushed += 1;

            if closed {
                break;
            }
        }

        Ok(flushed)
    }
}

impl Default for UpdateCoalescer {
    fn default() -> Self {
        Self::new(DEFAULT_COALESCE_WINDOW)
    }
}
