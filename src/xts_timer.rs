// Elapsed-time clock running on its own thread
// The clock only ever paints its status line, never the board

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Sender, select, tick};
use tracing::{debug, warn};

use crate::xts_render::Painter;
use crate::xts_surface::{RenderLock, Surface};

/// Handle to a running clock thread
///
/// Dropping the sender closes the channel, which every receiver sees at
/// once; `stop` does that and then joins. Calling `stop` again just returns
/// the same reading.
pub struct ElapsedTimer {
    done: Option<Sender<()>>,
    handle: Option<JoinHandle<u64>>,
    elapsed: u64,
}

impl ElapsedTimer {
    /// Spawn the clock; it paints `status(0)` right away and again after every tick
    pub fn start<S, F>(
        surface: Arc<RenderLock<S>>,
        painter: Painter,
        interval: Duration,
        status: F,
    ) -> Self
    where
        S: Surface + Send + 'static,
        F: Fn(u64) -> String + Send + 'static,
    {
        let (done_tx, done_rx) = crossbeam_channel::bounded::<()>(0);
        let handle = thread::spawn(move || {
            let ticker = tick(interval);
            let (col, row) = painter.clock_origin();
            let mut elapsed = 0u64;
            loop {
                let line = status(elapsed);
                let painted = surface.batch(|s| painter.paint_lines(s, col, row, &[line.as_str()]));
                if let Err(err) = painted {
                    warn!(%err, "clock repaint failed");
                }
                select! {
                    recv(ticker) -> _ => elapsed += 1,
                    recv(done_rx) -> _ => break,
                }
            }
            elapsed
        });
        debug!(?interval, "clock started");
        ElapsedTimer {
            done: Some(done_tx),
            handle: Some(handle),
            elapsed: 0,
        }
    }

    /// Cancel the clock and wait for its thread; returns the ticks counted
    pub fn stop(&mut self) -> u64 {
        drop(self.done.take());
        if let Some(handle) = self.handle.take() {
            match handle.join() {
                Ok(elapsed) => {
                    self.elapsed = elapsed;
                    debug!(elapsed, "clock stopped");
                }
                Err(_) => warn!("clock thread panicked"),
            }
        }
        self.elapsed
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for ElapsedTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
