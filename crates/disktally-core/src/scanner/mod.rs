/// Scanner module — walks a tree into a flat record list.
///
/// [`walk`] is the blocking, single-threaded entry point. [`start_scan`] runs
/// the same walk on a background thread and streams progress over a bounded
/// crossbeam channel, so a frontend can show activity or give up after a
/// deadline. There is no cancellation token: a caller that stops waiting
/// simply abandons the worker, which finishes its walk and exits.
pub mod progress;
pub mod walker;

pub use walker::{walk, walk_with_progress, ScanOutcome};

use crossbeam_channel::{Receiver, RecvTimeoutError};
use progress::ScanProgress;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, trace};

/// Maximum number of progress messages that may queue up in the channel.
///
/// [`ScanHandle::wait`] drains continuously, so this only bounds memory if
/// the consumer stalls; the walker then blocks on `send` rather than growing
/// the queue without limit.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 4_096;

/// Failures of the background scan wrapper. The walk itself cannot fail.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to spawn scanner thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("scan did not finish within {0:?}")]
    TimedOut(Duration),

    #[error("scanner thread exited without reporting a result")]
    WorkerLost,
}

/// Handle to a running or completed background scan.
pub struct ScanHandle {
    /// Receiver for progress updates and the final result.
    pub progress_rx: Receiver<ScanProgress>,
    /// Join handle for the scan thread; detached when the handle is dropped.
    _thread: thread::JoinHandle<()>,
}

/// Start a walk of `root` on a background thread.
pub fn start_scan(root: PathBuf, follow_symlinks: bool) -> Result<ScanHandle, ScanError> {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<ScanProgress>(PROGRESS_CHANNEL_CAPACITY);

    let thread = thread::Builder::new()
        .name("disktally-scanner".into())
        .spawn(move || {
            let start = Instant::now();
            let outcome = walker::walk_with_progress(&root, follow_symlinks, Some(&progress_tx));
            let _ = progress_tx.send(ScanProgress::Complete {
                duration: start.elapsed(),
                outcome,
            });
        })
        .map_err(ScanError::Spawn)?;

    Ok(ScanHandle {
        progress_rx,
        _thread: thread,
    })
}

impl ScanHandle {
    /// Block until the scan completes, or until `timeout` elapses.
    ///
    /// Progress messages received in the meantime are logged. On timeout the
    /// handle is consumed and the worker is left to finish on its own.
    pub fn wait(self, timeout: Option<Duration>) -> Result<ScanOutcome, ScanError> {
        let deadline = timeout.map(|t| (t, Instant::now() + t));

        loop {
            let msg = match deadline {
                Some((limit, at)) => self.progress_rx.recv_deadline(at).map_err(|err| match err {
                    RecvTimeoutError::Timeout => ScanError::TimedOut(limit),
                    RecvTimeoutError::Disconnected => ScanError::WorkerLost,
                })?,
                None => self.progress_rx.recv().map_err(|_| ScanError::WorkerLost)?,
            };

            match msg {
                ScanProgress::Update {
                    files_found,
                    dirs_found,
                    total_size,
                    current_path,
                } => {
                    debug!("Scanning: {files_found} files, {dirs_found} dirs, {total_size} bytes, at {current_path}");
                }
                ScanProgress::Skipped { path, message } => {
                    trace!("Skipped {path}: {message}");
                }
                ScanProgress::Complete { duration, outcome } => {
                    info!("Background scan finished in {duration:?}");
                    return Ok(outcome);
                }
            }
        }
    }
}
