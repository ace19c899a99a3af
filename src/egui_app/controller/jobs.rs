use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use crate::sentiment_api::{self, CommentPayload, SentimentEnvelope, ServiceError, StatsSnapshot};

pub(crate) type TryRecvError = std::sync::mpsc::TryRecvError;

/// Completion messages posted by worker threads and drained once per frame.
pub(crate) enum JobMessage {
    CommentSubmitted(Result<String, ServiceError>),
    StatsFetched(Result<StatsSnapshot, ServiceError>),
}

/// Owns the job channel and the single-flight guards for both operations.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    submit_in_progress: bool,
    stats_fetch_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            submit_in_progress: false,
            stats_fetch_in_progress: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    /// Spawn the comment submission worker. No-op while one is in flight.
    pub(super) fn begin_submit(
        &mut self,
        base_url: String,
        envelope: SentimentEnvelope,
        payload: CommentPayload,
    ) {
        if self.submit_in_progress {
            return;
        }
        self.submit_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = sentiment_api::submit_comment(&base_url, envelope, &payload);
            // Receiver may be gone if the window closed; the result is then discarded.
            let _ = tx.send(JobMessage::CommentSubmitted(result));
        });
    }

    pub(super) fn clear_submit(&mut self) {
        self.submit_in_progress = false;
    }

    pub(super) fn submit_in_progress(&self) -> bool {
        self.submit_in_progress
    }

    /// Spawn the stats fetch worker. No-op while one is in flight.
    pub(super) fn begin_stats_fetch(&mut self, base_url: String) {
        if self.stats_fetch_in_progress {
            return;
        }
        self.stats_fetch_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = sentiment_api::fetch_insights(&base_url);
            let _ = tx.send(JobMessage::StatsFetched(result));
        });
    }

    pub(super) fn clear_stats_fetch(&mut self) {
        self.stats_fetch_in_progress = false;
    }

    pub(super) fn stats_fetch_in_progress(&self) -> bool {
        self.stats_fetch_in_progress
    }

    /// Test hook: inject a completion message as if a worker had finished.
    #[cfg(test)]
    pub(crate) fn push_message(&self, message: JobMessage) {
        self.message_tx
            .send(message)
            .expect("job channel open in tests");
    }
}
