//! Delivery of contact messages
//!
//! There is no mail backend. Delivery waits a fixed delay, logs the message
//! and reports success.

use std::time::Duration;

use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle};

use crate::{
    action::Action,
    model::contact_form::{SubmitOutcome, Submission},
};

pub const SUBMIT_DELAY: Duration = Duration::from_millis(2000);

pub async fn deliver(submission: Submission) -> SubmitOutcome {
    tokio::time::sleep(SUBMIT_DELAY).await;
    log::info!(
        "Contact message from {} <{}>: {}",
        submission.name,
        submission.email,
        submission.subject
    );
    log::debug!("Contact message body: {}", submission.message);
    SubmitOutcome::Success
}

/// Delivers in the background and reports back with [`Action::ContactSubmitted`].
pub fn spawn_delivery(submission: Submission, tx: UnboundedSender<Action>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = deliver(submission).await;
        if tx.send(Action::ContactSubmitted(outcome)).is_err() {
            log::warn!("Contact message delivered after the app stopped listening");
        }
    })
}
