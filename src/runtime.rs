//! API worker runtime
//!
//! A single tokio task owns the backend client. The UI sends it [`Action`]s
//! over a bounded channel; it answers with [`Event`]s. After every mutation
//! the worker refetches the full user list rather than patching the one
//! changed record, so the UI state is always a fresh server snapshot.

use crate::api::UserApi;
use crate::consts::cli_consts::{ACTION_QUEUE_SIZE, EVENT_QUEUE_SIZE};
use crate::events::{Event, EventType, LogEvent, Phase};
use crate::logging::LogLevel;
use crate::user::Role;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// A user-triggered operation, queued for the API worker. Actions run
/// strictly one at a time, in arrival order.
#[derive(Debug, Clone)]
pub enum Action {
    /// Refetch the full user list.
    Load,
    /// Commit an edit. Email is not updatable through the backend.
    Update {
        id: String,
        name: String,
        role: Role,
    },
    /// Delete a single user.
    DeleteOne { id: String },
    /// Delete every selected user, sequentially, in selection order.
    DeleteSelected { ids: Vec<String> },
}

/// Event sending utilities for the API worker.
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }

    pub async fn send_phase(&self, phase: Phase) {
        let _ = self.sender.send(Event::Phase(phase)).await;
    }

    pub async fn send_fetch_log(&self, message: String, event_type: EventType, level: LogLevel) {
        let _ = self
            .sender
            .send(Event::Log(LogEvent::fetcher_with_level(
                message, event_type, level,
            )))
            .await;
    }

    pub async fn send_mutation_log(&self, message: String, event_type: EventType, level: LogLevel) {
        let _ = self
            .sender
            .send(Event::Log(LogEvent::mutator_with_level(
                message, event_type, level,
            )))
            .await;
    }
}

/// Start the API worker. Returns the action sender, the event receiver, and
/// the worker's join handle.
pub fn start_api_worker(
    api: Box<dyn UserApi>,
    mut shutdown: broadcast::Receiver<()>,
) -> (mpsc::Sender<Action>, mpsc::Receiver<Event>, JoinHandle<()>) {
    let (action_sender, mut action_receiver) = mpsc::channel::<Action>(ACTION_QUEUE_SIZE);
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let events = EventSender::new(event_sender);

    let handle = tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = shutdown.recv() => break,
                action = action_receiver.recv() => {
                    match action {
                        Some(action) => handle_action(api.as_ref(), action, &events).await,
                        None => break,
                    }
                }
            }
        }
    });

    (action_sender, event_receiver, handle)
}

/// Run a single action to completion. Every path that enters `Loading` exits
/// through `Idle`, including failures.
pub(crate) async fn handle_action(api: &dyn UserApi, action: Action, events: &EventSender) {
    match action {
        Action::Load => {
            events.send_phase(Phase::Loading).await;
            refetch(api, events).await;
            events.send_phase(Phase::Idle).await;
        }
        Action::Update { id, name, role } => {
            events.send_phase(Phase::Loading).await;
            match api.update_user(&id, &name, role).await {
                Ok(updated) => {
                    events
                        .send_mutation_log(
                            format!("Updated user {} ({})", updated.name, updated.id),
                            EventType::Success,
                            LogLevel::Info,
                        )
                        .await;
                }
                Err(e) => {
                    events
                        .send_mutation_log(
                            format!("Failed to update user {}: {}", id, e),
                            EventType::Error,
                            LogLevel::Error,
                        )
                        .await;
                }
            }
            refetch(api, events).await;
            events.send_phase(Phase::Idle).await;
        }
        Action::DeleteOne { id } => {
            events.send_phase(Phase::Loading).await;
            match api.delete_user(&id).await {
                Ok(()) => {
                    events
                        .send_mutation_log(
                            format!("Deleted user {}", id),
                            EventType::Success,
                            LogLevel::Info,
                        )
                        .await;
                }
                Err(e) => {
                    events
                        .send_mutation_log(
                            format!("Failed to delete user {}: {}", id, e),
                            EventType::Error,
                            LogLevel::Error,
                        )
                        .await;
                }
            }
            refetch(api, events).await;
            events.send_phase(Phase::Idle).await;
        }
        Action::DeleteSelected { ids } => {
            // Empty selection is a no-op, no phase transitions.
            if ids.is_empty() {
                return;
            }
            events.send_phase(Phase::Loading).await;

            // Sequential on purpose: one awaited request at a time, in
            // selection order. Successes are not rolled back on a later
            // failure; failed ids are reported so the caller can retry them.
            let total = ids.len();
            let mut failed: Vec<String> = Vec::new();
            for id in ids {
                if let Err(e) = api.delete_user(&id).await {
                    events
                        .send_mutation_log(
                            format!("Failed to delete user {}: {}", id, e),
                            EventType::Error,
                            LogLevel::Debug,
                        )
                        .await;
                    failed.push(id);
                }
            }

            if failed.is_empty() {
                events
                    .send_mutation_log(
                        format!("Deleted {} selected user(s)", total),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
            } else {
                events
                    .send_mutation_log(
                        format!(
                            "Deleted {} of {} selected user(s); failed ids: {}",
                            total - failed.len(),
                            total,
                            failed.join(", ")
                        ),
                        EventType::Error,
                        LogLevel::Error,
                    )
                    .await;
            }

            refetch(api, events).await;
            events.send_phase(Phase::Idle).await;
        }
    }
}

/// Replace the UI's user list with a fresh server snapshot. On failure the
/// error is logged and the previous snapshot stays in place.
async fn refetch(api: &dyn UserApi, events: &EventSender) {
    match api.get_all_users().await {
        Ok(users) => {
            events
                .send_fetch_log(
                    format!("Fetched {} user(s)", users.len()),
                    EventType::Refresh,
                    LogLevel::Debug,
                )
                .await;
            events.send_event(Event::Users(users)).await;
        }
        Err(e) => {
            events
                .send_fetch_log(
                    format!("Failed to fetch users: {}", e),
                    EventType::Error,
                    LogLevel::Error,
                )
                .await;
        }
    }
}
