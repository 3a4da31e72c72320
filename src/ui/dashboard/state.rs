//! Dashboard state management
//!
//! Contains the main dashboard state struct and related types

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::{Event, LogEvent, Phase};
use crate::user::{Role, SearchColumn, User};

use std::collections::VecDeque;

/// Which part of the dashboard receives keystrokes.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum InputMode {
    /// Table navigation and action keys.
    #[default]
    Normal,
    /// Keystrokes edit the search text.
    Search,
}

/// Scratch copy for the edit modal. An owned value, never an alias into the
/// displayed list; mutations here reach the table only through a committed
/// update followed by a refetch.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EditDraft {
    pub id: String,
    pub name: String,
    /// Shown read-only; the update endpoint does not accept an email field.
    pub email: String,
    pub role: Role,
}

impl EditDraft {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }

    /// Flip the draft role between user and admin.
    pub fn toggle_role(&mut self) {
        self.role = match self.role {
            Role::User => Role::Admin,
            Role::Admin => Role::User,
        };
    }
}

/// Dashboard state. The user list is a server snapshot replaced wholesale on
/// every refetch; the filtered view is derived on demand and never stored.
#[derive(Debug)]
pub struct DashboardState {
    /// The environment in which the application is running.
    pub environment: Environment,
    /// Current user list, in server order.
    pub users: Vec<User>,
    /// Search text applied to the filtered view.
    pub search_text: String,
    /// Which column the search inspects.
    pub search_column: SearchColumn,
    /// Selected user ids, in selection order. Cleared only on explicit user
    /// action; ids of since-deleted users simply stop matching any row.
    selected: Vec<String>,
    /// Highlighted row within the filtered view.
    pub cursor: usize,
    /// Busy indicator state machine.
    pub phase: Phase,
    /// Scratch copy for the edit modal, present while the modal is open.
    pub edit: Option<EditDraft>,
    /// Which part of the dashboard receives keystrokes.
    pub input_mode: InputMode,
    /// Queue of events waiting to be processed.
    pub pending_events: VecDeque<Event>,
    /// Activity logs for display.
    pub activity_logs: VecDeque<LogEvent>,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            users: Vec::new(),
            search_text: String::new(),
            search_column: SearchColumn::default(),
            selected: Vec::new(),
            cursor: 0,
            phase: Phase::default(),
            edit: None,
            input_mode: InputMode::default(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
        }
    }

    /// Add an event to the processing queue.
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }

    /// Add an event to activity logs with size limit.
    pub fn add_to_activity_log(&mut self, event: LogEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// The filtered view, derived from `(users, search_text, search_column)`
    /// on every call. Case-insensitive substring match; empty search text
    /// matches everything. Order of `users` is preserved.
    pub fn filtered_users(&self) -> Vec<&User> {
        let needle = self.search_text.to_lowercase();
        self.users
            .iter()
            .filter(|user| user.field(self.search_column).to_lowercase().contains(&needle))
            .collect()
    }

    /// The user under the cursor, if the filtered view is non-empty.
    pub fn cursor_user(&self) -> Option<&User> {
        self.filtered_users().get(self.cursor).copied()
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        let len = self.filtered_users().len();
        if len > 0 && self.cursor < len - 1 {
            self.cursor += 1;
        }
    }

    /// Keep the cursor inside the filtered view after the list or the filter
    /// changed underneath it.
    pub fn clamp_cursor(&mut self) {
        let len = self.filtered_users().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Selected ids in selection order, for a bulk delete.
    pub fn selected_ids(&self) -> Vec<String> {
        self.selected.clone()
    }

    /// Toggle selection of the row under the cursor.
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.cursor_user().map(|u| u.id.clone()) {
            if let Some(pos) = self.selected.iter().position(|s| s == &id) {
                self.selected.remove(pos);
            } else {
                self.selected.push(id);
            }
        }
    }

    /// Select every row of the filtered view, or clear them if all are
    /// already selected.
    pub fn toggle_select_all(&mut self) {
        let filtered_ids: Vec<String> = self.filtered_users().iter().map(|u| u.id.clone()).collect();
        if filtered_ids.iter().all(|id| self.is_selected(id)) {
            self.selected.retain(|id| !filtered_ids.contains(id));
        } else {
            for id in filtered_ids {
                if !self.is_selected(&id) {
                    self.selected.push(id);
                }
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Open the edit modal with a scratch copy of the row under the cursor.
    /// No-op when the filtered view is empty.
    pub fn open_edit(&mut self) {
        let draft = self.cursor_user().map(EditDraft::from_user);
        if draft.is_some() {
            self.edit = draft;
        }
    }

    /// Close the modal, discarding the scratch copy.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Close the modal, handing the scratch copy to the caller for commit.
    pub fn take_edit(&mut self) -> Option<EditDraft> {
        self.edit.take()
    }
}
