//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::input::POLL_INTERVAL_MS;
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::runtime::Action;
use crate::ui::dashboard::state::InputMode;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};

/// What a key press means for the UI loop.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum KeyOutcome {
    Continue,
    Exit,
}

/// Application state
pub struct App {
    /// Dashboard state driven by worker events and key presses.
    state: DashboardState,

    /// Sends actions to the API worker.
    action_sender: mpsc::Sender<Action>,

    /// Receives events from the API worker.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Broadcasts shutdown signal to the API worker.
    shutdown_sender: broadcast::Sender<()>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        action_sender: mpsc::Sender<Action>,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        shutdown_sender: broadcast::Sender<()>,
    ) -> Self {
        Self {
            state: DashboardState::new(environment),
            action_sender,
            event_receiver,
            shutdown_sender,
        }
    }

    fn send_action(&self, action: Action) {
        // A full action queue means the worker is far behind; dropping the
        // action is preferable to blocking the UI loop.
        let _ = self.action_sender.try_send(action);
    }

    /// Handle one key press according to the current input mode.
    fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        // The edit modal captures all input while open.
        if self.state.edit.is_some() {
            self.handle_edit_key(key.code);
            return KeyOutcome::Continue;
        }

        match self.state.input_mode {
            InputMode::Search => self.handle_search_key(key.code),
            InputMode::Normal => return self.handle_normal_key(key.code),
        }
        KeyOutcome::Continue
    }

    fn handle_normal_key(&mut self, code: KeyCode) -> KeyOutcome {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => {
                let _ = self.shutdown_sender.send(());
                return KeyOutcome::Exit;
            }
            KeyCode::Char('r') => self.send_action(Action::Load),
            KeyCode::Up | KeyCode::Char('k') => self.state.move_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.move_cursor_down(),
            KeyCode::Char(' ') => self.state.toggle_selected(),
            KeyCode::Char('a') => self.state.toggle_select_all(),
            KeyCode::Char('c') => self.state.clear_selection(),
            KeyCode::Char('/') => self.state.input_mode = InputMode::Search,
            KeyCode::Tab => {
                self.state.search_column = self.state.search_column.toggle();
                self.state.clamp_cursor();
            }
            KeyCode::Char('e') => self.state.open_edit(),
            KeyCode::Char('d') => {
                // No confirmation prompt; the row stays visible until the
                // refetch completes.
                if let Some(user) = self.state.cursor_user() {
                    let id = user.id.clone();
                    self.send_action(Action::DeleteOne { id });
                }
            }
            KeyCode::Char('x') => {
                let ids = self.state.selected_ids();
                self.send_action(Action::DeleteSelected { ids });
            }
            _ => {}
        }
        KeyOutcome::Continue
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Esc => self.state.input_mode = InputMode::Normal,
            KeyCode::Tab => self.state.search_column = self.state.search_column.toggle(),
            KeyCode::Backspace => {
                self.state.search_text.pop();
            }
            KeyCode::Char(c) => self.state.search_text.push(c),
            _ => {}
        }
        // The filtered view is derived at render time, so every keystroke
        // takes effect immediately. Only the cursor needs re-clamping.
        self.state.clamp_cursor();
    }

    fn handle_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.state.cancel_edit(),
            KeyCode::Enter => {
                if let Some(draft) = self.state.take_edit() {
                    self.send_action(Action::Update {
                        id: draft.id,
                        name: draft.name,
                        role: draft.role,
                    });
                }
            }
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                if let Some(draft) = self.state.edit.as_mut() {
                    draft.toggle_role();
                }
            }
            KeyCode::Backspace => {
                if let Some(draft) = self.state.edit.as_mut() {
                    draft.name.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(draft) = self.state.edit.as_mut() {
                    draft.name.push(c);
                }
            }
            _ => {}
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the dashboard.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    // Initial load on mount.
    app.send_action(Action::Load);

    // UI event loop
    loop {
        // Queue all incoming worker events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            app.state.add_event(event);
        }
        app.state.update();

        terminal.draw(|f| render_dashboard(f, &app.state))?;

        // Poll for key events
        if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                if app.handle_key(key) == KeyOutcome::Exit {
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::cli_consts::{ACTION_QUEUE_SIZE, EVENT_QUEUE_SIZE};
    use crate::user::{Role, SearchColumn, User};
    use crossterm::event::KeyEvent;

    fn test_app() -> (App, mpsc::Receiver<Action>) {
        let (action_sender, action_receiver) = mpsc::channel(ACTION_QUEUE_SIZE);
        let (_event_sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
        let (shutdown_sender, _) = broadcast::channel(1);
        let mut app = App::new(
            Environment::Local,
            action_sender,
            event_receiver,
            shutdown_sender,
        );
        app.state.users = vec![
            User {
                id: "1".to_string(),
                name: "Alice".to_string(),
                email: "a@x.com".to_string(),
                role: Role::User,
            },
            User {
                id: "2".to_string(),
                name: "Bob".to_string(),
                email: "b@x.com".to_string(),
                role: Role::Admin,
            },
        ];
        (app, action_receiver)
    }

    fn press(app: &mut App, code: KeyCode) -> KeyOutcome {
        app.handle_key(KeyEvent::new(code, crossterm::event::KeyModifiers::NONE))
    }

    #[test]
    fn quit_key_signals_shutdown() {
        let (mut app, _actions) = test_app();
        let mut shutdown = app.shutdown_sender.subscribe();
        assert_eq!(press(&mut app, KeyCode::Char('q')), KeyOutcome::Exit);
        assert!(shutdown.try_recv().is_ok());
    }

    #[test]
    fn reload_key_sends_load_action() {
        let (mut app, mut actions) = test_app();
        press(&mut app, KeyCode::Char('r'));
        assert!(matches!(actions.try_recv(), Ok(Action::Load)));
    }

    #[test]
    fn delete_key_targets_cursor_row() {
        let (mut app, mut actions) = test_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('d'));
        match actions.try_recv() {
            Ok(Action::DeleteOne { id }) => assert_eq!(id, "2"),
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn bulk_delete_sends_selection_in_order() {
        let (mut app, mut actions) = test_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' ')); // select Bob
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Char(' ')); // then Alice
        press(&mut app, KeyCode::Char('x'));
        match actions.try_recv() {
            Ok(Action::DeleteSelected { ids }) => {
                assert_eq!(ids, vec!["2".to_string(), "1".to_string()]);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn search_mode_edits_search_text() {
        let (mut app, _actions) = test_app();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.state.input_mode, InputMode::Search);

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.state.search_text, "ali");
        assert_eq!(app.state.filtered_users().len(), 1);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.state.search_text, "al");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state.input_mode, InputMode::Normal);
    }

    #[test]
    fn tab_toggles_search_column() {
        let (mut app, _actions) = test_app();
        assert_eq!(app.state.search_column, SearchColumn::Name);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state.search_column, SearchColumn::Email);
    }

    #[test]
    fn edit_flow_commits_draft_as_update_action() {
        let (mut app, mut actions) = test_app();
        press(&mut app, KeyCode::Char('e'));
        assert!(app.state.edit.is_some());

        // Rename and flip the role on the scratch copy.
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Tab);

        // The displayed row is untouched while the modal is open.
        assert_eq!(app.state.users[0].name, "Alice");
        assert_eq!(app.state.users[0].role, Role::User);

        press(&mut app, KeyCode::Enter);
        assert!(app.state.edit.is_none());
        match actions.try_recv() {
            Ok(Action::Update { id, name, role }) => {
                assert_eq!(id, "1");
                assert_eq!(name, "Alica");
                assert_eq!(role, Role::Admin);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn edit_cancel_discards_draft_without_action() {
        let (mut app, mut actions) = test_app();
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Char('!'));
        press(&mut app, KeyCode::Esc);

        assert!(app.state.edit.is_none());
        assert!(actions.try_recv().is_err());
        assert_eq!(app.state.users[0].name, "Alice");
    }
}
