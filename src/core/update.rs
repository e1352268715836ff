use crate::{
    core::cmd::Cmd,
    core::msg::{
        loading::{FetchOutcome, LoadingMsg},
        nav::NavMsg,
        session::SessionMsg,
        system::SystemMsg,
        table::TableMsg,
        ui::UiMsg,
        Msg,
    },
    core::state::{
        input::InputState,
        table::TableState,
        ui::{DraftForm, RowAction, UiMode},
        AppState, Screen,
    },
    domain::column::ColumnId,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Paging reports boundary errors to the status bar
        Msg::Table(TableMsg::Page(direction)) => {
            match state.table.set_page(direction) {
                Ok(_) => {
                    state.system.update(SystemMsg::ClearStatusMessage);
                }
                Err(e) => {
                    state
                        .system
                        .update(SystemMsg::UpdateStatusMessage(format!("Cannot page: {e}")));
                }
            }
            (state, vec![])
        }

        // Table messages (delegated to TableState)
        Msg::Table(table_msg) => {
            let commands = state.table.update(table_msg);
            (state, commands)
        }

        Msg::Loading(loading_msg) => {
            let commands = update_loading(loading_msg, &mut state);
            (state, commands)
        }

        Msg::Ui(ui_msg) => {
            let commands = update_ui(ui_msg, &mut state);
            (state, commands)
        }

        Msg::Nav(nav_msg) => {
            let commands = update_nav(nav_msg, &mut state);
            (state, commands)
        }

        // Session messages (delegated to SessionState)
        Msg::Session(session_msg) => {
            let commands = state.session.update(session_msg);
            (state, commands)
        }
    }
}

/// Mounts the drivers screen: fresh view state, a new load generation, and
/// the two load tasks (fetch and progress ticker).
fn mount_drivers(state: &mut AppState) -> Vec<Cmd> {
    state.screen = Screen::Drivers;
    state.table = TableState::new(state.table.page_size());
    state.ui.close();

    let generation = state.loading.begin();
    let settings = state.loading.settings();
    log::debug!("Mounting drivers screen (generation {generation})");

    vec![
        Cmd::CancelProgress,
        Cmd::FetchDrivers { generation },
        Cmd::StartProgress {
            generation,
            interval_ms: settings.tick_ms,
            ticks: settings.ticks(),
        },
    ]
}

fn update_nav(msg: NavMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        NavMsg::ShowDrivers => mount_drivers(state),

        NavMsg::ShowDriverDetail(id) => {
            state.loading.unmount();
            state.ui.close();
            state.screen = Screen::DriverDetail { id };
            vec![Cmd::CancelProgress]
        }

        NavMsg::Back => match state.screen {
            Screen::DriverDetail { .. } => mount_drivers(state),
            Screen::Drivers => vec![],
        },
    }
}

fn update_loading(msg: LoadingMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        LoadingMsg::ProgressTick { generation } => {
            if !state.loading.tick(generation) {
                log::debug!("Dropping progress tick of stale generation {generation}");
            }
            vec![]
        }

        LoadingMsg::FetchSettled {
            generation,
            outcome,
        } => {
            if !state.loading.settle_fetch(generation) {
                log::debug!("Dropping fetch result of stale generation {generation}");
                return vec![];
            }

            match outcome {
                FetchOutcome::Loaded(drivers) => {
                    log::info!("Fetched {} drivers", drivers.len());
                    state.table.set_records(drivers);
                    vec![]
                }
                FetchOutcome::Failed {
                    message,
                    unauthorized,
                } => {
                    log::error!("Error fetching drivers: {message}");
                    state.table.set_records(vec![]);
                    if unauthorized {
                        state.session.update(SessionMsg::Expired)
                    } else {
                        vec![]
                    }
                }
            }
        }
    }
}

fn menu_len(mode: &UiMode) -> usize {
    match mode {
        UiMode::ColumnMenu => ColumnId::hideable_columns().count(),
        UiMode::ActionMenu(_) => RowAction::ALL.len(),
        _ => 0,
    }
}

/// Whether `submission` is the request the open form is waiting on.
fn is_pending_submission(state: &AppState, submission: u64) -> bool {
    state
        .ui
        .form
        .as_ref()
        .is_some_and(|form| form.submitting && form.submission == submission)
}

fn update_ui(msg: UiMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        // Filters
        UiMsg::EditGlobalFilter => {
            state.ui.open(UiMode::GlobalFilter);
            state.ui.input = InputState::with_content(state.table.global_filter());
            vec![]
        }

        UiMsg::EditColumnFilter => {
            let column = state.table.focused_column();
            if !column.is_data() {
                state.system.update(SystemMsg::UpdateStatusMessage(format!(
                    "Column \"{}\" cannot be filtered",
                    column.header()
                )));
                return vec![];
            }
            state.ui.open(UiMode::ColumnFilter(column));
            state.ui.input =
                InputState::with_content(state.table.column_filter(column).unwrap_or_default());
            vec![]
        }

        UiMsg::InputKey(key) => {
            match state.ui.mode.clone() {
                UiMode::GlobalFilter => {
                    state.ui.input.apply_key(key);
                    state
                        .table
                        .set_global_filter(state.ui.input.content.clone());
                }
                UiMode::ColumnFilter(column) => {
                    state.ui.input.apply_key(key);
                    state
                        .table
                        .set_column_filter(column, state.ui.input.content.clone());
                }
                UiMode::CreateModal => {
                    if let Some(form) = state.ui.form.as_mut() {
                        form.input.apply_key(key);
                        form.sync();
                    }
                }
                UiMode::Table | UiMode::ColumnMenu | UiMode::ActionMenu(_) => {}
            }
            vec![]
        }

        // Menus
        UiMsg::OpenColumnMenu => {
            state.ui.open(UiMode::ColumnMenu);
            vec![]
        }

        UiMsg::OpenActionMenu => {
            if let Some(driver) = state.table.cursor_driver() {
                let id = driver.id.clone();
                state.ui.open(UiMode::ActionMenu(id));
            }
            vec![]
        }

        UiMsg::MenuUp => {
            state.ui.menu_up();
            vec![]
        }

        UiMsg::MenuDown => {
            let len = menu_len(&state.ui.mode);
            state.ui.menu_down(len);
            vec![]
        }

        UiMsg::MenuActivate => match state.ui.mode.clone() {
            UiMode::ColumnMenu => {
                // The menu stays open so several columns can be toggled.
                if let Some(column) = ColumnId::hideable_columns().nth(state.ui.menu_cursor) {
                    state.table.update(TableMsg::ToggleColumnVisibility(column))
                } else {
                    vec![]
                }
            }
            UiMode::ActionMenu(id) => {
                let action = RowAction::ALL.get(state.ui.menu_cursor).copied();
                state.ui.close();
                match action {
                    Some(RowAction::CopyDriverId) => vec![Cmd::CopyToClipboard { text: id }],
                    Some(RowAction::ViewDriverDetails) => {
                        update_nav(NavMsg::ShowDriverDetail(id), state)
                    }
                    None => vec![],
                }
            }
            _ => vec![],
        },

        UiMsg::CopyDriverId(id) => vec![Cmd::CopyToClipboard { text: id }],

        // Creation modal
        UiMsg::OpenCreateModal => {
            state.ui.open(UiMode::CreateModal);
            state.ui.form = Some(DraftForm::default());
            vec![]
        }

        UiMsg::NextField => {
            if let Some(form) = state.ui.form.as_mut() {
                form.sync();
                form.focus(form.field.next());
            }
            vec![]
        }

        UiMsg::PreviousField => {
            if let Some(form) = state.ui.form.as_mut() {
                form.sync();
                form.focus(form.field.previous());
            }
            vec![]
        }

        UiMsg::SubmitDraft => {
            let Some(form) = state.ui.form.as_mut() else {
                return vec![];
            };
            if form.submitting {
                return vec![];
            }
            form.sync();
            if form.draft.is_empty() {
                state.system.update(SystemMsg::UpdateStatusMessage(
                    "Nothing to submit: the form is empty".to_owned(),
                ));
                return vec![];
            }
            state.ui.last_submission += 1;
            let submission = state.ui.last_submission;
            form.submitting = true;
            form.submission = submission;
            let draft = form.draft.clone();
            state
                .system
                .update(SystemMsg::UpdateStatusMessage("Creating driver...".to_owned()));
            vec![Cmd::CreateDriver { submission, draft }]
        }

        UiMsg::DraftSubmitted { submission, .. } if !is_pending_submission(state, submission) => {
            log::debug!("Ignoring reply to discarded create request {submission}");
            vec![]
        }

        UiMsg::DraftSubmitted {
            outcome: Ok(()), ..
        } => {
            state
                .system
                .update(SystemMsg::UpdateStatusMessage("Driver created".to_owned()));
            match state.screen {
                Screen::Drivers => mount_drivers(state),
                Screen::DriverDetail { .. } => {
                    state.ui.close();
                    vec![]
                }
            }
        }

        UiMsg::DraftSubmitted {
            outcome: Err(error),
            ..
        } => {
            if let Some(form) = state.ui.form.as_mut() {
                form.submitting = false;
            }
            state.system.update(SystemMsg::ShowError(format!(
                "Failed to create driver: {error}"
            )));
            vec![]
        }

        UiMsg::Close => {
            state.ui.close();
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{loading::ProgressSettings, table::PageDirection};
    use crate::domain::{driver::Driver, profile::DraftField};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    fn key(c: char) -> Msg {
        Msg::Ui(UiMsg::InputKey(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::NONE,
        )))
    }

    fn apply(state: AppState, msgs: impl IntoIterator<Item = Msg>) -> (AppState, Vec<Cmd>) {
        msgs.into_iter()
            .fold((state, vec![]), |(state, mut all), msg| {
                let (state, cmds) = update(msg, state);
                all.extend(cmds);
                (state, all)
            })
    }

    fn drivers() -> Vec<Driver> {
        vec![
            Driver::new("1", "Ada", "Lovelace")
                .email("A@X.com")
                .has_vehicle(true),
            Driver::new("2", "Bob", "Smith").email("b@y.com"),
        ]
    }

    /// State with the drivers screen mounted and fully loaded
    fn loaded_state() -> AppState {
        let (state, _) = update(Msg::Nav(NavMsg::ShowDrivers), AppState::default());
        let generation = state.loading.generation();
        let ticks = state.loading.settings().ticks();
        let mut msgs = vec![Msg::Loading(LoadingMsg::FetchSettled {
            generation,
            outcome: FetchOutcome::Loaded(drivers()),
        })];
        msgs.extend(
            (0..ticks).map(|_| Msg::Loading(LoadingMsg::ProgressTick { generation })),
        );
        apply(state, msgs).0
    }

    #[test]
    fn test_mount_starts_fetch_and_progress() {
        let (state, cmds) = update(Msg::Nav(NavMsg::ShowDrivers), AppState::default());
        let settings = ProgressSettings::default();

        assert_eq!(state.screen, Screen::Drivers);
        assert!(state.is_loading());
        assert_eq!(
            cmds,
            vec![
                Cmd::CancelProgress,
                Cmd::FetchDrivers { generation: 1 },
                Cmd::StartProgress {
                    generation: 1,
                    interval_ms: settings.tick_ms,
                    ticks: settings.ticks(),
                },
            ]
        );
    }

    #[test]
    fn test_loading_ends_when_both_settle() {
        let state = loaded_state();
        assert!(!state.is_loading());
        assert_eq!(state.table.record_count(), 2);
    }

    #[test]
    fn test_loading_waits_for_progress_after_fast_fetch() {
        let (state, _) = update(Msg::Nav(NavMsg::ShowDrivers), AppState::default());
        let (state, _) = update(
            Msg::Loading(LoadingMsg::FetchSettled {
                generation: 1,
                outcome: FetchOutcome::Loaded(drivers()),
            }),
            state,
        );
        assert!(state.is_loading());
        assert_eq!(state.table.record_count(), 2);
    }

    #[test]
    fn test_stale_fetch_result_is_ignored() {
        let (state, _) = update(Msg::Nav(NavMsg::ShowDrivers), AppState::default());
        let (state, _) = update(Msg::Nav(NavMsg::ShowDrivers), state);
        assert_eq!(state.loading.generation(), 2);

        let (state, _) = update(
            Msg::Loading(LoadingMsg::FetchSettled {
                generation: 1,
                outcome: FetchOutcome::Loaded(drivers()),
            }),
            state,
        );
        assert_eq!(state.table.record_count(), 0);
    }

    #[test]
    fn test_failed_fetch_shows_empty_table() {
        let (state, _) = update(Msg::Nav(NavMsg::ShowDrivers), AppState::default());
        let (state, _) = update(
            Msg::Loading(LoadingMsg::FetchSettled {
                generation: 1,
                outcome: FetchOutcome::Failed {
                    message: "connection refused".to_owned(),
                    unauthorized: false,
                },
            }),
            state,
        );
        assert_eq!(state.table.record_count(), 0);
        assert!(!state.session.expired);
    }

    #[test]
    fn test_unauthorized_fetch_expires_session() {
        let (state, _) = update(Msg::Nav(NavMsg::ShowDrivers), AppState::default());
        let (state, _) = update(
            Msg::Loading(LoadingMsg::FetchSettled {
                generation: 1,
                outcome: FetchOutcome::Failed {
                    message: "401 Unauthorized".to_owned(),
                    unauthorized: true,
                },
            }),
            state,
        );
        assert!(state.session.expired);
    }

    #[test]
    fn test_paging_past_the_end_reports_status() {
        let state = loaded_state();
        let (state, _) = update(Msg::Table(TableMsg::Page(PageDirection::Next)), state);

        assert_eq!(state.table.page_index(), 0);
        assert_eq!(
            state.system.status_message.as_deref(),
            Some("Cannot page: already on the last page")
        );
    }

    #[test]
    fn test_global_filter_updates_live() {
        let state = loaded_state();
        let (state, _) = apply(
            state,
            [Msg::Ui(UiMsg::EditGlobalFilter), key('a'), key('d'), key('a')],
        );

        assert_eq!(state.table.global_filter(), "ada");
        assert_eq!(state.table.projection().matching_rows, 1);

        // Closing keeps the filter.
        let (state, _) = update(Msg::Ui(UiMsg::Close), state);
        assert!(state.ui.is_table());
        assert_eq!(state.table.global_filter(), "ada");
    }

    #[test]
    fn test_column_filter_targets_focused_column() {
        let state = loaded_state();
        let (state, _) = apply(
            state,
            [
                Msg::Table(TableMsg::FocusNextColumn),
                Msg::Table(TableMsg::FocusNextColumn),
                Msg::Ui(UiMsg::EditColumnFilter),
                key('y'),
            ],
        );

        assert_eq!(state.ui.mode, UiMode::ColumnFilter(ColumnId::Email));
        assert_eq!(state.table.column_filter(ColumnId::Email), Some("y"));
        assert_eq!(state.table.projection().matching_rows, 1);
    }

    #[test]
    fn test_column_menu_toggles_visibility() {
        let state = loaded_state();
        let (state, _) = apply(
            state,
            [
                Msg::Ui(UiMsg::OpenColumnMenu),
                Msg::Ui(UiMsg::MenuDown),
                Msg::Ui(UiMsg::MenuActivate),
            ],
        );
        let hidden = ColumnId::hideable_columns().nth(1).unwrap();

        assert!(!state.table.is_visible(hidden));
        assert_eq!(state.ui.mode, UiMode::ColumnMenu);
    }

    #[test]
    fn test_action_menu_copy_driver_id() {
        let state = loaded_state();
        let (state, cmds) = apply(
            state,
            [Msg::Ui(UiMsg::OpenActionMenu), Msg::Ui(UiMsg::MenuActivate)],
        );

        assert!(state.ui.is_table());
        assert_eq!(
            cmds,
            vec![Cmd::CopyToClipboard {
                text: "1".to_owned()
            }]
        );
    }

    #[test]
    fn test_view_details_unmounts_and_back_refetches() {
        let state = loaded_state();
        let (state, cmds) = apply(
            state,
            [
                Msg::Ui(UiMsg::OpenActionMenu),
                Msg::Ui(UiMsg::MenuDown),
                Msg::Ui(UiMsg::MenuActivate),
            ],
        );
        assert_eq!(
            state.screen,
            Screen::DriverDetail {
                id: "1".to_owned()
            }
        );
        assert_eq!(cmds, vec![Cmd::CancelProgress]);
        assert!(!state.loading.is_current(1));

        let (state, cmds) = update(Msg::Nav(NavMsg::Back), state);
        assert_eq!(state.screen, Screen::Drivers);
        assert!(cmds.contains(&Cmd::FetchDrivers { generation: 2 }));
    }

    #[test]
    fn test_create_modal_submit() {
        let state = loaded_state();
        let (state, cmds) = apply(
            state,
            [
                Msg::Ui(UiMsg::OpenCreateModal),
                key('a'),
                Msg::Ui(UiMsg::NextField),
                key('p'),
                Msg::Ui(UiMsg::SubmitDraft),
            ],
        );

        let form = state.ui.form.as_ref().unwrap();
        assert!(form.submitting);
        assert_eq!(form.field, DraftField::Password);
        match cmds.as_slice() {
            [Cmd::CreateDriver { submission, draft }] => {
                assert_eq!(*submission, 1);
                assert_eq!(draft.user.email, "a");
                assert_eq!(draft.user.password, "p");
            }
            other => panic!("unexpected commands: {other:?}"),
        }

        // A second submit while in flight is ignored.
        let (state, cmds) = update(Msg::Ui(UiMsg::SubmitDraft), state);
        assert!(cmds.is_empty());

        let (state, cmds) = update(
            Msg::Ui(UiMsg::DraftSubmitted {
                submission: 1,
                outcome: Ok(()),
            }),
            state,
        );
        assert!(state.ui.is_table());
        assert!(cmds.contains(&Cmd::FetchDrivers { generation: 2 }));
    }

    #[test]
    fn test_create_modal_failure_keeps_draft() {
        let state = loaded_state();
        let (state, _) = apply(
            state,
            [
                Msg::Ui(UiMsg::OpenCreateModal),
                key('a'),
                Msg::Ui(UiMsg::SubmitDraft),
                Msg::Ui(UiMsg::DraftSubmitted {
                    submission: 1,
                    outcome: Err("422 Unprocessable Entity".to_owned()),
                }),
            ],
        );

        let form = state.ui.form.as_ref().unwrap();
        assert!(!form.submitting);
        assert_eq!(form.draft.user.email, "a");
        assert_eq!(
            state.system.status_message.as_deref(),
            Some("Error: Failed to create driver: 422 Unprocessable Entity")
        );
    }

    #[test]
    fn test_reply_to_discarded_draft_is_ignored() {
        let (state, _) = apply(
            loaded_state(),
            [
                Msg::Ui(UiMsg::OpenCreateModal),
                key('a'),
                Msg::Ui(UiMsg::SubmitDraft),
                Msg::Ui(UiMsg::Close),
                Msg::Ui(UiMsg::OpenCreateModal),
                key('b'),
            ],
        );

        let (state, cmds) = update(
            Msg::Ui(UiMsg::DraftSubmitted {
                submission: 1,
                outcome: Ok(()),
            }),
            state,
        );
        assert!(cmds.is_empty());
        assert!(state.ui.is_modal());
        assert!(!state.is_loading());

        // The newer form's own request is still matched.
        let (state, cmds) = update(Msg::Ui(UiMsg::SubmitDraft), state);
        assert!(matches!(
            cmds.as_slice(),
            [Cmd::CreateDriver { submission: 2, .. }]
        ));
        let (state, _) = update(
            Msg::Ui(UiMsg::DraftSubmitted {
                submission: 1,
                outcome: Err("409 Conflict".to_owned()),
            }),
            state,
        );
        assert!(state.ui.form.as_ref().is_some_and(|form| form.submitting));
    }

    #[test]
    fn test_empty_draft_is_not_submitted() {
        let (state, cmds) = apply(
            loaded_state(),
            [Msg::Ui(UiMsg::OpenCreateModal), Msg::Ui(UiMsg::SubmitDraft)],
        );
        assert!(cmds.is_empty());
        assert!(!state.ui.form.as_ref().unwrap().submitting);
    }
}
