use std::{sync::Arc, time::Duration};

use color_eyre::eyre::{Report, Result};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    core::cmd::{Cmd, CmdResult, TuiCommand},
    core::msg::{
        loading::{FetchOutcome, LoadingMsg},
        session::SessionMsg,
        system::SystemMsg,
        ui::UiMsg,
        Msg,
    },
    infrastructure::{
        api::{ApiError, DriverSource},
        clipboard::ClipboardWriter,
    },
};

/// Command executor: performs side effects and reports results as messages
///
/// Network calls and the progress ticker run on tokio tasks; everything they
/// produce comes back through `msg_tx`.
pub struct CmdExecutor {
    msg_tx: mpsc::UnboundedSender<Msg>,
    source: Arc<dyn DriverSource>,
    clipboard: Arc<dyn ClipboardWriter>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    /// Parent of every task token; cancelled on shutdown
    root_token: CancellationToken,
    /// Current progress ticker
    progress_token: CancellationToken,
}

impl CmdExecutor {
    pub fn new(
        msg_tx: mpsc::UnboundedSender<Msg>,
        source: Arc<dyn DriverSource>,
        clipboard: Arc<dyn ClipboardWriter>,
    ) -> Self {
        let root_token = CancellationToken::new();
        let progress_token = root_token.child_token();
        Self {
            msg_tx,
            source,
            clipboard,
            tui_sender: None,
            root_token,
            progress_token,
        }
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&mut self, cmd: &Cmd) -> Result<CmdResult> {
        match cmd {
            Cmd::FetchDrivers { generation } => {
                self.spawn_fetch(*generation);
                Ok(CmdResult::Spawned)
            }

            Cmd::CreateDriver { submission, draft } => {
                let submission = *submission;
                let source = Arc::clone(&self.source);
                let msg_tx = self.msg_tx.clone();
                let token = self.root_token.child_token();
                let draft = draft.clone();
                tokio::spawn(async move {
                    let result = tokio::select! {
                        _ = token.cancelled() => return,
                        result = source.create_driver(draft) => result,
                    };
                    if let Err(e) = &result {
                        log::error!("Failed to create driver: {e}");
                        if is_unauthorized(e) {
                            let _ = msg_tx.send(Msg::Session(SessionMsg::Expired));
                        }
                    }
                    let outcome = result.map_err(|e| e.to_string());
                    let _ = msg_tx.send(Msg::Ui(UiMsg::DraftSubmitted {
                        submission,
                        outcome,
                    }));
                });
                Ok(CmdResult::Spawned)
            }

            Cmd::StartProgress {
                generation,
                interval_ms,
                ticks,
            } => {
                self.progress_token.cancel();
                self.progress_token = self.root_token.child_token();
                tokio::spawn(run_progress_ticker(
                    self.msg_tx.clone(),
                    self.progress_token.clone(),
                    *generation,
                    Duration::from_millis(*interval_ms),
                    *ticks,
                ));
                Ok(CmdResult::Spawned)
            }

            Cmd::CancelProgress => {
                self.progress_token.cancel();
                Ok(CmdResult::Done)
            }

            Cmd::CopyToClipboard { text } => {
                // Best effort: a missing clipboard is not an application error
                match self.clipboard.write_text(text) {
                    Ok(()) => {
                        self.msg_tx
                            .send(Msg::System(SystemMsg::UpdateStatusMessage(format!(
                                "Copied driver ID {text}"
                            ))))?;
                    }
                    Err(e) => log::warn!("Failed to copy to clipboard: {e}"),
                }
                Ok(CmdResult::Done)
            }

            Cmd::Tui(tui_cmd) => {
                match tui_cmd {
                    TuiCommand::Resize { width, height } => {
                        if let Some(tx) = &self.tui_sender {
                            let _ = tx.send(TuiCommand::Resize {
                                width: *width,
                                height: *height,
                            });
                        } else {
                            log::warn!(
                                "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                            );
                        }
                    }
                }
                Ok(CmdResult::Done)
            }
        }
    }

    /// Execute multiple commands, logging failures
    pub fn execute_commands(&mut self, commands: &[Cmd]) -> Vec<String> {
        let mut execution_log = Vec::with_capacity(commands.len());

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(_) => execution_log.push(format!("✓ Executed: {}", cmd.name())),
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {e}", cmd.name());
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        execution_log
    }

    /// Cancels every running task.
    pub fn shutdown(&self) {
        self.root_token.cancel();
    }

    fn spawn_fetch(&self, generation: u64) {
        let source = Arc::clone(&self.source);
        let msg_tx = self.msg_tx.clone();
        let token = self.root_token.child_token();
        tokio::spawn(async move {
            let result = tokio::select! {
                _ = token.cancelled() => return,
                result = source.fetch_drivers() => result,
            };
            let outcome = match result {
                Ok(drivers) => FetchOutcome::Loaded(drivers),
                Err(e) => FetchOutcome::Failed {
                    unauthorized: is_unauthorized(&e),
                    message: e.to_string(),
                },
            };
            if msg_tx
                .send(Msg::Loading(LoadingMsg::FetchSettled {
                    generation,
                    outcome,
                }))
                .is_err()
            {
                log::debug!("Fetch of generation {generation} finished after shutdown");
            }
        });
    }
}

fn is_unauthorized(report: &Report) -> bool {
    report
        .downcast_ref::<ApiError>()
        .is_some_and(ApiError::is_unauthorized)
}

/// Sends `ticks` progress ticks, one per `interval`, the first after one
/// full interval.
async fn run_progress_ticker(
    msg_tx: mpsc::UnboundedSender<Msg>,
    token: CancellationToken,
    generation: u64,
    interval: Duration,
    ticks: u32,
) {
    let interval = interval.max(Duration::from_millis(1));
    let mut timer = tokio::time::interval_at(tokio::time::Instant::now() + interval, interval);
    for _ in 0..ticks {
        tokio::select! {
            _ = token.cancelled() => {
                log::debug!("Progress ticker of generation {generation} cancelled");
                return;
            }
            _ = timer.tick() => {
                if msg_tx
                    .send(Msg::Loading(LoadingMsg::ProgressTick { generation }))
                    .is_err()
                {
                    return;
                }
            }
        }
    }
}

/// Extension trait for Cmd to get human-readable names
trait CmdName {
    fn name(&self) -> String;
}

impl CmdName for Cmd {
    fn name(&self) -> String {
        match self {
            Cmd::FetchDrivers { generation } => format!("FetchDrivers({generation})"),
            Cmd::CreateDriver { .. } => "CreateDriver".to_string(),
            Cmd::StartProgress { generation, .. } => format!("StartProgress({generation})"),
            Cmd::CancelProgress => "CancelProgress".to_string(),
            Cmd::CopyToClipboard { .. } => "CopyToClipboard".to_string(),
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)".to_string(),
        }
    }
}
