use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        cmd_executor::CmdExecutor,
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::update,
    },
    infrastructure::{api::DriverSource, clipboard::ClipboardWriter},
};

/// Owner of the application state
///
/// Queues raw and domain messages, runs them through the update function,
/// hands the resulting commands to the executor, and publishes a snapshot of
/// the state after every cycle that changed it.
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    cmd_executor: Option<CmdExecutor>,
    snapshot_tx: watch::Sender<Arc<AppState>>,
}

impl Runtime {
    /// Runtime with no executor. Commands pile up in `pending_commands`.
    pub fn new(initial_state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, _) = watch::channel(Arc::new(initial_state.clone()));

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
            cmd_executor: None,
            snapshot_tx,
        }
    }

    /// Runtime whose commands run against `source` and `clipboard`.
    pub fn new_with_executor(
        initial_state: AppState,
        source: Arc<dyn DriverSource>,
        clipboard: Arc<dyn ClipboardWriter>,
    ) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.cmd_executor = Some(CmdExecutor::new(
            runtime.msg_tx.clone(),
            source,
            clipboard,
        ));
        runtime
    }

    /// Sender for messages produced outside the update loop.
    pub fn get_sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    /// Routes `Cmd::Tui` to the terminal owner.
    pub fn add_tui_sender(
        &mut self,
        tui_sender: mpsc::UnboundedSender<TuiCommand>,
    ) -> Result<(), String> {
        if let Some(executor) = &mut self.cmd_executor {
            executor.set_tui_sender(tui_sender);
            Ok(())
        } else {
            Err("No executor available. Use new_with_executor() first.".to_string())
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Receiver of state snapshots, one per update cycle that processed
    /// at least one message
    pub fn subscribe(&self) -> watch::Receiver<Arc<AppState>> {
        self.snapshot_tx.subscribe()
    }

    /// Queues an already translated message.
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Queues terminal input for translation.
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Waits for a message from a background task and queues it.
    pub async fn recv_external(&mut self) {
        if let Some(msg) = self.msg_rx.recv().await {
            self.msg_queue.push_back(msg);
        }
    }

    /// Commands not yet executed.
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Drains `pending_commands` into the executor.
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>, String> {
        let Some(executor) = self.cmd_executor.as_mut() else {
            return Err("No command executor available. Use new_with_executor() to configure.".to_string());
        };

        let commands: Vec<Cmd> = self.cmd_queue.drain(..).collect();
        if commands.is_empty() {
            return Ok(vec![]);
        }
        Ok(executor.execute_commands(&commands))
    }

    /// Folds one message into the state.
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() && log::log_enabled!(log::Level::Debug) {
            log::debug!("Processing {}", msg.log_summary());
        }
        let (new_state, commands) = update(msg, std::mem::take(&mut self.state));
        self.state = new_state;

        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Process all queued and received messages. Returns the generated
    /// commands and publishes a snapshot when anything was processed.
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();
        let mut processed = 0usize;

        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
            processed += 1;
        }

        // Each key is translated against the mode left by the previous one.
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            for msg in translate_raw_to_domain(raw_msg, &self.state) {
                all_commands.extend(self.process_message(msg));
                processed += 1;
            }
        }

        while let Ok(msg) = self.msg_rx.try_recv() {
            all_commands.extend(self.process_message(msg));
            processed += 1;
        }

        if processed > 0 {
            self.snapshot_tx.send_replace(Arc::new(self.state.clone()));
        }

        all_commands
    }

    /// `process_all_messages` then `execute_pending_commands`.
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>, String> {
        let _commands = self.process_all_messages();
        if self.cmd_executor.is_none() {
            return Ok(vec![]);
        }
        self.execute_pending_commands()
    }

    /// Cancels background tasks started by commands
    pub fn shutdown(&self) {
        if let Some(executor) = &self.cmd_executor {
            executor.shutdown();
        }
    }

    /// Queue depths, for trace logging.
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            record_count: self.state.table.record_count(),
            is_loading: self.state.is_loading(),
            has_executor: self.cmd_executor.is_some(),
        }
    }
}

/// Snapshot of the runtime queues.
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub record_count: usize,
    pub is_loading: bool,
    pub has_executor: bool,
}
