use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, watch, Mutex};

use crate::{
    core::{
        cmd::TuiCommand,
        msg::{nav::NavMsg, system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    infrastructure::{
        api::{ApiClient, DriverSource},
        clipboard::{ClipboardWriter, SystemClipboard},
        config::Config,
        tui::{self, event_source::EventSource},
    },
    integration::{coalescer::Coalescer, renderer::Renderer, runtime::Runtime},
};

/// Drives the application: terminal events and background results go into
/// the runtime, and every published snapshot is drawn.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    event_source: EventSource,
    tui_rx: mpsc::UnboundedReceiver<TuiCommand>,
    snapshots: watch::Receiver<Arc<AppState>>,
    renderer: Renderer,
    force_render: bool,
}

impl AppRunner {
    pub fn new(
        config: Config,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        event_source: EventSource,
        source: Arc<dyn DriverSource>,
        clipboard: Arc<dyn ClipboardWriter>,
    ) -> Result<Self> {
        let initial_state = AppState::new_with_config(config);
        let mut runtime = Runtime::new_with_executor(initial_state, source, clipboard);

        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        runtime
            .add_tui_sender(tui_tx)
            .map_err(|e| eyre!(e))?;
        let snapshots = runtime.subscribe();

        Ok(Self {
            runtime,
            tui,
            event_source,
            tui_rx,
            snapshots,
            renderer: Renderer::new(),
            force_render: true,
        })
    }

    /// Runner on the real terminal, the HTTP API and the system clipboard.
    pub fn new_with_real(config: Config, tui: Arc<Mutex<dyn tui::TuiLike + Send>>) -> Result<Self> {
        let source: Arc<dyn DriverSource> = Arc::new(ApiClient::new(&config.api)?);
        let clipboard: Arc<dyn ClipboardWriter> = Arc::new(SystemClipboard::new());
        let event_source = EventSource::real(Arc::clone(&tui));
        Self::new(config, tui, event_source, source, clipboard)
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Run until the state asks to quit.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.runtime.send_msg(Msg::Nav(NavMsg::ShowDrivers));

        loop {
            self.step().await?;

            let system = &self.runtime.state().system;
            if system.should_quit {
                break;
            }
            if system.should_suspend {
                self.suspend().await?;
                continue;
            }

            tokio::select! {
                event = self.event_source.next() => self.handle_event(event),
                _ = self.runtime.recv_external() => {}
            }
        }

        self.runtime.shutdown();
        self.tui.lock().await.exit()?;
        Ok(())
    }

    /// One update cycle followed by the pending resize and, if needed, a draw.
    pub async fn step(&mut self) -> Result<()> {
        match self.runtime.run_update_cycle() {
            Ok(executed) => {
                for line in executed {
                    log::trace!("{line}");
                }
            }
            Err(e) => {
                log::error!("Runtime error: {e}");
                self.runtime
                    .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
            }
        }

        let mut resizes = Vec::new();
        while let Ok(TuiCommand::Resize { width, height }) = self.tui_rx.try_recv() {
            resizes.push((width, height));
        }
        if let Some((width, height)) = Coalescer::decide_resize(&resizes) {
            self.tui
                .lock()
                .await
                .resize(Rect::new(0, 0, width, height))?;
            self.force_render = true;
        }

        let changed = self.snapshots.has_changed().unwrap_or(false);
        if Coalescer::decide_render(changed, self.force_render) {
            let snapshot = Arc::clone(&*self.snapshots.borrow_and_update());
            self.renderer.render(&self.tui, &snapshot).await?;
            self.force_render = false;
        }
        Ok(())
    }

    async fn suspend(&mut self) -> Result<()> {
        {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            tui.enter()?;
        }
        self.runtime.send_msg(Msg::System(SystemMsg::Resume));
        self.force_render = true;
        Ok(())
    }

    fn handle_event(&mut self, event: Option<tui::Event>) {
        let raw = match event {
            None | Some(tui::Event::Quit) | Some(tui::Event::Closed) => Some(RawMsg::Quit),
            Some(tui::Event::Key(key)) => Some(RawMsg::Key(key)),
            Some(tui::Event::Resize(width, height)) => Some(RawMsg::Resize(width, height)),
            Some(tui::Event::Tick) => Some(RawMsg::Tick),
            Some(tui::Event::Render) => Some(RawMsg::Render),
            Some(tui::Event::Error) => Some(RawMsg::Error("Terminal input error".to_string())),
            Some(tui::Event::Init) => {
                self.force_render = true;
                None
            }
            Some(tui::Event::Paste(_))
            | Some(tui::Event::Mouse(_))
            | Some(tui::Event::FocusGained)
            | Some(tui::Event::FocusLost) => None,
        };
        if let Some(raw) = raw {
            self.runtime.send_raw_msg(raw);
        }
    }
}
