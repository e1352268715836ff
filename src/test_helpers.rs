//! Fixtures shared by unit and integration tests

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};
use std::time::Duration;

use color_eyre::eyre::Result;
use futures::future::BoxFuture;

use crate::{
    core::{
        msg::{
            loading::{FetchOutcome, LoadingMsg},
            nav::NavMsg,
            Msg,
        },
        state::AppState,
        update::update,
    },
    domain::{driver::Driver, profile::ProfileDraft},
    infrastructure::{
        api::{ApiError, DriverSource},
        config::Config,
    },
};

/// Five drivers with distinct names, emails and vehicle states
pub fn sample_drivers() -> Vec<Driver> {
    vec![
        Driver::new("d-1", "Ada", "Lovelace")
            .email("Ada@Fleet.io")
            .phone("+44 20 7946 0001")
            .driving_license_code("LOVEL-001")
            .has_vehicle(true),
        Driver::new("d-2", "Bob", "Smith")
            .email("bob@fleet.io")
            .phone("+1 555 0102")
            .driving_license_code("SMITH-002"),
        Driver::new("d-3", "Carol", "Jones")
            .email("carol@fleet.io")
            .phone("+1 555 0103")
            .driving_license_code("JONES-003")
            .has_vehicle(true),
        Driver::new("d-4", "Dan", "Brown")
            .email("dan@depot.io")
            .phone("+1 555 0104")
            .driving_license_code("BROWN-004"),
        Driver::new("d-5", "Eve", "Adams")
            .email("eve@depot.io")
            .phone("+1 555 0105")
            .driving_license_code("ADAMS-005")
            .has_vehicle(true),
    ]
}

/// `n` generated drivers, ids `d-000`, `d-001`, ...
pub fn generated_drivers(n: usize) -> Vec<Driver> {
    (0..n)
        .map(|i| {
            Driver::new(format!("d-{i:03}"), format!("Name{i:03}"), "Driver")
                .email(format!("driver{i}@fleet.io"))
                .has_vehicle(i % 2 == 0)
        })
        .collect()
}

/// AppState built from the shipped default configuration
pub fn default_state() -> AppState {
    AppState::new_with_config(Config::defaults().unwrap_or_default())
}

/// Mounts the drivers screen and completes both the fetch and the
/// progress simulator with `drivers`.
pub fn loaded_state(drivers: Vec<Driver>) -> AppState {
    let (mut state, _) = update(Msg::Nav(NavMsg::ShowDrivers), default_state());
    let generation = state.loading.generation();
    (state, _) = update(
        Msg::Loading(LoadingMsg::FetchSettled {
            generation,
            outcome: FetchOutcome::Loaded(drivers),
        }),
        state,
    );
    for _ in 0..state.loading.settings().ticks() {
        (state, _) = update(Msg::Loading(LoadingMsg::ProgressTick { generation }), state);
    }
    state
}

/// In-process [`DriverSource`] with a configurable latency and failure
#[derive(Debug, Default)]
pub struct StaticDriverSource {
    drivers: Vec<Driver>,
    latency: Duration,
    fail_status: Option<u16>,
    reject_create: bool,
    fetches: AtomicUsize,
    created: Mutex<Vec<ProfileDraft>>,
}

impl StaticDriverSource {
    pub fn new(drivers: Vec<Driver>) -> Self {
        Self {
            drivers,
            ..Default::default()
        }
    }

    pub fn latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Fetches fail with this HTTP status; 401 maps to [`ApiError::Unauthorized`].
    pub fn failing_with(mut self, status: u16) -> Self {
        self.fail_status = Some(status);
        self
    }

    pub fn rejecting_creates(mut self) -> Self {
        self.reject_create = true;
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn created(&self) -> Vec<ProfileDraft> {
        self.created
            .lock()
            .map(|created| created.clone())
            .unwrap_or_default()
    }
}

impl DriverSource for StaticDriverSource {
    fn fetch_drivers(&self) -> BoxFuture<'_, Result<Vec<Driver>>> {
        Box::pin(async move {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if !self.latency.is_zero() {
                tokio::time::sleep(self.latency).await;
            }
            match self.fail_status {
                Some(401) => Err(ApiError::Unauthorized.into()),
                Some(status) => Err(ApiError::Status {
                    status,
                    body: String::new(),
                }
                .into()),
                None => Ok(self.drivers.clone()),
            }
        })
    }

    fn create_driver(&self, draft: ProfileDraft) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            if self.reject_create {
                return Err(ApiError::Status {
                    status: 422,
                    body: "email already registered".to_string(),
                }
                .into());
            }
            if let Ok(mut created) = self.created.lock() {
                created.push(draft);
            }
            Ok(())
        })
    }
}
