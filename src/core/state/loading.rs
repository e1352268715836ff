//! Loading lifecycle of the drivers screen
//!
//! Two independent sources gate the loading indicator: the drivers fetch and
//! the cosmetic [`ProgressSimulator`]. Each reports through its own message;
//! [`LoadingState::is_finished`] is the single rule joining them, so the
//! indicator is dismissed by whichever of the two settles last.

use serde::Deserialize;

/// Timing of the progress simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ProgressSettings {
    /// Interval between ticks in milliseconds
    #[serde(default = "ProgressSettings::default_tick_ms")]
    pub tick_ms: u64,
    /// Amount added per tick
    #[serde(default = "ProgressSettings::default_step")]
    pub step: u32,
    /// Value at which the simulator completes
    #[serde(default = "ProgressSettings::default_ceiling")]
    pub ceiling: u32,
}

impl ProgressSettings {
    fn default_tick_ms() -> u64 {
        200
    }

    fn default_step() -> u32 {
        10
    }

    fn default_ceiling() -> u32 {
        100
    }

    /// Number of ticks needed to reach the ceiling.
    pub fn ticks(&self) -> u32 {
        self.ceiling.div_ceil(self.step.max(1))
    }
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self {
            tick_ms: Self::default_tick_ms(),
            step: Self::default_step(),
            ceiling: Self::default_ceiling(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressPhase {
    Running,
    Complete,
}

/// Timer-driven counter, unrelated to actual transfer progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSimulator {
    value: u32,
    step: u32,
    ceiling: u32,
    phase: ProgressPhase,
}

impl ProgressSimulator {
    pub fn new(settings: ProgressSettings) -> Self {
        let mut simulator = Self {
            value: 0,
            step: settings.step.max(1),
            ceiling: settings.ceiling,
            phase: ProgressPhase::Running,
        };
        if simulator.ceiling == 0 {
            simulator.phase = ProgressPhase::Complete;
        }
        simulator
    }

    /// Advances by one step. Ticks after completion are ignored.
    pub fn tick(&mut self) -> ProgressPhase {
        if self.phase == ProgressPhase::Running {
            self.value = (self.value + self.step).min(self.ceiling);
            if self.value >= self.ceiling {
                self.phase = ProgressPhase::Complete;
            }
        }
        self.phase
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn phase(&self) -> ProgressPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == ProgressPhase::Complete
    }

    /// Progress as a ratio in `0.0..=1.0`, for gauges.
    pub fn ratio(&self) -> f64 {
        if self.ceiling == 0 {
            1.0
        } else {
            f64::from(self.value) / f64::from(self.ceiling)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Pending,
    Settled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingState {
    settings: ProgressSettings,
    generation: u64,
    mounted: bool,
    progress: ProgressSimulator,
    fetch: FetchStatus,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new(ProgressSettings::default())
    }
}

impl LoadingState {
    pub fn new(settings: ProgressSettings) -> Self {
        Self {
            settings,
            generation: 0,
            mounted: false,
            progress: ProgressSimulator::new(settings),
            fetch: FetchStatus::Pending,
        }
    }

    /// Starts a new load and returns its generation. Results of earlier
    /// generations are ignored from now on.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.mounted = true;
        self.progress = ProgressSimulator::new(self.settings);
        self.fetch = FetchStatus::Pending;
        self.generation
    }

    /// The drivers screen was torn down.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.mounted && self.generation == generation
    }

    /// Returns true when the tick belonged to the current load.
    pub fn tick(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.progress.tick();
        true
    }

    /// Returns true when the result belonged to the current load.
    pub fn settle_fetch(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.fetch = FetchStatus::Settled;
        true
    }

    /// Both the fetch and the simulator have settled.
    pub fn is_finished(&self) -> bool {
        self.fetch == FetchStatus::Settled && self.progress.is_complete()
    }

    pub fn is_loading(&self) -> bool {
        !self.is_finished()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn settings(&self) -> ProgressSettings {
        self.settings
    }

    pub fn progress(&self) -> &ProgressSimulator {
        &self.progress
    }

    pub fn fetch_status(&self) -> FetchStatus {
        self.fetch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_simulator_steps_to_ceiling() {
        let mut simulator = ProgressSimulator::new(ProgressSettings::default());
        let mut previous = simulator.value();

        for i in 1..=10 {
            let phase = simulator.tick();
            assert_eq!(simulator.value(), previous + 10);
            previous = simulator.value();
            if i < 10 {
                assert_eq!(phase, ProgressPhase::Running);
            }
        }
        assert_eq!(simulator.value(), 100);
        assert!(simulator.is_complete());

        // Further ticks are no-ops.
        assert_eq!(simulator.tick(), ProgressPhase::Complete);
        assert_eq!(simulator.value(), 100);
    }

    #[test]
    fn test_simulator_never_exceeds_ceiling() {
        let mut simulator = ProgressSimulator::new(ProgressSettings {
            tick_ms: 200,
            step: 30,
            ceiling: 100,
        });
        for _ in 0..10 {
            simulator.tick();
            assert!(simulator.value() <= 100);
        }
        assert_eq!(simulator.value(), 100);
        assert_eq!(ProgressSettings { tick_ms: 1, step: 30, ceiling: 100 }.ticks(), 4);
    }

    #[test]
    fn test_default_settings_need_ten_ticks() {
        assert_eq!(ProgressSettings::default().ticks(), 10);
    }

    #[test]
    fn test_fetch_first_waits_for_simulator() {
        let mut loading = LoadingState::default();
        let generation = loading.begin();

        assert!(loading.settle_fetch(generation));
        assert!(loading.is_loading());

        for _ in 0..9 {
            loading.tick(generation);
        }
        assert!(loading.is_loading());
        loading.tick(generation);
        assert!(loading.is_finished());
    }

    #[test]
    fn test_simulator_first_waits_for_fetch() {
        let mut loading = LoadingState::default();
        let generation = loading.begin();

        for _ in 0..10 {
            loading.tick(generation);
        }
        assert!(loading.progress().is_complete());
        assert!(loading.is_loading());

        loading.settle_fetch(generation);
        assert!(loading.is_finished());
    }

    #[test]
    fn test_stale_generation_is_ignored() {
        let mut loading = LoadingState::default();
        let first = loading.begin();
        let second = loading.begin();

        assert!(!loading.settle_fetch(first));
        assert!(!loading.tick(first));
        assert_eq!(loading.progress().value(), 0);
        assert_eq!(loading.fetch_status(), FetchStatus::Pending);

        assert!(loading.tick(second));
        assert_eq!(loading.progress().value(), 10);
    }

    #[test]
    fn test_unmounted_load_ignores_results() {
        let mut loading = LoadingState::default();
        let generation = loading.begin();
        loading.unmount();

        assert!(!loading.tick(generation));
        assert!(!loading.settle_fetch(generation));
    }
}
