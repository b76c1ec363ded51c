//! CPU manager - installs the behaviour for the current difficulty and
//! forwards ticks to it

use sevens_core::{Grid, Settings};
use sevens_types::CpuMode;

use crate::behaviour::{CpuBehaviour, NullBehaviour};
use crate::random::RandomMovementBehaviour;
use crate::smart::SmartCpuBehaviour;

pub struct CpuManager {
    settings: Settings,
    mode: CpuMode,
    behaviour: Box<dyn CpuBehaviour>,
}

impl CpuManager {
    /// Starts with no CPU play.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            mode: CpuMode::None,
            behaviour: Box::new(NullBehaviour),
        }
    }

    /// Replace the installed behaviour with a fresh one for `mode`.
    pub fn change_mode(&mut self, mode: CpuMode) {
        self.behaviour = create_behaviour(mode, &self.settings);
        self.mode = mode;
    }

    /// Called once per game tick.
    pub fn on_update(&mut self, grid: &mut Grid) {
        self.behaviour.do_action(grid);
    }

    pub fn mode(&self) -> CpuMode {
        self.mode
    }

    pub fn behaviour_name(&self) -> &'static str {
        self.behaviour.name()
    }
}

pub fn create_behaviour(mode: CpuMode, settings: &Settings) -> Box<dyn CpuBehaviour> {
    match mode {
        CpuMode::None => Box::new(NullBehaviour),
        CpuMode::Easy => Box::new(RandomMovementBehaviour::new(settings.seed)),
        CpuMode::Normal => Box::new(SmartCpuBehaviour::new(*settings)),
    }
}
