//! Headless autoplay session
//!
//! Plays the game loop the way a front end would: deal a group, let the CPU
//! steer it, land it, and resolve the cascade on the live grid. Used by the
//! `sevens` binary and by integration tests.

use anyhow::{anyhow, Result};

use crate::core::{BlockQueue, CascadeResult, Grid, GroupPattern, Settings, SevensRule, SevensScoreTable};
use crate::cpu::CpuManager;
use crate::types::{Coord, CpuMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayConfig {
    pub mode: CpuMode,
    pub turns: u32,
    pub seed: Option<u32>,
    pub layout: GroupPattern,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            mode: CpuMode::Normal,
            turns: 20,
            seed: None,
            layout: GroupPattern::square(),
        }
    }
}

pub fn parse_autoplay_args(args: &[String]) -> Result<AutoplayConfig> {
    let mut config = AutoplayConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = |i: usize| {
            args.get(i)
                .ok_or_else(|| anyhow!("autoplay: missing value for {}", flag))
        };
        match flag {
            "--mode" => {
                i += 1;
                let v = value(i)?;
                config.mode = CpuMode::from_str(v)
                    .ok_or_else(|| anyhow!("autoplay: invalid --mode value: {}", v))?;
            }
            "--turns" => {
                i += 1;
                let v = value(i)?;
                config.turns = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("autoplay: invalid --turns value: {}", v))?;
            }
            "--seed" => {
                i += 1;
                let v = value(i)?;
                config.seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("autoplay: invalid --seed value: {}", v))?,
                );
            }
            "--layout" => {
                i += 1;
                let v = value(i)?;
                config.layout = match v.as_str() {
                    "square" => GroupPattern::square(),
                    "pair" => GroupPattern::pair(),
                    other => return Err(anyhow!("autoplay: unknown --layout: {}", other)),
                };
            }
            other => {
                return Err(anyhow!("autoplay: unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(config)
}

/// What happened during one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub turn: u32,
    /// Group anchor after the CPU moved it, before landing
    pub anchor: Coord,
    pub landed: usize,
    pub cascade: CascadeResult,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Played(TurnReport),
    /// The next group could not spawn.
    ToppedOut,
}

pub struct Session {
    settings: Settings,
    grid: Grid,
    queue: BlockQueue,
    cpu: CpuManager,
    rule: SevensRule,
    table: SevensScoreTable,
    layout: GroupPattern,
    score: u32,
    turn: u32,
}

impl Session {
    pub fn new(settings: Settings, mode: CpuMode, layout: GroupPattern) -> Self {
        let mut cpu = CpuManager::new(settings);
        cpu.change_mode(mode);
        Self {
            grid: Grid::new(&settings),
            queue: BlockQueue::new(settings.seed),
            cpu,
            rule: SevensRule::new(settings.match_target),
            table: SevensScoreTable {
                points_per_number: settings.points_per_number,
            },
            layout,
            score: 0,
            turn: 0,
            settings,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn cpu(&self) -> &CpuManager {
        &self.cpu
    }

    pub fn play_turn(&mut self) -> TurnOutcome {
        let blocks = self.queue.next_pattern(self.layout.offsets().len());
        if !self.grid.spawn_group(&self.settings, &blocks, &self.layout) {
            return TurnOutcome::ToppedOut;
        }
        self.cpu.on_update(&mut self.grid);
        let anchor = self
            .grid
            .group()
            .map(|g| g.location())
            .unwrap_or_default();

        let landed = self.grid.land_group();
        let cascade = self.grid.resolve(&self.rule, &self.table);
        self.score = self.score.saturating_add(cascade.total);
        self.turn += 1;

        TurnOutcome::Played(TurnReport {
            turn: self.turn,
            anchor,
            landed,
            cascade,
        })
    }
}
