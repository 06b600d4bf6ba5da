// Process-lifetime counters. Nothing here is written to disk.
use std::time::{Duration, Instant};

use crate::constants::INITIAL_SPAWN_DELAY;
use crate::core::TickReport;

pub struct Statistics {
    pub runs_started: u32,
    pub best_score: u32,
    pub obstacles_spawned: u32,
    pub obstacles_dodged: u32,
    pub crashes: u32,
    pub ticks_played: u64,
    pub min_spawn_delay: u32,

    started_at: Instant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsSummary {
    pub runs_started: u32,
    pub best_score: u32,
    pub obstacles_spawned: u32,
    pub obstacles_dodged: u32,
    pub crashes: u32,
    pub ticks_played: u64,
    pub min_spawn_delay: u32,
    pub dodge_rate: f64,
    pub elapsed: Duration,
}

impl Statistics {
    pub fn new() -> Self {
        Statistics {
            runs_started: 1,
            best_score: 0,
            obstacles_spawned: 0,
            obstacles_dodged: 0,
            crashes: 0,
            ticks_played: 0,
            min_spawn_delay: INITIAL_SPAWN_DELAY,
            started_at: Instant::now(),
        }
    }

    /// Folds one played tick into the counters. `score` and `spawn_delay`
    /// are the session values after the tick.
    pub fn record_tick(&mut self, report: &TickReport, score: u32, spawn_delay: u32) {
        self.ticks_played += 1;
        if report.spawned.is_some() {
            self.obstacles_spawned += 1;
        }
        self.obstacles_dodged += report.dodged;
        if report.crashed {
            self.crashes += 1;
        }
        self.best_score = self.best_score.max(score);
        self.min_spawn_delay = self.min_spawn_delay.min(spawn_delay);
    }

    pub fn record_restart(&mut self) {
        self.runs_started += 1;
    }

    pub fn get_summary(&self) -> StatisticsSummary {
        let dodge_rate = if self.obstacles_spawned > 0 {
            self.obstacles_dodged as f64 / self.obstacles_spawned as f64 * 100.0
        } else {
            0.0
        };

        StatisticsSummary {
            runs_started: self.runs_started,
            best_score: self.best_score,
            obstacles_spawned: self.obstacles_spawned,
            obstacles_dodged: self.obstacles_dodged,
            crashes: self.crashes,
            ticks_played: self.ticks_played,
            min_spawn_delay: self.min_spawn_delay,
            dodge_rate,
            elapsed: self.started_at.elapsed(),
        }
    }

    pub fn log_summary(&self) {
        let summary = self.get_summary();
        log::info!(
            "Session summary: {} runs, best score {}, {} crashes, {:.1}s played",
            summary.runs_started,
            summary.best_score,
            summary.crashes,
            summary.elapsed.as_secs_f32()
        );
        log::info!(
            "Obstacles: {} spawned, {} dodged ({:.1}%), fastest spawn delay {} ticks, {} ticks simulated",
            summary.obstacles_spawned,
            summary.obstacles_dodged,
            summary.dodge_rate,
            summary.min_spawn_delay,
            summary.ticks_played
        );
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}
