//! One play-through, from the first tick to the crash.
//!
//! A session is never rewound: restarting replaces it with `Session::new()`.

use crate::constants::{DODGE_REWARD, INITIAL_SPAWN_DELAY, RAMP_SPEED_INCREMENT};
use crate::core::rules::{self, CollisionDetector};
use crate::core::{Car, Obstacle, RandomSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// What happened during a single tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub spawned: Option<Obstacle>,
    pub dodged: u32,
    pub crashed: bool,
    pub ramped: bool,
}

impl TickReport {
    pub fn is_empty(&self) -> bool {
        *self == TickReport::default()
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    car: Car,
    obstacles: Vec<Obstacle>,
    score: u32,
    phase: Phase,
    spawn_timer: u32,
    spawn_delay: u32,
    ramp_timer: u32,
    ticks: u64,
}

impl Session {
    pub fn new() -> Self {
        Session {
            car: Car::new(),
            obstacles: Vec::new(),
            score: 0,
            phase: Phase::Playing,
            spawn_timer: 0,
            spawn_delay: INITIAL_SPAWN_DELAY,
            ramp_timer: 0,
            ticks: 0,
        }
    }

    pub fn car(&self) -> &Car {
        &self.car
    }

    pub fn car_mut(&mut self) -> &mut Car {
        &mut self.car
    }

    /// Live obstacles, oldest first.
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn spawn_delay(&self) -> u32 {
        self.spawn_delay
    }

    pub fn spawn_timer(&self) -> u32 {
        self.spawn_timer
    }

    pub fn ramp_timer(&self) -> u32 {
        self.ramp_timer
    }

    /// Ticks simulated while playing.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advances the simulation one step. Does nothing once the game is over.
    pub fn tick(&mut self, random: &mut impl RandomSource) -> TickReport {
        let mut report = TickReport::default();
        if self.is_game_over() {
            return report;
        }
        self.ticks += 1;

        self.spawn_timer += 1;
        if rules::spawn_due(self.spawn_timer, self.spawn_delay) {
            let obstacle = Obstacle::spawn(random);
            report.spawned = Some(obstacle.clone());
            self.obstacles.push(obstacle);
            self.spawn_timer = 0;
        }

        let mut index = 0;
        while index < self.obstacles.len() {
            let obstacle = &mut self.obstacles[index];
            obstacle.advance();

            if obstacle.is_past_bottom() {
                self.obstacles.remove(index);
                self.score += DODGE_REWARD;
                report.dodged += 1;
                continue;
            }

            if CollisionDetector::collides(&self.car, obstacle) {
                self.phase = Phase::GameOver;
                report.crashed = true;
                return report;
            }
            index += 1;
        }

        self.ramp_timer += 1;
        if rules::ramp_due(self.ramp_timer) {
            for obstacle in &mut self.obstacles {
                obstacle.accelerate(RAMP_SPEED_INCREMENT);
            }
            self.spawn_delay = rules::ramped_spawn_delay(self.spawn_delay);
            self.ramp_timer = 0;
            report.ramped = true;
        }

        report
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl Session {
    pub(crate) fn push_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::ScriptedRandom;
    use crate::core::Rgb;
    use crate::geometry::Lane;

    fn run(session: &mut Session, random: &mut ScriptedRandom, ticks: u32) -> Vec<TickReport> {
        (0..ticks).map(|_| session.tick(random)).collect()
    }

    #[test]
    fn test_new_session_is_fresh() {
        let session = Session::new();
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.score(), 0);
        assert!(session.obstacles().is_empty());
        assert_eq!(session.spawn_delay(), 60);
        assert_eq!(session.spawn_timer(), 0);
        assert_eq!(session.ramp_timer(), 0);
        assert_eq!(session.car().lane(), Lane::Center);
    }

    #[test]
    fn test_first_spawn_after_delay() {
        let mut session = Session::new();
        let mut random = ScriptedRandom::obstacles(0, 3);
        let reports = run(&mut session, &mut random, 59);
        assert!(reports.iter().all(|r| r.spawned.is_none()));
        assert!(session.obstacles().is_empty());

        let report = session.tick(&mut random);
        assert!(report.spawned.is_some());
        assert_eq!(session.obstacles().len(), 1);
        assert_eq!(session.spawn_timer(), 0);
        // Spawned then advanced in the same tick.
        assert_eq!(session.obstacles()[0].y(), -57.0);
    }

    #[test]
    fn test_obstacle_y_strictly_increases() {
        let mut session = Session::new();
        let mut random = ScriptedRandom::obstacles(0, 3);
        run(&mut session, &mut random, 60);
        let mut last = session.obstacles()[0].y();
        for _ in 0..150 {
            session.tick(&mut random);
            let y = session.obstacles()[0].y();
            assert!(y > last);
            last = y;
        }
    }

    #[test]
    fn test_dodged_obstacle_scores_ten() {
        let mut session = Session::new();
        session.car_mut().move_right();
        let mut random = ScriptedRandom::obstacles(0, 7);

        let mut score_changes = 0;
        let mut previous = session.score();
        for _ in 0..400 {
            let report = session.tick(&mut random);
            let gained = session.score() - previous;
            assert_eq!(gained, report.dodged * 10);
            if gained > 0 {
                score_changes += 1;
            }
            previous = session.score();
        }
        assert!(score_changes > 0);
        assert!(!session.is_game_over());
    }

    #[test]
    fn test_obstacle_in_car_lane_ends_game() {
        let mut session = Session::new();
        let mut random = ScriptedRandom::obstacles(1, 5);

        let mut crashed_on = None;
        for tick in 1..=300 {
            let report = session.tick(&mut random);
            if report.crashed {
                crashed_on = Some(tick);
                break;
            }
        }

        // Spawns on tick 60 at -55; at 390 it only touches the car's top edge.
        assert_eq!(crashed_on, Some(60 + 90));
        assert!(session.is_game_over());
        assert_eq!(session.score(), 0);
        let obstacle = &session.obstacles()[0];
        assert!(obstacle.bounding_box().overlaps(&session.car().bounding_box()));
    }

    #[test]
    fn test_game_over_tick_is_a_no_op() {
        let mut session = Session::new();
        let mut random = ScriptedRandom::obstacles(1, 7);
        while !session.tick(&mut random).crashed {}

        let score = session.score();
        let delay = session.spawn_delay();
        let obstacles = session.obstacles().to_vec();
        let ticks = session.ticks();

        for _ in 0..1000 {
            assert!(session.tick(&mut random).is_empty());
        }
        assert_eq!(session.score(), score);
        assert_eq!(session.spawn_delay(), delay);
        assert_eq!(session.obstacles(), obstacles.as_slice());
        assert_eq!(session.ticks(), ticks);
    }

    #[test]
    fn test_crash_stops_the_tick() {
        let mut session = Session::new();
        let color = Rgb::new(150, 150, 150);
        // First obstacle is one step from hitting the car, the second
        // must not move on the crash tick.
        let mut hitting = Obstacle::new(Lane::Center, 10.0, color);
        for _ in 0..45 {
            hitting.advance();
        }
        session.push_obstacle(hitting);
        session.push_obstacle(Obstacle::new(Lane::Left, 4.0, color));

        let mut random = ScriptedRandom::obstacles(0, 3);
        let report = session.tick(&mut random);
        assert!(report.crashed);
        assert_eq!(session.obstacles()[1].y(), -60.0);
        assert_eq!(session.ramp_timer(), 0);
    }

    #[test]
    fn test_ramp_after_300_ticks() {
        let mut session = Session::new();
        let mut random = ScriptedRandom::obstacles(0, 3);
        let reports = run(&mut session, &mut random, 299);
        assert!(reports.iter().all(|r| !r.ramped));
        assert_eq!(session.spawn_delay(), 60);

        let report = session.tick(&mut random);
        assert!(report.ramped);
        assert_eq!(session.ramp_timer(), 0);
        assert_eq!(session.spawn_delay(), 55);
        assert!(!session.obstacles().is_empty());
        for obstacle in session.obstacles() {
            assert_eq!(obstacle.speed(), 3.5);
        }
    }

    #[test]
    fn test_spawn_delay_floors_at_twenty() {
        let mut session = Session::new();
        session.car_mut().move_right();
        let mut random = ScriptedRandom::obstacles(0, 7);
        let mut delays = vec![session.spawn_delay()];
        for _ in 0..12 {
            run(&mut session, &mut random, 300);
            delays.push(session.spawn_delay());
        }
        assert!(!session.is_game_over());
        assert!(delays.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(delays[1], 55);
        assert_eq!(delays[8], 20);
        assert_eq!(*delays.last().unwrap(), 20);
    }
}
