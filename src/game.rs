use crate::core::{Car, Obstacle, Phase, RandomSource, Session, TickReport};
use crate::statistics::Statistics;

/// Commands the input layer can send to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Restart,
}

/// Drives sessions: applies commands, ticks the current session and starts
/// a fresh one on restart. The random source outlives sessions so restarts
/// continue the same stream.
pub struct Game<R: RandomSource> {
    session: Session,
    random: R,
    statistics: Statistics,
}

impl<R: RandomSource> Game<R> {
    pub fn new(random: R) -> Self {
        Game {
            session: Session::new(),
            random,
            statistics: Statistics::new(),
        }
    }

    pub fn apply(&mut self, command: Command) {
        match (command, self.session.phase()) {
            (Command::MoveLeft, Phase::Playing) => self.session.car_mut().move_left(),
            (Command::MoveRight, Phase::Playing) => self.session.car_mut().move_right(),
            (Command::Restart, Phase::GameOver) => self.restart(),
            // Steering on the game-over screen and restarting mid-run are ignored.
            _ => {}
        }
    }

    pub fn restart(&mut self) {
        log::info!(
            "Restarting after a score of {} (best {})",
            self.session.score(),
            self.statistics.best_score
        );
        self.session = Session::new();
        self.statistics.record_restart();
    }

    pub fn update(&mut self) -> TickReport {
        if self.session.is_game_over() {
            return TickReport::default();
        }

        let report = self.session.tick(&mut self.random);
        self.statistics
            .record_tick(&report, self.session.score(), self.session.spawn_delay());

        if let Some(obstacle) = &report.spawned {
            log::debug!(
                "Spawned obstacle in {:?} lane at speed {}",
                obstacle.lane(),
                obstacle.speed()
            );
        }
        if report.dodged > 0 {
            log::debug!("Dodged {} obstacle(s), score {}", report.dodged, self.session.score());
        }
        if report.ramped {
            log::info!(
                "Difficulty up: spawn delay {} ticks, {} obstacles sped up",
                self.session.spawn_delay(),
                self.session.obstacles().len()
            );
        }
        if report.crashed {
            log::info!(
                "Crash in {:?} lane after {} ticks, final score {}",
                self.session.car().lane(),
                self.session.ticks(),
                self.session.score()
            );
        }

        report
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn car(&self) -> &Car {
        self.session.car()
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        self.session.obstacles()
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }

    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::ScriptedRandom;
    use crate::geometry::Lane;

    fn crash(game: &mut Game<ScriptedRandom>) {
        for _ in 0..10_000 {
            if game.update().crashed {
                return;
            }
        }
        panic!("car never crashed");
    }

    #[test]
    fn test_moves_apply_while_playing() {
        let mut game = Game::new(ScriptedRandom::obstacles(0, 3));
        game.apply(Command::MoveLeft);
        assert_eq!(game.car().lane(), Lane::Left);
        game.apply(Command::MoveRight);
        game.apply(Command::MoveRight);
        assert_eq!(game.car().lane(), Lane::Right);
    }

    #[test]
    fn test_restart_while_playing_is_a_no_op() {
        let mut game = Game::new(ScriptedRandom::obstacles(0, 3));
        for _ in 0..200 {
            game.update();
        }
        let obstacles = game.obstacles().len();
        game.apply(Command::Restart);
        assert!(!game.is_game_over());
        assert_eq!(game.session().ticks(), 200);
        assert_eq!(game.obstacles().len(), obstacles);
        assert_eq!(game.statistics().runs_started, 1);
    }

    #[test]
    fn test_moves_ignored_after_crash() {
        let mut game = Game::new(ScriptedRandom::obstacles(1, 6));
        crash(&mut game);
        game.apply(Command::MoveLeft);
        assert_eq!(game.car().lane(), Lane::Center);
    }

    #[test]
    fn test_update_after_crash_changes_nothing() {
        let mut game = Game::new(ScriptedRandom::obstacles(1, 6));
        crash(&mut game);
        let score = game.score();
        let delay = game.session().spawn_delay();
        let obstacles = game.obstacles().to_vec();

        for _ in 0..600 {
            assert!(game.update().is_empty());
        }
        assert_eq!(game.score(), score);
        assert_eq!(game.session().spawn_delay(), delay);
        assert_eq!(game.obstacles(), obstacles.as_slice());
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut game = Game::new(ScriptedRandom::new(vec![0, 7, 150, 150, 150, 1, 3, 150, 150, 150]));
        game.apply(Command::MoveRight);
        game.apply(Command::MoveLeft);
        crash(&mut game);
        assert!(game.is_game_over());
        assert!(game.score() > 0);
        assert!(!game.obstacles().is_empty());

        game.apply(Command::Restart);
        assert!(!game.is_game_over());
        assert_eq!(game.score(), 0);
        assert!(game.obstacles().is_empty());
        assert_eq!(game.car().lane(), Lane::Center);
        assert_eq!(game.session().spawn_delay(), 60);
        assert_eq!(game.session().spawn_timer(), 0);
        assert_eq!(game.session().ramp_timer(), 0);
        assert_eq!(game.statistics().runs_started, 2);
        assert!(game.statistics().best_score > 0);
    }

    #[test]
    fn test_direct_restart_mid_run() {
        let mut game = Game::new(ScriptedRandom::obstacles(0, 4));
        game.apply(Command::MoveRight);
        for _ in 0..400 {
            game.update();
        }
        assert!(game.score() > 0);

        game.restart();
        assert_eq!(game.score(), 0);
        assert!(game.obstacles().is_empty());
        assert_eq!(game.car().lane(), Lane::Center);
        assert_eq!(game.session().ticks(), 0);
    }

    #[test]
    fn test_car_in_far_lane_collects_score() {
        let mut game = Game::new(ScriptedRandom::obstacles(0, 5));
        game.apply(Command::MoveRight);
        let mut dodged = 0;
        for _ in 0..600 {
            let report = game.update();
            dodged += report.dodged;
            assert!(!report.crashed);
        }
        assert!(dodged > 0);
        assert_eq!(game.score(), dodged * 10);
        assert!(!game.is_game_over());
    }
}
