// src/main.rs - window, input and frame loop around the simulation
use sdl2::event::Event;

mod constants;
mod core;
mod frame_clock;
mod game;
mod geometry;
mod input;
mod rendering;
mod statistics;

use constants::{FRAME_DURATION, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::core::SeededRandom;
use frame_clock::FrameClock;
use game::Game;
use input::{InputAction, InputHandler};
use rendering::Renderer;

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window(WINDOW_TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let canvas = window
        .into_canvas()
        .accelerated()
        .build()
        .map_err(|e| e.to_string())?;

    let random = SeededRandom::from_entropy();
    log::info!("Starting {}x{} run, seed {}", WINDOW_WIDTH, WINDOW_HEIGHT, random.seed());

    let mut game = Game::new(random);
    let mut renderer = Renderer::new(canvas);
    let mut input = InputHandler::new();
    let mut clock = FrameClock::new(FRAME_DURATION);
    let mut event_pump = sdl_context.event_pump()?;

    print_controls();

    while !input.quit_requested() {
        let events: Vec<Event> = event_pump.poll_iter().collect();
        let actions = input.collect_frame(events, &event_pump.keyboard_state());

        for action in actions {
            match action {
                InputAction::Command(command) => game.apply(command),
                InputAction::Quit => break,
            }
        }
        if input.quit_requested() {
            break;
        }

        game.update();
        renderer.render(&game)?;
        clock.tick();
    }

    log::info!("Exiting after {} frames ({} overran)", clock.frames(), clock.overruns());
    game.statistics().log_summary();
    Ok(())
}

fn print_controls() {
    println!("=== CONTROLS ===");
    println!("← Arrow Left:  Move one lane left");
    println!("→ Arrow Right: Move one lane right");
    println!("R:             Restart after a crash");
    println!("Esc:           Quit");
}
