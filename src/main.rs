//! Ball Catch entry point
//!
//! Loads settings, opens the window and runs the frame loop:
//! read input, advance the simulation in fixed steps, render.

use ball_catch::audio::AudioManager;
use ball_catch::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use ball_catch::persistence::JsonFileStore;
use ball_catch::platform::{FrameClock, FrameInput, InputLatch};
use ball_catch::renderer::{self, Background};
use ball_catch::{Game, Settings};

fn window_conf() -> macroquad::window::Conf {
    macroquad::window::Conf {
        window_title: "Advanced Fun Ball Puzzle".to_owned(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..macroquad::window::Conf::default()
    }
}

async fn run(settings: Settings, seed: u64) {
    let audio = AudioManager::load(&settings).await;
    log::info!("Sound effects ready (volume {:.2})", audio.volume());
    let store = JsonFileStore::new(&settings.high_score_path);
    log::info!("High score record: {}", store.path().display());
    let mut game = Game::new(seed, store, audio);
    let background = Background::generate(seed);

    let mut clock = FrameClock::default();
    let mut latch = InputLatch::default();

    loop {
        let frame = FrameInput::poll();
        if frame.quit {
            log::info!("Quit requested");
            break;
        }
        latch.observe(&frame);

        let steps = clock.advance(macroquad::time::get_frame_time());
        for _ in 0..steps {
            let input = latch.take();
            game.step(&input);
        }

        let fps = settings.show_fps.then(macroquad::time::get_fps);
        renderer::draw_frame(game.state(), game.high_score(), &background, fps);

        macroquad::window::next_frame().await;
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Ball Catch starting...");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Session seed {}", seed);

    macroquad::Window::from_config(window_conf(), run(settings, seed));
}
