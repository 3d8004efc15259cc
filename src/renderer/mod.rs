//! macroquad rendering
//!
//! Draws a borrowed `GameState`; never mutates it.

pub mod background;
pub mod hud;

pub use background::Background;
pub use hud::Hud;

use macroquad::color::Color;
use macroquad::shapes::{
    draw_circle, draw_circle_lines, draw_rectangle, draw_rectangle_lines,
};
use macroquad::text::{draw_text, measure_text};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{Ball, GameState, Paddle, Rgb};
use hud::{StatusBar, TextLine, TextSize};

const HUD_MARGIN: f32 = 20.0;

fn color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.0, rgb.1, rgb.2, 255)
}

/// Render one complete frame
pub fn draw_frame(state: &GameState, high_score: u64, background: &Background, fps: Option<i32>) {
    draw_background(background);

    let hud = Hud::build(state, high_score);
    if hud.show_playfield {
        draw_paddle(&state.paddle);
        for ball in &state.balls {
            draw_ball(ball);
        }
    }
    if let Some(status) = &hud.status {
        draw_status(status);
    }
    if hud.dim {
        draw_rectangle(
            0.0,
            0.0,
            SCREEN_WIDTH,
            SCREEN_HEIGHT,
            Color::from_rgba(0, 0, 0, 128),
        );
    }
    for line in &hud.overlay {
        draw_centered(line);
    }

    if let Some(fps) = fps {
        draw_text(
            &format!("FPS: {}", fps),
            HUD_MARGIN,
            SCREEN_HEIGHT - HUD_MARGIN,
            TextSize::Small.px() as f32,
            color(Rgb::WHITE),
        );
    }
}

fn draw_background(background: &Background) {
    for band in &background.bands {
        draw_rectangle(
            0.0,
            band.y,
            SCREEN_WIDTH,
            band.height,
            Color::from_rgba(0, 0, band.blue, 255),
        );
    }
    for star in &background.stars {
        draw_circle(star.x, star.y, star.radius, color(Rgb::WHITE));
    }
}

fn draw_paddle(paddle: &Paddle) {
    let rect = paddle.bounds();
    draw_rectangle(rect.left, rect.top, rect.width(), rect.height(), color(paddle.color));
    if paddle.is_wide() {
        draw_rectangle_lines(
            rect.left,
            rect.top,
            rect.width(),
            rect.height(),
            2.0,
            color(Rgb::WHITE),
        );
    }
}

fn draw_ball(ball: &Ball) {
    let r = ball.radius_f();
    draw_circle(ball.pos.x, ball.pos.y, r, color(ball.color.rgb()));

    if let Some(kind) = ball.powerup {
        draw_circle_lines(ball.pos.x, ball.pos.y, r - 3.0, 2.0, color(Rgb::WHITE));

        let size = TextSize::Small.px();
        let dims = measure_text(kind.glyph(), None, size, 1.0);
        draw_text(
            kind.glyph(),
            ball.pos.x - dims.width / 2.0,
            ball.pos.y - dims.height / 2.0 + dims.offset_y,
            size as f32,
            color(Rgb::WHITE),
        );
    }
}

/// Draw text with its top-left corner at (x, y)
fn draw_text_top(text: &str, x: f32, y: f32, size: TextSize, rgb: Rgb) {
    let dims = measure_text(text, None, size.px(), 1.0);
    draw_text(text, x, y + dims.offset_y, size.px() as f32, color(rgb));
}

fn draw_status(status: &StatusBar) {
    draw_text_top(&status.score, HUD_MARGIN, HUD_MARGIN, TextSize::Medium, Rgb::WHITE);

    let time_width = measure_text(&status.time, None, TextSize::Medium.px(), 1.0).width;
    draw_text_top(
        &status.time,
        SCREEN_WIDTH - time_width - HUD_MARGIN,
        HUD_MARGIN,
        TextSize::Medium,
        Rgb::WHITE,
    );

    if let Some(streak) = &status.streak {
        draw_centered(&TextLine {
            text: streak.clone(),
            size: TextSize::Small,
            color: hud::YELLOW,
            y: HUD_MARGIN,
        });
    }

    let mut y = 60.0;
    for indicator in &status.indicators {
        draw_text_top(indicator.label(), HUD_MARGIN, y, TextSize::Small, indicator.color());
        y += 30.0;
    }
}

fn draw_centered(line: &TextLine) {
    if line.text.is_empty() {
        return;
    }
    let width = measure_text(&line.text, None, line.size.px(), 1.0).width;
    draw_text_top(
        &line.text,
        SCREEN_WIDTH / 2.0 - width / 2.0,
        line.y,
        line.size,
        line.color,
    );
}
