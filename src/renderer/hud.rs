//! HUD and overlay content
//!
//! Decides what text each phase shows, independent of how it is drawn.

use crate::consts::{SCREEN_HEIGHT, STREAK_THRESHOLD};
use crate::sim::{GamePhase, GameState, Rgb};

pub const YELLOW: Rgb = Rgb(255, 255, 0);
pub const CYAN: Rgb = Rgb(0, 255, 255);
pub const GREEN: Rgb = Rgb(0, 255, 0);
pub const RED: Rgb = Rgb(255, 0, 0);

const TITLE_INSTRUCTIONS: [&str; 10] = [
    "Catch falling balls with your paddle to score points",
    "Use LEFT and RIGHT arrow keys to move",
    "Special power-up balls give bonus effects:",
    "  + : Bonus points",
    "  S : Slow down time",
    "  W : Widen paddle",
    "Catch multiple balls in a row for streak bonus!",
    "Press P to pause/resume the game",
    "",
    "Press SPACE to start",
];

/// Font size class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Large,
    Medium,
    Small,
}

impl TextSize {
    pub fn px(&self) -> u16 {
        match self {
            TextSize::Large => 48,
            TextSize::Medium => 36,
            TextSize::Small => 24,
        }
    }
}

/// A horizontally centered line of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub size: TextSize,
    pub color: Rgb,
    /// Top of the line
    pub y: f32,
}

impl TextLine {
    fn new(text: impl Into<String>, size: TextSize, color: Rgb, y: f32) -> Self {
        Self {
            text: text.into(),
            size,
            color,
            y,
        }
    }
}

/// Timed effect currently running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    SlowTime,
    WidePaddle,
}

impl Indicator {
    pub fn label(&self) -> &'static str {
        match self {
            Indicator::SlowTime => "SLOW TIME",
            Indicator::WidePaddle => "WIDE PADDLE",
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            Indicator::SlowTime => CYAN,
            Indicator::WidePaddle => GREEN,
        }
    }
}

/// In-play status bar
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBar {
    pub score: String,
    pub time: String,
    /// Only while the streak earns a bonus
    pub streak: Option<String>,
    pub indicators: Vec<Indicator>,
}

/// Everything the frame must convey
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    /// Paddle, balls and status bar are drawn
    pub show_playfield: bool,
    pub status: Option<StatusBar>,
    /// Darken the playfield behind the overlay
    pub dim: bool,
    pub overlay: Vec<TextLine>,
}

impl Hud {
    pub fn build(state: &GameState, high_score: u64) -> Self {
        match state.phase {
            GamePhase::Start => Self {
                show_playfield: false,
                status: None,
                dim: false,
                overlay: title_screen(),
            },
            GamePhase::Playing => Self {
                show_playfield: true,
                status: Some(status_bar(state)),
                dim: false,
                overlay: Vec::new(),
            },
            GamePhase::Paused => Self {
                show_playfield: true,
                status: Some(status_bar(state)),
                dim: true,
                overlay: pause_screen(),
            },
            GamePhase::GameOver => Self {
                show_playfield: false,
                status: None,
                dim: false,
                overlay: game_over_screen(state, high_score),
            },
        }
    }
}

fn status_bar(state: &GameState) -> StatusBar {
    let mut indicators = Vec::new();
    if state.effects.is_slow() {
        indicators.push(Indicator::SlowTime);
    }
    if state.paddle.is_wide() {
        indicators.push(Indicator::WidePaddle);
    }
    StatusBar {
        score: format!("Score: {}", state.score()),
        time: format!("Time: {}", state.seconds_remaining()),
        streak: state
            .scoreboard
            .visible_streak()
            .map(|s| format!("Streak: {}x", s)),
        indicators,
    }
}

fn title_screen() -> Vec<TextLine> {
    let mut lines = vec![TextLine::new(
        "Fun Ball Puzzle",
        TextSize::Large,
        Rgb::WHITE,
        100.0,
    )];
    lines.extend(
        TITLE_INSTRUCTIONS
            .iter()
            .enumerate()
            .map(|(i, line)| {
                TextLine::new(*line, TextSize::Small, Rgb::WHITE, 200.0 + 30.0 * i as f32)
            }),
    );
    lines
}

fn pause_screen() -> Vec<TextLine> {
    let mid = SCREEN_HEIGHT / 2.0;
    vec![
        TextLine::new("PAUSED", TextSize::Large, Rgb::WHITE, mid - 50.0),
        TextLine::new("Press P to continue", TextSize::Medium, Rgb::WHITE, mid + 20.0),
    ]
}

fn game_over_screen(state: &GameState, high_score: u64) -> Vec<TextLine> {
    let mut lines = vec![
        TextLine::new("GAME OVER", TextSize::Large, RED, 150.0),
        TextLine::new(
            format!("Your Score: {}", state.score()),
            TextSize::Medium,
            Rgb::WHITE,
            250.0,
        ),
        TextLine::new(
            format!("High Score: {}", high_score),
            TextSize::Medium,
            YELLOW,
            300.0,
        ),
    ];
    let max_streak = state.scoreboard.max_streak;
    if max_streak >= STREAK_THRESHOLD {
        lines.push(TextLine::new(
            format!("Max Streak: {}x", max_streak),
            TextSize::Small,
            GREEN,
            350.0,
        ));
    }
    lines.push(TextLine::new(
        "Press SPACE to play again",
        TextSize::Medium,
        Rgb::WHITE,
        400.0,
    ));
    lines.push(TextLine::new(
        "Press ESC to quit",
        TextSize::Small,
        Rgb::WHITE,
        450.0,
    ));
    lines
}
