use lib_rain::{GameSession, RainPhase};
use macroquad::prelude::*;

use crate::sys::on_mobile;

const COUNTER_FONT_SIZE: u16 = 48;
const HINT_FONT_SIZE: u16 = 20;
const CELEBRATION_FONT_SIZE: u16 = 56;

static CELEBRATION_TEXT: &'static str = "BERRY GOOD!";
static HINT_TEXT_DESK: &'static str = "Click the falling berries";
static HINT_TEXT_MOBILE: &'static str = "Tap the falling berries";

pub struct Ui;

impl Ui {
    pub fn new() -> Self {
        Self
    }

    pub fn draw(&self, session: &GameSession) {
        if session.phase() == RainPhase::AwaitLayout {
            return;
        }

        set_default_camera();

        let counter = session.counter_text();
        Self::draw_centered(&counter, 64.0, COUNTER_FONT_SIZE, Color::from_hex(0xDDFBFF));

        if session.taps() == 0 && session.phase() == RainPhase::Raining {
            Self::draw_centered(
                Self::hint_text(),
                100.0,
                HINT_FONT_SIZE,
                Color::from_hex(0x8FA8B3),
            );
        }

        if session.phase() == RainPhase::Celebrating {
            Self::draw_centered(
                CELEBRATION_TEXT,
                screen_height() / 2.0,
                CELEBRATION_FONT_SIZE,
                Color::from_hex(0xFFE08A),
            );
        }
    }

    fn hint_text() -> &'static str {
        if on_mobile() {
            HINT_TEXT_MOBILE
        } else {
            HINT_TEXT_DESK
        }
    }

    fn draw_centered(text: &str, y: f32, font_size: u16, color: Color) {
        let center = get_text_center(text, None, font_size, 1.0, 0.0);
        draw_text_ex(
            text,
            screen_width() / 2.0 - center.x,
            y,
            TextParams {
                font: None,
                font_size,
                color,
                ..Default::default()
            },
        );
    }
}
