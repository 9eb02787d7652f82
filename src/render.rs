use lib_rain::{BERRY_KIND_COUNT, Berry, GameSession, GiantBerry, RainPhase, Transform};
use macroquad::prelude::*;
use macroquad_particles::{self as particles, BlendMode, ColorCurve};
use shipyard::{IntoIter, View, World};

pub const BACKDROP_COLOR: Color = Color::from_rgba(10, 8, 24, 255);
const LEAF_COLOR: Color = Color::from_rgba(92, 164, 60, 255);
const GIANT_COLOR: Color = Color::from_rgba(214, 48, 74, 255);

const BERRY_COLORS: [Color; BERRY_KIND_COUNT as usize] = [
    Color::from_rgba(214, 48, 74, 255),
    Color::from_rgba(232, 74, 95, 255),
    Color::from_rgba(190, 36, 60, 255),
    Color::from_rgba(240, 98, 146, 255),
    Color::from_rgba(170, 50, 106, 255),
    Color::from_rgba(244, 128, 90, 255),
];

fn confetti() -> particles::EmitterConfig {
    particles::EmitterConfig {
        emitting: true,
        lifetime: 1.2,
        lifetime_randomness: 0.7,
        explosiveness: 0.01,
        amount: 40,
        initial_direction_spread: 2.0 * std::f32::consts::PI,
        initial_velocity: 300.0,
        size: 6.0,
        gravity: vec2(0.0, 600.0),
        blend_mode: BlendMode::Alpha,
        colors_curve: ColorCurve {
            start: Color::from_hex(0xFFE08A),
            mid: Color::from_hex(0xFF5E7E),
            end: BLANK,
        },
        ..Default::default()
    }
}

pub struct Render {
    confetti: Option<particles::Emitter>,
}

impl Render {
    pub fn new() -> Self {
        Self { confetti: None }
    }

    pub fn draw(&mut self, world: &World, session: &GameSession) {
        set_default_camera();
        clear_background(BACKDROP_COLOR);

        world.run(Self::draw_berries);
        world.run(Self::draw_giant);

        if session.phase() == RainPhase::Celebrating {
            let emitter = self
                .confetti
                .get_or_insert_with(|| particles::Emitter::new(confetti()));
            emitter.draw(vec2(screen_width() / 2.0, screen_height() / 3.0));
        } else {
            self.confetti = None;
        }
    }

    fn draw_berries(tfs: View<Transform>, berries: View<Berry>) {
        for (tf, berry) in (&tfs, &berries).iter() {
            let radius = berry.size / 2.0;
            let rotation = tf.angle.to_degrees();
            let color = BERRY_COLORS[berry.kind as usize % BERRY_COLORS.len()];

            draw_poly(tf.pos.x, tf.pos.y, 9, radius, rotation, color);

            // The leaf marks the sprite's "up" side, following its rotation
            let leaf = tf.pos + Vec2::from_angle(tf.angle - std::f32::consts::FRAC_PI_2) * radius;
            draw_poly(leaf.x, leaf.y, 3, radius * 0.35, rotation, LEAF_COLOR);

            draw_circle(
                tf.pos.x - radius * 0.3,
                tf.pos.y - radius * 0.3,
                radius * 0.16,
                Color::new(1.0, 1.0, 1.0, 0.35),
            );
        }
    }

    fn draw_giant(tfs: View<Transform>, giants: View<GiantBerry>) {
        for (tf, giant) in (&tfs, &giants).iter() {
            if giant.scale <= 0.0 {
                continue;
            }

            // At full scale the disc covers the whole container
            let full = vec2(screen_width(), screen_height()).length() / 2.0;
            let radius = giant.scale * full;

            draw_poly(tf.pos.x, tf.pos.y, 24, radius, 0.0, GIANT_COLOR);
            draw_poly(
                tf.pos.x,
                tf.pos.y - radius,
                3,
                radius * 0.3,
                0.0,
                LEAF_COLOR,
            );
            draw_circle(
                tf.pos.x - radius * 0.3,
                tf.pos.y - radius * 0.3,
                radius * 0.12,
                Color::new(1.0, 1.0, 1.0, 0.3),
            );
        }
    }
}
