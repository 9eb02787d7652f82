use rand::Rng;

pub const BERRY_KIND_COUNT: u8 = 6;
pub const BERRY_SIZE_MIN: f32 = 40.0;
pub const BERRY_SIZE_MAX: f32 = 80.0;
pub const FALL_DURATION_MIN: f32 = 3.0;
pub const FALL_DURATION_MAX: f32 = 6.0;

/// Randomized visual and motion parameters of one falling berry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemParams {
    pub kind: u8,
    pub size: f32,
    pub angle: f32,
    pub duration: f32,
}

/// Pure parameter roll. All outputs are bounded; the session injects
/// a seeded rng here for deterministic tests.
pub fn random_item_params(rng: &mut impl Rng) -> ItemParams {
    ItemParams {
        kind: rng.gen_range(0..BERRY_KIND_COUNT),
        size: rng.gen_range(BERRY_SIZE_MIN..=BERRY_SIZE_MAX),
        angle: rng.gen_range(0.0..std::f32::consts::TAU),
        duration: rng.gen_range(FALL_DURATION_MIN..=FALL_DURATION_MAX),
    }
}

/// Uniform left edge in `[0, width - size]`. A berry wider than the
/// container gets pinned to the left edge instead of overflowing.
pub fn random_left_edge(rng: &mut impl Rng, width: f32, size: f32) -> f32 {
    let max_left = (width - size).max(0.0);
    rng.gen_range(0.0..=max_left)
}
