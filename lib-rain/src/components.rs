use macroquad::math::Vec2;
use shipyard::{Component, Unique};

#[derive(Debug, Clone, Copy, Component)]
pub struct Transform {
    /// Sprite center, in container pixels.
    pub pos: Vec2,
    pub angle: f32,
}

/// One falling sprite. `size` is the side length of its tappable square.
#[derive(Debug, Clone, Copy, Component)]
pub struct Berry {
    pub kind: u8,
    pub size: f32,
}

/// Vertical tween state of a falling berry. `elapsed >= duration`
/// means the berry has left the bottom edge of the container.
#[derive(Debug, Clone, Copy, Component)]
pub struct FallAnim {
    pub start_y: f32,
    pub end_y: f32,
    pub duration: f32,
    pub elapsed: f32,
}

/// The celebration overlay. Scale goes 0 -> 1 over the celebration
/// duration; at 1 it covers the whole container.
#[derive(Debug, Clone, Copy, Component)]
pub struct GiantBerry {
    pub elapsed: f32,
    pub scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Munch,
}

/// Fire-and-forget cues for the frontend's sound director.
#[derive(Unique, Default)]
pub struct SoundQueue(pub Vec<SoundCue>);
