use macroquad::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct InputModel {
    pub tap_pos: Option<Vec2>,
    pub reset_requested: bool,
    pub fullscreen_toggle_requested: bool,
}

impl InputModel {
    pub fn capture() -> Self {
        // NOTE: on mobile, taps arrive as synthesized mouse presses
        let tap_pos = if is_mouse_button_pressed(MouseButton::Left) {
            let (mx, my) = mouse_position();
            Some(vec2(mx, my))
        } else {
            None
        };
        let reset_requested = is_key_pressed(KeyCode::R);
        let fullscreen_toggle_requested = is_key_pressed(KeyCode::F11);

        Self {
            tap_pos,
            reset_requested,
            fullscreen_toggle_requested,
        }
    }
}
