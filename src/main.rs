use debug::Debug;
use input::InputModel;
use lib_rain::{Bounds, GameSession};
use macroquad::prelude::*;
use render::Render;
use shipyard::World;
use sound_director::SoundDirector;
use sys::*;
use ui::Ui;

mod debug;
mod input;
mod render;
mod sound_director;
mod sys;
mod ui;

fn window_conf() -> Conf {
    Conf {
        window_title: "Berry Rain".to_owned(),
        high_dpi: true,
        window_width: 540,
        window_height: 960,
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        sys::panic_screen(&format!("Driver panicked:\n{}", info));
        hook(info);
    }));

    if let Err(e) = run().await {
        sys::panic_screen(&format!("Driver exitted with error:\n{:?}", e));
    }
}

async fn run() -> anyhow::Result<()> {
    set_max_level(STATIC_MAX_LEVEL);

    let mut world = World::new();
    let mut session = GameSession::new(&mut world);
    let mut render = Render::new();
    let mut sounder = SoundDirector::new().await?;
    let ui = Ui::new();
    let mut debug = Debug::new();

    let mut fullscreen = window_conf().fullscreen;
    // Save old size as leaving fullscreen will give window a different size
    // This value is our best bet as macroquad doesn't allow us to get window size
    let old_size = (window_conf().window_width, window_conf().window_height);

    info!("Project version: {}", env!("CARGO_PKG_VERSION"));

    done_loading();

    info!("Done loading");

    loop {
        let dt = get_frame_time();
        let input = InputModel::capture();

        if input.fullscreen_toggle_requested {
            // NOTE: macroquad does not update window config when it goes fullscreen
            set_fullscreen(!fullscreen);

            if fullscreen {
                macroquad::miniquad::window::set_window_size(old_size.0 as u32, old_size.1 as u32);
            }

            fullscreen = !fullscreen;
        }

        if input.reset_requested {
            info!("Manual reset");
            session.reset(&mut world);
            debug.put_event("reset");
        }

        if let Some(pos) = input.tap_pos {
            if session.tap(&mut world, pos) {
                debug.put_event(&format!("munch {}", session.counter_text()));
            }
        }

        let bounds = Bounds::new(screen_width(), screen_height());
        session.tick(&mut world, dt, bounds);

        render.draw(&world, &session);
        ui.draw(&session);
        sounder.run(&world);

        debug.new_frame();
        debug.draw_session_info(&session);
        debug.draw_events();

        next_frame().await
    }
}
