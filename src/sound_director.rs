use lib_rain::{SoundCue, SoundQueue};
use macroquad::audio::{self, PlaySoundParams, Sound, load_sound};
use shipyard::{UniqueViewMut, World};

pub struct SoundDirector {
    munch: Sound,
}

impl SoundDirector {
    pub async fn new() -> anyhow::Result<Self> {
        Ok(Self {
            munch: load_sound("assets/munch.wav").await?,
        })
    }

    /// Drains the cues the session queued this frame and fires them off.
    /// No queuing guarantee beyond what the audio backend mixes.
    pub fn run(&mut self, world: &World) {
        let cues = world.run(|mut queue: UniqueViewMut<SoundQueue>| std::mem::take(&mut queue.0));

        for cue in cues {
            match cue {
                SoundCue::Munch => audio::play_sound(
                    &self.munch,
                    PlaySoundParams {
                        looped: false,
                        volume: 1.0,
                    },
                ),
            }
        }
    }
}
