// =====================================================================
// APPLICATION
// =====================================================================
// Owns the SDL resources for the whole process and alternates between
// the menu and practice rounds.

use log::{info, warn};
use sdl2::EventPump;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};

use crate::assets::{ClefGlyphs, ImageSystem};
use crate::audio::TonePlayer;
use crate::clef;
use crate::config::{SAMPLE_RATE, TONE_DURATION, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::error::Result;
use crate::game::{self, RoundExit};
use crate::menu::{self, MenuChoice};
use crate::text::{Fonts, TextSystem};
use crate::timing::FrameClock;
use crate::tone::ToneCache;

/// Everything a screen needs to poll input and draw a frame.
pub struct Env<'a> {
    pub canvas: Canvas<Window>,
    pub creator: &'a TextureCreator<WindowContext>,
    pub fonts: &'a Fonts<'a>,
    pub glyphs: &'a ClefGlyphs<'a>,
    pub events: EventPump,
    pub clock: FrameClock,
}

pub fn run() -> Result<()> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let audio_subsystem = match sdl_context.audio() {
        Ok(audio) => Some(audio),
        Err(e) => {
            warn!("Audio subsystem unavailable: {}", e);
            None
        }
    };

    let window = video_subsystem.window(WINDOW_TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .build()?;

    let canvas = window.into_canvas()
        .accelerated()
        .present_vsync()
        .build()?;
    let creator = canvas.texture_creator();

    let _image_system = ImageSystem::init();
    let text_system = TextSystem::init();
    let fonts = Fonts::load(&text_system);
    let glyphs = ClefGlyphs::load(&creator);

    let tones = ToneCache::build(&clef::all_notes(), TONE_DURATION, SAMPLE_RATE);
    let mut player = TonePlayer::open(audio_subsystem.as_ref(), tones);

    let mut env = Env {
        canvas,
        creator: &creator,
        fonts: &fonts,
        glyphs: &glyphs,
        events: sdl_context.event_pump()?,
        clock: FrameClock::new(),
    };
    let mut rng = rand::thread_rng();

    loop {
        let clef = match menu::run(&mut env) {
            MenuChoice::Play(clef) => clef,
            MenuChoice::Quit => break,
        };

        match game::run(&mut env, &mut player, clef, &mut rng) {
            RoundExit::Menu => {
                env.canvas.window_mut().set_title(WINDOW_TITLE).unwrap_or(());
            }
            RoundExit::Quit => break,
        }
    }

    info!("Bye");
    Ok(())
}
