// =====================================================================
// CONFIGURATION AND CONSTANTS
// =====================================================================
// Everything tunable lives here. Nothing is read from the command line
// or the environment.

use sdl2::pixels::Color;
use sdl2::rect::Rect;

pub const WINDOW_TITLE: &str = "Music Note Recognition Game";
pub const WINDOW_WIDTH: u32 = 900;
pub const WINDOW_HEIGHT: u32 = 600;

pub const GAME_FPS: u32 = 60;
pub const MENU_FPS: u32 = 30;

/// How long "Correct!" / "Wrong!" stays on screen.
pub const FEEDBACK_MS: u64 = 1000;

// Colors
pub const WHITE: Color = Color::RGB(250, 250, 255);
pub const BLACK: Color = Color::RGB(30, 30, 30);
pub const RED: Color = Color::RGB(220, 60, 60);
pub const GREEN: Color = Color::RGB(0, 180, 0);
pub const BLUE: Color = Color::RGB(80, 120, 220);
pub const TITLE_COLOR: Color = Color::RGB(40, 40, 80);
pub const TITLE_SHADOW: Color = Color::RGB(180, 180, 220);
pub const HOVER_COLOR: Color = Color::RGBA(180, 220, 255, 80);

pub const STAFF_LINE_THICKNESS: u32 = 2;

// Audio
pub const SAMPLE_RATE: i32 = 22050;
pub const AUDIO_CHANNELS: u8 = 2;
pub const AUDIO_BUFFER_SAMPLES: u16 = 1024;
pub const TONE_DURATION: f64 = 0.5;
pub const FADE_SECONDS: f64 = 0.05;

// Fireworks
pub const PARTICLES_PER_FIREWORK: usize = 50;
pub const PARTICLE_LIFETIME: i32 = 60;
pub const PARTICLE_DRAG: f32 = 0.98;
pub const PARTICLE_GRAVITY: f32 = 0.15;
pub const PARTICLE_MIN_SPEED: f32 = 2.0;
pub const PARTICLE_MAX_SPEED: f32 = 8.0;
pub const PARTICLE_MAX_RADIUS: f32 = 4.0;
pub const FIREWORKS_PER_MILESTONE: usize = 3;
pub const MILESTONE_STEP: u32 = 10;
pub const FIREWORK_X_RANGE: (f32, f32) = (100.0, 800.0);
pub const FIREWORK_Y_RANGE: (f32, f32) = (80.0, 300.0);

pub const FIREWORK_PALETTE: [Color; 5] = [
    Color::RGB(255, 80, 80),
    Color::RGB(255, 200, 60),
    Color::RGB(80, 200, 255),
    Color::RGB(150, 255, 120),
    Color::RGB(230, 120, 255),
];

// Menu (x, y, w, h)
const MENU_CENTER_X: i32 = WINDOW_WIDTH as i32 / 2;

pub const TREBLE_BUTTON: (i32, i32, u32, u32) = (MENU_CENTER_X - 60, 220, 120, 80);
pub const BASS_BUTTON: (i32, i32, u32, u32) = (MENU_CENTER_X - 60, 320, 120, 80);
pub const TREBLE_CLICK_AREA: (i32, i32, u32, u32) = (MENU_CENTER_X - 160, 220, 320, 70);
pub const BASS_CLICK_AREA: (i32, i32, u32, u32) = (MENU_CENTER_X - 160, 320, 320, 70);
pub const MENU_GLYPH_HEIGHT: u32 = 80;

pub fn rect((x, y, w, h): (i32, i32, u32, u32)) -> Rect {
    Rect::new(x, y, w, h)
}

// Assets
pub const ASSETS_DIR: &str = "assets";
pub const TREBLE_GLYPH_FILE: &str = "g-clef.png";
pub const BASS_GLYPH_FILE: &str = "f-clef.png";
pub const FONT_FILE: &str = "font.ttf";
pub const FALLBACK_FONTS: [&str; 4] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];
pub const FONT_SIZE_LARGE: u16 = 28;
pub const FONT_SIZE_TITLE: u16 = 40;
pub const FONT_SIZE_SMALL: u16 = 20;
