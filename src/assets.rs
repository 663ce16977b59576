// =====================================================================
// ASSETS
// =====================================================================
// Clef glyphs and the UI font. Everything here is best effort: a file
// that cannot be found or decoded is logged and simply not drawn.

use std::env;
use std::path::PathBuf;

use log::{info, warn};
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;

use crate::clef::{self, Clef};
use crate::config::ASSETS_DIR;

#[cfg(feature = "image")]
use sdl2::image::{InitFlag, LoadTexture, Sdl2ImageContext};

/// Directories searched for `assets/`: next to the executable first
/// (bundled builds), then the working directory.
fn asset_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(exe) = env::current_exe() {
        if let Some(parent) = exe.parent() {
            dirs.push(parent.join(ASSETS_DIR));
        }
    }
    if let Ok(cwd) = env::current_dir() {
        dirs.push(cwd.join(ASSETS_DIR));
    }
    dirs
}

/// First existing `assets/<file>`, if any.
pub fn find_asset(file: &str) -> Option<PathBuf> {
    asset_dirs()
        .into_iter()
        .map(|dir| dir.join(file))
        .find(|p| p.is_file())
}

pub struct ImageSystem {
    #[cfg(feature = "image")]
    _context: Option<Sdl2ImageContext>,
}

impl ImageSystem {
    // Start the image subsystem; failure only disables glyphs
    #[cfg(feature = "image")]
    pub fn init() -> Self {
        let context = match sdl2::image::init(InitFlag::PNG) {
            Ok(ctx) => Some(ctx),
            Err(e) => {
                warn!("SDL_image unavailable, clef glyphs disabled: {}", e);
                None
            }
        };
        Self { _context: context }
    }

    #[cfg(not(feature = "image"))]
    pub fn init() -> Self {
        Self {}
    }
}

/// A clef picture at its native size.
pub struct Glyph<'a> {
    pub texture: Texture<'a>,
    pub width: u32,
    pub height: u32,
}

impl Glyph<'_> {
    /// Width when drawn `height` pixels tall, aspect ratio kept.
    pub fn width_for(&self, height: u32) -> u32 {
        if self.height == 0 {
            return 0;
        }
        (self.width as u64 * height as u64 / self.height as u64) as u32
    }
}

#[cfg(feature = "image")]
pub fn load_glyph<'a>(
    creator: &'a TextureCreator<WindowContext>,
    file: &str,
) -> Option<Glyph<'a>> {
    let Some(path) = find_asset(file) else {
        warn!("{} NOT found in any {}/ directory", file, ASSETS_DIR);
        return None;
    };

    match creator.load_texture(&path) {
        Ok(texture) => {
            let q = texture.query();
            info!("{} loaded from {}", file, path.display());
            Some(Glyph {
                texture,
                width: q.width,
                height: q.height,
            })
        }
        Err(e) => {
            warn!("{} NOT loaded ({}): {}", file, path.display(), e);
            None
        }
    }
}

#[cfg(not(feature = "image"))]
pub fn load_glyph<'a>(
    _creator: &'a TextureCreator<WindowContext>,
    file: &str,
) -> Option<Glyph<'a>> {
    info!("{} skipped, built without image support", file);
    None
}

/// The two clef glyphs for the menu buttons and the staff.
pub struct ClefGlyphs<'a> {
    pub treble: Option<Glyph<'a>>,
    pub bass: Option<Glyph<'a>>,
}

impl<'a> ClefGlyphs<'a> {
    pub fn load(creator: &'a TextureCreator<WindowContext>) -> Self {
        Self {
            treble: load_glyph(creator, clef::TREBLE.glyph_file),
            bass: load_glyph(creator, clef::BASS.glyph_file),
        }
    }

    pub fn get(&self, clef: Clef) -> Option<&Glyph<'a>> {
        match clef {
            Clef::Treble => self.treble.as_ref(),
            Clef::Bass => self.bass.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_asset_is_none() {
        assert!(find_asset("definitely-not-here.png").is_none());
    }

    #[test]
    fn search_order_prefers_executable_dir() {
        let dirs = asset_dirs();
        assert!(!dirs.is_empty());
        assert!(dirs.iter().all(|d| d.ends_with(ASSETS_DIR)));
        if let Ok(exe) = env::current_exe() {
            assert_eq!(dirs[0], exe.parent().unwrap().join(ASSETS_DIR));
        }
    }
}
