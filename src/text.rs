// =====================================================================
// TEXT
// =====================================================================
// TrueType text via SDL_ttf. Without a usable font (or without the
// `ttf` feature) drawing text is a no-op.

use std::marker::PhantomData;

use sdl2::pixels::Color;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};

#[cfg(feature = "ttf")]
use log::{info, warn};
#[cfg(feature = "ttf")]
use sdl2::rect::Rect;
#[cfg(feature = "ttf")]
use sdl2::ttf::{Font, Sdl2TtfContext};

#[cfg(feature = "ttf")]
use crate::config::{FALLBACK_FONTS, FONT_FILE, FONT_SIZE_LARGE, FONT_SIZE_SMALL, FONT_SIZE_TITLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Title,
    Large,
    Small,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft(i32, i32),
    Center(i32, i32),
}

pub struct TextSystem {
    #[cfg(feature = "ttf")]
    context: Option<Sdl2TtfContext>,
}

impl TextSystem {
    #[cfg(feature = "ttf")]
    pub fn init() -> Self {
        let context = match sdl2::ttf::init() {
            Ok(ctx) => Some(ctx),
            Err(e) => {
                warn!("SDL_ttf unavailable, no text: {}", e);
                None
            }
        };
        Self { context }
    }

    #[cfg(not(feature = "ttf"))]
    pub fn init() -> Self {
        Self {}
    }
}

pub struct Fonts<'ttf> {
    #[cfg(feature = "ttf")]
    title: Option<Font<'ttf, 'static>>,
    #[cfg(feature = "ttf")]
    large: Option<Font<'ttf, 'static>>,
    #[cfg(feature = "ttf")]
    small: Option<Font<'ttf, 'static>>,
    _ttf: PhantomData<&'ttf ()>,
}

#[cfg(feature = "ttf")]
fn find_font() -> Option<std::path::PathBuf> {
    crate::assets::find_asset(FONT_FILE).or_else(|| {
        FALLBACK_FONTS
            .iter()
            .map(std::path::PathBuf::from)
            .find(|p| p.is_file())
    })
}

impl<'ttf> Fonts<'ttf> {
    #[cfg(feature = "ttf")]
    pub fn load(system: &'ttf TextSystem) -> Self {
        let mut fonts = Self {
            title: None,
            large: None,
            small: None,
            _ttf: PhantomData,
        };

        let Some(ctx) = system.context.as_ref() else {
            return fonts;
        };
        let Some(path) = find_font() else {
            warn!("No font found, text will not be drawn");
            return fonts;
        };

        let load = |size: u16| match ctx.load_font(&path, size) {
            Ok(font) => Some(font),
            Err(e) => {
                warn!("Font {} NOT loaded: {}", path.display(), e);
                None
            }
        };
        fonts.title = load(FONT_SIZE_TITLE);
        fonts.large = load(FONT_SIZE_LARGE);
        fonts.small = load(FONT_SIZE_SMALL);
        if fonts.large.is_some() {
            info!("Font loaded from {}", path.display());
        }
        fonts
    }

    #[cfg(not(feature = "ttf"))]
    pub fn load(_system: &'ttf TextSystem) -> Self {
        Self { _ttf: PhantomData }
    }

    #[cfg(feature = "ttf")]
    pub fn draw(
        &self,
        canvas: &mut Canvas<Window>,
        creator: &TextureCreator<WindowContext>,
        text: &str,
        size: FontSize,
        color: Color,
        anchor: Anchor,
    ) -> Result<(), String> {
        let font = match size {
            FontSize::Title => self.title.as_ref(),
            FontSize::Large => self.large.as_ref(),
            FontSize::Small => self.small.as_ref(),
        };
        let Some(font) = font else {
            return Ok(());
        };
        if text.is_empty() {
            return Ok(());
        }

        let surface = font.render(text).blended(color).map_err(|e| e.to_string())?;
        let texture = creator
            .create_texture_from_surface(&surface)
            .map_err(|e| e.to_string())?;
        let (w, h) = (surface.width(), surface.height());
        let (x, y) = match anchor {
            Anchor::TopLeft(x, y) => (x, y),
            Anchor::Center(cx, cy) => (cx - w as i32 / 2, cy - h as i32 / 2),
        };
        canvas.copy(&texture, None, Rect::new(x, y, w, h))
    }

    #[cfg(not(feature = "ttf"))]
    pub fn draw(
        &self,
        _canvas: &mut Canvas<Window>,
        _creator: &TextureCreator<WindowContext>,
        _text: &str,
        _size: FontSize,
        _color: Color,
        _anchor: Anchor,
    ) -> Result<(), String> {
        Ok(())
    }
}
