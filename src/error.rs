use sdl2::IntegerOrSdlError;
use sdl2::video::WindowBuildError;
use thiserror::Error;

/// Fatal errors. Everything recoverable (assets, audio) is logged and
/// skipped instead of ending up here.
#[derive(Debug, Error)]
pub enum Error {
    /// SDL reports most failures as plain strings.
    #[error("SDL: {0}")]
    Sdl(String),

    #[error("window: {0}")]
    Window(#[from] WindowBuildError),

    #[error("canvas: {0}")]
    Canvas(#[from] IntegerOrSdlError),
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Sdl(msg)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
