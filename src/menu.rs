// =====================================================================
// MENU
// =====================================================================
// Clef selection. Runs at the menu frame rate until a button is
// clicked, Escape is pressed or the window is closed.

use log::info;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::BlendMode;

use crate::app::Env;
use crate::clef::Clef;
use crate::config::{
    BASS_BUTTON, BASS_CLICK_AREA, HOVER_COLOR, MENU_FPS, MENU_GLYPH_HEIGHT, TITLE_COLOR,
    TITLE_SHADOW, TREBLE_BUTTON, TREBLE_CLICK_AREA, WINDOW_WIDTH, rect,
};
use crate::render::{self, CORNER_ALL};
use crate::text::{Anchor, FontSize};

const TITLE: &str = "Select one clef you want to practice.";
const HOVER_RADIUS: i32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play(Clef),
    Quit,
}

/// Which clef a click at (x, y) selects, if any.
pub fn hit_test(x: i32, y: i32) -> Option<Clef> {
    let p = Point::new(x, y);
    if rect(TREBLE_CLICK_AREA).contains_point(p) {
        Some(Clef::Treble)
    } else if rect(BASS_CLICK_AREA).contains_point(p) {
        Some(Clef::Bass)
    } else {
        None
    }
}

fn background(y: i32) -> Color {
    Color::RGB((220 - y / 20).clamp(0, 255) as u8, (230 - y / 30).clamp(0, 255) as u8, 255)
}

fn draw(env: &mut Env) {
    render::fill_gradient(&mut env.canvas, background);

    let cx = WINDOW_WIDTH as i32 / 2;
    env.fonts
        .draw(&mut env.canvas, env.creator, TITLE, FontSize::Title, TITLE_SHADOW, Anchor::Center(cx + 2, 82))
        .unwrap_or(());
    env.fonts
        .draw(&mut env.canvas, env.creator, TITLE, FontSize::Title, TITLE_COLOR, Anchor::Center(cx, 80))
        .unwrap_or(());

    let mouse = env.events.mouse_state();
    let buttons: [(Clef, Rect); 2] = [
        (Clef::Treble, rect(TREBLE_BUTTON)),
        (Clef::Bass, rect(BASS_BUTTON)),
    ];

    for (clef, button) in buttons {
        if button.contains_point(Point::new(mouse.x(), mouse.y())) {
            env.canvas.set_blend_mode(BlendMode::Blend);
            env.canvas.set_draw_color(HOVER_COLOR);
            render::render_fill_rounded_rect(
                &mut env.canvas,
                button.x(), button.y(),
                button.width() as i32, button.height() as i32,
                HOVER_RADIUS, CORNER_ALL,
            ).unwrap_or(());
            env.canvas.set_blend_mode(BlendMode::None);
        }

        // Glyph if we have one, the clef's name otherwise
        let center_y = button.y() + 35;
        match env.glyphs.get(clef) {
            Some(glyph) => render::render_glyph(&mut env.canvas, glyph, cx, center_y, MENU_GLYPH_HEIGHT),
            None => env
                .fonts
                .draw(
                    &mut env.canvas,
                    env.creator,
                    clef.config().name,
                    FontSize::Large,
                    TITLE_COLOR,
                    Anchor::Center(cx, center_y),
                )
                .unwrap_or(()),
        }
    }

    env.canvas.present();
}

pub fn run(env: &mut Env) -> MenuChoice {
    loop {
        draw(env);

        for event in env.events.poll_iter() {
            match event {
                Event::Quit { .. } | Event::KeyDown { keycode: Some(Keycode::Escape), .. } => {
                    return MenuChoice::Quit;
                }
                Event::MouseButtonDown { mouse_btn: MouseButton::Left, x, y, .. } => {
                    if let Some(clef) = hit_test(x, y) {
                        info!("{} clef selected", clef.config().name);
                        return MenuChoice::Play(clef);
                    }
                }
                _ => {}
            }
        }

        env.clock.tick(MENU_FPS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn click_areas() {
        assert_eq!(hit_test(450, 250), Some(Clef::Treble));
        assert_eq!(hit_test(300, 221), Some(Clef::Treble));
        assert_eq!(hit_test(450, 350), Some(Clef::Bass));
        assert_eq!(hit_test(600, 389), Some(Clef::Bass));
        assert_eq!(hit_test(450, 300), None);
        assert_eq!(hit_test(100, 250), None);
        assert_eq!(hit_test(450, 50), None);
    }

    #[test]
    fn gradient_stays_in_range() {
        assert_eq!(background(0), Color::RGB(220, 230, 255));
        assert_eq!(background(599), Color::RGB(191, 211, 255));
    }
}
