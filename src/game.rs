// =====================================================================
// GAME ROUND
// =====================================================================
// Per tick, strictly in this order: input -> state transition ->
// effects physics -> draw. Leaving the function drops the round and
// its fireworks.

use rand::Rng;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use crate::app::Env;
use crate::audio::TonePlayer;
use crate::clef::Clef;
use crate::config::{
    BLACK, BLUE, GAME_FPS, GREEN, RED, WHITE, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH,
};
use crate::note::Letter;
use crate::render;
use crate::round::{FeedbackKind, RoundInput, RoundOutcome, RoundState};
use crate::text::{Anchor, FontSize};

const LEGEND: &str = "C=1  D=2  E=3  F=4  G=5  A=6  B=7";
const HINT: &str = "Space: hear the note again    Esc: back to menu";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundExit {
    Menu,
    Quit,
}

/// Keyboard mapping. Digits 1-7 (main row or keypad) answer C..B.
pub fn key_to_input(key: Keycode) -> Option<RoundInput> {
    let digit = match key {
        Keycode::Num1 | Keycode::Kp1 => 0,
        Keycode::Num2 | Keycode::Kp2 => 1,
        Keycode::Num3 | Keycode::Kp3 => 2,
        Keycode::Num4 | Keycode::Kp4 => 3,
        Keycode::Num5 | Keycode::Kp5 => 4,
        Keycode::Num6 | Keycode::Kp6 => 5,
        Keycode::Num7 | Keycode::Kp7 => 6,
        Keycode::Space => return Some(RoundInput::Replay),
        Keycode::Escape => return Some(RoundInput::Exit),
        _ => return None,
    };
    Letter::from_index(digit).map(RoundInput::Guess)
}

fn update_title(env: &mut Env, round: &RoundState) {
    let title = format!("{} - {} - Score: {}", WINDOW_TITLE, round.clef().name, round.score());
    env.canvas.window_mut().set_title(&title).unwrap_or(());
}

fn draw(env: &mut Env, clef: Clef, round: &RoundState, now: u64) {
    let cfg = round.clef();
    env.canvas.set_draw_color(WHITE);
    env.canvas.clear();

    if let Some(glyph) = env.glyphs.get(clef) {
        let staff = cfg.staff;
        let mid_y = (staff.top + staff.bottom()) / 2;
        render::render_glyph(&mut env.canvas, glyph, staff.x + 40, mid_y, cfg.glyph_height);
    }
    render::render_staff(&mut env.canvas, cfg, &round.placement());

    let header = format!("Score: {} | Which note? Press 1-7", round.score());
    env.fonts
        .draw(&mut env.canvas, env.creator, &header, FontSize::Large, BLACK, Anchor::TopLeft(40, 20))
        .unwrap_or(());
    env.fonts
        .draw(&mut env.canvas, env.creator, LEGEND, FontSize::Small, BLUE, Anchor::TopLeft(40, 60))
        .unwrap_or(());
    env.fonts
        .draw(&mut env.canvas, env.creator, HINT, FontSize::Small, BLACK, Anchor::TopLeft(40, 86))
        .unwrap_or(());

    render::render_fireworks(&mut env.canvas, round.fireworks());

    if let Some(fb) = round.visible_feedback(now) {
        let color = match fb.kind {
            FeedbackKind::Correct => GREEN,
            FeedbackKind::Wrong => RED,
        };
        let center = Anchor::Center(WINDOW_WIDTH as i32 / 2, WINDOW_HEIGHT as i32 - 40);
        env.fonts
            .draw(&mut env.canvas, env.creator, &fb.text, FontSize::Large, color, center)
            .unwrap_or(());
    }

    env.canvas.present();
}

pub fn run(env: &mut Env, player: &mut TonePlayer, clef: Clef, rng: &mut impl Rng) -> RoundExit {
    let mut round = RoundState::new(clef.config(), rng);
    update_title(env, &round);

    loop {
        // 1. Input and state transitions
        let mut score_changed = false;
        for event in env.events.poll_iter() {
            match event {
                Event::Quit { .. } => return RoundExit::Quit,
                // Held keys repeat; only the first key-down counts
                Event::KeyDown { keycode: Some(key), repeat: false, .. } => {
                    let Some(input) = key_to_input(key) else {
                        continue;
                    };
                    match round.handle(input, env.clock.ticks_ms(), rng) {
                        RoundOutcome::Correct { played, .. } => {
                            player.play(played);
                            score_changed = true;
                        }
                        RoundOutcome::Wrong { played } | RoundOutcome::Replay(played) => {
                            player.play(played);
                        }
                        RoundOutcome::Exit => return RoundExit::Menu,
                    }
                }
                _ => {}
            }
        }
        if score_changed {
            update_title(env, &round);
        }

        // 2. Physics
        round.update_effects();

        // 3. Draw
        let now = env.clock.ticks_ms();
        draw(env, clef, &round, now);

        env.clock.tick(GAME_FPS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn digit_keys_map_to_letters() {
        assert_eq!(key_to_input(Keycode::Num1), Some(RoundInput::Guess(Letter::C)));
        assert_eq!(key_to_input(Keycode::Num5), Some(RoundInput::Guess(Letter::G)));
        assert_eq!(key_to_input(Keycode::Kp7), Some(RoundInput::Guess(Letter::B)));
        assert_eq!(key_to_input(Keycode::Num8), None);
        assert_eq!(key_to_input(Keycode::Num0), None);
        assert_eq!(key_to_input(Keycode::A), None);
    }

    #[test]
    fn control_keys() {
        assert_eq!(key_to_input(Keycode::Space), Some(RoundInput::Replay));
        assert_eq!(key_to_input(Keycode::Escape), Some(RoundInput::Exit));
    }
}
