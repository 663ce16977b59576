// =====================================================================
// ROUND STATE
// =====================================================================
// One practice round for one clef. Input comes in as `RoundInput`, the
// caller gets a `RoundOutcome` back and performs the side effects
// (playing the tone). Fireworks are owned here and die with the round.

use log::{debug, info};
use rand::Rng;

use crate::clef::ClefConfig;
use crate::config::{
    FEEDBACK_MS, FIREWORK_X_RANGE, FIREWORK_Y_RANGE, FIREWORKS_PER_MILESTONE, MILESTONE_STEP,
};
use crate::firework::{self, Firework};
use crate::note::{Letter, Note};
use crate::staff::NotePlacement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundInput {
    Guess(Letter),
    Replay,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Correct { played: Note, fireworks: usize },
    /// `played` is the note that was shown, so the right answer is heard.
    Wrong { played: Note },
    Replay(Note),
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Correct,
    Wrong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: String,
    /// Clock reading (ms) when it was set
    pub set_at: u64,
}

impl Feedback {
    pub fn is_visible(&self, now: u64) -> bool {
        now.saturating_sub(self.set_at) < FEEDBACK_MS
    }
}

pub struct RoundState {
    clef: &'static ClefConfig,
    current: usize,
    score: u32,
    feedback: Option<Feedback>,
    last_firework_score: u32,
    fireworks: Vec<Firework>,
}

impl RoundState {
    pub fn new(clef: &'static ClefConfig, rng: &mut impl Rng) -> Self {
        let current = rng.gen_range(0..clef.notes.len());
        info!("New {} round, first note {}", clef.name, clef.notes[current]);
        Self {
            clef,
            current,
            score: 0,
            feedback: None,
            last_firework_score: 0,
            fireworks: Vec::new(),
        }
    }

    /// Starts on a given note instead of a random one.
    pub fn with_note(clef: &'static ClefConfig, index: usize) -> Self {
        Self {
            clef,
            current: index.min(clef.notes.len() - 1),
            score: 0,
            feedback: None,
            last_firework_score: 0,
            fireworks: Vec::new(),
        }
    }

    pub fn clef(&self) -> &'static ClefConfig {
        self.clef
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_note(&self) -> Note {
        self.clef.notes[self.current]
    }

    pub fn placement(&self) -> NotePlacement {
        self.clef.placement(self.current)
    }

    pub fn last_firework_score(&self) -> u32 {
        self.last_firework_score
    }

    pub fn fireworks(&self) -> &[Firework] {
        &self.fireworks
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// The feedback message, if it is still within its display window.
    pub fn visible_feedback(&self, now: u64) -> Option<&Feedback> {
        self.feedback.as_ref().filter(|f| f.is_visible(now))
    }

    pub fn handle(&mut self, input: RoundInput, now: u64, rng: &mut impl Rng) -> RoundOutcome {
        match input {
            RoundInput::Guess(letter) => self.guess(letter, now, rng),
            RoundInput::Replay => RoundOutcome::Replay(self.current_note()),
            RoundInput::Exit => {
                info!("Leaving {} round with score {}", self.clef.name, self.score);
                RoundOutcome::Exit
            }
        }
    }

    fn guess(&mut self, letter: Letter, now: u64, rng: &mut impl Rng) -> RoundOutcome {
        let note = self.current_note();
        debug!("Guess {} for {}", letter, note);

        if letter != note.letter_class() {
            self.feedback = Some(Feedback {
                kind: FeedbackKind::Wrong,
                text: format!("Wrong! It was {}", note.letter_class()),
                set_at: now,
            });
            return RoundOutcome::Wrong { played: note };
        }

        self.score += 1;
        self.feedback = Some(Feedback {
            kind: FeedbackKind::Correct,
            text: "Correct!".to_string(),
            set_at: now,
        });
        self.current = rng.gen_range(0..self.clef.notes.len());

        let fireworks = self.celebrate(rng);
        RoundOutcome::Correct { played: note, fireworks }
    }

    /// Fires a volley when the score reaches a new multiple of the
    /// milestone step. Returns the number of fireworks spawned.
    fn celebrate(&mut self, rng: &mut impl Rng) -> usize {
        if self.score == 0
            || self.score % MILESTONE_STEP != 0
            || self.score <= self.last_firework_score
        {
            return 0;
        }

        for _ in 0..FIREWORKS_PER_MILESTONE {
            let x = rng.gen_range(FIREWORK_X_RANGE.0..=FIREWORK_X_RANGE.1);
            let y = rng.gen_range(FIREWORK_Y_RANGE.0..=FIREWORK_Y_RANGE.1);
            self.fireworks.push(Firework::new(x, y, rng));
        }
        self.last_firework_score = self.score;
        info!("Milestone {} reached", self.score);
        FIREWORKS_PER_MILESTONE
    }

    /// One physics tick for the effects.
    pub fn update_effects(&mut self) {
        firework::update_all(&mut self.fireworks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clef::{BASS, TREBLE};
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    #[test]
    fn correctness_ignores_octave() {
        let mut rng = rng();
        for (i, note) in TREBLE.notes.iter().enumerate() {
            for letter in Letter::ALL {
                let mut round = RoundState::with_note(&TREBLE, i);
                let outcome = round.handle(RoundInput::Guess(letter), 0, &mut rng);
                let correct = matches!(outcome, RoundOutcome::Correct { .. });
                assert_eq!(correct, letter == note.letter_class(), "{} vs {}", letter, note);
            }
        }
    }

    #[test]
    fn wrong_answer_keeps_note_and_score() {
        let mut rng = rng();
        let mut round = RoundState::with_note(&BASS, 2); // G2
        let outcome = round.handle(RoundInput::Guess(Letter::A), 500, &mut rng);
        assert_eq!(outcome, RoundOutcome::Wrong { played: Note::new(Letter::G, 2) });
        assert_eq!(round.score(), 0);
        assert_eq!(round.current_index(), 2);
        let fb = round.feedback().unwrap();
        assert_eq!(fb.kind, FeedbackKind::Wrong);
        assert_eq!(fb.text, "Wrong! It was G");
    }

    #[test]
    fn feedback_window() {
        let mut rng = rng();
        let mut round = RoundState::with_note(&TREBLE, 0);
        assert!(round.visible_feedback(0).is_none());
        round.handle(RoundInput::Guess(Letter::C), 2000, &mut rng);
        assert!(round.visible_feedback(2000).is_some());
        assert!(round.visible_feedback(2999).is_some());
        assert!(round.visible_feedback(3000).is_none());
        assert!(round.feedback().is_some());
    }

    #[test]
    fn score_never_decreases() {
        let mut rng = rng();
        let mut round = RoundState::new(&TREBLE, &mut rng);
        let mut last = 0;
        for i in 0..500u64 {
            let letter = Letter::ALL[(i % 7) as usize];
            let before_note = round.current_note();
            round.handle(RoundInput::Guess(letter), i * 10, &mut rng);
            let expected = if letter == before_note.letter_class() { last + 1 } else { last };
            assert_eq!(round.score(), expected);
            last = round.score();
        }
    }

    #[test]
    fn replay_and_exit_leave_state_alone() {
        let mut rng = rng();
        let mut round = RoundState::with_note(&BASS, 12);
        assert_eq!(
            round.handle(RoundInput::Replay, 0, &mut rng),
            RoundOutcome::Replay(Note::new(Letter::C, 4))
        );
        assert_eq!(round.handle(RoundInput::Exit, 0, &mut rng), RoundOutcome::Exit);
        assert_eq!(round.score(), 0);
        assert_eq!(round.current_index(), 12);
        assert!(round.feedback().is_none());
    }

    #[test]
    fn milestones_fire_once_each() {
        let mut rng = rng();
        let mut round = RoundState::new(&TREBLE, &mut rng);
        let mut volleys = Vec::new();
        while round.score() < 35 {
            let letter = round.current_note().letter_class();
            if let RoundOutcome::Correct { fireworks, .. } =
                round.handle(RoundInput::Guess(letter), 0, &mut rng)
            {
                if fireworks > 0 {
                    assert_eq!(fireworks, 3);
                    volleys.push(round.score());
                }
            }
        }
        assert_eq!(volleys, vec![10, 20, 30]);
        assert_eq!(round.last_firework_score(), 30);
    }

    #[test]
    fn effects_expire() {
        let mut rng = rng();
        let mut round = RoundState::with_note(&TREBLE, 0);
        round.score = 9;
        round.handle(RoundInput::Guess(Letter::C), 0, &mut rng);
        assert_eq!(round.fireworks().len(), 3);
        for fw in round.fireworks() {
            assert!(fw.x >= 100.0 && fw.x <= 800.0);
            assert!(fw.y >= 80.0 && fw.y <= 300.0);
        }
        for _ in 0..60 {
            round.update_effects();
        }
        assert!(round.fireworks().is_empty());
    }
}
