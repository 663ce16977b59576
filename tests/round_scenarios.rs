use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use staff_trainer::clef::{BASS, TREBLE};
use staff_trainer::note::{Letter, Note};
use staff_trainer::round::{FeedbackKind, RoundInput, RoundOutcome, RoundState};

fn answer_correctly(round: &mut RoundState, rng: &mut Pcg32, now: u64) -> RoundOutcome {
    let letter = round.current_note().letter_class();
    round.handle(RoundInput::Guess(letter), now, rng)
}

#[test]
fn bass_g2_answered_with_key_five() {
    let mut rng = Pcg32::seed_from_u64(2024);
    let mut round = RoundState::with_note(&BASS, 2);
    assert_eq!(round.current_note(), Note::parse("G2").unwrap());

    // key "5" is letter index 4
    let guess = Letter::from_index(4).unwrap();
    let outcome = round.handle(RoundInput::Guess(guess), 100, &mut rng);

    assert_eq!(
        outcome,
        RoundOutcome::Correct { played: Note::parse("G2").unwrap(), fireworks: 0 }
    );
    assert_eq!(round.score(), 1);
    let fb = round.visible_feedback(100).unwrap();
    assert_eq!(fb.kind, FeedbackKind::Correct);
    assert_eq!(fb.text, "Correct!");
    assert!(round.current_index() < BASS.notes.len());
    assert!(round.fireworks().is_empty());
    assert_eq!(round.last_firework_score(), 0);
}

#[test]
fn tenth_correct_answer_launches_three_fireworks() {
    let mut rng = Pcg32::seed_from_u64(99);
    let mut round = RoundState::new(&TREBLE, &mut rng);

    for i in 0..9 {
        let outcome = answer_correctly(&mut round, &mut rng, i);
        assert!(matches!(outcome, RoundOutcome::Correct { fireworks: 0, .. }));
    }
    assert_eq!(round.score(), 9);
    assert!(round.fireworks().is_empty());

    let outcome = answer_correctly(&mut round, &mut rng, 10);
    assert!(matches!(outcome, RoundOutcome::Correct { fireworks: 3, .. }));
    assert_eq!(round.score(), 10);
    assert_eq!(round.fireworks().len(), 3);
    assert_eq!(round.last_firework_score(), 10);
    for fw in round.fireworks() {
        assert_eq!(fw.particles.len(), 50);
    }
}

#[test]
fn wrong_answers_do_not_refire_milestone() {
    let mut rng = Pcg32::seed_from_u64(5);
    let mut round = RoundState::new(&BASS, &mut rng);
    for i in 0..10 {
        answer_correctly(&mut round, &mut rng, i);
    }
    assert_eq!(round.fireworks().len(), 3);

    // Sitting on score 10 and answering wrong never fires again
    for i in 0..20 {
        let right = round.current_note().letter_class();
        let wrong = Letter::from_index((right.index() + 1) % 7).unwrap();
        let outcome = round.handle(RoundInput::Guess(wrong), 100 + i, &mut rng);
        assert!(matches!(outcome, RoundOutcome::Wrong { .. }));
    }
    assert_eq!(round.score(), 10);
    assert_eq!(round.fireworks().len(), 3);

    for _ in 0..60 {
        round.update_effects();
    }
    assert!(round.fireworks().is_empty());
    assert_eq!(round.last_firework_score(), 10);
}

#[test]
fn wrong_answer_replays_the_shown_note() {
    let mut rng = Pcg32::seed_from_u64(11);
    let mut round = RoundState::with_note(&TREBLE, 0); // C4
    let outcome = round.handle(RoundInput::Guess(Letter::D), 0, &mut rng);
    assert_eq!(outcome, RoundOutcome::Wrong { played: Note::parse("C4").unwrap() });
    assert_eq!(round.visible_feedback(999).unwrap().text, "Wrong! It was C");
    assert!(round.visible_feedback(1000).is_none());
    assert_eq!(round.current_index(), 0);
}
