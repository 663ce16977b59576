// =====================================================================
// TONE SYNTHESIS
// =====================================================================
// Plain sine tones with a short linear fade at both ends so playback
// starts and stops without a click. Output is interleaved stereo i16.

use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::Arc;

use log::debug;

use crate::config::FADE_SECONDS;
use crate::note::Note;

/// Renders `duration` seconds of a sine at `freq` Hz. Deterministic for
/// equal arguments.
pub fn synthesize(freq: f64, duration: f64, sample_rate: i32) -> Vec<i16> {
    let frames = (duration * sample_rate as f64).max(0.0) as usize;
    let fade = ((FADE_SECONDS * sample_rate as f64) as usize).min(frames / 2);

    let mut out = Vec::with_capacity(frames * 2);
    for i in 0..frames {
        let time = i as f64 / sample_rate as f64;
        let val = (2.0 * PI * freq * time).sin();

        // Envelope: ramp 0 -> 1 over the first `fade` frames, 1 -> 0 over the last
        let mut env = 1.0;
        if fade > 1 {
            if i < fade {
                env = i as f64 / (fade - 1) as f64;
            } else if i >= frames - fade {
                env = (frames - 1 - i) as f64 / (fade - 1) as f64;
            }
        }

        let sample = (val * env * i16::MAX as f64) as i16;
        out.push(sample);
        out.push(sample);
    }
    out
}

/// Precomputed buffers, one per note. Built once at startup and only
/// read afterwards.
pub struct ToneCache {
    tones: HashMap<Note, Arc<[i16]>>,
}

impl ToneCache {
    pub fn build(notes: &[Note], duration: f64, sample_rate: i32) -> Self {
        let mut tones = HashMap::with_capacity(notes.len());
        for note in notes {
            let buf: Arc<[i16]> = synthesize(note.frequency(), duration, sample_rate).into();
            tones.insert(*note, buf);
        }
        debug!("Tone cache ready: {} notes @ {} Hz", tones.len(), sample_rate);
        Self { tones }
    }

    pub fn get(&self, note: Note) -> Option<Arc<[i16]>> {
        self.tones.get(&note).cloned()
    }

    pub fn len(&self) -> usize {
        self.tones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clef;
    use crate::note::Letter;
    use pretty_assertions::assert_eq;

    #[test]
    fn deterministic() {
        let a = synthesize(440.0, 0.5, 22050);
        let b = synthesize(440.0, 0.5, 22050);
        assert_eq!(a, b);
    }

    #[test]
    fn length_and_stereo() {
        let buf = synthesize(261.63, 0.5, 22050);
        assert_eq!(buf.len(), 11025 * 2);
        for frame in buf.chunks_exact(2) {
            assert_eq!(frame[0], frame[1]);
        }
    }

    #[test]
    fn fades_at_both_ends() {
        let buf = synthesize(440.0, 0.5, 22050);
        let frames = buf.len() / 2;
        assert_eq!(buf[0], 0);
        assert_eq!(buf[(frames - 1) * 2], 0);

        let fade = 1102;
        let peak = |range: std::ops::Range<usize>| {
            range.map(|i| buf[i * 2].unsigned_abs()).max().unwrap_or(0)
        };
        // first 5 ms stay quiet, the middle reaches nearly full scale
        assert!(peak(0..110) < 4000);
        assert!(peak(frames - 110..frames) < 4000);
        assert!(peak(fade..frames - fade) > 32000);
    }

    #[test]
    fn different_frequencies_differ() {
        assert_ne!(synthesize(440.0, 0.1, 22050), synthesize(220.0, 0.1, 22050));
    }

    #[test]
    fn degenerate_durations() {
        assert!(synthesize(440.0, 0.0, 22050).is_empty());
        // shorter than two fades: still bounded and finite
        let short = synthesize(440.0, 0.01, 22050);
        assert_eq!(short.len(), 220 * 2);
    }

    #[test]
    fn cache_covers_every_note() {
        let notes = clef::all_notes();
        let cache = ToneCache::build(&notes, 0.05, 8000);
        assert_eq!(cache.len(), notes.len());
        let c4 = cache.get(Note::new(Letter::C, 4)).unwrap();
        assert_eq!(&*c4, synthesize(Note::new(Letter::C, 4).frequency(), 0.05, 8000).as_slice());
        assert!(cache.get(Note::new(Letter::C, 7)).is_none());
    }
}
