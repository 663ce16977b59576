// =====================================================================
// AUDIO-CALLBACK
// =====================================================================
// Fire-and-forget playback. Each `play` adds a voice to the mixer;
// voices that run out are dropped inside the callback. Several voices
// may overlap and are summed with saturation.

use std::sync::Arc;

use log::{info, warn};
use sdl2::AudioSubsystem;
use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

use crate::config::{AUDIO_BUFFER_SAMPLES, AUDIO_CHANNELS, SAMPLE_RATE};
use crate::note::Note;
use crate::tone::ToneCache;

struct Voice {
    samples: Arc<[i16]>,
    cursor: usize,
}

#[derive(Default)]
pub struct Mixer {
    voices: Vec<Voice>,
}

impl Mixer {
    pub fn push(&mut self, samples: Arc<[i16]>) {
        self.voices.push(Voice { samples, cursor: 0 });
    }

    pub fn active_voices(&self) -> usize {
        self.voices.len()
    }

    pub fn mix_into(&mut self, out: &mut [i16]) {
        for (i, dst) in out.iter_mut().enumerate() {
            let mut acc: i32 = 0;
            for v in &self.voices {
                if let Some(s) = v.samples.get(v.cursor + i) {
                    acc += *s as i32;
                }
            }
            *dst = acc.clamp(i16::MIN as i32, i16::MAX as i32) as i16;
        }

        for v in self.voices.iter_mut() {
            v.cursor += out.len();
        }
        self.voices.retain(|v| v.cursor < v.samples.len());
    }
}

impl AudioCallback for Mixer {
    type Channel = i16;

    fn callback(&mut self, out: &mut [i16]) {
        self.mix_into(out);
    }
}

/// Tone cache plus the output device. Without a device the player
/// stays silent.
pub struct TonePlayer {
    tones: ToneCache,
    device: Option<AudioDevice<Mixer>>,
}

impl TonePlayer {
    pub fn open(audio: Option<&AudioSubsystem>, tones: ToneCache) -> Self {
        let desired_spec = AudioSpecDesired {
            freq: Some(SAMPLE_RATE),
            channels: Some(AUDIO_CHANNELS),
            samples: Some(AUDIO_BUFFER_SAMPLES),
        };

        let device = audio.and_then(|audio| {
            match audio.open_playback(None, &desired_spec, |_spec| Mixer::default()) {
                Ok(device) => {
                    let spec = device.spec();
                    info!("Audio: {} Hz, {} channels", spec.freq, spec.channels);
                    device.resume();
                    Some(device)
                }
                Err(e) => {
                    warn!("No audio device, playing silently: {}", e);
                    None
                }
            }
        });

        Self { tones, device }
    }

    pub fn play(&mut self, note: Note) {
        let Some(device) = self.device.as_mut() else {
            return;
        };
        match self.tones.get(note) {
            Some(samples) => device.lock().push(samples),
            None => warn!("No cached tone for {}", note),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_voice_passes_through() {
        let mut mixer = Mixer::default();
        mixer.push(Arc::from(vec![1i16, 2, 3, 4, 5]));
        let mut out = [0i16; 4];
        mixer.mix_into(&mut out);
        assert_eq!(out, [1, 2, 3, 4]);
        assert_eq!(mixer.active_voices(), 1);

        mixer.mix_into(&mut out);
        assert_eq!(out, [5, 0, 0, 0]);
        assert_eq!(mixer.active_voices(), 0);
    }

    #[test]
    fn voices_overlap_and_saturate() {
        let mut mixer = Mixer::default();
        mixer.push(Arc::from(vec![100i16, i16::MAX, i16::MIN]));
        mixer.push(Arc::from(vec![50i16, 10, -10]));
        let mut out = [0i16; 3];
        mixer.mix_into(&mut out);
        assert_eq!(out, [150, i16::MAX, i16::MIN]);
        assert_eq!(mixer.active_voices(), 0);
    }

    #[test]
    fn silence_without_voices() {
        let mut mixer = Mixer::default();
        let mut out = [7i16; 8];
        mixer.mix_into(&mut out);
        assert_eq!(out, [0; 8]);
    }
}
