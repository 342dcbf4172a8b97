use macroquad::audio::{self, PlaySoundParams, Sound, load_sound_from_bytes};

pub const SAMPLE_RATE: u32 = 44_100;

// Envelope: gain 0.1 decaying exponentially to 0.01 over the tone.
const ENVELOPE_START: f32 = 0.1;
const ENVELOPE_END: f32 = 0.01;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Waveform {
    Square,
    Sine,
}

/// Renders a single decaying tone as an in-memory PCM16 mono WAV.
pub fn render_tone(frequency_hz: f32, duration_secs: f32, waveform: Waveform) -> Vec<u8> {
    let num_samples: u32 = (duration_secs * SAMPLE_RATE as f32) as u32;
    let mut data: Vec<u8> = Vec::with_capacity((num_samples as usize) * 2 + 44);

    let block_align: u16 = 2; // mono 16-bit
    let byte_rate: u32 = SAMPLE_RATE * block_align as u32;
    let data_size: u32 = num_samples * 2;
    let chunk_size: u32 = 36 + data_size;

    // RIFF header
    data.extend_from_slice(b"RIFF");
    data.extend_from_slice(&chunk_size.to_le_bytes());
    data.extend_from_slice(b"WAVE");
    // fmt chunk
    data.extend_from_slice(b"fmt ");
    data.extend_from_slice(&16u32.to_le_bytes()); // PCM chunk size
    data.extend_from_slice(&1u16.to_le_bytes()); // PCM format
    data.extend_from_slice(&1u16.to_le_bytes()); // channels
    data.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    data.extend_from_slice(&byte_rate.to_le_bytes());
    data.extend_from_slice(&block_align.to_le_bytes());
    data.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    // data chunk
    data.extend_from_slice(b"data");
    data.extend_from_slice(&data_size.to_le_bytes());

    let two_pi = std::f32::consts::TAU;
    for n in 0..num_samples {
        let t = n as f32 / SAMPLE_RATE as f32;
        let phase = (two_pi * frequency_hz * t).sin();
        let wave = match waveform {
            Waveform::Sine => phase,
            Waveform::Square => {
                if phase >= 0.0 {
                    1.0
                } else {
                    -1.0
                }
            }
        };
        let gain = ENVELOPE_START * (ENVELOPE_END / ENVELOPE_START).powf(t / duration_secs);
        let sample = (gain * wave * i16::MAX as f32) as i16;
        data.extend_from_slice(&sample.to_le_bytes());
    }
    data
}

/// Which pre-rendered tone a queued note refers to.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum NoteId {
    Eat(usize),
    GameOver(usize),
    Blip,
}

/// Tones decoded once at startup. `None` anywhere during loading means
/// the environment has no usable audio and the game runs silent.
pub struct SoundBank {
    eat: [Sound; 3],
    game_over: [Sound; 3],
    blip: Sound,
}

impl SoundBank {
    pub async fn load() -> Option<Self> {
        async fn tone(freq: f32, dur: f32, wave: Waveform) -> Option<Sound> {
            load_sound_from_bytes(&render_tone(freq, dur, wave)).await.ok()
        }

        Some(SoundBank {
            // Ascending triad: C5, E5, G5
            eat: [
                tone(523.25, 0.1, Waveform::Square).await?,
                tone(659.25, 0.1, Waveform::Square).await?,
                tone(783.99, 0.1, Waveform::Square).await?,
            ],
            // Descending: D4, C4, G3
            game_over: [
                tone(293.66, 0.2, Waveform::Square).await?,
                tone(261.63, 0.2, Waveform::Square).await?,
                tone(196.00, 0.3, Waveform::Square).await?,
            ],
            blip: tone(150.0, 0.05, Waveform::Sine).await?,
        })
    }

    fn sound(&self, id: NoteId) -> &Sound {
        match id {
            NoteId::Eat(i) => &self.eat[i],
            NoteId::GameOver(i) => &self.game_over[i],
            NoteId::Blip => &self.blip,
        }
    }
}

/// Fire-and-forget playback with a queue of notes scheduled at small
/// relative delays. The enabled flag is consulted when a note comes due,
/// not when it is queued, so muting drops pending notes but never stops
/// a tone that already started.
pub struct SoundPlayer {
    bank: Option<SoundBank>,
    enabled: bool,
    queue: Vec<(f64, NoteId)>,
}

impl SoundPlayer {
    pub fn new(bank: Option<SoundBank>) -> Self {
        SoundPlayer { bank, enabled: true, queue: Vec::new() }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn toggle_enabled(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    pub fn play_eat(&mut self, now: f64) {
        for (i, offset) in [0.0, 0.05, 0.10].into_iter().enumerate() {
            self.queue.push((now + offset, NoteId::Eat(i)));
        }
    }

    pub fn play_game_over(&mut self, now: f64) {
        for (i, offset) in [0.0, 0.10, 0.20].into_iter().enumerate() {
            self.queue.push((now + offset, NoteId::GameOver(i)));
        }
    }

    pub fn play_move(&mut self, now: f64) {
        self.queue.push((now, NoteId::Blip));
    }

    /// Drains every due note, playing the ones the mute gate lets
    /// through. Returns what was actually fired.
    pub fn update(&mut self, now: f64) -> Vec<NoteId> {
        let mut fired = Vec::new();
        let mut i = 0;
        while i < self.queue.len() {
            let (due, id) = self.queue[i];
            if due <= now {
                self.queue.swap_remove(i);
                if self.enabled {
                    if let Some(bank) = &self.bank {
                        audio::play_sound(
                            bank.sound(id),
                            PlaySoundParams { looped: false, volume: 1.0 },
                        );
                    }
                    fired.push((due, id));
                }
            } else {
                i += 1;
            }
        }
        // swap_remove scrambles order; notes within a sequence are only
        // 50-100 ms apart, so report them in due order.
        fired.sort_by(|a, b| a.0.total_cmp(&b.0));
        fired.into_iter().map(|(_, id)| id).collect()
    }
}
