//! Ambient binaural tone synthesis.
//!
//! Pure sample generation, no audio device: the host pulls stereo frames
//! and feeds them to whatever output it has. The left channel sits half
//! the beat frequency below the carrier and the right channel half above,
//! each run through a low-pass filter, with exponential gain ramps on
//! start and stop so the tone never clicks.

use std::f64::consts::PI;

use crate::settings::AudioSettings;

/// Floor for exponential ramps; a true zero never converges.
const RAMP_FLOOR: f64 = 0.0001;

/// Synthesis parameters, normally sourced from `[audio]` settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneParams {
    pub beat_hz: f64,
    pub base_hz: f64,
    pub ramp_seconds: f64,
    pub filter_hz: f64,
    pub filter_q: f64,
    pub initial_volume: f64,
    pub max_volume: f64,
}

impl ToneParams {
    pub fn left_hz(&self) -> f64 {
        self.base_hz - self.beat_hz / 2.0
    }

    pub fn right_hz(&self) -> f64 {
        self.base_hz + self.beat_hz / 2.0
    }
}

impl From<&AudioSettings> for ToneParams {
    fn from(a: &AudioSettings) -> Self {
        Self {
            beat_hz: a.beat_hz,
            base_hz: a.base_hz,
            ramp_seconds: a.ramp_seconds,
            filter_hz: a.filter_hz,
            filter_q: a.filter_q,
            initial_volume: a.initial_volume,
            max_volume: a.max_volume,
        }
    }
}

impl Default for ToneParams {
    fn default() -> Self {
        Self::from(&crate::settings::Settings::default().audio)
    }
}

/// Direct-form biquad low-pass (RBJ cookbook coefficients).
#[derive(Debug, Clone, Copy)]
struct LowPass {
    b0: f64,
    b1: f64,
    b2: f64,
    a1: f64,
    a2: f64,
    x1: f64,
    x2: f64,
    y1: f64,
    y2: f64,
}

impl LowPass {
    fn new(cutoff_hz: f64, q: f64, sample_rate: f64) -> Self {
        let w0 = 2.0 * PI * cutoff_hz / sample_rate;
        let alpha = w0.sin() / (2.0 * q);
        let cos_w0 = w0.cos();
        let a0 = 1.0 + alpha;
        Self {
            b0: ((1.0 - cos_w0) / 2.0) / a0,
            b1: (1.0 - cos_w0) / a0,
            b2: ((1.0 - cos_w0) / 2.0) / a0,
            a1: (-2.0 * cos_w0) / a0,
            a2: (1.0 - alpha) / a0,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    fn process(&mut self, x: f64) -> f64 {
        let y = self.b0 * x + self.b1 * self.x1 + self.b2 * self.x2
            - self.a1 * self.y1
            - self.a2 * self.y2;
        self.x2 = self.x1;
        self.x1 = x;
        self.y2 = self.y1;
        self.y1 = y;
        y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EnvelopeStage {
    RampIn,
    Steady,
    RampOut,
    Finished,
}

/// One stereo sample pair.
pub type Frame = [f32; 2];

/// Pull-based stereo tone generator.
pub struct ToneGenerator {
    params: ToneParams,
    sample_rate: f64,
    phase_left: f64,
    phase_right: f64,
    filter_left: LowPass,
    filter_right: LowPass,
    gain: f64,
    ramp_factor: f64,
    stage: EnvelopeStage,
    master_volume: f64,
}

impl ToneGenerator {
    pub fn new(params: ToneParams, sample_rate: u32) -> Self {
        let sample_rate = f64::from(sample_rate);
        let ramp_samples = (params.ramp_seconds * sample_rate).max(1.0);
        // Per-sample multiplier taking the gain from the floor to 1.0
        // across the ramp window.
        let ramp_factor = (1.0 / RAMP_FLOOR).powf(1.0 / ramp_samples);
        Self {
            params,
            sample_rate,
            phase_left: 0.0,
            phase_right: 0.0,
            filter_left: LowPass::new(params.filter_hz, params.filter_q, sample_rate),
            filter_right: LowPass::new(params.filter_hz, params.filter_q, sample_rate),
            gain: RAMP_FLOOR,
            ramp_factor,
            stage: EnvelopeStage::RampIn,
            master_volume: params.initial_volume,
        }
    }

    pub fn master_volume(&self) -> f64 {
        self.master_volume
    }

    /// Set the master volume, clamped to `[0, max_volume]`.
    pub fn set_master_volume(&mut self, volume: f64) {
        self.master_volume = volume.clamp(0.0, self.params.max_volume);
    }

    /// Begin the fade-out; frames keep coming until it completes.
    pub fn stop(&mut self) {
        if self.stage != EnvelopeStage::Finished {
            self.stage = EnvelopeStage::RampOut;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.stage == EnvelopeStage::Finished
    }

    /// Next stereo frame, `None` once the fade-out has completed.
    pub fn next_frame(&mut self) -> Option<Frame> {
        match self.stage {
            EnvelopeStage::Finished => return None,
            EnvelopeStage::RampIn => {
                self.gain *= self.ramp_factor;
                if self.gain >= 1.0 {
                    self.gain = 1.0;
                    self.stage = EnvelopeStage::Steady;
                }
            }
            EnvelopeStage::Steady => {}
            EnvelopeStage::RampOut => {
                self.gain /= self.ramp_factor;
                if self.gain <= RAMP_FLOOR {
                    self.stage = EnvelopeStage::Finished;
                    return None;
                }
            }
        }

        let step_left = 2.0 * PI * self.params.left_hz() / self.sample_rate;
        let step_right = 2.0 * PI * self.params.right_hz() / self.sample_rate;
        self.phase_left = (self.phase_left + step_left) % (2.0 * PI);
        self.phase_right = (self.phase_right + step_right) % (2.0 * PI);

        let amp = self.gain * self.master_volume;
        let left = self.filter_left.process(self.phase_left.sin()) * amp;
        let right = self.filter_right.process(self.phase_right.sin()) * amp;
        Some([left as f32, right as f32])
    }
}
