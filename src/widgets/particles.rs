//! Air particles drifting through a fan bank.
//!
//! Positions are a function of elapsed time only. Each particle gets a
//! deterministic lane, start delay and cycle length from a small integer
//! hash, so two frames at the same instant are identical.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    Cold,
    Hot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticleField {
    pub kind: ParticleKind,
    pub count: usize,
    seed: u32,
}

/// One particle at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position across the flow, 0.0..1.0
    pub lane: f32,
    /// Progress along the flow, 0.0 (entry) ..1.0 (exit)
    pub travel: f32,
    /// 0.0 (invisible) ..0.8 (peak)
    pub intensity: f32,
}

const MAX_DELAY_SECS: f32 = 2.0;
const MIN_CYCLE_SECS: f32 = 1.5;
const PEAK_INTENSITY: f32 = 0.8;
const FADE_IN: f32 = 0.2;

impl ParticleField {
    pub fn new(kind: ParticleKind, count: usize, seed: u32) -> Self {
        Self {
            kind,
            count,
            seed,
        }
    }

    /// Visible particles at `elapsed` since the animation started
    pub fn particles(&self, elapsed: Duration) -> Vec<Particle> {
        let now = elapsed.as_secs_f32();

        (0..self.count as u32)
            .filter_map(|i| {
                let lane = scatter(self.seed, i, 0);
                let delay = scatter(self.seed, i, 1) * MAX_DELAY_SECS;
                let cycle = MIN_CYCLE_SECS + scatter(self.seed, i, 2);

                if now < delay {
                    return None;
                }

                let travel = ((now - delay) % cycle) / cycle;
                let intensity = if travel < FADE_IN {
                    PEAK_INTENSITY * travel / FADE_IN
                } else {
                    PEAK_INTENSITY * (1.0 - (travel - FADE_IN) / (1.0 - FADE_IN))
                };

                (intensity > 0.0).then_some(Particle {
                    lane,
                    travel,
                    intensity,
                })
            })
            .collect()
    }
}

/// Hash (seed, index, channel) to a value in 0.0..1.0
fn scatter(seed: u32, index: u32, channel: u32) -> f32 {
    let mut x = seed
        .wrapping_mul(0x9E37_79B9)
        .wrapping_add(index.wrapping_mul(0x85EB_CA6B))
        .wrapping_add(channel.wrapping_mul(0xC2B2_AE35));
    x ^= x >> 16;
    x = x.wrapping_mul(0x7FEB_352D);
    x ^= x >> 15;
    x = x.wrapping_mul(0x846C_A68B);
    x ^= x >> 16;
    (x >> 8) as f32 / (1u32 << 24) as f32
}
