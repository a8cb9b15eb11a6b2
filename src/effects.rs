//! Confetti bursts drawn over the quiz screens.
//!
//! Bursts are fire-and-forget: each one runs for a fixed time and then
//! disappears. Nothing here is read back by the session.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::feedback::Feedback;

const GRAVITY: f64 = 1.2;
const PARTICLE_LIFETIME: f64 = 1.5;
const GLYPHS: [char; 5] = ['*', '•', '+', '·', '✦'];

const SUCCESS_PARTICLES: usize = 100;
const SUCCESS_SPREAD: f64 = 70.0;
const SUCCESS_ORIGIN: (f64, f64) = (0.5, 0.6);
const SUCCESS_PALETTE: [[u8; 3]; 4] = [
    [0x22, 0xc5, 0x5e],
    [0x4a, 0xde, 0x80],
    [0x86, 0xef, 0xac],
    [0xff, 0xff, 0xff],
];

const COMPLETION_DURATION: f64 = 3.0;
const COMPLETION_WAVE_INTERVAL: f64 = 0.05;
const COMPLETION_PER_WAVE: usize = 5;
const COMPLETION_SPREAD: f64 = 55.0;
const COMPLETION_PALETTE: [[u8; 3]; 4] = [
    [0x63, 0x66, 0xf1],
    [0xec, 0x48, 0x99],
    [0x22, 0xc5, 0x5e],
    [0xfa, 0xcc, 0x15],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstKind {
    /// One short pop from the middle of the screen.
    Success,
    /// Side cannons firing for a few seconds.
    Completion,
}

#[derive(Debug, Clone, Copy)]
struct Particle {
    origin: (f64, f64),
    velocity: (f64, f64),
    delay: f64,
    color: [u8; 3],
    glyph: char,
}

impl Particle {
    /// Position at `elapsed` seconds into the burst, in fractions of the
    /// drawing area with y growing downwards.
    fn position(&self, elapsed: f64) -> Option<(f64, f64)> {
        let t = elapsed - self.delay;
        if !(0.0..=PARTICLE_LIFETIME).contains(&t) {
            return None;
        }
        let x = self.origin.0 + self.velocity.0 * t;
        let y = self.origin.1 - self.velocity.1 * t + 0.5 * GRAVITY * t * t;
        ((0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y)).then_some((x, y))
    }
}

#[derive(Debug, Clone)]
struct Burst {
    kind: BurstKind,
    started: Instant,
    particles: Vec<Particle>,
    length: Duration,
}

impl Burst {
    fn elapsed(&self, now: Instant) -> f64 {
        now.saturating_duration_since(self.started).as_secs_f64()
    }

    fn is_running(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) <= self.length
    }
}

/// A visible confetti piece for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spark {
    pub x: f64,
    pub y: f64,
    pub color: [u8; 3],
    pub glyph: char,
}

pub struct Confetti {
    enabled: bool,
    rng: StdRng,
    bursts: Vec<Burst>,
}

impl Confetti {
    pub fn new(enabled: bool) -> Self {
        Self::seeded(enabled, rand::random())
    }

    /// Deterministic particles, for tests and reproducible demos.
    pub fn seeded(enabled: bool, seed: u64) -> Self {
        Self {
            enabled,
            rng: StdRng::seed_from_u64(seed),
            bursts: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn fire(&mut self, kind: BurstKind, now: Instant) {
        if !self.enabled {
            return;
        }

        let particles = match kind {
            BurstKind::Success => self.success_particles(),
            BurstKind::Completion => self.completion_particles(),
        };
        let last_delay = particles.iter().map(|p| p.delay).fold(0.0, f64::max);
        let length = Duration::from_secs_f64(last_delay + PARTICLE_LIFETIME);

        tracing::trace!(?kind, particles = particles.len(), "confetti fired");
        self.bursts.push(Burst {
            kind,
            started: now,
            particles,
            length,
        });
    }

    /// Whether anything still needs animating at `now`.
    pub fn is_active(&self, now: Instant) -> bool {
        self.bursts.iter().any(|burst| burst.is_running(now))
    }

    /// Drop bursts that have run their course.
    pub fn prune(&mut self, now: Instant) {
        self.bursts.retain(|burst| burst.is_running(now));
    }

    pub fn running(&self, now: Instant) -> impl Iterator<Item = BurstKind> + '_ {
        self.bursts
            .iter()
            .filter(move |burst| burst.is_running(now))
            .map(|burst| burst.kind)
    }

    pub fn sparks(&self, now: Instant) -> Vec<Spark> {
        self.bursts
            .iter()
            .flat_map(|burst| {
                let elapsed = burst.elapsed(now);
                burst.particles.iter().filter_map(move |particle| {
                    let (x, y) = particle.position(elapsed)?;
                    Some(Spark {
                        x,
                        y,
                        color: particle.color,
                        glyph: particle.glyph,
                    })
                })
            })
            .collect()
    }

    fn success_particles(&mut self) -> Vec<Particle> {
        (0..SUCCESS_PARTICLES)
            .map(|_| self.particle(SUCCESS_ORIGIN, 90.0, SUCCESS_SPREAD, 0.0, &SUCCESS_PALETTE))
            .collect()
    }

    fn completion_particles(&mut self) -> Vec<Particle> {
        let waves = (COMPLETION_DURATION / COMPLETION_WAVE_INTERVAL) as usize;
        let mut particles = Vec::with_capacity(waves * COMPLETION_PER_WAVE * 2);
        for wave in 0..waves {
            let delay = wave as f64 * COMPLETION_WAVE_INTERVAL;
            for _ in 0..COMPLETION_PER_WAVE {
                particles.push(self.particle((0.0, 0.5), 60.0, COMPLETION_SPREAD, delay, &COMPLETION_PALETTE));
                particles.push(self.particle((1.0, 0.5), 120.0, COMPLETION_SPREAD, delay, &COMPLETION_PALETTE));
            }
        }
        particles
    }

    fn particle(
        &mut self,
        origin: (f64, f64),
        angle: f64,
        spread: f64,
        delay: f64,
        palette: &[[u8; 3]],
    ) -> Particle {
        let half = spread / 2.0;
        let angle = (angle + self.rng.random_range(-half..=half)).to_radians();
        let speed = self.rng.random_range(0.8..1.4);
        Particle {
            origin,
            velocity: (speed * angle.cos(), speed * angle.sin()),
            delay,
            color: palette[self.rng.random_range(0..palette.len())],
            glyph: GLYPHS[self.rng.random_range(0..GLYPHS.len())],
        }
    }
}

impl Feedback for Confetti {
    fn on_correct_answer(&mut self) {
        self.fire(BurstKind::Success, Instant::now());
    }

    fn on_quiz_completed(&mut self) {
        self.fire(BurstKind::Completion, Instant::now());
    }
}
