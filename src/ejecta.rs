//! Ejecta plume particle system.
//!
//! Particles are created in one batch when the impactor hits and then only
//! age, drift and fade. The collection is a flat `Vec` compacted in place
//! every tick, so it never reallocates after the spawn.

use bevy::math::DVec2;
use rand::Rng;

use crate::types::DEG_TO_RAD;

/// A single ejecta fragment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EjectaParticle {
    /// Position in scene coordinates (visual units).
    pub pos: DVec2,
    /// Velocity (visual units per simulated second).
    pub vel: DVec2,
    /// Drawn radius.
    pub size: f64,
    /// Opacity in [0, 1].
    pub opacity: f64,
    /// Time since spawn (simulated seconds).
    pub age: f64,
}

impl EjectaParticle {
    /// Integrate one step and recompute opacity from age.
    fn advance(&mut self, dt: f64, lifetime: f64) {
        self.pos += self.vel * dt;
        self.age += dt;
        self.opacity = (1.0 - self.age / lifetime).max(0.0);
    }
}

/// Shape of an ejecta batch.
#[derive(Clone, Debug, PartialEq)]
pub struct PlumeShape {
    /// Full angular width of the plume (degrees), centered on the ejecta direction.
    pub spread_deg: f64,
    /// Particle speed range (visual units per simulated second).
    pub speed: std::ops::Range<f64>,
    /// Particle size range.
    pub size: std::ops::Range<f64>,
}

impl Default for PlumeShape {
    fn default() -> Self {
        Self {
            spread_deg: 40.0,
            speed: 1.5..4.0,
            size: 1.0..2.5,
        }
    }
}

/// The live set of ejecta particles.
#[derive(Clone, Debug, Default)]
pub struct EjectaCloud {
    particles: Vec<EjectaParticle>,
}

impl EjectaCloud {
    /// Replace the cloud with a fresh batch.
    ///
    /// `bearing_deg` is the plume axis, measured clockwise from screen-up.
    pub fn spawn_batch<R: Rng>(
        &mut self,
        rng: &mut R,
        origin: DVec2,
        bearing_deg: f64,
        count: usize,
        shape: &PlumeShape,
    ) {
        self.particles.clear();
        if count == 0 {
            return;
        }

        self.particles.reserve(count);
        let half_spread = shape.spread_deg / 2.0;
        for _ in 0..count {
            let offset = if half_spread > 0.0 {
                rng.gen_range(-half_spread..half_spread)
            } else {
                0.0
            };
            let speed = sample(rng, &shape.speed);
            let direction = bearing_to_unit(bearing_deg + offset);

            self.particles.push(EjectaParticle {
                pos: origin,
                vel: direction * speed,
                size: sample(rng, &shape.size),
                opacity: 1.0,
                age: 0.0,
            });
        }
    }

    /// Advance every particle, then drop the fully faded ones.
    pub fn advance(&mut self, dt: f64, lifetime: f64) {
        for particle in &mut self.particles {
            particle.advance(dt, lifetime);
        }
        self.particles.retain(|p| p.opacity > 0.0);
    }

    /// Remove all particles.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn particles(&self) -> &[EjectaParticle] {
        &self.particles
    }
}

/// Unit vector for a bearing measured clockwise from screen-up (+y).
pub fn bearing_to_unit(bearing_deg: f64) -> DVec2 {
    let rad = bearing_deg * DEG_TO_RAD;
    DVec2::new(rad.sin(), rad.cos())
}

fn sample<R: Rng>(rng: &mut R, range: &std::ops::Range<f64>) -> f64 {
    if range.start < range.end {
        rng.gen_range(range.clone())
    } else {
        range.start
    }
}
