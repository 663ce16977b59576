// =====================================================================
// FIREWORKS
// =====================================================================
// A burst of particles that fly apart, fall under gravity and fade
// out. One `update` call is one tick (frame).

use std::f32::consts::PI;

use rand::Rng;
use rand::seq::SliceRandom;
use sdl2::pixels::Color;

use crate::config::{
    FIREWORK_PALETTE, PARTICLE_DRAG, PARTICLE_GRAVITY, PARTICLE_LIFETIME, PARTICLE_MAX_RADIUS,
    PARTICLE_MAX_SPEED, PARTICLE_MIN_SPEED, PARTICLES_PER_FIREWORK,
};

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub color: Color,
    /// Remaining ticks
    pub life: i32,
}

impl Particle {
    pub fn update(&mut self) {
        self.vx *= PARTICLE_DRAG;
        self.vy += PARTICLE_GRAVITY;
        self.x += self.vx;
        self.y += self.vy;
        self.life -= 1;
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Remaining life as 0.0 ..= 1.0
    pub fn life_fraction(&self) -> f32 {
        (self.life.max(0) as f32 / PARTICLE_LIFETIME as f32).min(1.0)
    }

    pub fn radius(&self) -> f32 {
        PARTICLE_MAX_RADIUS * self.life_fraction()
    }

    pub fn alpha(&self) -> u8 {
        (255.0 * self.life_fraction()) as u8
    }
}

#[derive(Debug, Clone)]
pub struct Firework {
    pub x: f32,
    pub y: f32,
    pub particles: Vec<Particle>,
}

impl Firework {
    pub fn new(x: f32, y: f32, rng: &mut impl Rng) -> Self {
        let color = *FIREWORK_PALETTE
            .choose(rng)
            .unwrap_or(&FIREWORK_PALETTE[0]);

        let particles = (0..PARTICLES_PER_FIREWORK)
            .map(|_| {
                let angle = rng.gen_range(0.0..2.0 * PI);
                let speed = rng.gen_range(PARTICLE_MIN_SPEED..PARTICLE_MAX_SPEED);
                Particle {
                    x,
                    y,
                    vx: angle.cos() * speed,
                    vy: angle.sin() * speed,
                    color,
                    life: PARTICLE_LIFETIME,
                }
            })
            .collect();

        Self { x, y, particles }
    }

    /// Advances every particle one tick and drops the dead ones.
    pub fn update(&mut self) {
        for p in self.particles.iter_mut() {
            p.update();
        }
        self.particles.retain(Particle::is_alive);
    }

    pub fn is_finished(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Steps all fireworks and prunes the finished ones.
pub fn update_all(fireworks: &mut Vec<Firework>) {
    for fw in fireworks.iter_mut() {
        fw.update();
    }
    fireworks.retain(|fw| !fw.is_finished());
}
