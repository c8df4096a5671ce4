//! Decorative desktop effects: the particle field and the clock.
//!
//! Both are fire-and-forget timer consumers with no relationship to the
//! window manager; the idle tick of the event loop advances them.

use chrono::{DateTime, Datelike, Local, Timelike};

use crate::constants::PARTICLE_COUNT;

/// One background particle in normalized desktop coordinates (0..1 on both
/// axes). Particles drift upward and wrap.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    speed: f32,
    large: bool,
}

impl Particle {
    pub fn glyph(&self) -> &'static str {
        if self.large { "•" } else { "·" }
    }
}

/// Fixed-size particle field. Positions, sizes, and speeds come from a
/// small xorshift stream so the field looks scattered without pulling in a
/// full RNG dependency for two decorative dots.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    rng: u64,
}

impl ParticleField {
    pub fn new(seed: u64) -> Self {
        let mut field = Self {
            particles: Vec::with_capacity(PARTICLE_COUNT),
            rng: seed.max(1),
        };
        for _ in 0..PARTICLE_COUNT {
            let x = field.next_unit();
            let y = field.next_unit();
            let speed = 0.001 + field.next_unit() * 0.003;
            let large = field.next_unit() > 0.7;
            field.particles.push(Particle { x, y, speed, large });
        }
        field
    }

    /// Seed from the wall clock; good enough for decoration.
    pub fn from_time() -> Self {
        let seed = Local::now().timestamp_subsec_nanos() as u64 ^ 0x9e37_79b9_7f4a_7c15;
        Self::new(seed)
    }

    fn next_unit(&mut self) -> f32 {
        // xorshift64
        let mut x = self.rng;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.rng = x;
        (x >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Advance one animation frame: drift upward, wrap at the top.
    pub fn tick(&mut self) {
        for particle in &mut self.particles {
            particle.y -= particle.speed;
            if particle.y < 0.0 {
                particle.y += 1.0;
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

/// Taskbar clock text, zero-padded `HH:MM`.
pub fn clock_text(now: DateTime<Local>) -> String {
    format!("{:02}:{:02}", now.hour(), now.minute())
}

/// Weekday label for the desktop widget, e.g. `Thu`.
pub fn weekday_text(now: DateTime<Local>) -> String {
    now.weekday().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn field_spawns_requested_count_in_unit_square() {
        let field = ParticleField::new(42);
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        for particle in field.particles() {
            assert!((0.0..1.0).contains(&particle.x));
            assert!((0.0..1.0).contains(&particle.y));
        }
    }

    #[test]
    fn tick_keeps_particles_in_unit_square() {
        let mut field = ParticleField::new(7);
        for _ in 0..10_000 {
            field.tick();
        }
        for particle in field.particles() {
            assert!((0.0..=1.0).contains(&particle.y));
        }
    }

    #[test]
    fn clock_text_is_zero_padded() {
        let now = Local.with_ymd_and_hms(2024, 3, 4, 9, 5, 0).unwrap();
        assert_eq!(clock_text(now), "09:05");
    }

    #[test]
    fn weekday_text_names_the_day() {
        let now = Local.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap();
        assert_eq!(weekday_text(now), "Mon");
    }
}
