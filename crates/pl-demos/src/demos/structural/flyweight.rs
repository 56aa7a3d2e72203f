//! Flyweight: hundreds of particles sharing one texture.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::Rng;

use crate::demos::Demo;
use crate::domain::{Control, DemoInput, InputOutcome};

pub const INITIAL_PARTICLES: usize = 50;
pub const PARTICLE_STEP: usize = 50;
pub const MAX_PARTICLES: usize = 300;

const STAR: &str = "🌟";

const CONTROLS: &[Control] = &[Control::new("a", "Add 50 Particles")];

/// Intrinsic state, shared by every particle that uses it.
#[derive(Debug, PartialEq, Eq)]
pub struct Texture {
    pub glyph: &'static str,
}

/// Hands out one shared [`Texture`] per glyph.
#[derive(Default)]
pub struct TextureFactory {
    cache: HashMap<&'static str, Arc<Texture>>,
}

impl fmt::Debug for TextureFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextureFactory")
            .field("textures", &self.cache.len())
            .finish()
    }
}

impl TextureFactory {
    pub fn get(&mut self, glyph: &'static str) -> Arc<Texture> {
        Arc::clone(
            self.cache
                .entry(glyph)
                .or_insert_with(|| Arc::new(Texture { glyph })),
        )
    }

    /// Distinct textures ever created.
    pub fn instances(&self) -> usize {
        self.cache.len()
    }
}

/// Extrinsic state: position (percent of the canvas) and scale.
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub texture: Arc<Texture>,
}

#[derive(Debug)]
pub struct FlyweightDemo {
    factory: TextureFactory,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl FlyweightDemo {
    pub fn new(rng: StdRng) -> Self {
        let mut demo = Self {
            factory: TextureFactory::default(),
            particles: Vec::with_capacity(MAX_PARTICLES),
            rng,
        };
        demo.spawn(INITIAL_PARTICLES);
        demo
    }

    fn spawn(&mut self, count: usize) {
        let start = self.particles.len();
        let end = (start + count).min(MAX_PARTICLES);
        for i in start..end {
            let texture = self.factory.get(STAR);
            let i = i as f64;
            self.particles.push(Particle {
                x: i.sin() * 40.0 + 50.0,
                y: i.cos() * 40.0 + 50.0,
                scale: self.rng.gen_range(0.5..1.5),
                texture,
            });
        }
    }

    /// Add another batch, stopping at the cap.
    pub fn add_particles(&mut self) {
        self.spawn(PARTICLE_STEP);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn texture_instances(&self) -> usize {
        self.factory.instances()
    }
}

impl Demo for FlyweightDemo {
    fn handle(&mut self, input: DemoInput, _now: Instant) -> InputOutcome {
        match input {
            DemoInput::Key('a') => {
                self.add_particles();
                InputOutcome::Consumed
            }
            _ => InputOutcome::Ignored,
        }
    }

    fn controls(&self) -> &'static [Control] {
        CONTROLS
    }

    fn hint(&self) -> &'static str {
        "Increase particles without exploding RAM"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn demo() -> FlyweightDemo {
        FlyweightDemo::new(StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_count_steps_and_caps() {
        let mut demo = demo();
        assert_eq!(demo.particles().len(), 50);
        demo.add_particles();
        assert_eq!(demo.particles().len(), 100);
        for _ in 0..10 {
            demo.handle(DemoInput::Key('a'), Instant::now());
        }
        assert_eq!(demo.particles().len(), MAX_PARTICLES);
    }

    #[test]
    fn test_single_shared_texture() {
        let mut demo = demo();
        demo.add_particles();
        assert_eq!(demo.texture_instances(), 1);
        let first = &demo.particles()[0].texture;
        assert!(demo.particles().iter().all(|p| Arc::ptr_eq(&p.texture, first)));
        assert_eq!(first.glyph, "🌟");
    }

    #[test]
    fn test_particle_geometry_in_range() {
        let demo = demo();
        for p in demo.particles() {
            assert!((10.0..=90.0).contains(&p.x));
            assert!((10.0..=90.0).contains(&p.y));
            assert!((0.5..1.5).contains(&p.scale));
        }
    }
}
