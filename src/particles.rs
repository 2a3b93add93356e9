use egui::{Painter, Pos2, Rect, Stroke, Vec2};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::theme::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SettingsBackground {
    pub enabled: bool,
    /// Pulsing glow lines behind the particles
    pub neon_lines: bool,
    pub count: usize,
    /// Max speed in points per frame
    pub speed: f32,
    pub radius: f32,
    pub opacity: f32,
    pub link_distance: f32,
    pub link_opacity: f32,
    pub link_width: f32,
}

impl Default for SettingsBackground {
    fn default() -> Self {
        Self {
            enabled: true,
            neon_lines: true,
            count: 40,
            speed: 1.2,
            radius: 2.5,
            opacity: 0.5,
            link_distance: 130.0,
            link_opacity: 0.3,
            link_width: 1.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Pos2,
    pub vel: Vec2,
    /// Index into the palette particle colors
    pub tint: usize,
}

/// A link between two particles; `strength` fades from 1 (touching) to 0
/// (at the link distance).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleLink {
    pub a: usize,
    pub b: usize,
    pub strength: f32,
}

/// Slowly drifting dots bouncing inside the window, linked when close.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(count: usize, bounds: Rect, speed: f32, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|i| {
                let pos = Pos2::new(
                    rng.random_range(bounds.min.x..=bounds.max.x),
                    rng.random_range(bounds.min.y..=bounds.max.y),
                );
                let angle = rng.random_range(0.0..std::f32::consts::TAU);
                let magnitude = rng.random_range(0.2..=1.0) * speed;
                Particle {
                    pos,
                    vel: Vec2::angled(angle) * magnitude,
                    tint: i % 3,
                }
            })
            .collect();
        Self { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Moves every particle one frame, bouncing off the edges of `bounds`.
    pub fn step(&mut self, bounds: Rect) {
        for p in &mut self.particles {
            p.pos += p.vel;
            if p.pos.x < bounds.min.x || p.pos.x > bounds.max.x {
                p.vel.x = -p.vel.x;
                p.pos.x = p.pos.x.clamp(bounds.min.x, bounds.max.x);
            }
            if p.pos.y < bounds.min.y || p.pos.y > bounds.max.y {
                p.vel.y = -p.vel.y;
                p.pos.y = p.pos.y.clamp(bounds.min.y, bounds.max.y);
            }
        }
    }

    pub fn links(&self, distance: f32) -> Vec<ParticleLink> {
        let mut links = Vec::new();
        for (a, pa) in self.particles.iter().enumerate() {
            for (offset, pb) in self.particles[a + 1..].iter().enumerate() {
                let d = pa.pos.distance(pb.pos);
                if d < distance {
                    links.push(ParticleLink {
                        a,
                        b: a + 1 + offset,
                        strength: 1.0 - d / distance,
                    });
                }
            }
        }
        links
    }

    pub fn paint(&self, painter: &Painter, settings: &SettingsBackground, palette: &Palette) {
        for link in self.links(settings.link_distance) {
            let color = palette
                .links
                .gamma_multiply(settings.link_opacity * link.strength);
            painter.line_segment(
                [self.particles[link.a].pos, self.particles[link.b].pos],
                Stroke::new(settings.link_width, color),
            );
        }
        for p in &self.particles {
            let color = palette.particles[p.tint % palette.particles.len()]
                .gamma_multiply(settings.opacity);
            painter.circle_filled(p.pos, settings.radius, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn bounds() -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(400.0, 300.0))
    }

    #[test]
    fn spawns_inside_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = ParticleField::new(40, bounds(), 1.2, &mut rng);
        assert_eq!(field.particles().len(), 40);
        assert!(field.particles().iter().all(|p| bounds().contains(p.pos)));
        assert!(field.particles().iter().all(|p| p.vel.length() <= 1.2 + 1e-4));
    }

    #[test]
    fn bounces_off_the_right_edge() {
        let mut field = ParticleField {
            particles: vec![Particle {
                pos: Pos2::new(399.5, 100.0),
                vel: Vec2::new(1.0, 0.0),
                tint: 0,
            }],
        };
        field.step(bounds());
        let p = field.particles()[0];
        assert_eq!(p.pos.x, 400.0);
        assert_eq!(p.vel.x, -1.0);
        field.step(bounds());
        assert_eq!(field.particles()[0].pos.x, 399.0);
    }

    #[test]
    fn stays_inside_after_many_steps() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = ParticleField::new(20, bounds(), 3.0, &mut rng);
        for _ in 0..500 {
            field.step(bounds());
        }
        assert!(field.particles().iter().all(|p| bounds().contains(p.pos)));
    }

    #[test]
    fn links_only_close_pairs() {
        let particle = |x: f32| Particle {
            pos: Pos2::new(x, 0.0),
            vel: Vec2::ZERO,
            tint: 0,
        };
        let field = ParticleField {
            particles: vec![particle(0.0), particle(65.0), particle(300.0)],
        };
        let links = field.links(130.0);
        assert_eq!(links.len(), 1);
        assert_eq!((links[0].a, links[0].b), (0, 1));
        assert!((links[0].strength - 0.5).abs() < 1e-6);
    }
}
