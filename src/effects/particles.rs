use std::time::{Duration, Instant};

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

const DAMPING: f64 = 0.96;
const POINTER_FORCE: f64 = 0.15;
const LINK_OPACITY: f64 = 0.15;
/// Slice of the particle list (starting at the particle itself) scanned for links.
const LINK_WINDOW: usize = 10;
/// Horizontal space per particle when sizing the field.
const COLUMNS_PER_PARTICLE: f64 = 3.0;
const POINTER_THROTTLE: Duration = Duration::from_millis(50);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palette {
    Cyan,
    Indigo,
    Violet,
}

const PALETTE: [Palette; 3] = [Palette::Cyan, Palette::Indigo, Palette::Violet];

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub opacity: f64,
    pub color: Palette,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub opacity: f64,
    pub color: Palette,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    pointer: Option<(f64, f64)>,
    last_pointer_update: Option<Instant>,
    pointer_radius: f64,
    link_radius: f64,
}

impl ParticleField {
    pub fn new(width: f64, height: f64, max_particles: usize) -> Self {
        Self::with_rng(width, height, max_particles, SmallRng::from_entropy())
    }

    pub fn seeded(width: f64, height: f64, max_particles: usize, seed: u64) -> Self {
        Self::with_rng(width, height, max_particles, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(width: f64, height: f64, max_particles: usize, mut rng: SmallRng) -> Self {
        let width = width.max(1.0);
        let height = height.max(1.0);
        let count = particle_count(width, max_particles);
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.gen_range(0.0..width),
                y: rng.gen_range(0.0..height),
                vx: rng.gen_range(-0.15..0.15),
                vy: rng.gen_range(-0.15..0.15),
                size: rng.gen_range(0.5..2.0),
                opacity: rng.gen_range(0.1..0.5),
                color: PALETTE[rng.gen_range(0..PALETTE.len())],
            })
            .collect();

        // Radii scale with the smaller dimension so small terminals still link.
        let scale = width.min(height);
        Self {
            particles,
            width,
            height,
            pointer: None,
            last_pointer_update: None,
            pointer_radius: (scale * 0.3).max(4.0),
            link_radius: (scale * 0.2).max(3.0),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Track the pointer, ignoring updates that arrive within the throttle window.
    pub fn set_pointer(&mut self, x: f64, y: f64, now: Instant) -> bool {
        if let Some(last) = self.last_pointer_update {
            if now.duration_since(last) < POINTER_THROTTLE {
                return false;
            }
        }
        self.last_pointer_update = Some(now);
        self.pointer = Some((x, y));
        true
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    /// Rescale to new bounds, keeping relative positions.
    pub fn resize(&mut self, width: f64, height: f64) {
        let width = width.max(1.0);
        let height = height.max(1.0);
        let sx = width / self.width;
        let sy = height / self.height;
        for p in &mut self.particles {
            p.x *= sx;
            p.y *= sy;
        }
        self.width = width;
        self.height = height;
        let scale = width.min(height);
        self.pointer_radius = (scale * 0.3).max(4.0);
        self.link_radius = (scale * 0.2).max(3.0);
    }

    /// Advance one animation frame.
    pub fn step(&mut self) {
        let pointer_sq = self.pointer_radius * self.pointer_radius;
        for p in &mut self.particles {
            if let Some((mx, my)) = self.pointer {
                let dx = p.x - mx;
                let dy = p.y - my;
                let dist_sq = dx * dx + dy * dy;
                if dist_sq < pointer_sq && dist_sq > 0.0 {
                    let force = (1.0 - dist_sq / pointer_sq) * POINTER_FORCE;
                    let inv = 1.0 / dist_sq.sqrt();
                    p.vx += dx * inv * force;
                    p.vy += dy * inv * force;
                }
            }

            p.x += p.vx;
            p.y += p.vy;
            p.vx *= DAMPING;
            p.vy *= DAMPING;

            if p.x < 0.0 {
                p.x = self.width;
            } else if p.x > self.width {
                p.x = 0.0;
            }
            if p.y < 0.0 {
                p.y = self.height;
            } else if p.y > self.height {
                p.y = 0.0;
            }
        }
    }

    /// Faint links between nearby particles, checking only a short window ahead.
    pub fn connections(&self) -> Vec<Link> {
        let link_sq = self.link_radius * self.link_radius;
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            let end = (i + LINK_WINDOW).min(self.particles.len());
            for b in &self.particles[i + 1..end] {
                let dx = a.x - b.x;
                let dy = a.y - b.y;
                let dist_sq = dx * dx + dy * dy;
                if dist_sq < link_sq {
                    links.push(Link {
                        from: (a.x, a.y),
                        to: (b.x, b.y),
                        opacity: (1.0 - dist_sq / link_sq) * LINK_OPACITY,
                        color: a.color,
                    });
                }
            }
        }
        links
    }
}

pub fn particle_count(width: f64, max_particles: usize) -> usize {
    ((width / COLUMNS_PER_PARTICLE).floor() as usize).min(max_particles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still(x: f64, y: f64) -> Particle {
        Particle {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            size: 1.0,
            opacity: 0.3,
            color: Palette::Cyan,
        }
    }

    fn field_with(particles: Vec<Particle>, w: f64, h: f64) -> ParticleField {
        let mut field = ParticleField::seeded(w, h, 0, 1);
        field.particles = particles;
        field
    }

    #[test]
    fn test_count_scales_with_width_and_caps() {
        assert_eq!(particle_count(30.0, 40), 10);
        assert_eq!(particle_count(1000.0, 40), 40);
        assert_eq!(particle_count(2.0, 40), 0);
    }

    #[test]
    fn test_seeded_fields_are_deterministic() {
        let a = ParticleField::seeded(120.0, 60.0, 40, 7);
        let b = ParticleField::seeded(120.0, 60.0, 40, 7);
        assert_eq!(a.particles(), b.particles());
        assert_eq!(a.particles().len(), 40);
        for p in a.particles() {
            assert!((0.0..120.0).contains(&p.x));
            assert!((0.0..60.0).contains(&p.y));
        }
    }

    #[test]
    fn test_step_damps_velocity() {
        let mut p = still(10.0, 10.0);
        p.vx = 1.0;
        let mut field = field_with(vec![p], 100.0, 100.0);
        field.step();
        let p = &field.particles()[0];
        assert!((p.x - 11.0).abs() < 1e-9);
        assert!((p.vx - 0.96).abs() < 1e-9);
    }

    #[test]
    fn test_step_wraps_edges() {
        let mut p = still(99.5, 0.2);
        p.vx = 1.0;
        p.vy = -0.5;
        let mut field = field_with(vec![p], 100.0, 50.0);
        field.step();
        let p = &field.particles()[0];
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 50.0);
    }

    #[test]
    fn test_pointer_repels() {
        let mut field = field_with(vec![still(52.0, 50.0)], 100.0, 100.0);
        field.set_pointer(50.0, 50.0, Instant::now());
        field.step();
        let p = &field.particles()[0];
        assert!(p.vx > 0.0, "pushed away from pointer");
        assert_eq!(p.vy, 0.0);
    }

    #[test]
    fn test_pointer_updates_are_throttled() {
        let mut field = ParticleField::seeded(100.0, 100.0, 10, 1);
        let t0 = Instant::now();
        assert!(field.set_pointer(1.0, 1.0, t0));
        assert!(!field.set_pointer(2.0, 2.0, t0 + Duration::from_millis(10)));
        assert!(field.set_pointer(3.0, 3.0, t0 + Duration::from_millis(60)));
        assert_eq!(field.pointer, Some((3.0, 3.0)));
    }

    #[test]
    fn test_links_only_for_close_pairs() {
        let field = field_with(
            vec![still(10.0, 10.0), still(11.0, 10.0), still(90.0, 90.0)],
            100.0,
            100.0,
        );
        let links = field.connections();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].from, (10.0, 10.0));
        assert!(links[0].opacity > 0.0 && links[0].opacity <= LINK_OPACITY);
    }

    #[test]
    fn test_links_limited_to_window() {
        let particles: Vec<Particle> = (0..12).map(|_| still(5.0, 5.0)).collect();
        let field = field_with(particles, 100.0, 100.0);
        let total = field.connections().len();
        let expected: usize = (0..12).map(|i: usize| (i + LINK_WINDOW).min(12) - (i + 1)).sum();
        assert_eq!(total, expected);
    }

    #[test]
    fn test_resize_keeps_relative_position() {
        let mut field = field_with(vec![still(50.0, 25.0)], 100.0, 50.0);
        field.resize(200.0, 100.0);
        let p = &field.particles()[0];
        assert_eq!((p.x, p.y), (100.0, 50.0));
        assert_eq!(field.bounds(), (200.0, 100.0));
    }
}
