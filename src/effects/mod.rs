pub mod particles;
pub mod timing;

pub use particles::ParticleField;
pub use timing::{Debouncer, Rotator};
