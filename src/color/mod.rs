/// Colour distance functions and name registry
pub mod distance;
/// Seeded placement order over the colour cube
pub mod sequence;
/// Quantized colours and colour cube enumeration
pub mod space;

pub use distance::{ColorDistance, DistanceRegistry};
pub use sequence::{PlacementSequence, Sequencer};
pub use space::{Color, ColorSpace};
