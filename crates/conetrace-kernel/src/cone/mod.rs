//! Cone queries: sampled primitive tests and exact box culling.

pub mod cull;
pub mod sampler;
pub mod silhouette;

pub use cull::cone_intersect_bbox;
pub use sampler::ConeSampler;
