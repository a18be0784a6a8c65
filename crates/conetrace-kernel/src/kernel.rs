//! Configured entry point for box and cone queries.

use conetrace_math::{Aabb3, Vec3};
use log::{debug, warn};

use crate::cone::{cull, ConeSampler};
use crate::config::KernelConfig;
use crate::error::Result;
use crate::intersect::slab_test;
use crate::{Cone, Ray};

/// A validated configuration together with the precomputed cone sampler.
///
/// Queries borrow the kernel immutably, so one kernel can serve any number
/// of threads.
#[derive(Debug, Clone)]
pub struct Kernel {
    config: KernelConfig,
    sampler: ConeSampler,
}

impl Kernel {
    /// Validate `config` and precompute the sample spiral.
    pub fn new(config: KernelConfig) -> Result<Self> {
        if let Err(err) = config.validate() {
            warn!("rejected kernel config: {}", err);
            return Err(err);
        }
        debug!(
            "kernel: {} cone samples, coverage > {}, slab slack {}, golden ratio {}",
            config.cone_samples, config.coverage_threshold, config.slab_slack, config.golden_ratio
        );
        let sampler = ConeSampler::from_config(&config);
        Ok(Self { config, sampler })
    }

    /// Parse a TOML configuration and build a kernel from it.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Self::new(KernelConfig::from_toml_str(source)?)
    }

    /// The configuration this kernel was built with.
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// The cone sampler for approximate cone-vs-primitive tests.
    pub fn sampler(&self) -> &ConeSampler {
        &self.sampler
    }

    /// Ray-box slab test with the configured slack.
    pub fn intersect_bbox(&self, ray: &Ray, bbox: &Aabb3) -> bool {
        slab_test(ray, &ray.inv_direction(), bbox, self.config.slab_slack)
    }

    /// Ray-box slab test with a precomputed inverse direction.
    pub fn intersect_bbox_inv(&self, ray: &Ray, inv_dir: &Vec3, bbox: &Aabb3) -> bool {
        slab_test(ray, inv_dir, bbox, self.config.slab_slack)
    }

    /// Conservative cone-box test for traversal culling.
    pub fn cone_intersect_bbox(&self, cone: &Cone, bbox: &Aabb3) -> bool {
        cull::cone_intersect_bbox(cone, bbox, self.config.slab_slack)
    }
}

impl Default for Kernel {
    fn default() -> Self {
        let config = KernelConfig::default();
        let sampler = ConeSampler::from_config(&config);
        Self { config, sampler }
    }
}
