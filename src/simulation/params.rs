//! Simulation parameters and configuration validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulation parameters that control physics, lifecycle, and partitioning.
///
/// All values are fixed for the lifetime of a [`SimulationClock`]; bad
/// combinations are rejected by [`Params::validate`] at construction rather
/// than surfacing later as silently missed collisions.
///
/// [`SimulationClock`]: super::clock::SimulationClock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Params {
    /// Simulation area width.
    pub env_width: f32,
    /// Simulation area height.
    pub env_height: f32,
    /// Display scale applied by the renderer. Irrelevant to physics.
    pub zoom_factor: f32,
    /// Velocity retention per Verlet step. Must lie in (0, 1).
    pub friction: f32,
    /// Collision radius of every cell.
    pub cell_radius: f32,
    /// Ticks between mitosis events for each cell.
    pub cell_cycle_length: u32,
    /// Fraction of the computed overlap correction applied per resolver
    /// call. Must lie in (0, 1].
    pub cell_repulsion: f32,
    /// Locomotion step length per tick.
    pub cell_speed: f32,
    /// Heading change per tick while a turn bias is active, in radians.
    pub cell_turn_speed: f32,
    /// Minimum distance between a parent and its mitosis offspring.
    pub mitosis_offset_min: f32,
    /// Maximum distance between a parent and its mitosis offspring.
    pub mitosis_offset_max: f32,
    /// Width of one spatial partition bucket.
    pub partition_width: f32,
    /// Height of one spatial partition bucket.
    pub partition_height: f32,
    /// Physics substeps per tick.
    pub substeps: u32,
    /// Initial cell population.
    pub n_cells: usize,
    /// Seed for the simulation's random stream. Equal seeds and params
    /// reproduce the same run.
    pub seed: u64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            env_width: 600.0,
            env_height: 600.0,
            zoom_factor: 0.5,
            friction: 0.96,
            cell_radius: 10.0,
            cell_cycle_length: 200,
            cell_repulsion: 0.2,
            cell_speed: 0.05,
            cell_turn_speed: 0.2,
            mitosis_offset_min: 15.0,
            mitosis_offset_max: 20.0,
            partition_width: 20.0,
            partition_height: 20.0,
            substeps: 3,
            n_cells: 100,
            seed: 0,
        }
    }
}

/// Configuration errors reported at simulation construction.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment dimensions must both be positive.
    #[error("environment dimensions must be positive, got {width}x{height}")]
    NonPositiveEnvironment {
        /// Configured environment width.
        width: f32,
        /// Configured environment height.
        height: f32,
    },
    /// Cell radius must be positive.
    #[error("cell radius must be positive, got {0}")]
    NonPositiveRadius(f32),
    /// A partition bucket may not be larger than the environment itself.
    #[error("partition size {partition} exceeds environment extent {env}")]
    PartitionExceedsEnvironment {
        /// Offending partition dimension.
        partition: f32,
        /// Matching environment dimension.
        env: f32,
    },
    /// The 3x3 broad phase is only correct when a bucket is at least as
    /// large as the largest possible collision diameter.
    #[error("partition size {partition} is below the maximum collision diameter {diameter}")]
    PartitionBelowCollisionDiameter {
        /// Offending partition dimension.
        partition: f32,
        /// Largest possible sum of two collision radii.
        diameter: f32,
    },
    /// Friction must lie strictly between zero and one.
    #[error("friction must lie in (0, 1), got {0}")]
    FrictionOutOfRange(f32),
    /// Repulsion must lie in (0, 1].
    #[error("repulsion must lie in (0, 1], got {0}")]
    RepulsionOutOfRange(f32),
    /// At least one physics substep is required per tick.
    #[error("substep count must be positive")]
    ZeroSubsteps,
    /// The cell cycle must span at least one tick.
    #[error("cell cycle length must be positive")]
    ZeroCycleLength,
    /// The mitosis offset range must be non-negative and ordered.
    #[error("mitosis offset range [{min}, {max}] is invalid")]
    InvalidMitosisOffsets {
        /// Configured minimum offset.
        min: f32,
        /// Configured maximum offset.
        max: f32,
    },
}

impl Params {
    /// Checks every construction-time precondition.
    ///
    /// # Errors
    ///
    /// Returns the first violated [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.env_width <= 0.0 || self.env_height <= 0.0 {
            return Err(ConfigError::NonPositiveEnvironment {
                width: self.env_width,
                height: self.env_height,
            });
        }
        if self.cell_radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius(self.cell_radius));
        }
        for (partition, env) in [
            (self.partition_width, self.env_width),
            (self.partition_height, self.env_height),
        ] {
            if partition > env {
                return Err(ConfigError::PartitionExceedsEnvironment { partition, env });
            }
        }
        // Two touching cells must always land within one bucket of each
        // other for the 3x3 neighborhood scan to see the pair.
        let diameter = 2.0 * self.cell_radius;
        for partition in [self.partition_width, self.partition_height] {
            if partition < diameter {
                return Err(ConfigError::PartitionBelowCollisionDiameter {
                    partition,
                    diameter,
                });
            }
        }
        if self.friction <= 0.0 || self.friction >= 1.0 {
            return Err(ConfigError::FrictionOutOfRange(self.friction));
        }
        if self.cell_repulsion <= 0.0 || self.cell_repulsion > 1.0 {
            return Err(ConfigError::RepulsionOutOfRange(self.cell_repulsion));
        }
        if self.substeps == 0 {
            return Err(ConfigError::ZeroSubsteps);
        }
        if self.cell_cycle_length == 0 {
            return Err(ConfigError::ZeroCycleLength);
        }
        if self.mitosis_offset_min < 0.0 || self.mitosis_offset_min > self.mitosis_offset_max {
            return Err(ConfigError::InvalidMitosisOffsets {
                min: self.mitosis_offset_min,
                max: self.mitosis_offset_max,
            });
        }
        Ok(())
    }

    /// Half of the environment width; the x border sits at `±half_width()`.
    pub fn half_width(&self) -> f32 {
        self.env_width / 2.0
    }

    /// Half of the environment height; the y border sits at `±half_height()`.
    pub fn half_height(&self) -> f32 {
        self.env_height / 2.0
    }
}
