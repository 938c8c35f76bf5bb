//! Uniform spatial grid for broad-phase neighbor queries.
//!
//! The grid covers the bounded simulation area with fixed-size buckets and
//! maps agents to buckets by position. It stores indices into the clock's
//! population vector, never agents themselves, and is kept consistent with
//! moving agents by the clock's reassignment pass.

use ndarray::Array1;

use super::params::Params;

/// A fixed-size 2D array of unordered agent buckets.
#[derive(Debug, Clone)]
pub struct SpatialGrid {
    cols: usize,
    rows: usize,
    bucket_width: f32,
    bucket_height: f32,
    half_width: f32,
    half_height: f32,
    // Row-major: bucket (x, y) lives at y * cols + x.
    buckets: Vec<Vec<usize>>,
}

impl SpatialGrid {
    /// Allocates an empty grid of
    /// `ceil(env_width / partition_width) x ceil(env_height / partition_height)`
    /// buckets.
    pub fn new(params: &Params) -> Self {
        let cols = (params.env_width / params.partition_width).ceil() as usize;
        let rows = (params.env_height / params.partition_height).ceil() as usize;
        Self {
            cols,
            rows,
            bucket_width: params.partition_width,
            bucket_height: params.partition_height,
            half_width: params.half_width(),
            half_height: params.half_height(),
            buckets: vec![Vec::new(); cols * rows],
        }
    }

    /// Number of bucket columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of bucket rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Maps a position to clamped bucket coordinates.
    ///
    /// The environment origin sits at its center, so positions shift by half
    /// an extent before bucketing. Coordinates clamp into
    /// `[0, cols-1] x [0, rows-1]`: an agent whose position briefly exceeds
    /// the bounds before border clamping runs still maps inside the grid.
    pub fn bucket_for(&self, pos: &Array1<f32>) -> (usize, usize) {
        let x = ((pos[0] + self.half_width) / self.bucket_width)
            .floor()
            .clamp(0.0, (self.cols - 1) as f32) as usize;
        let y = ((pos[1] + self.half_height) / self.bucket_height)
            .floor()
            .clamp(0.0, (self.rows - 1) as f32) as usize;
        (x, y)
    }

    /// Appends an agent to the bucket at `(x, y)`.
    pub fn insert(&mut self, agent: usize, (x, y): (usize, usize)) {
        let slot = self.slot(x, y);
        self.buckets[slot].push(agent);
    }

    /// Removes an agent from the bucket at `(x, y)`.
    ///
    /// Uses swap-with-last-and-pop; bucket order carries no meaning.
    pub fn remove(&mut self, agent: usize, (x, y): (usize, usize)) {
        let slot = self.slot(x, y);
        let bucket = &mut self.buckets[slot];
        if let Some(position) = bucket.iter().position(|&idx| idx == agent) {
            bucket.swap_remove(position);
        }
    }

    /// Agents stored in the bucket at `(x, y)`.
    pub fn bucket(&self, x: usize, y: usize) -> &[usize] {
        &self.buckets[self.slot(x, y)]
    }

    /// Iterates over the agents of the 3x3 bucket neighborhood centered on
    /// `(x, y)`, skipping buckets outside the grid. Unordered.
    pub fn neighborhood(&self, x: usize, y: usize) -> impl Iterator<Item = usize> + '_ {
        let x_range = x.saturating_sub(1)..=(x + 1).min(self.cols - 1);
        let y_range = y.saturating_sub(1)..=(y + 1).min(self.rows - 1);
        y_range.flat_map(move |by| {
            x_range
                .clone()
                .flat_map(move |bx| self.bucket(bx, by).iter().copied())
        })
    }

    /// Whether the bucket at `bucket` currently holds `agent`.
    pub fn contains(&self, agent: usize, bucket: (usize, usize)) -> bool {
        self.bucket(bucket.0, bucket.1).contains(&agent)
    }

    /// Total number of stored agent references across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Whether the grid holds no agents at all.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    // A bucket index out of range here is a programming defect, not a
    // runtime condition: positions are clamped into range by `bucket_for`
    // and never clamped a second time.
    fn slot(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.cols && y < self.rows,
            "bucket ({x}, {y}) outside {}x{} grid",
            self.cols,
            self.rows
        );
        y * self.cols + x
    }
}
