//! The fixed-step simulation loop: owns the population, the spatial grid,
//! and the deferred-insertion queue, and sequences physics, lifecycle, and
//! partition reassignment each tick.

use ndarray::Array1;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::agent::Agent;
use super::grid::SpatialGrid;
use super::lifecycle;
use super::params::{ConfigError, Params};
use super::physics;

/// A pending bucket change, collected before the grid is touched.
struct PartitionMove {
    agent: usize,
    /// `None` for agents merged from the deferred queue; they have no old
    /// bucket to leave.
    from: Option<(usize, usize)>,
    to: (usize, usize),
}

/// Drives the simulation one tick at a time.
///
/// Construction validates the configuration, seeds the initial population,
/// and returns a running clock; an unvalidated clock cannot exist. The host
/// pauses by simply not calling [`tick`](Self::tick). Ticks never overlap:
/// the clock is single-threaded by design and a tick runs to completion.
pub struct SimulationClock {
    params: Params,
    agents: Vec<Agent>,
    grid: SpatialGrid,
    spawn_queue: Vec<Agent>,
    rng: ChaCha8Rng,
    ticks: u64,
}

impl SimulationClock {
    /// Validates `params`, allocates the grid, and seeds `n_cells` cells at
    /// uniformly random positions inside the environment bounds.
    ///
    /// # Errors
    ///
    /// Returns the first violated [`ConfigError`]; a misconfigured broad
    /// phase is rejected here instead of silently missing collisions later.
    pub fn new(params: Params) -> Result<Self, ConfigError> {
        params.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
        let mut grid = SpatialGrid::new(&params);
        let mut agents = Vec::with_capacity(params.n_cells);

        let half_width = params.half_width();
        let half_height = params.half_height();
        for _ in 0..params.n_cells {
            let pos = Array1::from_vec(vec![
                rng.random_range(-half_width..=half_width),
                rng.random_range(-half_height..=half_height),
            ]);
            let mut agent = Agent::cell(pos, &params, &mut rng);
            agent.partition = grid.bucket_for(&agent.pos);
            grid.insert(agents.len(), agent.partition);
            agents.push(agent);
        }

        Ok(Self {
            params,
            agents,
            grid,
            spawn_queue: Vec::new(),
            rng,
            ticks: 0,
        })
    }

    /// Advances the simulation by one tick.
    ///
    /// Runs the configured number of physics substeps, then one lifecycle
    /// pass over all agents, then the partition reassignment pass that also
    /// merges the tick's deferred births. Agents created this tick are
    /// invisible to spatial queries until the tick completes.
    pub fn tick(&mut self) {
        for _ in 0..self.params.substeps {
            physics::run_substep(&mut self.agents, &self.grid, &self.params);
        }
        self.lifecycle_pass();
        self.reassign_partitions();
        self.ticks += 1;
    }

    /// Read-only view of the population, valid until the next tick.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Mutable view of the population for hosts that arrange scenarios.
    ///
    /// A slice cannot add or drop agents, so grid membership stays intact;
    /// repositioned agents are re-bucketed by the next tick's reassignment
    /// pass.
    pub fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    /// Number of live agents.
    pub fn population(&self) -> usize {
        self.agents.len()
    }

    /// Ticks completed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The immutable configuration this clock runs with.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The spatial grid, exposed read-only for inspection.
    pub fn grid(&self) -> &SpatialGrid {
        &self.grid
    }

    fn lifecycle_pass(&mut self) {
        // Births append to the queue, not the population, so the iteration
        // below sees a stable view of this tick's agents.
        for agent in &mut self.agents {
            lifecycle::apply_locomotion(agent, &self.params, &mut self.rng);
            if let Some(child) = lifecycle::handle_cell_cycle(agent, &self.params, &mut self.rng) {
                self.spawn_queue.push(child);
            }
        }
    }

    /// Two-phase grid maintenance: compute every pending move first, then
    /// mutate the grid once. Buckets are never edited while enumerated.
    fn reassign_partitions(&mut self) {
        let mut moves = Vec::new();
        for (idx, agent) in self.agents.iter().enumerate() {
            let bucket = self.grid.bucket_for(&agent.pos);
            if bucket != agent.partition {
                moves.push(PartitionMove {
                    agent: idx,
                    from: Some(agent.partition),
                    to: bucket,
                });
            }
        }

        for child in self.spawn_queue.drain(..) {
            let bucket = self.grid.bucket_for(&child.pos);
            moves.push(PartitionMove {
                agent: self.agents.len(),
                from: None,
                to: bucket,
            });
            self.agents.push(child);
        }

        for mv in moves {
            if let Some(from) = mv.from {
                self.grid.remove(mv.agent, from);
            }
            self.grid.insert(mv.agent, mv.to);
            self.agents[mv.agent].partition = mv.to;
        }
    }
}
