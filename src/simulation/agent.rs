//! Agent state: the Verlet position pair, collision radius, cached
//! partition coordinates, and the lifecycle variant payload.

use ndarray::Array1;
use rand::Rng;

use super::params::Params;

/// Display color of cells (sky blue).
pub const CELL_COLOR: [u8; 3] = [135, 206, 235];

/// Lifecycle state carried by cell agents.
#[derive(Debug, Clone)]
pub struct CellState {
    /// Current locomotion heading in radians.
    pub heading: f32,
    /// Active turn direction: -1, 0, or 1.
    pub turn_bias: i8,
    /// Ticks since the last mitosis event.
    pub cycle_timer: u32,
}

/// Behavior variant of an agent.
///
/// The shared physics core (position, radius) lives on [`Agent`]; the
/// variant only carries what the lifecycle pass needs, selected by tag.
#[derive(Debug, Clone)]
pub enum AgentKind {
    /// An inert circle: integrated and collided, no behavior of its own.
    Circle,
    /// A living cell that locomotes and periodically divides.
    Cell(CellState),
}

/// A circular agent advanced by Verlet integration.
///
/// Agents are owned exclusively by the simulation clock's population vector;
/// the spatial grid refers to them by index only. The population is
/// append-only, which keeps those indices stable.
#[derive(Debug, Clone)]
pub struct Agent {
    /// Position in simulation space, origin at the environment center.
    pub pos: Array1<f32>,
    /// Position one integration step ago.
    pub prev_pos: Array1<f32>,
    /// Collision radius. Constant after construction.
    pub radius: f32,
    /// Cached bucket coordinates. Matches the bucket the agent is stored in,
    /// except transiently between a position update and the next
    /// reassignment pass.
    pub partition: (usize, usize),
    /// Display color read by the renderer.
    pub color: [u8; 3],
    /// Behavior variant.
    pub kind: AgentKind,
}

impl Agent {
    /// Creates an inert circle at rest at `pos`.
    pub fn circle(pos: Array1<f32>, radius: f32, color: [u8; 3]) -> Self {
        Self {
            prev_pos: pos.clone(),
            pos,
            radius,
            partition: (0, 0),
            color,
            kind: AgentKind::Circle,
        }
    }

    /// Creates a cell at rest at `pos` with a random initial heading.
    pub fn cell(pos: Array1<f32>, params: &Params, rng: &mut impl Rng) -> Self {
        Self {
            prev_pos: pos.clone(),
            pos,
            radius: params.cell_radius,
            partition: (0, 0),
            color: CELL_COLOR,
            kind: AgentKind::Cell(CellState {
                heading: rng.random_range(0.0..std::f32::consts::TAU),
                turn_bias: 0,
                cycle_timer: 0,
            }),
        }
    }

    /// Whether this agent carries cell lifecycle behavior.
    pub fn is_cell(&self) -> bool {
        matches!(self.kind, AgentKind::Cell(_))
    }
}
