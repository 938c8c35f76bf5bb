//! Cell behavior: random-walk locomotion and the mitosis cycle.

use ndarray::Array1;
use rand::Rng;

use super::agent::{Agent, AgentKind};
use super::params::Params;

/// Per-tick probability of re-sampling a cell's turn bias.
pub const TURN_PROBABILITY: f32 = 0.3;

/// Applies one tick of locomotion to a cell agent.
///
/// With [`TURN_PROBABILITY`] the turn bias is re-sampled uniformly from
/// {-1, 0, 1}; the heading then integrates the bias and the agent steps
/// forward along it. Holding a bias over several ticks produces the
/// persistent random walk. Inert circles are left untouched.
///
/// Locomotion writes `pos` only, so the next Verlet step picks the
/// displacement up as velocity.
pub fn apply_locomotion(agent: &mut Agent, params: &Params, rng: &mut impl Rng) {
    let state = match &mut agent.kind {
        AgentKind::Cell(state) => state,
        AgentKind::Circle => return,
    };
    if rng.random::<f32>() < TURN_PROBABILITY {
        state.turn_bias = rng.random_range(-1..=1);
    }
    state.heading += f32::from(state.turn_bias) * params.cell_turn_speed;
    agent.pos[0] += state.heading.cos() * params.cell_speed;
    agent.pos[1] += state.heading.sin() * params.cell_speed;
}

/// Advances a cell's mitosis timer by one tick.
///
/// On reaching `cell_cycle_length` the timer resets and one child cell is
/// returned, placed in an annulus around the parent (direction uniform in
/// `[0, 2π)`, magnitude uniform in `[mitosis_offset_min, mitosis_offset_max]`)
/// and clamped into the environment bounds. The caller buffers the child on
/// the deferred-insertion queue; nothing enters the grid mid-tick.
pub fn handle_cell_cycle(agent: &mut Agent, params: &Params, rng: &mut impl Rng) -> Option<Agent> {
    let state = match &mut agent.kind {
        AgentKind::Cell(state) => state,
        AgentKind::Circle => return None,
    };
    state.cycle_timer += 1;
    if state.cycle_timer < params.cell_cycle_length {
        return None;
    }
    state.cycle_timer = 0;

    let offset = annulus_offset(params.mitosis_offset_min, params.mitosis_offset_max, rng);
    let mut pos = &agent.pos + &offset;
    pos[0] = pos[0].clamp(-params.half_width(), params.half_width());
    pos[1] = pos[1].clamp(-params.half_height(), params.half_height());
    Some(Agent::cell(pos, params, rng))
}

/// Samples a vector with uniform direction and magnitude uniform in
/// `[min, max]`.
fn annulus_offset(min: f32, max: f32, rng: &mut impl Rng) -> Array1<f32> {
    let angle = rng.random_range(0.0..std::f32::consts::TAU);
    let magnitude = rng.random_range(min..=max);
    Array1::from_vec(vec![magnitude * angle.cos(), magnitude * angle.sin()])
}
