//! Verlet integration and pairwise collision resolution.
//!
//! Velocity is implicit positional history: each step derives it from the
//! current and previous position, scales it by friction, and advances the
//! agent. No force term exists; the only post-integration influences are
//! collision pushes and the border clamp within the same substep.

use super::agent::Agent;
use super::grid::SpatialGrid;
use super::params::Params;

/// Advances one agent by a single Verlet step.
pub fn verlet_step(agent: &mut Agent, friction: f32) {
    let velocity = (&agent.pos - &agent.prev_pos) * friction;
    agent.prev_pos = agent.pos.clone();
    agent.pos += &velocity;
}

/// Clamps an agent into the environment bounds.
///
/// A clamped axis also rewrites `prev_pos` on that axis, zeroing the outward
/// velocity component while preserving the perpendicular one: an inelastic
/// wall collision.
pub fn constrain_to_borders(agent: &mut Agent, half_width: f32, half_height: f32) {
    for (axis, limit) in [(0, half_width), (1, half_height)] {
        let clamped = agent.pos[axis].clamp(-limit, limit);
        if clamped != agent.pos[axis] {
            agent.pos[axis] = clamped;
            agent.prev_pos[axis] = clamped;
        }
    }
}

/// Pushes two overlapping agents apart along their separation axis.
///
/// Each agent moves `0.5 * (min_dist - dist) * repulsion` so the correction
/// is symmetric and mass-agnostic; repulsion below one damps it to avoid
/// overshoot across substeps. Exact coincidence (`dist == 0`) leaves both
/// agents unmoved: the separation axis is undefined.
pub fn resolve_overlap(a: &mut Agent, b: &mut Agent, repulsion: f32) {
    let delta = &a.pos - &b.pos;
    let dist = delta.dot(&delta).sqrt();
    let min_dist = a.radius + b.radius;
    if dist <= 0.0 || dist >= min_dist {
        return;
    }
    let push = delta * (0.5 * (min_dist - dist) * repulsion / dist);
    a.pos += &push;
    b.pos -= &push;
}

/// Runs one physics substep over the whole population.
///
/// Bucket by bucket, each agent takes a Verlet step, resolves overlap
/// against every agent of its 3x3 bucket neighborhood, and is clamped to
/// the borders. Resolution is greedy in grid enumeration order; relaxation
/// across substeps converges toward non-overlap rather than solving it
/// exactly.
pub fn run_substep(agents: &mut [Agent], grid: &SpatialGrid, params: &Params) {
    let half_width = params.half_width();
    let half_height = params.half_height();
    for by in 0..grid.rows() {
        for bx in 0..grid.cols() {
            for &idx in grid.bucket(bx, by) {
                verlet_step(&mut agents[idx], params.friction);
                for other in grid.neighborhood(bx, by) {
                    if other == idx {
                        continue;
                    }
                    let (a, b) = pair_mut(agents, idx, other);
                    resolve_overlap(a, b, params.cell_repulsion);
                }
                constrain_to_borders(&mut agents[idx], half_width, half_height);
            }
        }
    }
}

/// Borrows two distinct agents mutably at once.
fn pair_mut(agents: &mut [Agent], i: usize, j: usize) -> (&mut Agent, &mut Agent) {
    debug_assert_ne!(i, j);
    if i < j {
        let (left, right) = agents.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = agents.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}
