//! Shape-to-pixel mapping: draws the agent population and the environment
//! borders. Reads simulation state once per frame, never mutates it.

use macroquad::prelude::*;
use ndarray::Array1;
use petri::simulation::clock::SimulationClock;
use petri::simulation::params::Params;

trait ToScreen {
    type Output;
    fn to_screen(&self, params: &Params) -> Self::Output;
}

// World origin sits at the environment center; the camera maps it to the
// screen center and scales by the zoom factor.
impl ToScreen for Array1<f32> {
    type Output = (f32, f32);
    fn to_screen(&self, params: &Params) -> (f32, f32) {
        (
            screen_width() / 2.0 + self[0] * params.zoom_factor,
            screen_height() / 2.0 + self[1] * params.zoom_factor,
        )
    }
}

impl ToScreen for f32 {
    type Output = f32;
    fn to_screen(&self, params: &Params) -> f32 {
        self * params.zoom_factor
    }
}

/// Draws every agent as a filled circle in its display color.
pub fn draw_agents(clock: &SimulationClock) {
    let params = clock.params();
    for agent in clock.agents() {
        let (x, y) = agent.pos.to_screen(params);
        let radius = agent.radius.to_screen(params);
        let [r, g, b] = agent.color;
        draw_circle(x, y, radius, Color::from_rgba(r, g, b, 255));
    }
}

/// Draws the four environment border lines.
pub fn draw_borders(params: &Params) {
    let half = Array1::from_vec(vec![params.half_width(), params.half_height()]);
    let (right, bottom) = half.to_screen(params);
    let (left, top) = (-half).to_screen(params);
    let thickness = 1.0;

    draw_line(left, top, right, top, thickness, WHITE);
    draw_line(left, bottom, right, bottom, thickness, WHITE);
    draw_line(left, top, left, bottom, thickness, WHITE);
    draw_line(right, top, right, bottom, thickness, WHITE);
}
