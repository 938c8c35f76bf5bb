//! Stats side panel: population count, tick counter, and a population
//! history plot.

use std::collections::VecDeque;

use egui_macroquad::egui;
use egui_plot::{Line, Plot, PlotPoints};
use macroquad::time::get_fps;
use petri::simulation::clock::SimulationClock;

const MAX_HISTORY_POINTS: usize = 500;
const HISTORY_INTERVAL_TICKS: u64 = 10;

/// Host-side interface state.
pub struct UIState {
    /// Whether the host is currently withholding `tick()` calls.
    pub paused: bool,
    population_history: VecDeque<(f64, f64)>,
}

impl Default for UIState {
    fn default() -> Self {
        Self::new()
    }
}

impl UIState {
    /// Creates the initial interface state.
    pub fn new() -> Self {
        Self {
            paused: false,
            population_history: VecDeque::new(),
        }
    }

    /// Records the current population every few ticks for the plot.
    pub fn update_history(&mut self, clock: &SimulationClock) {
        if clock.ticks() % HISTORY_INTERVAL_TICKS != 0 {
            return;
        }
        self.population_history
            .push_back((clock.ticks() as f64, clock.population() as f64));
        if self.population_history.len() > MAX_HISTORY_POINTS {
            self.population_history.pop_front();
        }
    }

    fn population_line(&self) -> Line {
        let points: PlotPoints = self
            .population_history
            .iter()
            .map(|&(x, y)| [x, y])
            .collect();
        Line::new(points)
    }
}

/// Draws the stats panel for the current frame.
pub fn draw_ui(state: &mut UIState, clock: &SimulationClock) {
    egui_macroquad::ui(|egui_ctx| {
        egui::SidePanel::right("stats_panel")
            .default_width(220.0)
            .resizable(true)
            .show(egui_ctx, |ui| {
                ui.heading("Simulation Stats");
                ui.separator();

                ui.label(format!("Tick: {}", clock.ticks()));
                ui.label(format!("Population: {}", clock.population()));
                ui.label(format!("FPS: {}", get_fps()));
                if state.paused {
                    ui.label("Paused (Space resumes)");
                }
                ui.separator();

                ui.label("Population over time");
                Plot::new("population_plot")
                    .height(140.0)
                    .show(ui, |plot_ui| {
                        plot_ui.line(state.population_line());
                    });
            });
    });
    egui_macroquad::draw();
}
