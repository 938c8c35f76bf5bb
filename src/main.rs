//! Host loop: window setup, tick driving, and rendering. The simulation
//! core neither draws nor blocks; this binary calls `tick()` once per frame
//! and consumes the read-only agent view.

use macroquad::prelude::*;
use petri::simulation::clock::SimulationClock;
use petri::simulation::params::Params;

mod graphics;
mod ui;

/// Loads parameters from the JSON file given as the first CLI argument, or
/// falls back to the defaults.
fn load_params() -> Result<Params, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)?;
            let params = serde_json::from_str(&json)?;
            info!("loaded parameters from {path}");
            Ok(params)
        }
        None => Ok(Params::default()),
    }
}

#[macroquad::main("Petri")]
async fn main() {
    let params = match load_params() {
        Ok(params) => params,
        Err(err) => {
            error!("failed to load parameters: {err}");
            return;
        }
    };

    let mut clock: Option<SimulationClock> = None;
    let mut ui_state = ui::UIState::new();

    loop {
        let Some(ref mut clock) = clock else {
            // Genesis screen: the simulation starts on Enter.
            clear_background(BLACK);
            let text = "Start the simulation by pressing Enter";
            let font_size = 30.0;
            let text_size = measure_text(text, None, font_size as _, 1.0);
            draw_text(
                text,
                screen_width() / 2. - text_size.width / 2.,
                screen_height() / 2. - text_size.height / 2.,
                font_size,
                WHITE,
            );

            if is_key_pressed(KeyCode::Enter) {
                match SimulationClock::new(params.clone()) {
                    Ok(started) => {
                        info!("seeded {} cells", started.population());
                        clock = Some(started);
                    }
                    Err(err) => {
                        error!("invalid configuration: {err}");
                        return;
                    }
                }
            }
            next_frame().await;
            continue;
        };

        if is_key_pressed(KeyCode::Space) {
            ui_state.paused = !ui_state.paused;
        }
        if !ui_state.paused {
            clock.tick();
            ui_state.update_history(clock);
        }

        clear_background(BLACK);
        graphics::draw_borders(clock.params());
        graphics::draw_agents(clock);
        ui::draw_ui(&mut ui_state, clock);

        next_frame().await;
    }
}
