use std::time::Duration;

use roster_business::{FetchUsersCommand, UsersFetchCompute};

use crate::{state::State, widgets};

/// How often to poll for the loader result while a request is outstanding.
const LOADING_REPAINT_INTERVAL: Duration = Duration::from_millis(50);

pub struct RosterApp {
    pub state: State,
    // the user list is fetched once per app instance
    fetch_started: bool,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            fetch_started: false,
        }
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply values posted by commands since the last frame
        self.state.ctx.sync_computes();

        if !self.fetch_started {
            self.fetch_started = true;
            self.state.ctx.dispatch::<FetchUsersCommand>();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                widgets::users_panel(&mut self.state.ctx, ui);
            });
        });

        self.state.ctx.run_computed();
        self.state.ctx.flush_commands();

        let waiting = self
            .state
            .ctx
            .cached::<UsersFetchCompute>()
            .is_some_and(|fetch| fetch.is_idle() || fetch.is_loading());
        if waiting {
            ctx.request_repaint_after(LOADING_REPAINT_INTERVAL);
        }
    }
}
