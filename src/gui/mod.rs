use tokio::runtime::Runtime;

use crate::api::ApiContext;
use crate::router::Route;
use state::{Action, AppHandle};

pub mod state;
mod views;

pub struct VotingApp {
    handle: AppHandle,
    // Owns the worker threads behind `handle`; dropped with the window.
    _runtime: Runtime,
}

impl VotingApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        api: ApiContext,
        runtime: Runtime,
        start: Route,
    ) -> Self {
        catppuccin_egui::set_theme(&cc.egui_ctx, catppuccin_egui::LATTE);

        let handle = AppHandle::new(api, runtime.handle().clone(), cc.egui_ctx.clone());
        handle.dispatch(Action::Navigate(start));
        Self {
            handle,
            _runtime: runtime,
        }
    }
}

impl eframe::App for VotingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();
        let role = self.handle.api().session.role();

        {
            let mut state = self.handle.lock();

            egui::TopBottomPanel::top("header").show(ctx, |ui| {
                egui::Frame::default()
                    .outer_margin(egui::vec2(0.0, 4.0))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                                ui.heading("Ballot Desk");
                                ui.label(state.route.path());
                            });

                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                if role.is_some() && ui.button("Logout").clicked() {
                                    actions.push(Action::Logout);
                                }
                            });
                        });
                    });
            });

            egui::CentralPanel::default().show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| match state.route.clone() {
                        Route::Login => views::login(ui, &mut state.login, &mut actions),
                        Route::Signup => views::signup(ui, &mut state.signup, &mut actions),
                        Route::Voting => views::voting(ui, &mut state.voting, &mut actions),
                        Route::Profile => views::profile(ui, &mut state.profile, &mut actions),
                        Route::Admin => views::admin(ui, &mut state.admin, &mut actions),
                        Route::NotFound(path) => views::not_found(ui, &path, &mut actions),
                    });
            });

            egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(match role.as_deref() {
                        Some(role) => format!("Signed in ({})", role),
                        None => "Not signed in".to_owned(),
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(&self.handle.api().base_url);
                    });
                });
            });
        }

        for action in actions {
            self.handle.dispatch(action);
        }
    }
}
