use egui::{Color32, RichText, Ui};

use crate::pages::admin::AdminConsole;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfileManager;
use crate::pages::signup::SignupPage;
use crate::pages::voting::CandidateDirectory;
use crate::request::RequestState;
use crate::router::Route;

use super::state::Action;

const ERROR: Color32 = Color32::from_rgb(210, 15, 57);
const SUCCESS: Color32 = Color32::from_rgb(64, 160, 43);

fn error_text(ui: &mut Ui, text: &str) {
    ui.colored_label(ERROR, text);
}

fn success_text(ui: &mut Ui, text: &str) {
    if !text.is_empty() {
        ui.colored_label(SUCCESS, text);
    }
}

fn outcome<T: AsRef<str>>(ui: &mut Ui, state: &RequestState<T>) {
    match state {
        RequestState::Idle => {}
        RequestState::Loading => {
            ui.spinner();
        }
        RequestState::Ok(message) => success_text(ui, message.as_ref()),
        RequestState::Err(reason) => error_text(ui, reason),
    }
}

fn field(ui: &mut Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.text_edit_singleline(value);
    ui.end_row();
}

fn secret(ui: &mut Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.add(egui::TextEdit::singleline(value).password(true));
    ui.end_row();
}

pub fn login(ui: &mut Ui, page: &mut LoginPage, actions: &mut Vec<Action>) {
    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        ui.heading("Login");
        ui.add_space(12.0);
        egui::Grid::new("login_grid").num_columns(2).show(ui, |ui| {
            field(ui, "Aadhaar Number:", &mut page.aadhar);
            secret(ui, "Password:", &mut page.password);
        });

        if let Some(reason) = page.state.error() {
            error_text(ui, reason);
        }
        ui.add_space(12.0);
        if ui
            .add_enabled(!page.state.is_loading(), egui::Button::new("Login"))
            .clicked()
        {
            actions.push(Action::Login);
        }
        if ui.link("Sign Up").clicked() {
            actions.push(Action::Navigate(Route::Signup));
        }
    });
}

pub fn signup(ui: &mut Ui, page: &mut SignupPage, actions: &mut Vec<Action>) {
    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        ui.heading("Sign Up");
        ui.add_space(12.0);
        outcome(ui, &page.state);

        let form = &mut page.form;
        egui::Grid::new("signup_grid").num_columns(2).show(ui, |ui| {
            field(ui, "Name:", &mut form.name);
            field(ui, "Age:", &mut form.age);
            field(ui, "Aadhaar Number:", &mut form.aadhar);
            field(ui, "Mobile (optional):", &mut form.mobile);
            field(ui, "Address:", &mut form.address);
            secret(ui, "Password:", &mut form.password);
            field(ui, "Email (optional):", &mut form.email);
        });

        ui.add_space(12.0);
        if ui
            .add_enabled(!page.state.is_loading(), egui::Button::new("Sign Up"))
            .clicked()
        {
            actions.push(Action::Signup);
        }
        if ui.link("Login").clicked() {
            actions.push(Action::Navigate(Route::Login));
        }
    });
}

pub fn voting(ui: &mut Ui, page: &mut CandidateDirectory, actions: &mut Vec<Action>) {
    ui.horizontal(|ui| {
        ui.heading("Candidates");
        if ui.button("Refresh").clicked() {
            actions.push(Action::RefreshCandidates);
        }
        if ui.button(page.direction.label()).clicked() {
            page.sort();
        }
        if ui.button("Profile").clicked() {
            actions.push(Action::Navigate(Route::Profile));
        }
    });

    match &page.load {
        RequestState::Loading => {
            ui.spinner();
        }
        RequestState::Err(reason) => error_text(ui, reason),
        _ => {}
    }
    outcome(ui, &page.vote);
    ui.separator();

    let can_vote = page.can_vote();
    for candidate in &page.candidates {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&candidate.name).strong().size(18.0));
            ui.label(format!("Party: {}", candidate.party));
            ui.label(format!("Age: {}", candidate.age));
            ui.label(format!("Votes: {}", candidate.vote_count));
            if ui
                .add_enabled(can_vote, egui::Button::new("Vote"))
                .clicked()
            {
                actions.push(Action::Vote(candidate.id.clone()));
            }
        });
    }
}

pub fn profile(ui: &mut Ui, page: &mut ProfileManager, actions: &mut Vec<Action>) {
    ui.heading("Profile");
    if let Some(reason) = page.profile.error() {
        error_text(ui, reason);
    }

    let Some(user) = page.profile.value() else {
        ui.label("Loading...");
        return;
    };

    egui::Grid::new("profile_grid").num_columns(2).show(ui, |ui| {
        ui.label("Name:");
        ui.label(&user.name);
        ui.end_row();
        ui.label("Age:");
        ui.label(user.age.to_string());
        ui.end_row();
        ui.label("Address:");
        ui.label(&user.address);
        ui.end_row();
        ui.label("Role:");
        ui.label(user.role.as_str());
        ui.end_row();
        ui.label("Voting status:");
        ui.label(if user.is_voted { "Voted" } else { "Not voted" });
        ui.end_row();
    });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if page.can_open_voting() && ui.button("Go to Voting").clicked() {
            actions.push(Action::Navigate(Route::Voting));
        }
        if page.can_open_admin() && ui.button("Go to Admin").clicked() {
            actions.push(Action::Navigate(Route::Admin));
        }
        let toggle = if page.show_password_form {
            "Cancel"
        } else {
            "Change Password"
        };
        if ui.button(toggle).clicked() {
            page.toggle_password_form();
        }
    });

    if page.show_password_form {
        ui.add_space(8.0);
        egui::Grid::new("password_grid").num_columns(2).show(ui, |ui| {
            secret(ui, "Old Password:", &mut page.old_password);
            secret(ui, "New Password:", &mut page.new_password);
        });
        if ui
            .add_enabled(!page.password.is_loading(), egui::Button::new("Change Password"))
            .clicked()
        {
            actions.push(Action::ChangePassword);
        }
    }
    outcome(ui, &page.password);
}

pub fn admin(ui: &mut Ui, page: &mut AdminConsole, actions: &mut Vec<Action>) {
    ui.horizontal(|ui| {
        ui.heading("Admin");
        if ui.button("Profile").clicked() {
            actions.push(Action::Navigate(Route::Profile));
        }
    });
    if let Some(reason) = page.load.error() {
        error_text(ui, reason);
    }
    outcome(ui, &page.action);

    ui.add_space(8.0);
    ui.label(RichText::new(if page.editing.is_some() {
        "Edit Candidate"
    } else {
        "Add Candidate"
    })
    .strong());
    egui::Grid::new("candidate_form").num_columns(2).show(ui, |ui| {
        field(ui, "Name:", &mut page.form.name);
        field(ui, "Age:", &mut page.form.age);
        field(ui, "Party:", &mut page.form.party);
    });
    ui.horizontal(|ui| {
        let submit = if page.editing.is_some() {
            "Update Candidate"
        } else {
            "Add Candidate"
        };
        if ui
            .add_enabled(!page.action.is_loading(), egui::Button::new(submit))
            .clicked()
        {
            actions.push(Action::SubmitCandidate);
        }
        if page.editing.is_some() && ui.button("Cancel").clicked() {
            page.cancel_edit();
        }
    });

    ui.separator();
    let mut edit = None;
    egui::Grid::new("candidate_table")
        .num_columns(5)
        .striped(true)
        .show(ui, |ui| {
            ui.strong("Name");
            ui.strong("Age");
            ui.strong("Party");
            ui.strong("Votes");
            ui.strong("Actions");
            ui.end_row();

            for candidate in &page.candidates {
                ui.label(&candidate.name);
                ui.label(candidate.age.to_string());
                ui.label(&candidate.party);
                ui.label(candidate.vote_count.to_string());
                ui.horizontal(|ui| {
                    if ui.button("Edit").clicked() {
                        edit = Some(candidate.clone());
                    }
                    if ui.button("Delete").clicked() {
                        actions.push(Action::DeleteCandidate(candidate.id.clone()));
                    }
                });
                ui.end_row();
            }
        });
    if let Some(candidate) = edit {
        page.edit(&candidate);
    }
}

pub fn not_found(ui: &mut Ui, path: &str, actions: &mut Vec<Action>) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.heading("404 - Page Not Found");
        ui.label(format!("Nothing lives at {}", path));
        ui.add_space(12.0);
        if ui.button("Go Back Home").clicked() {
            actions.push(Action::Navigate(Route::Login));
        }
    });
}
