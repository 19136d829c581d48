//! Control panel: body focus, parameter sliders, and configuration storage.
//!
//! The egui pass only records what the user asked for. The recorded actions
//! are applied in `Update`, where they can be exercised without a renderer.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::icons;
use crate::camera::SelectBodyRequest;
use crate::catalog::{BodyCatalog, BodyParameter, BodyParameterRanges};
use crate::choreography::{CameraChoreographer, TransitionPhase};
use crate::kinematics::OrbitPhases;
use crate::types::SimulationClock;

/// Something the user did in the panel.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelAction {
    /// Focus a body, or return to the overview.
    Focus(Option<String>),
    SetParameter {
        body: String,
        parameter: BodyParameter,
        value: f32,
    },
    Save,
    Load,
    TogglePause,
    Reset,
}

/// Panel state shared between the egui pass and `Update`.
#[derive(Resource, Default, Debug)]
pub struct ControlPanelState {
    pending: Vec<PanelAction>,
    /// Last outcome shown under the buttons.
    pub status: Option<String>,
}

impl ControlPanelState {
    pub fn push(&mut self, action: PanelAction) {
        self.pending.push(action);
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    fn take(&mut self) -> Vec<PanelAction> {
        std::mem::take(&mut self.pending)
    }
}

fn phase_icon(phase: TransitionPhase) -> &'static str {
    match phase {
        TransitionPhase::Idle => icons::PLANET,
        _ => icons::CAMERA,
    }
}

/// Draw the control panel.
pub fn control_panel_system(
    mut contexts: EguiContexts,
    mut state: ResMut<ControlPanelState>,
    catalog: Res<BodyCatalog>,
    ranges: Res<BodyParameterRanges>,
    clock: Res<SimulationClock>,
    choreographer: Option<Res<CameraChoreographer>>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let selection = choreographer
        .as_ref()
        .and_then(|c| c.selection().map(str::to_string));
    let phase = choreographer
        .as_ref()
        .map(|c| c.phase())
        .unwrap_or_default();

    egui::SidePanel::left("control_panel")
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading("Solar System Controls");
            // Focus
            let focus_text = match &selection {
                Some(name) => format!("{} {}", icons::PLANET, name),
                None => format!("{} None", icons::OVERVIEW),
            };
            egui::ComboBox::from_label("Focus")
                .selected_text(focus_text)
                .show_ui(ui, |ui| {
                    if ui
                        .selectable_label(selection.is_none(), format!("{} None", icons::OVERVIEW))
                        .clicked()
                    {
                        state.push(PanelAction::Focus(None));
                    }
                    for (index, body) in catalog.iter().enumerate() {
                        let label = format!("{}  {}", index + 1, body.name);
                        let is_selected = selection.as_deref() == Some(body.name.as_str());
                        if ui.selectable_label(is_selected, label).clicked() {
                            state.push(PanelAction::Focus(Some(body.name.clone())));
                        }
                    }
                });

            ui.label(format!("{} {}", phase_icon(phase), phase.label()));

            ui.separator();

            // Parameters of the focused body
            match selection.as_deref().and_then(|name| catalog.get(name)) {
                Some(body) => {
                    ui.heading(&body.name);
                    for parameter in BodyParameter::ALL {
                        let range = ranges.get(parameter);
                        let mut value = body.parameter(parameter);
                        let response = ui.add(
                            egui::Slider::new(&mut value, range.min..=range.max)
                                .step_by(range.step as f64)
                                .clamping(egui::SliderClamping::Edits)
                                .max_decimals(4)
                                .text(parameter.label()),
                        );
                        if response.changed() {
                            state.push(PanelAction::SetParameter {
                                body: body.name.clone(),
                                parameter,
                                value,
                            });
                        }
                    }
                }
                None => {
                    ui.label("Select a body to edit its parameters.");
                }
            }

            ui.separator();

            ui.horizontal(|ui| {
                let (icon, hint) = if clock.paused {
                    (icons::PLAY, "Resume orbits (Space)")
                } else {
                    (icons::PAUSE, "Pause orbits (Space)")
                };
                if ui.button(icon).on_hover_text(hint).clicked() {
                    state.push(PanelAction::TogglePause);
                }
                if ui.button(icons::RESET).on_hover_text("Reset orbits (R)").clicked() {
                    state.push(PanelAction::Reset);
                }

                ui.separator();

                if ui.button(format!("{} Save", icons::SAVE)).clicked() {
                    state.push(PanelAction::Save);
                }
                if ui.button(format!("{} Load Last", icons::LOAD)).clicked() {
                    state.push(PanelAction::Load);
                }
            });

            if let Some(status) = &state.status {
                ui.label(egui::RichText::new(status.as_str()).weak());
            }
        });
}

/// Apply the actions recorded by the panel.
pub fn apply_panel_actions(
    mut state: ResMut<ControlPanelState>,
    mut catalog: ResMut<BodyCatalog>,
    ranges: Res<BodyParameterRanges>,
    mut clock: ResMut<SimulationClock>,
    mut phases: ResMut<OrbitPhases>,
    mut requests: MessageWriter<SelectBodyRequest>,
) {
    if !state.has_pending() {
        return;
    }

    for action in state.take() {
        match action {
            PanelAction::Focus(name) => {
                requests.write(SelectBodyRequest { name });
            }
            PanelAction::SetParameter {
                body,
                parameter,
                value,
            } => {
                if let Err(err) = catalog.set_parameter(&body, parameter, value, &ranges) {
                    warn!("{}", err);
                    state.status = Some(format!("{} {}", icons::WARNING, err));
                }
            }
            PanelAction::Save => {
                let count = catalog.save_snapshot().bodies.len();
                state.status = Some(format!("Saved {} bodies", count));
            }
            PanelAction::Load => match catalog.load_latest_snapshot() {
                Ok(()) => state.status = Some("Configuration loaded".to_string()),
                Err(err) => {
                    warn!("{}", err);
                    state.status = Some(format!("{} {}", icons::WARNING, err));
                }
            },
            PanelAction::TogglePause => clock.paused = !clock.paused,
            PanelAction::Reset => {
                clock.reset();
                phases.reset();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::bevy_test::headless_app;

    fn panel_app() -> App {
        let mut app = headless_app();
        app.init_resource::<ControlPanelState>()
            .init_resource::<BodyCatalog>()
            .init_resource::<BodyParameterRanges>()
            .init_resource::<SimulationClock>()
            .init_resource::<OrbitPhases>()
            .add_message::<SelectBodyRequest>()
            .add_systems(Update, apply_panel_actions);
        app
    }

    fn act(app: &mut App, action: PanelAction) {
        app.world_mut()
            .resource_mut::<ControlPanelState>()
            .push(action);
        app.update();
    }

    fn earth_size(app: &App) -> f32 {
        app.world()
            .resource::<BodyCatalog>()
            .get("Earth")
            .unwrap()
            .size
    }

    #[test]
    fn test_slider_edit_is_clamped() {
        let mut app = panel_app();
        act(
            &mut app,
            PanelAction::SetParameter {
                body: "Earth".into(),
                parameter: BodyParameter::Size,
                value: 5.0,
            },
        );
        assert_eq!(earth_size(&app), 2.0);
        assert!(!app.world().resource::<ControlPanelState>().has_pending());
    }

    #[test]
    fn test_save_then_load_restores_parameters() {
        let mut app = panel_app();
        act(&mut app, PanelAction::Save);
        act(
            &mut app,
            PanelAction::SetParameter {
                body: "Earth".into(),
                parameter: BodyParameter::Size,
                value: 1.5,
            },
        );
        assert_eq!(earth_size(&app), 1.5);

        act(&mut app, PanelAction::Load);
        assert_eq!(earth_size(&app), 0.6);
    }

    #[test]
    fn test_load_without_save_reports_status() {
        let mut app = panel_app();
        act(&mut app, PanelAction::Load);
        let status = app.world().resource::<ControlPanelState>().status.clone();
        assert!(status.unwrap().contains("no saved configuration"));
    }

    #[test]
    fn test_unknown_body_edit_leaves_catalog_alone() {
        let mut app = panel_app();
        act(
            &mut app,
            PanelAction::SetParameter {
                body: "Vulcan".into(),
                parameter: BodyParameter::Size,
                value: 1.0,
            },
        );
        assert_eq!(app.world().resource::<BodyCatalog>().len(), 8);
        assert!(app.world().resource::<ControlPanelState>().status.is_some());
    }

    #[test]
    fn test_toggle_pause() {
        let mut app = panel_app();
        act(&mut app, PanelAction::TogglePause);
        assert!(app.world().resource::<SimulationClock>().paused);
        act(&mut app, PanelAction::TogglePause);
        assert!(!app.world().resource::<SimulationClock>().paused);
    }
}
