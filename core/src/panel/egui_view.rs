//! egui rendering for bound panels.

use super::{format_value, BoundPanel, ControlKind, ControlValue};

impl BoundPanel<'_> {
    /// Draw every control into `ui`, applying edits immediately.
    ///
    /// Returns true if any parameter changed this frame.
    pub fn show(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;
        let controls = self.panel().controls.clone();

        ui.vertical(|ui| {
            for control in &controls {
                let Some(current) = self.value(control.key) else {
                    continue;
                };
                let text = format_value(control.format, current).unwrap_or_default();

                let edit = match (control.kind, current) {
                    (ControlKind::Toggle, ControlValue::Bool(mut on)) => {
                        if ui.checkbox(&mut on, control.label).changed() {
                            Some(self.set(control.key, ControlValue::Bool(on)).map(|_| ()))
                        } else {
                            None
                        }
                    }
                    (ControlKind::Stepper { .. }, ControlValue::Number(_)) => {
                        let mut press = 0.0;
                        ui.horizontal(|ui| {
                            ui.label(control.label);
                            ui.label(text);
                            if ui.small_button("-").clicked() {
                                press = -1.0;
                            }
                            if ui.small_button("+").clicked() {
                                press = 1.0;
                            }
                        });
                        if press > 0.0 {
                            Some(self.increment(control.key).map(|_| ()))
                        } else if press < 0.0 {
                            Some(self.decrement(control.key).map(|_| ()))
                        } else {
                            None
                        }
                    }
                    (ControlKind::Slider { min, max }, ControlValue::Number(mut value)) => {
                        let mut moved = false;
                        ui.horizontal(|ui| {
                            ui.label(control.label);
                            ui.label(text);
                            ui.add_space(20.0);
                            moved = ui
                                .add(egui::Slider::new(&mut value, min..=max).show_value(false))
                                .changed();
                        });
                        moved.then(|| self.set(control.key, ControlValue::Number(value)).map(|_| ()))
                    }
                    _ => None,
                };

                match edit {
                    Some(Ok(())) => changed = true,
                    Some(Err(e)) => log::warn!("{}: {}", self.panel().title, e),
                    None => {}
                }
            }
        });

        changed
    }
}

#[cfg(test)]
mod tests {
    use crate::playground::Playground;
    use crate::scenes::{default_params, SceneType};

    #[test]
    fn test_show_without_input_changes_nothing() {
        let mut playground = Playground::new(SceneType::RepeatingCircles);
        let ctx = egui::Context::default();
        let mut changed = true;

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                changed = playground.edit(|panel| panel.show(ui));
            });
        });

        assert!(!changed);
        assert_eq!(
            playground.params(),
            &default_params(SceneType::RepeatingCircles)
        );
        assert!(!playground.take_dirty());
    }
}
