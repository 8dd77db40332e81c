//! Scene configuration panels.
//!
//! A panel is a list of [`Control`]s, each bound by key to a field of a
//! [`ParamSet`]. Binding a panel to a parameter set yields a [`BoundPanel`]
//! whose edits write straight through to the parameters and mark a
//! [`DirtyFlag`]. Rendering the panel is left to the host toolkit; the `egui`
//! feature provides one.

mod control;
mod dirty;
#[cfg(feature = "egui")]
mod egui_view;

pub use control::{format_value, Control, ControlKind, ControlValue, StepDirection, ValueFormat};
pub use dirty::DirtyFlag;

/// Errors from panel edits.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("No control bound to '{0}'")]
    UnknownControl(String),
    #[error("Control '{key}' expects a {expected} value")]
    WrongValueKind { key: String, expected: &'static str },
    #[error("Control '{0}' is not a stepper")]
    NotSteppable(String),
    #[error("Control '{0}' is not a toggle")]
    NotToggle(String),
    #[error("Control '{0}' rejected a non-finite value")]
    Rejected(String),
}

/// Parameters a panel can read and write by key.
pub trait ParamSet {
    /// Current value for `key`, if the set has such a field.
    fn get(&self, key: &str) -> Option<ControlValue>;

    /// Store `value` under `key`. Returns false if the key or value kind is unknown.
    fn set(&mut self, key: &str, value: ControlValue) -> bool;
}

/// One displayed line of a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelRow {
    pub label: &'static str,
    pub value_text: Option<String>,
}

/// Declarative description of a scene's controls.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigPanel {
    pub title: &'static str,
    pub controls: Vec<Control>,
}

impl ConfigPanel {
    pub fn new(title: &'static str, controls: Vec<Control>) -> Self {
        Self { title, controls }
    }

    pub fn control(&self, key: &str) -> Option<&Control> {
        self.controls.iter().find(|c| c.key == key)
    }

    /// Bind the panel to a live parameter set.
    pub fn bind<'a>(
        &'a self,
        params: &'a mut dyn ParamSet,
        dirty: &'a DirtyFlag,
    ) -> BoundPanel<'a> {
        BoundPanel {
            panel: self,
            params,
            dirty,
        }
    }
}

/// A panel whose controls edit a parameter set in place.
pub struct BoundPanel<'a> {
    panel: &'a ConfigPanel,
    params: &'a mut dyn ParamSet,
    dirty: &'a DirtyFlag,
}

impl<'a> BoundPanel<'a> {
    pub fn panel(&self) -> &ConfigPanel {
        self.panel
    }

    fn lookup(&self, key: &str) -> Result<&'a Control, PanelError> {
        self.panel
            .control(key)
            .ok_or_else(|| PanelError::UnknownControl(key.to_string()))
    }

    fn current(&self, control: &Control) -> Result<ControlValue, PanelError> {
        self.params
            .get(control.key)
            .ok_or_else(|| PanelError::UnknownControl(control.key.to_string()))
    }

    fn write(&mut self, control: &Control, value: ControlValue) -> Result<ControlValue, PanelError> {
        let previous = self.current(control)?;
        if !self.params.set(control.key, value) {
            return Err(PanelError::UnknownControl(control.key.to_string()));
        }
        if previous != value {
            log::trace!("{}: {} = {:?}", self.panel.title, control.key, value);
            self.dirty.mark();
        }
        Ok(value)
    }

    /// Set a control's value. Numbers saturate at the control's range.
    ///
    /// Returns the value actually stored.
    pub fn set(&mut self, key: &str, value: ControlValue) -> Result<ControlValue, PanelError> {
        let control = self.lookup(key)?;
        let accepted = control.accept(value)?;
        self.write(control, accepted)
    }

    /// Flip a toggle.
    pub fn toggle(&mut self, key: &str) -> Result<bool, PanelError> {
        let control = self.lookup(key)?;
        if control.kind != ControlKind::Toggle {
            return Err(PanelError::NotToggle(key.to_string()));
        }
        let on = self
            .current(control)?
            .as_bool()
            .ok_or_else(|| PanelError::WrongValueKind {
                key: key.to_string(),
                expected: "bool",
            })?;
        self.write(control, ControlValue::Bool(!on))?;
        Ok(!on)
    }

    /// Press a stepper's "+".
    pub fn increment(&mut self, key: &str) -> Result<f32, PanelError> {
        self.step(key, StepDirection::Up)
    }

    /// Press a stepper's "-".
    pub fn decrement(&mut self, key: &str) -> Result<f32, PanelError> {
        self.step(key, StepDirection::Down)
    }

    fn step(&mut self, key: &str, direction: StepDirection) -> Result<f32, PanelError> {
        let control = self.lookup(key)?;
        let current = self
            .current(control)?
            .as_number()
            .ok_or_else(|| PanelError::WrongValueKind {
                key: key.to_string(),
                expected: "number",
            })?;
        let next = control.step(current, direction)?;
        self.write(control, ControlValue::Number(next))?;
        Ok(next)
    }

    /// Current label/value lines, in control order.
    pub fn rows(&self) -> Vec<PanelRow> {
        self.panel
            .controls
            .iter()
            .map(|c| PanelRow {
                label: c.label,
                value_text: self
                    .params
                    .get(c.key)
                    .and_then(|v| format_value(c.format, v)),
            })
            .collect()
    }

    /// Current value of a bound field.
    pub fn value(&self, key: &str) -> Option<ControlValue> {
        self.params.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Knobs {
        on: bool,
        level: f32,
    }

    impl ParamSet for Knobs {
        fn get(&self, key: &str) -> Option<ControlValue> {
            match key {
                "on" => Some(ControlValue::Bool(self.on)),
                "level" => Some(ControlValue::Number(self.level)),
                _ => None,
            }
        }

        fn set(&mut self, key: &str, value: ControlValue) -> bool {
            match (key, value) {
                ("on", ControlValue::Bool(b)) => self.on = b,
                ("level", ControlValue::Number(n)) => self.level = n,
                _ => return false,
            }
            true
        }
    }

    fn panel() -> ConfigPanel {
        ConfigPanel::new(
            "Knobs",
            vec![
                Control::toggle("on", "On"),
                Control::stepper("level", "Level", 0.0, 3.0),
            ],
        )
    }

    #[test]
    fn test_edits_write_through_and_mark_dirty() {
        let panel = panel();
        let mut knobs = Knobs::default();
        let dirty = DirtyFlag::new();
        {
            let mut bound = panel.bind(&mut knobs, &dirty);
            assert!(bound.toggle("on").unwrap());
            assert_eq!(bound.increment("level").unwrap(), 1.0);
        }
        assert!(knobs.on);
        assert_eq!(knobs.level, 1.0);
        assert!(dirty.take());
    }

    #[test]
    fn test_saturated_edit_is_not_dirty() {
        let panel = panel();
        let mut knobs = Knobs { on: false, level: 3.0 };
        let dirty = DirtyFlag::new();
        let mut bound = panel.bind(&mut knobs, &dirty);
        assert_eq!(bound.increment("level").unwrap(), 3.0);
        assert!(!dirty.is_dirty());
    }

    #[test]
    fn test_unknown_key() {
        let panel = panel();
        let mut knobs = Knobs::default();
        let dirty = DirtyFlag::new();
        let mut bound = panel.bind(&mut knobs, &dirty);
        assert!(matches!(
            bound.set("missing", ControlValue::Number(1.0)),
            Err(PanelError::UnknownControl(_))
        ));
        assert!(matches!(bound.toggle("level"), Err(PanelError::NotToggle(_))));
        assert!(matches!(bound.increment("on"), Err(PanelError::WrongValueKind { .. })));
    }

    #[test]
    fn test_rows() {
        let panel = panel();
        let mut knobs = Knobs { on: true, level: 2.0 };
        let dirty = DirtyFlag::new();
        let bound = panel.bind(&mut knobs, &dirty);
        let rows = bound.rows();
        assert_eq!(rows[0], PanelRow { label: "On", value_text: None });
        assert_eq!(rows[1].value_text.as_deref(), Some("2"));
    }
}
