//! Panel controls and their value rules.

use super::PanelError;

/// A value carried by a control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlValue {
    Bool(bool),
    Number(f32),
}

impl ControlValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f32> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Bool(_) => None,
        }
    }
}

/// Widget kind and its input range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlKind {
    /// On/off switch.
    Toggle,
    /// Discrete +/- control; values snap to `step` and saturate at `min`/`max`.
    Stepper { min: f32, max: f32, step: f32 },
    /// Continuous control; values saturate at `min`/`max`.
    Slider { min: f32, max: f32 },
}

/// How a control's current value is printed next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// No value text (the widget itself shows the state).
    Hidden,
    /// Whole number, truncated toward zero.
    Integer,
    /// Fixed number of fraction digits.
    Fixed(usize),
}

/// Format a value for display.
///
/// # Example
/// ```
/// use shader_playground::panel::{format_value, ControlValue, ValueFormat};
///
/// assert_eq!(format_value(ValueFormat::Fixed(2), ControlValue::Number(0.1)), Some("0.10".into()));
/// assert_eq!(format_value(ValueFormat::Integer, ControlValue::Number(3.0)), Some("3".into()));
/// ```
pub fn format_value(format: ValueFormat, value: ControlValue) -> Option<String> {
    match (format, value) {
        (ValueFormat::Hidden, _) => None,
        (_, ControlValue::Bool(b)) => Some(if b { "on" } else { "off" }.to_string()),
        (ValueFormat::Integer, ControlValue::Number(n)) => Some(format!("{}", n.trunc() as i64)),
        (ValueFormat::Fixed(digits), ControlValue::Number(n)) => Some(format!("{:.*}", digits, n)),
    }
}

/// Which stepper button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
}

/// One control in a configuration panel, bound to a parameter key.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: ControlKind,
    pub format: ValueFormat,
}

impl Control {
    pub fn toggle(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: ControlKind::Toggle,
            format: ValueFormat::Hidden,
        }
    }

    pub fn stepper(key: &'static str, label: &'static str, min: f32, max: f32) -> Self {
        Self {
            key,
            label,
            kind: ControlKind::Stepper { min, max, step: 1.0 },
            format: ValueFormat::Integer,
        }
    }

    pub fn slider(key: &'static str, label: &'static str, min: f32, max: f32) -> Self {
        Self {
            key,
            label,
            kind: ControlKind::Slider { min, max },
            format: ValueFormat::Fixed(2),
        }
    }

    /// Check a proposed value against this control.
    ///
    /// Numbers saturate at the range bounds. Stepper values also snap to the
    /// nearest step, so a stepper only ever stores whole steps from `min`.
    pub fn accept(&self, value: ControlValue) -> Result<ControlValue, PanelError> {
        match (self.kind, value) {
            (ControlKind::Toggle, ControlValue::Bool(_)) => Ok(value),
            (ControlKind::Toggle, ControlValue::Number(_)) => Err(PanelError::WrongValueKind {
                key: self.key.to_string(),
                expected: "bool",
            }),
            (_, ControlValue::Bool(_)) => Err(PanelError::WrongValueKind {
                key: self.key.to_string(),
                expected: "number",
            }),
            (kind, ControlValue::Number(n)) => {
                if !n.is_finite() {
                    return Err(PanelError::Rejected(self.key.to_string()));
                }
                let accepted = match kind {
                    ControlKind::Stepper { min, max, step } => {
                        (min + ((n - min) / step).round() * step).clamp(min, max)
                    }
                    ControlKind::Slider { min, max } => n.clamp(min, max),
                    ControlKind::Toggle => n,
                };
                Ok(ControlValue::Number(accepted))
            }
        }
    }

    /// Value after one stepper press.
    pub fn step(&self, current: f32, direction: StepDirection) -> Result<f32, PanelError> {
        match self.kind {
            ControlKind::Stepper { min, max, step } => {
                let delta = match direction {
                    StepDirection::Up => step,
                    StepDirection::Down => -step,
                };
                Ok((current + delta).clamp(min, max))
            }
            _ => Err(PanelError::NotSteppable(self.key.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_saturates() {
        let c = Control::slider("scale", "Scale", 0.1, 4.0);
        assert_eq!(c.accept(ControlValue::Number(9.0)).unwrap(), ControlValue::Number(4.0));
        assert_eq!(c.accept(ControlValue::Number(0.0)).unwrap(), ControlValue::Number(0.1));
        assert_eq!(c.accept(ControlValue::Number(2.5)).unwrap(), ControlValue::Number(2.5));
    }

    #[test]
    fn test_non_finite_rejected() {
        let c = Control::stepper("rows", "Rows", 0.0, 10.0);
        assert!(matches!(
            c.accept(ControlValue::Number(f32::NAN)),
            Err(PanelError::Rejected(_))
        ));
    }

    #[test]
    fn test_kind_mismatch() {
        let t = Control::toggle("rotating", "Rotating");
        assert!(t.accept(ControlValue::Number(1.0)).is_err());
        let s = Control::stepper("rows", "Rows", 0.0, 10.0);
        assert!(s.accept(ControlValue::Bool(true)).is_err());
    }

    #[test]
    fn test_stepper_steps_within_bounds() {
        let s = Control::stepper("rows", "Rows", 0.0, 10.0);
        assert_eq!(s.step(10.0, StepDirection::Up).unwrap(), 10.0);
        assert_eq!(s.step(0.0, StepDirection::Down).unwrap(), 0.0);
        assert_eq!(s.step(4.0, StepDirection::Up).unwrap(), 5.0);
        assert_eq!(s.step(4.0, StepDirection::Down).unwrap(), 3.0);
        assert!(Control::toggle("r", "R").step(0.0, StepDirection::Up).is_err());
    }

    #[test]
    fn test_stepper_snaps_to_whole_steps() {
        let s = Control::stepper("rows", "Rows", 0.0, 10.0);
        assert_eq!(s.accept(ControlValue::Number(3.7)).unwrap(), ControlValue::Number(4.0));
        assert_eq!(s.accept(ControlValue::Number(3.2)).unwrap(), ControlValue::Number(3.0));
        assert_eq!(s.accept(ControlValue::Number(10.4)).unwrap(), ControlValue::Number(10.0));
        assert_eq!(s.accept(ControlValue::Number(-0.6)).unwrap(), ControlValue::Number(0.0));

        // Sliders keep fractional values.
        let c = Control::slider("scale", "Scale", 0.1, 4.0);
        assert_eq!(c.accept(ControlValue::Number(3.7)).unwrap(), ControlValue::Number(3.7));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(ValueFormat::Fixed(2), ControlValue::Number(1.0)).unwrap(), "1.00");
        assert_eq!(format_value(ValueFormat::Fixed(2), ControlValue::Number(0.1)).unwrap(), "0.10");
        assert_eq!(format_value(ValueFormat::Integer, ControlValue::Number(7.9)).unwrap(), "7");
        assert_eq!(format_value(ValueFormat::Hidden, ControlValue::Bool(true)), None);
    }
}
