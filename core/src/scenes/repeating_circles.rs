//! Repeating circles exploration.
//!
//! Rows of polygons built from circles, optionally rotating. All geometry
//! lives in the fragment shader; this adapter only feeds it four parameters.

use serde::{Deserialize, Serialize};

use super::{Scene, SceneParams, SceneType, UniformBlock};
use crate::panel::{ConfigPanel, Control, ControlValue, ParamSet};

/// Parameter keys used by the configuration panel.
pub mod keys {
    pub const ROTATING: &str = "rotating";
    pub const NUM_ROWS: &str = "num_rows";
    pub const NUM_POLYGONS: &str = "num_polygons";
    pub const SCALE: &str = "scale";
}

/// Stepper range for rows and polygons.
pub const COUNT_RANGE: (f32, f32) = (0.0, 10.0);
/// Slider range for scale.
pub const SCALE_RANGE: (f32, f32) = (0.1, 4.0);

/// User-tunable parameters.
///
/// Rows and polygons are whole numbers in the panel but stored as `f32` so the
/// shader receives them without conversion. Ranges are enforced by the panel
/// controls only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepeatingCirclesParams {
    pub rotating: bool,
    pub num_rows: f32,
    pub num_polygons: f32,
    pub scale: f32,
}

impl Default for RepeatingCirclesParams {
    fn default() -> Self {
        Self {
            rotating: false,
            num_rows: 1.0,
            num_polygons: 1.0,
            scale: 1.0,
        }
    }
}

impl ParamSet for RepeatingCirclesParams {
    fn get(&self, key: &str) -> Option<ControlValue> {
        match key {
            keys::ROTATING => Some(ControlValue::Bool(self.rotating)),
            keys::NUM_ROWS => Some(ControlValue::Number(self.num_rows)),
            keys::NUM_POLYGONS => Some(ControlValue::Number(self.num_polygons)),
            keys::SCALE => Some(ControlValue::Number(self.scale)),
            _ => None,
        }
    }

    fn set(&mut self, key: &str, value: ControlValue) -> bool {
        match (key, value) {
            (keys::ROTATING, ControlValue::Bool(b)) => self.rotating = b,
            (keys::NUM_ROWS, ControlValue::Number(n)) => self.num_rows = n,
            (keys::NUM_POLYGONS, ControlValue::Number(n)) => self.num_polygons = n,
            (keys::SCALE, ControlValue::Number(n)) => self.scale = n,
            _ => return false,
        }
        true
    }
}

/// Fragment uniforms, slot 1.
///
/// Same bytes as a C `{ bool; float; float; float; }`: the flag's low byte is
/// 0 or 1 at offset 0, three zero padding bytes follow, floats at 4, 8, 12.
/// The flag is a `u32` because WGSL uniforms cannot hold `bool`. It is built
/// from its bytes so the 0/1 byte sits at offset 0 on any host byte order.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RepeatingCirclesUniforms {
    pub rotating: u32,
    pub num_rows: f32,
    pub num_polygons: f32,
    pub scale: f32,
}

impl RepeatingCirclesUniforms {
    pub fn rotating(&self) -> bool {
        self.rotating != 0
    }
}

impl From<&RepeatingCirclesParams> for RepeatingCirclesUniforms {
    fn from(params: &RepeatingCirclesParams) -> Self {
        Self {
            rotating: u32::from_ne_bytes([u8::from(params.rotating), 0, 0, 0]),
            num_rows: params.num_rows,
            num_polygons: params.num_polygons,
            scale: params.scale,
        }
    }
}

/// Scene adapter for the repeating circles shader pair.
pub struct RepeatingCirclesScene;

impl RepeatingCirclesScene {
    /// Typed uniform snapshot: a field-for-field copy of `params`.
    pub fn uniforms(params: &RepeatingCirclesParams) -> RepeatingCirclesUniforms {
        RepeatingCirclesUniforms::from(params)
    }
}

impl Scene for RepeatingCirclesScene {
    fn scene_type(&self) -> SceneType {
        SceneType::RepeatingCircles
    }

    fn name(&self) -> &'static str {
        "Repeating Circles"
    }

    fn vertex_func_name(&self) -> &'static str {
        "repeating_cirlces_vertex"
    }

    fn fragment_func_name(&self) -> &'static str {
        "repeating_circles_fragment"
    }

    fn fragment_uniforms(&self, params: &SceneParams) -> Option<UniformBlock> {
        let params = match params {
            SceneParams::RepeatingCircles(p) => *p,
            #[allow(unreachable_patterns)]
            _ => RepeatingCirclesParams::default(),
        };
        Some(UniformBlock::new(&Self::uniforms(&params)))
    }

    fn config_panel(&self) -> ConfigPanel {
        let (count_min, count_max) = COUNT_RANGE;
        let (scale_min, scale_max) = SCALE_RANGE;
        ConfigPanel::new(
            self.name(),
            vec![
                Control::toggle(keys::ROTATING, "Rotating"),
                Control::stepper(keys::NUM_ROWS, "Rows", count_min, count_max),
                Control::stepper(keys::NUM_POLYGONS, "Polygons", count_min, count_max),
                Control::slider(keys::SCALE, "Scale", scale_min, scale_max),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::{UniformEncoder, FRAGMENT_UNIFORM_SLOT};

    #[derive(Default)]
    struct Capture(Vec<(u32, Vec<u8>)>);

    impl UniformEncoder for Capture {
        fn set_fragment_bytes(&mut self, bytes: &[u8], index: u32) {
            self.0.push((index, bytes.to_vec()));
        }
    }

    #[test]
    fn test_uniform_layout() {
        assert_eq!(std::mem::size_of::<RepeatingCirclesUniforms>(), 16);
        assert_eq!(std::mem::align_of::<RepeatingCirclesUniforms>(), 4);
    }

    #[test]
    fn test_flag_bytes_match_c_bool() {
        let on = RepeatingCirclesScene::uniforms(&RepeatingCirclesParams {
            rotating: true,
            ..Default::default()
        });
        let bytes = bytemuck::bytes_of(&on);
        assert_eq!(&bytes[0..4], &[1, 0, 0, 0]);

        let off = RepeatingCirclesScene::uniforms(&RepeatingCirclesParams::default());
        assert_eq!(&bytemuck::bytes_of(&off)[0..4], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_snapshot_copies_fields() {
        let params = RepeatingCirclesParams {
            rotating: true,
            num_rows: 4.0,
            num_polygons: 7.0,
            scale: 2.25,
        };
        let u = RepeatingCirclesScene::uniforms(&params);
        assert!(u.rotating());
        assert_eq!(u.num_rows, 4.0);
        assert_eq!(u.num_polygons, 7.0);
        assert_eq!(u.scale, 2.25);
    }

    #[test]
    fn test_set_uniforms_writes_slot_one() {
        let scene = RepeatingCirclesScene;
        let params = SceneParams::RepeatingCircles(RepeatingCirclesParams::default());
        let mut capture = Capture::default();
        scene.set_uniforms(&params, &mut capture);

        assert_eq!(capture.0.len(), 1);
        let (slot, bytes) = &capture.0[0];
        assert_eq!(*slot, FRAGMENT_UNIFORM_SLOT);
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[4..8], &1.0f32.to_ne_bytes());
    }

    #[test]
    fn test_param_set_rejects_wrong_kind() {
        let mut p = RepeatingCirclesParams::default();
        assert!(!p.set(keys::ROTATING, ControlValue::Number(1.0)));
        assert!(!p.set("unknown", ControlValue::Bool(true)));
        assert!(p.set(keys::SCALE, ControlValue::Number(3.0)));
        assert_eq!(p.scale, 3.0);
    }
}
