//! Per-frame state of the animated demos and the transforms derived from it.
//! Matrices follow the WebGL conventions: right handed, clip space depth in
//! [-1, 1], column major when flattened.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6};
use std::str::FromStr;

use glam::{Mat4, Vec3};
use serde_derive::Deserialize;

use crate::ParseError;

const FIELD_OF_VIEW: f32 = FRAC_PI_4;
const NEAR: f32 = 0.1;
const FAR: f32 = 100.0;

pub fn perspective(aspect: f32) -> Mat4 {
    Mat4::perspective_rh_gl(FIELD_OF_VIEW, aspect, NEAR, FAR)
}

/// The matrix that carries normals through `model_view`.
pub fn normal_matrix(model_view: Mat4) -> Mat4 {
    model_view.inverse().transpose()
}

/// Letters sliding down the canvas, restarting from the top once they've
/// left the bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fall {
    y: f32,
}

impl Fall {
    pub const START: f32 = 0.25;
    pub const FLOOR: f32 = -2.5;
    pub const SPEED: f32 = 0.01;

    pub fn new() -> Self {
        Fall { y: Self::START }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn advance(&mut self) {
        self.y -= Self::SPEED;
        if self.y < Self::FLOOR {
            self.y = Self::START;
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, self.y, 0.0))
    }
}

impl Default for Fall {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Projection {
    #[default]
    Orthographic,
    Perspective,
}

impl FromStr for Projection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "orthographic" | "ortho" => Ok(Self::Orthographic),
            "perspective" => Ok(Self::Perspective),
            _ => Err(ParseError::new("projection", s)),
        }
    }
}

/// A cube tumbling about all three axes at once.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spin {
    pub angle: f32,
    pub projection: Projection,
}

impl Spin {
    pub const SPEED: f32 = 0.01;

    pub fn advance(&mut self) {
        self.angle += Self::SPEED;
    }

    pub fn matrix(&self, aspect: f32) -> Mat4 {
        let projection = match self.projection {
            Projection::Orthographic => Mat4::orthographic_rh_gl(-1.0, 1.0, -1.0, 1.0, NEAR, FAR),
            Projection::Perspective => perspective(aspect),
        };

        projection
            * Mat4::from_translation(Vec3::new(0.0, 0.0, -2.0))
            * Mat4::from_rotation_x(self.angle)
            * Mat4::from_rotation_y(self.angle)
            * Mat4::from_rotation_z(self.angle)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowKey {
    Left,
    Right,
    Up,
    Down,
}

impl ArrowKey {
    /// Map a `KeyboardEvent.key` value to an arrow key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            _ => None,
        }
    }
}

/// A box with a hinged lid. Left and right turn the box, up and down open
/// and close the lid.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Chest {
    turn: f32,
    lid: f32,
}

impl Chest {
    pub const TURN_STEP: f32 = 0.1;
    pub const LID_STEP: f32 = 0.05;
    pub const LID_MAX: f32 = FRAC_PI_2;
    pub const TILT: f32 = FRAC_PI_6;

    // The lid pivots about the top front edge of the box.
    const HINGE: Vec3 = Vec3::new(0.5, 0.5, 0.5);
    const LID_SCALE: Vec3 = Vec3::new(1.0, 0.1, 1.0);

    pub fn turn(&self) -> f32 {
        self.turn
    }

    pub fn lid(&self) -> f32 {
        self.lid
    }

    pub fn press(&mut self, key: ArrowKey) {
        match key {
            ArrowKey::Left => self.turn -= Self::TURN_STEP,
            ArrowKey::Right => self.turn += Self::TURN_STEP,
            ArrowKey::Up => self.lid = (self.lid + Self::LID_STEP).min(Self::LID_MAX),
            ArrowKey::Down => self.lid = (self.lid - Self::LID_STEP).max(0.0),
        }
    }

    pub fn box_model(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -3.0))
            * Mat4::from_rotation_x(Self::TILT)
            * Mat4::from_rotation_y(self.turn)
    }

    pub fn lid_model(&self) -> Mat4 {
        self.box_model()
            * Mat4::from_translation(Self::HINGE)
            * Mat4::from_rotation_x(self.lid)
            * Mat4::from_scale(Self::LID_SCALE)
            * Mat4::from_translation(-Self::HINGE)
    }
}

/// Uniforms for one frame of the lit cube.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    pub matrix: Mat4,
    pub normal_matrix: Mat4,
    pub light_position: Vec3,
    pub view_position: Vec3,
}

/// A cube turning about y with a light swinging back and forth in front of
/// it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orbit {
    pub angle: f32,
}

impl Orbit {
    pub const SPEED: f32 = 0.01;
    pub const LIGHT_COLOUR: Vec3 = Vec3::ONE;
    pub const SHININESS: f32 = 32.0;

    const VIEW_POSITION: Vec3 = Vec3::new(0.0, 0.0, 5.0);

    pub fn advance(&mut self) {
        self.angle += Self::SPEED;
    }

    pub fn model_view(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0)) * Mat4::from_rotation_y(self.angle)
    }

    pub fn lighting(&self, aspect: f32) -> Lighting {
        let model_view = self.model_view();
        Lighting {
            matrix: perspective(aspect) * model_view,
            normal_matrix: normal_matrix(model_view),
            light_position: Vec3::new(3.0, 3.0, self.angle.cos() * 2.5),
            view_position: Self::VIEW_POSITION,
        }
    }
}

/// Fixed camera for the textured letter.
pub fn emblem_matrix() -> Mat4 {
    Mat4::perspective_rh_gl(FIELD_OF_VIEW, 1.0, NEAR, 10.0)
        * Mat4::from_translation(Vec3::new(0.0, -1.0, -1.0))
}

pub const EMBLEM_LIGHT: Vec3 = Vec3::new(1.0, 0.0, 1.0);

pub const EMBLEM_EYE: Vec3 = Vec3::ZERO;

/// Which of the loaded textures is on display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextureCycle {
    index: usize,
}

impl TextureCycle {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Move to the next of `loaded` textures, wrapping to the first. Does
    /// nothing if no texture has loaded yet.
    pub fn next(&mut self, loaded: usize) {
        if loaded > 0 {
            self.index = (self.index + 1) % loaded;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn close(a: Mat4, b: Mat4) -> bool {
        a.abs_diff_eq(b, 1e-5)
    }

    #[test]
    fn test_fall_wraps_below_floor() {
        let mut fall = Fall::new();
        assert_eq!(fall.y(), Fall::START);

        let mut wrapped = false;
        for _ in 0..1000 {
            let before = fall.y();
            fall.advance();
            assert!(fall.y() >= Fall::FLOOR);
            if fall.y() > before {
                assert_eq!(fall.y(), Fall::START);
                wrapped = true;
            }
        }
        assert!(wrapped);
    }

    #[test]
    fn test_fall_matrix_translates_y() {
        let mut fall = Fall::new();
        fall.advance();
        let m = fall.matrix().to_cols_array();
        assert!((m[13] - 0.24).abs() < 1e-6);
        assert_eq!(m[12], 0.0);
    }

    #[test]
    fn test_lid_clamped() {
        let mut chest = Chest::default();
        for _ in 0..100 {
            chest.press(ArrowKey::Up);
            assert!(chest.lid() <= Chest::LID_MAX);
        }
        assert_eq!(chest.lid(), Chest::LID_MAX);

        for _ in 0..100 {
            chest.press(ArrowKey::Down);
            assert!(chest.lid() >= 0.0);
        }
        assert_eq!(chest.lid(), 0.0);
    }

    #[test]
    fn test_chest_turn() {
        let mut chest = Chest::default();
        chest.press(ArrowKey::Right);
        chest.press(ArrowKey::Right);
        chest.press(ArrowKey::Left);
        assert!((chest.turn() - Chest::TURN_STEP).abs() < 1e-6);
    }

    #[test]
    fn test_closed_lid_sits_on_box() {
        let chest = Chest::default();

        // With the lid shut its hinge edge stays where the box's is.
        let hinge = Chest::HINGE;
        let on_box = chest.box_model().transform_point3(hinge);
        let on_lid = chest.lid_model().transform_point3(hinge);
        assert!(on_box.abs_diff_eq(on_lid, 1e-5));
    }

    #[test]
    fn test_normal_matrix() {
        let orbit = Orbit { angle: 0.7 };
        let mv = orbit.model_view();
        let lighting = orbit.lighting(1.5);

        assert!(close(lighting.normal_matrix, mv.inverse().transpose()));
        assert!(close(lighting.normal_matrix * mv.transpose(), Mat4::IDENTITY));
        assert!(close(lighting.matrix, perspective(1.5) * mv));
    }

    #[test]
    fn test_orbit_light() {
        let mut orbit = Orbit::default();
        assert_eq!(orbit.lighting(1.0).light_position, Vec3::new(3.0, 3.0, 2.5));
        orbit.advance();
        assert!((orbit.angle - Orbit::SPEED).abs() < 1e-6);
    }

    #[test]
    fn test_spin_projections_differ() {
        let mut spin = Spin::default();
        spin.advance();
        let ortho = spin.matrix(1.0);
        spin.projection = Projection::Perspective;
        let persp = spin.matrix(1.0);
        assert!(!close(ortho, persp));
    }

    #[test]
    fn test_texture_cycle_wraps() {
        let mut cycle = TextureCycle::default();
        cycle.next(0);
        assert_eq!(cycle.index(), 0);

        cycle.next(2);
        assert_eq!(cycle.index(), 1);
        cycle.next(2);
        assert_eq!(cycle.index(), 0);
        cycle.next(1);
        assert_eq!(cycle.index(), 0);
    }

    #[test]
    fn test_parse_projection() {
        assert_eq!("perspective".parse::<Projection>(), Ok(Projection::Perspective));
        assert_eq!("Orthographic".parse::<Projection>(), Ok(Projection::Orthographic));
        assert!("isometric".parse::<Projection>().is_err());
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(ArrowKey::from_key("ArrowUp"), Some(ArrowKey::Up));
        assert_eq!(ArrowKey::from_key("w"), None);
    }
}
