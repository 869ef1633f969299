//! Naming of shader uniforms for arrays and arrays of structs.
//!
//! A renderer binds arrays element by element: `colors[0]`, `colors[1]`, and structs field by
//! field: `rotations[0].matrix`, `rotations[0].axis`. The maps produced here hold exactly those
//! names, ordered by name.

use std::collections::BTreeMap;

use crate::domain::{flatten_matrix, Axis, Coordinate, Rotation};

pub type Uniforms = BTreeMap<String, UniformValue>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    Int(i32),
    Vec3([f32; 3]),
    Mat3([f32; 9]),
}

impl From<i32> for UniformValue {
    fn from(value: i32) -> Self {
        UniformValue::Int(value)
    }
}

impl From<[f32; 3]> for UniformValue {
    fn from(value: [f32; 3]) -> Self {
        UniformValue::Vec3(value)
    }
}

impl From<[f32; 9]> for UniformValue {
    fn from(value: [f32; 9]) -> Self {
        UniformValue::Mat3(value)
    }
}

impl From<Coordinate> for UniformValue {
    fn from(value: Coordinate) -> Self {
        UniformValue::Vec3(value.into())
    }
}

impl From<Axis> for UniformValue {
    fn from(value: Axis) -> Self {
        UniformValue::Int(value.tag().into())
    }
}

/// A value bound as a uniform struct, one uniform per field.
pub trait UniformStruct {
    fn fields(&self) -> Vec<(&'static str, UniformValue)>;
}

/// The rotation of one pipe turn as the renderer consumes it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationUniform {
    /// Row-major rotation matrix.
    pub matrix: [f32; 9],
    pub axis: Axis,
}

impl From<Rotation> for RotationUniform {
    fn from(value: Rotation) -> Self {
        Self {
            matrix: flatten_matrix(&value.matrix()),
            axis: value.axis,
        }
    }
}

impl UniformStruct for RotationUniform {
    fn fields(&self) -> Vec<(&'static str, UniformValue)> {
        vec![("matrix", self.matrix.into()), ("axis", self.axis.into())]
    }
}

/// Names every item `name[i]`.
pub fn make_uniforms_for_array<T>(name: &str, items: impl IntoIterator<Item = T>) -> Uniforms
where
    T: Into<UniformValue>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| (format!("{name}[{i}]"), item.into()))
        .collect()
}

/// Names every field of every item `name[i].field`.
pub fn make_uniforms_for_struct_array<'a, T>(
    name: &str,
    items: impl IntoIterator<Item = &'a T>,
) -> Uniforms
where
    T: UniformStruct + 'a,
{
    items
        .into_iter()
        .enumerate()
        .flat_map(|(i, item)| {
            item.fields()
                .into_iter()
                .map(move |(field, value)| (format!("{name}[{i}].{field}"), value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::Angle;

    struct Square {
        n: i32,
        square: i32,
    }

    impl UniformStruct for Square {
        fn fields(&self) -> Vec<(&'static str, UniformValue)> {
            vec![("n", self.n.into()), ("square", self.square.into())]
        }
    }

    fn uniforms(entries: &[(&str, UniformValue)]) -> Uniforms {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect()
    }

    #[test]
    fn test_array_uniforms() {
        assert_eq!(
            make_uniforms_for_array("squares", [0, 1, 4, 9]),
            uniforms(&[
                ("squares[0]", UniformValue::Int(0)),
                ("squares[1]", UniformValue::Int(1)),
                ("squares[2]", UniformValue::Int(4)),
                ("squares[3]", UniformValue::Int(9)),
            ])
        );
    }

    #[test]
    fn test_struct_array_uniforms() {
        let squares = (0..4).map(|n| Square { n, square: n * n }).collect::<Vec<_>>();
        assert_eq!(
            make_uniforms_for_struct_array("squares", &squares),
            uniforms(&[
                ("squares[0].n", UniformValue::Int(0)),
                ("squares[0].square", UniformValue::Int(0)),
                ("squares[1].n", UniformValue::Int(1)),
                ("squares[1].square", UniformValue::Int(1)),
                ("squares[2].n", UniformValue::Int(2)),
                ("squares[2].square", UniformValue::Int(4)),
                ("squares[3].n", UniformValue::Int(3)),
                ("squares[3].square", UniformValue::Int(9)),
            ])
        );
    }

    #[test]
    fn test_empty_array() {
        assert!(make_uniforms_for_array::<i32>("colors", []).is_empty());
    }

    #[test]
    fn test_coordinate_uniform() {
        assert_eq!(
            UniformValue::from(Coordinate::new(0.5, 1.0, -2.0)),
            UniformValue::Vec3([0.5, 1.0, -2.0])
        );
    }

    #[test]
    fn test_rotation_uniform() {
        let uniform = RotationUniform::from(Rotation::new(Axis::Z, Angle::from_deg(90.0)));
        let expected = [0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0];
        for (value, expected) in uniform.matrix.iter().zip(expected) {
            assert_abs_diff_eq!(*value, expected, epsilon = 1e-6);
        }
        assert_eq!(uniform.axis, Axis::Z);
        assert_eq!(
            uniform.fields()[1],
            ("axis", UniformValue::Int(3))
        );
    }
}
