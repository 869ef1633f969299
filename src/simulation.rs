//! Assembly of a scene of pipes from a [`PipeGenerator`].

use thiserror::Error;

use crate::{
    config::SimulationConfig,
    domain::{
        Coordinate, DirectionError, PathError, PathReconstructor, PipeGenerator, PositionError,
        Rotation, SpatialRotation, Trail,
    },
    uniform::{
        make_uniforms_for_array, make_uniforms_for_struct_array, RotationUniform, UniformValue,
        Uniforms,
    },
};

#[derive(Clone, Debug, PartialEq)]
pub struct Pipe {
    pub color: Coordinate,
    pub starting_position: Coordinate,
    pub rotations: Vec<Rotation>,
}

impl Pipe {
    pub fn trail(&self, reconstructor: &PathReconstructor) -> Result<Trail, PathError> {
        let rotations = self
            .rotations
            .iter()
            .copied()
            .map(SpatialRotation::from)
            .collect::<Vec<_>>();
        reconstructor.build_trail(self.starting_position, &rotations)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PipeSimulation {
    pipes: Vec<Pipe>,
}

impl PipeSimulation {
    /// Generates `num_pipes` pipes with distinct starting positions.
    pub fn generate(
        generator: &mut PipeGenerator,
        config: &SimulationConfig,
    ) -> Result<Self, SimulationError> {
        let mut used_positions = Vec::with_capacity(config.num_pipes);
        let mut pipes = Vec::with_capacity(config.num_pipes);

        for _ in 0..config.num_pipes {
            let starting_position = generator.generate_position(&used_positions)?;
            used_positions.push(starting_position);

            let rotations =
                generator.generate_pipe_directions(config.num_turns, config.rotation_angle)?;
            let color = generator.generate_color();

            pipes.push(Pipe {
                color,
                starting_position,
                rotations,
            });
        }

        log::info!(
            "generated {} pipes of {} turns",
            pipes.len(),
            config.num_turns
        );

        Ok(Self { pipes })
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn trails(&self, reconstructor: &PathReconstructor) -> Result<Vec<Trail>, SimulationError> {
        self.pipes
            .iter()
            .map(|pipe| pipe.trail(reconstructor).map_err(SimulationError::from))
            .collect()
    }

    /// Rotations of every pipe, one pipe after the other.
    pub fn rotation_uniforms(&self) -> Vec<RotationUniform> {
        self.pipes
            .iter()
            .flat_map(|pipe| pipe.rotations.iter().copied().map(RotationUniform::from))
            .collect()
    }

    pub fn uniforms(&self) -> Uniforms {
        let mut uniforms = Uniforms::new();
        uniforms.insert(
            "num_pipes".to_string(),
            UniformValue::Int(self.pipes.len() as i32),
        );
        uniforms.extend(make_uniforms_for_array(
            "colors",
            self.pipes.iter().map(|pipe| pipe.color),
        ));
        uniforms.extend(make_uniforms_for_array(
            "starting_positions",
            self.pipes.iter().map(|pipe| pipe.starting_position),
        ));
        uniforms.extend(make_uniforms_for_struct_array(
            "rotations",
            &self.rotation_uniforms(),
        ));
        uniforms
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum SimulationError {
    #[error(transparent)]
    Direction(#[from] DirectionError),
    #[error(transparent)]
    Position(#[from] PositionError),
    #[error(transparent)]
    Path(#[from] PathError),
}
