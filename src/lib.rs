//! Procedural generation of "pipes": random walks on a unit grid whose every turn is a quarter
//! rotation of the pipe's local frame.


pub mod config;
pub mod domain;
pub mod preview;
pub mod simulation;
pub mod uniform;
