//! HTTP handlers, one per route.

pub mod convocatoria;
pub mod departamento;
pub mod home;
