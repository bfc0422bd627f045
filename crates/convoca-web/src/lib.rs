//! convoca-web — Server-rendered convocatorias site.
//! Three routes, each a fresh CMS query plus a derived head block:
//!   - `/` — active-window listing grid
//!   - `/departamento/{department}` — department listing
//!   - `/{slug}` — convocatoria detail

pub mod handlers;
pub mod pages;
pub mod router;
pub mod state;
