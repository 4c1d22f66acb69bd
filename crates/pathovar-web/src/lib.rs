//! pathovar-web — HTML form and JSON API over the analysis pipeline.

pub mod handlers;
pub mod router;
pub mod state;
