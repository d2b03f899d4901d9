// Exportable analysis report: JSON document plus a plain-text rendering.

pub mod builder;
pub mod handlers;
