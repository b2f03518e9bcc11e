pub mod annotator;
pub mod data;
pub mod effects;
pub mod sequences;
pub mod static_data;
pub mod variant;
