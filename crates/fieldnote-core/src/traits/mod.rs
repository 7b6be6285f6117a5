//! Trait seams between the pipeline and its external collaborators.

pub mod recognizer;
