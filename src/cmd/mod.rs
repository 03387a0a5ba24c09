pub mod explain;
pub mod rules;
pub mod score;
