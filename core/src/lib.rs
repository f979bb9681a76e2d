pub mod formula;
pub mod geometry;

pub fn version() -> &'static str {
    "0.1.0"
}
