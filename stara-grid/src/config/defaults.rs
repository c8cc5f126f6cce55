//! Default value functions for serde deserialization.

pub fn resolution() -> f64 {
    0.05
}

pub fn length() -> f64 {
    10.0
}

pub fn layers() -> Vec<String> {
    vec!["elevation".to_string()]
}
