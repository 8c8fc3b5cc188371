use std::f64::consts::E;

/// The logistic function `1 / (1 + e^{-x})`, mapping any real number to
/// the open interval (0, 1). This is the only activation the layer uses.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}
