use crate::interval::Interval;
use crate::vec3::Vec3;
use std::io::{self, Write};

pub type Color = Vec3;

#[inline]
pub fn linear_to_gamma(linear_component: f64) -> f64 {
    if linear_component > 0.0 {
        linear_component.sqrt()
    } else {
        0.0
    }
}

/// Gamma-correct, clamp to [0, 0.999] and scale to 0..=255.
pub fn to_bytes(pixel_color: Color) -> [u8; 3] {
    let intensity = Interval::new(0.000, 0.999);
    let quantize = |c: f64| (256.0 * intensity.clamp(linear_to_gamma(c))) as u8;
    [
        quantize(pixel_color.x),
        quantize(pixel_color.y),
        quantize(pixel_color.z),
    ]
}

/// Write one PPM pixel line for an already sample-averaged color.
pub fn write_color<W: Write>(out: &mut W, pixel_color: Color) -> io::Result<()> {
    let [rbyte, gbyte, bbyte] = to_bytes(pixel_color);
    writeln!(out, "{} {} {}", rbyte, gbyte, bbyte)
}
