//! sRGB transfer function and the signed power curve used for AC terms.
//!
//! All component math happens in linear light; stored bytes are sRGB. The
//! rounding here (clamp, scale, +0.5, truncate) matches the reference
//! decoders, so decoded buffers agree with them byte for byte.

/// Converts an 8-bit sRGB channel value to linear light in [0, 1].
#[inline]
pub fn srgb_to_linear(value: u8) -> f32 {
    let v = value as f32 / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Converts a linear light value to an 8-bit sRGB channel value.
///
/// Input is clamped to [0, 1] before the piecewise branch, so overshooting
/// accumulator sums saturate instead of wrapping.
#[inline]
pub fn linear_to_srgb(value: f32) -> u8 {
    let v = value.clamp(0.0, 1.0);
    if v <= 0.003_130_8 {
        (v * 12.92 * 255.0 + 0.5) as u8
    } else {
        ((1.055 * v.powf(1.0 / 2.4) - 0.055) * 255.0 + 0.5) as u8
    }
}

/// Raises `|base|` to `exponent` while keeping the sign of `base`.
///
/// AC terms are quantised on a power curve symmetric around zero; this is
/// the decoding half of that curve.
#[inline]
pub fn sign_pow(base: f32, exponent: f32) -> f32 {
    base.abs().powf(exponent).copysign(base)
}
