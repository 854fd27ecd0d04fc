//! Float to 16-bit sample quantization.

/// Converts a float sample to a signed 16-bit value.
///
/// `NaN` maps to 0. Samples at or below -1.0 map to `i16::MIN`; everything
/// else is clamped to 1.0, scaled by 32767 and rounded half away from zero.
#[inline]
pub fn quantize(sample: f32) -> i16 {
    if sample.is_nan() {
        return 0;
    }
    if sample <= -1.0 {
        return i16::MIN;
    }
    (sample.min(1.0) * 32767.0).round() as i16
}

/// Inverse of [`quantize`] for in-range samples.
#[inline]
pub fn dequantize(sample: i16) -> f32 {
    if sample == i16::MIN {
        -1.0
    } else {
        sample as f32 / 32767.0
    }
}
