/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Add `step` to `value`, saturating at `max`
#[inline]
pub const fn add_clamped(value: u8, step: u8, max: u8) -> u8 {
    let next = value.saturating_add(step);
    if next > max { max } else { next }
}

/// Subtract `step` from `value`, saturating at `min`
#[inline]
pub const fn sub_clamped(value: u8, step: u8, min: u8) -> u8 {
    let next = value.saturating_sub(step);
    if next < min { min } else { next }
}
