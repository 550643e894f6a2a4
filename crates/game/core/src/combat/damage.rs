//! Damage application.

/// Apply damage to current HP.
///
/// # Returns
///
/// New HP value (clamped to 0)
#[inline]
pub const fn apply_damage(current_hp: u8, damage: u8) -> u8 {
    current_hp.saturating_sub(damage)
}
