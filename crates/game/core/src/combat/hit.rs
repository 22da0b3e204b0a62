//! Accuracy checks.

/// Check if an action lands based on its accuracy and a percentage roll.
///
/// # Arguments
///
/// * `accuracy` - Action accuracy (0-100)
/// * `roll` - Random roll in `0..100`
///
/// # Returns
///
/// `true` if the action hits, `false` if it misses.
pub fn check_hit(accuracy: u32, roll: u32) -> bool {
    roll < accuracy
}
