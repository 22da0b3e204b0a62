//! Damage calculation.

use crate::action::{Action, Category};
use crate::element::damage_modifier;
use crate::stats::StatKind;
use crate::unit::Unit;

/// Attacker stat used by a category: ATK or MAGI.
pub const fn offensive_stat(category: Category) -> StatKind {
    match category {
        Category::Physical => StatKind::Atk,
        Category::Special => StatKind::Magi,
    }
}

/// Defender stat used by a category: DEF or RES.
pub const fn defensive_stat(category: Category) -> StatKind {
    match category {
        Category::Physical => StatKind::Def,
        Category::Special => StatKind::Res,
    }
}

/// Core damage formula.
///
/// # Formula
///
/// ```text
/// effective = multiplier × elemental_modifier
/// damage    = max(0, round(effective × offensive) − defensive)
/// ```
pub fn raw_damage(multiplier: f32, modifier: f32, offensive: i32, defensive: i32) -> i32 {
    let effective = multiplier * modifier;
    let scaled = (effective * offensive as f32).round() as i32;
    scaled.saturating_sub(defensive).max(0)
}

/// Calculate the damage `action` used by `attacker` deals to `defender`.
///
/// Uses current stat values, so active buffs and debuffs count.
pub fn calculate_damage(action: &Action, attacker: &Unit, defender: &Unit) -> i32 {
    let modifier = damage_modifier(action.element(), defender.element());
    raw_damage(
        action.multiplier(),
        modifier,
        attacker.stat(offensive_stat(action.category())),
        defender.stat(defensive_stat(action.category())),
    )
}

/// Strength of a buff/debuff on a stat with maximum `stat_max`.
///
/// # Formula
///
/// ```text
/// amount = max(1, round(multiplier × stat_max × ratio_percent / 100))
/// ```
pub fn modifier_amount(multiplier: f32, stat_max: i32, ratio_percent: u32) -> i32 {
    let scaled = multiplier * stat_max as f32 * ratio_percent as f32 / 100.0;
    (scaled.round() as i32).max(1)
}
