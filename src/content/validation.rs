//! Content domain: sanity checks over loaded tuning.
//!
//! Validation never rejects content outright; it reports human-readable
//! warnings so a bad band or inverted range is caught at startup instead of
//! surfacing as a boss that silently never attacks.

use super::data::{BigfootTuning, GameplayTuning, MothmanTuning, WendigoTuning};
use super::BossContent;

pub fn validate(content: &BossContent) -> Vec<String> {
    let mut warnings = Vec::new();
    validate_bigfoot(&content.bigfoot, &mut warnings);
    validate_mothman(&content.mothman, &mut warnings);
    validate_wendigo(&content.wendigo, &mut warnings);
    validate_gameplay(&content.gameplay, &mut warnings);
    warnings
}

fn check_band(name: &str, min: f32, max: f32, warnings: &mut Vec<String>) {
    if min > max {
        warnings.push(format!("{}: inverted range {} > {}", name, min, max));
    }
}

fn check_fraction(name: &str, value: f32, warnings: &mut Vec<String>) {
    if !(0.0..=1.0).contains(&value) {
        warnings.push(format!("{}: {} is not in [0, 1]", name, value));
    }
}

fn check_positive(name: &str, value: f32, warnings: &mut Vec<String>) {
    if value <= 0.0 {
        warnings.push(format!("{}: {} must be positive", name, value));
    }
}

fn validate_common(
    boss: &str,
    aggro: f32,
    leash: f32,
    dwell_min: f32,
    dwell_max: f32,
    warnings: &mut Vec<String>,
) {
    if aggro > leash {
        warnings.push(format!(
            "{}: aggro_range {} exceeds leash_range {}, boss will drop chase instantly",
            boss, aggro, leash
        ));
    }
    check_band(&format!("{}.roam.dwell", boss), dwell_min, dwell_max, warnings);
}

fn validate_bigfoot(t: &BigfootTuning, warnings: &mut Vec<String>) {
    validate_common(
        "bigfoot",
        t.perception.aggro_range,
        t.perception.leash_range,
        t.roam.dwell_min,
        t.roam.dwell_max,
        warnings,
    );
    check_positive("bigfoot.health", t.health, warnings);
    check_band("bigfoot.rush.range", t.rush.min_range, t.rush.max_range, warnings);
    check_band("bigfoot.leap.range", t.leap.min_range, t.leap.max_range, warnings);
    check_band(
        "bigfoot.leap.airtime",
        t.leap.min_airtime,
        t.leap.max_airtime,
        warnings,
    );
    if t.leap.inner_radius > t.leap.outer_radius {
        warnings.push(format!(
            "bigfoot.leap: inner_radius {} exceeds outer_radius {}",
            t.leap.inner_radius, t.leap.outer_radius
        ));
    }
    check_fraction("bigfoot.rush_over_leap_bias", t.rush_over_leap_bias, warnings);
}

fn validate_mothman(t: &MothmanTuning, warnings: &mut Vec<String>) {
    validate_common(
        "mothman",
        t.perception.aggro_range,
        t.perception.leash_range,
        t.roam.dwell_min,
        t.roam.dwell_max,
        warnings,
    );
    check_positive("mothman.health", t.health, warnings);
    check_positive("mothman.flight.cruise_altitude", t.flight.cruise_altitude, warnings);
    check_fraction("mothman.melee_bias", t.melee_bias, warnings);
    check_positive("mothman.bolt.speed", t.bolt.speed, warnings);
}

fn validate_wendigo(t: &WendigoTuning, warnings: &mut Vec<String>) {
    validate_common(
        "wendigo",
        t.perception.aggro_range,
        t.perception.leash_range,
        t.roam.dwell_min,
        t.roam.dwell_max,
        warnings,
    );
    check_positive("wendigo.health", t.health, warnings);
    check_band("wendigo.rush.range", t.rush.min_range, t.rush.max_range, warnings);
    check_fraction("wendigo.summon_health_fraction", t.summon_health_fraction, warnings);
    check_fraction("wendigo.ranged_bias", t.ranged_bias, warnings);
    if t.summon.count == 0 {
        warnings.push("wendigo.summon: count is zero, attack does nothing".to_string());
    }
}

fn validate_gameplay(t: &GameplayTuning, warnings: &mut Vec<String>) {
    check_positive("gameplay.hunter_health", t.hunter_health, warnings);
    check_positive("gameplay.knockback.slide_duration", t.knockback.slide_duration, warnings);
    check_positive(
        "gameplay.knockback.max_impulse_speed",
        t.knockback.max_impulse_speed,
        warnings,
    );
}
