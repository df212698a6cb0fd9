//! Content domain: tuning definitions deserialized from RON.

use serde::{Deserialize, Serialize};

/// Shared locomotion tuning for a boss body.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LocomotionTuning {
    pub max_speed: f32,
    pub chase_speed: f32,
    pub max_accel: f32,
    pub turn_lerp: f32,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            max_speed: 3.5,
            chase_speed: 4.5,
            max_accel: 20.0,
            turn_lerp: 8.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PerceptionTuning {
    pub aggro_range: f32,
    pub leash_range: f32,
}

impl Default for PerceptionTuning {
    fn default() -> Self {
        Self {
            aggro_range: 18.0,
            leash_range: 30.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoamTuning {
    pub roam_radius: f32,
    pub min_hop_distance: f32,
    pub arrive_radius: f32,
    pub dwell_min: f32,
    pub dwell_max: f32,
}

impl Default for RoamTuning {
    fn default() -> Self {
        Self {
            roam_radius: 14.0,
            min_hop_distance: 3.0,
            arrive_radius: 1.2,
            dwell_min: 1.0,
            dwell_max: 2.5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AvoidanceTuning {
    pub strength: f32,
    pub look_ahead: f32,
    pub whisker_angle_deg: f32,
    pub whisker_length: f32,
    pub probe_height: f32,
}

impl Default for AvoidanceTuning {
    fn default() -> Self {
        Self {
            strength: 12.0,
            look_ahead: 3.0,
            whisker_angle_deg: 35.0,
            whisker_length: 2.2,
            probe_height: 0.6,
        }
    }
}

/// Close melee arc. Zero damage disables the attack entirely.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SwipeTuning {
    pub damage: f32,
    pub range: f32,
    pub radius: f32,
    pub windup: f32,
    pub recover: f32,
    pub cooldown: f32,
    pub offset_forward: f32,
    pub offset_up: f32,
}

impl Default for SwipeTuning {
    fn default() -> Self {
        Self {
            damage: 12.0,
            range: 3.0,
            radius: 1.6,
            windup: 0.35,
            recover: 0.6,
            cooldown: 3.0,
            offset_forward: 1.4,
            offset_up: 1.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RushTuning {
    pub damage: f32,
    pub speed: f32,
    pub duration: f32,
    pub knockback: f32,
    pub min_range: f32,
    pub max_range: f32,
    pub cooldown: f32,
    pub rest: f32,
    pub body_radius: f32,
}

impl Default for RushTuning {
    fn default() -> Self {
        Self {
            damage: 18.0,
            speed: 9.0,
            duration: 1.6,
            knockback: 9.0,
            min_range: 5.0,
            max_range: 14.0,
            cooldown: 6.0,
            rest: 0.5,
            body_radius: 1.1,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LeapTuning {
    pub damage: f32,
    pub outer_radius: f32,
    pub inner_radius: f32,
    pub knockback: f32,
    pub stun: f32,
    pub min_range: f32,
    pub max_range: f32,
    pub min_airtime: f32,
    pub max_airtime: f32,
    pub max_launch_speed: f32,
    pub cooldown: f32,
    pub telegraph_time: f32,
    pub flee_time: f32,
    pub flee_speed: f32,
}

impl Default for LeapTuning {
    fn default() -> Self {
        Self {
            damage: 22.0,
            outer_radius: 5.5,
            inner_radius: 1.2,
            knockback: 11.0,
            stun: 1.2,
            min_range: 8.0,
            max_range: 20.0,
            min_airtime: 0.65,
            max_airtime: 1.1,
            max_launch_speed: 24.0,
            cooldown: 10.0,
            telegraph_time: 0.5,
            flee_time: 1.2,
            flee_speed: 5.0,
        }
    }
}

/// Rising claw dive. The melee option for fliers.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SwoopTuning {
    pub damage: f32,
    pub range: f32,
    pub rise_time: f32,
    pub rise_speed: f32,
    pub dive_speed: f32,
    pub claw_radius: f32,
    pub max_duration: f32,
    pub recover: f32,
    pub cooldown: f32,
}

impl Default for SwoopTuning {
    fn default() -> Self {
        Self {
            damage: 10.0,
            range: 10.0,
            rise_time: 0.25,
            rise_speed: 6.0,
            dive_speed: 14.0,
            claw_radius: 1.4,
            max_duration: 1.8,
            recover: 0.6,
            cooldown: 5.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BoltTuning {
    pub damage: f32,
    pub speed: f32,
    pub windup: f32,
    pub range: f32,
    pub homing_strength: f32,
    pub lifetime: f32,
    pub cooldown: f32,
}

impl Default for BoltTuning {
    fn default() -> Self {
        Self {
            damage: 8.0,
            speed: 14.0,
            windup: 0.25,
            range: 18.0,
            homing_strength: 2.2,
            lifetime: 6.0,
            cooldown: 2.5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShriekTuning {
    pub radius: f32,
    pub blind_duration: f32,
    pub windup: f32,
    pub settle: f32,
    pub cooldown: f32,
}

impl Default for ShriekTuning {
    fn default() -> Self {
        Self {
            radius: 9.0,
            blind_duration: 2.5,
            windup: 0.25,
            settle: 0.2,
            cooldown: 12.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MinionTuning {
    pub health: f32,
    pub speed: f32,
    pub damage: f32,
    pub attack_range: f32,
    pub attack_cooldown: f32,
}

impl Default for MinionTuning {
    fn default() -> Self {
        Self {
            health: 30.0,
            speed: 5.0,
            damage: 4.0,
            attack_range: 1.6,
            attack_cooldown: 1.2,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SummonTuning {
    pub count: u32,
    pub ring_radius: f32,
    pub windup: f32,
    pub settle: f32,
    pub cooldown: f32,
    pub minion: MinionTuning,
}

impl Default for SummonTuning {
    fn default() -> Self {
        Self {
            count: 3,
            ring_radius: 2.5,
            windup: 0.5,
            settle: 0.5,
            cooldown: 18.0,
            minion: MinionTuning::default(),
        }
    }
}

/// Backwards hop used by skirmishers when crowded.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EvadeTuning {
    pub speed: f32,
    pub duration: f32,
    pub trigger_range: f32,
    pub cooldown: f32,
}

impl Default for EvadeTuning {
    fn default() -> Self {
        Self {
            speed: 8.0,
            duration: 0.4,
            trigger_range: 2.2,
            cooldown: 6.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FlightTuning {
    pub cruise_altitude: f32,
    pub altitude_lerp: f32,
    pub vertical_speed: f32,
}

impl Default for FlightTuning {
    fn default() -> Self {
        Self {
            cruise_altitude: 6.0,
            altitude_lerp: 2.0,
            vertical_speed: 4.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PersonalSpaceTuning {
    pub min_distance: f32,
    pub push_accel: f32,
}

impl Default for PersonalSpaceTuning {
    fn default() -> Self {
        Self {
            min_distance: 4.0,
            push_accel: 10.0,
        }
    }
}

// -----------------------------------------------------------------------------
// Per-boss tuning files
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BigfootTuning {
    pub health: f32,
    pub attack_lockout: f32,
    pub locomotion: LocomotionTuning,
    pub perception: PerceptionTuning,
    pub roam: RoamTuning,
    pub avoidance: AvoidanceTuning,
    pub swipe: SwipeTuning,
    pub rush: RushTuning,
    pub leap: LeapTuning,
    pub rush_over_leap_bias: f32,
}

impl Default for BigfootTuning {
    fn default() -> Self {
        Self {
            health: 420.0,
            attack_lockout: 1.2,
            locomotion: LocomotionTuning::default(),
            perception: PerceptionTuning::default(),
            roam: RoamTuning::default(),
            avoidance: AvoidanceTuning::default(),
            swipe: SwipeTuning::default(),
            rush: RushTuning::default(),
            leap: LeapTuning::default(),
            rush_over_leap_bias: 0.7,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MothmanTuning {
    pub health: f32,
    pub attack_lockout: f32,
    pub locomotion: LocomotionTuning,
    pub perception: PerceptionTuning,
    pub roam: RoamTuning,
    pub avoidance: AvoidanceTuning,
    pub flight: FlightTuning,
    pub personal_space: PersonalSpaceTuning,
    pub swoop: SwoopTuning,
    pub bolt: BoltTuning,
    pub shriek: ShriekTuning,
    pub melee_bias: f32,
}

impl Default for MothmanTuning {
    fn default() -> Self {
        Self {
            health: 300.0,
            attack_lockout: 1.0,
            locomotion: LocomotionTuning {
                max_speed: 4.5,
                chase_speed: 6.0,
                max_accel: 16.0,
                turn_lerp: 6.0,
            },
            perception: PerceptionTuning {
                aggro_range: 22.0,
                leash_range: 34.0,
            },
            roam: RoamTuning::default(),
            avoidance: AvoidanceTuning::default(),
            flight: FlightTuning::default(),
            personal_space: PersonalSpaceTuning::default(),
            swoop: SwoopTuning::default(),
            bolt: BoltTuning::default(),
            shriek: ShriekTuning::default(),
            melee_bias: 0.6,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WendigoTuning {
    pub health: f32,
    pub attack_lockout: f32,
    pub locomotion: LocomotionTuning,
    pub perception: PerceptionTuning,
    pub roam: RoamTuning,
    pub avoidance: AvoidanceTuning,
    pub swipe: SwipeTuning,
    pub rush: RushTuning,
    pub bolt: BoltTuning,
    pub summon: SummonTuning,
    pub evade: EvadeTuning,
    /// Health fraction at or below which summoning becomes eligible.
    pub summon_health_fraction: f32,
    /// When both rush and bolt are valid, odds of choosing the bolt.
    pub ranged_bias: f32,
}

impl Default for WendigoTuning {
    fn default() -> Self {
        Self {
            health: 360.0,
            attack_lockout: 1.1,
            locomotion: LocomotionTuning {
                max_speed: 4.0,
                chase_speed: 5.5,
                max_accel: 24.0,
                turn_lerp: 9.0,
            },
            perception: PerceptionTuning::default(),
            roam: RoamTuning::default(),
            avoidance: AvoidanceTuning::default(),
            swipe: SwipeTuning {
                damage: 10.0,
                range: 2.6,
                ..SwipeTuning::default()
            },
            rush: RushTuning {
                damage: 14.0,
                speed: 11.0,
                duration: 1.2,
                ..RushTuning::default()
            },
            bolt: BoltTuning {
                damage: 7.0,
                range: 16.0,
                ..BoltTuning::default()
            },
            summon: SummonTuning::default(),
            evade: EvadeTuning::default(),
            summon_health_fraction: 0.6,
            ranged_bias: 0.55,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KnockbackTuning {
    /// Scale applied to the impulse when converting it into a slide velocity.
    pub slide_multiplier: f32,
    pub slide_duration: f32,
    pub slide_damping: f32,
    /// Upward fraction mixed into rigid-body impulses.
    pub impulse_up_fraction: f32,
    pub max_impulse_speed: f32,
}

impl Default for KnockbackTuning {
    fn default() -> Self {
        Self {
            slide_multiplier: 6.0,
            slide_duration: 0.25,
            slide_damping: 12.0,
            impulse_up_fraction: 0.25,
            max_impulse_speed: 18.0,
        }
    }
}

/// Cross-cutting tuning that does not belong to a single boss.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GameplayTuning {
    pub hunter_health: f32,
    pub hunter_speed: f32,
    pub knockback: KnockbackTuning,
    /// Seconds a defeated boss body lingers before despawning.
    pub boss_despawn_delay: f32,
}

impl Default for GameplayTuning {
    fn default() -> Self {
        Self {
            hunter_health: 100.0,
            hunter_speed: 5.0,
            knockback: KnockbackTuning::default(),
            boss_despawn_delay: 3.0,
        }
    }
}
