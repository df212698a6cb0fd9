//! Boss domain: tests for steering math, roam picking, selection logic, and
//! full-loop scenarios on a headless app.

use avian3d::prelude::*;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::steering::avoidance_accel;
use super::{
    clamp_planar_speed, face_direction, launch_velocity, next_steering_state, pick_roam_target,
    seek_velocity, steer_accel, yaw_towards, ActiveAttack, AttackRoutine, Avoidance, BigfootKit,
    BossAgent, BossKit, BossState, MothmanKit, RoamParams, StuckTracker, WendigoKit,
};
use crate::combat::{DamageEvent, Health};
use crate::content::{
    AvoidanceTuning, BigfootTuning, BossContent, LeapTuning, MothmanTuning, WendigoTuning,
};

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

// -----------------------------------------------------------------------------
// Steering math tests
// -----------------------------------------------------------------------------

#[test]
fn test_seek_velocity_is_planar_at_speed() {
    let v = seek_velocity(Vec3::ZERO, Vec3::new(3.0, 5.0, 4.0), 2.0);
    assert_eq!(v.y, 0.0);
    assert!((v.length() - 2.0).abs() < 1e-4);
}

#[test]
fn test_seek_velocity_deadzone_settles() {
    let v = seek_velocity(Vec3::ZERO, Vec3::new(0.001, 0.0, 0.001), 2.0);
    assert_eq!(v, Vec3::ZERO);
}

#[test]
fn test_steer_accel_is_clamped() {
    let accel = steer_accel(Vec3::new(100.0, 0.0, 0.0), Vec3::ZERO, 20.0);
    assert!((accel.length() - 20.0).abs() < 1e-4);
}

#[test]
fn test_steer_accel_counters_current_velocity() {
    let accel = steer_accel(Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0), 50.0);
    assert!(accel.x < 0.0);
}

#[test]
fn test_clamp_planar_speed_keeps_vertical() {
    let v = clamp_planar_speed(Vec3::new(10.0, -7.0, 0.0), 3.0);
    assert!((v.x - 3.0).abs() < 1e-4);
    assert_eq!(v.y, -7.0);
}

#[test]
fn test_clamp_planar_speed_noop_under_cap() {
    let v = Vec3::new(1.0, 2.0, 1.0);
    assert_eq!(clamp_planar_speed(v, 5.0), v);
}

#[test]
fn test_yaw_towards_deadzone() {
    assert!(yaw_towards(Vec3::new(0.0, 3.0, 0.0)).is_none());
    assert!(yaw_towards(Vec3::new(0.0, 0.0, 1.0)).is_some());
}

#[test]
fn test_face_direction_converges() {
    let mut transform = Transform::IDENTITY;
    // Big enough lerp factor to snap in one call.
    face_direction(&mut transform, Vec3::X, 100.0, 1.0);
    let fwd = transform.rotation * Vec3::Z;
    assert!((fwd - Vec3::X).length() < 1e-3);
}

// -----------------------------------------------------------------------------
// Leap ballistics tests
// -----------------------------------------------------------------------------

#[test]
fn test_launch_velocity_lands_on_target() {
    let tuning = LeapTuning::default();
    let gravity = 9.81;
    let from = Vec3::new(0.0, 1.0, 0.0);
    let to = Vec3::new(10.0, 0.0, 0.0);

    let v = launch_velocity(from, to, &tuning, gravity);
    // Recover the airtime from the horizontal component and integrate.
    let airtime = 10.0 / v.x;
    let landing = from + v * airtime + 0.5 * gravity * airtime * airtime * Vec3::NEG_Y;
    assert!((landing - to).length() < 1e-3, "landing at {:?}", landing);
}

#[test]
fn test_launch_velocity_airtime_scales_with_distance() {
    let tuning = LeapTuning::default();
    let gravity = 9.81;
    let from = Vec3::new(0.0, 0.0, 0.0);

    let near = launch_velocity(from, Vec3::new(tuning.min_range, 0.0, 0.0), &tuning, gravity);
    let far = launch_velocity(from, Vec3::new(tuning.max_range, 0.0, 0.0), &tuning, gravity);
    let near_airtime = tuning.min_range / near.x;
    let far_airtime = tuning.max_range / far.x;
    assert!((near_airtime - tuning.min_airtime).abs() < 1e-3);
    assert!((far_airtime - tuning.max_airtime).abs() < 1e-3);
}

#[test]
fn test_launch_velocity_respects_speed_cap() {
    let tuning = LeapTuning {
        max_launch_speed: 5.0,
        ..LeapTuning::default()
    };
    let v = launch_velocity(Vec3::ZERO, Vec3::new(20.0, 0.0, 0.0), &tuning, 9.81);
    assert!(v.length() <= 5.0 + 1e-4);
}

// -----------------------------------------------------------------------------
// Roam picker tests
// -----------------------------------------------------------------------------

fn roam_params() -> RoamParams {
    RoamParams::from(&crate::content::RoamTuning::default())
}

#[test]
fn test_pick_roam_target_stays_in_disc_and_hops() {
    let params = roam_params();
    let spawn = Vec3::new(5.0, 0.0, -3.0);
    let mut rng = rng(11);

    for _ in 0..50 {
        let target = pick_roam_target(spawn, spawn, &params, &mut rng, false, |p| Some(p));
        let from_spawn = Vec3::new(target.x - spawn.x, 0.0, target.z - spawn.z).length();
        assert!(from_spawn <= params.roam_radius + 1e-3);
        assert!(from_spawn >= params.min_hop_distance);
    }
}

#[test]
fn test_pick_roam_target_uses_probe_height() {
    let params = roam_params();
    let mut rng = rng(3);
    let target = pick_roam_target(Vec3::ZERO, Vec3::ZERO, &params, &mut rng, false, |p| {
        Some(Vec3::new(p.x, 2.0, p.z))
    });
    assert_eq!(target.y, 2.0);
}

#[test]
fn test_first_roam_pick_skips_hop_filter() {
    let mut params = roam_params();
    // No sample in the disc can satisfy this hop.
    params.min_hop_distance = 100.0;
    let spawn = Vec3::ZERO;

    let mut probes = 0;
    pick_roam_target(spawn, spawn, &params, &mut rng(5), true, |p| {
        probes += 1;
        Some(p)
    });
    // The first pick takes the first grounded candidate as-is.
    assert_eq!(probes, 1);

    let mut probes = 0;
    pick_roam_target(spawn, spawn, &params, &mut rng(5), false, |p| {
        probes += 1;
        Some(p)
    });
    // Later picks exhaust their samples looking for a real hop.
    assert_eq!(probes, 8);
}

#[test]
fn test_pick_roam_target_falls_back_without_ground() {
    let params = roam_params();
    let spawn = Vec3::new(1.0, 0.0, 1.0);
    let mut rng = rng(7);
    let target = pick_roam_target(spawn, spawn, &params, &mut rng, false, |_| None);
    // No grounded candidate: a raw sample inside the disc is still returned.
    let from_spawn = Vec3::new(target.x - spawn.x, 0.0, target.z - spawn.z).length();
    assert!(from_spawn <= params.roam_radius + 1e-3);
}

// -----------------------------------------------------------------------------
// Stuck tracker tests
// -----------------------------------------------------------------------------

#[test]
fn test_stuck_tracker_needs_grace_to_elapse() {
    let mut tracker = StuckTracker::default();
    let pos = Vec3::new(4.0, 0.0, 4.0);
    for _ in 0..3 {
        tracker.tick(0.1, pos);
    }
    assert!(!tracker.is_stuck(0.0));
}

#[test]
fn test_stuck_tracker_fires_when_parked() {
    let mut tracker = StuckTracker::default();
    let pos = Vec3::new(4.0, 0.0, 4.0);
    // Two full sample windows with zero displacement, grace elapsed.
    for _ in 0..12 {
        tracker.tick(0.1, pos);
    }
    assert!(tracker.is_stuck(0.0));
    // A body still moving at speed is not stuck even when displacement is low.
    assert!(!tracker.is_stuck(1.0));
}

#[test]
fn test_stuck_tracker_resets_after_pick() {
    let mut tracker = StuckTracker::default();
    let pos = Vec3::ZERO;
    for _ in 0..12 {
        tracker.tick(0.1, pos);
    }
    assert!(tracker.is_stuck(0.0));
    tracker.reset_after_pick();
    assert!(!tracker.is_stuck(0.0));
}

#[test]
fn test_stuck_tracker_clears_when_moving() {
    let mut tracker = StuckTracker::default();
    let mut pos = Vec3::ZERO;
    for _ in 0..12 {
        pos.x += 0.3;
        tracker.tick(0.1, pos);
    }
    assert!(!tracker.is_stuck(3.0));
}

// -----------------------------------------------------------------------------
// State transition tests
// -----------------------------------------------------------------------------

#[test]
fn test_aggro_boundary_is_inclusive() {
    let next = next_steering_state(BossState::Roam, Some(18.0), 18.0, 30.0);
    assert_eq!(next, BossState::Chase);
    let next = next_steering_state(BossState::Roam, Some(18.1), 18.0, 30.0);
    assert_eq!(next, BossState::Roam);
}

#[test]
fn test_leash_boundary_keeps_chase() {
    let next = next_steering_state(BossState::Chase, Some(30.0), 18.0, 30.0);
    assert_eq!(next, BossState::Chase);
    let next = next_steering_state(BossState::Chase, Some(30.1), 18.0, 30.0);
    assert_eq!(next, BossState::Roam);
}

#[test]
fn test_lost_target_breaks_chase() {
    let next = next_steering_state(BossState::Chase, None, 18.0, 30.0);
    assert_eq!(next, BossState::Roam);
}

#[test]
fn test_attack_and_recover_are_untouched() {
    assert_eq!(
        next_steering_state(BossState::Attack, Some(50.0), 18.0, 30.0),
        BossState::Attack
    );
    assert_eq!(
        next_steering_state(BossState::Recover, Some(1.0), 18.0, 30.0),
        BossState::Recover
    );
}

// -----------------------------------------------------------------------------
// Bigfoot kit tests
// -----------------------------------------------------------------------------

#[test]
fn test_bigfoot_swipe_takes_priority_in_reach() {
    let mut kit = BigfootKit::new(BigfootTuning::default());
    let routine = kit.select_attack(2.0, 1.0, &mut rng(1)).unwrap();
    assert!(matches!(routine, AttackRoutine::Swipe(_)));
    // Selection armed the cooldown.
    assert!(kit.swipe_cooldown > 0.0);
    assert!(!kit.swipe_ready(2.0));
}

#[test]
fn test_bigfoot_cooldown_boundary_counts_as_ready() {
    let mut kit = BigfootKit::new(BigfootTuning::default());
    kit.swipe_cooldown = 0.0;
    assert!(kit.swipe_ready(kit.tuning.swipe.range));
    kit.swipe_cooldown = 0.01;
    assert!(!kit.swipe_ready(2.0));
}

#[test]
fn test_bigfoot_zero_damage_disables_swipe() {
    let mut tuning = BigfootTuning::default();
    tuning.swipe.damage = 0.0;
    let kit = BigfootKit::new(tuning);
    assert!(!kit.swipe_ready(1.0));
}

#[test]
fn test_bigfoot_rush_leap_weighting() {
    // Distance 10 sits inside both the rush and leap bands.
    let mut rng = rng(9);
    let mut rushes = 0;
    for _ in 0..1000 {
        let mut kit = BigfootKit::new(BigfootTuning::default());
        match kit.select_attack(10.0, 1.0, &mut rng).unwrap() {
            AttackRoutine::Rush(_) => rushes += 1,
            AttackRoutine::LeapSlam(_) => {}
            other => panic!("unexpected pick {}", other.name()),
        }
    }
    // Bias is 0.7; allow generous slack around the expectation.
    assert!((600..=800).contains(&rushes), "rushes = {}", rushes);
}

#[test]
fn test_bigfoot_nothing_eligible_returns_none() {
    let mut kit = BigfootKit::new(BigfootTuning::default());
    kit.swipe_cooldown = 10.0;
    kit.rush_cooldown = 10.0;
    kit.leap_cooldown = 10.0;
    assert!(!kit.can_attack(10.0));
    assert!(kit.select_attack(10.0, 1.0, &mut rng(2)).is_none());
}

#[test]
fn test_bigfoot_dead_zone_between_bands() {
    // Between swipe range (3) and rush min range (5) nothing is eligible.
    let kit = BigfootKit::new(BigfootTuning::default());
    assert!(!kit.can_attack(4.0));
}

// -----------------------------------------------------------------------------
// Mothman kit tests
// -----------------------------------------------------------------------------

#[test]
fn test_mothman_shriek_has_absolute_priority() {
    let mut kit = MothmanKit::new(MothmanTuning::default());
    let routine = kit.select_attack(5.0, 1.0, &mut rng(4)).unwrap();
    assert!(matches!(routine, AttackRoutine::Shriek(_)));
    assert!(kit.shriek_cooldown > 0.0);
}

#[test]
fn test_mothman_melee_bias_extremes() {
    let mut tuning = MothmanTuning::default();
    tuning.melee_bias = 1.0;
    let mut kit = MothmanKit::new(tuning);
    kit.shriek_cooldown = 100.0;
    let routine = kit.select_attack(5.0, 1.0, &mut rng(5)).unwrap();
    assert!(matches!(routine, AttackRoutine::Swoop(_)));

    let mut tuning = MothmanTuning::default();
    tuning.melee_bias = 0.0;
    let mut kit = MothmanKit::new(tuning);
    kit.shriek_cooldown = 100.0;
    let routine = kit.select_attack(5.0, 1.0, &mut rng(5)).unwrap();
    assert!(matches!(routine, AttackRoutine::Bolt(_)));
}

#[test]
fn test_mothman_bolt_only_beyond_swoop_range() {
    let mut kit = MothmanKit::new(MothmanTuning::default());
    kit.shriek_cooldown = 100.0;
    // Beyond swoop range (10) but inside bolt range (18).
    let routine = kit.select_attack(14.0, 1.0, &mut rng(6)).unwrap();
    assert!(matches!(routine, AttackRoutine::Bolt(_)));
}

#[test]
fn test_mothman_out_of_range_has_nothing() {
    let kit = MothmanKit::new(MothmanTuning::default());
    assert!(!kit.can_attack(50.0));
}

// -----------------------------------------------------------------------------
// Wendigo kit tests
// -----------------------------------------------------------------------------

#[test]
fn test_wendigo_summons_when_hurt() {
    let mut kit = WendigoKit::new(WendigoTuning::default());
    let routine = kit.select_attack(6.0, 0.5, &mut rng(7)).unwrap();
    assert!(matches!(routine, AttackRoutine::Summon(_)));
    // Cooldown armed; healthy fraction never summons.
    let mut kit = WendigoKit::new(WendigoTuning::default());
    let routine = kit.select_attack(6.0, 0.9, &mut rng(7)).unwrap();
    assert!(!matches!(routine, AttackRoutine::Summon(_)));
}

#[test]
fn test_wendigo_evades_when_crowded() {
    let mut kit = WendigoKit::new(WendigoTuning::default());
    let routine = kit.select_attack(1.5, 1.0, &mut rng(8)).unwrap();
    assert!(matches!(routine, AttackRoutine::Evade(_)));
}

#[test]
fn test_wendigo_mid_band_bias_extremes() {
    let mut tuning = WendigoTuning::default();
    tuning.ranged_bias = 1.0;
    let mut kit = WendigoKit::new(tuning);
    let routine = kit.select_attack(6.0, 1.0, &mut rng(10)).unwrap();
    assert!(matches!(routine, AttackRoutine::Bolt(_)));

    let mut tuning = WendigoTuning::default();
    tuning.ranged_bias = 0.0;
    let mut kit = WendigoKit::new(tuning);
    let routine = kit.select_attack(6.0, 1.0, &mut rng(10)).unwrap();
    assert!(matches!(routine, AttackRoutine::Rush(_)));
}

// -----------------------------------------------------------------------------
// Headless scenario tests
// -----------------------------------------------------------------------------

fn step(app: &mut App, ticks: usize) {
    for _ in 0..ticks {
        app.update();
    }
}

/// Content with every bigfoot attack disabled, for pure movement tests.
fn passive_content() -> BossContent {
    let mut content = BossContent::default();
    content.bigfoot.swipe.damage = 0.0;
    content.bigfoot.rush.damage = 0.0;
    content.bigfoot.leap.damage = 0.0;
    content
}

fn spawn_fight(app: &mut App, content: &BossContent, hunter_pos: Vec3, boss_pos: Vec3) -> (Entity, Entity) {
    let world = app.world_mut();
    let hunter = {
        let mut commands = world.commands();
        crate::hunter::spawn_hunter(&mut commands, &content.gameplay, hunter_pos)
    };
    let boss = {
        let mut commands = world.commands();
        crate::boss::spawn_bigfoot(&mut commands, content, boss_pos)
    };
    world.flush();
    (hunter, boss)
}

#[test]
fn test_boss_aggroes_into_chase_same_tick_window() {
    let mut app = crate::sim::headless_app(42);
    app.update();

    let content = passive_content();
    let (_hunter, boss) = spawn_fight(
        &mut app,
        &content,
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(10.0, 1.4, 0.0),
    );
    step(&mut app, 3);

    let agent = app.world().get::<BossAgent>(boss).unwrap();
    assert_eq!(agent.state, BossState::Chase);
}

#[test]
fn test_boss_leashes_back_to_roam() {
    let mut app = crate::sim::headless_app(42);
    app.update();

    let content = passive_content();
    let (hunter, boss) = spawn_fight(
        &mut app,
        &content,
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(10.0, 1.4, 0.0),
    );
    step(&mut app, 5);
    assert_eq!(
        app.world().get::<BossAgent>(boss).unwrap().state,
        BossState::Chase
    );

    // Teleport the hunter outside the leash.
    app.world_mut()
        .get_mut::<Transform>(hunter)
        .unwrap()
        .translation = Vec3::new(200.0, 1.0, 0.0);
    step(&mut app, 3);

    assert_eq!(
        app.world().get::<BossAgent>(boss).unwrap().state,
        BossState::Roam
    );
}

#[test]
fn test_swipe_deals_damage_exactly_once() {
    let mut app = crate::sim::headless_app(42);
    app.update();

    let mut content = BossContent::default();
    content.bigfoot.rush.damage = 0.0;
    content.bigfoot.leap.damage = 0.0;
    content.bigfoot.swipe.windup = 0.3;
    content.bigfoot.swipe.recover = 0.5;
    content.bigfoot.swipe.cooldown = 30.0;
    content.bigfoot.attack_lockout = 30.0;

    let (hunter, _boss) = spawn_fight(
        &mut app,
        &content,
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(2.0, 1.4, 0.0),
    );
    // Long enough for windup + strike + recovery, far too short for a second
    // swing past the 30s cooldown and lockout.
    step(&mut app, 80);

    let health = app.world().get::<Health>(hunter).unwrap();
    assert_eq!(health.current, health.max - content.bigfoot.swipe.damage);
}

#[test]
fn test_rush_timeout_whiffs_and_recovers() {
    let mut app = crate::sim::headless_app(42);
    app.update();

    let mut content = BossContent::default();
    content.bigfoot.swipe.damage = 0.0;
    content.bigfoot.leap.damage = 0.0;
    content.bigfoot.rush.speed = 2.0;
    content.bigfoot.rush.duration = 0.5;
    content.bigfoot.rush.rest = 0.3;
    content.bigfoot.rush.min_range = 3.0;
    content.bigfoot.rush.max_range = 30.0;
    content.bigfoot.rush.cooldown = 30.0;
    content.bigfoot.attack_lockout = 30.0;

    let (hunter, boss) = spawn_fight(
        &mut app,
        &content,
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(12.0, 1.4, 0.0),
    );
    step(&mut app, 4);
    assert!(app.world().get::<ActiveAttack>(boss).is_some());

    // 0.8s of routine plus slack; at 2 m/s from 12 m it can never connect.
    step(&mut app, 70);

    let health = app.world().get::<Health>(hunter).unwrap();
    assert_eq!(health.current, health.max);
    assert!(app.world().get::<ActiveAttack>(boss).is_none());

    // Recover settles for a single tick and the chase resumes while the
    // attack lockout is still running, so the boss pursues without swinging.
    let agent = app.world().get::<BossAgent>(boss).unwrap();
    assert_eq!(agent.state, BossState::Chase);
    assert!(agent.attack_lockout > 0.0);
}

#[test]
fn test_death_mid_attack_cancels_and_despawns() {
    let mut app = crate::sim::headless_app(42);
    app.update();

    let mut content = BossContent::default();
    content.bigfoot.swipe.damage = 0.0;
    content.bigfoot.leap.damage = 0.0;
    content.bigfoot.rush.speed = 1.0;
    content.bigfoot.rush.duration = 10.0;
    content.bigfoot.rush.min_range = 3.0;
    content.bigfoot.rush.max_range = 40.0;

    let (hunter, boss) = spawn_fight(
        &mut app,
        &content,
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(15.0, 1.4, 0.0),
    );
    step(&mut app, 4);
    assert!(app.world().get::<ActiveAttack>(boss).is_some());

    app.world_mut().write_message(DamageEvent {
        source: hunter,
        target: boss,
        amount: 100_000.0,
        knockback: Vec3::ZERO,
    });
    step(&mut app, 2);

    assert_eq!(
        app.world().get::<BossAgent>(boss).unwrap().state,
        BossState::Dead
    );
    assert!(app.world().get::<ActiveAttack>(boss).is_none());
    assert_eq!(
        *app.world().get::<CollisionLayers>(boss).unwrap(),
        CollisionLayers::NONE
    );

    // The corpse lingers for the despawn delay, then goes away.
    let delay_ticks = (content.gameplay.boss_despawn_delay * 64.0) as usize;
    step(&mut app, delay_ticks + 4);
    assert!(app.world().get_entity(boss).is_err());

    // Nothing hit the hunter through any of it.
    let health = app.world().get::<Health>(hunter).unwrap();
    assert_eq!(health.current, health.max);
}

#[test]
fn test_roaming_boss_stays_near_spawn_anchor() {
    let mut app = crate::sim::headless_app(42);
    app.update();

    let content = passive_content();
    let spawn = Vec3::new(10.0, 1.4, 10.0);
    // Hunter far outside aggro range; the boss just roams.
    let (_hunter, boss) = spawn_fight(&mut app, &content, Vec3::new(-45.0, 1.0, -45.0), spawn);

    step(&mut app, 64 * 20);

    let transform = app.world().get::<Transform>(boss).unwrap();
    let wander = Vec3::new(
        transform.translation.x - spawn.x,
        0.0,
        transform.translation.z - spawn.z,
    )
    .length();
    let params = &content.bigfoot.roam;
    assert!(
        wander <= params.roam_radius + 4.0,
        "boss wandered {} from its anchor",
        wander
    );
    assert!(
        matches!(
            app.world().get::<BossAgent>(boss).unwrap().state,
            BossState::Roam
        ),
        "boss should still be roaming"
    );
}

#[test]
fn test_avoidance_probes_along_facing_at_rest() {
    let mut app = crate::sim::headless_app(42);
    step(&mut app, 2);

    // Feet just south of the pillar at (8, 6), stationary, facing it.
    let origin = Vec3::new(8.0, 0.0, 3.2);
    let accel = app
        .world_mut()
        .run_system_once(move |spatial: SpatialQuery| {
            let avoid = Avoidance::from(&AvoidanceTuning::default());
            avoidance_accel(&spatial, origin, Vec3::ZERO, Vec3::Z, &avoid)
        })
        .unwrap();
    assert!(accel.z < 0.0, "expected a push off the pillar, got {:?}", accel);

    // With neither velocity nor facing there is nothing to probe along.
    let accel = app
        .world_mut()
        .run_system_once(move |spatial: SpatialQuery| {
            let avoid = Avoidance::from(&AvoidanceTuning::default());
            avoidance_accel(&spatial, origin, Vec3::ZERO, Vec3::ZERO, &avoid)
        })
        .unwrap();
    assert_eq!(accel, Vec3::ZERO);
}

#[test]
fn test_swipe_hits_a_single_target() {
    let mut app = crate::sim::headless_app(42);
    app.update();

    let mut content = BossContent::default();
    content.bigfoot.rush.damage = 0.0;
    content.bigfoot.leap.damage = 0.0;
    content.bigfoot.swipe.cooldown = 30.0;
    content.bigfoot.attack_lockout = 30.0;

    // Two hunters inside the same swing arc.
    let world = app.world_mut();
    let first = {
        let mut commands = world.commands();
        crate::hunter::spawn_hunter(&mut commands, &content.gameplay, Vec3::new(0.0, 1.0, 0.3))
    };
    let second = {
        let mut commands = world.commands();
        crate::hunter::spawn_hunter(&mut commands, &content.gameplay, Vec3::new(0.0, 1.0, -0.3))
    };
    let _boss = {
        let mut commands = world.commands();
        crate::boss::spawn_bigfoot(&mut commands, &content, Vec3::new(2.0, 1.4, 0.0))
    };
    world.flush();

    step(&mut app, 80);

    let a = app.world().get::<Health>(first).unwrap();
    let b = app.world().get::<Health>(second).unwrap();
    let dealt = (a.max - a.current) + (b.max - b.current);
    assert_eq!(dealt, content.bigfoot.swipe.damage, "one hit per swing");
}

#[test]
fn test_inverted_dwell_bounds_do_not_panic() {
    let mut app = crate::sim::headless_app(42);
    app.update();

    let mut content = passive_content();
    content.bigfoot.roam.dwell_min = 3.0;
    content.bigfoot.roam.dwell_max = 0.5;

    let (_hunter, boss) = spawn_fight(
        &mut app,
        &content,
        Vec3::new(-45.0, 1.0, -45.0),
        Vec3::new(10.0, 1.4, 10.0),
    );
    step(&mut app, 64 * 3);

    assert_eq!(
        app.world().get::<BossAgent>(boss).unwrap().state,
        BossState::Roam
    );
}

#[test]
fn test_hunter_with_mothman_gets_blinded_up_close() {
    let mut app = crate::sim::headless_app(42);
    app.update();

    let content = BossContent::default();
    let world = app.world_mut();
    let hunter = {
        let mut commands = world.commands();
        crate::hunter::spawn_hunter(&mut commands, &content.gameplay, Vec3::new(0.0, 1.0, 0.0))
    };
    let _mothman = {
        let mut commands = world.commands();
        crate::boss::spawn_mothman(&mut commands, &content, Vec3::new(4.0, 6.0, 0.0))
    };
    world.flush();

    // Shriek is in radius and off cooldown, so it is the mothman's first act.
    step(&mut app, 64);

    let status = app
        .world()
        .get::<crate::combat::StatusEffects>(hunter)
        .unwrap();
    assert!(status.is_blinded());
}
