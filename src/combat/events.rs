//! Combat domain: combat-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

#[derive(Debug)]
pub struct DamageEvent {
    pub source: Entity,
    pub target: Entity,
    pub amount: f32,
    /// Impulse to apply alongside the damage. Zero means no shove.
    pub knockback: Vec3,
}

impl Message for DamageEvent {}

#[derive(Debug, Clone, Copy)]
pub enum StatusKind {
    Stun(f32),
    Blind(f32),
}

#[derive(Debug)]
pub struct StatusEvent {
    pub target: Entity,
    pub kind: StatusKind,
}

impl Message for StatusEvent {}

#[derive(Debug)]
pub struct DeathEvent {
    pub entity: Entity,
}

impl Message for DeathEvent {}

#[derive(Debug)]
pub struct BossDefeatedEvent {
    pub boss: Entity,
}

impl Message for BossDefeatedEvent {}
