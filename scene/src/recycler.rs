//! Fixed-path object recycling pool.
//!
//! A fixed set of scene objects spawn at one point, travel along +Z past
//! the viewer, and return to an idle queue once they cross the recycle
//! distance. A timer releases one idle slot per spawn interval. Slots are
//! addressed by index; the renderer owning the actual scene instances maps
//! indices to nodes.

use log::trace;
use nalgebra::Vector3;
use std::collections::VecDeque;

/// Number of pooled slots created up front.
pub const DEFAULT_POOL_SIZE: usize = 20;

/// Whether a checked-out slot is advancing along the path.
///
/// Carried explicitly on the slot rather than as ad-hoc metadata so the
/// pause/resume state is visible in the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// Holding position (or parked in the pool when not visible).
    Idle,
    /// Advancing along +Z every frame.
    Active,
}

/// One pooled scene object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub position: Vector3<f64>,
    /// Checked out of the pool and shown on screen.
    pub visible: bool,
    pub state: SlotState,
}

/// Movement and spawn cadence tunables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecyclerConfig {
    /// Units per second along +Z.
    pub movement_speed: f64,
    /// Seconds between automatic spawns.
    pub spawn_interval: f64,
    /// Distance past the spawn plane at which a slot is recycled.
    pub max_distance: f64,
    /// Where freshly spawned slots appear.
    pub spawn_position: Vector3<f64>,
}

impl Default for RecyclerConfig {
    fn default() -> Self {
        Self {
            movement_speed: 5.0,
            spawn_interval: 1.0,
            max_distance: 100.0,
            spawn_position: Vector3::new(-2.5, 0.0, -25.0),
        }
    }
}

/// Pool of fixed-path objects advanced once per frame.
#[derive(Debug, Clone)]
pub struct Recycler {
    config: RecyclerConfig,
    slots: Vec<Slot>,
    idle_queue: VecDeque<usize>,
    spawn_timer: f64,
}

impl Recycler {
    pub fn new(config: RecyclerConfig, pool_size: usize) -> Self {
        let slots = vec![
            Slot {
                position: config.spawn_position,
                visible: false,
                state: SlotState::Idle,
            };
            pool_size
        ];
        Self {
            config,
            slots,
            idle_queue: (0..pool_size).collect(),
            spawn_timer: 0.0,
        }
    }

    pub fn config(&self) -> &RecyclerConfig {
        &self.config
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Indices and positions of slots currently shown on screen.
    pub fn visible(&self) -> impl Iterator<Item = (usize, &Slot)> {
        self.slots.iter().enumerate().filter(|(_, s)| s.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.slots.iter().filter(|s| s.visible).count()
    }

    pub fn idle_pool_count(&self) -> usize {
        self.idle_queue.len()
    }

    /// Advance the pool by one frame: run the spawn timer, then move every
    /// visible active slot and recycle the ones past the cutoff.
    pub fn advance(&mut self, dt: f64) {
        self.spawn_timer += dt;
        if self.spawn_timer >= self.config.spawn_interval {
            self.spawn();
            self.spawn_timer = 0.0;
        }

        let cutoff = self.config.spawn_position.z + self.config.max_distance;
        for index in 0..self.slots.len() {
            let slot = &mut self.slots[index];
            if !slot.visible || slot.state != SlotState::Active {
                continue;
            }
            slot.position.z += self.config.movement_speed * dt;
            if slot.position.z > cutoff {
                self.recycle(index);
            }
        }
    }

    /// Check one slot out of the idle queue at the spawn position.
    ///
    /// Returns the slot index, or `None` when every slot is in flight.
    pub fn spawn(&mut self) -> Option<usize> {
        let index = self.idle_queue.pop_front()?;
        let slot = &mut self.slots[index];
        slot.visible = true;
        slot.position = self.config.spawn_position;
        slot.state = SlotState::Active;
        trace!("spawned slot {index}");
        Some(index)
    }

    fn recycle(&mut self, index: usize) {
        let slot = &mut self.slots[index];
        slot.visible = false;
        slot.state = SlotState::Idle;
        self.idle_queue.push_back(index);
        trace!("recycled slot {index}");
    }

    /// Resume movement on every visible slot.
    pub fn start_all(&mut self) {
        for slot in self.slots.iter_mut().filter(|s| s.visible) {
            slot.state = SlotState::Active;
        }
    }

    /// Freeze every visible slot in place; they stay on screen.
    pub fn stop_all(&mut self) {
        for slot in self.slots.iter_mut().filter(|s| s.visible) {
            slot.state = SlotState::Idle;
        }
    }

    /// Send every visible slot back to the spawn point, moving.
    pub fn reset_all(&mut self) {
        for slot in self.slots.iter_mut().filter(|s| s.visible) {
            slot.position = self.config.spawn_position;
            slot.state = SlotState::Active;
        }
    }
}

impl Default for Recycler {
    fn default() -> Self {
        Self::new(RecyclerConfig::default(), DEFAULT_POOL_SIZE)
    }
}
