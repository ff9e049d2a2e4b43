use core::any::Any;

use crate::coords::Vec2;
use crate::error::{MemberError, PositionError, StageError};
use crate::render::Canvas;
use crate::time::FrameTime;

use super::{Capabilities, DrawErrorPolicy, MemberId, Scene, SceneMember, StageConfig};

struct Entry {
    member: Box<dyn SceneMember>,
    caps: Capabilities,
}

struct Slot {
    generation: u32,
    entry: Option<Entry>,
}

/// Traversal phase a failure happened in.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    Update,
    Draw,
}

/// A member failure recorded instead of aborting the frame.
#[derive(Debug)]
pub struct MemberFailure {
    pub member: MemberId,
    pub phase: Phase,
    pub error: MemberError,
}

/// Outcome of one [`Stage::update`] or [`Stage::draw`] traversal.
#[derive(Debug, Default)]
pub struct FrameReport {
    /// Members whose hook was invoked (duplicated entries count once per occurrence).
    pub visited: usize,
    pub failures: Vec<MemberFailure>,
}

impl FrameReport {
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Z-ordered scene members with per-frame dispatch.
///
/// Ordering rules:
/// - index 0 is drawn first (back-most), the last entry is drawn last (front-most)
/// - `add` appends, so traversal order equals insertion order until reordered
/// - `move_to_front` / `move_to_back` remove every occurrence before reinserting once
///
/// Performance characteristics:
/// - `add` is O(1) amortized
/// - reordering is O(n); it is caller-driven and not expected per frame
/// - `update` / `draw` walk the whole order every frame, no dirty tracking
///
/// ```rust,ignore
/// let mut stage = Stage::new();
/// let sun = stage.add(shapes::circle());
/// let earth = stage.add(shapes::circle());
/// if let Some(earth) = stage.get_mut::<Styled<Circle>>(earth) {
///     earth.set_location(Orbiter::new(sun).with_radius(120.0));
/// }
///
/// // once per frame:
/// let frame = clock.tick();
/// stage.update(&frame);
/// stage.draw(&mut canvas, &frame)?;
/// ```
#[derive(Default)]
pub struct Stage {
    slots: Vec<Slot>,
    free: Vec<u32>,
    order: Vec<MemberId>,
    live: usize,
    config: StageConfig,
}

impl Stage {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StageConfig) -> Self {
        Self { config, ..Self::default() }
    }

    #[inline]
    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    #[inline]
    pub fn config_mut(&mut self) -> &mut StageConfig {
        &mut self.config
    }

    /// Number of distinct members held.
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Members in paint order (back-to-front), including duplicate occurrences.
    #[inline]
    pub fn order(&self) -> &[MemberId] {
        &self.order
    }

    #[inline]
    pub fn contains(&self, id: MemberId) -> bool {
        self.entry(id).is_some()
    }

    // ── membership ────────────────────────────────────────────────────────

    /// Appends `member` as the front-most entry and returns its handle.
    pub fn add<M: SceneMember>(&mut self, member: M) -> MemberId {
        self.add_boxed(Box::new(member))
    }

    /// Like [`add`](Self::add) for members that are already boxed.
    pub fn add_boxed(&mut self, member: Box<dyn SceneMember>) -> MemberId {
        let caps = member.capabilities();
        let entry = Entry { member, caps };

        let id = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.entry = Some(entry);
                MemberId::new(index, slot.generation)
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot { generation: 0, entry: Some(entry) });
                MemberId::new(index, 0)
            }
        };

        self.order.push(id);
        self.live += 1;
        log::debug!("stage: added {id} (update={}, draw={})", caps.update, caps.draw);
        id
    }

    /// Appends another occurrence of an existing member (front-most).
    ///
    /// The member is then visited once per occurrence each frame. Returns
    /// `false` if `id` is not on the stage.
    pub fn add_again(&mut self, id: MemberId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.order.push(id);
        log::debug!("stage: stacked another occurrence of {id}");
        true
    }

    /// Removes the member and every occurrence of it from the order.
    ///
    /// Handles to the removed member stop resolving; followers targeting it
    /// fall back to their stored coordinate.
    pub fn remove(&mut self, id: MemberId) -> Option<Box<dyn SceneMember>> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let entry = slot.entry.take()?;
        slot.generation = slot.generation.wrapping_add(1);

        self.free.push(id.index);
        self.order.retain(|&o| o != id);
        self.live -= 1;
        log::debug!("stage: removed {id}");
        Some(entry.member)
    }

    /// Returns the member as a trait object.
    pub fn member(&self, id: MemberId) -> Option<&dyn SceneMember> {
        self.entry(id).map(|e| &*e.member)
    }

    /// Capabilities captured when the member was added.
    pub fn capabilities(&self, id: MemberId) -> Option<Capabilities> {
        self.entry(id).map(|e| e.caps)
    }

    /// Downcasts the member to its concrete type.
    pub fn get<T: SceneMember>(&self, id: MemberId) -> Option<&T> {
        let member: &dyn Any = &*self.entry(id)?.member;
        member.downcast_ref::<T>()
    }

    /// Downcasts the member to its concrete type for configuration.
    ///
    /// Chainable setters on the returned reference take effect on the next frame.
    pub fn get_mut<T: SceneMember>(&mut self, id: MemberId) -> Option<&mut T> {
        let member: &mut dyn Any = &mut *self.entry_mut(id)?.member;
        member.downcast_mut::<T>()
    }

    // ── z-order ───────────────────────────────────────────────────────────

    /// Removes every occurrence of `id` and appends it once (front-most).
    ///
    /// No-op if `id` is not in the order.
    pub fn move_to_front(&mut self, id: MemberId) {
        if self.take_all(id) {
            self.order.push(id);
            log::debug!("stage: moved {id} to front");
        }
    }

    /// Removes every occurrence of `id` and inserts it once at index 0 (back-most).
    ///
    /// No-op if `id` is not in the order.
    pub fn move_to_back(&mut self, id: MemberId) {
        if self.take_all(id) {
            self.order.insert(0, id);
            log::debug!("stage: moved {id} to back");
        }
    }

    /// Moves the first occurrence of `id` one step towards the front.
    ///
    /// No-op if it is already front-most or absent.
    pub fn move_forward(&mut self, id: MemberId) {
        let Some(i) = self.first_index(id) else { return };
        if i + 1 < self.order.len() {
            self.order.swap(i, i + 1);
            log::debug!("stage: moved {id} forward to {}", i + 1);
        }
    }

    /// Moves the first occurrence of `id` one step towards the back.
    ///
    /// No-op if it is already back-most or absent.
    pub fn move_backward(&mut self, id: MemberId) {
        let Some(i) = self.first_index(id) else { return };
        if i > 0 {
            self.order.swap(i, i - 1);
            log::debug!("stage: moved {id} backward to {}", i - 1);
        }
    }

    // ── frame dispatch ────────────────────────────────────────────────────

    /// Calls `update` on every member that declared it, in paint order.
    ///
    /// A failing member is logged and recorded; later members are still visited.
    pub fn update(&mut self, frame: &FrameTime) -> FrameReport {
        let mut report = FrameReport::default();

        for i in 0..self.order.len() {
            let id = self.order[i];
            let Some(entry) = self.entry_mut(id) else { continue };
            if !entry.caps.update {
                continue;
            }

            report.visited += 1;
            if let Err(error) = entry.member.update(frame).map_err(|e| e.attributed_to(id)) {
                log::warn!("stage: update of {id} failed: {error}");
                report.failures.push(MemberFailure { member: id, phase: Phase::Update, error });
            }
        }

        log::trace!(
            "stage: frame {} updated {} members ({} failed)",
            frame.frame_index,
            report.visited,
            report.failures.len()
        );
        report
    }

    /// Calls `draw` on every member that declared it, back to front.
    ///
    /// Failures follow [`StageConfig::on_draw_error`]. Styled members restore
    /// the canvas paint state before a failure leaves them, so a skipped
    /// member never leaks state into the next one.
    pub fn draw(&self, canvas: &mut dyn Canvas, frame: &FrameTime) -> Result<FrameReport, StageError> {
        let scene = Scene::new(self, frame);
        let mut report = FrameReport::default();

        for &id in &self.order {
            let Some(entry) = self.entry(id) else { continue };
            if !entry.caps.draw {
                continue;
            }

            report.visited += 1;
            if let Err(error) = entry.member.draw(canvas, &scene).map_err(|e| e.attributed_to(id)) {
                match self.config.on_draw_error {
                    DrawErrorPolicy::Abort => {
                        log::warn!("stage: draw of {id} failed, aborting frame: {error}");
                        return Err(StageError::Draw { member: id, source: error });
                    }
                    DrawErrorPolicy::Skip => {
                        log::warn!("stage: draw of {id} failed, skipping: {error}");
                        report.failures.push(MemberFailure { member: id, phase: Phase::Draw, error });
                    }
                }
            }
        }

        log::trace!(
            "stage: frame {} drew {} members ({} failed)",
            frame.frame_index,
            report.visited,
            report.failures.len()
        );
        Ok(report)
    }

    // ── positions ─────────────────────────────────────────────────────────

    /// Snapshot view used to resolve positions at `frame`.
    #[inline]
    pub fn scene<'a>(&'a self, frame: &'a FrameTime) -> Scene<'a> {
        Scene::new(self, frame)
    }

    /// Current position of `id`, recomputed from its targets at `frame`.
    pub fn position_of(&self, id: MemberId, frame: &FrameTime) -> Result<Option<Vec2>, PositionError> {
        self.scene(frame).position_of(id)
    }

    /// Moves a member with a stored location.
    ///
    /// Returns `false` for absent members and for derived (follow/orbit) locations,
    /// which are left untouched.
    pub fn try_set_position(&mut self, id: MemberId, to: Vec2) -> bool {
        self.entry_mut(id).is_some_and(|e| e.member.try_set_position(to))
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn entry(&self, id: MemberId) -> Option<&Entry> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.entry.as_ref()
    }

    fn entry_mut(&mut self, id: MemberId) -> Option<&mut Entry> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.entry.as_mut()
    }

    #[inline]
    fn first_index(&self, id: MemberId) -> Option<usize> {
        self.order.iter().position(|&o| o == id)
    }

    /// Removes every occurrence of `id` from the order. Returns whether any was found.
    fn take_all(&mut self, id: MemberId) -> bool {
        let before = self.order.len();
        self.order.retain(|&o| o != id);
        self.order.len() != before
    }
}

impl core::fmt::Debug for Stage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Stage")
            .field("order", &self.order)
            .field("live", &self.live)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
