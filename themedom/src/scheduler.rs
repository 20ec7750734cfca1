//! Virtual clock with timers and animation-frame requests.
//!
//! Time only moves when the host advances it, which keeps debounce
//! behavior deterministic. `T` is the payload handed back to the owner
//! when a timer fires or a frame runs.

use std::time::Duration;

use crate::listener::OwnerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(u64);

#[derive(Debug)]
struct Timer<T> {
    id: TimerId,
    owner: OwnerId,
    deadline: Duration,
    payload: T,
}

#[derive(Debug)]
struct Frame<T> {
    id: FrameId,
    owner: OwnerId,
    payload: T,
}

#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    timers: Vec<Timer<T>>,
    frames: Vec<Frame<T>>,
    next_id: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            timers: Vec::new(),
            frames: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since the page was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // -------------------------------------------------------------------------
    // Timers
    // -------------------------------------------------------------------------

    pub fn set_timeout(&mut self, owner: OwnerId, delay: Duration, payload: T) -> TimerId {
        let id = TimerId(self.next_id());
        self.timers.push(Timer {
            id,
            owner,
            deadline: self.now + delay,
            payload,
        });
        id
    }

    /// Returns true if the timer was still pending.
    pub fn clear_timeout(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.iter().map(|t| t.deadline).min()
    }

    /// Remove and return the earliest timer due at or before `until`.
    ///
    /// The clock moves to the timer's deadline. Timers with equal deadlines
    /// fire in the order they were set.
    pub fn pop_due(&mut self, until: Duration) -> Option<(OwnerId, T)> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline <= until)
            .min_by_key(|(_, t)| (t.deadline, t.id))
            .map(|(i, _)| i)?;
        let timer = self.timers.remove(index);
        self.now = self.now.max(timer.deadline);
        Some((timer.owner, timer.payload))
    }

    /// Move the clock forward. Never moves backwards.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    // -------------------------------------------------------------------------
    // Animation frames
    // -------------------------------------------------------------------------

    pub fn request_frame(&mut self, owner: OwnerId, payload: T) -> FrameId {
        let id = FrameId(self.next_id());
        self.frames.push(Frame { id, owner, payload });
        id
    }

    pub fn cancel_frame(&mut self, id: FrameId) -> bool {
        let before = self.frames.len();
        self.frames.retain(|f| f.id != id);
        self.frames.len() != before
    }

    pub fn has_frames(&self) -> bool {
        !self.frames.is_empty()
    }

    /// Take the callbacks for the current frame.
    ///
    /// Requests made while these run belong to the next frame.
    pub fn take_frames(&mut self) -> Vec<(OwnerId, T)> {
        std::mem::take(&mut self.frames)
            .into_iter()
            .map(|f| (f.owner, f.payload))
            .collect()
    }

    /// Drop every timer and frame request of an owner.
    pub fn cancel_owner(&mut self, owner: OwnerId) -> usize {
        let before = self.timers.len() + self.frames.len();
        self.timers.retain(|t| t.owner != owner);
        self.frames.retain(|f| f.owner != owner);
        before - self.timers.len() - self.frames.len()
    }
}
