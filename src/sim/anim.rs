//! Tick-driven frame animations (thrust flame, explosion)

use super::object::FloatingObject;

/// A timed frame sequence attached to a body
///
/// Frames are indexed by elapsed ticks: `(now - start) / frame_ticks`. Looping
/// animations wrap around; one-shot animations yield nothing once past the
/// last frame, which is how the explosion signals it is done.
#[derive(Debug, Clone)]
pub struct Anim {
    pub object: FloatingObject,
    /// Tick the animation started on (`None` = not playing)
    pub start_tick: Option<u64>,
    pub frame_count: usize,
    pub looping: bool,
}

impl Anim {
    pub fn new(frame_count: usize, looping: bool) -> Self {
        Self {
            object: FloatingObject::default(),
            start_tick: None,
            frame_count,
            looping,
        }
    }

    pub fn start(&mut self, tick: u64) {
        self.start_tick = Some(tick);
    }

    pub fn stop(&mut self) {
        self.start_tick = None;
    }

    pub fn is_playing(&self) -> bool {
        self.start_tick.is_some()
    }

    /// Frame to show at tick `now`, if any
    pub fn frame_index(&self, now: u64, frame_ticks: u64) -> Option<usize> {
        let start = self.start_tick?;
        if now < start || self.frame_count == 0 {
            return None;
        }

        let index = ((now - start) / frame_ticks.max(1)) as usize;
        if self.looping {
            Some(index % self.frame_count)
        } else if index < self.frame_count {
            Some(index)
        } else {
            None
        }
    }

    /// One-shot animation that has run past its last frame
    pub fn is_finished(&self, now: u64, frame_ticks: u64) -> bool {
        !self.looping && self.is_playing() && self.frame_index(now, frame_ticks).is_none()
    }

    /// Follow a body's position and heading
    pub fn sync_to(&mut self, body: &FloatingObject) {
        self.object.pos = body.pos;
        self.object.angle = body.angle;
        self.object.vel = body.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    const F: u64 = 5;

    #[test]
    fn test_not_started_has_no_frame() {
        let anim = Anim::new(3, true);
        assert_eq!(anim.frame_index(100, F), None);
        assert!(!anim.is_finished(100, F));
    }

    #[test]
    fn test_looping_wraps() {
        let mut anim = Anim::new(3, true);
        anim.start(40);
        for k in 0..20u64 {
            assert_eq!(anim.frame_index(40 + k * F, F), Some((k % 3) as usize));
        }
        // Mid-frame ticks hold the current frame
        assert_eq!(anim.frame_index(40 + F + 2, F), Some(1));
    }

    #[test]
    fn test_one_shot_finishes() {
        let mut anim = Anim::new(6, false);
        anim.start(10);
        assert_eq!(anim.frame_index(10, F), Some(0));
        assert_eq!(anim.frame_index(10 + 6 * F - 1, F), Some(5));
        assert_eq!(anim.frame_index(10 + 6 * F, F), None);
        assert!(anim.is_finished(10 + 6 * F, F));
        assert!(anim.is_finished(10_000, F));
    }

    #[test]
    fn test_before_start_has_no_frame() {
        let mut anim = Anim::new(2, true);
        anim.start(50);
        assert_eq!(anim.frame_index(49, F), None);
    }

    #[test]
    fn test_sync_to_body() {
        let mut anim = Anim::new(1, true);
        let body = FloatingObject {
            angle: 1.0,
            pos: DVec2::new(5.0, 6.0),
            vel: DVec2::new(1.0, 0.0),
        };
        anim.sync_to(&body);
        assert_eq!(anim.object, body);
    }
}
