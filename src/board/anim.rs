//! Per-cell placement animation state
//!
//! Each cell carries its own animation: a mark grows from nothing to full
//! size over ten fixed ticks. The driver advances every active animation by
//! [`ANIM_STEP`] per tick and deactivates it at a bound.

use std::time::Duration;

/// Fixed animation tick period (~60 updates/second)
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Progress advanced per tick; a mark fully appears in 10 ticks
pub const ANIM_STEP: f32 = 0.1;

/// Animation state owned by a single cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellAnim {
    /// Scale of the mark, in [0, 1]
    pub progress: f32,
    /// Whether the animation still advances on tick
    pub active: bool,
    /// +1 grows toward 1.0, -1 shrinks toward 0.0
    pub direction: i8,
}

impl Default for CellAnim {
    fn default() -> Self {
        Self {
            progress: 0.0,
            active: false,
            direction: 1,
        }
    }
}

impl CellAnim {
    /// State for a freshly placed mark: invisible, growing
    pub fn started() -> Self {
        Self {
            progress: 0.0,
            active: true,
            direction: 1,
        }
    }

    /// Advance one tick. Returns true if progress changed.
    ///
    /// Clamps to [0, 1] and deactivates when a bound is reached.
    pub fn step(&mut self) -> bool {
        if !self.active {
            return false;
        }

        self.progress += ANIM_STEP * self.direction as f32;
        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.active = false;
        } else if self.progress <= 0.0 {
            self.progress = 0.0;
            self.active = false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_mark_reaches_full_size_in_ten_ticks() {
        let mut anim = CellAnim::started();
        assert_eq!(anim.progress, 0.0);

        let mut prev = anim.progress;
        let mut ticks = 0;
        while anim.active {
            assert!(anim.step());
            assert!(anim.progress >= prev, "progress must be monotonic");
            prev = anim.progress;
            ticks += 1;
            assert!(ticks <= 10, "must finish within 10 ticks");
        }

        assert_eq!(ticks, 10);
        assert_eq!(anim.progress, 1.0);
    }

    #[test]
    fn finished_animation_stays_at_full_size() {
        let mut anim = CellAnim::started();
        while anim.active {
            anim.step();
        }
        assert!(!anim.step());
        assert_eq!(anim.progress, 1.0);
        assert!(!anim.active);
    }

    #[test]
    fn inactive_animation_does_not_advance() {
        let mut anim = CellAnim::default();
        assert!(!anim.step());
        assert_eq!(anim.progress, 0.0);
    }

    #[test]
    fn reverse_direction_shrinks_to_zero() {
        let mut anim = CellAnim {
            progress: 1.0,
            active: true,
            direction: -1,
        };
        let mut ticks = 0;
        while anim.active {
            anim.step();
            ticks += 1;
            assert!(ticks <= 10);
        }
        assert_eq!(anim.progress, 0.0);
    }
}
