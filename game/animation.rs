//! Cycling through a fixed number of animation frames.

#[derive(Debug, Clone,Copy, PartialEq,Eq)]
pub struct Animation {
    pub frame_count: u32,
    /// how many ticks each frame is shown for
    pub ticks_per_frame: u32,
}

impl Animation {
    /// Ticks until the animation repeats, `None` if it would overflow.
    pub fn period(&self) -> Option<u32> {
        self.frame_count.checked_mul(self.ticks_per_frame)
    }

    pub fn frame_index(&self,  count: u32) -> u32 {
        (count / self.ticks_per_frame) % self.frame_count
    }
}

/// Counts ticks, wrapping after a full cycle so it never overflows.
#[derive(Debug, Clone,Copy, Default, PartialEq,Eq)]
pub struct FrameCounter {
    count: u32,
}

impl FrameCounter {
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn advance(&mut self,  animation: &Animation) {
        let period = animation.period().unwrap_or(u32::MAX);
        self.count = (self.count + 1) % period;
    }
}
