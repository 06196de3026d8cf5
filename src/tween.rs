/// The animation primitive: interpolates the document scroll offset between two
/// positions over a fixed duration.
///
/// The controller samples it with the adapter-supplied clock (`now_ms`); nothing here
/// blocks or owns a timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: u64,
    pub to: u64,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: u64, to: u64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            easing,
        }
    }

    /// A zero-duration tween is done immediately.
    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    fn progress(&self, now_ms: u64) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Returns the interpolated scroll offset at `now_ms`.
    ///
    /// The eased fraction is applied to the integer span, so a finished tween lands on
    /// `to` exactly, even for offsets beyond f32 precision.
    pub fn sample(&self, now_ms: u64) -> u64 {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            return self.to;
        }
        let eased = self.easing.sample(t);

        if self.to >= self.from {
            let span = (self.to - self.from) as f32;
            self.from.saturating_add((span * eased) as u64)
        } else {
            let span = (self.from - self.to) as f32;
            self.from.saturating_sub((span * eased) as u64)
        }
    }

    /// Redirects an in-flight animation toward a new destination, starting from the
    /// currently sampled position. This is the collision behavior for overlapping
    /// clicks: last one wins, no completion fires for the superseded run.
    pub fn retarget(&mut self, now_ms: u64, new_to: u64, duration_ms: u64) {
        let cur = self.sample(now_ms);
        *self = Self::new(cur, new_to, now_ms, duration_ms, self.easing);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    /// The default curve, close to a browser's standard ease-in-out.
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::SmoothStep
    }
}
