use glam::Vec3;

/// Fixed flight time between scene endpoints.
pub const TRANSITION_DURATION_MS: f64 = 2000.0;

/// Symmetric cubic ease: accelerate over the first half, decelerate over the
/// second. Maps 0 to 0, 0.5 to 0.5 and 1 to 1.
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// A scene's configured camera pose: eye position and look-at target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraEndpoint {
    pub position: Vec3,
    pub target: Vec3,
}

#[derive(Clone, Copy, Debug)]
struct Transition {
    start: CameraEndpoint,
    end: CameraEndpoint,
    started_at_ms: f64,
}

/// Owns the interpolated camera pose. Single writer: the frame loop calls
/// `retarget` when the active scene changes and `tick` every frame.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub position: Vec3,
    pub target: Vec3,
    transition: Option<Transition>,
}

impl CameraRig {
    /// Rig resting at `endpoint` with no transition in flight.
    pub fn at(endpoint: CameraEndpoint) -> Self {
        Self {
            position: endpoint.position,
            target: endpoint.target,
            transition: None,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Where the rig will settle: the in-flight destination, or the current
    /// pose when idle.
    pub fn destination(&self) -> CameraEndpoint {
        match &self.transition {
            Some(t) => t.end,
            None => CameraEndpoint {
                position: self.position,
                target: self.target,
            },
        }
    }

    /// Begin a transition toward `end`.
    ///
    /// A transition already heading there is left alone. Otherwise the new
    /// transition starts from the current (possibly mid-flight) pose, so a
    /// rapid double-scroll never makes the camera jump back to the previous
    /// scene's endpoint.
    pub fn retarget(&mut self, end: CameraEndpoint, now_ms: f64) {
        if self.destination() == end {
            return;
        }
        self.transition = Some(Transition {
            start: CameraEndpoint {
                position: self.position,
                target: self.target,
            },
            end,
            started_at_ms: now_ms,
        });
    }

    /// Advance the interpolation. On completion the pose is assigned the
    /// destination endpoint exactly; no residual floating error is left.
    pub fn tick(&mut self, now_ms: f64) {
        let Some(t) = self.transition else {
            return;
        };
        let raw = ((now_ms - t.started_at_ms) / TRANSITION_DURATION_MS).clamp(0.0, 1.0) as f32;
        if raw >= 1.0 {
            self.position = t.end.position;
            self.target = t.end.target;
            self.transition = None;
            return;
        }
        let eased = ease_in_out_cubic(raw);
        self.position = t.start.position.lerp(t.end.position, eased);
        self.target = t.start.target.lerp(t.end.target, eased);
    }
}
