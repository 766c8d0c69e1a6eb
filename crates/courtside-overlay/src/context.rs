use courtside_detect::Frame;

/// Dimensions of the render surface, in display points.
///
/// Sampled once per layout pass by the owning screen. The pipeline never
/// caches a copy across frames; a `ViewState` snapshot is re-read for
/// every frame so device rotation and window resizes take effect on the
/// very next frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    pub width: f32,
    pub height: f32,
}

impl DisplayMetrics {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// False until layout has produced a real surface size.
    pub fn is_ready(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Which physical camera feeds the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraFacing {
    Front,
    Back,
}

impl CameraFacing {
    /// Front-facing previews are mirrored on screen while the detector
    /// reports non-mirrored sensor coordinates, so front capture needs a
    /// horizontal flip during normalization.
    pub fn is_mirrored(&self) -> bool {
        matches!(self, CameraFacing::Front)
    }
}

/// UI-owned state the producer needs for each frame: current display
/// size, camera facing, and whether ingestion should run at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub display: DisplayMetrics,
    pub facing: CameraFacing,
    /// The ingestion gate. When false (screen idle, not recording or
    /// observing), detectors are not invoked at all.
    pub active: bool,
}

impl ViewState {
    pub fn new(display: DisplayMetrics, facing: CameraFacing) -> Self {
        Self {
            display,
            facing,
            active: true,
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// The explicit per-frame parameter bundle handed to normalization.
///
/// Captured once per frame invocation from the frame handle and the
/// current `ViewState`; there is no ambient or global camera state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Native sensor frame dimensions, pre-rotation.
    pub frame_width: u32,
    pub frame_height: u32,
    pub display: DisplayMetrics,
    pub facing: CameraFacing,
    pub active: bool,
}

impl FrameContext {
    pub fn new(
        frame_width: u32,
        frame_height: u32,
        display: DisplayMetrics,
        facing: CameraFacing,
    ) -> Self {
        Self {
            frame_width,
            frame_height,
            display,
            facing,
            active: true,
        }
    }

    /// Snapshot the context for one frame.
    pub fn for_frame(frame: &dyn Frame, view: &ViewState) -> Self {
        Self {
            frame_width: frame.width(),
            frame_height: frame.height(),
            display: view.display,
            facing: view.facing,
            active: view.active,
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}
