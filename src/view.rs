/// Presentation toggles driven by one-shot actions.
///
/// Holding a key does not repeat the action: only activation edges reach
/// these methods.
#[derive(Clone, Debug, PartialEq)]
pub struct View {
    camera_count: usize,
    camera: usize,
    wireframe: bool,
}

impl View {
    /// `camera_count` fixed cameras, the first one active, solid shading.
    pub fn new(camera_count: usize) -> Self {
        View {
            camera_count,
            camera: 0,
            wireframe: false,
        }
    }

    /// Index of the active camera.
    pub fn camera(&self) -> usize {
        self.camera
    }

    /// Number of selectable cameras.
    pub fn camera_count(&self) -> usize {
        self.camera_count
    }

    /// Whether materials render as wireframe.
    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    /// Make camera `index` active. Out of range indices are ignored.
    pub fn switch_camera(
        &mut self,
        index: usize,
    ) -> bool {
        if index >= self.camera_count {
            warn!("No camera {} ({} available)", index, self.camera_count);
            return false;
        }
        debug!("Switching to camera {}", index);
        self.camera = index;
        true
    }

    /// Flip wireframe rendering, returning the new state.
    pub fn toggle_wireframe(&mut self) -> bool {
        self.wireframe = !self.wireframe;
        debug!("Wireframe {}", if self.wireframe { "on" } else { "off" });
        self.wireframe
    }
}
