use glint_geometry::MeshData;

/// How the index sequence is interpreted by a draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveMode {
    /// Consecutive index triples form triangles.
    Triangles,
    /// Consecutive index pairs form line segments.
    Lines,
}

/// One indexed draw call, ready for a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCommand {
    pub mode: PrimitiveMode,
    pub index_count: u32,
}

/// Anything that can execute draw commands. The caller is responsible for
/// having bound a program and the right geometry first; the device does not
/// validate that.
pub trait DrawDevice {
    fn submit(&mut self, command: DrawCommand);
}

/// The CPU half of a mesh: just enough to emit its draw command.
///
/// The GL backend pairs this with the uploaded buffers, so the command the
/// recorder sees in tests is the command the live context executes.
#[derive(Debug, Clone, Copy)]
pub struct MeshBinding {
    index_count: u32,
}

impl MeshBinding {
    pub fn new(mesh: &MeshData) -> Self {
        Self {
            index_count: mesh.index_count() as u32,
        }
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    pub fn command(&self, mode: PrimitiveMode) -> DrawCommand {
        DrawCommand {
            mode,
            index_count: self.index_count,
        }
    }

    /// Issue one indexed triangle-list draw.
    pub fn draw(&self, device: &mut impl DrawDevice) {
        device.submit(self.command(PrimitiveMode::Triangles));
    }

    /// Issue one indexed line-list draw (axis/debug meshes).
    pub fn draw_lines(&self, device: &mut impl DrawDevice) {
        device.submit(self.command(PrimitiveMode::Lines));
    }
}

/// Records submitted commands instead of executing them.
///
/// Test double for a live GL context. The trait is stable; a real backend
/// swaps in without changing consumers.
#[derive(Debug, Default)]
pub struct DrawRecorder {
    commands: Vec<DrawCommand>,
}

impl DrawRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn draw_call_count(&self) -> usize {
        self.commands.len()
    }

    pub fn total_indices(&self) -> u64 {
        self.commands.iter().map(|c| u64::from(c.index_count)).sum()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawDevice for DrawRecorder {
    fn submit(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_geometry::factory;

    #[test]
    fn triangle_draw_is_one_call_three_indices() {
        let mesh = factory::triangle();
        let binding = MeshBinding::new(&mesh);
        let mut recorder = DrawRecorder::new();

        binding.draw(&mut recorder);

        assert_eq!(recorder.draw_call_count(), 1);
        assert_eq!(
            recorder.commands()[0],
            DrawCommand {
                mode: PrimitiveMode::Triangles,
                index_count: 3,
            }
        );
    }

    #[test]
    fn axes_draw_lines_is_one_line_call() {
        let mesh = factory::axes(1.0);
        assert_eq!(mesh.vertex_count(), 6);
        let binding = MeshBinding::new(&mesh);
        let mut recorder = DrawRecorder::new();

        binding.draw_lines(&mut recorder);

        assert_eq!(recorder.draw_call_count(), 1);
        assert_eq!(recorder.commands()[0].mode, PrimitiveMode::Lines);
        assert_eq!(recorder.commands()[0].index_count, 6);
    }

    #[test]
    fn recorder_accumulates_and_clears() {
        let binding = MeshBinding::new(&factory::cube());
        let mut recorder = DrawRecorder::new();
        binding.draw(&mut recorder);
        binding.draw(&mut recorder);
        assert_eq!(recorder.draw_call_count(), 2);
        assert_eq!(recorder.total_indices(), 72);
        recorder.clear();
        assert_eq!(recorder.draw_call_count(), 0);
    }
}
