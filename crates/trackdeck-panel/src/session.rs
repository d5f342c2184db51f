//! Panel session — the explicitly passed host context.

use trackdeck_timeline::{Project, Sequence};

use crate::error::{PanelError, Result};

/// Mutable handle to the host project graph, threaded through every
/// operation. Nothing is cached between calls; each operation re-reads
/// current state.
pub struct Session<'p> {
    project: &'p mut Project,
}

impl<'p> Session<'p> {
    pub fn new(project: &'p mut Project) -> Self {
        Self { project }
    }

    pub fn project(&self) -> &Project {
        self.project
    }

    pub fn project_mut(&mut self) -> &mut Project {
        self.project
    }

    /// The active sequence, or the error every sequence-bound operation
    /// reports when the project has none.
    pub fn sequence(&self) -> Result<&Sequence> {
        self.project
            .active_sequence()
            .ok_or(PanelError::NoActiveSequence)
    }

    /// Mutable variant of [`Session::sequence`].
    pub fn sequence_mut(&mut self) -> Result<&mut Sequence> {
        self.project
            .active_sequence_mut()
            .ok_or(PanelError::NoActiveSequence)
    }
}
