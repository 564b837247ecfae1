//! Walk data type shared by the fold engine and compiled plans.

/// One maximal vertex sequence traversed from a root.
///
/// `complete` distinguishes how the walk ended: `true` means the last vertex
/// is a true sink and the walk contributes a result; `false` means the walk
/// was cut because its last vertex re-entered an active ancestor (the
/// combiner still ran for that final extension, but nothing is recorded).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Walk<V> {
    pub vertices: Vec<V>,
    pub complete: bool,
}

impl<V> Walk<V> {
    /// Walk length in vertices (always at least 1: the root).
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn last(&self) -> Option<&V> {
        self.vertices.last()
    }
}
