/// Links whose paths depend on their peers and must be recomputed after
/// every finished batch of edits. One registry per surface.
#[derive(Clone, Debug)]
pub struct UpdateRegistry<H> {
    list: Vec<H>,
}

impl<H> Default for UpdateRegistry<H> {
    fn default() -> Self {
        Self { list: Vec::new() }
    }
}

impl<H: Copy + PartialEq> UpdateRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `handle` unless present. Returns true if it was added.
    pub fn register(&mut self, handle: H) -> bool {
        if self.contains(handle) {
            return false;
        }
        self.list.push(handle);
        true
    }

    /// Drop `handle`. Returns true if it was registered.
    pub fn unregister(&mut self, handle: H) -> bool {
        match self.list.iter().position(|h| *h == handle) {
            Some(idx) => {
                self.list.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, handle: H) -> bool {
        self.list.contains(&handle)
    }

    /// Registered handles in registration order.
    pub fn handles(&self) -> &[H] {
        &self.list
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Call `update` for every handle, in registration order. The list is
    /// snapshotted first so `update` may re-register its own handle.
    pub fn notify_batch_complete<F: FnMut(H)>(&self, mut update: F) -> usize {
        let snapshot = self.list.clone();
        tracing::debug!(count = snapshot.len(), "batch complete, updating jump-over links");
        for h in &snapshot {
            update(*h);
        }
        snapshot.len()
    }
}
