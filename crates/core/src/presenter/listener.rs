use super::traits::Board;
use super::types::KeyListenerId;

/// A document-level key listener held for the length of one edit session.
///
/// Acquired when a presenter enters edit mode and consumed by
/// [`release`](Self::release) on every way out, so a presenter can never
/// hold two listeners at once.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a key listener that is dropped without release stays registered"]
pub struct KeyListenerGuard {
    id: KeyListenerId,
}

impl KeyListenerGuard {
    pub fn acquire(board: &mut dyn Board) -> Self {
        let id = board.add_key_listener();
        tracing::trace!(listener = id.get(), "Key listener added");
        Self { id }
    }

    pub fn id(&self) -> KeyListenerId {
        self.id
    }

    pub fn release(self, board: &mut dyn Board) {
        tracing::trace!(listener = self.id.get(), "Key listener removed");
        board.remove_key_listener(self.id);
    }
}
