//! Refresh-aligned frame scheduling

/// One-shot callback run before the next repaint
pub type FrameCallback = Box<dyn FnOnce()>;

/// Opaque handle to a scheduled frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(u64);

impl FrameHandle {
    /// Wrap a raw platform handle
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw platform handle
    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

/// The environment's "run once before next repaint" primitive
///
/// On the web this is `requestAnimationFrame`. Implementations should defer
/// the callback to a later turn of the event loop.
pub trait FrameScheduler {
    /// Schedule `callback` for the next display refresh
    fn request_frame(&self, callback: FrameCallback) -> FrameHandle;

    /// Cancel a frame that has not run yet
    ///
    /// Cancelling a frame that already ran or was already cancelled is a no-op.
    fn cancel_frame(&self, handle: FrameHandle);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_handle_raw_roundtrip() {
        let handle = FrameHandle::from_raw(42);
        assert_eq!(handle.to_raw(), 42);
        assert!(FrameHandle::from_raw(1) < FrameHandle::from_raw(2));
    }
}
