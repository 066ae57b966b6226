//! Frame throttle
//!
//! Coalesces a burst of scroll events into at most one evaluation per
//! display refresh. The evaluation reads the scroll position when the frame
//! runs, not when the first event of the burst fired.

use std::cell::Cell;

use scroll_nav_platform::{FrameCallback, FrameHandle, FrameScheduler};

/// At most one pending frame at a time
#[derive(Debug, Default)]
pub struct FrameThrottle {
    /// Set from the moment a frame is requested until it starts running
    requested: Cell<bool>,
    /// Handle for cancellation; absent while the scheduler call is in flight
    handle: Cell<Option<FrameHandle>>,
}

impl FrameThrottle {
    /// Create an idle throttle
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `callback` unless a frame is already pending
    ///
    /// Returns `true` if a new frame was requested. The callback must call
    /// [`begin_frame`](Self::begin_frame) before it evaluates, so events
    /// arriving during the evaluation can schedule the next frame.
    pub fn notify<S>(&self, scheduler: &S, callback: FrameCallback) -> bool
    where
        S: FrameScheduler + ?Sized,
    {
        if self.requested.get() {
            return false;
        }

        self.requested.set(true);
        let handle = scheduler.request_frame(callback);

        // A scheduler that runs the callback synchronously has already
        // called begin_frame; there is nothing left to cancel.
        if self.requested.get() {
            self.handle.set(Some(handle));
        }
        true
    }

    /// Mark the pending frame as running
    pub fn begin_frame(&self) {
        self.requested.set(false);
        self.handle.set(None);
    }

    /// Cancel the pending frame, if any
    ///
    /// Returns `true` if a frame was cancelled.
    pub fn cancel<S>(&self, scheduler: &S) -> bool
    where
        S: FrameScheduler + ?Sized,
    {
        self.requested.set(false);
        match self.handle.take() {
            Some(handle) => {
                scheduler.cancel_frame(handle);
                true
            }
            None => false,
        }
    }

    /// Whether a frame is scheduled but has not started
    pub fn is_pending(&self) -> bool {
        self.requested.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Queues callbacks until `flush`
    #[derive(Default)]
    struct QueueScheduler {
        next: Cell<u64>,
        queue: RefCell<Vec<(FrameHandle, FrameCallback)>>,
        cancelled: RefCell<Vec<FrameHandle>>,
    }

    impl QueueScheduler {
        fn flush(&self) {
            let frames = std::mem::take(&mut *self.queue.borrow_mut());
            for (_, callback) in frames {
                callback();
            }
        }
    }

    impl FrameScheduler for QueueScheduler {
        fn request_frame(&self, callback: FrameCallback) -> FrameHandle {
            let handle = FrameHandle::from_raw(self.next.get());
            self.next.set(self.next.get() + 1);
            self.queue.borrow_mut().push((handle, callback));
            handle
        }

        fn cancel_frame(&self, handle: FrameHandle) {
            self.queue.borrow_mut().retain(|(h, _)| *h != handle);
            self.cancelled.borrow_mut().push(handle);
        }
    }

    /// Runs callbacks immediately
    struct ImmediateScheduler;

    impl FrameScheduler for ImmediateScheduler {
        fn request_frame(&self, callback: FrameCallback) -> FrameHandle {
            callback();
            FrameHandle::from_raw(0)
        }

        fn cancel_frame(&self, _handle: FrameHandle) {
            panic!("nothing to cancel");
        }
    }

    fn counting_frame(throttle: &Rc<FrameThrottle>, runs: &Rc<Cell<u32>>) -> FrameCallback {
        let throttle = throttle.clone();
        let runs = runs.clone();
        Box::new(move || {
            throttle.begin_frame();
            runs.set(runs.get() + 1);
        })
    }

    #[test]
    fn test_burst_coalesces_into_one_frame() {
        let scheduler = QueueScheduler::default();
        let throttle = Rc::new(FrameThrottle::new());
        let runs = Rc::new(Cell::new(0));

        assert!(throttle.notify(&scheduler, counting_frame(&throttle, &runs)));
        for _ in 0..50 {
            assert!(!throttle.notify(&scheduler, counting_frame(&throttle, &runs)));
        }
        assert!(throttle.is_pending());
        assert_eq!(scheduler.queue.borrow().len(), 1);

        scheduler.flush();
        assert_eq!(runs.get(), 1);
        assert!(!throttle.is_pending());
    }

    #[test]
    fn test_next_burst_schedules_again() {
        let scheduler = QueueScheduler::default();
        let throttle = Rc::new(FrameThrottle::new());
        let runs = Rc::new(Cell::new(0));

        throttle.notify(&scheduler, counting_frame(&throttle, &runs));
        scheduler.flush();
        assert!(throttle.notify(&scheduler, counting_frame(&throttle, &runs)));
        scheduler.flush();

        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn test_cancel_pending_frame() {
        let scheduler = QueueScheduler::default();
        let throttle = Rc::new(FrameThrottle::new());
        let runs = Rc::new(Cell::new(0));

        throttle.notify(&scheduler, counting_frame(&throttle, &runs));
        assert!(throttle.cancel(&scheduler));
        assert!(!throttle.is_pending());

        scheduler.flush();
        assert_eq!(runs.get(), 0);
        assert_eq!(scheduler.cancelled.borrow().len(), 1);
    }

    #[test]
    fn test_cancel_without_pending_is_noop() {
        let scheduler = QueueScheduler::default();
        let throttle = FrameThrottle::new();

        assert!(!throttle.cancel(&scheduler));
        assert!(!throttle.cancel(&scheduler));
        assert!(scheduler.cancelled.borrow().is_empty());
    }

    #[test]
    fn test_synchronous_scheduler_does_not_wedge() {
        let throttle = Rc::new(FrameThrottle::new());
        let runs = Rc::new(Cell::new(0));

        assert!(throttle.notify(&ImmediateScheduler, counting_frame(&throttle, &runs)));
        assert!(!throttle.is_pending());
        assert!(throttle.notify(&ImmediateScheduler, counting_frame(&throttle, &runs)));
        assert!(!throttle.cancel(&ImmediateScheduler));
        assert_eq!(runs.get(), 2);
    }
}
