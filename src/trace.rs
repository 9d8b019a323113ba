// This file is part of fixed-stack-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Slot-level logging.
//!
//! With the `log` feature enabled, [`trace_slot!`] forwards to `log::trace!`
//! under the `fixed_stack_array` target. Without it, the macro expands to
//! nothing and its arguments are never evaluated.

macro_rules! trace_slot {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        {
            log::trace!(target: "fixed_stack_array", $($arg)+);
        }
    };
}

#[cfg(all(test, feature = "log"))]
mod tests {
    // Imports
    use crate::FixedArray;
    use alloc::{format, string::String, vec, vec::Vec};
    use std::sync::{Mutex, Once};
    use std::thread::{self, ThreadId};

    /// Keeps every event with the thread that emitted it; tests run in
    /// parallel and share the global logger.
    struct Capture {
        events: Mutex<Vec<(ThreadId, String)>>,
    }

    impl log::Log for Capture {
        fn enabled(&self, _: &log::Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &log::Record<'_>) {
            let line = format!("{} {}", record.target(), record.args());
            self.events
                .lock()
                .unwrap()
                .push((thread::current().id(), line));
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture {
        events: Mutex::new(Vec::new()),
    };
    static INSTALL: Once = Once::new();

    /// Runs `f` and returns the events it emitted on this thread.
    fn captured(f: impl FnOnce()) -> Vec<String> {
        INSTALL.call_once(|| {
            log::set_logger(&CAPTURE).expect("no other logger is installed");
            log::set_max_level(log::LevelFilter::Trace);
        });
        let me = thread::current().id();
        CAPTURE.events.lock().unwrap().retain(|(id, _)| *id != me);
        f();
        CAPTURE
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|(id, _)| *id == me)
            .map(|(_, line)| line.clone())
            .collect()
    }

    #[test]
    fn test_replace_emits_one_event() {
        let mut a = FixedArray::from([1u8, 2, 3]);
        let events = captured(|| a.replace(1, 9));
        assert_eq!(events, ["fixed_stack_array replace slot 1 of 3"]);
        assert_eq!(a, [1, 9, 3]);
    }

    #[test]
    fn test_fill_emits_one_event_per_slot() {
        let mut a = FixedArray::from([1u8, 2, 3]);
        let events = captured(|| a.fill(0));
        assert_eq!(
            events,
            [
                "fixed_stack_array fill 3 slots",
                "fixed_stack_array replace slot 0 of 3",
                "fixed_stack_array replace slot 1 of 3",
                "fixed_stack_array replace slot 2 of 3",
            ]
        );
    }

    #[test]
    fn test_swap_emits_one_event() {
        let mut a = FixedArray::from([1u8, 2, 3]);
        let mut b = FixedArray::from([4u8, 5, 6]);
        let events = captured(|| a.swap(&mut b));
        assert_eq!(events, ["fixed_stack_array swap 3 slots"]);
    }

    #[test]
    fn test_take_and_move_from_emit_events() {
        let mut a = FixedArray::from([1u8, 2]);
        let mut b: FixedArray<u8, 2> = FixedArray::new();
        let events = captured(|| {
            let mut taken = a.take();
            b.move_from(&mut taken);
        });
        assert_eq!(
            events,
            vec![
                "fixed_stack_array move 2 slots out",
                "fixed_stack_array move 2 slots in",
                "fixed_stack_array replace slot 0 of 2",
                "fixed_stack_array replace slot 1 of 2",
            ]
        );
        assert_eq!(b, [1, 2]);
        assert_eq!(a, [0, 0]);
    }

    #[test]
    fn test_reads_emit_nothing() {
        let a = FixedArray::from([1u8, 2, 3]);
        let events = captured(|| {
            let _ = a.iter().count();
            let _ = a.get(1);
        });
        assert!(events.is_empty());
    }
}
