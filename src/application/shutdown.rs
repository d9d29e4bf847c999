use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Termination request shared between the main loop and notification paths.
///
/// Handlers only ever raise it; the animation loop only reads it.
#[derive(Clone, Debug, Default)]
pub struct ShutdownFlag(Arc<AtomicBool>);

impl ShutdownFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let flag = ShutdownFlag::new();
        let handler = flag.clone();
        assert!(!flag.is_requested());
        handler.request();
        assert!(flag.is_requested());
    }

    #[test]
    fn test_raised_from_another_thread() {
        let flag = ShutdownFlag::new();
        let remote = flag.clone();
        std::thread::spawn(move || remote.request()).join().unwrap();
        assert!(flag.is_requested());
    }
}
