use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Sentinel volume for a task whose total size isn't known up front.
pub const UNKNOWN_VOLUME: usize = usize::MAX;

/// Terminal node in a progress-tracking hierarchy.
///
/// Tracks a description, a volume (total units of work), and a running
/// progress counter. Volume may start unknown and be fixed later, e.g.
/// once a first pass over the data has counted the work.
pub struct LeafTask {
    description: String,
    volume: Mutex<usize>,
    current_progress: AtomicUsize,
}

impl LeafTask {
    pub fn new(description: String, volume: usize) -> Self {
        Self {
            description,
            volume: Mutex::new(volume),
            current_progress: AtomicUsize::new(0),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Marks this task as complete. If the volume was unknown, it's fixed
    /// to whatever progress had accumulated; otherwise progress is topped
    /// up to the full volume.
    pub fn finish(&self) {
        let mut volume = self.volume.lock().unwrap();
        if *volume == UNKNOWN_VOLUME {
            *volume = self.current_progress.load(Ordering::Relaxed);
            return;
        }

        let current = self.current_progress.load(Ordering::Relaxed);
        let remaining = volume.saturating_sub(current);
        self.current_progress
            .fetch_add(remaining, Ordering::Relaxed);
    }

    pub fn set_volume(&self, volume: usize) {
        *self.volume.lock().unwrap() = volume;
    }

    pub fn log_progress(&self, value: usize) {
        self.current_progress.fetch_add(value, Ordering::Relaxed);
    }

    pub fn current_progress_value(&self) -> usize {
        self.current_progress.load(Ordering::Relaxed)
    }

    pub fn volume(&self) -> usize {
        *self.volume.lock().unwrap()
    }

    pub fn reset_progress(&self) {
        self.current_progress.store(0, Ordering::Relaxed);
    }

    pub fn has_unknown_volume(&self) -> bool {
        *self.volume.lock().unwrap() == UNKNOWN_VOLUME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_task_creation() {
        let task = LeafTask::new("Leaf Task".to_string(), 100);
        assert_eq!(task.description(), "Leaf Task");
        assert_eq!(task.volume(), 100);
        assert_eq!(task.current_progress_value(), 0);
    }

    #[test]
    fn test_leaf_task_progress() {
        let task = LeafTask::new("Progress Task".to_string(), 100);

        task.log_progress(25);
        assert_eq!(task.current_progress_value(), 25);

        task.log_progress(35);
        assert_eq!(task.current_progress_value(), 60);
    }

    #[test]
    fn test_leaf_task_finish_with_known_volume() {
        let task = LeafTask::new("Finish Task".to_string(), 100);

        task.log_progress(50);
        task.finish();

        assert_eq!(task.current_progress_value(), 100);
    }

    #[test]
    fn test_leaf_task_finish_with_unknown_volume() {
        let task = LeafTask::new("Unknown Volume".to_string(), UNKNOWN_VOLUME);

        task.log_progress(75);
        task.finish();

        assert_eq!(task.volume(), 75);
        assert_eq!(task.current_progress_value(), 75);
    }

    #[test]
    fn test_leaf_task_set_volume() {
        let task = LeafTask::new("Set Volume".to_string(), 100);
        assert_eq!(task.volume(), 100);

        task.set_volume(200);
        assert_eq!(task.volume(), 200);
    }

    #[test]
    fn test_leaf_task_reset_progress() {
        let task = LeafTask::new("Reset Task".to_string(), 100);

        task.log_progress(50);
        task.reset_progress();
        assert_eq!(task.current_progress_value(), 0);
    }

    #[test]
    fn test_leaf_task_unknown_volume() {
        let task = LeafTask::new("Unknown".to_string(), UNKNOWN_VOLUME);
        assert!(task.has_unknown_volume());

        task.set_volume(100);
        assert!(!task.has_unknown_volume());
    }

    #[test]
    fn test_leaf_task_concurrent_progress() {
        use std::sync::Arc;
        use std::thread;

        let task = Arc::new(LeafTask::new("Concurrent".to_string(), 1000));
        let mut handles = vec![];

        for _ in 0..10 {
            let task_clone = Arc::clone(&task);
            handles.push(thread::spawn(move || {
                for _ in 0..10 {
                    task_clone.log_progress(1);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(task.current_progress_value(), 100);
    }
}
