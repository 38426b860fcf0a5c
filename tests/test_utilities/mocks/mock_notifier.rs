use depsnap::prelude::*;

/// Mock Notifier for testing that captures messages
#[derive(Default, Clone)]
pub struct MockNotifier {
    pub messages: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn notice_count(&self) -> usize {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.starts_with("Notice: "))
            .count()
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Notice: {}", message));
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let msg = if let Some(m) = message {
            format!("Progress: {}/{} - {}", current, total, m)
        } else {
            format!("Progress: {}/{}", current, total)
        };
        self.messages.lock().unwrap().push(msg);
    }

    fn report_completion(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Completed: {}", message));
    }
}
