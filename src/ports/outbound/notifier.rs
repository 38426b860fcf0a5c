/// Notifier port for user-facing messages
///
/// This port collapses the display decision (rich vs. plain output) into a
/// single seam so the release-check logic stays display-agnostic. It also
/// carries progress reporting for the extraction fan-out.
pub trait Notifier {
    /// Emits a user-facing notice (e.g. an upgrade suggestion).
    fn notify(&self, message: &str);

    /// Reports progress while iterating over surface-level packages.
    ///
    /// # Arguments
    /// * `current` - Current progress value
    /// * `total` - Total expected value
    /// * `message` - Optional label for the current step
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports completion of an operation.
    fn report_completion(&self, message: &str);
}
