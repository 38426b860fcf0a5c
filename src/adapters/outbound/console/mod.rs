/// Console adapters - user-facing notices and progress
pub mod notifier;

pub use notifier::ConsoleNotifier;
