/// Cancelable scheduler trait.
pub mod cancelable_scheduler;
