mod instance_action;
pub use instance_action::InstanceAction;

mod scheduled_event;
pub use scheduled_event::ScheduledEventDetail;
