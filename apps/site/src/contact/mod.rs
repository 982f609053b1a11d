// Contact form: required-field check, notification, and the delivery seam.
// Accepted messages go to a ContactSink; the default sink drops them.

pub mod form;
pub mod handlers;
pub mod sink;
