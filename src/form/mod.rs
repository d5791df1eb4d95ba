//! Form-host adapter for composing and editing leave requests.

mod leave_form;

pub use leave_form::LeaveForm;
