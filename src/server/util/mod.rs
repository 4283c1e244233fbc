//! Small helpers shared by services and controllers.

pub mod csv;
pub mod form;
pub mod recurrence;
pub mod token;
