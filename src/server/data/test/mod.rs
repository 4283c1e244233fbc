mod comment;
mod organization;
mod organization_member;
mod scheduled_task;
mod ticket;
mod user;
