pub use super::comment::Entity as Comment;
pub use super::organization::Entity as Organization;
pub use super::organization_member::Entity as OrganizationMember;
pub use super::scheduled_task::Entity as ScheduledTask;
pub use super::ticket::Entity as Ticket;
pub use super::ticket_file::Entity as TicketFile;
pub use super::user::Entity as User;
