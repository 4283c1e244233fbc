//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` shorthand
//! for quick default creation. Foreign keys are passed explicitly, so parent rows must
//! exist first; `helpers` bundles the common parent chains.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let (owner, org) = factory::helpers::create_org_with_owner(&db).await?;
//! let ticket = factory::ticket::TicketFactory::new(&db, org.id, owner.id)
//!     .priority("critical")
//!     .sensitive(true)
//!     .build()
//!     .await?;
//! ```

pub mod comment;
pub mod helpers;
pub mod organization;
pub mod organization_member;
pub mod scheduled_task;
pub mod ticket;
pub mod user;

pub use comment::create_comment;
pub use organization::create_organization;
pub use organization_member::create_member;
pub use scheduled_task::create_scheduled_task;
pub use ticket::create_ticket;
pub use user::create_user;
