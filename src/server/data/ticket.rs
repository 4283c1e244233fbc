//! Ticket data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, Select,
};
use uuid::Uuid;

use crate::server::{
    data::user::UserRepository,
    model::ticket::{
        sort_by_rank, CreateTicketParams, SortKey, SortOrder, Ticket, TicketChanges, TicketFilter,
        TicketPriority, TicketScope, TicketStatus, TicketWithNames,
    },
};

pub struct TicketRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TicketRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a ticket with status `new` and no completion time.
    ///
    /// Attached files in `params` are ignored here; they are stored through
    /// `TicketFileRepository` on the same connection.
    pub async fn create(
        &self,
        params: &CreateTicketParams,
        priority: TicketPriority,
    ) -> Result<Ticket, DbErr> {
        let now = Utc::now();
        let entity = entity::ticket::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            organization_id: ActiveValue::Set(params.organization_id),
            title: ActiveValue::Set(params.title.clone()),
            description: ActiveValue::Set(params.description.clone()),
            location: ActiveValue::Set(params.location.clone()),
            status_id: ActiveValue::Set(TicketStatus::New.to_string()),
            priority_id: ActiveValue::Set(priority.to_string()),
            reporter_id: ActiveValue::Set(params.reporter_id),
            assignee_user_id: ActiveValue::Set(params.assignee_user_id),
            sensitive: ActiveValue::Set(params.sensitive),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            completed_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        Ticket::from_entity(entity)
    }

    /// Finds a ticket by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Ticket))` - Ticket found
    /// - `Ok(None)` - No ticket with that ID
    /// - `Err(DbErr)` - Database error or unrecognized stored status/priority
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Ticket>, DbErr> {
        entity::prelude::Ticket::find_by_id(id)
            .one(self.db)
            .await?
            .map(Ticket::from_entity)
            .transpose()
    }

    /// Finds a ticket by ID along with its reporter and assignee names.
    pub async fn find_with_names(&self, id: Uuid) -> Result<Option<TicketWithNames>, DbErr> {
        let Some(ticket) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        Ok(self.attach_names(vec![ticket]).await?.pop())
    }

    /// Writes resolved changes to an existing ticket.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The updated ticket
    /// - `Err(DbErr::RecordNotFound)` - Ticket does not exist
    pub async fn update(&self, id: Uuid, changes: TicketChanges) -> Result<Ticket, DbErr> {
        let ticket = entity::prelude::Ticket::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Ticket {} not found", id)))?;

        let mut active: entity::ticket::ActiveModel = ticket.into();
        active.title = ActiveValue::Set(changes.title);
        active.description = ActiveValue::Set(changes.description);
        active.location = ActiveValue::Set(changes.location);
        active.status_id = ActiveValue::Set(changes.status.to_string());
        active.priority_id = ActiveValue::Set(changes.priority.to_string());
        active.assignee_user_id = ActiveValue::Set(changes.assignee_user_id);
        active.sensitive = ActiveValue::Set(changes.sensitive);
        active.updated_at = ActiveValue::Set(changes.updated_at);
        active.completed_at = ActiveValue::Set(changes.completed_at);

        Ticket::from_entity(active.update(self.db).await?)
    }

    /// Lists tickets matching the filter, with reporter and assignee names.
    ///
    /// Column filters and column sorts run in SQL. The keyword match is applied after
    /// loading so it is case-insensitive for non-ASCII text on every backend, and
    /// priority/status sorts use their severity rank rather than the stored string.
    pub async fn list(&self, filter: &TicketFilter) -> Result<Vec<TicketWithNames>, DbErr> {
        let mut query = entity::prelude::Ticket::find();

        query = match &filter.scope {
            TicketScope::Organization(id) => {
                query.filter(entity::ticket::Column::OrganizationId.eq(*id))
            }
            TicketScope::Organizations(ids) => {
                query.filter(entity::ticket::Column::OrganizationId.is_in(ids.clone()))
            }
            TicketScope::All => query,
        };

        if !filter.statuses.is_empty() {
            query = query.filter(
                entity::ticket::Column::StatusId
                    .is_in(filter.statuses.iter().map(|s| s.as_str())),
            );
        }
        if !filter.priorities.is_empty() {
            query = query.filter(
                entity::ticket::Column::PriorityId
                    .is_in(filter.priorities.iter().map(|p| p.as_str())),
            );
        }
        if let Some(assignee_id) = filter.assignee_id {
            query = query.filter(entity::ticket::Column::AssigneeUserId.eq(assignee_id));
        }
        if let Some(reporter_id) = filter.reporter_id {
            query = query.filter(entity::ticket::Column::ReporterId.eq(reporter_id));
        }
        if let Some(sensitive) = filter.sensitive {
            query = query.filter(entity::ticket::Column::Sensitive.eq(sensitive));
        }

        query = apply_column_sort(query, filter.sort_key, filter.sort_order);

        let mut tickets = query
            .all(self.db)
            .await?
            .into_iter()
            .map(Ticket::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(keyword) = filter.keyword.as_deref().filter(|k| !k.is_empty()) {
            let keyword = keyword.to_lowercase();
            tickets.retain(|t| {
                t.title.to_lowercase().contains(&keyword)
                    || t.description.to_lowercase().contains(&keyword)
            });
        }

        let mut tickets = self.attach_names(tickets).await?;

        if matches!(filter.sort_key, SortKey::Priority | SortKey::Status) {
            sort_by_rank(&mut tickets, filter.sort_key, filter.sort_order);
        }

        Ok(tickets)
    }

    async fn attach_names(&self, tickets: Vec<Ticket>) -> Result<Vec<TicketWithNames>, DbErr> {
        let mut user_ids: Vec<Uuid> = tickets.iter().map(|t| t.reporter_id).collect();
        user_ids.extend(tickets.iter().filter_map(|t| t.assignee_user_id));
        user_ids.sort();
        user_ids.dedup();

        let names = UserRepository::new(self.db).names_by_ids(user_ids).await?;

        Ok(tickets
            .into_iter()
            .map(|ticket| TicketWithNames {
                reporter_name: names.get(&ticket.reporter_id).cloned(),
                assignee_name: ticket
                    .assignee_user_id
                    .and_then(|id| names.get(&id).cloned()),
                ticket,
            })
            .collect())
    }
}

fn apply_column_sort(
    query: Select<entity::ticket::Entity>,
    key: SortKey,
    order: SortOrder,
) -> Select<entity::ticket::Entity> {
    let column = match key {
        SortKey::UpdatedAt => entity::ticket::Column::UpdatedAt,
        SortKey::Title => entity::ticket::Column::Title,
        _ => entity::ticket::Column::CreatedAt,
    };

    match order {
        SortOrder::Asc => query.order_by_asc(column),
        SortOrder::Desc => query.order_by_desc(column),
    }
}
