//! Ticket domain models, enumerations and lifecycle rules.
//!
//! Status and priority are stored as strings and parsed into `TicketStatus` and
//! `TicketPriority` at the repository boundary. Both carry a fixed rank used for
//! sorting, since lexical order of the stored strings is meaningless.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::{fmt, str::FromStr};
use uuid::Uuid;

use crate::{
    model::ticket::{
        CreateTicketDto, PublicTicketDto, PublicTicketSubmissionDto, TicketDetailDto, TicketDto,
        TicketListItemDto, UpdateTicketDto,
    },
    server::{
        error::AppError,
        model::file::{NewTicketFile, TicketFileMeta},
        util::form::FormData,
    },
};

pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_DESCRIPTION_CHARS: usize = 5000;
pub const MAX_SUBMITTER_NAME_CHARS: usize = 100;
pub const MAX_SUBMITTER_EMAIL_CHARS: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketStatus {
    New,
    InProgress,
    OnHold,
    Done,
    Canceled,
}

impl TicketStatus {
    /// Statuses listed when a query does not name any.
    pub const ACTIVE: [TicketStatus; 3] = [Self::New, Self::InProgress, Self::OnHold];

    pub const ALL: [TicketStatus; 5] = [
        Self::New,
        Self::InProgress,
        Self::OnHold,
        Self::Done,
        Self::Canceled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in_progress",
            Self::OnHold => "on_hold",
            Self::Done => "done",
            Self::Canceled => "canceled",
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            Self::New => 0,
            Self::InProgress => 1,
            Self::OnHold => 2,
            Self::Done => 3,
            Self::Canceled => 4,
        }
    }

    /// Done and canceled tickets carry a `completed_at` timestamp.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Done | Self::Canceled)
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid status: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl TicketPriority {
    pub const ALL: [TicketPriority; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
            Self::Critical => 3,
        }
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketPriority {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str() == s)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid priority: {}", s)))
    }
}

/// Derives `completed_at` after a status change.
///
/// Entering done or canceled stamps `now`; going from done back to new clears it;
/// every other transition, including no transition, keeps `current`.
pub fn completed_at_after_transition(
    previous: TicketStatus,
    next: TicketStatus,
    current: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    if previous == next {
        return current;
    }

    if next.is_closed() {
        Some(now)
    } else if previous == TicketStatus::Done && next == TicketStatus::New {
        None
    } else {
        current
    }
}

/// Checks title and description lengths in characters on the untrimmed values.
pub fn validate_title(title: &str) -> Result<(), AppError> {
    let len = title.chars().count();
    if len == 0 {
        return Err(AppError::BadRequest("Title is required".to_string()));
    }
    if len > MAX_TITLE_CHARS {
        return Err(AppError::BadRequest(format!(
            "Title must be at most {} characters",
            MAX_TITLE_CHARS
        )));
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), AppError> {
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(AppError::BadRequest(format!(
            "Description must be at most {} characters",
            MAX_DESCRIPTION_CHARS
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub reporter_id: Uuid,
    pub assignee_user_id: Option<Uuid>,
    pub sensitive: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Ticket {
    /// Converts an entity model to a ticket domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The converted ticket
    /// - `Err(DbErr::Custom)` - Stored status or priority is not recognized
    pub fn from_entity(entity: entity::ticket::Model) -> Result<Self, DbErr> {
        let status = entity
            .status_id
            .parse::<TicketStatus>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse ticket status: {}", e)))?;
        let priority = entity
            .priority_id
            .parse::<TicketPriority>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse ticket priority: {}", e)))?;

        Ok(Self {
            id: entity.id,
            organization_id: entity.organization_id,
            title: entity.title,
            description: entity.description,
            location: entity.location,
            status,
            priority,
            reporter_id: entity.reporter_id,
            assignee_user_id: entity.assignee_user_id,
            sensitive: entity.sensitive,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            completed_at: entity.completed_at,
        })
    }

    pub fn into_dto(self) -> TicketDto {
        TicketDto {
            id: self.id,
            organization_id: self.organization_id,
            title: self.title,
            description: self.description,
            location: self.location,
            status_id: self.status.to_string(),
            priority_id: self.priority.to_string(),
            reporter_id: self.reporter_id,
            assignee_user_id: self.assignee_user_id,
            sensitive: self.sensitive,
            created_at: self.created_at,
            updated_at: self.updated_at,
            completed_at: self.completed_at,
        }
    }
}

/// Ticket with the display names of its reporter and assignee.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketWithNames {
    pub ticket: Ticket,
    pub reporter_name: Option<String>,
    pub assignee_name: Option<String>,
}

impl TicketWithNames {
    pub fn into_list_item_dto(self) -> TicketListItemDto {
        let mut ticket = self.ticket.into_dto();
        ticket.description = String::new();

        TicketListItemDto {
            ticket,
            reporter_name: self.reporter_name,
            assignee_name: self.assignee_name,
        }
    }

    pub fn into_detail_dto(self, files: Vec<TicketFileMeta>) -> TicketDetailDto {
        TicketDetailDto {
            ticket: self.ticket.into_dto(),
            reporter_name: self.reporter_name,
            assignee_name: self.assignee_name,
            files: files.into_iter().map(TicketFileMeta::into_dto).collect(),
        }
    }

    /// Public list rows expose only the assignee; detail views add the reporter.
    pub fn into_public_dto(self, include_reporter: bool) -> PublicTicketDto {
        PublicTicketDto {
            ticket: self.ticket.into_dto(),
            reporter_name: if include_reporter {
                self.reporter_name
            } else {
                None
            },
            assignee_name: self.assignee_name,
        }
    }
}

/// Parameters for creating a ticket. Status is always `new` on creation.
#[derive(Debug, Clone)]
pub struct CreateTicketParams {
    pub organization_id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub priority_id: String,
    pub reporter_id: Uuid,
    pub assignee_user_id: Option<Uuid>,
    pub sensitive: bool,
    pub files: Vec<NewTicketFile>,
}

impl CreateTicketParams {
    pub fn from_dto(dto: CreateTicketDto, reporter_id: Uuid) -> Self {
        Self {
            organization_id: dto.organization_id,
            title: dto.title,
            description: dto.description,
            location: dto.location,
            priority_id: dto.priority_id,
            reporter_id,
            assignee_user_id: dto.assignee_user_id,
            sensitive: dto.sensitive,
            files: Vec::new(),
        }
    }

    /// Builds params from multipart fields named like the JSON body, plus uploads.
    pub fn from_form(form: FormData, reporter_id: Uuid) -> Result<Self, AppError> {
        let organization_id = parse_uuid_field(&form.text("organization_id"), "organization_id")?;
        let assignee_user_id = form
            .optional("assignee_user_id")
            .map(|value| parse_uuid_field(&value, "assignee_user_id"))
            .transpose()?;

        Ok(Self {
            organization_id,
            title: form.text("title"),
            description: form.text("description"),
            location: form.text("location"),
            priority_id: form.text("priority_id"),
            reporter_id,
            assignee_user_id,
            sensitive: form.flag("sensitive"),
            files: form.files,
        })
    }
}

fn parse_uuid_field(value: &str, name: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value).map_err(|_| AppError::BadRequest(format!("Invalid {}", name)))
}

/// Partial update. `assignee` uses `Some(None)` to clear the assignee.
#[derive(Debug, Clone, Default)]
pub struct UpdateTicketParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub priority_id: Option<String>,
    pub status_id: Option<String>,
    pub assignee: Option<Option<Uuid>>,
    pub sensitive: Option<bool>,
}

impl UpdateTicketParams {
    /// A nil `assignee_id` clears the assignee.
    pub fn from_dto(dto: UpdateTicketDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            location: dto.location,
            priority_id: dto.priority_id,
            status_id: dto.status_id,
            assignee: dto.assignee_id.map(|id| (!id.is_nil()).then_some(id)),
            sensitive: dto.sensitive,
        }
    }
}

/// Unauthenticated submission through an organization's share link.
#[derive(Debug, Clone)]
pub struct PublicSubmissionParams {
    pub token: String,
    pub title: String,
    pub description: String,
    pub priority_id: String,
    pub name: String,
    pub email: String,
    pub files: Vec<NewTicketFile>,
}

impl PublicSubmissionParams {
    pub fn from_dto(dto: PublicTicketSubmissionDto) -> Self {
        Self {
            token: dto.token,
            title: dto.title,
            description: dto.description,
            priority_id: dto.priority_id,
            name: dto.name,
            email: dto.email,
            files: Vec::new(),
        }
    }

    pub fn from_form(form: FormData) -> Self {
        Self {
            token: form.text("token"),
            title: form.text("title"),
            description: form.text("description"),
            priority_id: form.text("priority_id"),
            name: form.text("name"),
            email: form.text("email"),
            files: form.files,
        }
    }

    /// Checks the submitter-provided fields in a fixed order, stopping at the first failure.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_title(&self.title)?;
        validate_description(&self.description)?;

        if self.name.chars().count() > MAX_SUBMITTER_NAME_CHARS {
            return Err(AppError::BadRequest("Name too long".to_string()));
        }
        if self.email.chars().count() > MAX_SUBMITTER_EMAIL_CHARS {
            return Err(AppError::BadRequest("Email too long".to_string()));
        }
        if !is_valid_email(&self.email) {
            return Err(AppError::BadRequest("Invalid email format".to_string()));
        }

        Ok(())
    }
}

/// Accepts `local@domain.tld` shapes: exactly one `@`, a non-empty local part, a
/// dotted domain and no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Fully resolved column changes handed to the repository.
#[derive(Debug, Clone)]
pub struct TicketChanges {
    pub title: String,
    pub description: String,
    pub location: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub assignee_user_id: Option<Uuid>,
    pub sensitive: bool,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Which organizations a ticket query may read from.
#[derive(Debug, Clone, PartialEq)]
pub enum TicketScope {
    Organization(Uuid),
    Organizations(Vec<Uuid>),
    /// Unrestricted; only for trusted internal callers.
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    CreatedAt,
    UpdatedAt,
    Title,
    Priority,
    Status,
}

impl SortKey {
    /// Unknown keys fall back to `created_at`.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("updated_at") => Self::UpdatedAt,
            Some("title") => Self::Title,
            Some("priority") => Self::Priority,
            Some("status") => Self::Status,
            _ => Self::CreatedAt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TicketFilter {
    pub scope: TicketScope,
    /// Empty means any status.
    pub statuses: Vec<TicketStatus>,
    /// Empty means any priority.
    pub priorities: Vec<TicketPriority>,
    pub assignee_id: Option<Uuid>,
    pub reporter_id: Option<Uuid>,
    pub sensitive: Option<bool>,
    pub keyword: Option<String>,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
}

impl TicketFilter {
    pub fn new(scope: TicketScope) -> Self {
        Self {
            scope,
            statuses: Vec::new(),
            priorities: Vec::new(),
            assignee_id: None,
            reporter_id: None,
            sensitive: None,
            keyword: None,
            sort_key: SortKey::default(),
            sort_order: SortOrder::default(),
        }
    }
}

/// Orders tickets by severity rank, breaking ties by newest first.
pub fn sort_by_rank(tickets: &mut [TicketWithNames], key: SortKey, order: SortOrder) {
    let rank = |t: &TicketWithNames| match key {
        SortKey::Priority => t.ticket.priority.rank(),
        SortKey::Status => t.ticket.status.rank(),
        _ => 0,
    };

    tickets.sort_by(|a, b| {
        let by_rank = match order {
            SortOrder::Asc => rank(a).cmp(&rank(b)),
            SortOrder::Desc => rank(b).cmp(&rank(a)),
        };
        by_rank.then_with(|| b.ticket.created_at.cmp(&a.ticket.created_at))
    });
}
