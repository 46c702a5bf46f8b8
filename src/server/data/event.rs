use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Alias, Expr, Func, IntoColumnRef, IntoCondition},
    ExprTrait,
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select,
};
use uuid::Uuid;

use crate::server::model::event::{CreateEventParams, EventFilter};

/// An event together with its address, if it has one.
pub type EventWithAddress = (entity::event::Model, Option<entity::address::Model>);

/// Query layer for events.
///
/// Every listing is ordered by event date ascending, then by id, and pages are zero-based.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Inserts an event with a freshly generated id.
    async fn create(
        &self,
        params: &CreateEventParams,
        img_url: Option<String>,
    ) -> Result<entity::event::Model, DbErr>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<EventWithAddress>, DbErr>;

    /// Page of events dated at or after `current_time`.
    async fn find_upcoming(
        &self,
        current_time: DateTime<Utc>,
        page: u64,
        page_size: u64,
    ) -> Result<Vec<EventWithAddress>, DbErr>;

    /// Page of events matching the case-sensitive address substrings and inclusive date
    /// range.
    async fn find_filtered(
        &self,
        filter: &EventFilter,
        page: u64,
        page_size: u64,
    ) -> Result<Vec<EventWithAddress>, DbErr>;

    /// All events whose title contains `title` (case-sensitive), or every event for `None`.
    async fn find_by_title(&self, title: Option<&str>) -> Result<Vec<EventWithAddress>, DbErr>;
}

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Case-sensitive substring match through `instr`; `%` and `_` match literally.
    fn contains(column: impl IntoColumnRef, needle: &str) -> impl IntoCondition {
        Expr::expr(
            Func::cust(Alias::new("instr"))
                .arg(Expr::col(column))
                .arg(needle),
        )
        .gt(0)
    }

    fn ordered(select: Select<entity::event::Entity>) -> Select<entity::event::Entity> {
        select
            .order_by_asc(entity::event::Column::Date)
            .order_by_asc(entity::event::Column::Id)
    }
}

#[async_trait]
impl<'a> EventStore for EventRepository<'a> {
    async fn create(
        &self,
        params: &CreateEventParams,
        img_url: Option<String>,
    ) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(params.title.clone()),
            description: ActiveValue::Set(params.description.clone()),
            date: ActiveValue::Set(params.date),
            remote: ActiveValue::Set(params.remote),
            event_url: ActiveValue::Set(params.event_url.clone()),
            img_url: ActiveValue::Set(img_url),
        }
        .insert(self.db)
        .await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<EventWithAddress>, DbErr> {
        entity::prelude::Event::find_by_id(id)
            .find_also_related(entity::prelude::Address)
            .one(self.db)
            .await
    }

    async fn find_upcoming(
        &self,
        current_time: DateTime<Utc>,
        page: u64,
        page_size: u64,
    ) -> Result<Vec<EventWithAddress>, DbErr> {
        let select =
            entity::prelude::Event::find().filter(entity::event::Column::Date.gte(current_time));

        Self::ordered(select)
            .find_also_related(entity::prelude::Address)
            .paginate(self.db, page_size)
            .fetch_page(page)
            .await
    }

    async fn find_filtered(
        &self,
        filter: &EventFilter,
        page: u64,
        page_size: u64,
    ) -> Result<Vec<EventWithAddress>, DbErr> {
        let mut select = entity::prelude::Event::find()
            .filter(entity::event::Column::Date.between(filter.start, filter.end));

        if let Some(city) = &filter.city {
            select = select.filter(Self::contains(
                (entity::address::Entity, entity::address::Column::City),
                city,
            ));
        }

        if let Some(uf) = &filter.uf {
            select = select.filter(Self::contains(
                (entity::address::Entity, entity::address::Column::Uf),
                uf,
            ));
        }

        Self::ordered(select)
            .find_also_related(entity::prelude::Address)
            .paginate(self.db, page_size)
            .fetch_page(page)
            .await
    }

    async fn find_by_title(&self, title: Option<&str>) -> Result<Vec<EventWithAddress>, DbErr> {
        let mut select = entity::prelude::Event::find();

        if let Some(title) = title {
            select = select.filter(Self::contains(
                (entity::event::Entity, entity::event::Column::Title),
                title,
            ));
        }

        Self::ordered(select)
            .find_also_related(entity::prelude::Address)
            .all(self.db)
            .await
    }
}
