use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct SeasonalEventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeasonalEventRepository<'a, C> {
    /// Creates a new instance of [`SeasonalEventRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
    ) -> Result<entity::seasonal_event::Model, DbErr> {
        let event = entity::seasonal_event::ActiveModel {
            start_date: ActiveValue::Set(start_date),
            end_date: ActiveValue::Set(end_date),
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        event.insert(self.db).await
    }

    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::seasonal_event::Model>, DbErr> {
        entity::prelude::SeasonalEvent::find()
            .filter(entity::seasonal_event::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Events running at `at`, both ends inclusive, earliest start first
    pub async fn active_at(
        &self,
        at: NaiveDateTime,
    ) -> Result<Vec<entity::seasonal_event::Model>, DbErr> {
        entity::prelude::SeasonalEvent::find()
            .filter(entity::seasonal_event::Column::StartDate.lte(at))
            .filter(entity::seasonal_event::Column::EndDate.gte(at))
            .order_by_asc(entity::seasonal_event::Column::StartDate)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, event_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::SeasonalEvent::delete_by_id(event_id)
            .exec(self.db)
            .await
    }
}
