use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbBackend, DbErr, EntityTrait,
    Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::{
    data::reservation::overlapping_car_ids,
    model::{
        car::{Car, CarSearchParams, CarSortProperty, CreateCarParams, SortDirection, UpdateCarParams},
        pagination::PageRequest,
    },
};

pub struct CarRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CarRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new car
    pub async fn create(&self, params: CreateCarParams) -> Result<Car, DbErr> {
        let car = entity::car::ActiveModel {
            producer: ActiveValue::Set(params.producer),
            model: ActiveValue::Set(params.model),
            year_of_production: ActiveValue::Set(params.year_of_production),
            registration_number: ActiveValue::Set(params.registration_number),
            price_per_day: ActiveValue::Set(params.price_per_day),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Car::from_entity(car))
    }

    /// Gets a car by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Car>, DbErr> {
        let car = entity::prelude::Car::find_by_id(id).one(self.db).await?;

        Ok(car.map(Car::from_entity))
    }

    /// Gets a car by ID and takes an exclusive row lock on it.
    ///
    /// Issues `SELECT ... FOR UPDATE` so the row stays locked until the enclosing
    /// transaction ends. SQLite has no row locks and a single writer, so the lock
    /// clause is left out there.
    pub async fn find_for_update(&self, id: i32) -> Result<Option<Car>, DbErr> {
        let mut query = entity::prelude::Car::find_by_id(id);
        if self.db.get_database_backend() != DbBackend::Sqlite {
            query = query.lock_exclusive();
        }

        let car = query.one(self.db).await?;

        Ok(car.map(Car::from_entity))
    }

    /// Gets paginated cars ordered by ID
    pub async fn get_paginated(&self, page: PageRequest) -> Result<(Vec<Car>, u64), DbErr> {
        let query = entity::prelude::Car::find().order_by_asc(entity::car::Column::Id);

        self.fetch_page(query, page).await
    }

    /// Gets paginated cars ordered by the given property
    ///
    /// Ties are broken by ID so that pages stay stable.
    pub async fn get_sorted(
        &self,
        property: CarSortProperty,
        direction: SortDirection,
        page: PageRequest,
    ) -> Result<(Vec<Car>, u64), DbErr> {
        let order = match direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        };

        let mut query = entity::prelude::Car::find().order_by(property.column(), order);
        if property != CarSortProperty::Id {
            query = query.order_by_asc(entity::car::Column::Id);
        }

        self.fetch_page(query, page).await
    }

    /// Searches cars by producer and model, optionally keeping only cars free for a date range
    ///
    /// The date filter is applied only when both dates are present and excludes cars
    /// holding a non-canceled reservation that overlaps the closed range.
    pub async fn search_available(
        &self,
        params: CarSearchParams,
        page: PageRequest,
    ) -> Result<(Vec<Car>, u64), DbErr> {
        let mut query = entity::prelude::Car::find();

        if let Some(producer) = params.producer {
            query = query.filter(entity::car::Column::Producer.eq(producer));
        }
        if let Some(model) = params.model {
            query = query.filter(entity::car::Column::Model.eq(model));
        }
        if let (Some(start_date), Some(end_date)) = (params.start_date, params.end_date) {
            query = query.filter(
                entity::car::Column::Id.not_in_subquery(overlapping_car_ids(start_date, end_date)),
            );
        }

        let query = query.order_by_asc(entity::car::Column::Id);

        self.fetch_page(query, page).await
    }

    /// Updates every mutable field of a car
    pub async fn update(&self, params: UpdateCarParams) -> Result<Car, DbErr> {
        let car = entity::prelude::Car::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Car with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::car::ActiveModel = car.into();
        active_model.producer = ActiveValue::Set(params.producer);
        active_model.model = ActiveValue::Set(params.model);
        active_model.year_of_production = ActiveValue::Set(params.year_of_production);
        active_model.registration_number = ActiveValue::Set(params.registration_number);
        active_model.price_per_day = ActiveValue::Set(params.price_per_day);

        let car = active_model.update(self.db).await?;

        Ok(Car::from_entity(car))
    }

    /// Deletes a car, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Car::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether a registration number is already used by another car
    pub async fn exists_by_registration_number(
        &self,
        registration_number: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Car::find()
            .filter(entity::car::Column::RegistrationNumber.eq(registration_number));
        if let Some(id) = exclude_id {
            query = query.filter(entity::car::Column::Id.ne(id));
        }

        let count = query.count(self.db).await?;

        Ok(count > 0)
    }

    async fn fetch_page(
        &self,
        query: Select<entity::car::Entity>,
        page: PageRequest,
    ) -> Result<(Vec<Car>, u64), DbErr> {
        let paginator = query.paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let cars = paginator.fetch_page(page.page).await?;

        Ok((cars.into_iter().map(Car::from_entity).collect(), total))
    }
}
