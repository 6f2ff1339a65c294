use std::collections::HashMap;

use chrono::NaiveDate;
use entity::sea_orm_active_enums::ReservationStatus;
use rust_decimal::Decimal;
use sea_orm::{
    sea_query::{Query, SelectStatement},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::model::{
    car::Car,
    customer::Customer,
    pagination::PageRequest,
    reservation::{CreateReservationParams, Reservation, ReservationDetails},
};

/// Sub-select of car IDs holding a non-canceled reservation that overlaps `[start, end]`.
///
/// Two closed ranges overlap when each one starts no later than the other ends.
pub fn overlapping_car_ids(start_date: NaiveDate, end_date: NaiveDate) -> SelectStatement {
    Query::select()
        .column(entity::reservation::Column::CarId)
        .from(entity::reservation::Entity)
        .and_where(entity::reservation::Column::Status.ne(ReservationStatus::Canceled))
        .and_where(entity::reservation::Column::StartDate.lte(end_date))
        .and_where(entity::reservation::Column::EndDate.gte(start_date))
        .to_owned()
}

/// Non-canceled reservations of one car overlapping `[start, end]`.
fn overlapping(
    car_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Select<entity::reservation::Entity> {
    entity::prelude::Reservation::find()
        .filter(entity::reservation::Column::CarId.eq(car_id))
        .filter(entity::reservation::Column::Status.ne(ReservationStatus::Canceled))
        .filter(entity::reservation::Column::StartDate.lte(end_date))
        .filter(entity::reservation::Column::EndDate.gte(start_date))
}

pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new reservation in RESERVED status
    pub async fn create(&self, params: CreateReservationParams) -> Result<Reservation, DbErr> {
        let reservation = entity::reservation::ActiveModel {
            car_id: ActiveValue::Set(params.car_id),
            customer_id: ActiveValue::Set(params.customer_id),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            total_amount: ActiveValue::Set(params.total_amount),
            status: ActiveValue::Set(ReservationStatus::Reserved),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Reservation::from_entity(reservation))
    }

    /// Gets a reservation by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Reservation>, DbErr> {
        let reservation = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(reservation.map(Reservation::from_entity))
    }

    /// Gets paginated reservations ordered by ID
    pub async fn get_paginated(
        &self,
        page: PageRequest,
    ) -> Result<(Vec<Reservation>, u64), DbErr> {
        let paginator = entity::prelude::Reservation::find()
            .order_by_asc(entity::reservation::Column::Id)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let reservations = paginator.fetch_page(page.page).await?;

        Ok((
            reservations
                .into_iter()
                .map(Reservation::from_entity)
                .collect(),
            total,
        ))
    }

    /// Replaces the dates and amount of a reservation
    pub async fn reschedule(
        &self,
        id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
        total_amount: Decimal,
    ) -> Result<Reservation, DbErr> {
        let mut active_model = self.find_active_model(id).await?;
        active_model.start_date = ActiveValue::Set(start_date);
        active_model.end_date = ActiveValue::Set(end_date);
        active_model.total_amount = ActiveValue::Set(total_amount);

        let reservation = active_model.update(self.db).await?;

        Ok(Reservation::from_entity(reservation))
    }

    /// Sets the status of a reservation
    pub async fn update_status(
        &self,
        id: i32,
        status: ReservationStatus,
    ) -> Result<Reservation, DbErr> {
        let mut active_model = self.find_active_model(id).await?;
        active_model.status = ActiveValue::Set(status);

        let reservation = active_model.update(self.db).await?;

        Ok(Reservation::from_entity(reservation))
    }

    /// Checks whether the car has a non-canceled reservation overlapping the range
    pub async fn exists_overlap(
        &self,
        car_id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<bool, DbErr> {
        let count = overlapping(car_id, start_date, end_date)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Same as `exists_overlap`, ignoring the reservation being rescheduled
    pub async fn exists_overlap_excluding(
        &self,
        car_id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
        exclude_id: i32,
    ) -> Result<bool, DbErr> {
        let count = overlapping(car_id, start_date, end_date)
            .filter(entity::reservation::Column::Id.ne(exclude_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether any reservation, in any status, references the car
    pub async fn exists_for_car(&self, car_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::CarId.eq(car_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether any reservation, in any status, references the customer
    pub async fn exists_for_customer(&self, customer_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::CustomerId.eq(customer_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets reservations in `status` starting on `date`, joined with car and customer
    pub async fn get_starting_on(
        &self,
        date: NaiveDate,
        status: ReservationStatus,
    ) -> Result<Vec<ReservationDetails>, DbErr> {
        let rows = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::StartDate.eq(date))
            .filter(entity::reservation::Column::Status.eq(status))
            .order_by_asc(entity::reservation::Column::Id)
            .find_also_related(entity::prelude::Car)
            .all(self.db)
            .await?;

        let customer_ids: Vec<i32> = rows.iter().map(|(r, _)| r.customer_id).collect();
        let customers: HashMap<i32, entity::customer::Model> = entity::prelude::Customer::find()
            .filter(entity::customer::Column::Id.is_in(customer_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|customer| (customer.id, customer))
            .collect();

        let mut details = Vec::with_capacity(rows.len());
        for (reservation, car) in rows {
            let car = car.ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "Car {} of reservation {} not found",
                    reservation.car_id, reservation.id
                ))
            })?;
            let customer = customers.get(&reservation.customer_id).cloned().ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "Customer {} of reservation {} not found",
                    reservation.customer_id, reservation.id
                ))
            })?;

            details.push(ReservationDetails {
                reservation: Reservation::from_entity(reservation),
                car: Car::from_entity(car),
                customer: Customer::from_entity(customer),
            });
        }

        Ok(details)
    }

    async fn find_active_model(&self, id: i32) -> Result<entity::reservation::ActiveModel, DbErr> {
        let reservation = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Reservation with id {} not found",
                id
            )))?;

        Ok(reservation.into())
    }
}
