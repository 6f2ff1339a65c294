use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::model::{
    customer::{Customer, CustomerDetails, CustomerSearchParams},
    pagination::PageRequest,
};

pub struct CustomerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CustomerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new customer
    pub async fn create(&self, details: CustomerDetails) -> Result<Customer, DbErr> {
        let customer = entity::customer::ActiveModel {
            first_name: ActiveValue::Set(details.first_name),
            last_name: ActiveValue::Set(details.last_name),
            email: ActiveValue::Set(details.email),
            phone_number: ActiveValue::Set(details.phone_number),
            driving_license_number: ActiveValue::Set(details.driving_license_number),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Customer::from_entity(customer))
    }

    /// Gets a customer by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Customer>, DbErr> {
        let customer = entity::prelude::Customer::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(customer.map(Customer::from_entity))
    }

    /// Gets paginated customers ordered by ID
    pub async fn get_paginated(&self, page: PageRequest) -> Result<(Vec<Customer>, u64), DbErr> {
        self.fetch_page(entity::prelude::Customer::find(), page)
            .await
    }

    /// Searches customers by exact first and/or last name
    pub async fn search(
        &self,
        params: CustomerSearchParams,
        page: PageRequest,
    ) -> Result<(Vec<Customer>, u64), DbErr> {
        let mut query = entity::prelude::Customer::find();

        if let Some(first_name) = params.first_name {
            query = query.filter(entity::customer::Column::FirstName.eq(first_name));
        }
        if let Some(last_name) = params.last_name {
            query = query.filter(entity::customer::Column::LastName.eq(last_name));
        }

        self.fetch_page(query, page).await
    }

    /// Replaces every mutable field of a customer
    pub async fn update(&self, id: i32, details: CustomerDetails) -> Result<Customer, DbErr> {
        let customer = entity::prelude::Customer::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Customer with id {} not found",
                id
            )))?;

        let mut active_model: entity::customer::ActiveModel = customer.into();
        active_model.first_name = ActiveValue::Set(details.first_name);
        active_model.last_name = ActiveValue::Set(details.last_name);
        active_model.email = ActiveValue::Set(details.email);
        active_model.phone_number = ActiveValue::Set(details.phone_number);
        active_model.driving_license_number = ActiveValue::Set(details.driving_license_number);

        let customer = active_model.update(self.db).await?;

        Ok(Customer::from_entity(customer))
    }

    /// Deletes a customer, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Customer::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether another customer already uses the email address
    pub async fn exists_by_email(&self, email: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        self.exists_with(entity::customer::Column::Email, email, exclude_id)
            .await
    }

    /// Checks whether another customer already uses the phone number
    pub async fn exists_by_phone_number(
        &self,
        phone_number: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        self.exists_with(entity::customer::Column::PhoneNumber, phone_number, exclude_id)
            .await
    }

    /// Checks whether another customer already uses the driving license number
    pub async fn exists_by_driving_license_number(
        &self,
        driving_license_number: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        self.exists_with(
            entity::customer::Column::DrivingLicenseNumber,
            driving_license_number,
            exclude_id,
        )
        .await
    }

    async fn exists_with(
        &self,
        column: entity::customer::Column,
        value: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Customer::find().filter(column.eq(value));
        if let Some(id) = exclude_id {
            query = query.filter(entity::customer::Column::Id.ne(id));
        }

        let count = query.count(self.db).await?;

        Ok(count > 0)
    }

    async fn fetch_page(
        &self,
        query: Select<entity::customer::Entity>,
        page: PageRequest,
    ) -> Result<(Vec<Customer>, u64), DbErr> {
        let paginator = query
            .order_by_asc(entity::customer::Column::Id)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let customers = paginator.fetch_page(page.page).await?;

        Ok((
            customers.into_iter().map(Customer::from_entity).collect(),
            total,
        ))
    }
}
