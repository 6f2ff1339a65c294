use sea_orm::DatabaseConnection;

use crate::server::{
    data::{customer::CustomerRepository, reservation::ReservationRepository},
    error::AppError,
    model::{
        customer::{
            CreateCustomerParams, Customer, CustomerDetails, CustomerSearchParams,
            UpdateCustomerParams,
        },
        pagination::{PageRequest, Paginated},
    },
};

pub struct CustomerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a customer
    ///
    /// Fails with `Conflict` when the email, phone number or driving license
    /// number already belongs to another customer.
    pub async fn create(&self, params: CreateCustomerParams) -> Result<Customer, AppError> {
        self.ensure_unique(&params.details, None).await?;

        let customer = CustomerRepository::new(self.db)
            .create(params.details)
            .await
            .map_err(|e| AppError::from_unique_violation(e, details_taken))?;
        tracing::info!("Created customer {}", customer.id);

        Ok(customer)
    }

    /// Gets a customer by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Customer>, AppError> {
        let customer = CustomerRepository::new(self.db).get_by_id(id).await?;

        Ok(customer)
    }

    /// Gets paginated customers ordered by ID
    pub async fn get_paginated(&self, page: PageRequest) -> Result<Paginated<Customer>, AppError> {
        let (customers, total) = CustomerRepository::new(self.db)
            .get_paginated(page)
            .await?;

        Ok(Paginated::new(customers, total, page))
    }

    /// Searches customers by first and/or last name
    pub async fn search(
        &self,
        params: CustomerSearchParams,
        page: PageRequest,
    ) -> Result<Paginated<Customer>, AppError> {
        let (customers, total) = CustomerRepository::new(self.db)
            .search(params, page)
            .await?;

        Ok(Paginated::new(customers, total, page))
    }

    /// Updates a customer
    ///
    /// Returns `None` if the customer doesn't exist.
    pub async fn update(&self, params: UpdateCustomerParams) -> Result<Option<Customer>, AppError> {
        let customer_repo = CustomerRepository::new(self.db);

        if customer_repo.get_by_id(params.id).await?.is_none() {
            return Ok(None);
        }

        self.ensure_unique(&params.details, Some(params.id)).await?;

        let customer = customer_repo
            .update(params.id, params.details)
            .await
            .map_err(|e| AppError::from_unique_violation(e, details_taken))?;

        Ok(Some(customer))
    }

    /// Deletes a customer
    ///
    /// Returns `false` if the customer doesn't exist. Customers referenced by a
    /// reservation cannot be deleted.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let customer_repo = CustomerRepository::new(self.db);

        if customer_repo.get_by_id(id).await?.is_none() {
            return Ok(false);
        }

        if ReservationRepository::new(self.db)
            .exists_for_customer(id)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Customer with id: {} has reservations and cannot be deleted",
                id
            )));
        }

        let deleted = customer_repo.delete(id).await?;

        Ok(deleted)
    }

    async fn ensure_unique(
        &self,
        details: &CustomerDetails,
        exclude_id: Option<i32>,
    ) -> Result<(), AppError> {
        let customer_repo = CustomerRepository::new(self.db);

        if customer_repo
            .exists_by_email(&details.email, exclude_id)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Customer with email {} already exists",
                details.email
            )));
        }
        if customer_repo
            .exists_by_phone_number(&details.phone_number, exclude_id)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Customer with phone number {} already exists",
                details.phone_number
            )));
        }
        if customer_repo
            .exists_by_driving_license_number(&details.driving_license_number, exclude_id)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Customer with driving license number {} already exists",
                details.driving_license_number
            )));
        }

        Ok(())
    }
}

fn details_taken() -> String {
    "Customer with the same contact details already exists".to_string()
}
