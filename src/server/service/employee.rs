use sea_orm::DatabaseConnection;

use crate::server::{
    data::{employee::EmployeeRepository, position::PositionRepository},
    error::AppError,
    model::{
        employee::{
            CreateEmployeeParams, Employee, EmployeeDetails, EmployeeSearchParams,
            UpdateEmployeeParams,
        },
        pagination::{PageRequest, Paginated},
    },
};

pub struct EmployeeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an employee
    ///
    /// The position must exist and email and phone number must be unused.
    pub async fn create(&self, params: CreateEmployeeParams) -> Result<Employee, AppError> {
        self.ensure_position_exists(params.details.position_id)
            .await?;
        self.ensure_unique(&params.details, None).await?;

        let employee = EmployeeRepository::new(self.db)
            .create(params.details)
            .await
            .map_err(|e| AppError::from_unique_violation(e, contact_taken))?;
        tracing::info!("Created employee {}", employee.id);

        Ok(employee)
    }

    /// Gets an employee by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Employee>, AppError> {
        let employee = EmployeeRepository::new(self.db).get_by_id(id).await?;

        Ok(employee)
    }

    /// Gets paginated employees ordered by ID
    pub async fn get_paginated(&self, page: PageRequest) -> Result<Paginated<Employee>, AppError> {
        let (employees, total) = EmployeeRepository::new(self.db)
            .get_paginated(page)
            .await?;

        Ok(Paginated::new(employees, total, page))
    }

    /// Searches employees by names and position name
    pub async fn search(
        &self,
        params: EmployeeSearchParams,
        page: PageRequest,
    ) -> Result<Paginated<Employee>, AppError> {
        let (employees, total) = EmployeeRepository::new(self.db)
            .search(params, page)
            .await?;

        Ok(Paginated::new(employees, total, page))
    }

    /// Updates an employee
    ///
    /// Returns `None` if the employee doesn't exist.
    pub async fn update(&self, params: UpdateEmployeeParams) -> Result<Option<Employee>, AppError> {
        let employee_repo = EmployeeRepository::new(self.db);

        if employee_repo.get_by_id(params.id).await?.is_none() {
            return Ok(None);
        }

        self.ensure_position_exists(params.details.position_id)
            .await?;
        self.ensure_unique(&params.details, Some(params.id)).await?;

        let employee = employee_repo
            .update(params.id, params.details)
            .await
            .map_err(|e| AppError::from_unique_violation(e, contact_taken))?;

        Ok(Some(employee))
    }

    /// Deletes an employee
    ///
    /// Returns `false` if the employee doesn't exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = EmployeeRepository::new(self.db).delete(id).await?;

        Ok(deleted)
    }

    async fn ensure_position_exists(&self, position_id: i32) -> Result<(), AppError> {
        PositionRepository::new(self.db)
            .get_by_id(position_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Position not found with id: {}", position_id))
            })?;

        Ok(())
    }

    async fn ensure_unique(
        &self,
        details: &EmployeeDetails,
        exclude_id: Option<i32>,
    ) -> Result<(), AppError> {
        let employee_repo = EmployeeRepository::new(self.db);

        if employee_repo
            .exists_by_email(&details.email, exclude_id)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Employee with email {} already exists",
                details.email
            )));
        }
        if employee_repo
            .exists_by_phone_number(&details.phone_number, exclude_id)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Employee with phone number {} already exists",
                details.phone_number
            )));
        }

        Ok(())
    }
}

fn contact_taken() -> String {
    "Employee with the same email or phone number already exists".to_string()
}
