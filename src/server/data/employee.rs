use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, SelectTwo,
};

use crate::server::model::{
    employee::{Employee, EmployeeDetails, EmployeeSearchParams},
    pagination::PageRequest,
};

type EmployeeWithPosition = (entity::employee::Model, Option<entity::position::Model>);

pub struct EmployeeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EmployeeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new employee
    ///
    /// The position must already exist.
    pub async fn create(&self, details: EmployeeDetails) -> Result<Employee, DbErr> {
        let employee = entity::employee::ActiveModel {
            first_name: ActiveValue::Set(details.first_name),
            last_name: ActiveValue::Set(details.last_name),
            position_id: ActiveValue::Set(details.position_id),
            phone_number: ActiveValue::Set(details.phone_number),
            email: ActiveValue::Set(details.email),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.with_position(employee).await
    }

    /// Gets an employee with their position by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Employee>, DbErr> {
        let row = entity::prelude::Employee::find_by_id(id)
            .find_also_related(entity::prelude::Position)
            .one(self.db)
            .await?;

        row.map(into_employee).transpose()
    }

    /// Gets paginated employees ordered by ID
    pub async fn get_paginated(&self, page: PageRequest) -> Result<(Vec<Employee>, u64), DbErr> {
        let query = entity::prelude::Employee::find().find_also_related(entity::prelude::Position);

        self.fetch_page(query, page).await
    }

    /// Searches employees by exact first name, last name and position name
    pub async fn search(
        &self,
        params: EmployeeSearchParams,
        page: PageRequest,
    ) -> Result<(Vec<Employee>, u64), DbErr> {
        let mut query =
            entity::prelude::Employee::find().find_also_related(entity::prelude::Position);

        if let Some(first_name) = params.first_name {
            query = query.filter(entity::employee::Column::FirstName.eq(first_name));
        }
        if let Some(last_name) = params.last_name {
            query = query.filter(entity::employee::Column::LastName.eq(last_name));
        }
        if let Some(position) = params.position {
            query = query.filter(entity::position::Column::Name.eq(position));
        }

        self.fetch_page(query, page).await
    }

    /// Replaces every mutable field of an employee
    pub async fn update(&self, id: i32, details: EmployeeDetails) -> Result<Employee, DbErr> {
        let employee = entity::prelude::Employee::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Employee with id {} not found",
                id
            )))?;

        let mut active_model: entity::employee::ActiveModel = employee.into();
        active_model.first_name = ActiveValue::Set(details.first_name);
        active_model.last_name = ActiveValue::Set(details.last_name);
        active_model.position_id = ActiveValue::Set(details.position_id);
        active_model.phone_number = ActiveValue::Set(details.phone_number);
        active_model.email = ActiveValue::Set(details.email);

        let employee = active_model.update(self.db).await?;

        self.with_position(employee).await
    }

    /// Deletes an employee, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Employee::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether another employee already uses the email address
    pub async fn exists_by_email(&self, email: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        self.exists_with(entity::employee::Column::Email, email, exclude_id)
            .await
    }

    /// Checks whether another employee already uses the phone number
    pub async fn exists_by_phone_number(
        &self,
        phone_number: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        self.exists_with(entity::employee::Column::PhoneNumber, phone_number, exclude_id)
            .await
    }

    async fn exists_with(
        &self,
        column: entity::employee::Column,
        value: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Employee::find().filter(column.eq(value));
        if let Some(id) = exclude_id {
            query = query.filter(entity::employee::Column::Id.ne(id));
        }

        let count = query.count(self.db).await?;

        Ok(count > 0)
    }

    async fn with_position(&self, employee: entity::employee::Model) -> Result<Employee, DbErr> {
        let position = entity::prelude::Position::find_by_id(employee.position_id)
            .one(self.db)
            .await?;

        into_employee((employee, position))
    }

    async fn fetch_page(
        &self,
        query: SelectTwo<entity::employee::Entity, entity::position::Entity>,
        page: PageRequest,
    ) -> Result<(Vec<Employee>, u64), DbErr> {
        let paginator = query
            .order_by_asc(entity::employee::Column::Id)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.page).await?;

        let employees = rows
            .into_iter()
            .map(into_employee)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((employees, total))
    }
}

fn into_employee((employee, position): EmployeeWithPosition) -> Result<Employee, DbErr> {
    let position = position.ok_or_else(|| {
        DbErr::RecordNotFound(format!(
            "Position {} of employee {} not found",
            employee.position_id, employee.id
        ))
    })?;

    Ok(Employee::from_entity(employee, position))
}
