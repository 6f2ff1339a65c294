//! Domain models for rental staff.

use crate::{
    model::employee::{CreateEmployeeDto, EmployeeDto, PaginatedEmployeesDto, UpdateEmployeeDto},
    server::model::pagination::Paginated,
};

/// An employee together with the name of their position.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub position_id: i32,
    pub position_name: String,
    pub phone_number: String,
    pub email: String,
}

impl Employee {
    /// Combines an employee row with its position row.
    pub fn from_entity(entity: entity::employee::Model, position: entity::position::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            position_id: entity.position_id,
            position_name: position.name,
            phone_number: entity.phone_number,
            email: entity.email,
        }
    }

    pub fn into_dto(self) -> EmployeeDto {
        EmployeeDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            position_id: self.position_id,
            position_name: self.position_name,
            phone_number: self.phone_number,
            email: self.email,
        }
    }
}

impl Paginated<Employee> {
    pub fn into_dto(self) -> PaginatedEmployeesDto {
        PaginatedEmployeesDto {
            employees: self.items.into_iter().map(Employee::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EmployeeDetails {
    pub first_name: String,
    pub last_name: String,
    pub position_id: i32,
    pub phone_number: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct CreateEmployeeParams {
    pub details: EmployeeDetails,
}

impl CreateEmployeeParams {
    pub fn from_dto(dto: CreateEmployeeDto) -> Self {
        Self {
            details: EmployeeDetails {
                first_name: dto.first_name.trim().to_string(),
                last_name: dto.last_name.trim().to_string(),
                position_id: dto.position_id,
                phone_number: dto.phone_number,
                email: dto.email.trim().to_lowercase(),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateEmployeeParams {
    pub id: i32,
    pub details: EmployeeDetails,
}

impl UpdateEmployeeParams {
    pub fn from_dto(dto: UpdateEmployeeDto) -> Self {
        Self {
            id: dto.id,
            details: EmployeeDetails {
                first_name: dto.first_name.trim().to_string(),
                last_name: dto.last_name.trim().to_string(),
                position_id: dto.position_id,
                phone_number: dto.phone_number,
                email: dto.email.trim().to_lowercase(),
            },
        }
    }
}

/// Optional exact-match filters; `position` matches the position name.
#[derive(Debug, Clone, Default)]
pub struct EmployeeSearchParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
}
