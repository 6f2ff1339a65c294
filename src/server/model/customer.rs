//! Domain models for rental customers.

use crate::{
    model::customer::{CreateCustomerDto, CustomerDto, PaginatedCustomersDto, UpdateCustomerDto},
    server::model::pagination::Paginated,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub driving_license_number: String,
}

impl Customer {
    pub fn from_entity(entity: entity::customer::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone_number: entity.phone_number,
            driving_license_number: entity.driving_license_number,
        }
    }

    pub fn into_dto(self) -> CustomerDto {
        CustomerDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
            driving_license_number: self.driving_license_number,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Paginated<Customer> {
    pub fn into_dto(self) -> PaginatedCustomersDto {
        PaginatedCustomersDto {
            customers: self.items.into_iter().map(Customer::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Contact and licence fields that must stay unique across customers.
#[derive(Debug, Clone)]
pub struct CustomerDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub driving_license_number: String,
}

#[derive(Debug, Clone)]
pub struct CreateCustomerParams {
    pub details: CustomerDetails,
}

impl CreateCustomerParams {
    pub fn from_dto(dto: CreateCustomerDto) -> Self {
        Self {
            details: CustomerDetails {
                first_name: dto.first_name.trim().to_string(),
                last_name: dto.last_name.trim().to_string(),
                email: dto.email.trim().to_lowercase(),
                phone_number: dto.phone_number,
                driving_license_number: dto.driving_license_number.trim().to_string(),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCustomerParams {
    pub id: i32,
    pub details: CustomerDetails,
}

impl UpdateCustomerParams {
    pub fn from_dto(dto: UpdateCustomerDto) -> Self {
        Self {
            id: dto.id,
            details: CustomerDetails {
                first_name: dto.first_name.trim().to_string(),
                last_name: dto.last_name.trim().to_string(),
                email: dto.email.trim().to_lowercase(),
                phone_number: dto.phone_number,
                driving_license_number: dto.driving_license_number.trim().to_string(),
            },
        }
    }
}

/// Optional exact-match filters on customer names.
#[derive(Debug, Clone, Default)]
pub struct CustomerSearchParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
