//! Customer factory for creating test customer entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test customers with customizable fields.
///
/// Email, phone number and driving license number are derived from the shared
/// counter so every default customer satisfies the uniqueness constraints.
pub struct CustomerFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email: String,
    phone_number: String,
    driving_license_number: String,
}

impl<'a> CustomerFactory<'a> {
    /// Creates a new CustomerFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Jan"`
    /// - last_name: `"Kowalski {id}"`
    /// - email: `"customer{id}@example.com"`
    /// - phone_number: `{id}` zero-padded to nine digits
    /// - driving_license_number: `"DL{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Jan".to_string(),
            last_name: format!("Kowalski {}", id),
            email: format!("customer{}@example.com", id),
            phone_number: format!("{:09}", id),
            driving_license_number: format!("DL{:07}", id),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    pub fn driving_license_number(mut self, driving_license_number: impl Into<String>) -> Self {
        self.driving_license_number = driving_license_number.into();
        self
    }

    /// Builds and inserts the customer entity into the database.
    pub async fn build(self) -> Result<entity::customer::Model, DbErr> {
        entity::customer::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            phone_number: ActiveValue::Set(self.phone_number),
            driving_license_number: ActiveValue::Set(self.driving_license_number),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a customer with default values.
pub async fn create_customer(db: &DatabaseConnection) -> Result<entity::customer::Model, DbErr> {
    CustomerFactory::new(db).build().await
}
