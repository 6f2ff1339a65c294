use axum::{
    routing::{get, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        car::{CarDto, CreateCarDto, PaginatedCarsDto, UpdateCarDto},
        customer::{CreateCustomerDto, CustomerDto, PaginatedCustomersDto, UpdateCustomerDto},
        employee::{CreateEmployeeDto, EmployeeDto, PaginatedEmployeesDto, UpdateEmployeeDto},
        position::{CreatePositionDto, PositionDto},
        reservation::{
            ChangeReservationStatusDto, CreateReservationDto, PaginatedReservationsDto,
            ReservationDto, ReservationStatusDto, UpdateReservationDto,
        },
    },
    server::{
        controller::{
            car::{self, CAR_TAG},
            customer::{self, CUSTOMER_TAG},
            employee::{self, EMPLOYEE_TAG},
            position::{self, POSITION_TAG},
            reservation::{self, RESERVATION_TAG},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Car Rental API"),
    paths(
        car::create_car,
        car::get_cars,
        car::search_cars,
        car::sort_cars,
        car::get_car_by_id,
        car::update_car,
        car::delete_car,
        customer::create_customer,
        customer::get_customers,
        customer::search_customers,
        customer::get_customer_by_id,
        customer::update_customer,
        customer::delete_customer,
        employee::create_employee,
        employee::get_employees,
        employee::search_employees,
        employee::get_employee_by_id,
        employee::update_employee,
        employee::delete_employee,
        position::create_position,
        position::get_positions,
        reservation::create_reservation,
        reservation::update_reservation,
        reservation::cancel_reservation,
        reservation::change_reservation_status,
        reservation::get_reservation_by_id,
        reservation::get_reservations,
    ),
    components(schemas(
        ErrorDto,
        CarDto,
        CreateCarDto,
        UpdateCarDto,
        PaginatedCarsDto,
        CustomerDto,
        CreateCustomerDto,
        UpdateCustomerDto,
        PaginatedCustomersDto,
        EmployeeDto,
        CreateEmployeeDto,
        UpdateEmployeeDto,
        PaginatedEmployeesDto,
        PositionDto,
        CreatePositionDto,
        ReservationDto,
        ReservationStatusDto,
        CreateReservationDto,
        UpdateReservationDto,
        ChangeReservationStatusDto,
        PaginatedReservationsDto,
    )),
    tags(
        (name = CAR_TAG, description = "Car fleet management and availability search"),
        (name = CUSTOMER_TAG, description = "Customer management"),
        (name = EMPLOYEE_TAG, description = "Employee management"),
        (name = POSITION_TAG, description = "Employee job positions"),
        (name = RESERVATION_TAG, description = "Car booking and reservation lifecycle"),
    )
)]
pub struct ApiDoc;

/// Builds every API route plus the Swagger UI at `/swagger-ui`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/cars",
            get(car::get_cars)
                .post(car::create_car)
                .put(car::update_car),
        )
        .route("/cars/search", get(car::search_cars))
        .route("/cars/sort", get(car::sort_cars))
        .route(
            "/cars/{id}",
            get(car::get_car_by_id).delete(car::delete_car),
        )
        .route(
            "/customers",
            get(customer::get_customers)
                .post(customer::create_customer)
                .put(customer::update_customer),
        )
        .route("/customers/search", get(customer::search_customers))
        .route(
            "/customers/{id}",
            get(customer::get_customer_by_id).delete(customer::delete_customer),
        )
        .route(
            "/employees",
            get(employee::get_employees)
                .post(employee::create_employee)
                .put(employee::update_employee),
        )
        .route("/employees/search", get(employee::search_employees))
        .route(
            "/employees/{id}",
            get(employee::get_employee_by_id).delete(employee::delete_employee),
        )
        .route(
            "/positions",
            get(position::get_positions).post(position::create_position),
        )
        .route(
            "/reservations",
            get(reservation::get_reservations)
                .post(reservation::create_reservation)
                .put(reservation::update_reservation),
        )
        .route("/reservations/{id}", get(reservation::get_reservation_by_id))
        .route(
            "/reservations/{id}/cancel",
            put(reservation::cancel_reservation),
        )
        .route(
            "/reservations/{id}/status",
            put(reservation::change_reservation_status),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
