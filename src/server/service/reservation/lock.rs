//! Per-car exclusive locks for booking transactions.
//!
//! A reservation write must check availability and current state without another
//! write for the same car interleaving. `CarLockManager` hands out one async mutex
//! per car ID, taken before the database transaction starts and held until it has
//! committed or rolled back. Inside the transaction the car row is additionally
//! locked with `SELECT ... FOR UPDATE` on databases that support row locks, which
//! also covers other processes sharing the database.

use std::{collections::HashMap, sync::Arc};

use sea_orm::ConnectionTrait;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::server::{data::car::CarRepository, error::AppError, model::car::Car};

/// Registry of per-car async mutexes.
///
/// Cloning is cheap and every clone shares the same registry. Entries nobody holds
/// or waits on are pruned whenever a new lock is requested, so the map only grows
/// with the number of cars being booked concurrently.
#[derive(Clone, Default)]
pub struct CarLockManager {
    locks: Arc<Mutex<HashMap<i32, Arc<Mutex<()>>>>>,
}

/// Exclusive hold on one car, released on drop.
pub struct CarLockGuard {
    car_id: i32,
    _guard: OwnedMutexGuard<()>,
}

impl CarLockGuard {
    pub fn car_id(&self) -> i32 {
        self.car_id
    }
}

impl CarLockManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until no other task holds the car and takes it.
    ///
    /// There is no timeout; waiters are served in FIFO order.
    pub async fn acquire(&self, car_id: i32) -> CarLockGuard {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks.entry(car_id).or_default().clone()
        };

        let guard = lock.lock_owned().await;
        tracing::trace!("Acquired booking lock for car {}", car_id);

        CarLockGuard {
            car_id,
            _guard: guard,
        }
    }

    /// Number of cars currently tracked by the registry.
    #[cfg(test)]
    pub async fn tracked_cars(&self) -> usize {
        self.locks.lock().await.len()
    }
}

/// Loads the car with a row lock held until the enclosing transaction ends.
///
/// # Returns
/// - `Ok(Car)` - The locked car
/// - `Err(AppError::NotFound)` - No car with this ID exists
/// - `Err(AppError::DbErr)` - Lock or query failure
pub async fn lock_car_for_update<C: ConnectionTrait>(txn: &C, car_id: i32) -> Result<Car, AppError> {
    CarRepository::new(txn)
        .find_for_update(car_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Car not found with id: {}", car_id)))
}
