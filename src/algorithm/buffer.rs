//! Fallible amortised growth for search buffers
//!
//! Every buffer the engine grows while searching goes through [`TryPush`],
//! so an allocation failure surfaces as [`TilingError::ResourceExhausted`]
//! instead of aborting the process.
//!
//! [`TilingError::ResourceExhausted`]: crate::io::error::TilingError::ResourceExhausted

use crate::io::error::{Result, resource_exhausted};
use std::collections::VecDeque;

/// Growable buffers whose growth may fail
pub trait TryPush<T> {
    /// Append a value, doubling the capacity first when the buffer is full
    ///
    /// # Errors
    ///
    /// Returns `ResourceExhausted` naming `operation` if the allocation fails
    fn try_push(&mut self, value: T, operation: &'static str) -> Result<()>;
}

// Doubling keeps growth amortised O(1)
const fn growth(capacity: usize) -> usize {
    if capacity == 0 { 1 } else { capacity }
}

impl<T> TryPush<T> for Vec<T> {
    fn try_push(&mut self, value: T, operation: &'static str) -> Result<()> {
        if self.len() == self.capacity() {
            let additional = growth(self.capacity());
            let requested = self.len().saturating_add(additional);
            self.try_reserve(additional).map_err(|error| {
                log::error!("{operation}: {error}");
                resource_exhausted(operation, requested)
            })?;
        }
        self.push(value);
        Ok(())
    }
}

impl<T> TryPush<T> for VecDeque<T> {
    fn try_push(&mut self, value: T, operation: &'static str) -> Result<()> {
        if self.len() == self.capacity() {
            let additional = growth(self.capacity());
            let requested = self.len().saturating_add(additional);
            self.try_reserve(additional).map_err(|error| {
                log::error!("{operation}: {error}");
                resource_exhausted(operation, requested)
            })?;
        }
        self.push_back(value);
        Ok(())
    }
}

/// Allocate an empty vector with room for `capacity` elements
///
/// # Errors
///
/// Returns `ResourceExhausted` naming `operation` if the allocation fails
pub fn try_with_capacity<T>(capacity: usize, operation: &'static str) -> Result<Vec<T>> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(capacity).map_err(|error| {
        log::error!("{operation}: {error}");
        resource_exhausted(operation, capacity)
    })?;
    Ok(buffer)
}

/// Allocate an empty queue with room for `capacity` elements
///
/// # Errors
///
/// Returns `ResourceExhausted` naming `operation` if the allocation fails
pub fn try_queue_with_capacity<T>(capacity: usize, operation: &'static str) -> Result<VecDeque<T>> {
    let mut queue = VecDeque::new();
    queue.try_reserve_exact(capacity).map_err(|error| {
        log::error!("{operation}: {error}");
        resource_exhausted(operation, capacity)
    })?;
    Ok(queue)
}
