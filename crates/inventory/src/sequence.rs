//! Monotonic id allocation.

use core::marker::PhantomData;

use partstock_core::{DomainError, DomainResult};

/// Hands out ids in increasing order, starting at a configurable value.
///
/// An id is never handed out twice, even if the record holding it is deleted.
/// Once `u32::MAX` has been handed out the sequence is exhausted and refuses
/// further allocations instead of wrapping.
#[derive(Debug, Clone)]
pub struct IdSequence<T> {
    next: Option<u32>,
    _id: PhantomData<T>,
}

impl<T: From<u32>> IdSequence<T> {
    pub fn starting_at(first: u32) -> Self {
        Self {
            next: Some(first),
            _id: PhantomData,
        }
    }

    /// Return the current value, then advance.
    pub fn next_id(&mut self) -> DomainResult<T> {
        let id = self
            .next
            .ok_or_else(|| DomainError::constraint("id sequence exhausted"))?;
        self.next = id.checked_add(1);
        Ok(T::from(id))
    }
}
