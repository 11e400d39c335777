//! Tests for fallible buffer growth

#[cfg(test)]
mod tests {
    use dominotile::TilingError;
    use dominotile::algorithm::buffer::{TryPush, try_queue_with_capacity, try_with_capacity};
    use std::collections::VecDeque;

    // Tests vectors grow past their initial capacity
    // Verified by skipping the reserve before pushing
    #[test]
    fn test_vec_try_push_grows() {
        let mut buffer: Vec<usize> = Vec::new();
        for value in 0..100 {
            buffer.try_push(value, "test buffer").unwrap();
        }
        assert_eq!(buffer.len(), 100);
        assert_eq!(buffer.last(), Some(&99));
    }

    // Tests queues grow and keep FIFO order
    // Verified by pushing to the front instead of the back
    #[test]
    fn test_queue_try_push_grows() {
        let mut queue: VecDeque<usize> = VecDeque::new();
        for value in 0..50 {
            queue.try_push(value, "test queue").unwrap();
        }
        assert_eq!(queue.len(), 50);
        assert_eq!(queue.pop_front(), Some(0));
        assert_eq!(queue.pop_back(), Some(49));
    }

    // Tests preallocation reserves at least the requested room
    // Verified by reserving zero elements
    #[test]
    fn test_with_capacity() {
        let buffer: Vec<u32> = try_with_capacity(64, "test buffer").unwrap();
        assert!(buffer.capacity() >= 64);
        assert!(buffer.is_empty());

        let queue: VecDeque<u32> = try_queue_with_capacity(16, "test queue").unwrap();
        assert!(queue.capacity() >= 16);
    }

    // Tests an impossible allocation surfaces as ResourceExhausted
    // Verified by unwrapping the reservation result
    #[test]
    fn test_impossible_allocation_is_an_error() {
        let result: Result<Vec<u64>, _> = try_with_capacity(usize::MAX, "test buffer");
        match result {
            Err(TilingError::ResourceExhausted {
                operation,
                requested,
            }) => {
                assert_eq!(operation, "test buffer");
                assert_eq!(requested, usize::MAX);
            }
            other => unreachable!("Expected ResourceExhausted, got {other:?}"),
        }

        let queue: Result<VecDeque<u64>, _> = try_queue_with_capacity(usize::MAX, "test queue");
        assert!(matches!(
            queue,
            Err(TilingError::ResourceExhausted { .. })
        ));
    }
}
