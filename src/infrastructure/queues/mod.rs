//! Queue implementations - In-memory staging queues

mod keyed_queue;

pub use keyed_queue::KeyedQueue;
