//! A pool of reusable serialization buffers.

use parking_lot::Mutex;
use std::{
    ops::{Deref, DerefMut},
    sync::atomic::{AtomicUsize, Ordering},
};
use tracing::trace;

/// The number of idle buffers a pool keeps around by default.
pub const DEFAULT_MAX_IDLE: usize = 64;

/// A pool of byte buffers that can be checked out concurrently.
///
/// A buffer is handed out as a [`PooledBuffer`] guard. Dropping the guard clears the buffer and
/// returns it to the pool, so a buffer never carries bytes from one checkout into the next and is
/// released on every exit path of the code holding it.
#[derive(Debug)]
pub struct BufferPool {
    /// Cleared buffers ready for reuse.
    idle: Mutex<Vec<Vec<u8>>>,
    /// Number of buffers currently checked out.
    outstanding: AtomicUsize,
    /// Upper bound for `idle`, surplus buffers are dropped on release.
    max_idle: usize,
}

// === impl BufferPool ===

impl BufferPool {
    /// Creates an empty pool that keeps up to [`DEFAULT_MAX_IDLE`] idle buffers.
    pub const fn new() -> Self {
        Self::with_max_idle(DEFAULT_MAX_IDLE)
    }

    /// Creates an empty pool that keeps up to `max_idle` idle buffers.
    pub const fn with_max_idle(max_idle: usize) -> Self {
        Self {
            idle: parking_lot::const_mutex(Vec::new()),
            outstanding: AtomicUsize::new(0),
            max_idle,
        }
    }

    /// Checks out an empty buffer, reusing an idle one if available.
    pub fn get(&self) -> PooledBuffer<'_> {
        let buf = self.idle.lock().pop().unwrap_or_default();
        debug_assert!(buf.is_empty(), "idle buffers are cleared on release");
        self.outstanding.fetch_add(1, Ordering::Relaxed);
        PooledBuffer { buf, pool: self }
    }

    /// Returns the number of buffers that are currently checked out.
    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::Relaxed)
    }

    /// Returns the number of idle buffers held by the pool.
    pub fn idle(&self) -> usize {
        self.idle.lock().len()
    }

    fn release(&self, mut buf: Vec<u8>) {
        buf.clear();
        self.outstanding.fetch_sub(1, Ordering::Relaxed);

        let mut idle = self.idle.lock();
        if idle.len() < self.max_idle {
            idle.push(buf);
        } else {
            drop(idle);
            trace!(target: "rpc::json", capacity = buf.capacity(), "dropping surplus buffer");
        }
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the process wide pool used by the encoders.
pub fn default_pool() -> &'static BufferPool {
    static POOL: BufferPool = BufferPool::new();
    &POOL
}

/// A buffer checked out from a [`BufferPool`].
///
/// Returned to the pool when dropped.
#[derive(Debug)]
pub struct PooledBuffer<'a> {
    buf: Vec<u8>,
    pool: &'a BufferPool,
}

impl Deref for PooledBuffer<'_> {
    type Target = Vec<u8>;

    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buf
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        self.pool.release(std::mem::take(&mut self.buf));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffers_are_reused_and_cleared() {
        let pool = BufferPool::new();
        {
            let mut buf = pool.get();
            buf.extend_from_slice(b"stale");
            assert_eq!(pool.outstanding(), 1);
        }
        assert_eq!(pool.outstanding(), 0);
        assert_eq!(pool.idle(), 1);

        let buf = pool.get();
        assert!(buf.is_empty());
        assert!(buf.capacity() >= 5);
        assert_eq!(pool.idle(), 0);
    }

    #[test]
    fn surplus_buffers_are_dropped() {
        let pool = BufferPool::with_max_idle(1);
        let first = pool.get();
        let second = pool.get();
        assert_eq!(pool.outstanding(), 2);
        drop(first);
        drop(second);
        assert_eq!(pool.outstanding(), 0);
        assert_eq!(pool.idle(), 1);
    }

    #[test]
    fn concurrent_checkout() {
        let pool = BufferPool::new();
        std::thread::scope(|scope| {
            for i in 0..8u8 {
                let pool = &pool;
                scope.spawn(move || {
                    for _ in 0..100 {
                        let mut buf = pool.get();
                        assert!(buf.is_empty());
                        buf.push(i);
                    }
                });
            }
        });
        assert_eq!(pool.outstanding(), 0);
        assert!(pool.idle() <= DEFAULT_MAX_IDLE);
    }
}
