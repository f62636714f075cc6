//! Pooled JSON encoding.
//!
//! Encoding goes through a buffer checked out from a [`BufferPool`]; the buffer is handed back
//! when encoding finishes, whether it succeeded or not, and the caller receives an exactly sized
//! copy of the output.

mod pool;

pub use pool::{default_pool, BufferPool, PooledBuffer, DEFAULT_MAX_IDLE};

use serde::Serialize;

/// Encodes `value` as JSON using a buffer from the [`default_pool`].
pub fn encode<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
    encode_with(default_pool(), value)
}

/// Encodes `value` as JSON using a buffer from `pool`.
pub fn encode_with<T: Serialize + ?Sized>(
    pool: &BufferPool,
    value: &T,
) -> serde_json::Result<Vec<u8>> {
    let mut buf = pool.get();
    let mut serializer = serde_json::Serializer::new(&mut *buf);
    value.serialize(&mut serializer)?;
    Ok(buf.as_slice().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{ser::Error as _, Serializer};

    struct Failing;

    impl Serialize for Failing {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let _ = serializer;
            Err(S::Error::custom("refusing to serialize"))
        }
    }

    #[test]
    fn releases_buffer_on_success() {
        let pool = BufferPool::new();
        let before = pool.outstanding();
        let out = encode_with(&pool, &vec![1u64, 2]).unwrap();
        assert_eq!(out, b"[1,2]");
        assert_eq!(pool.outstanding(), before);
        assert_eq!(pool.idle(), 1);
    }

    #[test]
    fn releases_buffer_on_error() {
        let pool = BufferPool::new();
        let before = pool.outstanding();
        let err = encode_with(&pool, &Failing).unwrap_err();
        assert!(err.to_string().contains("refusing to serialize"));
        assert_eq!(pool.outstanding(), before);

        // the partially written buffer must not leak into the next checkout
        let out = encode_with(&pool, "ok").unwrap();
        assert_eq!(out, br#""ok""#);
    }
}
