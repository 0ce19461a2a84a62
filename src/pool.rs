//! Reusable buffers for the path recorded during removal.
//!
//! `Trie::remove` records, for every level it descends, the index of the child
//! it entered. Those buffers are drawn from a process-wide free list so that a
//! stream of removals does not allocate one per call. A `ScratchPath` hands its
//! buffer back when dropped, whichever way `remove` returns.

use std::ops::{Deref, DerefMut};

#[cfg(feature = "scratch-pool")]
use once_cell::sync::Lazy;
#[cfg(feature = "scratch-pool")]
use std::sync::Mutex;

/// Initial capacity of a freshly allocated path buffer.
pub(crate) const PATH_CAPACITY: usize = 50;

/// Upper bound on the number of idle buffers kept in the pool.
#[cfg_attr(not(feature = "scratch-pool"), allow(dead_code))]
pub(crate) const MAX_POOLED: usize = 64;

/// Buffers that grew past this capacity are freed instead of pooled.
#[cfg_attr(not(feature = "scratch-pool"), allow(dead_code))]
pub(crate) const MAX_RETAINED_CAPACITY: usize = 1024;

#[cfg(feature = "scratch-pool")]
static POOL: Lazy<Mutex<Vec<Vec<usize>>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// A path buffer borrowed from the pool for the duration of one removal.
#[derive(Debug)]
pub(crate) struct ScratchPath {
    buf: Vec<usize>,
}

impl ScratchPath {
    /// Takes an idle buffer from the pool, or allocates one if none is idle.
    pub(crate) fn acquire() -> Self {
        #[cfg(feature = "scratch-pool")]
        {
            if let Ok(mut idle) = POOL.lock() {
                if let Some(buf) = idle.pop() {
                    return ScratchPath { buf };
                }
            }
        }

        ScratchPath {
            buf: Vec::with_capacity(PATH_CAPACITY),
        }
    }
}

impl Deref for ScratchPath {
    type Target = Vec<usize>;

    fn deref(&self) -> &Vec<usize> {
        &self.buf
    }
}

impl DerefMut for ScratchPath {
    fn deref_mut(&mut self) -> &mut Vec<usize> {
        &mut self.buf
    }
}

impl Drop for ScratchPath {
    fn drop(&mut self) {
        #[cfg(feature = "scratch-pool")]
        {
            if self.buf.capacity() > MAX_RETAINED_CAPACITY {
                return;
            }
            let mut buf = std::mem::take(&mut self.buf);
            buf.clear();
            if let Ok(mut idle) = POOL.lock() {
                if idle.len() < MAX_POOLED {
                    idle.push(buf);
                }
            }
        }
    }
}

#[cfg(all(test, feature = "scratch-pool"))]
pub(crate) fn idle_buffers() -> usize {
    POOL.lock().map(|idle| idle.len()).unwrap_or(0)
}
