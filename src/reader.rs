//! Double-buffered sequential reader with a background prefetch thread.
//!
//! [`DoubleBufferedReader`] hands out one element at a time from a
//! [`BlockSource`] while a dedicated thread fills the next chunk. Two chunks
//! exist per reader:
//!
//! - **Active**: drained by the consumer through [`Iterator::next`]
//! - **Staging**: filled by the prefetch thread
//!
//! When the active chunk runs dry the consumer waits for the pending fill,
//! takes ownership of the staging chunk and hands the drained one back to be
//! refilled. Chunks move between the two threads; they are never shared, so
//! neither side ever sees a chunk the other is writing. The prefetch thread is
//! at most one chunk ahead of the consumer.
//!
//! # Lifecycle
//!
//! The prefetch thread starts in the constructor, which also requests the
//! first fill. Dropping the reader stops the thread and joins it. A fill that
//! is already running is not interrupted, so `drop` waits for it to return.
//!
//! # Examples
//!
//! ```
//! use word_dict::DoubleBufferedReader;
//!
//! # fn example() -> Result<(), word_dict::WordDictError> {
//! let reader = DoubleBufferedReader::<u8>::from_bytes(b"hello", 2)?;
//! assert_eq!(reader.collect::<Vec<_>>(), b"hello");
//! # Ok(())
//! # }
//! ```

use std::{
    fmt::{self, Debug, Formatter},
    io,
    iter::FusedIterator,
    mem,
    path::Path,
    sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError},
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use serde::Serialize;

use crate::{
    WordDictError,
    element::Element,
    source::{BlockSource, BytesSource, FileSource},
};

/// Name given to every prefetch thread.
pub const PREFETCH_THREAD_NAME: &str = "word-dict-prefetch";

/// Elements per chunk when none is configured (256K).
pub const DEFAULT_CHUNK_SIZE: usize = 256 * 1024;

/// Fill handshake between the consumer and the prefetch thread.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoadState {
    /// No fill has been requested yet.
    Idle,
    /// The prefetch thread holds the staging chunk and is filling it.
    Loading,
    /// A filled chunk is parked and may be swapped in.
    Ready,
    /// The source is exhausted, failed, or the reader is shutting down.
    Eof,
}

/// Diagnostics gathered by a reader.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadStats {
    /// Wall-clock time the consumer spent blocked on fills.
    pub wait: Duration,
    /// Chunks swapped in from staging.
    pub swaps: u64,
    /// Elements handed to the consumer.
    pub elements: u64,
}

/// Fixed-capacity buffer and the count of valid elements at its front.
#[derive(Debug)]
struct Chunk<T> {
    data: Box<[T]>,
    len: usize,
}

impl<T: Element> Chunk<T> {
    /// Allocates `capacity` elements up front, failing instead of aborting.
    fn try_with_capacity(capacity: usize) -> Result<Self, WordDictError> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|source| WordDictError::Allocation {
                elements: capacity,
                source,
            })?;
        data.resize(capacity, T::default());

        Ok(Self {
            data: data.into_boxed_slice(),
            len: 0,
        })
    }

    fn filled(&self) -> &[T] {
        &self.data[..self.len]
    }

    #[inline]
    fn get(&self, index: usize) -> Option<T> {
        self.filled().get(index).copied()
    }

    const fn clear(&mut self) {
        self.len = 0;
    }

    /// Refills from `source`, never past capacity.
    fn refill<S: BlockSource<T>>(&mut self, source: &mut S) -> io::Result<usize> {
        self.clear();
        let count = source.fill(&mut self.data)?;
        self.len = count.min(self.data.len());
        Ok(self.len)
    }
}

/// State guarded by the handoff mutex.
#[derive(Debug)]
struct Shared<T> {
    state: LoadState,
    /// The staging chunk while it is parked; `None` while a fill runs.
    staging: Option<Chunk<T>>,
    error: Option<io::Error>,
    shutdown: bool,
}

#[derive(Debug)]
struct Handoff<T> {
    shared: Mutex<Shared<T>>,
    signal: Condvar,
}

impl<T> Handoff<T> {
    /// Locks for the prefetch thread and for teardown, where there is no caller to report to.
    fn lock_or_recover(&self) -> MutexGuard<'_, Shared<T>> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Sequential reader that prefetches the next chunk on a background thread.
pub struct DoubleBufferedReader<T: Element> {
    active: Chunk<T>,
    cursor: usize,
    eof: bool,
    error: Option<WordDictError>,
    stats: ReadStats,
    chunk_size: usize,
    len_hint: Option<u64>,
    handoff: Arc<Handoff<T>>,
    worker: Option<JoinHandle<()>>,
}

impl<T: Element> DoubleBufferedReader<T> {
    /// Starts a reader over `source` that loads `chunk_size` elements at a time.
    ///
    /// Chunks are never larger than the source's `len_hint` (or one element
    /// for an empty source). The first chunk begins loading before this returns.
    ///
    /// # Errors
    ///
    /// - `WordDictError::ChunkSize` if `chunk_size` is zero
    /// - `WordDictError::Allocation` if the chunks cannot be allocated
    /// - `WordDictError::Spawn` if the prefetch thread cannot be started
    pub fn new<S: BlockSource<T>>(source: S, chunk_size: usize) -> Result<Self, WordDictError> {
        if chunk_size == 0 {
            return Err(WordDictError::ChunkSize);
        }

        let len_hint = source.len_hint();
        let chunk_size = len_hint.map_or(chunk_size, |hint| {
            usize::try_from(hint).map_or(chunk_size, |hint| chunk_size.min(hint.max(1)))
        });
        let active = Chunk::try_with_capacity(chunk_size)?;
        let staging = Chunk::try_with_capacity(chunk_size)?;

        let handoff = Arc::new(Handoff {
            shared: Mutex::new(Shared {
                state: LoadState::Idle,
                staging: Some(staging),
                error: None,
                shutdown: false,
            }),
            signal: Condvar::new(),
        });

        let worker = thread::Builder::new()
            .name(PREFETCH_THREAD_NAME.to_string())
            .spawn({
                let handoff = Arc::clone(&handoff);
                move || prefetch(&handoff, source)
            })
            .map_err(WordDictError::Spawn)?;

        let reader = Self {
            active,
            cursor: 0,
            eof: false,
            error: None,
            stats: ReadStats::default(),
            chunk_size,
            len_hint,
            handoff,
            worker: Some(worker),
        };
        reader.request_fill()?;

        Ok(reader)
    }

    /// Opens a file and reads it as elements of `T`.
    ///
    /// # Errors
    ///
    /// Returns `WordDictError::Io` if the file cannot be opened, or any error
    /// from [`DoubleBufferedReader::new`].
    pub fn open(path: impl AsRef<Path>, chunk_size: usize) -> Result<Self, WordDictError> {
        Self::new(FileSource::<T>::open(path)?, chunk_size)
    }

    /// Reads elements of `T` decoded from `bytes`.
    ///
    /// # Errors
    ///
    /// Returns any error from [`DoubleBufferedReader::new`].
    pub fn from_bytes<B: AsRef<[u8]>>(bytes: B, chunk_size: usize) -> Result<Self, WordDictError> {
        Self::new(BytesSource::<T>::new(bytes), chunk_size)
    }

    /// Returns the next element, or `Ok(None)` once the source is exhausted.
    ///
    /// Unlike [`Iterator::next`], a failed fill is reported rather than
    /// silently ending the stream.
    ///
    /// # Errors
    ///
    /// Returns the error that ended the stream exactly once, in place of the
    /// first `None`:
    /// - `WordDictError::Source` if the block source failed
    /// - `WordDictError::MutexPoisoned` if the handoff lock was poisoned
    pub fn try_next(&mut self) -> Result<Option<T>, WordDictError> {
        match self.next() {
            Some(element) => Ok(Some(element)),
            None => self.error.take().map_or(Ok(None), Err),
        }
    }

    /// Takes the error that ended the stream, if any.
    pub const fn take_error(&mut self) -> Option<WordDictError> {
        self.error.take()
    }

    /// Total time spent waiting on the prefetch thread.
    pub const fn total_wait(&self) -> Duration {
        self.stats.wait
    }

    /// Wait time, swap count and elements delivered so far.
    pub const fn stats(&self) -> ReadStats {
        self.stats
    }

    /// Capacity of each chunk in elements, after capping to the source length.
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Total elements the source reported up front, if it knew.
    pub const fn len_hint(&self) -> Option<u64> {
        self.len_hint
    }

    /// Whether the consumer has reached the end of the stream.
    pub const fn is_eof(&self) -> bool {
        self.eof
    }

    /// Elements already loaded into the active chunk but not yet returned.
    pub fn buffer(&self) -> &[T] {
        &self.active.filled()[self.cursor..]
    }

    #[inline]
    fn take_buffered(&mut self) -> Option<T> {
        let element = self.active.get(self.cursor)?;
        self.cursor += 1;
        self.stats.elements += 1;
        Some(element)
    }

    /// Asks the prefetch thread to fill the parked staging chunk.
    fn request_fill(&self) -> Result<(), WordDictError> {
        let mut shared = self
            .handoff
            .shared
            .lock()
            .map_err(|_| WordDictError::MutexPoisoned)?;
        shared.state = LoadState::Loading;
        drop(shared);
        self.handoff.signal.notify_one();
        Ok(())
    }

    /// Blocks for the pending fill and swaps it in, recording the wait.
    ///
    /// Returns `false` and marks end of stream if nothing more is coming.
    fn swap_in(&mut self) -> bool {
        let started = Instant::now();
        let swapped = self.wait_and_swap();
        self.stats.wait += started.elapsed();

        match swapped {
            Ok(true) => {
                self.stats.swaps += 1;
                true
            }
            Ok(false) => {
                self.eof = true;
                false
            }
            Err(err) => {
                self.eof = true;
                self.error = Some(err);
                false
            }
        }
    }

    fn wait_and_swap(&mut self) -> Result<bool, WordDictError> {
        let mut shared = self
            .handoff
            .shared
            .lock()
            .map_err(|_| WordDictError::MutexPoisoned)?;

        loop {
            shared = self
                .handoff
                .signal
                .wait_while(shared, |pending| pending.state == LoadState::Loading)
                .map_err(|_| WordDictError::MutexPoisoned)?;

            match shared.state {
                LoadState::Ready => break,
                LoadState::Eof => {
                    self.error = shared.error.take().map(WordDictError::Source);
                    return Ok(false);
                }
                LoadState::Idle => {
                    shared.state = LoadState::Loading;
                    self.handoff.signal.notify_one();
                }
                LoadState::Loading => {}
            }
        }

        // `Ready` always parks the chunk it just filled.
        let Some(filled) = shared.staging.take() else {
            return Ok(false);
        };
        let mut drained = mem::replace(&mut self.active, filled);
        drained.clear();
        shared.staging = Some(drained);
        shared.state = LoadState::Loading;
        drop(shared);
        self.handoff.signal.notify_one();

        self.cursor = 0;
        Ok(true)
    }
}

impl<T: Element> Iterator for DoubleBufferedReader<T> {
    type Item = T;

    /// Returns the next element, blocking only when the active chunk is spent.
    ///
    /// A failed fill ends the stream; the cause is kept for
    /// [`DoubleBufferedReader::try_next`] and [`DoubleBufferedReader::take_error`].
    #[inline]
    fn next(&mut self) -> Option<T> {
        if let Some(element) = self.take_buffered() {
            return Some(element);
        }
        if self.eof || !self.swap_in() {
            return None;
        }

        self.take_buffered()
    }
}

impl<T: Element> FusedIterator for DoubleBufferedReader<T> {}

impl<T: Element> Debug for DoubleBufferedReader<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoubleBufferedReader")
            .field("chunk_size", &self.chunk_size)
            .field("cursor", &self.cursor)
            .field("buffered", &self.active.len.saturating_sub(self.cursor))
            .field("eof", &self.eof)
            .field("len_hint", &self.len_hint)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl<T: Element> Drop for DoubleBufferedReader<T> {
    fn drop(&mut self) {
        self.handoff.lock_or_recover().shutdown = true;
        self.handoff.signal.notify_all();

        if let Some(worker) = self.worker.take() {
            // A panicking source already published `Eof` on its way out.
            drop(worker.join());
        }
    }
}

/// Prefetch loop: fill staging whenever the consumer asks, until exhausted or shut down.
fn prefetch<T: Element, S: BlockSource<T>>(handoff: &Handoff<T>, mut source: S) {
    let _exit = PublishEofOnExit(handoff);

    loop {
        let mut chunk = {
            let shared = handoff.lock_or_recover();
            let mut shared = handoff
                .signal
                .wait_while(shared, |pending| {
                    pending.state != LoadState::Loading && !pending.shutdown
                })
                .unwrap_or_else(PoisonError::into_inner);

            if shared.shutdown {
                return;
            }
            let Some(chunk) = shared.staging.take() else {
                return;
            };
            chunk
        };

        // The lock is released while the source does its I/O.
        let filled = chunk.refill(&mut source);

        let mut shared = handoff.lock_or_recover();
        let state = match filled {
            Ok(0) => LoadState::Eof,
            Ok(_) => LoadState::Ready,
            Err(err) => {
                shared.error = Some(err);
                LoadState::Eof
            }
        };
        shared.state = state;
        shared.staging = Some(chunk);
        let finished = state == LoadState::Eof || shared.shutdown;
        drop(shared);
        handoff.signal.notify_one();

        if finished {
            return;
        }
    }
}

/// Marks the stream finished when the prefetch thread exits, including by panic.
struct PublishEofOnExit<'a, T>(&'a Handoff<T>);

impl<T> Drop for PublishEofOnExit<'_, T> {
    fn drop(&mut self) {
        let mut shared = self.0.lock_or_recover();
        if thread::panicking() && shared.error.is_none() {
            shared.error = Some(io::Error::other("block source panicked"));
        }
        shared.state = LoadState::Eof;
        drop(shared);
        self.0.signal.notify_all();
    }
}
