//! Memo table for terminal classification.
//!
//! Only the terminal status of a board is stored, never a search score, so an
//! entry is a pure function of its key and can be written by any thread at
//! any time. Concurrent writers racing on the same board store the same value.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use log::debug;

use crate::game::{Board, Terminal};

/// Counters describing how the cache has been used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub entries: usize,
}

/// Board to [`Terminal`] map shared by every search that owns it.
///
/// With a capacity of 0 the table only grows. Otherwise it is emptied
/// whenever an insert would take it past `capacity`.
#[derive(Debug)]
pub struct TerminalCache {
    entries: RwLock<HashMap<Board, Terminal>>,
    capacity: usize,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl TerminalCache {
    /// Unbounded cache.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TerminalCache {
            entries: RwLock::new(HashMap::new()),
            capacity,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    pub fn get(&self, board: &Board) -> Option<Terminal> {
        // A poisoned lock still holds consistent entries: values are never
        // partially written.
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        let found = entries.get(board).copied();
        match found {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };
        found
    }

    pub fn insert(&self, board: Board, terminal: Terminal) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        if self.capacity > 0 && entries.len() >= self.capacity && !entries.contains_key(&board) {
            debug!("terminal cache full at {} entries, clearing", entries.len());
            entries.clear();
            self.evictions.fetch_add(1, Ordering::Relaxed);
        }
        entries.insert(board, terminal);
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}

impl Default for TerminalCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    fn board_with(col: usize) -> Board {
        Board::new().apply_move(col, Player::Red).unwrap()
    }

    #[test]
    fn test_miss_then_hit() {
        let cache = TerminalCache::new();
        let board = board_with(0);
        assert!(cache.is_empty());
        assert_eq!(cache.get(&board), None);
        cache.insert(board, Terminal::Ongoing);
        assert_eq!(cache.get(&board), Some(Terminal::Ongoing));

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 1);
    }

    #[test]
    fn test_unbounded_keeps_everything() {
        let cache = TerminalCache::new();
        for col in 0..7 {
            cache.insert(board_with(col), Terminal::Ongoing);
        }
        assert_eq!(cache.len(), 7);
        assert_eq!(cache.stats().evictions, 0);
    }

    #[test]
    fn test_bounded_clears_when_full() {
        let cache = TerminalCache::with_capacity(3);
        for col in 0..3 {
            cache.insert(board_with(col), Terminal::Ongoing);
        }
        assert_eq!(cache.len(), 3);

        // Re-inserting a known key does not evict.
        cache.insert(board_with(1), Terminal::Ongoing);
        assert_eq!(cache.len(), 3);

        cache.insert(board_with(5), Terminal::Ongoing);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&board_with(5)), Some(Terminal::Ongoing));
        assert_eq!(cache.get(&board_with(0)), None);
        assert_eq!(cache.stats().evictions, 1);
    }
}
