//! Internal testing utilities

use crate::root::sync::atomic::{AtomicUsize, Ordering};

//  A hash function sending every element into the same bucket.
pub fn constant_hash<T>(_: &T) -> usize { 0 }

//  A hash function spreading consecutive integers over consecutive buckets.
pub fn identity_hash(value: &u32) -> usize { *value as usize }

//  SpyCount
//
//  A counter of the number of instances of elements.
pub struct SpyCount(AtomicUsize);

impl SpyCount {
    pub fn zero() -> Self { SpyCount(AtomicUsize::new(0)) }

    pub fn get(&self) -> usize { self.0.load(Ordering::Relaxed) }

    fn decrement(&self) { self.0.fetch_sub(1, Ordering::Relaxed); }

    fn increment(&self) { self.0.fetch_add(1, Ordering::Relaxed); }
}

//  Spy Element
//
//  An element tracking the number of instances, helpful to ensure proper drop.
//
//  Two spies are equal if their identifiers are.
pub struct SpyElement<'a> {
    count: &'a SpyCount,
    id: u32,
}

impl<'a> SpyElement<'a> {
    pub fn new(count: &'a SpyCount, id: u32) -> Self {
        count.increment();
        SpyElement { count, id }
    }

    pub fn id(&self) -> u32 { self.id }
}

impl<'a> Clone for SpyElement<'a> {
    fn clone(&self) -> Self { SpyElement::new(self.count, self.id) }
}

impl<'a> PartialEq for SpyElement<'a> {
    fn eq(&self, other: &Self) -> bool { self.id == other.id }
}

impl<'a> Eq for SpyElement<'a> {}

impl<'a> Drop for SpyElement<'a> {
    fn drop(&mut self) {
        self.count.decrement();
    }
}
