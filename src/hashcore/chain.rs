//! The singly linked chain of a bucket.

use super::capacity::BucketIndex;
use super::root::boxed::Box;
use super::root::iter;

type Link<T> = Option<Box<Entry<T>>>;

//  An element, as stored in a chain.
//
//  The full hash is cached, so that re-bucketing an entry never needs to call
//  back into the hash function.
pub struct Entry<T> {
    //  The full hash of the element.
    pub hash: usize,
    //  The bucket the entry is currently linked into.
    pub bucket: BucketIndex,
    pub element: T,
    next: Link<T>,
}

impl<T> Entry<T> {
    //  Creates a new, unlinked, entry.
    pub fn new(hash: usize, bucket: BucketIndex, element: T) -> Box<Self> {
        Box::new(Entry { hash, bucket, element, next: None })
    }
}

//  A chain of entries, in insertion order.
pub struct Chain<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Chain<T> {
    //  Creates an empty chain.
    pub fn new() -> Self { Chain { head: None, len: 0 } }

    //  Returns the number of entries.
    pub fn len(&self) -> usize { self.len }

    //  Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> ChainIterator<'_, T> {
        ChainIterator { link: self.head.as_deref() }
    }

    //  Returns the first entry whose element equals `element`, if any.
    pub fn find(&self, element: &T) -> Option<&Entry<T>>
    where
        T: PartialEq,
    {
        self.iter().find(|entry| entry.element == *element)
    }

    //  Links `entry` at the tail of the chain.
    //
    //  Does not check for duplicates: the caller is responsible for it.
    pub fn link(&mut self, entry: Box<Entry<T>>) {
        debug_assert!(entry.next.is_none());

        let mut link = &mut self.head;
        while let Some(current) = link {
            link = &mut current.next;
        }

        *link = Some(entry);
        self.len += 1;
    }

    //  Unlinks the head of the chain, if any.
    pub fn unlink(&mut self) -> Option<Box<Entry<T>>> {
        let mut entry = self.head.take()?;

        self.head = entry.next.take();
        self.len -= 1;

        Some(entry)
    }
}

impl<T: Clone> Clone for Chain<T> {
    fn clone(&self) -> Self {
        let mut result = Chain::new();

        let mut tail = &mut result.head;
        for entry in self.iter() {
            let entry = Entry::new(entry.hash, entry.bucket, entry.element.clone());
            tail = &mut tail.insert(entry).next;
        }

        result.len = self.len;
        result
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self { Self::new() }
}

//  Unlinks the entries one at a time; the default recursive drop of the links
//  would overflow the stack on long chains.
impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        while self.unlink().is_some() {}
    }
}

//  An iterator over the entries of a chain.
pub struct ChainIterator<'a, T> {
    link: Option<&'a Entry<T>>,
}

impl<'a, T> Clone for ChainIterator<'a, T> {
    fn clone(&self) -> Self { ChainIterator { link: self.link } }
}

impl<'a, T> iter::Iterator for ChainIterator<'a, T> {
    type Item = &'a Entry<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.link?;
        self.link = entry.next.as_deref();
        Some(entry)
    }
}

#[cfg(test)]
mod tests {

use super::*;

use crate::utils::tester::*;

fn chain_of(elements: &[u32]) -> Chain<u32> {
    let mut chain = Chain::new();
    for &e in elements {
        chain.link(Entry::new(e as usize, BucketIndex(0), e));
    }
    chain
}

fn elements(chain: &Chain<u32>) -> Vec<u32> {
    chain.iter().map(|e| e.element).collect()
}

#[test]
fn chain_empty() {
    let chain: Chain<u32> = Chain::default();

    assert_eq!(0, chain.len());
    assert_eq!(None, chain.iter().next().map(|e| e.element));
}

#[test]
fn chain_link_insertion_order() {
    let chain = chain_of(&[3, 1, 2]);

    assert_eq!(3, chain.len());
    assert_eq!(vec![3, 1, 2], elements(&chain));
}

#[test]
fn chain_find() {
    let chain = chain_of(&[3, 1, 2]);

    assert_eq!(Some(1), chain.find(&1).map(|e| e.element));
    assert_eq!(Some(2), chain.find(&2).map(|e| e.hash as u32));
    assert!(chain.find(&4).is_none());
}

#[test]
fn chain_unlink() {
    let mut chain = chain_of(&[3, 1]);

    let entry = chain.unlink().unwrap();
    assert_eq!(3, entry.element);
    assert!(entry.next.is_none());
    assert_eq!(vec![1], elements(&chain));

    //  An unlinked entry may be linked into another chain.
    let mut other = chain_of(&[7]);
    other.link(entry);
    assert_eq!(vec![7, 3], elements(&other));

    assert_eq!(Some(1), chain.unlink().map(|e| e.element));
    assert!(chain.unlink().is_none());
    assert_eq!(0, chain.len());
}

#[test]
fn chain_clone_is_deep() {
    let original = chain_of(&[1, 2, 3]);
    let mut copy = original.clone();

    assert_eq!(3, copy.len());
    assert_eq!(elements(&original), elements(&copy));

    let a: Vec<*const Entry<u32>> = original.iter().map(|e| e as *const _).collect();
    let b: Vec<*const Entry<u32>> = copy.iter().map(|e| e as *const _).collect();
    assert!(a.iter().all(|p| !b.contains(p)));

    copy.link(Entry::new(4, BucketIndex(0), 4));
    assert_eq!(vec![1, 2, 3], elements(&original));
    assert_eq!(vec![1, 2, 3, 4], elements(&copy));
}

#[test]
fn chain_drop_releases_all() {
    let count = SpyCount::zero();

    {
        let mut chain = Chain::new();
        for i in 0..5 {
            chain.link(Entry::new(0, BucketIndex(0), SpyElement::new(&count, i)));
        }
        assert_eq!(5, count.get());

        let copy = chain.clone();
        assert_eq!(10, count.get());

        drop(chain);
        assert_eq!(5, count.get());

        drop(copy);
    }

    assert_eq!(0, count.get());
}

#[test]
fn chain_drop_long() {
    let mut chain = Chain::new();
    let mut tail = &mut chain.head;
    for i in 0..1_000_000u32 {
        tail = &mut tail.insert(Entry::new(0, BucketIndex(0), i)).next;
    }
    chain.len = 1_000_000;

    drop(chain);
}

}   //  mod tests
