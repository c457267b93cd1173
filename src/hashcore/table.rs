//! The bucket array underlying the HashSet.

use super::capacity::{BucketIndex, Capacity, Size};
use super::chain::{Chain, ChainIterator, Entry};
use super::failure::{Failure, Result};
use super::root::boxed::Box;
use super::root::{fmt, iter, slice};
use super::root::vec::Vec;

//  The storage: one chain per bucket.
//
//  The Table does not track its size, the HashSet does.
pub struct Table<T> {
    chains: Box<[Chain<T>]>,
}

impl<T> Table<T> {
    //  Creates a table of `capacity` empty chains.
    //
    //  #   Errors
    //
    //  Returns `OutOfMemory` if the bucket array cannot be allocated.
    pub fn try_new(capacity: Capacity) -> Result<Self> {
        let buckets = capacity.buckets();

        let mut chains = Vec::new();
        chains.try_reserve_exact(buckets).map_err(|_| Failure::OutOfMemory)?;
        chains.resize_with(buckets, Chain::new);

        Ok(Table { chains: chains.into_boxed_slice() })
    }

    //  Returns the capacity of the table.
    pub fn capacity(&self) -> Capacity { Capacity::new(self.chains.len()) }

    //  Returns the chain at `index`, if within bounds.
    pub fn chain(&self, index: BucketIndex) -> Option<&Chain<T>> {
        self.chains.get(index.0)
    }

    //  Returns the element equal to `element`, if any.
    //
    //  `hash` is the full hash of `element`.
    pub fn get(&self, hash: usize, element: &T) -> Option<&T>
    where
        T: PartialEq,
    {
        let index = self.capacity().bucket_of(hash);

        self.chains[index.0].find(element).map(|entry| &entry.element)
    }

    //  Links `element` into its bucket.
    //
    //  Does not check for duplicates: the caller is responsible for it.
    pub fn link(&mut self, hash: usize, element: T) {
        let index = self.capacity().bucket_of(hash);

        self.chains[index.0].link(Entry::new(hash, index, element));
    }

    //  Moves every entry of `self` into `target`, re-bucketing each under the
    //  capacity of `target`.
    //
    //  Neither hashes nor compares any element, and hence cannot fail.
    pub fn relink_into(&mut self, target: &mut Table<T>) {
        let capacity = target.capacity();

        for chain in self.chains.iter_mut() {
            while let Some(mut entry) = chain.unlink() {
                let index = capacity.bucket_of(entry.hash);
                entry.bucket = index;
                target.chains[index.0].link(entry);
            }
        }
    }

    //  Returns an iterator over all the entries, bucket by bucket.
    pub fn iter(&self) -> TableIterator<'_, T> {
        TableIterator { chains: self.chains.iter(), current: None }
    }

    //  Writes out the table, bucket by bucket.
    pub fn debug(&self, name: &str, size: Size, f: &mut fmt::Formatter) -> fmt::Result
    where
        T: fmt::Debug,
    {
        write!(f, "{} {{ capacity: {}, size: {}, buckets: [",
            name, self.chains.len(), size.0)?;

        for (index, chain) in self.chains.iter().enumerate() {
            if index == 0 {
                write!(f, "[")?;
            } else {
                write!(f, ", [")?;
            }

            for (index, entry) in chain.iter().enumerate() {
                if index != 0 {
                    write!(f, ", ")?;
                }

                write!(f, "{:?}", entry.element)?;
            }

            write!(f, "]")?;
        }

        write!(f, "] }}")
    }
}

impl<T: Clone> Clone for Table<T> {
    fn clone(&self) -> Self {
        Table { chains: self.chains.clone() }
    }
}

//  An iterator over all the entries of a table.
pub struct TableIterator<'a, T> {
    chains: slice::Iter<'a, Chain<T>>,
    current: Option<ChainIterator<'a, T>>,
}

impl<'a, T> Clone for TableIterator<'a, T> {
    fn clone(&self) -> Self {
        TableIterator { chains: self.chains.clone(), current: self.current.clone() }
    }
}

impl<'a, T> iter::Iterator for TableIterator<'a, T> {
    type Item = &'a Entry<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.as_mut().and_then(|c| c.next()) {
                return Some(entry);
            }

            self.current = Some(self.chains.next()?.iter());
        }
    }
}

#[cfg(test)]
mod tests {

use super::*;

use crate::utils::tester::*;

fn table_of(capacity: usize, elements: &[u32]) -> Table<u32> {
    let mut table = Table::try_new(Capacity::new(capacity)).unwrap();
    for &e in elements {
        table.link(identity_hash(&e), e);
    }
    table
}

fn bucket(table: &Table<u32>, index: usize) -> Vec<u32> {
    table.chain(BucketIndex(index)).unwrap().iter().map(|e| e.element).collect()
}

#[test]
fn table_try_new() {
    let table: Table<u32> = Table::try_new(Capacity::default()).unwrap();

    assert_eq!(10, table.capacity().buckets());
    assert_eq!(0, table.chain(BucketIndex(9)).unwrap().len());
    assert!(table.chain(BucketIndex(10)).is_none());
    assert_eq!(0, table.iter().count());
}

#[test]
fn table_try_new_out_of_memory() {
    let table: Result<Table<u32>> = Table::try_new(Capacity::new(usize::MAX / 2));

    assert_eq!(Some(Failure::OutOfMemory), table.err());
}

#[test]
fn table_link_get() {
    let table = table_of(10, &[1, 11, 2]);

    assert_eq!(vec![1, 11], bucket(&table, 1));
    assert_eq!(vec![2], bucket(&table, 2));

    assert_eq!(Some(&11), table.get(11, &11));
    assert_eq!(None, table.get(21, &21));
    //  Same bucket, different element.
    assert_eq!(None, table.get(1, &21));
}

#[test]
fn table_link_records_bucket() {
    let table = table_of(10, &[1, 11, 25]);

    for entry in table.iter() {
        assert_eq!(BucketIndex(entry.element as usize % 10), entry.bucket);
        assert_eq!(entry.element as usize, entry.hash);
    }
}

#[test]
fn table_relink_into() {
    let mut table = table_of(10, &[1, 11, 2, 12, 9]);
    let mut target = Table::try_new(Capacity::new(20)).unwrap();

    table.relink_into(&mut target);

    assert_eq!(0, table.iter().count());
    assert_eq!(5, target.iter().count());

    assert_eq!(vec![1], bucket(&target, 1));
    assert_eq!(vec![11], bucket(&target, 11));
    assert_eq!(vec![2], bucket(&target, 2));
    assert_eq!(vec![12], bucket(&target, 12));
    assert_eq!(vec![9], bucket(&target, 9));

    for entry in target.iter() {
        assert_eq!(BucketIndex(entry.element as usize % 20), entry.bucket);
    }
}

#[test]
fn table_iter() {
    let table = table_of(4, &[5, 2, 1, 6]);

    let elements: Vec<u32> = table.iter().map(|e| e.element).collect();

    assert_eq!(vec![5, 1, 2, 6], elements);
}

#[test]
fn table_clone() {
    let count = SpyCount::zero();

    let mut table = Table::try_new(Capacity::new(3)).unwrap();
    for i in 0..6 {
        table.link(i as usize, SpyElement::new(&count, i));
    }

    let copy = table.clone();
    assert_eq!(12, count.get());

    let ids: Vec<u32> = copy.iter().map(|e| e.element.id()).collect();
    assert_eq!(vec![0, 3, 1, 4, 2, 5], ids);

    drop(table);
    assert_eq!(6, count.get());

    drop(copy);
    assert_eq!(0, count.get());
}

}   //  mod tests
