//! Padding, trimming and chunking of sequences to a fixed group size.

use std::iter::Peekable;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SeqError {
    #[error("group size must be at least 1")]
    ZeroSize,
}

fn check_size(size: usize) -> Result<(), SeqError> {
    if size == 0 { Err(SeqError::ZeroSize) } else { Ok(()) }
}

/// Pad `seq` with `filler` until its length is a multiple of `size`.
pub fn fill_seq<T: Clone>(seq: &[T], size: usize, filler: T) -> Result<Vec<T>, SeqError> {
    check_size(size)?;

    let mut out = seq.to_vec();
    let remainder = seq.len() % size;
    if remainder != 0 {
        out.resize(seq.len() + size - remainder, filler);
    }
    Ok(out)
}

/// Pad `s` with `filler` until its length in characters is a multiple of `size`.
pub fn fill_str(s: &str, size: usize, filler: char) -> Result<String, SeqError> {
    check_size(size)?;

    let remainder = s.chars().count() % size;
    let mut out = String::from(s);
    if remainder != 0 {
        out.extend(std::iter::repeat_n(filler, size - remainder));
    }
    Ok(out)
}

/// Drop trailing items of `seq` until its length is a multiple of `size`.
pub fn strip_seq<T>(seq: &[T], size: usize) -> Result<&[T], SeqError> {
    check_size(size)?;
    Ok(&seq[..seq.len() - seq.len() % size])
}

/// Iterate over consecutive groups of `size` items; the last group may be shorter.
pub fn seq_grouper<T>(seq: &[T], size: usize) -> Result<std::slice::Chunks<'_, T>, SeqError> {
    check_size(size)?;
    Ok(seq.chunks(size))
}

/// Like [`seq_grouper`], but the last group is padded with `filler` to a full `size`.
pub fn seq_grouper_filled<T: Clone>(
    seq: &[T],
    size: usize,
    filler: T,
) -> Result<impl Iterator<Item = Vec<T>>, SeqError> {
    let filled = fill_seq(seq, size, filler)?;
    let groups: Vec<Vec<T>> = filled.chunks(size).map(<[T]>::to_vec).collect();
    Ok(groups.into_iter())
}

/// Merge two individually sorted inputs into one sorted stream.
pub fn merge_sorted<A, B>(a: A, b: B) -> MergeSorted<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
    A::Item: Ord,
{
    MergeSorted {
        left: a.into_iter().peekable(),
        right: b.into_iter().peekable(),
    }
}

pub struct MergeSorted<L: Iterator, R: Iterator<Item = L::Item>> {
    left: Peekable<L>,
    right: Peekable<R>,
}

impl<L, R> Iterator for MergeSorted<L, R>
where
    L: Iterator,
    R: Iterator<Item = L::Item>,
    L::Item: Ord,
{
    type Item = L::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match (self.left.peek(), self.right.peek()) {
            (Some(l), Some(r)) if r < l => self.right.next(),
            (Some(_), _) => self.left.next(),
            (None, _) => self.right.next(),
        }
    }
}
