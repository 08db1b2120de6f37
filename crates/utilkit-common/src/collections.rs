//! A case-insensitive map, a tiny string-map serializer and a stable priority queue.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap, HashMap};

/// Map with ASCII case-insensitive string keys, e.g. for HTTP header names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseInsensitiveMap<V> {
    inner: HashMap<String, V>,
}

impl<V> Default for CaseInsensitiveMap<V> {
    fn default() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }
}

impl<V> CaseInsensitiveMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        self.inner.insert(key.to_ascii_lowercase(), value)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.inner.get(&key.to_ascii_lowercase())
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a V) -> &'a V {
        self.get(key).unwrap_or(default)
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.inner.remove(&key.to_ascii_lowercase())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(&key.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Entries with their lowercased keys.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: AsRef<str>, V> FromIterator<(K, V)> for CaseInsensitiveMap<V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = CaseInsensitiveMap::new();
        for (k, v) in iter {
            map.insert(k.as_ref(), v);
        }
        map
    }
}

/// Value of a [`DictSerializer`] entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictValue {
    Text(String),
    List(Vec<String>),
}

/// Flat text encoding of a string map.
///
/// Entries are separated by `|`, keys from values (and list items from each other) by
/// `:`. Within keys and values `:` is written `$,`, `|` is written `$;` and `$` is
/// written `$$`. A list with a single item reads back as [`DictValue::Text`].
pub struct DictSerializer;

impl DictSerializer {
    pub fn encode(data: &BTreeMap<String, DictValue>) -> String {
        data.iter()
            .map(|(key, value)| {
                let mut fields = vec![Self::escape(key)];
                match value {
                    DictValue::Text(text) => fields.push(Self::escape(text)),
                    DictValue::List(items) => fields.extend(items.iter().map(|i| Self::escape(i))),
                }
                fields.join(":")
            })
            .collect::<Vec<_>>()
            .join("|")
    }

    /// Segments without a value are skipped.
    pub fn decode(s: &str) -> BTreeMap<String, DictValue> {
        let mut data = BTreeMap::new();
        if s.is_empty() {
            return data;
        }

        for segment in s.split('|') {
            let fields: Vec<String> = segment.split(':').map(Self::unescape).collect();
            match fields.as_slice() {
                [] | [_] => continue,
                [key, value] => {
                    data.insert(key.clone(), DictValue::Text(value.clone()));
                }
                [key, values @ ..] => {
                    data.insert(key.clone(), DictValue::List(values.to_vec()));
                }
            }
        }
        data
    }

    fn escape(s: &str) -> String {
        s.replace('$', "$$").replace(':', "$,").replace('|', "$;")
    }

    fn unescape(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c != '$' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some(',') => out.push(':'),
                Some(';') => out.push('|'),
                Some('$') => out.push('$'),
                Some(other) => {
                    out.push('$');
                    out.push(other);
                }
                None => out.push('$'),
            }
        }
        out
    }
}

struct Entry<T> {
    rank: i128,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // Higher rank first, then earlier insertion first.
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Priority queue that pops the lowest (`ascending`) or highest priority first. Items with
/// equal priority come out in insertion order, and items never need to be comparable.
pub struct PrioQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    ascending: bool,
    next_seq: u64,
}

impl<T> Default for PrioQueue<T> {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<T> PrioQueue<T> {
    pub fn new(ascending: bool) -> Self {
        Self {
            heap: BinaryHeap::new(),
            ascending,
            next_seq: 0,
        }
    }

    pub fn from_pairs<I: IntoIterator<Item = (i64, T)>>(pairs: I, ascending: bool) -> Self {
        let mut queue = Self::new(ascending);
        for (priority, item) in pairs {
            queue.push(priority, item);
        }
        queue
    }

    pub fn push(&mut self, priority: i64, item: T) {
        let rank = if self.ascending {
            -i128::from(priority)
        } else {
            i128::from(priority)
        };

        self.heap.push(Entry {
            rank,
            seq: self.next_seq,
            item,
        });
        self.next_seq += 1;
    }

    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.item)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
