//! Immutable view over an ordered sequence
//!
//! A sequence view owns a private copy of its elements. Each element is passed
//! through `wrap` the first time it is read and kept in a compute-once slot, so
//! wrapping a sequence costs the same however deeply it nests. Operations that
//! would mutate a native sequence (`push`, `unshift`, `sort`, `splice`,
//! `reverse`) build a new view instead, leaving both the receiver and the
//! caller's input untouched.

use crate::error::Result;
use crate::key::Key;
use crate::options::WrapOptions;
use crate::text;
use crate::value::Value;
use crate::view::{reject_write, Immutable};
use crate::wrap::wrap_with;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Index, Range};
use std::sync::{Arc, OnceLock};
use tracing::trace;

/// Immutable sequence view
#[derive(Clone)]
pub struct Sequence {
    inner: Arc<SequenceInner>,
}

struct SequenceInner {
    source: Vec<Value>,
    slots: Vec<OnceLock<Value>>,
    options: WrapOptions,
}

impl Sequence {
    pub(crate) fn from_raw(source: Vec<Value>, options: WrapOptions) -> Self {
        let slots = (0..source.len()).map(|_| OnceLock::new()).collect();
        Self {
            inner: Arc::new(SequenceInner {
                source,
                slots,
                options,
            }),
        }
    }

    /// New view sharing this view's options
    ///
    /// Elements that are already views keep their identity, since wrapping a
    /// view returns it unchanged.
    fn derive(&self, data: Vec<Value>) -> Self {
        Self::from_raw(data, self.inner.options)
    }

    /// Wrapped elements, cloned, for building a derived view
    fn wrapped(&self) -> Vec<Value> {
        self.iter().cloned().collect()
    }

    /// Spread arrays and sequences one level, keep everything else whole
    fn extend_spread(data: &mut Vec<Value>, item: Value) {
        match item {
            Value::Array(items) => data.extend(items),
            Value::Sequence(seq) => data.extend(seq.iter().cloned()),
            other => data.push(other),
        }
    }

    fn materialize(&self, idx: usize) -> Option<&Value> {
        let slot = self.inner.slots.get(idx)?;
        let raw = self.inner.source.get(idx)?;
        Some(slot.get_or_init(|| {
            trace!(index = idx, "materializing sequence element");
            wrap_with(raw.clone(), self.inner.options)
        }))
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.inner.source.len()
    }

    /// Whether the sequence has no elements
    pub fn is_empty(&self) -> bool {
        self.inner.source.is_empty()
    }

    /// Wrapped element at `index`
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.materialize(index)
    }

    /// First element
    pub fn first(&self) -> Option<&Value> {
        self.get(0)
    }

    /// Last element
    pub fn last(&self) -> Option<&Value> {
        self.len().checked_sub(1).and_then(|idx| self.get(idx))
    }

    /// Iterate over wrapped elements
    pub fn iter(&self) -> Iter<'_> {
        self.range(0..self.len())
    }

    fn range(&self, range: Range<usize>) -> Iter<'_> {
        Iter { seq: self, range }
    }

    pub(crate) fn source(&self) -> &[Value] {
        &self.inner.source
    }

    /// Call `f` with every element, its index, and the sequence
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&Value, usize, &Sequence),
    {
        for (idx, item) in self.iter().enumerate() {
            f(item, idx, self);
        }
    }

    /// New view of `f` applied to every element
    pub fn map<F>(&self, mut f: F) -> Sequence
    where
        F: FnMut(&Value, usize, &Sequence) -> Value,
    {
        let options = self.inner.options;
        let data = self
            .iter()
            .enumerate()
            .map(|(idx, item)| wrap_with(f(item, idx, self), options))
            .collect();
        self.derive(data)
    }

    /// New view of the elements for which `f` returns true
    pub fn filter<F>(&self, mut f: F) -> Sequence
    where
        F: FnMut(&Value, usize, &Sequence) -> bool,
    {
        let data = self
            .iter()
            .enumerate()
            .filter(|(idx, item)| f(*item, *idx, self))
            .map(|(_, item)| item.clone())
            .collect();
        self.derive(data)
    }

    /// Whether `f` holds for at least one element
    pub fn some<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&Value, usize, &Sequence) -> bool,
    {
        self.iter()
            .enumerate()
            .any(|(idx, item)| f(item, idx, self))
    }

    /// Whether `f` holds for every element
    pub fn every<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&Value, usize, &Sequence) -> bool,
    {
        self.iter()
            .enumerate()
            .all(|(idx, item)| f(item, idx, self))
    }

    /// Fold from the first element to the last
    ///
    /// The initial value and every intermediate accumulator are wrapped
    /// before `f` sees them.
    pub fn reduce<F>(&self, initial: impl Into<Value>, mut f: F) -> Value
    where
        F: FnMut(Value, &Value, usize, &Sequence) -> Value,
    {
        let options = self.inner.options;
        self.iter()
            .enumerate()
            .fold(wrap_with(initial, options), |acc, (idx, item)| {
                wrap_with(f(acc, item, idx, self), options)
            })
    }

    /// Fold from the last element to the first
    pub fn reduce_right<F>(&self, initial: impl Into<Value>, mut f: F) -> Value
    where
        F: FnMut(Value, &Value, usize, &Sequence) -> Value,
    {
        let options = self.inner.options;
        self.iter()
            .enumerate()
            .rev()
            .fold(wrap_with(initial, options), |acc, (idx, item)| {
                wrap_with(f(acc, item, idx, self), options)
            })
    }

    /// New view with `items` appended
    ///
    /// Array and sequence arguments contribute their elements, not themselves.
    pub fn concat<I>(&self, items: I) -> Sequence
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut data = self.wrapped();
        for item in items {
            Self::extend_spread(&mut data, item.into());
        }
        self.derive(data)
    }

    /// Join elements with `separator`; null and undefined render empty
    pub fn join(&self, separator: &str) -> String {
        text::join(self.source(), separator)
    }

    /// New view over `start..end`
    ///
    /// Negative positions count from the end; out-of-range positions clamp.
    /// `None` for `end` means the end of the sequence.
    pub fn slice(&self, start: isize, end: Option<isize>) -> Sequence {
        let len = self.len();
        let start = resolve_position(start, len);
        let end = end.map_or(len, |end| resolve_position(end, len));
        if start >= end {
            return self.derive(Vec::new());
        }
        self.derive(self.range(start..end).cloned().collect())
    }

    /// Position of the first element identical to `search`
    pub fn index_of(&self, search: &Value) -> Option<usize> {
        self.iter().position(|item| item.strict_equals(search))
    }

    /// Position of the last element identical to `search`
    pub fn last_index_of(&self, search: &Value) -> Option<usize> {
        self.iter().rposition(|item| item.strict_equals(search))
    }

    /// New view with the elements in reverse order
    pub fn reverse(&self) -> Sequence {
        self.derive(self.iter().rev().cloned().collect())
    }

    /// Locale rendering: grouped numbers, comma separated
    pub fn to_locale_string(&self) -> String {
        text::join_locale(self.source())
    }

    /// New view with `items` appended as-is
    pub fn push<I>(&self, items: I) -> Sequence
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut data = self.wrapped();
        data.extend(items.into_iter().map(Into::into));
        self.derive(data)
    }

    /// New view with `items` prepended in the order given
    pub fn unshift<I>(&self, items: I) -> Sequence
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut data: Vec<Value> = items.into_iter().map(Into::into).collect();
        data.extend(self.iter().cloned());
        self.derive(data)
    }

    /// New view sorted by string rendering, undefined last
    ///
    /// Strings compare by UTF-16 code units, so `[10, 9, 1]` sorts to
    /// `[1, 10, 9]`, matching the host default order.
    pub fn sort(&self) -> Sequence {
        let (mut data, undefined) = self.split_undefined();
        data.sort_by_cached_key(|item| item.to_string().encode_utf16().collect::<Vec<u16>>());
        self.derive(data.into_iter().chain(undefined).collect())
    }

    /// New view sorted by `compare`, which receives wrapped elements
    ///
    /// Undefined elements are never passed to `compare` and end up last.
    /// The sort is stable.
    pub fn sort_by<F>(&self, mut compare: F) -> Sequence
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        let (mut data, undefined) = self.split_undefined();
        data.sort_by(|a, b| compare(a, b));
        self.derive(data.into_iter().chain(undefined).collect())
    }

    fn split_undefined(&self) -> (Vec<Value>, Vec<Value>) {
        self.iter().cloned().partition(|item| !item.is_undefined())
    }

    /// New view with `delete_count` elements at `start` replaced by `items`
    ///
    /// Returns the resulting sequence, not the removed elements.
    pub fn splice<I>(&self, start: isize, delete_count: usize, items: I) -> Sequence
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let len = self.len();
        let start = resolve_position(start, len);
        let end = start.saturating_add(delete_count).min(len);

        let mut data = Vec::with_capacity(len);
        data.extend(self.range(0..start).cloned());
        data.extend(items.into_iter().map(Into::into));
        data.extend(self.range(end..len).cloned());
        self.derive(data)
    }

    /// Attempt to assign an index or `length`
    ///
    /// Strict views return `MutationRejected`; relaxed views ignore the write.
    pub fn try_set(&self, key: impl Into<Key>, value: impl Into<Value>) -> Result<()> {
        reject_write(self.inner.options, &key.into(), &value.into())
    }

    /// Raw deep copy of the elements
    pub fn to_mutable(&self) -> Value {
        Value::Array(self.inner.source.iter().map(Value::to_mutable).collect())
    }

    /// Options this view was built with
    pub fn options(&self) -> WrapOptions {
        self.inner.options
    }

    /// Whether both handles share the same view
    pub fn ptr_eq(&self, other: &Sequence) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Clamp a signed position into `0..=len`, counting negatives from the end
fn resolve_position(pos: isize, len: usize) -> usize {
    if pos < 0 {
        len.saturating_sub(pos.unsigned_abs())
    } else {
        pos.unsigned_abs().min(len)
    }
}

/// Iterator over the wrapped elements of a [`Sequence`]
pub struct Iter<'a> {
    seq: &'a Sequence,
    range: Range<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<&'a Value> {
        let idx = self.range.next()?;
        self.seq.get(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<&'a Value> {
        let idx = self.range.next_back()?;
        self.seq.get(idx)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl Immutable for Sequence {
    fn lookup(&self, key: &Key) -> Option<Value> {
        if key.is_length() {
            return Some(Value::from(self.len()));
        }
        key.as_index().and_then(|idx| self.get(idx).cloned())
    }

    fn try_set(&self, key: Key, value: Value) -> Result<()> {
        reject_write(self.inner.options, &key, &value)
    }

    fn keys(&self) -> Vec<Key> {
        (0..self.len()).map(Key::Index).collect()
    }

    fn to_mutable(&self) -> Value {
        Sequence::to_mutable(self)
    }

    fn options(&self) -> WrapOptions {
        self.inner.options
    }
}

impl Index<usize> for Sequence {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        match self.get(index) {
            Some(value) => value,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len(),
                index
            ),
        }
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(","))
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Sequence ")?;
        f.debug_list().entries(self.inner.source.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ImmuError;

    fn seq<T: Into<Value>>(items: Vec<T>) -> Sequence {
        Sequence::from_raw(
            items.into_iter().map(Into::into).collect(),
            WrapOptions::default(),
        )
    }

    fn numbers(view: &Sequence) -> Vec<f64> {
        view.iter().filter_map(Value::as_f64).collect()
    }

    #[test]
    fn test_resolve_position() {
        assert_eq!(resolve_position(0, 4), 0);
        assert_eq!(resolve_position(2, 4), 2);
        assert_eq!(resolve_position(9, 4), 4);
        assert_eq!(resolve_position(-1, 4), 3);
        assert_eq!(resolve_position(-9, 4), 0);
    }

    #[test]
    fn test_elements_are_wrapped() {
        let view = seq(vec![Value::from([1, 2]), Value::from(3)]);
        assert!(view[0].is_immutable());
        assert!(!view[1].is_immutable());
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_map_and_filter() {
        let view = seq(vec![1, 2, 3, 4]);
        let mapped = view.map(|item, _, _| Value::from(item.as_f64().unwrap() + 1.0));
        assert_eq!(numbers(&mapped), vec![2.0, 3.0, 4.0, 5.0]);

        let even = view.filter(|item, _, _| item.as_f64().unwrap() % 2.0 == 0.0);
        assert_eq!(numbers(&even), vec![2.0, 4.0]);
        assert_eq!(view.len(), 4);
    }

    #[test]
    fn test_map_wraps_callback_results() {
        let view = seq(vec![1, 2]);
        let nested = view.map(|item, _, _| Value::from(vec![item.clone()]));
        assert!(nested.iter().all(Value::is_immutable));
    }

    #[test]
    fn test_for_each_visits_in_order() {
        let view = seq(vec!["a", "b", "c"]);
        let mut seen = Vec::new();
        view.for_each(|item, idx, _| seen.push(format!("{}{}", idx, item)));
        assert_eq!(seen, vec!["0a", "1b", "2c"]);
    }

    #[test]
    fn test_reduce_directions() {
        let view = seq(vec![1, 2, 3, 4]);
        let concat =
            |acc: Value, item: &Value, _, _: &Sequence| Value::from(format!("{}{}", acc, item));

        assert_eq!(view.reduce(0, concat), Value::from("01234"));
        assert_eq!(view.reduce_right(0, concat), Value::from("04321"));
    }

    #[test]
    fn test_reduce_wraps_accumulator() {
        let view = seq(vec![1, 2]);
        let result = view.reduce(Value::Array(Vec::new()), |acc, item, _, _| {
            assert!(acc.is_immutable());
            let acc = acc.as_sequence().unwrap();
            Value::Sequence(acc.push([item.clone()]))
        });
        assert_eq!(result, Value::from([1, 2]));
    }

    #[test]
    fn test_reduce_on_empty_returns_initial() {
        let view = seq(Vec::<Value>::new());
        assert_eq!(view.reduce("init", |acc, _, _, _| acc), Value::from("init"));
    }

    #[test]
    fn test_concat_spreads_one_level() {
        let view = seq(vec![1, 2]);
        let joined = view.concat(vec![
            Value::from(3),
            Value::from([4, 5]),
            Value::from(vec![Value::from([6])]),
        ]);
        assert_eq!(joined.len(), 6);
        assert_eq!(joined.to_mutable(), Value::from(vec![
            Value::from(1),
            Value::from(2),
            Value::from(3),
            Value::from(4),
            Value::from(5),
            Value::from([6]),
        ]));
    }

    #[test]
    fn test_push_does_not_spread() {
        let view = seq(vec![1, 2]);
        let pushed = view.push(vec![Value::from(3), Value::from([4, 5])]);
        assert_eq!(pushed.len(), 4);
        assert!(pushed[3].is_immutable());
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_unshift_prepends_in_order() {
        let view = seq(vec![1, 2]);
        let shifted = view.unshift([3, 4]);
        assert_eq!(numbers(&shifted), vec![3.0, 4.0, 1.0, 2.0]);
        assert_eq!(numbers(&view), vec![1.0, 2.0]);
    }

    #[test]
    fn test_slice_positions() {
        let view = seq(vec![1, 2, 3, 4]);
        assert_eq!(numbers(&view.slice(0, Some(1))), vec![1.0]);
        assert_eq!(numbers(&view.slice(1, None)), vec![2.0, 3.0, 4.0]);
        assert_eq!(numbers(&view.slice(-2, None)), vec![3.0, 4.0]);
        assert_eq!(numbers(&view.slice(1, Some(-1))), vec![2.0, 3.0]);
        assert!(view.slice(3, Some(1)).is_empty());
    }

    #[test]
    fn test_index_of_uses_identity() {
        let view = seq(vec![Value::from(1), Value::from([2]), Value::from(1)]);
        assert_eq!(view.index_of(&Value::from(1)), Some(0));
        assert_eq!(view.last_index_of(&Value::from(1)), Some(2));
        assert_eq!(view.index_of(&Value::from(9)), None);

        // an equal but distinct array is not found, the stored view is
        assert_eq!(view.index_of(&Value::from([2])), None);
        assert_eq!(view.index_of(&view[1]), Some(1));
    }

    #[test]
    fn test_reverse_leaves_receiver_untouched() {
        let view = seq(vec![1, 2]);
        assert_eq!(numbers(&view.reverse()), vec![2.0, 1.0]);
        assert_eq!(numbers(&view), vec![1.0, 2.0]);
    }

    #[test]
    fn test_default_sort_is_by_string() {
        let view = seq(vec![4, 2, 3, 1]);
        assert_eq!(numbers(&view.sort()), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(numbers(&view), vec![4.0, 2.0, 3.0, 1.0]);

        let view = seq(vec![10, 9, 1]);
        assert_eq!(numbers(&view.sort()), vec![1.0, 10.0, 9.0]);
    }

    #[test]
    fn test_default_sort_puts_undefined_last() {
        let view = seq(vec![Value::Undefined, Value::from("b"), Value::Null, Value::from("a")]);
        let sorted = view.sort();
        assert_eq!(sorted.to_mutable(), Value::from(vec![
            Value::from("a"),
            Value::from("b"),
            Value::Null,
            Value::Undefined,
        ]));
    }

    #[test]
    fn test_sort_by_is_stable() {
        let view = seq(vec![
            Value::from([1, 0]),
            Value::from([0, 1]),
            Value::from([1, 2]),
            Value::from([0, 3]),
        ]);
        let first = |item: &Value| item.get(0usize).and_then(|v| v.as_f64()).unwrap();
        let sorted = view.sort_by(|a, b| first(a).total_cmp(&first(b)));
        let seconds: Vec<f64> = sorted
            .iter()
            .map(|item| item.get(1usize).and_then(|v| v.as_f64()).unwrap())
            .collect();
        assert_eq!(seconds, vec![1.0, 3.0, 0.0, 2.0]);
    }

    #[test]
    fn test_splice() {
        let view = seq(vec![1, 2, 3, 4]);
        assert_eq!(numbers(&view.splice(1, 1, Vec::<Value>::new())), vec![1.0, 3.0, 4.0]);
        assert_eq!(
            view.splice(1, 1, ["two"]).to_mutable(),
            Value::from(vec![Value::from(1), Value::from("two"), Value::from(3), Value::from(4)])
        );
        assert_eq!(numbers(&view.splice(-1, 5, [9])), vec![1.0, 2.0, 3.0, 9.0]);
        assert_eq!(numbers(&view.splice(10, 0, [5])), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(view.len(), 4);
    }

    #[test]
    fn test_join_and_display() {
        let view = seq(vec![1, 2, 3, 4]);
        assert_eq!(view.join(", "), "1, 2, 3, 4");
        assert_eq!(view.to_string(), "1,2,3,4");
        assert_eq!(seq(vec![1000, 2]).to_locale_string(), "1,000,2");
    }

    #[test]
    fn test_try_set_rejects_index_and_length() {
        let view = seq(vec![1, 2, 3, 4]);

        let err = view.try_set(0usize, "asdf").unwrap_err();
        assert!(matches!(err, ImmuError::MutationRejected { ref key, .. } if key == "0"));
        assert_eq!(view[0], Value::from(1));

        assert!(view.try_set("length", 5).is_err());
        assert_eq!(view.len(), 4);
        assert!(view.try_set(10usize, 1).is_err());
    }

    #[test]
    fn test_lookup_and_keys() {
        let view = seq(vec!["a", "b"]);
        assert_eq!(view.lookup(&Key::from("length")), Some(Value::from(2)));
        assert_eq!(view.lookup(&Key::from("1")), Some(Value::from("b")));
        assert_eq!(view.lookup(&Key::Index(5)), None);
        assert_eq!(Immutable::keys(&view), vec![Key::Index(0), Key::Index(1)]);
    }

    #[test]
    fn test_derived_views_inherit_options() {
        let view = Sequence::from_raw(vec![Value::from(1)], WrapOptions::relaxed());
        let pushed = view.push([2]);
        assert_eq!(pushed.options(), WrapOptions::relaxed());
        assert!(pushed.try_set(0usize, 5).is_ok());
        assert_eq!(pushed[0], Value::from(1));
    }

    #[test]
    fn test_sort_by_keeps_undefined_last() {
        let view = seq(vec![Value::Undefined, Value::from(2), Value::from(1)]);
        let sorted = view.sort_by(|a, b| {
            assert!(!a.is_undefined() && !b.is_undefined());
            a.as_f64().unwrap().total_cmp(&b.as_f64().unwrap())
        });
        assert_eq!(
            sorted.to_mutable(),
            Value::from(vec![Value::from(1), Value::from(2), Value::Undefined])
        );
    }

    #[test]
    fn test_default_sort_compares_utf16_units() {
        // U+1F600 encodes as a surrogate pair starting at 0xD83D, below U+FF61
        let view = seq(vec!["\u{FF61}", "\u{1F600}"]);
        assert_eq!(
            view.sort().to_mutable(),
            Value::from(vec![Value::from("\u{1F600}"), Value::from("\u{FF61}")])
        );
    }

    #[test]
    fn test_callbacks_receive_the_sequence() {
        let view = seq(vec![1, 2]);
        view.for_each(|_, _, whole| assert!(whole.ptr_eq(&view)));
        assert!(view.every(|_, _, whole| whole.ptr_eq(&view)));
        let total = view.reduce(0, |acc, _, idx, whole| {
            Value::from(acc.as_f64().unwrap() + whole[idx].as_f64().unwrap())
        });
        assert_eq!(total, Value::from(3));
    }

    #[test]
    fn test_elements_wrap_on_first_read() {
        let view = seq(vec![Value::from([1]), Value::from(2)]);
        assert!(view.inner.slots.iter().all(|slot| slot.get().is_none()));

        let first = view.get(0).and_then(Value::as_sequence).unwrap();
        let again = view.get(0).and_then(Value::as_sequence).unwrap();
        assert!(first.ptr_eq(again));
        assert!(view.inner.slots[1].get().is_none());
    }

    #[test]
    fn test_deeply_nested_sequences() {
        let mut raw = Value::from(0);
        for _ in 0..1000 {
            raw = Value::from(vec![raw]);
        }

        let view = wrap_with(raw, WrapOptions::default());
        let mut current = view.clone();
        let mut depth = 0;
        while let Some(seq) = current.as_sequence().cloned() {
            assert!(seq.try_set(0usize, 1).is_err());
            current = seq[0].clone();
            depth += 1;
        }
        assert_eq!(depth, 1000);
        assert_eq!(current, Value::from(0));
    }

    #[test]
    fn test_derived_views_keep_element_identity() {
        let view = seq(vec![Value::from([1]), Value::from([2])]);
        let pushed = view.push([3]);
        assert_eq!(pushed.index_of(&view[1]), Some(1));
        assert_eq!(view.reverse().index_of(&view[0]), Some(1));
    }
}
