//! The raw Robin Hood table.
//!
//! [`HashTable`] stores values without knowing how to hash them. Callers pass
//! the hash and an equality predicate to every lookup, which lets the map
//! layer own the hasher while the table owns placement and resizing.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem;

/// Capacity multiplier applied on grow and divisor applied on shrink.
const CHANGE_FACTOR: usize = 2;

/// Load factor 1/2: grow once more than half the slots would be occupied.
#[inline(always)]
fn exceeds_load_factor(populated: usize, capacity: usize) -> bool {
    populated.saturating_mul(2) > capacity
}

/// Free factor 1/4: shrink once fewer than a quarter of the slots are
/// occupied.
#[inline(always)]
fn below_free_factor(populated: usize, capacity: usize) -> bool {
    populated.saturating_mul(4) < capacity
}

/// Maps a hash onto its ideal slot, `hash mod capacity`.
///
/// Capacity starts at one and only ever doubles or halves, so it is always a
/// power of two and the modulus reduces to a mask.
#[inline(always)]
fn ideal_slot(hash: u64, capacity: usize) -> usize {
    debug_assert!(capacity.is_power_of_two());
    hash as usize & (capacity - 1)
}

#[inline(always)]
fn next_slot(index: usize, capacity: usize) -> usize {
    (index + 1) & (capacity - 1)
}

fn empty_slots<V>(capacity: usize) -> Vec<Slot<V>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || Slot::Empty);
    slots
}

/// A live entry together with its probe bookkeeping.
#[derive(Clone)]
struct Bucket<V> {
    hash: u64,
    /// Probe sequence length: distance from the ideal slot of `hash`.
    psl: usize,
    value: V,
}

#[derive(Clone)]
enum Slot<V> {
    Empty,
    Occupied(Bucket<V>),
}

/// Debug statistics for hash table analysis.
///
/// Available with the `stats` feature, and always under `cfg(test)`.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone)]
pub struct DebugStats {
    /// Number of elements currently in the table
    pub populated: usize,
    /// Total number of slots allocated
    pub capacity: usize,
    /// Number of slots currently occupied
    pub occupied_slots: usize,
    /// Load factor (populated / capacity)
    pub load_factor: f64,
    /// Longest probe sequence length of any entry
    pub max_psl: usize,
    /// Mean probe sequence length over all entries
    pub mean_psl: f64,
    /// Total memory in bytes used by the slot array
    pub total_bytes: usize,
    /// Bytes held by empty slots
    pub wasted_bytes: usize,
}

#[cfg(any(test, feature = "stats"))]
impl DebugStats {
    /// Pretty-print the debug statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Hash Table Debug Statistics ===");
        println!(
            "Population: {}/{} ({:.2}% load factor)",
            self.populated,
            self.capacity,
            self.load_factor * 100.0
        );
        println!(
            "Probe lengths: max {}, mean {:.3}",
            self.max_psl, self.mean_psl
        );
        println!("Total Allocated: {} bytes", self.total_bytes);
        println!(
            "Memory: {} bytes wasted ({:.02}%)",
            self.wasted_bytes,
            if self.total_bytes == 0 {
                0.0
            } else {
                (self.wasted_bytes as f64 / self.total_bytes as f64) * 100.0
            }
        );
    }
}

/// Number of entries at each probe sequence length.
///
/// `counts()[psl]` is the number of entries sitting `psl` slots past their
/// ideal slot. The vector is trimmed to the longest PSL present.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeHistogram {
    counts: Vec<usize>,
}

#[cfg(any(test, feature = "stats"))]
impl ProbeHistogram {
    /// Entry counts indexed by probe sequence length.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// The longest probe sequence length present, or `None` for an empty
    /// table.
    pub fn max_psl(&self) -> Option<usize> {
        self.counts.len().checked_sub(1)
    }

    /// Total number of entries counted.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Pretty-prints the histogram horizontally using stdout.
    ///
    /// Each row corresponds to one probe sequence length.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        let max = self.counts.iter().copied().max().unwrap_or(0);
        if max == 0 {
            println!("probe histogram: empty");
            return;
        }

        let max_bar = 60usize;
        let total_units = max_bar * 8;
        println!("probe histogram ({} entries):", self.total());

        let make_bar = |count: usize| -> alloc::string::String {
            if count == 0 {
                return alloc::string::String::new();
            }
            let units = ((count as u128 * total_units as u128).div_ceil(max as u128)) as usize;
            let full = units / 8;
            let rem = units % 8;
            let mut bar = "█".repeat(full);
            const PARTIAL: [char; 8] = [' ', '▏', '▎', '▍', '▌', '▋', '▊', '▉'];
            if rem > 0 {
                bar.push(PARTIAL[rem]);
            }
            bar
        };

        for (psl, &count) in self.counts.iter().enumerate() {
            println!("{:>3} | {} ({})", psl, make_bar(count), count);
        }
    }
}

/// An open-addressing hash table using Robin Hood displacement.
///
/// `HashTable<V>` stores values of type `V` in a single contiguous slot array
/// probed linearly with wraparound. Like other raw tables, it requires you to
/// provide both the hash value and an equality predicate for each operation.
///
/// Each occupied slot records its entry's probe sequence length (PSL), the
/// distance from the entry's ideal slot. On insertion an incoming entry that
/// has travelled farther than a resident takes the resident's slot, and the
/// resident continues probing. On removal the following run of displaced
/// entries shifts back by one slot. Together these keep the longest probe
/// short without tombstones.
///
/// The table starts with a single slot, doubles when more than half of its
/// slots would be occupied, and halves when fewer than a quarter are.
///
/// ## Example
///
/// ```rust
/// # use core::hash::Hash;
/// # use core::hash::Hasher;
/// #
/// # use robin_hood_map::hash_table::HashTable;
/// # use siphasher::sip::SipHasher;
/// #
/// # #[derive(Debug, PartialEq)]
/// # struct Person {
/// #     id: u64,
/// #     name: String,
/// # }
/// #
/// # fn hash_id(id: u64) -> u64 {
/// #     let mut hasher = SipHasher::new();
/// #     id.hash(&mut hasher);
/// #     hasher.finish()
/// # }
///
/// let mut table = HashTable::new();
/// let hash = hash_id(123);
///
/// match table.entry(hash, |p: &Person| p.id == 123) {
///     robin_hood_map::hash_table::Entry::Vacant(entry) => {
///         entry.insert(Person {
///             id: 123,
///             name: "Alice".to_string(),
///         });
///     }
///     robin_hood_map::hash_table::Entry::Occupied(_) => {
///         println!("Person already exists");
///     }
/// }
/// assert_eq!(table.len(), 1);
/// ```
pub struct HashTable<V> {
    slots: Vec<Slot<V>>,
    populated: usize,
}

impl<V> Debug for HashTable<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use alloc::format;
        use alloc::string::ToString;

        f.debug_struct("HashTable")
            .field("populated", &self.populated)
            .field("capacity", &self.slots.len())
            .field(
                "psl",
                &self
                    .slots
                    .chunks(16)
                    .map(|row| {
                        row.iter()
                            .map(|slot| match slot {
                                Slot::Empty => "..".to_string(),
                                Slot::Occupied(bucket) => format!("{:02}", bucket.psl),
                            })
                            .collect::<Vec<_>>()
                            .join(", ")
                    })
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<V> Clone for HashTable<V>
where
    V: Clone,
{
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            populated: self.populated,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.slots.clone_from(&source.slots);
        self.populated = source.populated;
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> HashTable<V> {
    /// Creates an empty table with a single slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use robin_hood_map::hash_table::HashTable;
    /// let table: HashTable<u64> = HashTable::new();
    /// assert!(table.is_empty());
    /// assert_eq!(table.capacity(), 1);
    /// ```
    pub fn new() -> Self {
        Self {
            slots: empty_slots(1),
            populated: 0,
        }
    }

    /// Returns the number of elements in the table.
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns `true` if the table contains no elements.
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Returns the number of slots in the backing array.
    ///
    /// Always a power of two and at least one. At most half of the slots are
    /// occupied at any time.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Removes all elements and releases the slot array, leaving a single
    /// empty slot.
    pub fn clear(&mut self) {
        self.slots = empty_slots(1);
        self.populated = 0;
    }

    /// Returns an iterator over the values in slot order.
    ///
    /// Slot order follows the hashes, not insertion order, and is reshuffled
    /// by any grow, shrink or removal.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            slots: self.slots.iter(),
            remaining: self.populated,
        }
    }

    /// Returns an iterator over mutable references to the values in slot
    /// order.
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            slots: self.slots.iter_mut(),
            remaining: self.populated,
        }
    }

    /// Removes every value from the table and returns them in slot order.
    ///
    /// The table is left as after [`clear`](Self::clear), even if the
    /// iterator is dropped early.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use robin_hood_map::hash_table::HashTable;
    /// let mut table = HashTable::new();
    /// table.entry(1, |&v: &u64| v == 10).or_insert(10);
    /// table.entry(2, |&v: &u64| v == 20).or_insert(20);
    ///
    /// let mut values: Vec<u64> = table.drain().collect();
    /// values.sort();
    /// assert_eq!(values, [10, 20]);
    /// assert!(table.is_empty());
    /// ```
    pub fn drain(&mut self) -> Drain<'_, V> {
        let slots = mem::replace(&mut self.slots, empty_slots(1));
        let remaining = mem::take(&mut self.populated);
        Drain {
            inner: IntoIter {
                slots: slots.into_iter(),
                remaining,
            },
            _marker: PhantomData,
        }
    }

    /// Finds the value matching `eq` among the entries hashed to `hash`.
    pub fn find(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&V> {
        let index = self.find_index(hash, eq)?;
        Some(&self.occupied(index).value)
    }

    /// Finds the value matching `eq` and returns a mutable reference to it.
    pub fn find_mut(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&mut V> {
        let index = self.find_index(hash, eq)?;
        Some(&mut self.occupied_mut(index).value)
    }

    /// Removes and returns the value matching `eq`, if present.
    ///
    /// The entries following the removed one in its probe run shift back by
    /// one slot, and the table halves if it drops below a quarter full.
    pub fn remove(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<V> {
        let index = self.find_index(hash, eq)?;
        Some(self.remove_at(index))
    }

    /// Gets the entry for the value matching `eq`, for in-place manipulation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use robin_hood_map::hash_table::Entry;
    /// # use robin_hood_map::hash_table::HashTable;
    /// let mut table = HashTable::new();
    ///
    /// match table.entry(7, |s: &String| s == "key") {
    ///     Entry::Vacant(entry) => {
    ///         entry.insert("key".to_string());
    ///     }
    ///     Entry::Occupied(entry) => {
    ///         println!("Key already exists with value: {}", entry.get());
    ///     }
    /// }
    /// assert!(table.find(7, |s| s == "key").is_some());
    /// ```
    pub fn entry(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Entry<'_, V> {
        match self.find_index(hash, eq) {
            Some(index) => Entry::Occupied(OccupiedEntry { table: self, index }),
            None => Entry::Vacant(VacantEntry { table: self, hash }),
        }
    }

    /// Probes from the ideal slot of `hash`.
    ///
    /// The search stops at the first empty slot, or at the first resident
    /// whose PSL is shorter than the distance probed so far: had the wanted
    /// entry been in this run, it would have displaced that resident.
    fn find_index(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<usize> {
        let capacity = self.slots.len();
        let mut index = ideal_slot(hash, capacity);

        for psl in 0..capacity {
            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Occupied(bucket) => {
                    if bucket.psl < psl {
                        return None;
                    }
                    if bucket.hash == hash && eq(&bucket.value) {
                        return Some(index);
                    }
                }
            }
            index = next_slot(index, capacity);
        }

        None
    }

    fn occupied(&self, index: usize) -> &Bucket<V> {
        match &self.slots[index] {
            Slot::Occupied(bucket) => bucket,
            Slot::Empty => unreachable!("slot {index} holds no entry"),
        }
    }

    fn occupied_mut(&mut self, index: usize) -> &mut Bucket<V> {
        match &mut self.slots[index] {
            Slot::Occupied(bucket) => bucket,
            Slot::Empty => unreachable!("slot {index} holds no entry"),
        }
    }

    /// Adds a value known to be absent, growing first if the load factor
    /// would be exceeded. Returns the slot the value landed in.
    fn insert_new(&mut self, hash: u64, value: V) -> usize {
        self.populated += 1;
        if exceeds_load_factor(self.populated, self.slots.len()) {
            self.rehash(self.slots.len() * CHANGE_FACTOR);
        }
        debug_assert!(self.populated < self.slots.len());
        Self::place(&mut self.slots, hash, value)
    }

    /// Robin Hood insertion into `slots`, which must have a free slot.
    ///
    /// Returns the index where `value` itself ended up; entries it displaced
    /// may have moved further along.
    fn place(slots: &mut [Slot<V>], hash: u64, value: V) -> usize {
        let capacity = slots.len();
        let mut index = ideal_slot(hash, capacity);
        let mut carried = Bucket {
            hash,
            psl: 0,
            value,
        };
        let mut landed = None;

        loop {
            let slot = &mut slots[index];
            match *slot {
                Slot::Empty => {
                    *slot = Slot::Occupied(carried);
                    return landed.unwrap_or(index);
                }
                Slot::Occupied(ref mut resident) => {
                    if carried.psl > resident.psl {
                        mem::swap(&mut carried, resident);
                        landed.get_or_insert(index);
                    }
                }
            }
            carried.psl += 1;
            index = next_slot(index, capacity);
        }
    }

    /// Removes the entry at `index`, backward-shifts its probe run, and
    /// shrinks if the free factor is crossed.
    fn remove_at(&mut self, index: usize) -> V {
        let capacity = self.slots.len();
        let removed = match mem::replace(&mut self.slots[index], Slot::Empty) {
            Slot::Occupied(bucket) => bucket.value,
            Slot::Empty => unreachable!("slot {index} holds no entry"),
        };

        let mut hole = index;
        let mut next = next_slot(index, capacity);
        loop {
            match &mut self.slots[next] {
                // PSL 0 is already home; an empty slot ends the run.
                Slot::Occupied(bucket) if bucket.psl > 0 => bucket.psl -= 1,
                _ => break,
            }
            self.slots.swap(hole, next);
            hole = next;
            next = next_slot(next, capacity);
        }

        self.populated -= 1;
        if capacity > 1 && below_free_factor(self.populated, capacity) {
            self.rehash(capacity / CHANGE_FACTOR);
        }

        removed
    }

    /// Replaces the slot array with `capacity` empty slots and reinserts
    /// every live entry, moving it rather than cloning.
    fn rehash(&mut self, capacity: usize) {
        let old = mem::replace(&mut self.slots, empty_slots(capacity.max(1)));
        for slot in old {
            if let Slot::Occupied(bucket) = slot {
                Self::place(&mut self.slots, bucket.hash, bucket.value);
            }
        }
    }

    /// Computes a histogram of probe sequence lengths for the current table
    /// state.
    ///
    /// Available with the `stats` feature, and always under `cfg(test)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(feature = "stats")]
    /// # {
    /// # use robin_hood_map::hash_table::HashTable;
    /// let mut table = HashTable::new();
    /// table.entry(0, |&v: &u64| v == 1).or_insert(1);
    /// table.entry(0, |&v: &u64| v == 2).or_insert(2);
    ///
    /// let hist = table.probe_histogram();
    /// assert_eq!(hist.counts(), &[1, 1]);
    /// assert_eq!(hist.max_psl(), Some(1));
    /// # }
    /// ```
    #[cfg(any(test, feature = "stats"))]
    pub fn probe_histogram(&self) -> ProbeHistogram {
        let mut counts = alloc::vec![0usize; self.slots.len()];
        for bucket in self.buckets() {
            counts[bucket.psl] += 1;
        }
        while counts.last() == Some(&0) {
            counts.pop();
        }
        ProbeHistogram { counts }
    }

    /// Returns detailed performance and utilization statistics for debugging.
    ///
    /// Available with the `stats` feature, and always under `cfg(test)`.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> DebugStats {
        let capacity = self.slots.len();
        let occupied_slots = self.buckets().count();
        let psl_sum: usize = self.buckets().map(|bucket| bucket.psl).sum();
        let slot_bytes = mem::size_of::<Slot<V>>();

        DebugStats {
            populated: self.populated,
            capacity,
            occupied_slots,
            load_factor: self.populated as f64 / capacity as f64,
            max_psl: self.buckets().map(|bucket| bucket.psl).max().unwrap_or(0),
            mean_psl: if occupied_slots == 0 {
                0.0
            } else {
                psl_sum as f64 / occupied_slots as f64
            },
            total_bytes: capacity * slot_bytes,
            wasted_bytes: (capacity - occupied_slots) * slot_bytes,
        }
    }

    #[cfg(any(test, feature = "stats"))]
    fn buckets(&self) -> impl Iterator<Item = &Bucket<V>> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied(bucket) => Some(bucket),
            Slot::Empty => None,
        })
    }

    /// PSL of every slot in array order, `None` for empty slots.
    #[cfg(test)]
    pub(crate) fn psl_layout(&self) -> Vec<Option<usize>> {
        self.slots
            .iter()
            .map(|slot| match slot {
                Slot::Occupied(bucket) => Some(bucket.psl),
                Slot::Empty => None,
            })
            .collect()
    }

    /// Panics unless every structural invariant of the table holds.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        let capacity = self.slots.len();
        assert!(capacity.is_power_of_two(), "capacity {capacity}");
        assert!(
            !exceeds_load_factor(self.populated, capacity),
            "{} entries in {} slots",
            self.populated,
            capacity
        );

        let mut occupied = 0;
        for (index, slot) in self.slots.iter().enumerate() {
            let Slot::Occupied(bucket) = slot else {
                continue;
            };
            occupied += 1;

            let ideal = ideal_slot(bucket.hash, capacity);
            assert_eq!(
                bucket.psl,
                (index + capacity - ideal) & (capacity - 1),
                "slot {index} records the wrong distance from {ideal}: {self:#?}"
            );

            if let Slot::Occupied(successor) = &self.slots[next_slot(index, capacity)] {
                assert!(
                    successor.psl <= bucket.psl + 1,
                    "probe run out of order after slot {index}: {self:#?}"
                );
            }
        }
        assert_eq!(occupied, self.populated);
    }
}

impl<V> IntoIterator for HashTable<V> {
    type IntoIter = IntoIter<V>;
    type Item = V;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            slots: self.slots.into_iter(),
            remaining: self.populated,
        }
    }
}

impl<'a, V> IntoIterator for &'a HashTable<V> {
    type IntoIter = Iter<'a, V>;
    type Item = &'a V;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut HashTable<V> {
    type IntoIter = IterMut<'a, V>;
    type Item = &'a mut V;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A view into a single entry in the hash table, which may be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on [`HashTable`].
///
/// [`entry`]: HashTable::entry
pub enum Entry<'a, V> {
    /// A vacant entry - the value is not present in the table
    Vacant(VacantEntry<'a, V>),
    /// An occupied entry - the value is present in the table
    Occupied(OccupiedEntry<'a, V>),
}

impl<'a, V> Entry<'a, V> {
    /// Inserts `default` if the entry is vacant and returns a mutable
    /// reference to the value in the entry.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts the result of `default` if the entry is vacant and returns a
    /// mutable reference to the value in the entry.
    pub fn or_insert_with(self, default: impl FnOnce() -> V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Applies `f` to an occupied value. Returns the value, or `None` if the
    /// entry was vacant.
    pub fn and_modify(self, f: impl FnOnce(&mut V)) -> Option<&'a mut V> {
        match self {
            Entry::Occupied(entry) => {
                let value = entry.into_mut();
                f(&mut *value);
                Some(value)
            }
            Entry::Vacant(_) => None,
        }
    }

    /// Inserts `V::default()` if the entry is vacant and returns a mutable
    /// reference to the value in the entry.
    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        self.or_insert_with(V::default)
    }
}

/// A view into a vacant entry in a [`HashTable`].
pub struct VacantEntry<'a, V> {
    table: &'a mut HashTable<V>,
    hash: u64,
}

impl<'a, V> VacantEntry<'a, V> {
    /// Inserts `value` and returns a mutable reference to it.
    ///
    /// May grow the table.
    pub fn insert(self, value: V) -> &'a mut V {
        let table = self.table;
        let index = table.insert_new(self.hash, value);
        &mut table.occupied_mut(index).value
    }
}

/// A view into an occupied entry in a [`HashTable`].
pub struct OccupiedEntry<'a, V> {
    table: &'a mut HashTable<V>,
    index: usize,
}

impl<'a, V> OccupiedEntry<'a, V> {
    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        &self.table.occupied(self.index).value
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.table.occupied_mut(self.index).value
    }

    /// Converts the entry into a mutable reference bound to the table's
    /// lifetime.
    pub fn into_mut(self) -> &'a mut V {
        let table = self.table;
        &mut table.occupied_mut(self.index).value
    }

    /// Removes the value from the table and returns it.
    ///
    /// May shrink the table.
    pub fn remove(self) -> V {
        self.table.remove_at(self.index)
    }
}

/// An iterator over the values in a [`HashTable`], in slot order.
///
/// Created by [`HashTable::iter`].
pub struct Iter<'a, V> {
    slots: core::slice::Iter<'a, Slot<V>>,
    remaining: usize,
}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Slot::Occupied(bucket) = slot {
                self.remaining -= 1;
                return Some(&bucket.value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.slots.next_back() {
            if let Slot::Occupied(bucket) = slot {
                self.remaining -= 1;
                return Some(&bucket.value);
            }
        }
        None
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}
impl<V> FusedIterator for Iter<'_, V> {}

/// A mutable iterator over the values in a [`HashTable`], in slot order.
///
/// Created by [`HashTable::iter_mut`].
pub struct IterMut<'a, V> {
    slots: core::slice::IterMut<'a, Slot<V>>,
    remaining: usize,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Slot::Occupied(bucket) = slot {
                self.remaining -= 1;
                return Some(&mut bucket.value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> DoubleEndedIterator for IterMut<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.slots.next_back() {
            if let Slot::Occupied(bucket) = slot {
                self.remaining -= 1;
                return Some(&mut bucket.value);
            }
        }
        None
    }
}

impl<V> ExactSizeIterator for IterMut<'_, V> {}
impl<V> FusedIterator for IterMut<'_, V> {}

/// An owning iterator over the values of a [`HashTable`], in slot order.
pub struct IntoIter<V> {
    slots: alloc::vec::IntoIter<Slot<V>>,
    remaining: usize,
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Slot::Occupied(bucket) = slot {
                self.remaining -= 1;
                return Some(bucket.value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> DoubleEndedIterator for IntoIter<V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.slots.next_back() {
            if let Slot::Occupied(bucket) = slot {
                self.remaining -= 1;
                return Some(bucket.value);
            }
        }
        None
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}
impl<V> FusedIterator for IntoIter<V> {}

/// A draining iterator over the values in a [`HashTable`].
///
/// Created by [`HashTable::drain`]. Values not yet yielded when the iterator
/// is dropped are dropped with it.
pub struct Drain<'a, V> {
    inner: IntoIter<V>,
    _marker: PhantomData<&'a mut HashTable<V>>,
}

impl<V> Iterator for Drain<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Drain<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<V> ExactSizeIterator for Drain<'_, V> {}
impl<V> FusedIterator for Drain<'_, V> {}
