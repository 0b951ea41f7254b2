/// Array backed binary min-heap.
///
/// Every element is tagged with the running number of its insertion, so among
/// equal keys the element inserted first is extracted first.
#[derive(Debug, Clone)]
pub struct MinHeap<T: Ord> {
    elements: Vec<Entry<T>>,
    next_sequence_number: u64,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    key: T,
    sequence_number: u64,
}

impl<T: Ord> Entry<T> {
    fn precedes(&self, other: &Self) -> bool {
        (&self.key, self.sequence_number) < (&other.key, other.sequence_number)
    }
}

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

fn left(i: usize) -> usize {
    2 * i + 1
}

fn right(i: usize) -> usize {
    2 * i + 2
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap {
            elements: Vec::new(),
            next_sequence_number: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            elements: Vec::with_capacity(capacity),
            next_sequence_number: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn peek(&self) -> Option<&T> {
        self.elements.first().map(|entry| &entry.key)
    }

    pub fn insert(&mut self, key: T) {
        self.elements.push(Entry {
            key,
            sequence_number: self.next_sequence_number,
        });
        self.next_sequence_number += 1;
        self.sift_up(self.elements.len() - 1);
    }

    pub fn extract_min(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let minimum = self.elements.pop();
        if !self.elements.is_empty() {
            self.sift_down(0);
        }
        minimum.map(|entry| entry.key)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = parent(i);
            if !self.elements[i].precedes(&self.elements[p]) {
                break;
            }
            self.elements.swap(i, p);
            i = p;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.elements.len();
        loop {
            let l = left(i);
            let r = right(i);
            let mut smallest = i;
            if l < n && self.elements[l].precedes(&self.elements[smallest]) {
                smallest = l;
            }
            if r < n && self.elements[r].precedes(&self.elements[smallest]) {
                smallest = r;
            }
            if smallest == i {
                return;
            }
            self.elements.swap(i, smallest);
            i = smallest;
        }
    }

    #[cfg(test)]
    fn valid_min_heap(&self) -> bool {
        (1..self.elements.len()).all(|i| !self.elements[i].precedes(&self.elements[parent(i)]))
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::MinHeap;

    #[test]
    fn extracts_in_ascending_order() {
        let mut heap = MinHeap::new();
        for value in [17, 3, 12, 3, 18, 12, 13, 1, 99, 0] {
            heap.insert(value);
            assert!(heap.valid_min_heap());
        }
        let mut extracted = Vec::new();
        while let Some(value) = heap.extract_min() {
            assert!(heap.valid_min_heap());
            extracted.push(value);
        }
        assert_eq!(extracted, vec![0, 1, 3, 3, 12, 12, 13, 17, 18, 99]);
    }

    #[test]
    fn extract_from_empty_heap_returns_none() {
        let mut heap: MinHeap<usize> = MinHeap::default();
        assert!(heap.is_empty());
        assert_eq!(heap.extract_min(), None);
        assert_eq!(heap.peek(), None);
    }

    #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
    struct Weighted {
        weight: usize,
    }

    #[test]
    fn equal_keys_leave_in_insertion_order() {
        // keys compare equal, the payload only tells the elements apart
        #[derive(Debug)]
        struct Tagged(usize, char);
        impl PartialEq for Tagged {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }
        impl Eq for Tagged {}
        impl PartialOrd for Tagged {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Tagged {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let mut heap = MinHeap::new();
        for (weight, tag) in [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (2, 'e')] {
            heap.insert(Tagged(weight, tag));
        }
        let order: String = std::iter::from_fn(|| heap.extract_min())
            .map(|tagged| tagged.1)
            .collect();
        assert_eq!(order, "bdace");
    }

    #[test]
    fn peek_returns_minimum_without_removing() {
        let mut heap = MinHeap::with_capacity(3);
        heap.insert(Weighted { weight: 5 });
        heap.insert(Weighted { weight: 2 });
        heap.insert(Weighted { weight: 9 });
        assert_eq!(heap.peek(), Some(&Weighted { weight: 2 }));
        assert_eq!(heap.len(), 3);
    }
}
