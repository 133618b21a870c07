use crate::SearchScheme;

/// Forward scan over the whole slice. O(n).
pub struct LinearSearch;

impl SearchScheme for LinearSearch {
    fn search(&self, vals: &[u32], key: u32) -> Option<usize> {
        vals.iter().position(|&v| v == key)
    }
}

/// Branchy binary search over the ascending slice. O(log n).
pub struct BinarySearch;

impl SearchScheme for BinarySearch {
    fn search(&self, vals: &[u32], key: u32) -> Option<usize> {
        let mut l = 0;
        let mut r = vals.len();
        while l < r {
            let m = (l + r) / 2;
            let v = vals[m];
            if v < key {
                l = m + 1;
            } else if v > key {
                r = m;
            } else {
                return Some(m);
            }
        }
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const SCHEMES: [&dyn SearchScheme; 2] = [&LinearSearch, &BinarySearch];

    #[test]
    fn empty_slice_misses() {
        for scheme in SCHEMES {
            assert_eq!(scheme.search(&[], 0), None);
        }
    }

    #[test]
    fn finds_every_key_in_range() {
        let vals: Vec<u32> = (0..64).collect();
        for scheme in SCHEMES {
            for key in 0..64 {
                assert_eq!(scheme.search(&vals, key), Some(key as usize));
            }
        }
    }

    #[test]
    fn misses_keys_out_of_range() {
        let vals: Vec<u32> = (0..64).collect();
        for scheme in SCHEMES {
            assert_eq!(scheme.search(&vals, 64), None);
            assert_eq!(scheme.search(&vals, u32::MAX), None);
        }
    }

    #[test]
    fn single_element() {
        for scheme in SCHEMES {
            assert_eq!(scheme.search(&[0], 0), Some(0));
            assert_eq!(scheme.search(&[0], 1), None);
        }
    }

    #[test]
    fn finds_in_sparse_data() {
        // The driver only ever builds dense ascending data, but the
        // algorithms themselves work on any ascending slice.
        let vals = [1, 3, 7, 20, 21, 100];
        for scheme in SCHEMES {
            assert_eq!(scheme.search(&vals, 20), Some(3));
            assert_eq!(scheme.search(&vals, 2), None);
        }
    }
}
