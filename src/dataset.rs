use itertools::Itertools;
use log::info;
use std::time::Instant;

/// Populate the dataset: `len` ascending values with value == index.
///
/// Allocated exactly to the requested length; there is no oversized backing
/// buffer to validate against.
pub fn ascending(len: u32) -> Vec<u32> {
    let start = Instant::now();
    let vals = (0..len).collect_vec();
    info!("Populating {} elements took {:?}", len, start.elapsed());
    vals
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn value_equals_index() {
        let vals = ascending(100);
        assert_eq!(vals.len(), 100);
        for (i, &v) in vals.iter().enumerate() {
            assert_eq!(v, i as u32);
        }
    }

    #[test]
    fn zero_length_is_empty() {
        assert!(ascending(0).is_empty());
    }
}
