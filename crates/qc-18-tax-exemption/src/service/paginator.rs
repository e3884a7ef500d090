//! Chunked ordered iteration and offset/key pagination over one namespace.

use std::collections::VecDeque;

use crate::domain::{keys, ExemptionConfig, Page, PageRequest, PageResponse};
use crate::error::ExemptionError;
use crate::ports::outbound::{prefix_end, KVStoreError, KeyValueStore, ScanDirection};

/// Iterates one key namespace in `batch_size` store round-trips.
///
/// Yields keys with the namespace byte stripped.
pub(crate) struct NamespaceIter<'a, S: KeyValueStore> {
    store: &'a S,
    lower: Vec<u8>,
    upper: Option<Vec<u8>>,
    direction: ScanDirection,
    batch_size: usize,
    buffer: VecDeque<(Vec<u8>, Vec<u8>)>,
    exhausted: bool,
}

impl<'a, S: KeyValueStore> NamespaceIter<'a, S> {
    /// Start at `start` (inclusive, a key within the namespace) or at the
    /// namespace edge matching `direction`.
    pub(crate) fn new(
        store: &'a S,
        namespace: u8,
        start: Option<&[u8]>,
        direction: ScanDirection,
        batch_size: usize,
    ) -> Self {
        let prefix = [namespace];
        let mut lower = prefix.to_vec();
        let mut upper = prefix_end(&prefix);

        if let Some(start) = start {
            let mut key = keys::prefixed(namespace, start);
            match direction {
                ScanDirection::Forward => lower = key,
                ScanDirection::Reverse => {
                    // Smallest key above `start` keeps `start` itself in range.
                    key.push(0x00);
                    upper = Some(key);
                }
            }
        }

        Self {
            store,
            lower,
            upper,
            direction,
            batch_size: batch_size.max(1),
            buffer: VecDeque::new(),
            exhausted: false,
        }
    }

    fn refill(&mut self) -> Result<(), KVStoreError> {
        let batch = self.store.range_scan(
            &self.lower,
            self.upper.as_deref(),
            self.direction,
            self.batch_size,
        )?;

        if batch.len() < self.batch_size {
            self.exhausted = true;
        }
        if let Some((last, _)) = batch.last() {
            match self.direction {
                ScanDirection::Forward => {
                    let mut next = last.clone();
                    next.push(0x00);
                    self.lower = next;
                }
                ScanDirection::Reverse => self.upper = Some(last.clone()),
            }
        }
        self.buffer.extend(batch);
        Ok(())
    }
}

impl<S: KeyValueStore> Iterator for NamespaceIter<'_, S> {
    type Item = Result<(Vec<u8>, Vec<u8>), KVStoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.buffer.is_empty() && !self.exhausted {
            if let Err(e) = self.refill() {
                self.exhausted = true;
                return Some(Err(e));
            }
        }
        self.buffer
            .pop_front()
            .map(|(mut key, value)| Ok((key.split_off(1), value)))
    }
}

/// Page through one namespace.
///
/// `accept` maps a raw entry to an item, or `None` to filter it out.
/// Offsets and totals count accepted entries only.
pub(crate) fn paginate<S, T, F>(
    store: &S,
    namespace: u8,
    request: &PageRequest,
    config: &ExemptionConfig,
    mut accept: F,
) -> Result<Page<T>, ExemptionError>
where
    S: KeyValueStore,
    F: FnMut(&[u8], &[u8]) -> Result<Option<T>, ExemptionError>,
{
    request.validate(config.max_page_limit)?;

    let direction = if request.reverse {
        ScanDirection::Reverse
    } else {
        ScanDirection::Forward
    };
    let limit = if request.limit == 0 {
        u64::MAX
    } else {
        request.limit
    };
    // Totals are only meaningful from the start of the namespace.
    let count_total = request.count_total && request.key.is_none();

    let entries = NamespaceIter::new(
        store,
        namespace,
        request.key.as_deref(),
        direction,
        config.scan_batch_size,
    );

    let mut items = Vec::new();
    let mut hits: u64 = 0;
    let mut next_key = None;

    for entry in entries {
        let (key, value) = entry?;
        let Some(item) = accept(&key, &value)? else {
            continue;
        };
        hits += 1;

        if hits <= request.offset {
            continue;
        }
        if (items.len() as u64) < limit {
            items.push(item);
            continue;
        }
        if next_key.is_none() {
            next_key = Some(key);
        }
        if !count_total {
            break;
        }
    }

    Ok(Page {
        items,
        pagination: PageResponse {
            next_key,
            total: count_total.then_some(hits),
        },
    })
}
