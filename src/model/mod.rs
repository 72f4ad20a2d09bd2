//! Aggregation model: accumulate flow records per group, reduce to mean-FCT
//! rows per curve.

use crate::log::{Bucket, FlowRecord, GroupKey, Policy, Workload};
use serde::Serialize;
use std::collections::BTreeMap;

/// Which flows a table or chart covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Curve {
    All,
    Small,
    Large,
}

impl Curve {
    pub const ALL: [Curve; 3] = [Curve::All, Curve::Small, Curve::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            Curve::All => "all",
            Curve::Small => "small",
            Curve::Large => "large",
        }
    }

    fn accepts(self, bucket: Bucket) -> bool {
        match self {
            Curve::All => true,
            Curve::Small => bucket == Bucket::Small,
            Curve::Large => bucket == Bucket::Large,
        }
    }
}

/// Append-only store of parsed flow records, one sequence per group.
///
/// Repeated identical lines produce repeated records on purpose: they are
/// repeated flow events and belong in the mean.
#[derive(Debug, Default)]
pub struct FlowStore {
    flows: BTreeMap<GroupKey, Vec<FlowRecord>>,
}

impl FlowStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: GroupKey, record: FlowRecord) {
        self.flows.entry(key).or_default().push(record);
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    pub fn group_count(&self) -> usize {
        self.flows.len()
    }

    pub fn record_count(&self) -> usize {
        self.flows.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, &[FlowRecord])> {
        self.flows.iter().map(|(key, records)| (key, records.as_slice()))
    }
}

/// One output row: the mean fct of one group's flows under one curve filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRow {
    pub policy: Policy,
    pub workload: Workload,
    pub util: f64,
    pub mean_fct: f64,
    pub curve: Curve,
}

/// Reduce the store to mean-FCT rows.
///
/// A group whose filtered subset is empty contributes no row for that curve;
/// we never emit 0 or NaN standing in for a measurement. Rows come out sorted
/// by (curve, workload, policy, utilization), with utilization compared
/// numerically, so output is diff-stable regardless of input file order.
pub fn aggregate(store: &FlowStore) -> Vec<AggregateRow> {
    let mut rows = Vec::new();

    for curve in Curve::ALL {
        for (key, records) in store.iter() {
            let mut sum = 0.0f64;
            let mut count = 0usize;
            for record in records {
                if curve.accepts(record.bucket) {
                    sum += record.fct;
                    count += 1;
                }
            }
            if count == 0 {
                continue;
            }
            rows.push(AggregateRow {
                policy: key.policy,
                workload: key.workload,
                util: key.util.into_inner(),
                mean_fct: sum / count as f64,
                curve,
            });
        }
    }

    rows.sort_by(|a, b| {
        a.curve
            .cmp(&b.curve)
            .then_with(|| a.workload.as_str().cmp(b.workload.as_str()))
            .then_with(|| a.policy.as_str().cmp(b.policy.as_str()))
            .then_with(|| a.util.total_cmp(&b.util))
    });

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SMALL_CUTOFF;
    use ordered_float::OrderedFloat;
    use pretty_assertions::assert_eq;

    fn key(policy: Policy, workload: Workload, util: f64) -> GroupKey {
        GroupKey {
            policy,
            workload,
            util: OrderedFloat(util),
        }
    }

    fn record(size: u64, fct: f64) -> FlowRecord {
        FlowRecord::new(size, fct, DEFAULT_SMALL_CUTOFF)
    }

    fn row_for(rows: &[AggregateRow], curve: Curve) -> &AggregateRow {
        rows.iter().find(|r| r.curve == curve).unwrap()
    }

    #[test]
    fn small_large_split_scenario() {
        let mut store = FlowStore::new();
        let k = key(Policy::Ecmp, Workload::Uniform, 0.5);
        store.push(k, record(500, 10.0));
        store.push(k, record(200_000, 50.0));

        let rows = aggregate(&store);
        assert_eq!(rows.len(), 3);
        assert_eq!(row_for(&rows, Curve::All).mean_fct, 30.0);
        assert_eq!(row_for(&rows, Curve::Small).mean_fct, 10.0);
        assert_eq!(row_for(&rows, Curve::Large).mean_fct, 50.0);
        for row in &rows {
            assert_eq!(row.policy, Policy::Ecmp);
            assert_eq!(row.workload, Workload::Uniform);
            assert_eq!(row.util, 0.5);
        }
    }

    #[test]
    fn empty_filtered_subsets_emit_no_rows() {
        let mut store = FlowStore::new();
        let k = key(Policy::Conga, Workload::Pareto, 0.7);
        store.push(k, record(100, 3.0));
        store.push(k, record(200, 5.0));

        let rows = aggregate(&store);
        // only small flows: no Large row, and no 0/NaN placeholder
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.curve != Curve::Large));
        assert!(rows.iter().all(|r| r.mean_fct.is_finite()));
    }

    #[test]
    fn duplicate_records_keep_a_constant_mean() {
        let mut store = FlowStore::new();
        let k = key(Policy::Ecmp, Workload::Datamining, 0.3);
        for _ in 0..5 {
            store.push(k, record(1000, 7.5));
        }

        let rows = aggregate(&store);
        assert_eq!(row_for(&rows, Curve::All).mean_fct, 7.5);
        assert_eq!(row_for(&rows, Curve::Small).mean_fct, 7.5);
    }

    #[test]
    fn split_inputs_merge_into_one_group() {
        let mut store = FlowStore::new();
        let k = key(Policy::Ecmp, Workload::Uniform, 0.5);
        // two files contributing to the same key
        store.push(k, record(500, 10.0));
        store.push(k, record(600, 20.0));

        assert_eq!(store.group_count(), 1);
        let rows = aggregate(&store);
        let all: Vec<_> = rows.iter().filter(|r| r.curve == Curve::All).collect();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].mean_fct, 15.0);
    }

    #[test]
    fn small_and_large_counts_partition_all() {
        let mut store = FlowStore::new();
        let k = key(Policy::Conga, Workload::Enterprise, 0.6);
        for (size, fct) in [(500, 1.0), (102_399, 2.0), (102_400, 3.0), (500_000, 4.0)] {
            store.push(k, record(size, fct));
        }

        let records = store.iter().next().unwrap().1;
        let small = records.iter().filter(|r| r.bucket == Bucket::Small).count();
        let large = records.iter().filter(|r| r.bucket == Bucket::Large).count();
        assert_eq!(small + large, records.len());
        assert_eq!(small, 2);
        assert_eq!(large, 2);
    }

    #[test]
    fn row_order_is_stable_and_sorted() {
        let mut store = FlowStore::new();
        // inserted in scrambled order on purpose
        store.push(key(Policy::Ecmp, Workload::Uniform, 0.8), record(10, 1.0));
        store.push(key(Policy::Conga, Workload::Uniform, 0.2), record(10, 1.0));
        store.push(key(Policy::Ecmp, Workload::Datamining, 0.5), record(10, 1.0));
        store.push(key(Policy::Ecmp, Workload::Uniform, 0.2), record(10, 1.0));

        let rows = aggregate(&store);
        let all: Vec<_> = rows
            .iter()
            .filter(|r| r.curve == Curve::All)
            .map(|r| (r.workload.as_str(), r.policy.as_str(), r.util))
            .collect();
        assert_eq!(
            all,
            vec![
                ("datamining", "ecmp", 0.5),
                ("uniform", "conga", 0.2),
                ("uniform", "ecmp", 0.2),
                ("uniform", "ecmp", 0.8),
            ]
        );
    }

    #[test]
    fn empty_store_aggregates_to_nothing() {
        let store = FlowStore::new();
        assert!(store.is_empty());
        assert_eq!(aggregate(&store), vec![]);
    }
}
