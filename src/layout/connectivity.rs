use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parent assignment for regions `2..=n`. Region 1 is the root and has no parent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentTable {
    parents: BTreeMap<u32, u32>,
}

impl ParentTable {
    pub fn parent_of(&self, region: u32) -> Option<u32> {
        self.parents.get(&region).copied()
    }

    /// Number of regions covered, root included
    pub fn region_count(&self) -> u32 {
        self.parents.len() as u32 + 1
    }

    /// (child, parent) pairs in increasing child order
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.parents.iter().map(|(&child, &parent)| (child, parent))
    }

    /// Chain of regions from `region` up to the root, both ends included
    pub fn ancestry(&self, region: u32) -> Vec<u32> {
        let mut chain = vec![region];
        let mut current = region;
        while let Some(parent) = self.parent_of(current) {
            chain.push(parent);
            current = parent;
        }
        chain
    }
}

/// Give every region but the first a uniformly random parent among the
/// regions numbered before it. Following parents always ends at region 1.
pub fn plan_parents<R: Rng + ?Sized>(region_count: u32, rng: &mut R) -> ParentTable {
    let parents = (2..=region_count)
        .map(|region| (region, rng.gen_range(1..region)))
        .collect();
    ParentTable { parents }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn test_single_region_has_no_parents() {
        let table = plan_parents(1, &mut Pcg64::seed_from_u64(3));
        assert_eq!(table.region_count(), 1);
        assert_eq!(table.parent_of(1), None);
        assert_eq!(table.iter().count(), 0);
    }

    #[test]
    fn test_second_region_always_docks_to_first() {
        for seed in 0..20 {
            let table = plan_parents(2, &mut Pcg64::seed_from_u64(seed));
            assert_eq!(table.parent_of(2), Some(1));
        }
    }

    #[test]
    fn test_parents_precede_children_and_reach_root() {
        let table = plan_parents(40, &mut Pcg64::seed_from_u64(11));
        assert_eq!(table.region_count(), 40);
        assert_eq!(table.parent_of(1), None);

        for (child, parent) in table.iter() {
            assert!((1..child).contains(&parent));
        }
        for region in 1..=40 {
            assert_eq!(table.ancestry(region).last(), Some(&1));
        }
    }

    #[test]
    fn test_ancestry_chain() {
        let table = ParentTable {
            parents: BTreeMap::from([(2, 1), (3, 2), (4, 2)]),
        };
        assert_eq!(table.ancestry(4), vec![4, 2, 1]);
        assert_eq!(table.ancestry(1), vec![1]);
    }
}
