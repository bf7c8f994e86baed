use std::{cmp::Reverse, collections::HashMap};

use bank::{
    payloads::{RANKING_PAGE_SIZE, RankingEntry},
    weapons::Catalog,
};
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct RankingQuery {
    pub offset: Option<String>,
}

impl RankingQuery {
    /// Unparseable or negative offsets start from the top.
    pub fn offset(&self) -> usize {
        self.offset
            .as_deref()
            .and_then(|offset| offset.trim().parse::<usize>().ok())
            .unwrap_or(0)
    }
}

/// Every kit, excluded ones too, ordered by votes descending then id ascending, starting at
/// `offset`.
pub fn ranking_page(catalog: &Catalog, counts: &HashMap<u32, u32>, offset: usize) -> Vec<RankingEntry> {
    let mut ranked: Vec<(u32, u32)> = catalog
        .all_kits()
        .map(|kit| (kit.id, counts.get(&kit.id).copied().unwrap_or(0)))
        .collect();

    ranked.sort_unstable_by_key(|&(id, votes)| (Reverse(votes), id));

    ranked
        .into_iter()
        .skip(offset)
        .take(RANKING_PAGE_SIZE)
        .filter_map(|(id, votes)| catalog.kit(id).map(|kit| RankingEntry::from_kit(&kit, votes)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_parsing() {
        let query = |raw: &str| RankingQuery {
            offset: Some(raw.to_string()),
        };

        assert_eq!(RankingQuery::default().offset(), 0);
        assert_eq!(query("200").offset(), 200);
        assert_eq!(query("-5").offset(), 0);
        assert_eq!(query("ten").offset(), 0);
    }

    #[test]
    fn test_votes_then_id_order() {
        let catalog = Catalog::new();
        let ids: Vec<u32> = catalog.kits().map(|kit| kit.id).take(10).collect();
        assert_eq!(ids[0], 0);

        let mut counts = HashMap::new();
        counts.insert(ids[7], 3);
        counts.insert(ids[3], 9);
        counts.insert(ids[5], 3);

        let page = ranking_page(&catalog, &counts, 0);
        assert_eq!(page.len(), RANKING_PAGE_SIZE);

        let votes: Vec<u32> = page.iter().take(4).map(|entry| entry.vote_count).collect();
        assert_eq!(votes, vec![9, 3, 3, 0]);

        let kit = |id: u32| catalog.kit(id).unwrap();
        assert_eq!(page[0].main.name, kit(ids[3]).main.name);
        assert_eq!(page[0].special.name, kit(ids[3]).special.name);
        assert_eq!(page[1].special.name, kit(ids[5]).special.name);
        assert_eq!(page[2].special.name, kit(ids[7]).special.name);
        assert_eq!(page[3].special.name, kit(ids[0]).special.name);
    }

    #[test]
    fn test_offset_walks_to_empty() {
        let catalog = Catalog::new();
        let counts = HashMap::new();
        let total = catalog.total_combinations() as usize;

        let last = ranking_page(&catalog, &counts, total - 1);
        assert_eq!(last.len(), 1);

        assert!(ranking_page(&catalog, &counts, total).is_empty());
        assert!(ranking_page(&catalog, &counts, total + 500).is_empty());
    }

    #[test]
    fn test_excluded_kits_ranked() {
        let catalog = Catalog::new();
        let excluded = catalog.kit(catalog.kit_id(0, 0, 1)).unwrap();
        assert!(catalog.is_excluded(&excluded));

        let page = ranking_page(&catalog, &HashMap::new(), 0);
        assert_eq!(page[1].special.name, excluded.special.name);

        let mut counts = HashMap::new();
        counts.insert(excluded.id, 100);

        let page = ranking_page(&catalog, &counts, 0);
        assert_eq!(page[0].vote_count, 100);
        assert_eq!(page[0].main.name, excluded.main.name);
        assert_eq!(page[0].sub.name, excluded.sub.name);
        assert_eq!(page[0].special.name, excluded.special.name);
    }
}
