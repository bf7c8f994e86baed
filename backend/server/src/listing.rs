//! # Listing
//!
//! The `/` page: every kit, narrowed by the dropdown filters, optionally sorted by votes and
//! cut into pages of [`LISTING_PAGE_SIZE`].
//!
//! Query parsing is lenient. Anything unparseable falls back to its default instead of
//! rejecting the request.
use std::collections::HashMap;

use bank::{
    payloads::LISTING_PAGE_SIZE,
    weapons::{Catalog, Kit},
};
use serde::{Deserialize, Serialize};

pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Default,
    VotesDesc,
    VotesAsc,
}

impl SortOrder {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("votes_desc") => Self::VotesDesc,
            Some("votes_asc") => Self::VotesAsc,
            _ => Self::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::VotesDesc => "votes_desc",
            Self::VotesAsc => "votes_asc",
        }
    }
}

/// Raw query string, every field optional.
#[derive(Deserialize, Debug, Default)]
pub struct ListingQuery {
    pub page: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub sub: Option<String>,
    pub special: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    pub page: usize,
    pub kind: String,
    pub sub: String,
    pub special: String,
    pub sort: SortOrder,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            page: 1,
            kind: ALL.to_string(),
            sub: ALL.to_string(),
            special: ALL.to_string(),
            sort: SortOrder::Default,
        }
    }
}

impl From<ListingQuery> for Filters {
    fn from(query: ListingQuery) -> Self {
        let page = query
            .page
            .and_then(|page| page.trim().parse::<usize>().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(1);

        Self {
            page,
            kind: query.kind.unwrap_or_else(|| ALL.to_string()),
            sub: query.sub.unwrap_or_else(|| ALL.to_string()),
            special: query.special.unwrap_or_else(|| ALL.to_string()),
            sort: SortOrder::parse(query.sort.as_deref()),
        }
    }
}

impl Filters {
    fn matches(&self, kit: &Kit) -> bool {
        (self.kind == ALL || kit.main.kind == self.kind)
            && (self.sub == ALL || kit.sub.name == self.sub)
            && (self.special == ALL || kit.special.name == self.special)
    }

    /// Query pairs that reproduce these filters, minus the page and any defaults.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();

        if self.kind != ALL {
            pairs.push(("type", self.kind.as_str()));
        }
        if self.sub != ALL {
            pairs.push(("sub", self.sub.as_str()));
        }
        if self.special != ALL {
            pairs.push(("special", self.special.as_str()));
        }
        if self.sort != SortOrder::Default {
            pairs.push(("sort", self.sort.as_str()));
        }

        pairs
    }
}

#[derive(Serialize, Debug, Clone, Copy)]
pub struct ListedKit {
    pub kit: Kit,
    pub vote_count: u32,
}

#[derive(Serialize, Debug)]
pub struct Listing {
    pub kits: Vec<ListedKit>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_kits: usize,
}

pub fn build_listing(catalog: &Catalog, counts: &HashMap<u32, u32>, filters: &Filters) -> Listing {
    let mut kits: Vec<ListedKit> = catalog
        .kits()
        .filter(|kit| filters.matches(kit))
        .map(|kit| ListedKit {
            kit,
            vote_count: counts.get(&kit.id).copied().unwrap_or(0),
        })
        .collect();

    // sort_by_key is stable, ties stay in id order
    match filters.sort {
        SortOrder::Default => {}
        SortOrder::VotesDesc => kits.sort_by_key(|listed| std::cmp::Reverse(listed.vote_count)),
        SortOrder::VotesAsc => kits.sort_by_key(|listed| listed.vote_count),
    }

    let total_kits = kits.len();
    let total_pages = total_kits.div_ceil(LISTING_PAGE_SIZE);

    let start = (filters.page - 1).saturating_mul(LISTING_PAGE_SIZE);
    let kits = kits
        .into_iter()
        .skip(start)
        .take(LISTING_PAGE_SIZE)
        .collect();

    Listing {
        kits,
        current_page: filters.page,
        total_pages,
        total_kits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> Filters {
        let mut query = ListingQuery::default();

        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "page" => query.page = value,
                "type" => query.kind = value,
                "sub" => query.sub = value,
                "special" => query.special = value,
                "sort" => query.sort = value,
                _ => unreachable!(),
            }
        }

        query.into()
    }

    #[test]
    fn test_lenient_parsing() {
        assert_eq!(query(&[]), Filters::default());
        assert_eq!(query(&[("page", "abc")]).page, 1);
        assert_eq!(query(&[("page", "0")]).page, 1);
        assert_eq!(query(&[("page", "-3")]).page, 1);
        assert_eq!(query(&[("page", "4")]).page, 4);
        assert_eq!(query(&[("sort", "bogus")]).sort, SortOrder::Default);
        assert_eq!(query(&[("sort", "votes_asc")]).sort, SortOrder::VotesAsc);
    }

    #[test]
    fn test_unfiltered_pagination() {
        let catalog = Catalog::new();
        let listing = build_listing(&catalog, &HashMap::new(), &Filters::default());

        let total = catalog.kits().count();
        assert_eq!(listing.total_kits, total);
        assert_eq!(listing.total_pages, total.div_ceil(100));
        assert_eq!(listing.kits.len(), 100);
        assert_eq!(listing.kits[0].kit.id, catalog.kits().next().unwrap().id);
    }

    #[test]
    fn test_filters_combine() {
        let catalog = Catalog::new();
        let filters = query(&[("type", "ローラー"), ("sub", "スプラッシュボム")]);
        let listing = build_listing(&catalog, &HashMap::new(), &filters);

        // 5 rollers x 19 specials, minus ダイナモローラー + スプラッシュボム + デコイチラシ
        assert_eq!(listing.total_kits, 5 * 19 - 1);
        assert_eq!(listing.total_pages, 1);
        assert!(listing.kits.iter().all(|listed| {
            listed.kit.main.kind == "ローラー" && listed.kit.sub.name == "スプラッシュボム"
        }));
    }

    #[test]
    fn test_unknown_filter_is_empty() {
        let catalog = Catalog::new();
        let listing = build_listing(&catalog, &HashMap::new(), &query(&[("type", "nope")]));

        assert!(listing.kits.is_empty());
        assert_eq!(listing.total_pages, 0);
    }

    #[test]
    fn test_sort_by_votes_is_stable() {
        let catalog = Catalog::new();
        let filters = query(&[("special", "ナイスダマ"), ("type", "フデ")]);
        let ids: Vec<u32> = build_listing(&catalog, &HashMap::new(), &filters)
            .kits
            .iter()
            .map(|listed| listed.kit.id)
            .collect();

        let mut counts = HashMap::new();
        counts.insert(ids[2], 5);
        counts.insert(ids[4], 5);
        counts.insert(ids[1], 1);

        let desc = Filters {
            sort: SortOrder::VotesDesc,
            ..filters.clone()
        };
        let sorted: Vec<u32> = build_listing(&catalog, &counts, &desc)
            .kits
            .iter()
            .map(|listed| listed.kit.id)
            .collect();
        assert_eq!(&sorted[..3], &[ids[2], ids[4], ids[1]]);
        assert_eq!(sorted[3], ids[0]);

        let asc = Filters {
            sort: SortOrder::VotesAsc,
            ..filters
        };
        let sorted: Vec<u32> = build_listing(&catalog, &counts, &asc)
            .kits
            .iter()
            .map(|listed| listed.kit.id)
            .collect();
        assert_eq!(sorted[0], ids[0]);
        assert_eq!(&sorted[sorted.len() - 2..], &[ids[2], ids[4]]);
    }

    #[test]
    fn test_page_past_end() {
        let catalog = Catalog::new();
        let listing = build_listing(&catalog, &HashMap::new(), &query(&[("page", "9999")]));

        assert!(listing.kits.is_empty());
        assert_eq!(listing.current_page, 9999);
    }

    #[test]
    fn test_query_pairs_skip_defaults() {
        let filters = query(&[("page", "3"), ("sub", "トラップ"), ("sort", "votes_desc")]);

        assert_eq!(
            filters.query_pairs(),
            vec![("sub", "トラップ"), ("sort", "votes_desc")]
        );
    }
}
