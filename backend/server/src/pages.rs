//! # Pages
//!
//! Server-rendered HTML from the minijinja templates under `templates/`. Element ids and
//! classes are what the browser scripts under `/static/js` hook into:
//!
//! - listing: `#type-filter`, `#sub-filter`, `#special-filter`, `#sort-order`,
//!   `.vote-button[data-id]`, `#vote-count-{id}`, `#votes-remaining`
//! - ranking: `#ranking-list`, `#load-more-btn`, `#loader`
//!
//! Templates end in `.html` so minijinja auto-escapes every value. Filter values are user
//! input and go through that escaping like everything else.
use bank::{payloads::CSRF_META_NAME, weapons::Catalog};
use minijinja::{Environment, Error, Value, context};
use url::form_urlencoded::Serializer;

use crate::listing::{ALL, Filters, Listing, SortOrder};

const TEMPLATES: [(&str, &str); 4] = [
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("ranking.html", include_str!("../templates/ranking.html")),
    ("about.html", include_str!("../templates/about.html")),
];

pub struct Pages {
    env: Environment<'static>,
}

impl Pages {
    pub fn new() -> Result<Self, Error> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }

        Ok(Self { env })
    }

    fn render(&self, name: &str, ctx: Value) -> Result<String, Error> {
        self.env.get_template(name)?.render(ctx)
    }

    pub fn index(
        &self,
        catalog: &Catalog,
        filters: &Filters,
        listing: &Listing,
        csrf_token: &str,
    ) -> Result<String, Error> {
        let named = |names: Vec<&'static str>| -> Vec<(&'static str, &'static str)> {
            names.into_iter().map(|name| (name, name)).collect()
        };

        let sorts = [
            (SortOrder::VotesDesc.as_str(), "票が多い順"),
            (SortOrder::VotesAsc.as_str(), "票が少ない順"),
        ];

        let prev_query =
            (listing.current_page > 1).then(|| page_query(filters, listing.current_page - 1));
        let next_query = (listing.current_page < listing.total_pages)
            .then(|| page_query(filters, listing.current_page + 1));

        self.render(
            "index.html",
            context! {
                title => "一覧",
                scripts => ["filter.js", "vote.js"],
                csrf_meta => CSRF_META_NAME,
                csrf_token,
                all => ALL,
                default_sort => SortOrder::Default.as_str(),
                types => named(catalog.weapon_types()),
                subs => named(catalog.sub_names()),
                specials => named(catalog.special_names()),
                sorts,
                filters => context! {
                    kind => &filters.kind,
                    sub => &filters.sub,
                    special => &filters.special,
                    sort => filters.sort.as_str(),
                },
                listing,
                prev_query,
                next_query,
            },
        )
    }

    pub fn ranking(&self) -> Result<String, Error> {
        self.render(
            "ranking.html",
            context! { title => "ランキング", scripts => ["ranking.js"] },
        )
    }

    pub fn about(&self) -> Result<String, Error> {
        self.render("about.html", context! { title => "このサイトについて" })
    }
}

/// Query string for `page` that keeps the current filters.
pub fn page_query(filters: &Filters, page: usize) -> String {
    let mut query = Serializer::new(String::new());
    query.append_pair("page", &page.to_string());

    for (key, value) in filters.query_pairs() {
        query.append_pair(key, value);
    }

    query.finish()
}
