use api::CompanyQuery;
use dioxus::prelude::*;
use types::Pagination;
use types::company::{Company, CompanyDetail, CompanyStats, CompanyUpdate};

use super::Sequence;
use crate::toast::Toasts;

#[derive(Clone, Copy)]
pub struct CompanyStore {
    pub items: Signal<Vec<Company>>,
    pub pagination: Signal<Option<Pagination>>,
    pub loading: Signal<bool>,
    pub stats: Signal<Option<CompanyStats>>,
    pub stats_loading: Signal<bool>,
    pub detail: Signal<Option<CompanyDetail>>,
    pub detail_loading: Signal<bool>,
    seq: Signal<Sequence>,
    toasts: Toasts,
}

pub fn provide(toasts: Toasts) -> CompanyStore {
    use_context_provider(|| CompanyStore {
        items: Signal::new(Vec::new()),
        pagination: Signal::new(None),
        loading: Signal::new(false),
        stats: Signal::new(None),
        stats_loading: Signal::new(false),
        detail: Signal::new(None),
        detail_loading: Signal::new(false),
        seq: Signal::new(Sequence::default()),
        toasts,
    })
}

pub fn use_companies() -> CompanyStore {
    use_context()
}

impl CompanyStore {
    /// Replaces the cached page with the result of `query`. The previous
    /// page stays visible while the request is in flight; a response that
    /// has been superseded by a newer fetch is dropped.
    pub async fn fetch(mut self, query: CompanyQuery) {
        let ticket = self.seq.write().begin();
        self.loading.set(true);

        let result = api::admin::list_companies(&query).await;
        if !self.seq.peek().is_current(ticket) {
            return;
        }

        match result {
            Ok(page) => {
                self.items.set(page.items);
                self.pagination.set(Some(page.pagination));
            }
            Err(err) => {
                self.items.set(Vec::new());
                self.pagination.set(None);
                self.toasts.error(err.user_message());
            }
        }
        self.loading.set(false);
    }

    pub async fn fetch_stats(mut self) {
        self.stats_loading.set(true);
        match api::admin::company_stats().await {
            Ok(stats) => self.stats.set(Some(stats)),
            Err(err) => {
                self.stats.set(None);
                self.toasts.error(err.user_message());
            }
        }
        self.stats_loading.set(false);
    }

    pub async fn fetch_detail(mut self, id: i64) {
        self.detail_loading.set(true);
        match api::admin::company_detail(id).await {
            Ok(detail) => self.detail.set(Some(detail)),
            Err(err) => {
                self.detail.set(None);
                self.toasts.error(err.user_message());
            }
        }
        self.detail_loading.set(false);
    }

    /// Saves profile edits. The response carries the full record, so the
    /// cached detail is replaced in place.
    pub async fn update(mut self, id: i64, update: CompanyUpdate) -> bool {
        match api::admin::update_company(id, &update).await {
            Ok(detail) => {
                self.detail.set(Some(detail));
                self.toasts.success("Company updated");
                true
            }
            Err(err) => {
                self.toasts.error(err.user_message());
                false
            }
        }
    }
}
