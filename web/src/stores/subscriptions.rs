use api::{LifetimeQuery, SubscriptionQuery};
use dioxus::prelude::*;
use types::Pagination;
use types::company::LifetimeCompany;
use types::subscription::{Subscription, SubscriptionUpdate};
use uuid::Uuid;

use super::Sequence;
use crate::toast::Toasts;

/// Subscriptions plus the lifetime-access roster, which is a view over the
/// same backend aggregate and changes with the same actions.
#[derive(Clone, Copy)]
pub struct SubscriptionStore {
    pub items: Signal<Vec<Subscription>>,
    pub pagination: Signal<Option<Pagination>>,
    pub loading: Signal<bool>,
    pub lifetime_items: Signal<Vec<LifetimeCompany>>,
    pub lifetime_pagination: Signal<Option<Pagination>>,
    pub lifetime_loading: Signal<bool>,
    seq: Signal<Sequence>,
    lifetime_seq: Signal<Sequence>,
    toasts: Toasts,
}

pub fn provide(toasts: Toasts) -> SubscriptionStore {
    use_context_provider(|| SubscriptionStore {
        items: Signal::new(Vec::new()),
        pagination: Signal::new(None),
        loading: Signal::new(false),
        lifetime_items: Signal::new(Vec::new()),
        lifetime_pagination: Signal::new(None),
        lifetime_loading: Signal::new(false),
        seq: Signal::new(Sequence::default()),
        lifetime_seq: Signal::new(Sequence::default()),
        toasts,
    })
}

pub fn use_subscriptions() -> SubscriptionStore {
    use_context()
}

impl SubscriptionStore {
    pub async fn fetch(mut self, query: SubscriptionQuery) {
        let ticket = self.seq.write().begin();
        self.loading.set(true);

        let result = api::admin::list_subscriptions(&query).await;
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

    pub async fn fetch_lifetime(mut self, query: LifetimeQuery) {
        let ticket = self.lifetime_seq.write().begin();
        self.lifetime_loading.set(true);

        let result = api::admin::list_lifetime_companies(&query).await;
        if !self.lifetime_seq.peek().is_current(ticket) {
            return;
        }

        match result {
            Ok(page) => {
                self.lifetime_items.set(page.items);
                self.lifetime_pagination.set(Some(page.pagination));
            }
            Err(err) => {
                self.lifetime_items.set(Vec::new());
                self.lifetime_pagination.set(None);
                self.toasts.error(err.user_message());
            }
        }
        self.lifetime_loading.set(false);
    }

    pub async fn update(mut self, id: Uuid, update: SubscriptionUpdate) -> bool {
        match api::admin::update_subscription(id, &update).await {
            Ok(updated) => {
                self.patch_cached(updated);
                self.toasts.success("Subscription updated");
                true
            }
            Err(err) => {
                self.toasts.error(err.user_message());
                false
            }
        }
    }

    pub async fn extend_trial(mut self, id: Uuid, days: u32) -> bool {
        match api::admin::extend_trial(id, days).await {
            Ok(updated) => {
                self.patch_cached(updated);
                self.toasts.success("Trial extended");
                true
            }
            Err(err) => {
                self.toasts.error(err.user_message());
                false
            }
        }
    }

    pub async fn activate(mut self, id: Uuid) -> bool {
        match api::admin::activate_subscription(id).await {
            Ok(updated) => {
                self.patch_cached(updated);
                self.toasts.success("Subscription activated");
                true
            }
            Err(err) => {
                self.toasts.error(err.user_message());
                false
            }
        }
    }

    pub async fn revoke(mut self, id: Uuid) -> bool {
        match api::admin::revoke_subscription(id).await {
            Ok(updated) => {
                self.patch_cached(updated);
                self.toasts.success("Access revoked");
                true
            }
            Err(err) => {
                self.toasts.error(err.user_message());
                false
            }
        }
    }

    /// Grants the lifetime override. The response carries no record, so the
    /// caller refetches whichever collection it is showing.
    pub async fn grant_lifetime(mut self, company_id: i64) -> bool {
        match api::admin::grant_lifetime_access(company_id).await {
            Ok(message) => {
                self.toasts
                    .success(message.unwrap_or_else(|| "Lifetime access granted".into()));
                true
            }
            Err(err) => {
                self.toasts.error(err.user_message());
                false
            }
        }
    }

    pub async fn revoke_lifetime(mut self, company_id: i64) -> bool {
        match api::admin::revoke_lifetime_access(company_id).await {
            Ok(message) => {
                self.toasts
                    .success(message.unwrap_or_else(|| "Lifetime access revoked".into()));
                true
            }
            Err(err) => {
                self.toasts.error(err.user_message());
                false
            }
        }
    }

    /// Replaces the cached row matching the returned record. Mutation
    /// responses carry no company join, so the one from the list fetch is
    /// kept.
    fn patch_cached(&mut self, updated: Subscription) {
        let mut items = self.items.write();
        if let Some(slot) = items.iter_mut().find(|sub| sub.id == updated.id) {
            let company = slot.company.take();
            *slot = updated;
            if slot.company.is_none() {
                slot.company = company;
            }
        }
    }
}
