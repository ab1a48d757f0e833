use api::PaymentQuery;
use dioxus::prelude::*;
use types::Pagination;
use types::payment::Payment;
use uuid::Uuid;

use super::Sequence;
use crate::toast::Toasts;

#[derive(Clone, Copy)]
pub struct PaymentStore {
    pub items: Signal<Vec<Payment>>,
    pub pagination: Signal<Option<Pagination>>,
    pub loading: Signal<bool>,
    pub detail: Signal<Option<Payment>>,
    pub detail_loading: Signal<bool>,
    seq: Signal<Sequence>,
    toasts: Toasts,
}

pub fn provide(toasts: Toasts) -> PaymentStore {
    use_context_provider(|| PaymentStore {
        items: Signal::new(Vec::new()),
        pagination: Signal::new(None),
        loading: Signal::new(false),
        detail: Signal::new(None),
        detail_loading: Signal::new(false),
        seq: Signal::new(Sequence::default()),
        toasts,
    })
}

pub fn use_payments() -> PaymentStore {
    use_context()
}

impl PaymentStore {
    pub async fn fetch(mut self, query: PaymentQuery) {
        let ticket = self.seq.write().begin();
        self.loading.set(true);

        let result = api::admin::list_payments(&query).await;
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

    pub async fn fetch_detail(mut self, id: Uuid) {
        self.detail_loading.set(true);
        match api::admin::payment_detail(id).await {
            Ok(payment) => self.detail.set(Some(payment)),
            Err(err) => {
                self.detail.set(None);
                self.toasts.error(err.user_message());
            }
        }
        self.detail_loading.set(false);
    }

    pub fn reset_detail(mut self) {
        self.detail.set(None);
    }
}
