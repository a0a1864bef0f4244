use crate::models::{Modal, ProductId};

/// Which modal is open and which product is in focus.
///
/// The focused product is held by id only and resolved against the catalog on
/// read, so it never goes stale after the catalog changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    modal: Modal,
    product_id: Option<ProductId>,
}

impl Selection {
    pub fn modal(&self) -> Modal {
        self.modal
    }

    pub fn product_id(&self) -> Option<ProductId> {
        self.product_id
    }

    /// Replaces whatever modal is open. The focused product is kept.
    pub fn open(&mut self, modal: Modal) {
        self.modal = modal;
    }

    /// Opens `modal` focused on `product_id`.
    pub fn open_for(&mut self, modal: Modal, product_id: ProductId) {
        self.modal = modal;
        self.product_id = Some(product_id);
    }

    pub fn close(&mut self) {
        self.modal = Modal::None;
    }

    pub fn is_open(&self) -> bool {
        self.modal != Modal::None
    }
}
