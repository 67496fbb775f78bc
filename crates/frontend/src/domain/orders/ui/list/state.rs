use contracts::domain::orders::Order;
use leptos::prelude::*;
use std::collections::HashSet;

/// UI state for the ready-orders screen.
///
/// `selected_ids` is always a subset of the ids in `orders`: the list is only
/// replaced through `replace_orders`, which drops the selection.
#[derive(Clone, Debug)]
pub struct ReadyOrdersState {
    pub orders: Vec<Order>,
    pub loading: bool,
    pub updating: bool,
    pub selected_ids: HashSet<String>,
}

impl Default for ReadyOrdersState {
    fn default() -> Self {
        Self {
            orders: Vec::new(),
            // The first load starts immediately on mount
            loading: true,
            updating: false,
            selected_ids: HashSet::new(),
        }
    }
}

impl ReadyOrdersState {
    /// Add the id to the selection if absent, remove it if present.
    pub fn toggle_select(&mut self, id: &str) {
        if !self.selected_ids.remove(id) {
            self.selected_ids.insert(id.to_string());
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_ids.contains(id)
    }

    /// Replace the displayed list wholesale and drop the selection.
    pub fn replace_orders(&mut self, orders: Vec<Order>) {
        self.orders = orders;
        self.selected_ids.clear();
    }

    /// The bulk action is available only for a non-empty selection with no
    /// update already in flight.
    pub fn can_dispatch(&self) -> bool {
        !self.selected_ids.is_empty() && !self.updating
    }

    pub fn dispatch_button_label(&self) -> String {
        if self.updating {
            "Đang xử lý…".to_string()
        } else {
            format!("Đã lấy hàng ({})", self.selected_ids.len())
        }
    }
}

/// Create state signal
pub fn create_state() -> RwSignal<ReadyOrdersState> {
    RwSignal::new(ReadyOrdersState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::orders::{ShippingAddress, ORDER_STATUS_READY};

    fn order(id: &str) -> Order {
        Order {
            order_id: id.to_string(),
            user_id: "u-1".to_string(),
            shipping_address: ShippingAddress {
                address: "12 Hang Bai".to_string(),
                phone: "0901234567".to_string(),
            },
            order_status: ORDER_STATUS_READY.to_string(),
            payment_status: "da_thanh_toan".to_string(),
            products: Vec::new(),
            raw_total: 500000.0,
            purchase_total: 450000.0,
        }
    }

    fn loaded_state(ids: &[&str]) -> ReadyOrdersState {
        let mut state = ReadyOrdersState::default();
        state.replace_orders(ids.iter().map(|id| order(id)).collect());
        state.loading = false;
        state
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut state = loaded_state(&["A1", "B2"]);
        state.toggle_select("A1");
        let snapshot = state.selected_ids.clone();

        state.toggle_select("B2");
        state.toggle_select("B2");
        assert_eq!(state.selected_ids, snapshot);
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut state = loaded_state(&["A1"]);
        assert!(!state.is_selected("A1"));

        state.toggle_select("A1");
        assert!(state.is_selected("A1"));

        state.toggle_select("A1");
        assert!(!state.is_selected("A1"));
    }

    #[test]
    fn test_replace_orders_clears_selection() {
        let mut state = loaded_state(&["A1", "B2"]);
        state.toggle_select("A1");
        state.toggle_select("B2");

        state.replace_orders(vec![order("C3")]);
        assert!(state.selected_ids.is_empty());
        assert_eq!(state.orders.len(), 1);
    }

    #[test]
    fn test_selection_stays_subset_of_displayed_ids() {
        let mut state = loaded_state(&["A1", "B2"]);
        state.toggle_select("A1");
        state.replace_orders(vec![order("A1")]);

        let displayed: HashSet<String> =
            state.orders.iter().map(|o| o.order_id.clone()).collect();
        assert!(state.selected_ids.is_subset(&displayed));
    }

    #[test]
    fn test_can_dispatch_requires_selection_and_idle() {
        let mut state = loaded_state(&["A1"]);
        assert!(!state.can_dispatch());

        state.toggle_select("A1");
        assert!(state.can_dispatch());

        state.updating = true;
        assert!(!state.can_dispatch());
    }

    #[test]
    fn test_dispatch_button_label() {
        let mut state = loaded_state(&["A1", "B2"]);
        assert_eq!(state.dispatch_button_label(), "Đã lấy hàng (0)");

        state.toggle_select("A1");
        state.toggle_select("B2");
        assert_eq!(state.dispatch_button_label(), "Đã lấy hàng (2)");

        state.updating = true;
        assert_eq!(state.dispatch_button_label(), "Đang xử lý…");
    }
}
