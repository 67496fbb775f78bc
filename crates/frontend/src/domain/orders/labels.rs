//! Localized labels for wire-format status codes
//!
//! Simple immutable mapping tables. Unrecognized codes fall back to the raw
//! code so new backend statuses degrade gracefully.

pub fn order_status_label(code: &str) -> &str {
    match code {
        "cho_lay_hang" => "Chờ lấy",
        _ => code,
    }
}

pub fn payment_status_label(code: &str) -> &str {
    match code {
        "chua_thanh_toan" => "Chưa thanh toán",
        "da_thanh_toan" => "Đã thanh toán",
        _ => code,
    }
}
