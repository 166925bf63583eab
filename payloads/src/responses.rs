use std::collections::HashMap;

use crate::{SaleId, ShoeId, UserId};
use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The standard success envelope returned by every endpoint.
///
/// `success` and `message` are optional; `data` is the payload the client
/// stores verbatim. Domain payloads are server-owned snapshots and are not
/// validated or transformed beyond display arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

/// Pagination block attached to every list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

impl Pagination {
    /// Checks the server-side invariant `total_pages == ceil(total / limit)`.
    pub fn is_consistent(&self) -> bool {
        if self.limit == 0 {
            return false;
        }
        u64::from(self.total_pages)
            == self.total.div_ceil(u64::from(self.limit))
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: crate::api_client::DEFAULT_PAGE_LIMIT,
            total: 0,
            total_pages: 0,
        }
    }
}

/// List envelopes nest the items under an entity-plural key next to the
/// pagination block, e.g. `{"shoes": [...], "pagination": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoePage {
    pub shoes: Vec<Shoe>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPage {
    pub users: Vec<UserProfile>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalePage {
    pub sales: Vec<Sale>,
    pub pagination: Pagination,
}

/// Per-size stock entry for a shoe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeStock {
    pub size: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shoe {
    pub id: ShoeId,
    pub name: String,
    pub brand: String,
    pub price: Decimal,
    /// Server-assigned stock status, e.g. "available" or "low".
    pub status: String,
    pub sizes: Vec<SizeStock>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Shoe {
    /// Total units across all sizes. Display arithmetic only.
    pub fn total_stock(&self) -> u32 {
        self.sizes.iter().map(|s| s.quantity).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,
    pub shoe_id: ShoeId,
    pub shoe_name: String,
    pub size: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub total: Decimal,
    pub sold_at: Timestamp,
    pub seller_id: Option<UserId>,
    pub seller_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub role: String,
    /// Whether the seller is shown on public listings.
    pub display_active: bool,
    pub created_at: Timestamp,
}

/// Top-line numbers for the signed-in seller's dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_sales: u64,
    pub total_revenue: Decimal,
    pub total_shoes: u64,
    pub low_stock_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySales {
    pub day: i8,
    pub orders: u64,
    pub revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySales {
    pub year: i16,
    pub month: i8,
    pub orders: u64,
    pub revenue: Decimal,
    pub daily: Vec<DailySales>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthBucket {
    pub month: i8,
    pub orders: u64,
    pub revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualSales {
    pub year: i16,
    pub orders: u64,
    pub revenue: Decimal,
    pub monthly: Vec<MonthBucket>,
}

/// Returned by `/login` and `/refresh`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessMessage {
    pub message: String,
}

/// Field-level validation errors a 400 response may carry alongside its
/// top-level message.
pub type FieldErrorMap = HashMap<String, String>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_data_decodes_verbatim() {
        let body = json!({
            "success": true,
            "data": {
                "shoes": [],
                "pagination": {
                    "page": 1, "limit": 10, "total": 0, "totalPages": 0
                }
            }
        });
        let envelope: Envelope<ShoePage> =
            serde_json::from_value(body).unwrap();
        assert_eq!(envelope.success, Some(true));
        assert!(envelope.data.shoes.is_empty());
        assert_eq!(envelope.data.pagination.page, 1);
    }

    #[test]
    fn envelope_tolerates_missing_flags() {
        let envelope: Envelope<Vec<u32>> =
            serde_json::from_value(json!({"data": [1, 2, 3]})).unwrap();
        assert_eq!(envelope.success, None);
        assert_eq!(envelope.message, None);
        assert_eq!(envelope.data, vec![1, 2, 3]);
    }

    #[test]
    fn pagination_invariant_holds_for_partial_last_page() {
        let p = Pagination { page: 1, limit: 10, total: 41, total_pages: 5 };
        assert!(p.is_consistent());
    }

    #[test]
    fn pagination_invariant_rejects_wrong_page_count() {
        let p = Pagination { page: 1, limit: 10, total: 41, total_pages: 4 };
        assert!(!p.is_consistent());
    }

    #[test]
    fn pagination_invariant_exact_multiple() {
        let p = Pagination { page: 2, limit: 20, total: 40, total_pages: 2 };
        assert!(p.is_consistent());
    }

    #[test]
    fn total_stock_sums_sizes() {
        let shoe = Shoe {
            id: ShoeId(uuid::Uuid::new_v4()),
            name: "Air Max 90".into(),
            brand: "Nike".into(),
            price: Decimal::new(12999, 2),
            status: "available".into(),
            sizes: vec![
                SizeStock { size: "42".into(), quantity: 3 },
                SizeStock { size: "43".into(), quantity: 5 },
            ],
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        };
        assert_eq!(shoe.total_stock(), 8);
    }
}
