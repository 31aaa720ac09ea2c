//! Customers and suppliers
//!
//! Master data owned by the backend; this side only lists it.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// A customer record as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Backend identifier
    pub id: String,

    /// Customer name
    pub name: String,

    /// Contact email
    #[serde(default)]
    pub email: String,

    /// Contact phone
    #[serde(default)]
    pub phone: String,

    /// Outstanding receivable balance
    #[serde(default)]
    pub balance: Money,
}

/// A supplier record as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    /// Backend identifier
    pub id: String,

    /// Supplier name
    pub name: String,

    /// Contact email
    #[serde(default)]
    pub email: String,

    /// Contact phone
    #[serde(default)]
    pub phone: String,

    /// Outstanding payable balance
    #[serde(default)]
    pub balance: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_deserializes_with_missing_optionals() {
        let json = r#"{"id": "c-12", "name": "Globex Corp"}"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.name, "Globex Corp");
        assert_eq!(customer.email, "");
        assert_eq!(customer.balance, Money::zero());
    }

    #[test]
    fn test_supplier_full_record() {
        let json = r#"{
            "id": "s-3",
            "name": "Acme Supplies",
            "email": "orders@acme.test",
            "phone": "555-0100",
            "balance": 240000
        }"#;
        let supplier: Supplier = serde_json::from_str(json).unwrap();
        assert_eq!(supplier.balance.cents(), 240000);
    }

    #[test]
    fn test_unknown_backend_fields_ignored() {
        let json = r#"{"id": "c-1", "name": "X", "created_by": "admin"}"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.id, "c-1");
    }
}
