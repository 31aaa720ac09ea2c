//! Payment voucher service

use crate::api::{ApiClient, PostReceipt};
use crate::error::{TallyError, TallyResult};
use crate::models::{ChartOfAccounts, PaymentVoucher};

/// Service for validating and posting payment vouchers
pub struct VoucherService<'a> {
    api: &'a ApiClient,
    chart: &'a ChartOfAccounts,
}

impl<'a> VoucherService<'a> {
    /// Create a new voucher service
    pub fn new(api: &'a ApiClient, chart: &'a ChartOfAccounts) -> Self {
        Self { api, chart }
    }

    /// Validate a voucher without posting it
    pub fn validate(&self, voucher: &PaymentVoucher) -> TallyResult<()> {
        voucher
            .validate(self.chart)
            .map_err(|e| TallyError::Validation(e.to_string()))
    }

    /// Validate a voucher and post it to the backend
    pub fn submit(&self, voucher: &PaymentVoucher) -> TallyResult<PostReceipt> {
        self.validate(voucher)?;
        self.api.post_payment_voucher(voucher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use std::time::Duration;

    #[test]
    fn test_validate_maps_to_validation_error() {
        let api = ApiClient::new("http://localhost:8080/api", Duration::from_secs(1)).unwrap();
        let chart = ChartOfAccounts::standard();
        let service = VoucherService::new(&api, &chart);

        let voucher = PaymentVoucher::new(
            NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            "",
            "5300",
            "1010",
            Money::from_cents(5000),
        );

        let err = service.validate(&voucher).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Payee"));
    }
}
