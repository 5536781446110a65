use rust_decimal::Decimal;
use validator::ValidationError;

// Balance propagation shared by every write path that moves money or stock
pub mod ledger;

// Parties and catalog
pub mod cari;
pub mod kategori;
pub mod urun;

// Invoicing and stock
pub mod fatura;
pub mod hizmet;
pub mod stok;

// Money
pub mod cek_senet;
pub mod finans;
pub mod kasa_banka;
pub mod para_birimi;
pub mod personel;

// Sales pipeline
pub mod siparis;
pub mod teklif;

// Waste
pub mod atik;

// Reporting
pub mod dashboard;

// Service factory for dependency injection
pub mod factory;

pub(crate) fn validate_positive_decimal(value: &Decimal) -> Result<(), ValidationError> {
    if *value > Decimal::ZERO {
        Ok(())
    } else {
        let mut err = ValidationError::new("range");
        err.message = Some("Amount must be greater than 0".into());
        Err(err)
    }
}

pub(crate) fn validate_non_negative_decimal(value: &Decimal) -> Result<(), ValidationError> {
    if *value >= Decimal::ZERO {
        Ok(())
    } else {
        let mut err = ValidationError::new("range");
        err.message = Some("Amount must not be negative".into());
        Err(err)
    }
}

pub(crate) fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Value must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Trims an optional text field and maps empty input to `None`.
pub(crate) fn bos_ise_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn positive_amounts() {
        assert!(validate_positive_decimal(&dec!(0.01)).is_ok());
        assert!(validate_positive_decimal(&Decimal::ZERO).is_err());
        assert!(validate_non_negative_decimal(&Decimal::ZERO).is_ok());
        assert!(validate_non_negative_decimal(&dec!(-1)).is_err());
    }

    #[test]
    fn blank_text_is_rejected() {
        assert!(validate_not_blank("  ").is_err());
        assert!(validate_not_blank("Acme").is_ok());
    }

    #[test]
    fn empty_optional_text_becomes_none() {
        assert_eq!(bos_ise_none(Some("  ".into())), None);
        assert_eq!(bos_ise_none(Some(" 123 ".into())), Some("123".to_string()));
        assert_eq!(bos_ise_none(None), None);
    }
}
