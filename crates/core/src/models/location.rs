use serde::{Deserialize, Serialize};

use crate::errors::{RentalError, RentalResult};

/// KYC and contact details collected from each user before a rental is
/// arranged. Upserted as a whole; there is no partial update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDetails {
    pub address: String,
    pub taluka: String,
    #[serde(rename = "pinCode")]
    pub pin_code: String,
    pub state: String,
    pub whatsapp_number: String,
    pub pan_number: String,
    pub aadhar_number: String,
    pub contact_number: String,
}

impl LocationDetails {
    pub fn validate(&self) -> RentalResult<()> {
        if self.address.trim().is_empty() {
            return Err(RentalError::Validation("Address is required".to_string()));
        }
        if !self.pin_code.chars().all(|c| c.is_ascii_digit()) || self.pin_code.len() != 6 {
            return Err(RentalError::Validation(
                "PIN code must be a 6-digit number".to_string(),
            ));
        }
        if self.contact_number.trim().is_empty() {
            return Err(RentalError::Validation(
                "Contact number is required".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDetailsEnvelope {
    pub user: LocationDetails,
}
