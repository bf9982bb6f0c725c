//! Create/edit form contract.
//!
//! # Responsibility
//! - Validate candidate roster payloads before they reach the store.
//! - Surface field-level messages for the rendering collaborator.
//!
//! # Invariants
//! - An invalid payload never produces a `ValidatedResident`.
//! - A valid payload passes through unchanged.

use crate::model::resident::{AccessType, Resident};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Raw form input as a rendering collaborator submits it.
///
/// `access_type` arrives as text and is only accepted once it parses
/// against the closed [`AccessType`] enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidentForm {
    pub name: String,
    pub house_number: String,
    pub access_type: String,
}

impl Default for ResidentForm {
    /// Blank create form; access type pre-selects `Resident` like the
    /// rendered dialog does.
    fn default() -> Self {
        Self {
            name: String::new(),
            house_number: String::new(),
            access_type: AccessType::Resident.as_str().to_string(),
        }
    }
}

impl ResidentForm {
    /// Edit form pre-filled from an existing record.
    pub fn prefilled(resident: &Resident) -> Self {
        Self {
            name: resident.name.clone(),
            house_number: resident.house_number.clone(),
            access_type: resident.access_type.as_str().to_string(),
        }
    }

    /// Checks the required-field and enumeration rules.
    ///
    /// # Errors
    /// Returns [`FormErrors`] carrying one message per failed field. The
    /// store must not be called when this fails.
    pub fn validate(&self) -> Result<ValidatedResident, FormErrors> {
        let mut errors = FormErrors::default();

        if self.name.trim().is_empty() {
            errors.name = Some("Name is required".to_string());
        }
        if self.house_number.trim().is_empty() {
            errors.house_number = Some("House number is required".to_string());
        }
        let access_type = AccessType::parse(self.access_type.trim());
        if access_type.is_none() {
            errors.access_type =
                Some("Access type must be one of Resident, Visitor or Staff".to_string());
        }

        let Some(access_type) = access_type else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidatedResident {
            name: self.name.clone(),
            house_number: self.house_number.clone(),
            access_type,
        })
    }
}

/// Payload that passed the form contract, ready for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedResident {
    pub name: String,
    pub house_number: String,
    pub access_type: AccessType,
}

/// Field-level validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<String>,
    pub house_number: Option<String>,
    pub access_type: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.house_number.is_none() && self.access_type.is_none()
    }
}

impl Display for FormErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = [&self.name, &self.house_number, &self.access_type]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect();
        write!(f, "invalid resident form: {}", messages.join("; "))
    }
}

impl Error for FormErrors {}
