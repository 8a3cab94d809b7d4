use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{validate_email_domain, Schema};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HiringNeed {
    SingleHire,
    MultipleHires,
    Contract,
    ContractToHire,
    #[default]
    Unsure,
}

impl std::fmt::Display for HiringNeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HiringNeed::SingleHire => write!(f, "single_hire"),
            HiringNeed::MultipleHires => write!(f, "multiple_hires"),
            HiringNeed::Contract => write!(f, "contract"),
            HiringNeed::ContractToHire => write!(f, "contract_to_hire"),
            HiringNeed::Unsure => write!(f, "unsure"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Timeframe {
    #[serde(rename = "immediate")]
    Immediate,
    #[serde(rename = "1-3_months")]
    OneToThreeMonths,
    #[serde(rename = "3+_months")]
    ThreePlusMonths,
    #[default]
    #[serde(rename = "unsure")]
    Unsure,
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Timeframe::Immediate => write!(f, "immediate"),
            Timeframe::OneToThreeMonths => write!(f, "1-3_months"),
            Timeframe::ThreePlusMonths => write!(f, "3+_months"),
            Timeframe::Unsure => write!(f, "unsure"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PreferredContact {
    #[default]
    Email,
    Phone,
}

impl std::fmt::Display for PreferredContact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreferredContact::Email => write!(f, "email"),
            PreferredContact::Phone => write!(f, "phone"),
        }
    }
}

/// Contact form submission from an organization looking to hire.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactInquiry {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(
        email(message = "Invalid email address"),
        custom(function = "validate_email_domain")
    )]
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub job_title: Option<String>,
    #[serde(default)]
    pub hiring_need: HiringNeed,
    #[serde(default)]
    pub timeframe: Timeframe,
    pub budget_range: Option<String>,
    #[serde(default)]
    pub preferred_contact: PreferredContact,
    pub message: Option<String>,
    #[serde(default)]
    pub consent_marketing: bool,
    pub source: Option<String>,
}

impl Schema for ContactInquiry {
    const COLLECTION: &'static str = "contactinquiry";
}
