//! Fixed vocabularies shared by every table generator.
//!
//! The order of each `ALL` array is significant: it is the iteration order of
//! the traffic cross product and the index space for uniform draws, so
//! reordering a variant changes every generated table for a given seed.

use std::fmt;

/// Market a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    US,
    UK,
    Germany,
    France,
    Japan,
    Australia,
    Canada,
}

impl Country {
    pub const ALL: [Country; 7] = [
        Country::US,
        Country::UK,
        Country::Germany,
        Country::France,
        Country::Japan,
        Country::Australia,
        Country::Canada,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Country::US => "US",
            Country::UK => "UK",
            Country::Germany => "Germany",
            Country::France => "France",
            Country::Japan => "Japan",
            Country::Australia => "Australia",
            Country::Canada => "Canada",
        }
    }

    /// Regional price adjustment applied on top of the category base price.
    pub fn price_multiplier(&self) -> f64 {
        match self {
            Country::US => 1.0,
            Country::UK => 0.9,
            Country::Germany => 0.85,
            Country::France => 0.88,
            Country::Japan => 1.1,
            Country::Australia => 0.95,
            Country::Canada => 0.92,
        }
    }
}

/// Product line sold in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductCategory {
    PrescriptionGlasses,
    Sunglasses,
    ContactLenses,
    ReadingGlasses,
    SafetyGlasses,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 5] = [
        ProductCategory::PrescriptionGlasses,
        ProductCategory::Sunglasses,
        ProductCategory::ContactLenses,
        ProductCategory::ReadingGlasses,
        ProductCategory::SafetyGlasses,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::PrescriptionGlasses => "Prescription Glasses",
            ProductCategory::Sunglasses => "Sunglasses",
            ProductCategory::ContactLenses => "Contact Lenses",
            ProductCategory::ReadingGlasses => "Reading Glasses",
            ProductCategory::SafetyGlasses => "Safety Glasses",
        }
    }

    /// Half-open `[low, high)` range the base price is drawn from.
    pub fn price_range(&self) -> (f64, f64) {
        match self {
            ProductCategory::PrescriptionGlasses => (80.0, 300.0),
            ProductCategory::Sunglasses => (50.0, 200.0),
            ProductCategory::ContactLenses => (30.0, 80.0),
            ProductCategory::ReadingGlasses => (20.0, 60.0),
            ProductCategory::SafetyGlasses => (40.0, 120.0),
        }
    }
}

/// Marketing channel a session or customer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrafficSource {
    GoogleAds,
    FacebookAds,
    OrganicSearch,
    EmailMarketing,
    Direct,
    Affiliate,
}

impl TrafficSource {
    pub const ALL: [TrafficSource; 6] = [
        TrafficSource::GoogleAds,
        TrafficSource::FacebookAds,
        TrafficSource::OrganicSearch,
        TrafficSource::EmailMarketing,
        TrafficSource::Direct,
        TrafficSource::Affiliate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrafficSource::GoogleAds => "Google Ads",
            TrafficSource::FacebookAds => "Facebook Ads",
            TrafficSource::OrganicSearch => "Organic Search",
            TrafficSource::EmailMarketing => "Email Marketing",
            TrafficSource::Direct => "Direct",
            TrafficSource::Affiliate => "Affiliate",
        }
    }

    /// Scale applied to the Poisson session draw.
    pub fn session_multiplier(&self) -> f64 {
        match self {
            TrafficSource::GoogleAds => 1.5,
            TrafficSource::OrganicSearch => 1.2,
            _ => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceType {
    Desktop,
    Mobile,
    Tablet,
}

impl DeviceType {
    pub const ALL: [DeviceType; 3] = [DeviceType::Desktop, DeviceType::Mobile, DeviceType::Tablet];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Desktop => "Desktop",
            DeviceType::Mobile => "Mobile",
            DeviceType::Tablet => "Tablet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerType {
    New,
    Returning,
}

impl CustomerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerType::New => "New",
            CustomerType::Returning => "Returning",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    CreditCard,
    PayPal,
    BankTransfer,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeGroup {
    From18To25,
    From26To35,
    From36To45,
    From46To55,
    Over55,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 5] = [
        AgeGroup::From18To25,
        AgeGroup::From26To35,
        AgeGroup::From36To45,
        AgeGroup::From46To55,
        AgeGroup::Over55,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::From18To25 => "18-25",
            AgeGroup::From26To35 => "26-35",
            AgeGroup::From36To45 => "36-45",
            AgeGroup::From46To55 => "46-55",
            AgeGroup::Over55 => "55+",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Other => "Other",
        }
    }
}

/// Arm of the product page experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    A,
    B,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::A, Variant::B];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::A => "A",
            Variant::B => "B",
        }
    }

    /// Ground-truth conversion probability driving the binomial draw.
    pub fn conversion_probability(&self) -> f64 {
        match self {
            Variant::A => 0.05,
            Variant::B => 0.065,
        }
    }
}

macro_rules! impl_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_display!(
    Country,
    ProductCategory,
    TrafficSource,
    DeviceType,
    CustomerType,
    PaymentMethod,
    AgeGroup,
    Gender,
    Variant,
);
