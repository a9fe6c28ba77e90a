/// ISO 4217 currencies accepted by the offsite connectors.
#[allow(clippy::upper_case_acronyms)]
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::VariantNames,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Currency {
    AUD,
    BHD,
    BRL,
    BYN,
    CAD,
    CHF,
    CNY,
    CZK,
    DKK,
    EUR,
    GBP,
    HKD,
    IDR,
    INR,
    JPY,
    KRW,
    KWD,
    MXN,
    MYR,
    NOK,
    NZD,
    PHP,
    PLN,
    RUB,
    SEK,
    SGD,
    THB,
    UAH,
    #[default]
    USD,
    ZAR,
}

impl Currency {
    /// ISO 4217 numeric code, zero padded to three digits.
    pub fn iso_4217(self) -> &'static str {
        match self {
            Self::AUD => "036",
            Self::BHD => "048",
            Self::BRL => "986",
            Self::BYN => "933",
            Self::CAD => "124",
            Self::CHF => "756",
            Self::CNY => "156",
            Self::CZK => "203",
            Self::DKK => "208",
            Self::EUR => "978",
            Self::GBP => "826",
            Self::HKD => "344",
            Self::IDR => "360",
            Self::INR => "356",
            Self::JPY => "392",
            Self::KRW => "410",
            Self::KWD => "414",
            Self::MXN => "484",
            Self::MYR => "458",
            Self::NOK => "578",
            Self::NZD => "554",
            Self::PHP => "608",
            Self::PLN => "985",
            Self::RUB => "643",
            Self::SEK => "752",
            Self::SGD => "702",
            Self::THB => "764",
            Self::UAH => "980",
            Self::USD => "840",
            Self::ZAR => "710",
        }
    }

    pub fn from_iso_4217(code: &str) -> Option<Self> {
        use strum::IntoEnumIterator;

        Self::iter().find(|currency| currency.iso_4217() == code)
    }

    pub fn is_zero_decimal_currency(self) -> bool {
        matches!(self, Self::JPY | Self::KRW)
    }

    pub fn is_three_decimal_currency(self) -> bool {
        matches!(self, Self::BHD | Self::KWD)
    }

    /// Number of digits after the decimal separator in the major unit.
    pub fn number_of_digits_after_decimal_point(self) -> u8 {
        if self.is_zero_decimal_currency() {
            0
        } else if self.is_three_decimal_currency() {
            3
        } else {
            2
        }
    }
}

/// Normalised outcome of a payment as reported by a provider.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

impl PaymentStatus {
    pub fn is_terminal_status(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// Every provider this toolkit ships an adapter for.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Connector {
    Interkassa,
    #[serde(rename = "ipay88")]
    #[strum(serialize = "ipay88")]
    Ipay88,
    Liqpay,
    Mollie,
    Paydollar,
    Paypal,
    PayuIn,
    Quickpay,
    Realex,
    Robokassa,
    Skrill,
    TwoCheckout,
    Universal,
    Webpay,
}
