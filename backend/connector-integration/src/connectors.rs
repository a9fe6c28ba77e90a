pub mod interkassa;
pub use self::interkassa::Interkassa;

pub mod ipay88;
pub use self::ipay88::Ipay88;

pub mod liqpay;
pub use self::liqpay::Liqpay;

pub mod mollie;
pub use self::mollie::Mollie;

pub mod paydollar;
pub use self::paydollar::Paydollar;

pub mod paypal;
pub use self::paypal::Paypal;

pub mod payu_in;
pub use self::payu_in::PayuIn;

pub mod quickpay;
pub use self::quickpay::Quickpay;

pub mod realex;
pub use self::realex::Realex;

pub mod robokassa;
pub use self::robokassa::Robokassa;

pub mod skrill;
pub use self::skrill::Skrill;

pub mod two_checkout;
pub use self::two_checkout::TwoCheckout;

pub mod universal;
pub use self::universal::Universal;

pub mod webpay;
pub use self::webpay::Webpay;
