use serde::{Deserialize, Serialize};

#[derive(Clone, Deserialize, Serialize, Debug, Default, PartialEq)]
pub struct ConnectorParams {
    /// base url
    #[serde(default)]
    pub base_url: String,
    /// second endpoint of providers that split payment pages and server calls
    #[serde(default)]
    pub secondary_base_url: Option<String>,
}

impl ConnectorParams {
    pub fn new(base_url: impl Into<String>, secondary_base_url: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            secondary_base_url,
        }
    }
}

/// Outbound HTTP settings of the server-to-server calls.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Proxy {
    pub http_url: Option<String>,
    pub https_url: Option<String>,
    pub idle_pool_connection_timeout: Option<u64>,
    /// Seconds before an outbound request is abandoned.
    pub request_timeout: Option<u64>,
    pub bypass_proxy_urls: Vec<String>,
}

impl Proxy {
    pub fn is_proxy_configured(&self, should_bypass_proxy: bool) -> bool {
        !should_bypass_proxy && (self.http_url.is_some() || self.https_url.is_some())
    }
}

#[derive(Clone, Deserialize, Serialize, Debug, PartialEq)]
#[serde(default)]
pub struct Connectors {
    pub interkassa: ConnectorParams,
    pub ipay88: ConnectorParams,
    pub liqpay: ConnectorParams,
    pub mollie: ConnectorParams,
    pub paydollar: ConnectorParams,
    pub paypal: ConnectorParams,
    pub payu_in: ConnectorParams,
    pub quickpay: ConnectorParams,
    pub realex: ConnectorParams,
    pub robokassa: ConnectorParams,
    pub skrill: ConnectorParams,
    pub two_checkout: ConnectorParams,
    pub universal: ConnectorParams,
    pub webpay: ConnectorParams,
}

impl Default for Connectors {
    /// Provider sandbox endpoints.
    fn default() -> Self {
        Self {
            interkassa: ConnectorParams::new("https://sci.interkassa.com/", None),
            ipay88: ConnectorParams::new(
                "https://payment.ipay88.com.my/epayment/entry.asp",
                Some("https://payment.ipay88.com.my/epayment/enquiry.asp".to_string()),
            ),
            liqpay: ConnectorParams::new("https://liqpay.com/?do=clickNbuy", None),
            mollie: ConnectorParams::new("https://api.mollie.com/", None),
            paydollar: ConnectorParams::new(
                "https://test.paydollar.com/b2cDemo/eng/payment/payForm.jsp",
                None,
            ),
            paypal: ConnectorParams::new(
                "https://www.sandbox.paypal.com/cgi-bin/webscr",
                Some("https://ipnpb.sandbox.paypal.com/cgi-bin/webscr".to_string()),
            ),
            payu_in: ConnectorParams::new("https://test.payu.in/_payment", None),
            quickpay: ConnectorParams::new("https://payment.quickpay.net", None),
            realex: ConnectorParams::new("https://hpp.sandbox.realexpayments.com/pay", None),
            robokassa: ConnectorParams::new("https://auth.robokassa.ru/Merchant/Index.aspx", None),
            skrill: ConnectorParams::new("https://pay.skrill.com", None),
            two_checkout: ConnectorParams::new("https://www.2checkout.com/checkout/purchase", None),
            universal: ConnectorParams::default(),
            webpay: ConnectorParams::new("https://securesandbox.webpay.by/", None),
        }
    }
}
