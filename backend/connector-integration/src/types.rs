use common_enums::Connector;
use domain_types::types::Connectors;
use interfaces::connector_types::{BoxedConnector, ConnectorCommon};

use crate::connectors;

pub struct ConnectorData {
    pub connector: BoxedConnector,
    pub connector_name: Connector,
}

impl ConnectorData {
    pub fn get_connector_by_name(connectors: &Connectors, connector_name: Connector) -> Self {
        let connector = Self::convert_connector(connectors, connector_name);
        Self {
            connector,
            connector_name,
        }
    }

    fn convert_connector(connectors: &Connectors, connector_name: Connector) -> BoxedConnector {
        match connector_name {
            Connector::Interkassa => {
                Box::new(connectors::Interkassa::new(connectors.interkassa.clone()))
            }
            Connector::Ipay88 => Box::new(connectors::Ipay88::new(connectors.ipay88.clone())),
            Connector::Liqpay => Box::new(connectors::Liqpay::new(connectors.liqpay.clone())),
            Connector::Mollie => Box::new(connectors::Mollie::new(connectors.mollie.clone())),
            Connector::Paydollar => {
                Box::new(connectors::Paydollar::new(connectors.paydollar.clone()))
            }
            Connector::Paypal => Box::new(connectors::Paypal::new(connectors.paypal.clone())),
            Connector::PayuIn => Box::new(connectors::PayuIn::new(connectors.payu_in.clone())),
            Connector::Quickpay => Box::new(connectors::Quickpay::new(connectors.quickpay.clone())),
            Connector::Realex => Box::new(connectors::Realex::new(connectors.realex.clone())),
            Connector::Robokassa => {
                Box::new(connectors::Robokassa::new(connectors.robokassa.clone()))
            }
            Connector::Skrill => Box::new(connectors::Skrill::new(connectors.skrill.clone())),
            Connector::TwoCheckout => {
                Box::new(connectors::TwoCheckout::new(connectors.two_checkout.clone()))
            }
            Connector::Universal => {
                Box::new(connectors::Universal::new(connectors.universal.clone()))
            }
            Connector::Webpay => Box::new(connectors::Webpay::new(connectors.webpay.clone())),
        }
    }
}

impl std::fmt::Debug for ConnectorData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectorData")
            .field("connector_name", &self.connector_name)
            .field("base_url", &self.connector.base_url())
            .finish()
    }
}
