//! Check an EU VAT number against the VIES service.
//!
//! Usage: check_vat [COUNTRY_CODE] [VAT_NUMBER]
//!
//! Set RUST_LOG=soapwire_client=trace to see the wire exchange.

use soapwire_client::{Client, Definitions};
use soapwire_core::{Params, Value};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut args = std::env::args().skip(1);
    let country = args.next().unwrap_or_else(|| "IE".to_string());
    let number = args.next().unwrap_or_else(|| "6388047V".to_string());

    let definitions = Definitions::new("urn:ec.europa.eu:taxud:vies:services:checkVat:types");
    let client = Client::new(
        "https://ec.europa.eu/taxation_customs/vies/services/checkVatService",
        definitions,
    )?;

    let mut params = Params::new();
    params.insert("countryCode".to_string(), Value::from(country.as_str()));
    params.insert("vatNumber".to_string(), Value::from(number.as_str()));

    let response = client.call("checkVat", &params)?;
    let body: String = response.decode()?;
    println!("{body}");

    Ok(())
}
