//! Checkout command.
//!
//! The form starts from the saved contact; flags given on the command line
//! replace those fields.

use secrecy::SecretString;

use foodhub_core::PaymentMethod;
use foodhub_storefront::checkout::{CardDetails, CheckoutForm, PaymentDetails};
use foodhub_storefront::error::Result;
use foodhub_storefront::state::Storefront;

use crate::CheckoutArgs;

/// Validate the details and place the order for the current cart.
#[allow(clippy::print_stdout)]
pub fn place_order(app: &Storefront, args: CheckoutArgs) -> Result<()> {
    let checkout = app.checkout();
    let mut form = checkout.begin()?;
    apply_args(&mut form, args);

    let receipt = checkout.commit(&form)?;
    println!("{}", receipt.message);
    println!("Order {} ({} items)", receipt.order_id, receipt.item_count);
    Ok(())
}

fn apply_args(form: &mut CheckoutForm, args: CheckoutArgs) {
    if let Some(name) = args.name {
        form.name = name;
    }
    if let Some(phone) = args.phone {
        form.phone = phone;
    }
    if let Some(address) = args.address {
        form.address = address;
    }

    form.payment = match args.method {
        PaymentMethod::Upi => PaymentDetails::Upi {
            upi_id: args.upi_id,
        },
        PaymentMethod::Card => PaymentDetails::Card(CardDetails {
            number: SecretString::from(args.card_number),
            holder: args.card_name,
            expiry: args.expiry,
            cvv: SecretString::from(args.cvv),
        }),
        PaymentMethod::CashOnDelivery => PaymentDetails::CashOnDelivery,
    };
}
