//! The same checkout without the strategy pattern: one method string, one
//! growing conditional. Every new provider means editing this function.

fn process_payment(method: &str, amount: u32) {
    if method == "credit" {
        println!("Paid {amount} using Credit Card.");
    } else if method == "paypal" {
        println!("Paid {amount} using PayPal.");
    } else {
        println!("No valid payment method selected.");
    }
}

fn main() {
    process_payment("credit", 100);
    process_payment("paypal", 250);
    process_payment("bitcoin", 10);
}
