//! The same logging without a singleton: every module constructs its own
//! logger, so "the" log is really many logs that agree on nothing.

struct Logger {
    name: &'static str,
}

impl Logger {
    fn new(name: &'static str) -> Self {
        println!("Logger '{name}' created");
        Self { name }
    }

    fn log(&self, message: &str) {
        println!("[{}]: {message}", self.name);
    }
}

fn main() {
    let billing_log = Logger::new("billing");
    let shipping_log = Logger::new("shipping");

    billing_log.log("invoice 42 issued");
    shipping_log.log("parcel 42 dispatched");
    // two instances, two histories, no single place to look
}
