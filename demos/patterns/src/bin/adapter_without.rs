//! The same print job without an adapter: call sites talk to the legacy
//! API directly and are stuck with its names forever.

struct LegacyPrinter;

impl LegacyPrinter {
    fn print_text(&self, text: &str) {
        println!("Printing from LegacyPrinter: {text}");
    }
}

fn main() {
    let printer = LegacyPrinter;
    printer.print_text("Hello, World!");
    printer.print_text("Second page");
}
