//! Adapter pattern: the legacy device slots in behind the interface the
//! call sites were written against.

use motif_catalogue::adapter::{LegacyPrinter, Printer, PrinterAdapter};

fn run_print_job(printer: &dyn Printer, text: &str) {
    println!("{}", printer.print(text));
}

fn main() {
    let adapter = PrinterAdapter::new(LegacyPrinter);
    run_print_job(&adapter, "Hello, World!");
    run_print_job(&adapter, "Second page");
}
