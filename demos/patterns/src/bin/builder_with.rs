//! Builder pattern: parts are named, ordered freely, and optional.

use motif_catalogue::builder::Computer;

fn main() {
    let workstation = Computer::builder()
        .cpu("Intel i9")
        .gpu("RTX 4090")
        .ram("64GB")
        .storage("2TB SSD")
        .build();
    println!("{}", workstation.summary());

    let office_box = Computer::builder().cpu("Ryzen 5").ram("16GB").build();
    println!("{}", office_box.summary());
}
