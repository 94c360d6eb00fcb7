//! The same computer without the builder pattern: a positional constructor.
//! Call sites must pass every part, in the right order, every time.

struct Computer {
    cpu: String,
    gpu: String,
    ram: String,
    storage: String,
}

impl Computer {
    fn new(cpu: &str, gpu: &str, ram: &str, storage: &str) -> Self {
        Self { cpu: cpu.into(), gpu: gpu.into(), ram: ram.into(), storage: storage.into() }
    }

    fn show(&self) {
        println!("Computer Configuration:");
        println!("CPU: {}", self.cpu);
        println!("GPU: {}", self.gpu);
        println!("RAM: {}", self.ram);
        println!("Storage: {}", self.storage);
    }
}

fn main() {
    let workstation = Computer::new("Intel i9", "RTX 4090", "64GB", "2TB SSD");
    workstation.show();

    // no GPU? the constructor still demands one, in the right slot
    let office_box = Computer::new("Ryzen 5", "none", "16GB", "none");
    office_box.show();
}
